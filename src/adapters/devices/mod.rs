// Print-stub subsystems. Each one reports through an `Announcer`.

pub mod amplifier;
pub mod dvd_player;
pub mod popcorn_popper;
pub mod projector;

pub use amplifier::ConsoleAmplifier;
pub use dvd_player::ConsoleDvdPlayer;
pub use popcorn_popper::ConsolePopcornPopper;
pub use projector::ConsoleProjector;
