// Adapters layer: concrete implementations of the domain ports.

pub mod announcer;
pub mod devices;

pub use announcer::StdoutAnnouncer;
pub use devices::{ConsoleAmplifier, ConsoleDvdPlayer, ConsolePopcornPopper, ConsoleProjector};
