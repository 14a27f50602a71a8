pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod testing;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{
    ConsoleAmplifier, ConsoleDvdPlayer, ConsolePopcornPopper, ConsoleProjector, StdoutAnnouncer,
};
pub use crate::core::theater::HomeTheaterSystem;
pub use domain::model::{MoviePlan, TheaterStep, DEFAULT_TITLE, DEFAULT_VOLUME, WATCH_MOVIE_STEPS};
pub use domain::ports::{Amplifier, Announcer, DvdPlayer, PopcornPopper, Projector};
pub use utils::error::{Result, TheaterError};
