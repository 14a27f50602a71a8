pub mod theater;

pub use crate::domain::model::{MoviePlan, TheaterStep, WATCH_MOVIE_STEPS};
pub use crate::domain::ports::{Amplifier, Announcer, DvdPlayer, PopcornPopper, Projector};
