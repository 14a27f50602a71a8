//! Observation hooks for exercising the facade without a terminal.
//!
//! - [`RecordingAnnouncer`] captures the lines the console devices print.
//! - [`CallLog`] plus the `Spy*` subsystems record which capability calls
//!   were made, in order, and with which argument.
//!
//! Handles are cheap clones sharing one buffer, so a test keeps a clone
//! while the facade owns the subsystem.
//!
//! ```
//! use home_theater::testing::{CallLog, SpyAmplifier, SpyDvdPlayer, SpyPopcornPopper, SpyProjector};
//! use home_theater::{HomeTheaterSystem, WATCH_MOVIE_STEPS};
//!
//! let log = CallLog::new();
//! let theater = HomeTheaterSystem::new(
//!     SpyProjector::new(log.clone()),
//!     SpyDvdPlayer::new(log.clone()),
//!     SpyAmplifier::new(log.clone()),
//!     SpyPopcornPopper::new(log.clone()),
//! );
//!
//! theater.watch_movie("DUNE");
//! assert_eq!(log.steps(), WATCH_MOVIE_STEPS.to_vec());
//! ```

use crate::domain::model::{TheaterStep, DEFAULT_VOLUME};
use crate::domain::ports::{Amplifier, Announcer, DvdPlayer, PopcornPopper, Projector};
use std::cell::RefCell;
use std::rc::Rc;

/// Announcer that keeps every line in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingAnnouncer {
    lines: Rc<RefCell<Vec<String>>>,
}

impl RecordingAnnouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl Announcer for RecordingAnnouncer {
    fn announce(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub step: TheaterStep,
    pub argument: Option<String>,
}

/// Ordered record of capability calls, shared by all spies of one test.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<RecordedCall>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, step: TheaterStep, argument: Option<&str>) {
        self.calls.borrow_mut().push(RecordedCall {
            step,
            argument: argument.map(str::to_string),
        });
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    pub fn steps(&self) -> Vec<TheaterStep> {
        self.calls.borrow().iter().map(|call| call.step).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }
}

/// Amplifier spy. Volume changes are not facade steps, so they are kept
/// but not logged.
#[derive(Debug, Clone)]
pub struct SpyAmplifier {
    log: CallLog,
    volume: i32,
}

impl SpyAmplifier {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            volume: DEFAULT_VOLUME,
        }
    }

    pub fn volume(&self) -> i32 {
        self.volume
    }
}

impl Amplifier for SpyAmplifier {
    fn default_volume(&self) {
        self.log.record(TheaterStep::DefaultVolume, None);
    }

    fn volume_up(&mut self, amount: i32) {
        self.volume = amount;
    }

    fn volume_down(&mut self, amount: i32) {
        self.volume = amount;
    }
}

#[derive(Debug, Clone)]
pub struct SpyDvdPlayer {
    log: CallLog,
}

impl SpyDvdPlayer {
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl DvdPlayer for SpyDvdPlayer {
    fn insert_dvd(&self, name: &str) {
        self.log.record(TheaterStep::InsertDvd, Some(name));
    }
}

#[derive(Debug, Clone)]
pub struct SpyProjector {
    log: CallLog,
}

impl SpyProjector {
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl Projector for SpyProjector {
    fn turn_on(&self) {
        self.log.record(TheaterStep::TurnOn, None);
    }

    fn display_video(&self, name: &str) {
        self.log.record(TheaterStep::DisplayVideo, Some(name));
    }
}

#[derive(Debug, Clone)]
pub struct SpyPopcornPopper {
    log: CallLog,
}

impl SpyPopcornPopper {
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl PopcornPopper for SpyPopcornPopper {
    fn make_popcorn(&self) {
        self.log.record(TheaterStep::MakePopcorn, None);
    }
}
