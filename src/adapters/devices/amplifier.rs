use crate::adapters::announcer::StdoutAnnouncer;
use crate::domain::model::DEFAULT_VOLUME;
use crate::domain::ports::{Amplifier, Announcer};

#[derive(Debug, Clone)]
pub struct ConsoleAmplifier<A: Announcer = StdoutAnnouncer> {
    announcer: A,
    volume: i32,
}

impl<A: Announcer> ConsoleAmplifier<A> {
    pub fn new(announcer: A) -> Self {
        Self::with_volume(announcer, DEFAULT_VOLUME)
    }

    /// Starts at `volume` without announcing anything.
    pub fn with_volume(announcer: A, volume: i32) -> Self {
        Self { announcer, volume }
    }
}

impl Default for ConsoleAmplifier<StdoutAnnouncer> {
    fn default() -> Self {
        Self::new(StdoutAnnouncer)
    }
}

impl<A: Announcer> Amplifier for ConsoleAmplifier<A> {
    fn default_volume(&self) {
        tracing::debug!("Reporting amplifier volume {}", self.volume);
        self.announcer
            .announce(&format!("Volume set to: {}!", self.volume));
    }

    fn volume_up(&mut self, amount: i32) {
        tracing::debug!("Amplifier volume {} -> {}", self.volume, amount);
        self.volume = amount;
        self.announcer.announce(&format!("Volume up by: {}", amount));
    }

    fn volume_down(&mut self, amount: i32) {
        tracing::debug!("Amplifier volume {} -> {}", self.volume, amount);
        self.volume = amount;
        self.announcer
            .announce(&format!("Volume down by: {}", amount));
    }
}
