use crate::adapters::announcer::StdoutAnnouncer;
use crate::domain::ports::{Announcer, DvdPlayer};

#[derive(Debug, Clone, Default)]
pub struct ConsoleDvdPlayer<A: Announcer = StdoutAnnouncer> {
    announcer: A,
}

impl<A: Announcer> ConsoleDvdPlayer<A> {
    pub fn new(announcer: A) -> Self {
        Self { announcer }
    }
}

impl<A: Announcer> DvdPlayer for ConsoleDvdPlayer<A> {
    fn insert_dvd(&self, name: &str) {
        tracing::debug!("Inserting DVD {:?}", name);
        self.announcer
            .announce(&format!("DVD inserted. Movie name: {}", name));
    }
}
