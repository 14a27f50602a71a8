use crate::adapters::announcer::StdoutAnnouncer;
use crate::domain::ports::{Announcer, PopcornPopper};

#[derive(Debug, Clone, Default)]
pub struct ConsolePopcornPopper<A: Announcer = StdoutAnnouncer> {
    announcer: A,
}

impl<A: Announcer> ConsolePopcornPopper<A> {
    pub fn new(announcer: A) -> Self {
        Self { announcer }
    }
}

impl<A: Announcer> PopcornPopper for ConsolePopcornPopper<A> {
    fn make_popcorn(&self) {
        tracing::debug!("Popping popcorn");
        self.announcer.announce("Making popcorn.");
    }
}
