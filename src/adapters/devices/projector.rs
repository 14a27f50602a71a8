use crate::adapters::announcer::StdoutAnnouncer;
use crate::domain::ports::{Announcer, Projector};

/// Keeps no power state: `turn_on` may be called any number of times and
/// `display_video` does not check it.
#[derive(Debug, Clone, Default)]
pub struct ConsoleProjector<A: Announcer = StdoutAnnouncer> {
    announcer: A,
}

impl<A: Announcer> ConsoleProjector<A> {
    pub fn new(announcer: A) -> Self {
        Self { announcer }
    }
}

impl<A: Announcer> Projector for ConsoleProjector<A> {
    fn turn_on(&self) {
        tracing::debug!("Turning projector on");
        self.announcer.announce("Projector turned on.");
    }

    fn display_video(&self, name: &str) {
        tracing::debug!("Projecting {:?}", name);
        self.announcer
            .announce(&format!("{} projecting on the screen.", name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingAnnouncer;

    #[test]
    fn test_turn_on_twice_reports_twice() {
        let announcer = RecordingAnnouncer::new();
        let projector = ConsoleProjector::new(announcer.clone());

        projector.turn_on();
        projector.turn_on();

        assert_eq!(
            announcer.lines(),
            vec!["Projector turned on.", "Projector turned on."]
        );
    }

    #[test]
    fn test_display_video_without_turn_on() {
        let announcer = RecordingAnnouncer::new();
        let projector = ConsoleProjector::new(announcer.clone());

        projector.display_video("Heat");

        assert_eq!(announcer.lines(), vec!["Heat projecting on the screen."]);
    }
}
