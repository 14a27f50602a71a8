use crate::core::{Amplifier, DvdPlayer, MoviePlan, PopcornPopper, Projector, WATCH_MOVIE_STEPS};

/// One-call front for the home theater subsystems.
///
/// The facade owns its four subsystems for its whole lifetime and never
/// swaps them out. Subsystems do not know about each other; all ordering
/// lives in [`HomeTheaterSystem::watch_movie`].
pub struct HomeTheaterSystem<P: Projector, D: DvdPlayer, A: Amplifier, C: PopcornPopper> {
    projector: P,
    dvd_player: D,
    amplifier: A,
    popcorn_popper: C,
}

impl<P: Projector, D: DvdPlayer, A: Amplifier, C: PopcornPopper> HomeTheaterSystem<P, D, A, C> {
    pub fn new(projector: P, dvd_player: D, amplifier: A, popcorn_popper: C) -> Self {
        Self {
            projector,
            dvd_player,
            amplifier,
            popcorn_popper,
        }
    }

    /// Runs the movie choreography. `name` goes to the DVD player and the
    /// projector as given, empty or not.
    pub fn watch_movie(&self, name: &str) {
        let span = tracing::info_span!("watch_movie", title = name);
        let _enter = span.enter();

        tracing::debug!("Starting choreography: {:?}", WATCH_MOVIE_STEPS);

        self.popcorn_popper.make_popcorn();
        self.dvd_player.insert_dvd(name);
        self.amplifier.default_volume();
        self.projector.turn_on();
        self.projector.display_video(name);

        tracing::debug!("Choreography finished");
    }

    /// Describes what [`watch_movie`](Self::watch_movie) would do, without
    /// touching any subsystem.
    pub fn plan(&self, name: &str) -> MoviePlan {
        MoviePlan {
            title: name.to_string(),
            steps: WATCH_MOVIE_STEPS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{ConsoleAmplifier, ConsoleDvdPlayer, ConsolePopcornPopper, ConsoleProjector};
    use crate::core::TheaterStep;
    use crate::testing::{
        CallLog, RecordedCall, RecordingAnnouncer, SpyAmplifier, SpyDvdPlayer, SpyPopcornPopper,
        SpyProjector,
    };

    fn spy_theater(
        log: &CallLog,
    ) -> HomeTheaterSystem<SpyProjector, SpyDvdPlayer, SpyAmplifier, SpyPopcornPopper> {
        HomeTheaterSystem::new(
            SpyProjector::new(log.clone()),
            SpyDvdPlayer::new(log.clone()),
            SpyAmplifier::new(log.clone()),
            SpyPopcornPopper::new(log.clone()),
        )
    }

    #[test]
    fn test_watch_movie_calls_subsystems_in_order() {
        let log = CallLog::new();
        let theater = spy_theater(&log);

        theater.watch_movie("DUNE");

        assert_eq!(
            log.steps(),
            vec![
                TheaterStep::MakePopcorn,
                TheaterStep::InsertDvd,
                TheaterStep::DefaultVolume,
                TheaterStep::TurnOn,
                TheaterStep::DisplayVideo,
            ]
        );
    }

    #[test]
    fn test_watch_movie_passes_title_unchanged() {
        let log = CallLog::new();
        let theater = spy_theater(&log);

        theater.watch_movie("  The Thing (1982)  ");

        let with_argument: Vec<RecordedCall> = log
            .calls()
            .into_iter()
            .filter(|call| call.argument.is_some())
            .collect();
        assert_eq!(with_argument.len(), 2);
        assert_eq!(with_argument[0].step, TheaterStep::InsertDvd);
        assert_eq!(with_argument[1].step, TheaterStep::DisplayVideo);
        for call in with_argument {
            assert_eq!(call.argument.as_deref(), Some("  The Thing (1982)  "));
        }
    }

    #[test]
    fn test_plan_does_not_touch_subsystems() {
        let log = CallLog::new();
        let theater = spy_theater(&log);

        let plan = theater.plan("Arrival");

        assert_eq!(plan.title, "Arrival");
        assert_eq!(plan.steps, WATCH_MOVIE_STEPS.to_vec());
        assert!(log.is_empty());
    }

    #[test]
    fn test_watch_movie_with_console_devices() {
        let announcer = RecordingAnnouncer::new();
        let theater = HomeTheaterSystem::new(
            ConsoleProjector::new(announcer.clone()),
            ConsoleDvdPlayer::new(announcer.clone()),
            ConsoleAmplifier::new(announcer.clone()),
            ConsolePopcornPopper::new(announcer.clone()),
        );

        theater.watch_movie("DUNE");

        assert_eq!(
            announcer.lines(),
            vec![
                "Making popcorn.",
                "DVD inserted. Movie name: DUNE",
                "Volume set to: 10!",
                "Projector turned on.",
                "DUNE projecting on the screen.",
            ]
        );
    }
}
