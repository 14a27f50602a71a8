use serde::{Deserialize, Serialize};
use std::fmt;

/// Volume a freshly built amplifier starts at.
pub const DEFAULT_VOLUME: i32 = 10;

/// Title played when the caller does not pick one.
pub const DEFAULT_TITLE: &str = "DUNE";

/// One subsystem call made by the facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TheaterStep {
    MakePopcorn,
    InsertDvd,
    DefaultVolume,
    TurnOn,
    DisplayVideo,
}

impl TheaterStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            TheaterStep::MakePopcorn => "make_popcorn",
            TheaterStep::InsertDvd => "insert_dvd",
            TheaterStep::DefaultVolume => "default_volume",
            TheaterStep::TurnOn => "turn_on",
            TheaterStep::DisplayVideo => "display_video",
        }
    }
}

impl fmt::Display for TheaterStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order in which `watch_movie` drives the subsystems. Nothing downstream
/// enforces it, so the facade must follow it exactly.
pub const WATCH_MOVIE_STEPS: [TheaterStep; 5] = [
    TheaterStep::MakePopcorn,
    TheaterStep::InsertDvd,
    TheaterStep::DefaultVolume,
    TheaterStep::TurnOn,
    TheaterStep::DisplayVideo,
];

/// What `watch_movie` would do for a given title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoviePlan {
    pub title: String,
    pub steps: Vec<TheaterStep>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_serialize_as_snake_case() {
        let json = serde_json::to_string(&WATCH_MOVIE_STEPS).unwrap();
        assert_eq!(
            json,
            r#"["make_popcorn","insert_dvd","default_volume","turn_on","display_video"]"#
        );
    }

    #[test]
    fn test_display_matches_serialized_name() {
        for step in WATCH_MOVIE_STEPS {
            let json = serde_json::to_string(&step).unwrap();
            assert_eq!(json, format!("\"{}\"", step));
        }
    }
}
