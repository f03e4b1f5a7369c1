//! Navigation stages of the surrounding application.
//!
//! The model tracks which screen the user is on so commands can refuse to
//! run out of context. Transitions themselves are total: any stage may be
//! set from any other, and setting the current stage again is a no-op at
//! this level. Callers that want to tell the user "nothing happened" check
//! [`StageManager::is_current_stage`] first and skip the setter.
//!
//! ```text
//!   home <------> itinerary <------> planning
//!     ^                                  |
//!     +----------------------------------+
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One screen of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// The trip overview list. This is where a session starts.
    Home,
    /// A single trip, opened to its activity list.
    Itinerary,
    /// The day-planning view for the opened trip.
    Planning,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Home => "home",
            Stage::Itinerary => "itinerary",
            Stage::Planning => "planning",
        };
        f.write_str(name)
    }
}

/// Tracks the current [`Stage`].
///
/// Owned by the embedding application and passed into command execution
/// alongside the planner; nothing here is global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageManager {
    current: Stage,
}

impl StageManager {
    /// A fresh session, on the home screen.
    pub fn new() -> Self {
        Self {
            current: Stage::Home,
        }
    }

    pub fn current_stage(&self) -> Stage {
        self.current
    }

    pub fn is_current_stage(&self, stage: Stage) -> bool {
        self.current == stage
    }

    pub fn set_home_stage(&mut self) {
        self.set_stage(Stage::Home);
    }

    pub fn set_itinerary_stage(&mut self) {
        self.set_stage(Stage::Itinerary);
    }

    pub fn set_planning_stage(&mut self) {
        self.set_stage(Stage::Planning);
    }

    fn set_stage(&mut self, stage: Stage) {
        debug!(from = %self.current, to = %stage, "stage transition");
        self.current = stage;
    }
}

impl Default for StageManager {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_start_at_home() {
        let stages = StageManager::new();
        assert_eq!(stages.current_stage(), Stage::Home);
        assert!(stages.is_current_stage(Stage::Home));
        assert!(!stages.is_current_stage(Stage::Planning));
    }

    #[test]
    fn setters_move_between_stages() {
        let mut stages = StageManager::new();
        stages.set_itinerary_stage();
        assert_eq!(stages.current_stage(), Stage::Itinerary);
        stages.set_planning_stage();
        assert_eq!(stages.current_stage(), Stage::Planning);
        stages.set_home_stage();
        assert_eq!(stages.current_stage(), Stage::Home);
    }

    #[test]
    fn setting_the_current_stage_again_is_harmless() {
        let mut stages = StageManager::new();
        stages.set_home_stage();
        stages.set_home_stage();
        assert_eq!(stages.current_stage(), Stage::Home);
    }

    #[test]
    fn stages_render_lowercase_names() {
        assert_eq!(Stage::Home.to_string(), "home");
        assert_eq!(Stage::Itinerary.to_string(), "itinerary");
        assert_eq!(Stage::Planning.to_string(), "planning");
    }
}
