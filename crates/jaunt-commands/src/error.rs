//! Failures a command can report back to the user.

use thiserror::Error;

use jaunt_core::{ItineraryError, PlannerError, Stage};

/// Why a command refused to run or could not finish.
///
/// Model-level failures pass through unchanged; the command layer adds only
/// the failures it detects itself. Whatever the reason, the planner and the
/// stage machine are left exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The command ran on the wrong screen.
    #[error("this command needs the {required} screen, but the current screen is {current}")]
    WrongStage { required: Stage, current: Stage },

    /// An edit command was given nothing to change.
    #[error("nothing to edit: provide at least one field")]
    NoEdits,

    #[error(transparent)]
    Itinerary(#[from] ItineraryError),

    #[error(transparent)]
    Planner(#[from] PlannerError),
}
