//! The home command: back to the trip overview from anywhere.

use jaunt_core::{Planner, Stage, StageManager};

use crate::{CommandError, CommandResult};

/// Feedback when the command actually navigates.
pub const HOME_SUCCESS: &str = "Returned to the home page";

/// Feedback when the user was on the home screen all along.
pub const ALREADY_HOME: &str = "Already on the home page";

/// Runs from any screen. Going home drops the open trip; asking for home
/// while already there reports that distinctly and touches nothing.
pub fn run_home(
    planner: &mut Planner,
    stages: &mut StageManager,
) -> Result<CommandResult, CommandError> {
    if stages.is_current_stage(Stage::Home) {
        return Ok(CommandResult::new(ALREADY_HOME));
    }
    planner.clear_selection();
    stages.set_home_stage();
    Ok(CommandResult::new(HOME_SUCCESS))
}
