//! Day-planning commands: entering the plan view and placing activities.

use chrono::NaiveTime;

use jaunt_core::{Description, Planner, PlannerError, Stage, StageManager};

use crate::{CommandError, CommandResult, open_itinerary_mut, require_stage};

/// Moves from the open trip's activity list to its day-plan view.
pub fn run_plan(
    planner: &mut Planner,
    stages: &mut StageManager,
) -> Result<CommandResult, CommandError> {
    require_stage(stages, Stage::Itinerary)?;
    let name = planner
        .selected_itinerary()
        .ok_or(PlannerError::NothingSelected)?
        .name()
        .clone();
    stages.set_planning_stage();
    Ok(CommandResult::new(format!("Planning {name}")))
}

/// Gives the activity described by `target` a start time in the day plan.
pub fn run_schedule_item(
    planner: &mut Planner,
    stages: &StageManager,
    target: &Description,
    start_time: NaiveTime,
) -> Result<CommandResult, CommandError> {
    require_stage(stages, Stage::Planning)?;
    let itinerary = open_itinerary_mut(planner)?;
    itinerary.schedule_item(target, start_time)?;
    Ok(CommandResult::new(format!(
        "Scheduled {target} at {}",
        start_time.format("%H:%M")
    )))
}

/// Clears the start time of the activity described by `target`.
pub fn run_unschedule_item(
    planner: &mut Planner,
    stages: &StageManager,
    target: &Description,
) -> Result<CommandResult, CommandError> {
    require_stage(stages, Stage::Planning)?;
    let itinerary = open_itinerary_mut(planner)?;
    itinerary.unschedule_item(target)?;
    Ok(CommandResult::new(format!("Unscheduled {target}")))
}
