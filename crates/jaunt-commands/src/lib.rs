//! Typed command layer for the jaunt planner.
//!
//! A [`Command`] is a fully-parsed user action; whatever grammar or UI the
//! embedding application speaks, it ends up constructing one of these and
//! handing it to [`dispatch`] together with the model. Execution returns
//! user-facing feedback on success and a [`CommandError`] on failure, and a
//! failed command never leaves a partial change behind.
//!
//! Commands are gated by screen: trip management happens on the home
//! screen, activity edits on an opened trip, scheduling in the day-plan
//! view. Running a command on the wrong screen fails with
//! [`CommandError::WrongStage`] before anything is touched.

use std::fmt;

use chrono::NaiveTime;

use jaunt_core::{Description, Item, Itinerary, Planner, PlannerError, Stage, StageManager};

mod error;
mod home_cmd;
mod item_cmds;
mod itinerary_cmds;
mod schedule_cmds;

pub use error::CommandError;
pub use home_cmd::{ALREADY_HOME, HOME_SUCCESS};
pub use item_cmds::EditItemFields;
pub use itinerary_cmds::EditItineraryFields;

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// A fully-parsed user action, ready to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Go back to the home screen, dropping any open trip.
    Home,
    /// Create a new trip. Home screen only.
    AddItinerary(Itinerary),
    /// Change some fields of the trip named `target`. Home screen only.
    EditItinerary {
        target: Description,
        fields: EditItineraryFields,
    },
    /// Remove the trip named `target`. Home screen only.
    DeleteItinerary { target: Description },
    /// Open the trip named `target`, moving to its activity list.
    Select { target: Description },
    /// Add an activity to the open trip.
    AddItem(Item),
    /// Change some fields of the activity described by `target`.
    EditItem {
        target: Description,
        fields: EditItemFields,
    },
    /// Remove the activity described by `target` from the open trip.
    DeleteItem { target: Description },
    /// Move from the open trip's activity list to its day-plan view.
    Plan,
    /// Give an activity a start time in the day plan.
    ScheduleItem {
        target: Description,
        start_time: NaiveTime,
    },
    /// Clear an activity's start time.
    UnscheduleItem { target: Description },
}

/// User-facing outcome of a command that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    feedback: String,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
        }
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.feedback)
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Executes one command against the model.
pub fn dispatch(
    command: Command,
    planner: &mut Planner,
    stages: &mut StageManager,
) -> Result<CommandResult, CommandError> {
    tracing::debug!(?command, stage = %stages.current_stage(), "executing command");
    match command {
        Command::Home => home_cmd::run_home(planner, stages),
        Command::AddItinerary(itinerary) => {
            itinerary_cmds::run_add_itinerary(planner, stages, itinerary)
        }
        Command::EditItinerary { target, fields } => {
            itinerary_cmds::run_edit_itinerary(planner, stages, &target, fields)
        }
        Command::DeleteItinerary { target } => {
            itinerary_cmds::run_delete_itinerary(planner, stages, &target)
        }
        Command::Select { target } => itinerary_cmds::run_select(planner, stages, &target),
        Command::AddItem(item) => item_cmds::run_add_item(planner, stages, item),
        Command::EditItem { target, fields } => {
            item_cmds::run_edit_item(planner, stages, &target, fields)
        }
        Command::DeleteItem { target } => item_cmds::run_delete_item(planner, stages, &target),
        Command::Plan => schedule_cmds::run_plan(planner, stages),
        Command::ScheduleItem { target, start_time } => {
            schedule_cmds::run_schedule_item(planner, stages, &target, start_time)
        }
        Command::UnscheduleItem { target } => {
            schedule_cmds::run_unschedule_item(planner, stages, &target)
        }
    }
}

/// Fails with [`CommandError::WrongStage`] unless the user is on `required`.
pub(crate) fn require_stage(stages: &StageManager, required: Stage) -> Result<(), CommandError> {
    if !stages.is_current_stage(required) {
        return Err(CommandError::WrongStage {
            required,
            current: stages.current_stage(),
        });
    }
    Ok(())
}

/// The open trip, for commands that work inside one.
pub(crate) fn open_itinerary_mut(planner: &mut Planner) -> Result<&mut Itinerary, CommandError> {
    planner
        .selected_itinerary_mut()
        .ok_or(CommandError::Planner(PlannerError::NothingSelected))
}
