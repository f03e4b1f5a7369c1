//! Activity commands, run with a trip open on the itinerary screen.

use jaunt_core::{
    Cost, Description, Duration, Item, ItineraryError, Planner, Priority, Stage, StageManager,
};

use crate::{CommandError, CommandResult, open_itinerary_mut, require_stage};

/// Replacement values for an activity edit; a `None` keeps the original
/// field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditItemFields {
    pub description: Option<Description>,
    pub priority: Option<Priority>,
    pub cost: Option<Cost>,
    pub duration: Option<Duration>,
}

impl EditItemFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: Description) -> Self {
        self.description = Some(description);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn cost(mut self, cost: Cost) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.priority.is_none()
            && self.cost.is_none()
            && self.duration.is_none()
    }

    /// The edited activity: the given fields replace the original's, and
    /// whatever schedule the original had carries over.
    fn applied_to(&self, original: &Item) -> Item {
        let mut edited = Item::new(
            self.description
                .clone()
                .unwrap_or_else(|| original.description().clone()),
            self.priority.unwrap_or(original.priority()),
            self.cost.unwrap_or(original.cost()),
            self.duration.or(original.duration()),
        );
        if let Some(start_time) = original.start_time() {
            edited.set_start_time(start_time);
        }
        edited
    }
}

/// Adds an activity to the open trip.
pub fn run_add_item(
    planner: &mut Planner,
    stages: &StageManager,
    item: Item,
) -> Result<CommandResult, CommandError> {
    require_stage(stages, Stage::Itinerary)?;
    let itinerary = open_itinerary_mut(planner)?;
    let feedback = format!("Added activity {}", item.description());
    itinerary.add_item(item)?;
    Ok(CommandResult::new(feedback))
}

/// Applies an edit to the activity described by `target` in the open trip.
pub fn run_edit_item(
    planner: &mut Planner,
    stages: &StageManager,
    target: &Description,
    fields: EditItemFields,
) -> Result<CommandResult, CommandError> {
    require_stage(stages, Stage::Itinerary)?;
    if fields.is_empty() {
        return Err(CommandError::NoEdits);
    }
    let itinerary = open_itinerary_mut(planner)?;
    let original = itinerary
        .find_item(target)
        .ok_or_else(|| ItineraryError::ItemNotFound(target.to_string()))?;
    let edited = fields.applied_to(original);
    let feedback = format!("Edited activity {}", edited.description());
    itinerary.set_item(target, edited)?;
    Ok(CommandResult::new(feedback))
}

/// Removes the activity described by `target` from the open trip.
pub fn run_delete_item(
    planner: &mut Planner,
    stages: &StageManager,
    target: &Description,
) -> Result<CommandResult, CommandError> {
    require_stage(stages, Stage::Itinerary)?;
    let itinerary = open_itinerary_mut(planner)?;
    let removed = itinerary.remove_item(target)?;
    Ok(CommandResult::new(format!(
        "Deleted activity {}",
        removed.description()
    )))
}
