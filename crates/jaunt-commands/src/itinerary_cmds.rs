//! Trip management commands, all run from the home screen.

use chrono::NaiveDate;

use jaunt_core::{
    Budget, Country, Days, Description, Itinerary, People, Planner, PlannerError, Stage,
    StageManager,
};

use crate::{CommandError, CommandResult, require_stage};

/// Replacement values for an itinerary edit; a `None` keeps the original
/// field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditItineraryFields {
    pub name: Option<Description>,
    pub country: Option<Country>,
    pub start_date: Option<NaiveDate>,
    pub days: Option<Days>,
    pub people: Option<People>,
    pub budget: Option<Budget>,
}

impl EditItineraryFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: Description) -> Self {
        self.name = Some(name);
        self
    }

    pub fn country(mut self, country: Country) -> Self {
        self.country = Some(country);
        self
    }

    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn days(mut self, days: Days) -> Self {
        self.days = Some(days);
        self
    }

    pub fn people(mut self, people: People) -> Self {
        self.people = Some(people);
        self
    }

    pub fn budget(mut self, budget: Budget) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.country.is_none()
            && self.start_date.is_none()
            && self.days.is_none()
            && self.people.is_none()
            && self.budget.is_none()
    }
}

/// Creates a trip.
pub fn run_add_itinerary(
    planner: &mut Planner,
    stages: &StageManager,
    itinerary: Itinerary,
) -> Result<CommandResult, CommandError> {
    require_stage(stages, Stage::Home)?;
    let feedback = format!("Added itinerary {}", itinerary.name());
    planner.add_itinerary(itinerary)?;
    Ok(CommandResult::new(feedback))
}

/// Applies an edit to the trip named `target`.
pub fn run_edit_itinerary(
    planner: &mut Planner,
    stages: &StageManager,
    target: &Description,
    fields: EditItineraryFields,
) -> Result<CommandResult, CommandError> {
    require_stage(stages, Stage::Home)?;
    if fields.is_empty() {
        return Err(CommandError::NoEdits);
    }

    // The rename is the only fallible step, so it goes first; everything
    // after it updates in place and cannot fail.
    let new_name = fields.name.clone();
    if let Some(name) = fields.name {
        planner.rename_itinerary(target, name)?;
    }
    let effective = new_name.as_ref().unwrap_or(target);
    let itinerary = planner
        .itinerary_mut(effective)
        .ok_or_else(|| PlannerError::ItineraryNotFound(effective.to_string()))?;
    if let Some(country) = fields.country {
        itinerary.set_country(country);
    }
    if let Some(start_date) = fields.start_date {
        itinerary.set_start_date(start_date);
    }
    if let Some(days) = fields.days {
        itinerary.set_days(days);
    }
    if let Some(people) = fields.people {
        itinerary.set_people(people);
    }
    if let Some(budget) = fields.budget {
        itinerary.set_budget(budget);
    }
    Ok(CommandResult::new(format!("Edited itinerary {effective}")))
}

/// Removes the trip named `target`.
pub fn run_delete_itinerary(
    planner: &mut Planner,
    stages: &StageManager,
    target: &Description,
) -> Result<CommandResult, CommandError> {
    require_stage(stages, Stage::Home)?;
    let removed = planner.remove_itinerary(target)?;
    Ok(CommandResult::new(format!(
        "Deleted itinerary {}",
        removed.name()
    )))
}

/// Opens the trip named `target` and moves to its activity list.
pub fn run_select(
    planner: &mut Planner,
    stages: &mut StageManager,
    target: &Description,
) -> Result<CommandResult, CommandError> {
    require_stage(stages, Stage::Home)?;
    planner.select(target)?;
    stages.set_itinerary_stage();
    Ok(CommandResult::new(format!("Opened itinerary {target}")))
}
