//! The model root: every trip the user plans, plus the current selection.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::fields::Description;
use crate::itinerary::Itinerary;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Raised by planner-level mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    /// Adding or renaming would leave two trips with the same name.
    #[error("an itinerary named {0:?} already exists")]
    DuplicateItinerary(String),

    /// The targeted trip is not in the planner.
    #[error("no itinerary named {0:?}")]
    ItineraryNotFound(String),

    /// The operation needs an open trip, but none is selected.
    #[error("no itinerary is selected")]
    NothingSelected,
}

// ---------------------------------------------------------------------------
// Planner
// ---------------------------------------------------------------------------

/// Holds every trip in memory, in the order they were created.
///
/// Trip names are unique under the same policy activities use within one
/// trip. At most one trip is selected at a time; the selection is what item
/// and scheduling operations work against, and it does not survive
/// serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlannerData")]
pub struct Planner {
    itineraries: Vec<Itinerary>,
    #[serde(skip)]
    selected: Option<usize>,
}

impl Planner {
    /// An empty planner with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn itineraries(&self) -> &[Itinerary] {
        &self.itineraries
    }

    pub fn len(&self) -> usize {
        self.itineraries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itineraries.is_empty()
    }

    pub fn find_itinerary(&self, target: &Description) -> Option<&Itinerary> {
        self.itineraries
            .iter()
            .find(|itinerary| itinerary.name() == target)
    }

    /// Whether a trip with `itinerary`'s identity is already present.
    pub fn contains(&self, itinerary: &Itinerary) -> bool {
        self.itineraries
            .iter()
            .any(|existing| existing.same_identity(itinerary))
    }

    /// Appends a trip to the end of the list.
    pub fn add_itinerary(&mut self, itinerary: Itinerary) -> Result<(), PlannerError> {
        if self.contains(&itinerary) {
            return Err(PlannerError::DuplicateItinerary(
                itinerary.name().to_string(),
            ));
        }
        debug!(trip = %itinerary.name(), "itinerary added");
        self.itineraries.push(itinerary);
        Ok(())
    }

    /// Removes and returns the trip named `target`.
    ///
    /// If the removed trip was selected, the selection is cleared.
    pub fn remove_itinerary(&mut self, target: &Description) -> Result<Itinerary, PlannerError> {
        let index = self
            .position(target)
            .ok_or_else(|| PlannerError::ItineraryNotFound(target.to_string()))?;
        match self.selected {
            Some(selected) if selected == index => self.selected = None,
            Some(selected) if selected > index => self.selected = Some(selected - 1),
            _ => {}
        }
        debug!(trip = %target, "itinerary removed");
        Ok(self.itineraries.remove(index))
    }

    /// Gives the trip named `target` a new name, keeping it unique across
    /// the planner.
    pub fn rename_itinerary(
        &mut self,
        target: &Description,
        name: Description,
    ) -> Result<(), PlannerError> {
        let index = self
            .position(target)
            .ok_or_else(|| PlannerError::ItineraryNotFound(target.to_string()))?;
        let collides = self
            .itineraries
            .iter()
            .enumerate()
            .any(|(i, existing)| i != index && *existing.name() == name);
        if collides {
            return Err(PlannerError::DuplicateItinerary(name.to_string()));
        }
        debug!(from = %target, to = %name, "itinerary renamed");
        self.itineraries[index].rename(name);
        Ok(())
    }

    /// Mutable access to the trip named `target`, for in-place edits.
    pub fn itinerary_mut(&mut self, target: &Description) -> Option<&mut Itinerary> {
        self.itineraries
            .iter_mut()
            .find(|itinerary| itinerary.name() == target)
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Opens the trip named `target` for item and scheduling work.
    pub fn select(&mut self, target: &Description) -> Result<(), PlannerError> {
        let index = self
            .position(target)
            .ok_or_else(|| PlannerError::ItineraryNotFound(target.to_string()))?;
        debug!(trip = %target, "itinerary selected");
        self.selected = Some(index);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_itinerary(&self) -> Option<&Itinerary> {
        self.itineraries.get(self.selected?)
    }

    pub fn selected_itinerary_mut(&mut self) -> Option<&mut Itinerary> {
        let index = self.selected?;
        self.itineraries.get_mut(index)
    }

    fn position(&self, target: &Description) -> Option<usize> {
        self.itineraries
            .iter()
            .position(|itinerary| itinerary.name() == target)
    }
}

/// Wire shape of [`Planner`]. Deserializing rebuilds the list through
/// [`Planner::add_itinerary`], so stored data faces the same name
/// uniqueness rule as live edits.
#[derive(Deserialize)]
struct PlannerData {
    itineraries: Vec<Itinerary>,
}

impl TryFrom<PlannerData> for Planner {
    type Error = PlannerError;

    fn try_from(data: PlannerData) -> Result<Self, Self::Error> {
        let mut planner = Planner::new();
        for itinerary in data.itineraries {
            planner.add_itinerary(itinerary)?;
        }
        Ok(planner)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
