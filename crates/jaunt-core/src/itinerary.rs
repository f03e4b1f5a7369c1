//! A trip: its metadata and the list of activities planned for it.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::fields::{Budget, Country, Days, Description, People};
use crate::item::Item;
use crate::text;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Raised by itinerary mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItineraryError {
    /// Adding or editing would leave two activities with the same
    /// description.
    #[error("an activity described {0:?} is already in this itinerary")]
    DuplicateItem(String),

    /// The targeted activity is not in the list.
    #[error("no activity described {0:?} in this itinerary")]
    ItemNotFound(String),
}

// ---------------------------------------------------------------------------
// Itinerary
// ---------------------------------------------------------------------------

/// One planned trip.
///
/// Activities keep the order they were added in; nothing here re-sorts the
/// list. The one structural rule is that no two activities share a
/// description, and every mutation either upholds it or fails without
/// changing anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ItineraryData")]
pub struct Itinerary {
    name: Description,
    country: Country,
    start_date: NaiveDate,
    days: Days,
    people: People,
    budget: Budget,
    items: Vec<Item>,
}

impl Itinerary {
    /// A new trip with no activities yet.
    pub fn new(
        name: Description,
        country: Country,
        start_date: NaiveDate,
        days: Days,
        people: People,
        budget: Budget,
    ) -> Self {
        Self {
            name,
            country,
            start_date,
            days,
            people,
            budget,
            items: Vec::new(),
        }
    }

    pub fn name(&self) -> &Description {
        &self.name
    }

    pub fn country(&self) -> &Country {
        &self.country
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn days(&self) -> Days {
        self.days
    }

    pub fn people(&self) -> People {
        self.people
    }

    pub fn budget(&self) -> Budget {
        self.budget
    }

    /// Last day of the trip, when it fits the calendar.
    pub fn end_date(&self) -> Option<NaiveDate> {
        let extra_days = u64::from(self.days.count().saturating_sub(1));
        self.start_date.checked_add_days(chrono::Days::new(extra_days))
    }

    /// Whether `other` names the same trip. Trip identity follows the same
    /// rule as activity identity: the name decides, nothing else.
    pub fn same_identity(&self, other: &Itinerary) -> bool {
        self.name == other.name
    }

    // -----------------------------------------------------------------------
    // Metadata edits
    // -----------------------------------------------------------------------

    // The name has no public setter: renames go through the planner, which
    // owns the uniqueness check across trips.
    pub(crate) fn rename(&mut self, name: Description) {
        self.name = name;
    }

    pub fn set_country(&mut self, country: Country) {
        self.country = country;
    }

    pub fn set_start_date(&mut self, start_date: NaiveDate) {
        self.start_date = start_date;
    }

    pub fn set_days(&mut self, days: Days) {
        self.days = days;
    }

    pub fn set_people(&mut self, people: People) {
        self.people = people;
    }

    pub fn set_budget(&mut self, budget: Budget) {
        self.budget = budget;
    }

    // -----------------------------------------------------------------------
    // Activities
    // -----------------------------------------------------------------------

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find_item(&self, target: &Description) -> Option<&Item> {
        self.items.iter().find(|item| item.description() == target)
    }

    /// Whether an activity with `item`'s identity is already listed.
    pub fn contains(&self, item: &Item) -> bool {
        self.items.iter().any(|existing| existing.same_identity(item))
    }

    /// Appends an activity to the end of the list.
    pub fn add_item(&mut self, item: Item) -> Result<(), ItineraryError> {
        if self.contains(&item) {
            return Err(ItineraryError::DuplicateItem(
                item.description().to_string(),
            ));
        }
        debug!(trip = %self.name, activity = %item.description(), "activity added");
        self.items.push(item);
        Ok(())
    }

    /// Replaces the activity identified by `target` with `edited`, keeping
    /// its position in the list.
    ///
    /// The edit may change the description, but not to one another activity
    /// already uses.
    pub fn set_item(&mut self, target: &Description, edited: Item) -> Result<(), ItineraryError> {
        let index = self
            .position(target)
            .ok_or_else(|| ItineraryError::ItemNotFound(target.to_string()))?;
        let collides = self
            .items
            .iter()
            .enumerate()
            .any(|(i, existing)| i != index && existing.same_identity(&edited));
        if collides {
            return Err(ItineraryError::DuplicateItem(
                edited.description().to_string(),
            ));
        }
        debug!(trip = %self.name, activity = %target, "activity replaced");
        self.items[index] = edited;
        Ok(())
    }

    /// Removes and returns the activity identified by `target`.
    pub fn remove_item(&mut self, target: &Description) -> Result<Item, ItineraryError> {
        let index = self
            .position(target)
            .ok_or_else(|| ItineraryError::ItemNotFound(target.to_string()))?;
        debug!(trip = %self.name, activity = %target, "activity removed");
        Ok(self.items.remove(index))
    }

    /// Gives the activity identified by `target` a start time in the day
    /// plan.
    pub fn schedule_item(
        &mut self,
        target: &Description,
        start_time: NaiveTime,
    ) -> Result<(), ItineraryError> {
        let item = self
            .item_mut(target)
            .ok_or_else(|| ItineraryError::ItemNotFound(target.to_string()))?;
        item.set_start_time(start_time);
        debug!(trip = %self.name, activity = %target, start = %start_time.format("%H:%M"), "activity scheduled");
        Ok(())
    }

    /// Clears the start time of the activity identified by `target`.
    pub fn unschedule_item(&mut self, target: &Description) -> Result<(), ItineraryError> {
        let item = self
            .item_mut(target)
            .ok_or_else(|| ItineraryError::ItemNotFound(target.to_string()))?;
        item.reset_start_time();
        debug!(trip = %self.name, activity = %target, "activity unscheduled");
        Ok(())
    }

    fn position(&self, target: &Description) -> Option<usize> {
        self.items.iter().position(|item| item.description() == target)
    }

    fn item_mut(&mut self, target: &Description) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.description() == target)
    }
}

/// Wire shape of [`Itinerary`]. Deserializing rebuilds the trip through
/// [`Itinerary::add_item`], so stored data faces the same duplicate rule as
/// live edits.
#[derive(Deserialize)]
struct ItineraryData {
    name: Description,
    country: Country,
    start_date: NaiveDate,
    days: Days,
    people: People,
    budget: Budget,
    items: Vec<Item>,
}

impl TryFrom<ItineraryData> for Itinerary {
    type Error = ItineraryError;

    fn try_from(data: ItineraryData) -> Result<Self, Self::Error> {
        let mut itinerary = Itinerary::new(
            data.name,
            data.country,
            data.start_date,
            data.days,
            data.people,
            data.budget,
        );
        for item in data.items {
            itinerary.add_item(item)?;
        }
        Ok(itinerary)
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        let dates = match self.end_date() {
            Some(end) => format!("Dates: {} to {}", self.start_date, end),
            None => format!("Dates: {}", self.start_date),
        };
        for line in [
            format!("Country: {}", self.country),
            dates,
            format!("People: {}", self.people),
            format!("Budget: ${}", self.budget),
        ] {
            writeln!(f, "{}", text::indent(&line, text::INDENT_STEP))?;
        }
        write!(f, "{}", text::indent("Day plan:", text::INDENT_STEP))?;
        for item in &self.items {
            write!(
                f,
                "\n{}",
                text::indent(&item.to_string(), text::INDENT_STEP)
            )?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
