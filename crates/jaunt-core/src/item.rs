//! A single schedulable activity and its day-plan arithmetic.

use std::fmt;

use chrono::{NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::fields::{Cost, Description, Duration, Priority};
use crate::text;

/// Last minute representable in a day plan, used when an activity would run
/// past midnight.
const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_opt(23, 59, 0) {
    Some(time) => time,
    None => unreachable!(),
};

/// One activity within a trip.
///
/// The descriptive fields are fixed at construction. Scheduling happens
/// afterwards, by giving the item a start time or taking it away again; an
/// unscheduled item simply has no start time. The end time exists only once
/// both a start time and a duration are known.
///
/// Identity is the description alone: two items with the same description
/// are the same activity no matter how their other fields differ. Full
/// equality, by contrast, compares every field including the start time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    description: Description,
    priority: Priority,
    cost: Cost,
    duration: Option<Duration>,
    start_time: Option<NaiveTime>,
}

impl Item {
    /// A new, unscheduled item.
    pub fn new(
        description: Description,
        priority: Priority,
        cost: Cost,
        duration: Option<Duration>,
    ) -> Self {
        Self {
            description,
            priority,
            cost,
            duration,
            start_time: None,
        }
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    pub fn start_time(&self) -> Option<NaiveTime> {
        self.start_time
    }

    /// Places the item in the day plan at `start_time`.
    pub fn set_start_time(&mut self, start_time: NaiveTime) {
        self.start_time = Some(start_time);
    }

    /// Takes the item back out of the day plan.
    pub fn reset_start_time(&mut self) {
        self.start_time = None;
    }

    /// When the activity ends, if it is scheduled and has a duration.
    ///
    /// An activity that would run past midnight is cut off at 23:59; the
    /// plan covers a single day and never spills into the next one.
    pub fn end_time(&self) -> Option<NaiveTime> {
        let start = self.start_time?;
        let duration = self.duration?;
        Some(clamped_end(start, duration))
    }

    /// Whether `other` names the same activity, regardless of its other
    /// fields. This is the notion behind duplicate detection and lookup.
    pub fn same_identity(&self, other: &Item) -> bool {
        self.description == other.description
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    pub fn description_string(&self, indents: usize) -> String {
        text::indent(self.description.as_str(), indents)
    }

    pub fn priority_string(&self, indents: usize) -> String {
        text::indent(&self.priority.stars(), indents)
    }

    pub fn cost_string(&self, indents: usize) -> String {
        text::indent(&format!("Cost ${}", self.cost), indents)
    }

    pub fn duration_string(&self, indents: usize) -> Option<String> {
        let duration = self.duration?;
        Some(text::indent(&format!("Duration {duration} mins"), indents))
    }

    /// The scheduling line, in whichever of its three forms applies: not
    /// planned, start only, or a full start-to-end range.
    pub fn time_string(&self, indents: usize) -> String {
        let line = match (self.start_time, self.duration) {
            (None, _) => "Time: (Not planned)".to_owned(),
            (Some(start), None) => format!("Time: {}", start.format("%H:%M")),
            (Some(start), Some(duration)) => {
                let end = clamped_end(start, duration);
                format!(
                    "Time: {} - {}",
                    start.format("%H:%M"),
                    end.format("%H:%M")
                )
            }
        };
        text::indent(&line, indents)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.description_string(text::INDENT_NONE))?;
        writeln!(f, "{}", self.priority_string(text::INDENT_STEP))?;
        writeln!(f, "{}", self.cost_string(text::INDENT_STEP))?;
        if let Some(line) = self.duration_string(text::INDENT_STEP) {
            writeln!(f, "{line}")?;
        }
        write!(f, "{}", self.time_string(text::INDENT_STEP))
    }
}

/// End of `start + duration` under the single-day policy.
///
/// Time-of-day addition wraps around midnight, so a sum that spills into
/// the next day comes back earlier than the start (or exactly on midnight,
/// for a sum landing on 24:00). Both wrapped cases clamp to 23:59.
fn clamped_end(start: NaiveTime, duration: Duration) -> NaiveTime {
    let end = start + TimeDelta::minutes(i64::from(duration.minutes()));
    if end < start || end == NaiveTime::MIN {
        END_OF_DAY
    } else {
        end
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
