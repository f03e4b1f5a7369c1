//! Shared test utilities for the jaunt workspace.
//!
//! Builders and fixtures for model values, plus command assertions that
//! check the one rule every failed command must obey: the model is left
//! exactly as it was.

use chrono::{NaiveDate, NaiveTime};

use jaunt_commands::{Command, CommandError, dispatch};
use jaunt_core::{
    Budget, Cost, Country, Days, Description, Duration, Item, Itinerary, People, Planner,
    Priority, StageManager,
};

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Routes tracing output into the test harness so `--nocapture` shows it.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_test_logging() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

// ---------------------------------------------------------------------------
// Value helpers
// ---------------------------------------------------------------------------

/// A [`Description`] from a literal known to be valid.
pub fn description(text: &str) -> Description {
    Description::new(text).expect("test description should be valid")
}

/// A [`NaiveTime`] at `hour:minute`.
pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("test time should be valid")
}

/// A [`NaiveDate`] from calendar parts.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("test date should be valid")
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

const DEFAULT_PRIORITY: u8 = 2;
const DEFAULT_COST: f64 = 10.0;
const DEFAULT_DURATION_MINS: u32 = 60;

/// Builds an [`Item`], defaulting every field except the description.
pub struct ItemBuilder {
    description: String,
    priority: u8,
    cost: f64,
    duration: Option<u32>,
    start_time: Option<NaiveTime>,
}

impl ItemBuilder {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            priority: DEFAULT_PRIORITY,
            cost: DEFAULT_COST,
            duration: Some(DEFAULT_DURATION_MINS),
            start_time: None,
        }
    }

    pub fn priority(mut self, value: u8) -> Self {
        self.priority = value;
        self
    }

    pub fn cost(mut self, amount: f64) -> Self {
        self.cost = amount;
        self
    }

    pub fn duration(mut self, minutes: u32) -> Self {
        self.duration = Some(minutes);
        self
    }

    pub fn no_duration(mut self) -> Self {
        self.duration = None;
        self
    }

    pub fn starting_at(mut self, hour: u32, minute: u32) -> Self {
        self.start_time = Some(time(hour, minute));
        self
    }

    pub fn build(self) -> Item {
        let mut item = Item::new(
            Description::new(&self.description).expect("builder description should be valid"),
            Priority::new(self.priority).expect("builder priority should be valid"),
            Cost::new(self.cost).expect("builder cost should be valid"),
            self.duration.map(Duration::new),
        );
        if let Some(start_time) = self.start_time {
            item.set_start_time(start_time);
        }
        item
    }
}

/// Builds an [`Itinerary`], defaulting every field except the name.
pub struct ItineraryBuilder {
    name: String,
    country: String,
    start_date: NaiveDate,
    days: u32,
    people: u32,
    budget: f64,
    items: Vec<Item>,
}

impl ItineraryBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: "Sweden".to_owned(),
            start_date: date(2022, 8, 1),
            days: 26,
            people: 5,
            budget: 5000.0,
            items: Vec::new(),
        }
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn start_date(mut self, year: i32, month: u32, day: u32) -> Self {
        self.start_date = date(year, month, day);
        self
    }

    pub fn days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    pub fn people(mut self, people: u32) -> Self {
        self.people = people;
        self
    }

    pub fn budget(mut self, budget: f64) -> Self {
        self.budget = budget;
        self
    }

    pub fn item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn build(self) -> Itinerary {
        let mut itinerary = Itinerary::new(
            Description::new(&self.name).expect("builder name should be valid"),
            Country::new(&self.country).expect("builder country should be valid"),
            self.start_date,
            Days::new(self.days).expect("builder days should be valid"),
            People::new(self.people).expect("builder people should be valid"),
            Budget::new(self.budget).expect("builder budget should be valid"),
        );
        for item in self.items {
            itinerary
                .add_item(item)
                .expect("builder items should be unique");
        }
        itinerary
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn museum_visit() -> Item {
    ItemBuilder::new("Museum Visit").priority(2).cost(10.0).duration(60).build()
}

pub fn harbor_cruise() -> Item {
    ItemBuilder::new("Harbor Cruise").priority(1).cost(30.0).duration(90).build()
}

pub fn summer_trip() -> Itinerary {
    ItineraryBuilder::new("Summer Trip").build()
}

pub fn winter_trip() -> Itinerary {
    ItineraryBuilder::new("Winter Trip")
        .country("Japan")
        .start_date(2023, 1, 1)
        .days(14)
        .people(2)
        .budget(970.0)
        .build()
}

/// A planner holding the summer and winter trips, nothing selected.
pub fn typical_planner() -> Planner {
    let mut planner = Planner::new();
    planner
        .add_itinerary(summer_trip())
        .expect("summer trip should insert into an empty planner");
    planner
        .add_itinerary(winter_trip())
        .expect("winter trip should not collide with the summer trip");
    planner
}

/// The typical planner with the summer trip opened, on the itinerary
/// screen. This is the state activity commands expect to run in.
pub fn open_summer_trip() -> (Planner, StageManager) {
    let mut planner = typical_planner();
    let mut stages = StageManager::new();
    planner
        .select(&description("Summer Trip"))
        .expect("summer trip should be selectable");
    stages.set_itinerary_stage();
    (planner, stages)
}

// ---------------------------------------------------------------------------
// Command assertions
// ---------------------------------------------------------------------------

/// Dispatches `command` and asserts it succeeds with exactly
/// `expected_feedback`.
pub fn assert_command_success(
    command: Command,
    planner: &mut Planner,
    stages: &mut StageManager,
    expected_feedback: &str,
) {
    match dispatch(command, planner, stages) {
        Ok(result) => assert_eq!(result.feedback(), expected_feedback),
        Err(err) => panic!("expected the command to succeed, got: {err}"),
    }
}

/// Dispatches `command`, asserts it fails, and asserts the failure changed
/// neither the planner nor the stage. Returns the error for closer checks.
pub fn assert_command_failure(
    command: Command,
    planner: &mut Planner,
    stages: &mut StageManager,
) -> CommandError {
    let planner_before = planner.clone();
    let stages_before = stages.clone();
    let err = match dispatch(command, planner, stages) {
        Ok(result) => panic!("expected the command to fail, got: {result}"),
        Err(err) => err,
    };
    assert_eq!(
        *planner, planner_before,
        "a failed command must not change the planner"
    );
    assert_eq!(
        *stages, stages_before,
        "a failed command must not change the stage"
    );
    err
}
