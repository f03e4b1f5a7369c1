//! Domain core of jaunt, a personal trip itinerary planner.
//!
//! Everything lives in memory and runs single-threaded: a [`Planner`] holds
//! the trips, each [`Itinerary`] holds its activities, and an [`Item`]
//! carries the day-plan arithmetic. The [`StageManager`] tracks which
//! screen of the embedding application the user is on.
//!
//! How trips are stored on disk, and what command syntax users type, are
//! the embedding application's concern; this crate only defines the model
//! and its rules.

pub mod fields;
pub mod item;
pub mod itinerary;
pub mod planner;
pub mod stage;
pub mod text;

pub use fields::{
    Budget, Cost, Country, Days, Description, Duration, People, Priority, ValidationError,
};
pub use item::Item;
pub use itinerary::{Itinerary, ItineraryError};
pub use planner::{Planner, PlannerError};
pub use stage::{Stage, StageManager};
