//! Integration tests for trip composition: the duplicate policy, list
//! order, and day-plan rendering.

use jaunt_core::{Itinerary, ItineraryError};
use jaunt_test_utils::{
    ItemBuilder, ItineraryBuilder, description, harbor_cruise, init_test_logging, museum_visit,
    time,
};

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

fn listed_names(itinerary: &Itinerary) -> Vec<&str> {
    itinerary
        .items()
        .iter()
        .map(|item| item.description().as_str())
        .collect()
}

// ---------------------------------------------------------------------------
// Duplicate policy
// ---------------------------------------------------------------------------

#[test]
fn a_description_can_appear_only_once_per_trip() {
    init_test_logging();
    let mut trip = ItineraryBuilder::new("Summer Trip").item(museum_visit()).build();

    // Different priority, cost, and duration, but the same description.
    let lookalike = ItemBuilder::new("Museum Visit")
        .priority(1)
        .cost(5.0)
        .duration(30)
        .build();

    let err = trip.add_item(lookalike).unwrap_err();
    assert!(
        matches!(err, ItineraryError::DuplicateItem(ref name) if name == "Museum Visit"),
        "expected duplicate rejection, got: {err}"
    );
    assert_eq!(trip.len(), 1, "the failed add must leave the list alone");
}

#[test]
fn a_failed_removal_leaves_the_trip_untouched() {
    init_test_logging();
    let mut trip = ItineraryBuilder::new("Summer Trip").item(museum_visit()).build();
    let before = trip.clone();

    let err = trip.remove_item(&description("Harbor Cruise")).unwrap_err();
    assert!(
        matches!(err, ItineraryError::ItemNotFound(_)),
        "expected not-found rejection, got: {err}"
    );
    assert_eq!(trip, before);
}

#[test]
fn an_edit_may_not_steal_another_activitys_description() {
    init_test_logging();
    let mut trip = ItineraryBuilder::new("Summer Trip")
        .item(museum_visit())
        .item(harbor_cruise())
        .build();
    let before = trip.clone();

    let stolen = ItemBuilder::new("Harbor Cruise").build();
    let err = trip.set_item(&description("Museum Visit"), stolen).unwrap_err();
    assert!(
        matches!(err, ItineraryError::DuplicateItem(_)),
        "expected duplicate rejection, got: {err}"
    );
    assert_eq!(trip, before);
}

// ---------------------------------------------------------------------------
// List order
// ---------------------------------------------------------------------------

#[test]
fn activities_stay_in_insertion_order() {
    init_test_logging();
    let mut trip = ItineraryBuilder::new("Summer Trip")
        .item(museum_visit())
        .item(harbor_cruise())
        .build();
    trip.add_item(ItemBuilder::new("Night Market").build()).unwrap();

    assert_eq!(
        listed_names(&trip),
        ["Museum Visit", "Harbor Cruise", "Night Market"]
    );
}

#[test]
fn scheduling_does_not_reorder_the_list() {
    init_test_logging();
    let mut trip = ItineraryBuilder::new("Summer Trip")
        .item(museum_visit())
        .item(harbor_cruise())
        .build();

    // Schedule the second activity earlier than the first.
    trip.schedule_item(&description("Museum Visit"), time(14, 0)).unwrap();
    trip.schedule_item(&description("Harbor Cruise"), time(9, 0)).unwrap();

    assert_eq!(listed_names(&trip), ["Museum Visit", "Harbor Cruise"]);
}

#[test]
fn a_replacement_keeps_its_predecessors_position() {
    init_test_logging();
    let mut trip = ItineraryBuilder::new("Summer Trip")
        .item(museum_visit())
        .item(harbor_cruise())
        .build();

    let gallery = ItemBuilder::new("Gallery Visit").build();
    trip.set_item(&description("Museum Visit"), gallery).unwrap();

    assert_eq!(listed_names(&trip), ["Gallery Visit", "Harbor Cruise"]);
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn the_day_plan_nests_activities_under_the_trip_header() {
    init_test_logging();
    let mut trip = ItineraryBuilder::new("Summer Trip").item(museum_visit()).build();
    trip.schedule_item(&description("Museum Visit"), time(9, 0)).unwrap();

    let expected = [
        "Summer Trip",
        "    Country: Sweden",
        "    Dates: 2022-08-01 to 2022-08-26",
        "    People: 5",
        "    Budget: $5000.00",
        "    Day plan:",
        "    Museum Visit",
        "        ★★",
        "        Cost $10.00",
        "        Duration 60 mins",
        "        Time: 09:00 - 10:00",
    ]
    .join("\n");
    assert_eq!(trip.to_string(), expected);
}

#[test]
fn an_empty_trip_renders_header_only() {
    init_test_logging();
    let trip = ItineraryBuilder::new("Winter Trip")
        .country("Japan")
        .start_date(2023, 1, 1)
        .days(14)
        .people(2)
        .budget(970.0)
        .build();

    let rendered = trip.to_string();
    assert!(rendered.ends_with("Day plan:"), "got: {rendered}");
    assert!(rendered.contains("    Dates: 2023-01-01 to 2023-01-14\n"));
    assert!(rendered.contains("    Budget: $970.00\n"));
}
