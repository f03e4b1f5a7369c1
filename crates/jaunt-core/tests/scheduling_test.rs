//! Integration tests for day-plan scheduling arithmetic.
//!
//! Everything runs through the public API: build an activity, give it a
//! start time, and look at what the plan says about it.

use jaunt_core::Item;
use jaunt_test_utils::{ItemBuilder, init_test_logging, time};

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// A one-hour museum visit, unscheduled.
fn museum() -> Item {
    ItemBuilder::new("Museum Visit").duration(60).build()
}

// ---------------------------------------------------------------------------
// End times
// ---------------------------------------------------------------------------

#[test]
fn end_time_tracks_the_start_time() {
    init_test_logging();
    let mut item = ItemBuilder::new("Museum Visit").duration(30).build();

    item.set_start_time(time(9, 0));
    assert_eq!(item.end_time(), Some(time(9, 30)));

    item.set_start_time(time(14, 45));
    assert_eq!(item.end_time(), Some(time(15, 15)));
}

#[test]
fn activities_never_run_past_the_end_of_the_day() {
    init_test_logging();
    // (start, duration in minutes, expected end)
    let cases = [
        ((9, 0), 30, (9, 30)),
        ((23, 0), 59, (23, 59)),
        // crosses midnight
        ((23, 30), 45, (23, 59)),
        ((22, 0), 121, (23, 59)),
        // lands exactly on midnight
        ((23, 0), 60, (23, 59)),
        ((12, 0), 720, (23, 59)),
        ((0, 0), 1440, (23, 59)),
    ];

    for ((start_hour, start_min), minutes, (end_hour, end_min)) in cases {
        let mut item = ItemBuilder::new("Museum Visit").duration(minutes).build();
        item.set_start_time(time(start_hour, start_min));
        assert_eq!(
            item.end_time(),
            Some(time(end_hour, end_min)),
            "start {start_hour:02}:{start_min:02} for {minutes} mins"
        );
    }
}

#[test]
fn end_time_stays_unknown_until_the_activity_is_fully_planned() {
    init_test_logging();
    // no start time yet
    let unscheduled = museum();
    assert_eq!(unscheduled.end_time(), None);

    // start time but open-ended
    let mut open_ended = ItemBuilder::new("Harbor Walk").no_duration().build();
    open_ended.set_start_time(time(9, 0));
    assert_eq!(open_ended.end_time(), None);
}

#[test]
fn unscheduling_clears_the_end_time_too() {
    init_test_logging();
    let mut item = museum();
    item.set_start_time(time(9, 0));
    assert_eq!(item.end_time(), Some(time(10, 0)));

    item.reset_start_time();
    assert_eq!(item.start_time(), None);
    assert_eq!(item.end_time(), None);
}

// ---------------------------------------------------------------------------
// The time line
// ---------------------------------------------------------------------------

#[test]
fn the_time_line_moves_through_its_three_forms() {
    init_test_logging();
    let mut item = museum();
    assert_eq!(item.time_string(0), "Time: (Not planned)");

    item.set_start_time(time(9, 0));
    assert_eq!(item.time_string(0), "Time: 09:00 - 10:00");

    item.reset_start_time();
    assert_eq!(item.time_string(0), "Time: (Not planned)");
}

#[test]
fn an_open_ended_activity_shows_its_start_alone() {
    init_test_logging();
    let mut item = ItemBuilder::new("Harbor Walk").no_duration().build();
    item.set_start_time(time(18, 30));
    assert_eq!(item.time_string(0), "Time: 18:30");
}

#[test]
fn a_clamped_activity_renders_the_clamped_end() {
    init_test_logging();
    let mut item = ItemBuilder::new("Night Market").duration(90).build();
    item.set_start_time(time(23, 0));
    assert_eq!(item.time_string(0), "Time: 23:00 - 23:59");
}

// ---------------------------------------------------------------------------
// Identity and persistence
// ---------------------------------------------------------------------------

#[test]
fn scheduling_does_not_change_what_the_activity_is() {
    init_test_logging();
    let original = museum();
    let mut scheduled = museum();
    scheduled.set_start_time(time(9, 0));

    assert!(original.same_identity(&scheduled));
    assert_ne!(original, scheduled, "the schedule is part of full equality");
}

#[test]
fn a_scheduled_activity_survives_a_serde_round_trip() {
    init_test_logging();
    let mut item = museum();
    item.set_start_time(time(9, 0));

    let json = serde_json::to_string(&item).expect("item should serialize");
    let restored: Item = serde_json::from_str(&json).expect("item should deserialize");
    assert_eq!(restored, item);
    assert_eq!(restored.end_time(), Some(time(10, 0)));
}
