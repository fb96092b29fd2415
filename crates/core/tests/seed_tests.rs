// ═══════════════════════════════════════════════════════════════════
// Seed Data Tests — the built-in Nagoya winter trip
// ═══════════════════════════════════════════════════════════════════

use std::collections::HashSet;

use trip_planner_core::models::event::EventCategory;
use trip_planner_core::models::trip::Trip;
use trip_planner_core::seed;

fn trip() -> Trip {
    seed::nagoya_winter_trip()
}

#[test]
fn five_days_in_itinerary_order() {
    let trip = trip();
    assert_eq!(trip.days.len(), 5);
    let ids: Vec<u32> = trip.days.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn every_day_has_events() {
    for day in &trip().days {
        assert!(!day.events.is_empty(), "day {} has no events", day.id);
    }
}

#[test]
fn day_1_timeline() {
    let trip = trip();
    let day = trip.day(1).unwrap();
    assert_eq!(day.events.len(), 9);
    assert_eq!(day.events[0].id, "1-1");
    assert_eq!(day.events[0].category, EventCategory::Transport);
    assert_eq!(day.short_label(), "12/18");
}

#[test]
fn event_ids_unique_across_days() {
    let trip = trip();
    let mut seen = HashSet::new();
    for day in &trip.days {
        for event in &day.events {
            assert!(seen.insert(event.id.clone()), "duplicate event id {}", event.id);
        }
    }
    assert_eq!(seen.len(), trip.event_count());
}

#[test]
fn all_categories_are_represented() {
    let trip = trip();
    let categories: HashSet<EventCategory> = trip
        .days
        .iter()
        .flat_map(|d| d.events.iter().map(|e| e.category))
        .collect();
    for expected in [
        EventCategory::Transport,
        EventCategory::Food,
        EventCategory::Sight,
        EventCategory::Shopping,
        EventCategory::Relax,
    ] {
        assert!(categories.contains(&expected), "missing {expected}");
    }
}

#[test]
fn transport_events_carry_notes_not_guides() {
    for day in &trip().days {
        for event in &day.events {
            if event.category == EventCategory::Transport {
                assert!(event.note.is_some(), "transport {} lacks a note", event.id);
                assert!(event.guide.is_none(), "transport {} has a guide", event.id);
            }
        }
    }
}

#[test]
fn final_night_is_home_and_not_navigable() {
    let trip = trip();
    assert!(trip.day(1).unwrap().hotel.is_navigable());
    assert!(!trip.day(5).unwrap().hotel.is_navigable());
}

#[test]
fn flights_are_the_booked_round_trip() {
    let trip = trip();
    assert_eq!(trip.flights.len(), 2);

    let outbound = &trip.flights[0];
    assert_eq!(outbound.flight_number, "MM722");
    assert_eq!(outbound.origin, "TPE");
    assert_eq!(outbound.destination, "NGO");

    let inbound = &trip.flights[1];
    assert_eq!(inbound.flight_number, "MM723");
    assert_eq!(inbound.origin, "NGO");
    assert_eq!(inbound.destination, "TPE");
    assert!(inbound.arrival.contains("(+1)"));
}

#[test]
fn emergency_contacts_present() {
    let trip = trip();
    assert_eq!(trip.contacts.len(), 4);
    assert!(trip.contacts.iter().any(|c| c.phone == "110"));
    assert!(trip.contacts.iter().any(|c| c.phone == "119"));
}

#[test]
fn souvenir_checklist_present() {
    let trip = trip();
    assert_eq!(trip.souvenirs.len(), 5);
    for item in &trip.souvenirs {
        assert!(!item.name.is_empty());
        assert!(!item.description.is_empty());
    }
}

#[test]
fn seed_serializes_to_json() {
    let trip = trip();
    let json = serde_json::to_string(&trip).unwrap();
    let back: Trip = serde_json::from_str(&json).unwrap();
    assert_eq!(trip, back);
}
