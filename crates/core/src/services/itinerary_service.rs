use crate::models::event::ItineraryEvent;
use crate::models::trip::Trip;

/// Direction for reordering an event within a day's timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Mutates the day-by-day schedule: reorder and delete events.
///
/// Pure business logic — no I/O, no prompts. Easy to test.
///
/// Every operation here follows the boundary-safe no-op contract:
/// unknown day ids, unknown event ids, and moves past either end of a
/// sequence leave the trip untouched and report `false`. Nothing in
/// this service ever errors.
pub struct ItineraryService;

impl ItineraryService {
    pub fn new() -> Self {
        Self
    }

    /// Move the event at `index` one slot up or down within its day.
    ///
    /// The day's event sequence is rebuilt and swapped in as a whole, so
    /// an observer sees either the old order or the new order — never an
    /// intermediate state. Returns `true` only when the order changed.
    pub fn move_event(
        &self,
        trip: &mut Trip,
        day_id: u32,
        index: usize,
        direction: MoveDirection,
    ) -> bool {
        let Some(day_index) = trip.day_index(day_id) else {
            return false;
        };

        let events = &trip.days[day_index].events;
        let swap_with = match direction {
            MoveDirection::Up if index > 0 && index < events.len() => index - 1,
            MoveDirection::Down if index + 1 < events.len() => index + 1,
            _ => return false, // boundary or out of range: silent no-op
        };

        let mut reordered = events.clone();
        reordered.swap(index, swap_with);
        trip.days[day_index].events = reordered;
        true
    }

    /// Remove the event with the given id from the day.
    ///
    /// Idempotent: a missing day or event id is a no-op and reports
    /// `false`. Confirmation gating belongs to the caller, not here.
    pub fn delete_event(&self, trip: &mut Trip, day_id: u32, event_id: &str) -> bool {
        let Some(day_index) = trip.day_index(day_id) else {
            return false;
        };

        let events = &trip.days[day_index].events;
        if !events.iter().any(|e| e.id == event_id) {
            return false;
        }

        let remaining: Vec<ItineraryEvent> = events
            .iter()
            .filter(|e| e.id != event_id)
            .cloned()
            .collect();
        trip.days[day_index].events = remaining;
        true
    }
}

impl Default for ItineraryService {
    fn default() -> Self {
        Self::new()
    }
}
