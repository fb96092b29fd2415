use serde::{Deserialize, Serialize};

use super::day::Day;
use super::reference::{EmergencyContact, FlightSegment, SouvenirItem};

/// The main itinerary container: the day-by-day schedule plus the
/// read-only reference panels (flights, emergency contacts, souvenirs).
///
/// Built once from seed data and injected into the planner at
/// construction, so tests can substitute fixtures. Day order is fixed
/// here; only each day's event sequence is ever reordered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub days: Vec<Day>,

    pub flights: Vec<FlightSegment>,

    pub contacts: Vec<EmergencyContact>,

    pub souvenirs: Vec<SouvenirItem>,
}

impl Trip {
    /// Find a day by its id.
    #[must_use]
    pub fn day(&self, day_id: u32) -> Option<&Day> {
        self.days.iter().find(|d| d.id == day_id)
    }

    /// Position of a day in itinerary order.
    #[must_use]
    pub fn day_index(&self, day_id: u32) -> Option<usize> {
        self.days.iter().position(|d| d.id == day_id)
    }

    /// Total number of scheduled events across all days.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.days.iter().map(|d| d.events.len()).sum()
    }
}
