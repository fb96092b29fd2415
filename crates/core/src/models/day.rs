use serde::{Deserialize, Serialize};

use super::event::ItineraryEvent;

/// Weather icon shown on the daily info card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherIcon {
    Sun,
    Cloud,
    Snow,
}

impl std::fmt::Display for WeatherIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherIcon::Sun => write!(f, "sun"),
            WeatherIcon::Cloud => write!(f, "cloud"),
            WeatherIcon::Snow => write!(f, "snow"),
        }
    }
}

/// Forecast summary for one day of the trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weather {
    /// Temperature range label (e.g., "4°C - 12°C")
    pub temperature: String,

    pub icon: WeatherIcon,

    /// Short forecast description (e.g., "晴時多雲")
    pub summary: String,

    /// What to wear / pack for the day
    pub clothing_advice: String,
}

impl Weather {
    pub fn new(
        temperature: impl Into<String>,
        icon: WeatherIcon,
        summary: impl Into<String>,
        clothing_advice: impl Into<String>,
    ) -> Self {
        Self {
            temperature: temperature.into(),
            icon,
            summary: summary.into(),
            clothing_advice: clothing_advice.into(),
        }
    }
}

/// The night's accommodation, shown on the daily info card.
///
/// Two sentinel names suppress the map-navigation affordance: a
/// continued stay has no new address to navigate to, and the final
/// "home" entry is not a hotel at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    pub address: String,
    /// Check-in time label; "-" when check-in does not apply
    pub check_in: String,
}

/// Hotel name meaning "staying at the same hotel as the night before".
pub const CONTINUED_STAY: &str = "續住";

/// Hotel name used for the final night back home.
pub const HOME: &str = "溫暖的家";

impl Hotel {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        check_in: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            check_in: check_in.into(),
        }
    }

    /// Whether the hotel card should offer map navigation.
    #[must_use]
    pub fn is_navigable(&self) -> bool {
        self.name != CONTINUED_STAY && self.name != HOME
    }

    /// Free-text place query for the map service ("name address").
    #[must_use]
    pub fn map_query(&self) -> String {
        format!("{} {}", self.name, self.address)
    }
}

/// One calendar day of the itinerary with its ordered event timeline.
///
/// Day order within the trip is fixed at seed time; identity is by `id`.
/// Event order inside `events` drives the timeline and is the target of
/// the reorder operations. It reflects chronological intent but is never
/// validated against each event's `time` label — manual reordering can
/// desynchronize the two, and that is accepted behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    /// Unique day number (1-based itinerary order)
    pub id: u32,

    /// Date label as displayed (e.g., "12/18 (四)")
    pub date_label: String,

    /// Day headline (e.g., "Day 1｜犬山城半日遊 & 榮夜景")
    pub title: String,

    pub weather: Weather,

    pub hotel: Hotel,

    /// Ordered event timeline for the day
    pub events: Vec<ItineraryEvent>,
}

impl Day {
    pub fn new(
        id: u32,
        date_label: impl Into<String>,
        title: impl Into<String>,
        weather: Weather,
        hotel: Hotel,
        events: Vec<ItineraryEvent>,
    ) -> Self {
        Self {
            id,
            date_label: date_label.into(),
            title: title.into(),
            weather,
            hotel,
            events,
        }
    }

    /// Compact label for the day-picker strip (date without the weekday,
    /// e.g., "12/18").
    #[must_use]
    pub fn short_label(&self) -> &str {
        self.date_label
            .split_whitespace()
            .next()
            .unwrap_or(&self.date_label)
    }

    /// Position of an event in the day's timeline, if present.
    #[must_use]
    pub fn event_position(&self, event_id: &str) -> Option<usize> {
        self.events.iter().position(|e| e.id == event_id)
    }
}
