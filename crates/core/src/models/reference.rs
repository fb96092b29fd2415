use serde::{Deserialize, Serialize};

/// One leg of the booked flights, shown on the info tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightSegment {
    /// Flight number (e.g., "MM722")
    pub flight_number: String,

    /// Origin airport code (e.g., "TPE")
    pub origin: String,

    /// Destination airport code (e.g., "NGO")
    pub destination: String,

    /// Departure label with date (e.g., "12/18 02:55")
    pub departure: String,

    /// Arrival label; "(+1)" marks next-day arrival
    pub arrival: String,

    /// Flight time label (e.g., "2h 30m")
    pub duration: String,
}

impl FlightSegment {
    pub fn new(
        flight_number: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure: impl Into<String>,
        arrival: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            flight_number: flight_number.into(),
            origin: origin.into(),
            destination: destination.into(),
            departure: departure.into(),
            arrival: arrival.into(),
            duration: duration.into(),
        }
    }
}

/// An emergency phone number, rendered as a `tel:` link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
}

impl EmergencyContact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }
}

/// A souvenir-shopping checklist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SouvenirItem {
    pub name: String,
    pub description: String,
}

impl SouvenirItem {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}
