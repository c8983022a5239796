//! Value records received from the catalog backend.
//!
//! The client never mutates these. Slugs are the only identifiers used
//! across component boundaries and in URLs; display names are never keys.

use serde::{Deserialize, Serialize};

/// A state or union territory in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// URL-safe unique identifier.
    pub slug: String,
    /// Display name.
    pub name: String,
}

/// A city belonging to a state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// URL-safe identifier, unique across the whole catalog.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Reference to the owning state. An orphaned reference is displayed as
    /// received, never rejected.
    pub state_slug: String,
}

/// One essential service with its contact number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Open-ended category label; unknown values get a generic presentation.
    pub service_type: String,
    pub description: String,
    /// Phone-number-shaped string, passed through verbatim.
    pub contact: String,
}

/// The aggregate returned when resolving a single city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityDetail {
    pub name: String,
    pub state_name: String,
    /// Rendered in the order received.
    pub services: Vec<Service>,
}

/// Presentation glyph for a service type.
///
/// The set of types is open-ended from the client's perspective: unknown
/// values fall back to a generic glyph instead of being dropped.
#[must_use]
pub fn service_glyph(service_type: &str) -> &'static str {
    match service_type {
        "Emergency" => "🚨",
        "Police" => "👮",
        "Hospital" => "🏥",
        "Ambulance" => "🚑",
        "Fire Station" => "🚒",
        "Women Helpline" => "👩",
        "Child Helpline" => "👶",
        "Tourist Helpline" => "🗺️",
        "Municipal Office" => "🏛️",
        "Electricity Emergency" => "⚡",
        "Water Supply" => "💧",
        "Disaster Management" => "🌪️",
        _ => "📋",
    }
}
