//! Plain-text rendering of the directory pages.
//!
//! Pure functions over the models and fetch statuses, so every state the
//! selector or resolver can report has a deterministic rendering and an
//! unrecognized service type degrades to the generic glyph instead of being
//! filtered out.

use std::fmt::Write as _;

use crate::models::{City, CityDetail, State, service_glyph};
use crate::selector::Fetch;

/// Notice appended to every city page.
const EMERGENCY_NOTICE: &str = "For life-threatening emergencies, always dial 112 \
                                (National Emergency Number) immediately.";

/// Render the city detail page: header, one block per service in the order
/// received, and the emergency notice. Contact strings pass through verbatim.
#[must_use]
pub fn city_page(detail: &CityDetail) -> String {
    let mut page = String::new();
    let _ = writeln!(page, "{}", detail.name);
    let _ = writeln!(page, "{}", detail.state_name);
    let _ = writeln!(page);
    let _ = writeln!(page, "Essential Services ({})", detail.services.len());
    let _ = writeln!(page);

    if detail.services.is_empty() {
        let _ = writeln!(page, "No services available for this city.");
        let _ = writeln!(page);
    } else {
        for service in &detail.services {
            let _ = writeln!(
                page,
                "{} {}",
                service_glyph(&service.service_type),
                service.service_type
            );
            let _ = writeln!(page, "   {}", service.description);
            let _ = writeln!(page, "   Call: {}", service.contact);
            let _ = writeln!(page);
        }
    }

    let _ = writeln!(page, "{EMERGENCY_NOTICE}");
    page
}

/// Render the not-found page.
#[must_use]
pub fn not_found_page() -> String {
    "Oops! City Not Found\n\
     The city you're looking for doesn't exist in our database,\n\
     or the page you're trying to access is unavailable.\n"
        .to_string()
}

/// Render the inline, recoverable failure message shown on the detail view.
#[must_use]
pub fn transient_error_page(message: &str) -> String {
    format!("{message}\n")
}

/// Placeholder text for the state selector.
#[must_use]
pub fn states_placeholder(states: &Fetch<Vec<State>>) -> &'static str {
    match states {
        Fetch::Idle | Fetch::Loading => "Loading India's data...",
        Fetch::Ready(_) => "Select State",
        Fetch::Failed(_) => "States are unavailable right now",
    }
}

/// Placeholder text for the city selector, mirroring the disabled states of
/// the home view.
#[must_use]
pub fn cities_placeholder(state_selected: bool, cities: &Fetch<Vec<City>>) -> &'static str {
    if !state_selected {
        return "Select State First";
    }
    match cities {
        Fetch::Loading => "Loading cities...",
        Fetch::Idle | Fetch::Ready(_) => "Select City",
        Fetch::Failed(_) => "Cities are unavailable right now",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Service;

    fn service(service_type: &str, description: &str, contact: &str) -> Service {
        Service {
            service_type: service_type.to_string(),
            description: description.to_string(),
            contact: contact.to_string(),
        }
    }

    #[test]
    fn test_city_page_preserves_order_and_literal_contacts() {
        let detail = CityDetail {
            name: "Mumbai".to_string(),
            state_name: "Maharashtra".to_string(),
            services: vec![
                service("Ambulance", "Free emergency medical assistance", "108"),
                service("Police", "Mumbai Police Emergency Helpline", "100"),
                service("Helpline", "Bangalore One Citizen Service Center", "080-22943225"),
            ],
        };

        let page = city_page(&detail);
        let ambulance = page.find("Ambulance").unwrap();
        let police = page.find("Police").unwrap();
        let helpline = page.find("Helpline").unwrap();
        assert!(ambulance < police && police < helpline);
        assert!(page.contains("Call: 080-22943225"));
        assert!(page.contains("Essential Services (3)"));
    }

    #[test]
    fn test_city_page_renders_unknown_type_with_generic_glyph() {
        let detail = CityDetail {
            name: "Mumbai".to_string(),
            state_name: "Maharashtra".to_string(),
            services: vec![service("Coastal Rescue", "Shoreline emergencies", "1093")],
        };

        let page = city_page(&detail);
        assert!(page.contains("📋 Coastal Rescue"));
        assert!(page.contains("Call: 1093"));
    }

    #[test]
    fn test_city_page_with_no_services() {
        let detail = CityDetail {
            name: "Mumbai".to_string(),
            state_name: "Maharashtra".to_string(),
            services: Vec::new(),
        };

        let page = city_page(&detail);
        assert!(page.contains("No services available for this city."));
        assert!(page.contains("dial 112"));
    }

    #[test]
    fn test_placeholders_track_fetch_status() {
        assert_eq!(states_placeholder(&Fetch::Loading), "Loading India's data...");
        assert_eq!(states_placeholder(&Fetch::Ready(Vec::new())), "Select State");

        assert_eq!(cities_placeholder(false, &Fetch::Idle), "Select State First");
        assert_eq!(cities_placeholder(true, &Fetch::Loading), "Loading cities...");
        assert_eq!(
            cities_placeholder(true, &Fetch::Failed("boom".to_string())),
            "Cities are unavailable right now"
        );
    }
}
