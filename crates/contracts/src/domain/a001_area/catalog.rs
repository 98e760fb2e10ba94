use super::aggregate::{Area, AreaId, Coordinates, SafetyLevel};
use once_cell::sync::Lazy;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashSet;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate area id `{0}`")]
    DuplicateId(String),
}

/// Fixed, ordered table of areas. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaCatalog {
    areas: Vec<Area>,
}

impl AreaCatalog {
    /// Build a catalog, rejecting tables where two areas share an id.
    pub fn new(areas: Vec<Area>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for area in &areas {
            if !seen.insert(area.id.as_str()) {
                return Err(CatalogError::DuplicateId(area.id.to_string()));
            }
        }
        Ok(Self { areas })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Area> {
        self.areas.iter()
    }

    pub fn get(&self, id: &AreaId) -> Option<&Area> {
        self.areas.iter().find(|a| &a.id == id)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Pretty-printed JSON dump keyed by area id, in catalog order.
    pub fn to_export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for AreaCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.areas.len()))?;
        for area in &self.areas {
            map.serialize_entry(area.id.as_str(), area)?;
        }
        map.end()
    }
}

impl<'a> IntoIterator for &'a AreaCatalog {
    type Item = &'a Area;
    type IntoIter = std::slice::Iter<'a, Area>;

    fn into_iter(self) -> Self::IntoIter {
        self.areas.iter()
    }
}

// ============================================================================
// Ranchi
// ============================================================================

#[allow(clippy::too_many_arguments)]
fn area(
    id: &str,
    name: &str,
    safety_level: SafetyLevel,
    safety_score: f64,
    crimes: &[&str],
    recent_incident_count: u32,
    coordinates: (f64, f64),
    description: &str,
    detail_page_ref: &str,
) -> Area {
    Area {
        id: AreaId::new(id),
        name: name.to_string(),
        safety_level,
        safety_score,
        crime_types: crimes.iter().map(|c| c.to_string()).collect(),
        recent_incident_count,
        coordinates: Coordinates::new(coordinates.0, coordinates.1),
        description: description.to_string(),
        detail_page_ref: detail_page_ref.to_string(),
    }
}

fn ranchi_areas() -> Vec<Area> {
    vec![
        area(
            "dhurwa",
            "Dhurwa",
            SafetyLevel::Caution,
            6.5,
            &["Theft", "Chain Snatching", "Cybercrime"],
            23,
            (23.3441, 85.3096),
            "Mixed residential and commercial area with moderate crime rates",
            "dhurwa.html",
        ),
        area(
            "morabadi",
            "Morabadi",
            SafetyLevel::Danger,
            3.2,
            &["Harassment", "Assault", "Theft"],
            41,
            (23.3569, 85.3239),
            "High crime area requiring extra caution, especially for women",
            "morabadi.html",
        ),
        area(
            "harmu",
            "Harmu",
            SafetyLevel::Caution,
            5.8,
            &["Robbery", "Street Crime", "Vehicle Theft"],
            18,
            (23.3703, 85.3119),
            "Busy commercial area with street crime concerns",
            "harmu.html",
        ),
        area(
            "namkom",
            "Namkom",
            SafetyLevel::Safe,
            7.8,
            &["Vehicle Theft", "Minor Theft"],
            8,
            (23.2294, 85.2456),
            "Relatively safe residential area with low crime rates",
            "namkom.html",
        ),
        area(
            "patratu",
            "Patratu",
            SafetyLevel::Caution,
            6.0,
            &["Land Disputes", "Rural Crime", "Theft"],
            15,
            (23.6833, 85.1667),
            "Rural area with occasional land-related disputes",
            "patratu.html",
        ),
        area(
            "birsaMunda",
            "Birsa Munda Airport Area",
            SafetyLevel::Danger,
            4.1,
            &["Smuggling", "Organized Crime", "Theft"],
            32,
            (23.3143, 85.3217),
            "Airport vicinity with organized crime activities",
            "birsa-munda.html",
        ),
    ]
}

/// The Ranchi district table shown on the page.
///
/// Built through [`AreaCatalog::new`]; a duplicate id in the table is a
/// build error and aborts on first access.
pub static RANCHI_CATALOG: Lazy<AreaCatalog> = Lazy::new(|| {
    AreaCatalog::new(ranchi_areas()).expect("Ranchi area table has duplicate ids")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_catalog_goes_through_validation() {
        assert_eq!(*RANCHI_CATALOG, AreaCatalog::new(ranchi_areas()).unwrap());
        assert_eq!(RANCHI_CATALOG.len(), 6);
        assert!(!RANCHI_CATALOG.is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut areas = ranchi_areas();
        areas.push(areas[0].clone());
        assert_eq!(
            AreaCatalog::new(areas),
            Err(CatalogError::DuplicateId("dhurwa".into()))
        );
    }

    #[test]
    fn test_lookup_by_id() {
        let namkom = RANCHI_CATALOG.get(&AreaId::new("namkom")).unwrap();
        assert_eq!(namkom.safety_score, 7.8);
        assert_eq!(namkom.safety_level, SafetyLevel::Safe);
        assert!(RANCHI_CATALOG.get(&AreaId::new("kanke")).is_none());
    }

    #[test]
    fn test_export_is_keyed_and_ordered() {
        let json = RANCHI_CATALOG.to_export_json().unwrap();
        let dhurwa = json.find("\"dhurwa\"").unwrap();
        let birsa = json.find("\"birsaMunda\"").unwrap();
        assert!(dhurwa < birsa);
        assert!(json.contains("\"recentIncidents\": 41"));
        assert!(json.contains("\"detailPage\": \"birsa-munda.html\""));

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["namkom"]["safetyLevel"], "safe");
        assert_eq!(parsed["namkom"]["coordinates"][0], 23.2294);
        assert_eq!(parsed["harmu"]["crimes"].as_array().unwrap().len(), 3);
    }
}
