use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Safety level
// ============================================================================

/// Coarse risk category of an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyLevel {
    Safe,
    Caution,
    Danger,
}

impl SafetyLevel {
    /// Lowercase name, used for CSS classes, filter values and storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyLevel::Safe => "safe",
            SafetyLevel::Caution => "caution",
            SafetyLevel::Danger => "danger",
        }
    }

    /// Text of the uppercased safety badge.
    pub fn badge_text(&self) -> &'static str {
        match self {
            SafetyLevel::Safe => "SAFE",
            SafetyLevel::Caution => "CAUTION",
            SafetyLevel::Danger => "DANGER",
        }
    }

    /// Label shown in the legend and the filter dropdown.
    pub fn display_name(&self) -> &'static str {
        match self {
            SafetyLevel::Safe => "Safe",
            SafetyLevel::Caution => "Caution",
            SafetyLevel::Danger => "Danger",
        }
    }

    /// Parse a lowercase level name. Unknown names yield `None`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "safe" => Some(SafetyLevel::Safe),
            "caution" => Some(SafetyLevel::Caution),
            "danger" => Some(SafetyLevel::Danger),
            _ => None,
        }
    }

    pub fn all() -> [SafetyLevel; 3] {
        [SafetyLevel::Safe, SafetyLevel::Caution, SafetyLevel::Danger]
    }
}

impl fmt::Display for SafetyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ID Type
// ============================================================================

/// Short stable key of an area ("namkom", "birsaMunda", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaId(String);

impl AreaId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AreaId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// Coordinates
// ============================================================================

/// Latitude/longitude pair. Serialized as `[lat, lon]`, the shape the map
/// widget accepts directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.lat, c.lon]
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Number of crime types shown on a card before collapsing into "+N more".
pub const HEADLINE_CRIME_COUNT: usize = 2;

/// One district of the city with its safety attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub id: AreaId,
    pub name: String,
    pub safety_level: SafetyLevel,
    /// 0 to 10, higher is safer.
    pub safety_score: f64,
    #[serde(rename = "crimes")]
    pub crime_types: Vec<String>,
    #[serde(rename = "recentIncidents")]
    pub recent_incident_count: u32,
    pub coordinates: Coordinates,
    pub description: String,
    #[serde(rename = "detailPage")]
    pub detail_page_ref: String,
}

impl Area {
    /// Safety score as displayed everywhere: `7.8/10`, `6/10`.
    pub fn score_label(&self) -> String {
        format!("{}/10", self.safety_score)
    }

    /// Crime types shown by default on the grid card and in the popup.
    pub fn headline_crimes(&self) -> &[String] {
        let n = self.crime_types.len().min(HEADLINE_CRIME_COUNT);
        &self.crime_types[..n]
    }

    /// `+N more` badge text when some crime types are not shown by default.
    pub fn more_crimes_label(&self) -> Option<String> {
        let hidden = self
            .crime_types
            .len()
            .saturating_sub(HEADLINE_CRIME_COUNT);
        (hidden > 0).then(|| format!("+{} more", hidden))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(crimes: &[&str], score: f64) -> Area {
        Area {
            id: AreaId::new("sample"),
            name: "Sample".into(),
            safety_level: SafetyLevel::Caution,
            safety_score: score,
            crime_types: crimes.iter().map(|c| c.to_string()).collect(),
            recent_incident_count: 3,
            coordinates: Coordinates::new(23.0, 85.0),
            description: String::new(),
            detail_page_ref: "sample.html".into(),
        }
    }

    #[test]
    fn test_score_label_drops_trailing_zero() {
        assert_eq!(sample(&[], 7.8).score_label(), "7.8/10");
        assert_eq!(sample(&[], 6.0).score_label(), "6/10");
    }

    #[test]
    fn test_headline_crimes_and_more_label() {
        let area = sample(&["Theft", "Assault", "Cybercrime"], 5.0);
        assert_eq!(area.headline_crimes(), &["Theft".to_string(), "Assault".to_string()]);
        assert_eq!(area.more_crimes_label().as_deref(), Some("+1 more"));

        let short = sample(&["Theft"], 5.0);
        assert_eq!(short.headline_crimes().len(), 1);
        assert_eq!(short.more_crimes_label(), None);
    }

    #[test]
    fn test_safety_level_parsing() {
        for level in SafetyLevel::all() {
            assert_eq!(SafetyLevel::from_str(level.as_str()), Some(level));
        }
        assert_eq!(SafetyLevel::from_str("SAFE"), None);
        assert_eq!(SafetyLevel::Danger.badge_text(), "DANGER");
    }

    #[test]
    fn test_coordinates_serialize_as_pair() {
        let json = serde_json::to_string(&Coordinates::new(23.2294, 85.2456)).unwrap();
        assert_eq!(json, "[23.2294,85.2456]");
    }
}
