//! Card grid visibility: free-text search AND safety category filter.

use crate::domain::a001_area::{Area, AreaCatalog, AreaId, SafetyLevel};

/// Value of the safety category dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SafetyFilter {
    #[default]
    All,
    Level(SafetyLevel),
}

impl SafetyFilter {
    /// Parse the `<select>` value. Anything unrecognised means "all".
    pub fn from_value(value: &str) -> Self {
        SafetyLevel::from_str(value)
            .map(SafetyFilter::Level)
            .unwrap_or(SafetyFilter::All)
    }

    pub fn as_value(&self) -> &'static str {
        match self {
            SafetyFilter::All => "all",
            SafetyFilter::Level(level) => level.as_str(),
        }
    }

    pub fn matches(&self, level: SafetyLevel) -> bool {
        match self {
            SafetyFilter::All => true,
            SafetyFilter::Level(wanted) => *wanted == level,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaFilter {
    pub query: String,
    pub safety: SafetyFilter,
}

impl AreaFilter {
    /// Case-insensitive substring match on the area name.
    pub fn matches_query(&self, area: &Area) -> bool {
        area.name
            .to_lowercase()
            .contains(&self.query.to_lowercase())
    }

    pub fn matches(&self, area: &Area) -> bool {
        self.matches_query(area) && self.safety.matches(area.safety_level)
    }

    /// Number of non-default criteria, for the filter badge.
    pub fn active_count(&self) -> usize {
        usize::from(!self.query.is_empty()) + usize::from(self.safety != SafetyFilter::All)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub area_id: AreaId,
    pub visible: bool,
}

/// Visibility of every card, in catalog order.
pub fn project_grid(catalog: &AreaCatalog, filter: &AreaFilter) -> Vec<CardView> {
    catalog
        .iter()
        .map(|area| CardView {
            area_id: area.id.clone(),
            visible: filter.matches(area),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_area::RANCHI_CATALOG;

fn visible_ids(catalog: &AreaCatalog, filter: &AreaFilter) -> Vec<AreaId> {
    project_grid(catalog, filter)
        .into_iter()
        .filter(|card| card.visible)
        .map(|card| card.area_id)
        .collect()
}

    fn query(q: &str) -> AreaFilter {
        AreaFilter {
            query: q.to_string(),
            safety: SafetyFilter::All,
        }
    }

    #[test]
    fn test_empty_query_shows_everything() {
        assert_eq!(visible_ids(&RANCHI_CATALOG, &AreaFilter::default()).len(), 6);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        for q in ["HAR", "har", "hAr"] {
            assert_eq!(visible_ids(&RANCHI_CATALOG, &query(q)), vec![AreaId::new("harmu")]);
        }
        let airport = visible_ids(&RANCHI_CATALOG, &query("airport"));
        assert_eq!(airport, vec![AreaId::new("birsaMunda")]);
    }

    #[test]
    fn test_query_matches_exactly_the_substring_holders() {
        for q in ["a", "mu", "zzz", "Area"] {
            for card in project_grid(&RANCHI_CATALOG, &query(q)) {
                let area = RANCHI_CATALOG.get(&card.area_id).unwrap();
                let expected = area.name.to_lowercase().contains(&q.to_lowercase());
                assert_eq!(card.visible, expected, "query {q:?} area {}", area.id);
            }
        }
    }

    #[test]
    fn test_safety_filter() {
        let mut filter = AreaFilter::default();
        for level in SafetyLevel::all() {
            filter.safety = SafetyFilter::Level(level);
            for card in project_grid(&RANCHI_CATALOG, &filter) {
                let area = RANCHI_CATALOG.get(&card.area_id).unwrap();
                assert_eq!(card.visible, area.safety_level == level);
            }
        }
        assert_eq!(
            visible_ids(&RANCHI_CATALOG, &AreaFilter { query: String::new(), safety: SafetyFilter::from_value("danger") }),
            vec![AreaId::new("morabadi"), AreaId::new("birsaMunda")]
        );
    }

    #[test]
    fn test_predicates_compose_with_and() {
        let filter = AreaFilter {
            query: "h".into(),
            safety: SafetyFilter::Level(SafetyLevel::Caution),
        };
        assert_eq!(
            visible_ids(&RANCHI_CATALOG, &filter),
            vec![AreaId::new("dhurwa"), AreaId::new("harmu")]
        );
        assert_eq!(filter.active_count(), 2);
    }

    #[test]
    fn test_filter_value_round_trip() {
        assert_eq!(SafetyFilter::from_value("all"), SafetyFilter::All);
        assert_eq!(SafetyFilter::from_value("bogus"), SafetyFilter::All);
        assert_eq!(SafetyFilter::from_value("safe").as_value(), "safe");
    }
}
