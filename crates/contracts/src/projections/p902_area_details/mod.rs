use crate::domain::a001_area::{Area, AreaId};

/// Contents of the "selected area" panel.
///
/// Unlike the grid card, the panel lists every crime type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaDetailsView {
    pub area_id: AreaId,
    pub name: String,
    pub badge_text: String,
    /// `safety-badge <level>`
    pub badge_class: String,
    pub description: String,
    pub score_label: String,
    pub incidents_label: String,
    pub crime_types: Vec<String>,
    pub detail_page_ref: String,
}

impl From<&Area> for AreaDetailsView {
    fn from(area: &Area) -> Self {
        Self {
            area_id: area.id.clone(),
            name: area.name.clone(),
            badge_text: area.safety_level.badge_text().to_string(),
            badge_class: format!("safety-badge {}", area.safety_level.as_str()),
            description: area.description.clone(),
            score_label: area.score_label(),
            incidents_label: area.recent_incident_count.to_string(),
            crime_types: area.crime_types.clone(),
            detail_page_ref: area.detail_page_ref.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_area::RANCHI_CATALOG;

    #[test]
    fn test_namkom_details() {
        let namkom = RANCHI_CATALOG.get(&AreaId::new("namkom")).unwrap();
        let view = AreaDetailsView::from(namkom);
        assert_eq!(view.score_label, "7.8/10");
        assert_eq!(view.badge_text, "SAFE");
        assert_eq!(view.badge_class, "safety-badge safe");
        assert_eq!(view.incidents_label, "8");
    }

    #[test]
    fn test_details_keep_all_crime_types() {
        let dhurwa = RANCHI_CATALOG.get(&AreaId::new("dhurwa")).unwrap();
        let view = AreaDetailsView::from(dhurwa);
        assert_eq!(view.crime_types, vec!["Theft", "Chain Snatching", "Cybercrime"]);
    }
}
