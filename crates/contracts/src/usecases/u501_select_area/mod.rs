//! Area selection: the single source of truth for "currently selected area".

use crate::domain::a001_area::{AreaCatalog, AreaId};
use crate::projections::p900_map_markers::{project_map, MapViewState};
use crate::projections::p902_area_details::AreaDetailsView;
use crate::shared::config::AppConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<AreaId>,
}

/// Everything the page must show after a selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionOutcome {
    pub details: AreaDetailsView,
    pub map: MapViewState,
}

impl SelectionState {
    /// Select `id` and derive the detail panel and marker styles.
    ///
    /// Ids missing from the catalog leave the state untouched and yield
    /// `None`. Selecting the same id twice produces the same outcome.
    pub fn select(
        &mut self,
        catalog: &AreaCatalog,
        id: &AreaId,
        config: &AppConfig,
    ) -> Option<SelectionOutcome> {
        let area = catalog.get(id)?;
        self.selected = Some(area.id.clone());

        Some(SelectionOutcome {
            details: AreaDetailsView::from(area),
            map: project_map(catalog, self.selected.as_ref(), config),
        })
    }

    /// Current map state without changing the selection.
    pub fn map_view(&self, catalog: &AreaCatalog, config: &AppConfig) -> MapViewState {
        project_map(catalog, self.selected.as_ref(), config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_area::RANCHI_CATALOG;
    use crate::shared::config::load_config;

    #[test]
    fn test_select_namkom() {
        let config = load_config().unwrap();
        let mut state = SelectionState::default();
        let outcome = state
            .select(&RANCHI_CATALOG, &AreaId::new("namkom"), &config)
            .unwrap();

        assert_eq!(state.selected.as_ref(), Some(&AreaId::new("namkom")));
        assert_eq!(outcome.details.score_label, "7.8/10");
        assert_eq!(outcome.details.badge_text, "SAFE");
        assert_eq!(outcome.map.highlighted().count(), 1);
        assert_eq!(
            outcome.map.focus.center,
            RANCHI_CATALOG.get(&AreaId::new("namkom")).unwrap().coordinates
        );
    }

    #[test]
    fn test_new_selection_replaces_previous() {
        let config = load_config().unwrap();
        let mut state = SelectionState::default();
        state.select(&RANCHI_CATALOG, &AreaId::new("harmu"), &config);
        let outcome = state
            .select(&RANCHI_CATALOG, &AreaId::new("patratu"), &config)
            .unwrap();

        let highlighted: Vec<_> = outcome.map.highlighted().map(|m| m.area_id.clone()).collect();
        assert_eq!(highlighted, vec![AreaId::new("patratu")]);
        assert!(!outcome
            .map
            .marker(&AreaId::new("harmu"))
            .unwrap()
            .style
            .is_highlighted());
    }

    #[test]
    fn test_select_is_idempotent() {
        let config = load_config().unwrap();
        let mut state = SelectionState::default();
        let first = state.select(&RANCHI_CATALOG, &AreaId::new("morabadi"), &config);
        let second = state.select(&RANCHI_CATALOG, &AreaId::new("morabadi"), &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_id_keeps_selection() {
        let config = load_config().unwrap();
        let mut state = SelectionState::default();
        state.select(&RANCHI_CATALOG, &AreaId::new("dhurwa"), &config);
        assert!(state
            .select(&RANCHI_CATALOG, &AreaId::new("nowhere"), &config)
            .is_none());
        assert_eq!(state.selected.as_ref(), Some(&AreaId::new("dhurwa")));
        assert_eq!(state.map_view(&RANCHI_CATALOG, &config).highlighted().count(), 1);
    }
}
