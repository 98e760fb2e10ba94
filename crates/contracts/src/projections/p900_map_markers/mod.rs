//! Desired state of the map: one marker per area plus the view focus.
//!
//! Computed from scratch from `{catalog, selection}`; the frontend adapter
//! only pushes the result into the mapping widget.

use crate::domain::a001_area::{Area, AreaCatalog, AreaId, Coordinates, SafetyLevel};
use crate::shared::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerEmphasis {
    Normal,
    Highlighted,
}

/// Visual encoding of one marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub emphasis: MarkerEmphasis,
    pub level: SafetyLevel,
    pub color: String,
    /// Icon edge length in pixels.
    pub size: u32,
    pub scale: Option<f64>,
    pub z_index: Option<i32>,
}

impl MarkerStyle {
    pub fn normal(level: SafetyLevel, config: &AppConfig) -> Self {
        Self {
            emphasis: MarkerEmphasis::Normal,
            level,
            color: config.markers.colors.for_level(level).to_string(),
            size: config.markers.normal_size,
            scale: None,
            z_index: None,
        }
    }

    pub fn highlighted(level: SafetyLevel, config: &AppConfig) -> Self {
        Self {
            emphasis: MarkerEmphasis::Highlighted,
            level,
            color: config.markers.colors.for_level(level).to_string(),
            size: config.markers.highlighted_size,
            scale: Some(config.markers.highlighted_scale),
            z_index: Some(config.markers.highlighted_z_index),
        }
    }

    pub fn is_highlighted(&self) -> bool {
        self.emphasis == MarkerEmphasis::Highlighted
    }

    /// Icon anchor, the center of the square icon.
    pub fn anchor(&self) -> u32 {
        self.size / 2
    }

    pub fn class_name(&self) -> &'static str {
        match self.emphasis {
            MarkerEmphasis::Normal => "custom-marker",
            MarkerEmphasis::Highlighted => "custom-marker selected",
        }
    }

    pub fn inner_html(&self) -> String {
        let mut style = format!("background-color: {}", self.color);
        if let Some(scale) = self.scale {
            style.push_str(&format!("; transform: scale({})", scale));
        }
        if let Some(z) = self.z_index {
            style.push_str(&format!("; z-index: {}", z));
        }
        format!(
            r#"<div class="custom-marker marker-{}" style="{}"></div>"#,
            self.level.as_str(),
            style
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerView {
    pub area_id: AreaId,
    pub coordinates: Coordinates,
    pub style: MarkerStyle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapFocus {
    pub center: Coordinates,
    pub zoom: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapViewState {
    pub markers: Vec<MarkerView>,
    pub focus: MapFocus,
}

impl MapViewState {
    pub fn marker(&self, id: &AreaId) -> Option<&MarkerView> {
        self.markers.iter().find(|m| &m.area_id == id)
    }

    pub fn highlighted(&self) -> impl Iterator<Item = &MarkerView> {
        self.markers.iter().filter(|m| m.style.is_highlighted())
    }
}

/// Marker styles and focus for the given selection.
///
/// With no (or an unknown) selection every marker is normal and the focus is
/// the configured city view.
pub fn project_map(
    catalog: &AreaCatalog,
    selected: Option<&AreaId>,
    config: &AppConfig,
) -> MapViewState {
    let mut focus = MapFocus {
        center: config.map.center(),
        zoom: config.map.zoom,
    };

    let markers: Vec<MarkerView> = catalog
        .iter()
        .map(|area| {
            let style = if selected == Some(&area.id) {
                focus = MapFocus {
                    center: area.coordinates,
                    zoom: config.map.selected_zoom,
                };
                MarkerStyle::highlighted(area.safety_level, config)
            } else {
                MarkerStyle::normal(area.safety_level, config)
            };
            MarkerView {
                area_id: area.id.clone(),
                coordinates: area.coordinates,
                style,
            }
        })
        .collect();

    MapViewState { markers, focus }
}

/// Popup markup bound to an area's marker. The button carries the area id
/// in `data-area` so the adapter can wire it to selection.
pub fn popup_html(area: &Area) -> String {
    format!(
        r#"<div class="popup-header">{name}</div>
<div class="popup-safety-badge {level}">{level}</div>
<div><strong>Safety Score:</strong> {score}</div>
<div><strong>Recent Incidents:</strong> {incidents}</div>
<div><strong>Common Crimes:</strong> {crimes}</div>
<button class="popup-details-btn" data-area="{id}">View Details</button>"#,
        name = area.name,
        level = area.safety_level.as_str(),
        score = area.score_label(),
        incidents = area.recent_incident_count,
        crimes = area.headline_crimes().join(", "),
        id = area.id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_area::RANCHI_CATALOG;
    use crate::shared::config::load_config;

    #[test]
    fn test_no_selection_uses_city_view() {
        let config = load_config().unwrap();
        let view = project_map(&RANCHI_CATALOG, None, &config);
        assert_eq!(view.markers.len(), RANCHI_CATALOG.len());
        assert_eq!(view.highlighted().count(), 0);
        assert_eq!(view.focus.center, config.map.center());
        assert_eq!(view.focus.zoom, 11);
    }

    #[test]
    fn test_exactly_one_highlighted_for_every_area() {
        let config = load_config().unwrap();
        for area in RANCHI_CATALOG.iter() {
            let view = project_map(&RANCHI_CATALOG, Some(&area.id), &config);
            let highlighted: Vec<_> = view.highlighted().collect();
            assert_eq!(highlighted.len(), 1);
            assert_eq!(highlighted[0].area_id, area.id);
            assert_eq!(view.focus.center, area.coordinates);
            assert_eq!(view.focus.zoom, 13);
            for marker in view.markers.iter().filter(|m| m.area_id != area.id) {
                assert_eq!(marker.style.emphasis, MarkerEmphasis::Normal);
                assert_eq!(marker.style.size, 20);
            }
        }
    }

    #[test]
    fn test_marker_markup() {
        let config = load_config().unwrap();
        let normal = MarkerStyle::normal(SafetyLevel::Safe, &config);
        assert_eq!(normal.class_name(), "custom-marker");
        assert_eq!(normal.anchor(), 10);
        assert_eq!(
            normal.inner_html(),
            r##"<div class="custom-marker marker-safe" style="background-color: #28a745"></div>"##
        );

        let selected = MarkerStyle::highlighted(SafetyLevel::Danger, &config);
        assert_eq!(selected.class_name(), "custom-marker selected");
        assert_eq!(selected.anchor(), 13);
        assert!(selected.inner_html().contains("transform: scale(1.3); z-index: 1000"));
        assert!(selected.inner_html().contains("#dc3545"));
    }

    #[test]
    fn test_popup_lists_two_crimes() {
        let harmu = RANCHI_CATALOG.get(&AreaId::new("harmu")).unwrap();
        let html = popup_html(harmu);
        assert!(html.contains("Robbery, Street Crime"));
        assert!(!html.contains("Vehicle Theft"));
        assert!(html.contains(r#"data-area="harmu""#));
        assert!(html.contains("5.8/10"));
    }
}
