//! Leaflet map of the areas.
//!
//! The map and its markers are created once when the container mounts and
//! kept in a thread-local handle; selection pushes new marker styles and a
//! new focus through [`apply_map_view`].

use crate::layout::global_context::{use_app, AppGlobalContext};
use crate::shared::leaflet::{
    self, ControlOptions, DivIcon, DivIconOptions, Map, Marker, TileLayerOptions,
};
use contracts::domain::a001_area::{Area, AreaCatalog, AreaId, SafetyLevel};
use contracts::projections::p900_map_markers::{popup_html, MapViewState, MarkerStyle};
use contracts::shared::config::AppConfig;
use leptos::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

struct MapHandle {
    map: Map,
    markers: HashMap<AreaId, Marker>,
}

thread_local! {
    static MAP_HANDLE: RefCell<Option<MapHandle>> = const { RefCell::new(None) };
}

fn div_icon_for(style: &MarkerStyle) -> Result<DivIcon, String> {
    let html = style.inner_html();
    let options = leaflet::to_options(&DivIconOptions {
        class_name: style.class_name(),
        html: &html,
        icon_size: [style.size, style.size],
        icon_anchor: [style.anchor(), style.anchor()],
    })?;
    Ok(leaflet::div_icon(&options))
}

fn document() -> Result<web_sys::Document, String> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "No document object".to_string())
}

fn create_div(class: &str, inner_html: &str) -> Result<web_sys::HtmlElement, String> {
    let div = document()?
        .create_element("div")
        .map_err(|e| format!("Failed to create element: {:?}", e))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|e| format!("Failed to cast element: {:?}", e))?;
    div.set_class_name(class);
    div.set_inner_html(inner_html);
    Ok(div)
}

/// Popup content with its "View Details" button wired to selection.
fn popup_element(area: &Area, ctx: AppGlobalContext) -> Result<web_sys::HtmlElement, String> {
    let container = create_div("area-popup", &popup_html(area))?;

    if let Ok(Some(button)) = container.query_selector("button[data-area]") {
        let id = area.id.clone();
        let on_click = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            ctx.select_area(&id);
        }) as Box<dyn FnMut(_)>);
        button
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|e| format!("Failed to bind popup button: {:?}", e))?;
        on_click.forget();
    }

    Ok(container)
}

fn legend_html() -> String {
    let items: String = SafetyLevel::all()
        .iter()
        .map(|level| {
            format!(
                r#"<div class="legend-item"><div class="legend-color {}"></div><span>{}</span></div>"#,
                level.as_str(),
                level.display_name()
            )
        })
        .collect();
    format!("<h4>Safety Levels</h4>{}", items)
}

fn add_legend(map: &Map) -> Result<(), String> {
    let control = leaflet::control(&leaflet::to_options(&ControlOptions {
        position: "bottomleft",
    })?);

    let on_add = Closure::wrap(Box::new(move |_map: JsValue| -> JsValue {
        match create_div("map-legend", &legend_html()) {
            Ok(div) => div.into(),
            Err(e) => {
                log::error!("Failed to build map legend: {}", e);
                JsValue::NULL
            }
        }
    }) as Box<dyn FnMut(JsValue) -> JsValue>);
    control.set_on_add(on_add.as_ref().unchecked_ref());
    on_add.forget();

    control.add_to(map);
    Ok(())
}

fn mount_map(
    element: &web_sys::HtmlElement,
    catalog: &AreaCatalog,
    view: &MapViewState,
    config: &AppConfig,
    ctx: AppGlobalContext,
) -> Result<(), String> {
    let map = leaflet::create_map(element).map_err(|e| format!("L.map failed: {:?}", e))?;
    map.set_view(&leaflet::lat_lng(view.focus.center), view.focus.zoom);

    let tile_options = leaflet::to_options(&TileLayerOptions {
        attribution: &config.map.attribution,
    })?;
    leaflet::tile_layer(&config.map.tile_url, &tile_options).add_to(&map);

    let mut markers = HashMap::with_capacity(view.markers.len());
    for marker_view in &view.markers {
        let Some(area) = catalog.get(&marker_view.area_id) else {
            continue;
        };

        let icon = div_icon_for(&marker_view.style)?;
        let marker = leaflet::marker(
            &leaflet::lat_lng(marker_view.coordinates),
            &leaflet::marker_options(&icon)?,
        );
        marker.add_to(&map);
        marker.bind_popup(&popup_element(area, ctx)?);

        let id = area.id.clone();
        let on_click = Closure::wrap(Box::new(move || {
            ctx.select_area(&id);
        }) as Box<dyn FnMut()>);
        marker.on("click", on_click.as_ref().unchecked_ref());
        on_click.forget();

        markers.insert(area.id.clone(), marker);
    }

    add_legend(&map)?;

    log::debug!("Map mounted with {} markers", markers.len());
    MAP_HANDLE.with(|slot| *slot.borrow_mut() = Some(MapHandle { map, markers }));
    Ok(())
}

/// Push marker styles and focus into the mounted map.
pub fn apply_map_view(view: &MapViewState) {
    MAP_HANDLE.with(|slot| {
        let slot = slot.borrow();
        let Some(handle) = slot.as_ref() else {
            log::warn!("apply_map_view: map is not mounted yet");
            return;
        };

        for marker_view in &view.markers {
            let Some(marker) = handle.markers.get(&marker_view.area_id) else {
                continue;
            };
            match div_icon_for(&marker_view.style) {
                Ok(icon) => {
                    marker.set_icon(&icon);
                    marker.set_z_index_offset(marker_view.style.z_index.unwrap_or(0));
                }
                Err(e) => log::error!("Marker `{}`: {}", marker_view.area_id, e),
            }
        }

        handle
            .map
            .set_view(&leaflet::lat_lng(view.focus.center), view.focus.zoom);
    });
}

#[component]
pub fn CrimeMap() -> impl IntoView {
    let ctx = use_app();
    let container = NodeRef::<leptos::html::Div>::new();

    Effect::new(move |_| {
        let Some(element) = container.get() else {
            return;
        };
        if MAP_HANDLE.with(|slot| slot.borrow().is_some()) {
            return;
        }

        let result = ctx.config.with_value(|config| {
            let view = ctx
                .selection
                .with_untracked(|state| state.map_view(ctx.catalog(), config));
            mount_map(&element, ctx.catalog(), &view, config, ctx)
        });
        if let Err(e) = result {
            log::error!("Failed to initialize map: {}", e);
        }
    });

    view! {
        <div id="crimeMap" class="crime-map" node_ref=container></div>
    }
}
