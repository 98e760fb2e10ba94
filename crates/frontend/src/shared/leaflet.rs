//! Minimal bindings to the global Leaflet `L` namespace.
//!
//! Only the calls the page needs: create the map, add tiles, place and
//! restyle markers, bind popups, recenter, and add a custom control.
//! Leaflet itself is loaded by `index.html`.

use contracts::domain::a001_area::Coordinates;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `L.Map`
    pub type Map;

    #[wasm_bindgen(js_namespace = L, js_name = map, catch)]
    pub fn create_map(element: &web_sys::HtmlElement) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &JsValue, zoom: u8) -> Map;

    /// `L.TileLayer`
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &Map) -> TileLayer;

    /// `L.Marker`
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn marker(lat_lng: &JsValue, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, map: &Map) -> Marker;

    #[wasm_bindgen(method, js_name = setIcon)]
    pub fn set_icon(this: &Marker, icon: &DivIcon) -> Marker;

    #[wasm_bindgen(method, js_name = setZIndexOffset)]
    pub fn set_z_index_offset(this: &Marker, offset: i32) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Marker, content: &web_sys::HtmlElement) -> Marker;

    #[wasm_bindgen(method, js_name = on)]
    pub fn on(this: &Marker, event: &str, handler: &js_sys::Function) -> Marker;

    /// `L.DivIcon`
    pub type DivIcon;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    pub fn div_icon(options: &JsValue) -> DivIcon;

    /// `L.Control`
    pub type Control;

    #[wasm_bindgen(js_namespace = L, js_name = control)]
    pub fn control(options: &JsValue) -> Control;

    #[wasm_bindgen(method, setter = onAdd)]
    pub fn set_on_add(this: &Control, on_add: &js_sys::Function);

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Control, map: &Map) -> Control;
}

#[derive(Serialize)]
pub struct TileLayerOptions<'a> {
    pub attribution: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivIconOptions<'a> {
    pub class_name: &'a str,
    pub html: &'a str,
    pub icon_size: [u32; 2],
    pub icon_anchor: [u32; 2],
}

#[derive(Serialize)]
pub struct ControlOptions<'a> {
    pub position: &'a str,
}

/// Serialize Leaflet options into a plain JS object.
pub fn to_options<T: Serialize>(options: &T) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(options).map_err(|e| format!("Invalid Leaflet options: {}", e))
}

/// `{ icon }` for `L.marker`; icons are JS objects and cannot go through serde.
pub fn marker_options(icon: &DivIcon) -> Result<JsValue, String> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &JsValue::from_str("icon"), icon)
        .map_err(|e| format!("Failed to set marker icon: {:?}", e))?;
    Ok(options.into())
}

pub fn lat_lng(coordinates: Coordinates) -> JsValue {
    let pair = js_sys::Array::new();
    pair.push(&JsValue::from_f64(coordinates.lat));
    pair.push(&JsValue::from_f64(coordinates.lon));
    pair.into()
}
