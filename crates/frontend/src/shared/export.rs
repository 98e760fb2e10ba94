//! Download helpers: serialize in memory, hand the file to the browser.

use contracts::domain::a001_area::AreaCatalog;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Exports the whole catalog as pretty-printed JSON and starts the download
pub fn export_catalog(catalog: &AreaCatalog, filename: &str) -> Result<(), String> {
    if catalog.is_empty() {
        return Err("Nothing to export".to_string());
    }

    let content = catalog
        .to_export_json()
        .map_err(|e| format!("Failed to serialize catalog: {}", e))?;

    let blob = create_blob(&content, "application/json")?;
    download_blob(&blob, filename)?;

    log::info!("Exported {} areas to {}", catalog.len(), filename);
    Ok(())
}

/// Creates a Blob holding `content`
fn create_blob(content: &str, mime_type: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime_type);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Starts the download through a temporary anchor.
/// The object URL is revoked right after the click.
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let result = click_download_link(&document, &url, filename);

    Url::revoke_object_url(&url)
        .map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    result
}

fn click_download_link(
    document: &web_sys::Document,
    url: &str,
    filename: &str,
) -> Result<(), String> {
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Ok(())
}
