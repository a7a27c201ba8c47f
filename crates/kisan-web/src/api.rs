//! Browser glue for the lead API

use kisan_core::{Attachment, HttpLeadGateway, SiteError};
use wasm_bindgen_futures::JsFuture;

/// Gateway pointed at the origin baked in at build time
pub fn gateway() -> HttpLeadGateway {
    HttpLeadGateway::default()
}

/// Read a picked file into memory
pub async fn read_attachment(file: &web_sys::File) -> Result<Attachment, SiteError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| SiteError::Request(format!("could not read {}: {e:?}", file.name())))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(Attachment::new(file.name(), file.type_(), bytes))
}

/// Blocking browser alert
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
