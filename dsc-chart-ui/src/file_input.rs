//! Reading the picked file out of an `<input type="file">`.

use dsc_core::upload::{UploadFile, CSV_CONTENT_TYPE};
use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

/// The first file selected in the input with id `input_id`, or `None` if
/// nothing is selected.
///
/// Contents are only read for files the browser reports as CSV; others are
/// returned empty so the selector can refuse them by content type.
pub async fn read_picked_file(input_id: &str) -> Option<UploadFile> {
    let document = web_sys::window()?.document()?;
    let input: HtmlInputElement = document.get_element_by_id(input_id)?.dyn_into().ok()?;
    let file = input.files()?.get(0)?;

    let content_type = file.type_();
    let bytes = if content_type == CSV_CONTENT_TYPE {
        match JsFuture::from(file.array_buffer()).await {
            Ok(buffer) => js_sys::Uint8Array::new(&buffer).to_vec(),
            Err(e) => {
                warn!("Could not read {}: {:?}", file.name(), e);
                return None;
            }
        }
    } else {
        Vec::new()
    };

    Some(UploadFile::new(file.name(), content_type, bytes))
}
