use wasm_bindgen::prelude::*;

mod js_list;

pub use js_list::{join_array, split_to_array};

/// Use wee_alloc as the global allocator for smaller WASM binary size
#[cfg(feature = "size_opt")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Maximum input size in code units (10 MB)
const MAX_INPUT_SIZE: usize = 10 * 1024 * 1024;

/// Initialize panic hook for better error messages in browser console.
/// Call this once when the module is loaded for improved debugging.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

pub(crate) fn options() -> spilornis::Options {
    spilornis::Options {
        max_length: Some(MAX_INPUT_SIZE),
        ..spilornis::Options::default()
    }
}

/// Split a list into its elements, returned as a JSON array of strings
#[wasm_bindgen]
pub fn list_to_json(list: &str, pretty: bool) -> Result<String, String> {
    let units: Vec<u16> = list.encode_utf16().collect();
    let elements =
        spilornis::split_list_with(&units, &options()).map_err(|e| format!("List error: {}", e))?;

    if pretty {
        serde_json::to_string_pretty(&elements).map_err(|e| format!("JSON encoding error: {}", e))
    } else {
        serde_json::to_string(&elements).map_err(|e| format!("JSON encoding error: {}", e))
    }
}

/// Join a JSON array of strings into a list
#[wasm_bindgen]
pub fn json_to_list(json_str: &str) -> Result<String, String> {
    if json_str.len() > MAX_INPUT_SIZE {
        return Err(format!(
            "Input exceeds maximum size limit of {} bytes",
            MAX_INPUT_SIZE
        ));
    }

    let elements: Vec<String> =
        serde_json::from_str(json_str).map_err(|e| format!("Invalid JSON: {}", e))?;
    join_strings(&elements)
}

pub(crate) fn join_strings(elements: &[String]) -> Result<String, String> {
    let units: Vec<Vec<u16>> = elements.iter().map(|e| e.encode_utf16().collect()).collect();
    let text =
        spilornis::join_list_with(&units, &options()).map_err(|e| format!("List error: {}", e))?;
    String::from_utf16(&text).map_err(|e| format!("List error: {}", e))
}

/// Rewrite a list in canonical form
#[wasm_bindgen]
pub fn canonical_list(list: &str) -> Result<String, String> {
    let elements = list_elements(list)?;
    join_strings(&elements)
}

pub(crate) fn list_elements(list: &str) -> Result<Vec<String>, String> {
    let units: Vec<u16> = list.encode_utf16().collect();
    let elements =
        spilornis::split_list_with(&units, &options()).map_err(|e| format!("List error: {}", e))?;
    Ok(elements.to_strings_lossy())
}

/// Get the build descriptor of the list library
#[wasm_bindgen]
pub fn version() -> String {
    spilornis::version()
}
