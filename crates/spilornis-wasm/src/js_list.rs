use js_sys::Array;
use wasm_bindgen::prelude::*;

/// Split a list into a JavaScript array of strings
#[wasm_bindgen(js_name = splitToArray)]
pub fn split_to_array(list: &str) -> Result<Array, JsValue> {
    let elements = crate::list_elements(list).map_err(|e| JsValue::from_str(&e))?;
    Ok(elements.into_iter().map(JsValue::from).collect())
}

/// Join a JavaScript array of strings, numbers or booleans into a list
#[wasm_bindgen(js_name = joinArray)]
pub fn join_array(items: &Array) -> Result<String, JsValue> {
    let elements = items
        .iter()
        .map(|item| {
            item.as_string()
                .or_else(|| item.as_f64().map(|n| n.to_string()))
                .or_else(|| item.as_bool().map(|b| b.to_string()))
                .ok_or_else(|| JsValue::from_str("list elements must be strings"))
        })
        .collect::<Result<Vec<String>, JsValue>>()?;
    crate::join_strings(&elements).map_err(|e| JsValue::from_str(&e))
}
