use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::classifier::{self, ErrorInput, HostValue};
use crate::pagination::{PageRequest, PaginationPlanner};
use crate::types;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = JSON)]
    fn parse(s: &str) -> JsValue;

    #[wasm_bindgen(catch, js_name = String)]
    fn js_string(value: &JsValue) -> Result<String, JsValue>;

    type ErrorLike;

    #[wasm_bindgen(catch, method, getter, structural)]
    fn message(this: &ErrorLike) -> Result<JsValue, JsValue>;
}

fn to_js(value: &serde_json::Value) -> JsValue {
    match serde_json::to_string(value) {
        Ok(json_str) => parse(&json_str),
        Err(_) => JsValue::NULL,
    }
}

fn to_js_serialized<T: serde::Serialize>(value: &T) -> JsValue {
    match serde_json::to_value(value) {
        Ok(json) => to_js(&json),
        Err(e) => error_result(&e.to_string()),
    }
}

fn error_result(msg: &str) -> JsValue {
    let obj = serde_json::json!({"error": msg});
    to_js(&obj)
}

/// Read whatever the wallet layer threw. `String(value)` and the `message`
/// getter can both throw (prototype-less objects, throwing getters, revoked
/// proxies); those reads come back as `None`.
fn host_value(value: &JsValue) -> HostValue {
    if let Some(text) = value.as_string() {
        return HostValue::Text(text);
    }
    if value.is_object() {
        return match value.unchecked_ref::<ErrorLike>().message() {
            Ok(message) if message.is_undefined() => HostValue::Other(js_string(value).ok()),
            Ok(message) => {
                HostValue::Message(message.as_string().or_else(|| js_string(&message).ok()))
            }
            Err(_) => HostValue::Message(None),
        };
    }
    HostValue::Other(js_string(value).ok())
}

fn error_input(value: &JsValue) -> ErrorInput<'static> {
    let type_name = value.js_typeof().as_string().unwrap_or_default();
    ErrorInput::from_host(host_value(value), &type_name)
}

/// Compute the newest-first index window for a page.
///
/// `request` is `{page?, perPage?, zeroBased?}`; omitted fields use the defaults.
#[wasm_bindgen]
pub fn plan_page(total: f64, request: JsValue) -> JsValue {
    let request: PageRequest = if request.is_undefined() || request.is_null() {
        PageRequest::default()
    } else {
        match serde_wasm_bindgen::from_value(request) {
            Ok(r) => r,
            Err(e) => return error_result(&format!("Invalid page request: {e}")),
        }
    };

    if total.fract() != 0.0 {
        return error_result("total must be an integer");
    }

    match PaginationPlanner::plan(total as i64, request) {
        Ok(window) => to_js_serialized(&window),
        Err(e) => error_result(&e.to_string()),
    }
}

/// Classify a caught wallet/provider/contract error into `{displayError, log, message}`.
#[wasm_bindgen]
pub fn classify_error(error: JsValue) -> JsValue {
    to_js_serialized(&classifier::classify(error_input(&error)))
}

/// Like [`classify_error`], with the failure kind and matched pattern attached.
#[wasm_bindgen]
pub fn inspect_error(error: JsValue) -> JsValue {
    let classification = classifier::ErrorClassifier::default().inspect(&error_input(&error));
    let obj = serde_json::json!({
        "record": classification.record,
        "kind": classification.kind.as_ref(),
        "pattern": classification.pattern,
    });
    to_js(&obj)
}

/// Translate a `getEvent(id)` result (array or keyed object) into an event.
#[wasm_bindgen]
pub fn parse_event(id: f64, raw: JsValue) -> JsValue {
    let value: serde_json::Value = match serde_wasm_bindgen::from_value(raw) {
        Ok(v) => v,
        Err(e) => return error_result(&format!("Invalid event tuple: {e}")),
    };
    let id = match types::id_from_f64(id) {
        Ok(id) => id,
        Err(e) => return error_result(&e.to_string()),
    };
    match types::parse_event(id, &value) {
        Ok(event) => to_js_serialized(&event),
        Err(e) => error_result(&e.to_string()),
    }
}

/// Translate a `getTicket(id)` result into a ticket.
#[wasm_bindgen]
pub fn parse_ticket(id: f64, raw: JsValue) -> JsValue {
    let value: serde_json::Value = match serde_wasm_bindgen::from_value(raw) {
        Ok(v) => v,
        Err(e) => return error_result(&format!("Invalid ticket tuple: {e}")),
    };
    let id = match types::id_from_f64(id) {
        Ok(id) => id,
        Err(e) => return error_result(&e.to_string()),
    };
    match types::parse_ticket(id, &value) {
        Ok(ticket) => to_js_serialized(&ticket),
        Err(e) => error_result(&e.to_string()),
    }
}
