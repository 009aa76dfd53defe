//! Portal API Bindings
//!
//! Front-end bindings to the portal's REST backend, over the browser
//! fetch API. Every request carries the session bearer token when one
//! exists (the portal-wide Authorization header).

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::{SchedulePayload, ScheduleRecord, SubjectRecord};

const API_BASE: &str = "http://127.0.0.1:8000/api";

fn js_err(context: &str, err: JsValue) -> String {
    format!("{}: {:?}", context, err)
}

async fn send(
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<String>,
) -> Result<Response, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    let has_body = body.is_some();
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let url = format!("{}{}", API_BASE, path);
    let request =
        Request::new_with_str_and_init(&url, &opts).map_err(|e| js_err("bad request", e))?;
    let headers = request.headers();
    if let Some(token) = token {
        headers
            .set("Authorization", &format!("Bearer {}", token))
            .map_err(|e| js_err("headers", e))?;
    }
    if has_body {
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| js_err("headers", e))?;
    }

    let win = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(win.fetch_with_request(&request))
        .await
        .map_err(|e| js_err("network error", e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "unexpected fetch result".to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {} for {}", response.status(), path));
    }
    Ok(response)
}

async fn fetch_json<T>(
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<String>,
) -> Result<T, String>
where
    T: serde::de::DeserializeOwned,
{
    let response = send(method, path, token, body).await?;
    let promise = response.json().map_err(|e| js_err("response body", e))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| js_err("response body", e))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

// ========================
// Catalog
// ========================

pub async fn list_subjects(token: Option<&str>) -> Result<Vec<SubjectRecord>, String> {
    fetch_json("GET", "/catalogos/materias/?limit=200", token, None).await
}

// ========================
// Schedule Store
// ========================

/// All persisted schedules for the current user; the last one is the
/// most recently saved.
pub async fn list_schedules(token: Option<&str>) -> Result<Vec<ScheduleRecord>, String> {
    fetch_json("GET", "/horarios/", token, None).await
}

pub async fn create_schedule(
    token: Option<&str>,
    payload: &SchedulePayload,
) -> Result<ScheduleRecord, String> {
    let body = serde_json::to_string(payload).map_err(|e| e.to_string())?;
    fetch_json("POST", "/horarios/", token, Some(body)).await
}

pub async fn delete_schedule(token: Option<&str>, id: i64) -> Result<(), String> {
    send("DELETE", &format!("/horarios/{}", id), token, None)
        .await
        .map(|_| ())
}
