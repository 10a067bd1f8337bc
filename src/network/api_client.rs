use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, FormData, Headers, Request, RequestInit, RequestMode, Response};

use super::config;
use crate::constants::{CAPTURE_FILENAME, CAPTURE_FORM_FIELD};
use crate::debug_log;
use crate::error::{AppError, AppResult};
use crate::models::{CapturedImage, CbcPrediction, CbcRequest, VisualPrediction};

/// Body of a prediction request.
enum Payload<'a> {
    Json(&'a str),
    // Content-Type is left to the browser so it can add the boundary.
    Multipart(&'a FormData),
}

// REST client for the two prediction services
pub struct ApiClient;

impl ApiClient {
    /// POST the CBC values as JSON and decode the classification.
    pub async fn predict_cbc(request: &CbcRequest) -> AppResult<CbcPrediction> {
        let url = config::current().cbc_url()?.to_string();
        let body = serde_json::to_string(request)?;

        let text = Self::post(&url, Payload::Json(&body)).await?;
        debug_log!("CBC API response: {}", text);

        Ok(serde_json::from_str(&text)?)
    }

    /// POST the captured frame as a single multipart `file` part.
    pub async fn predict_visual(image: &CapturedImage) -> AppResult<VisualPrediction> {
        let url = config::current().visual_url()?.to_string();

        let blob = data_url_to_blob(&image.data_url).await?;
        let form = FormData::new().map_err(AppError::dom)?;
        form.append_with_blob_and_filename(CAPTURE_FORM_FIELD, &blob, CAPTURE_FILENAME)
            .map_err(AppError::dom)?;

        let text = Self::post(&url, Payload::Multipart(&form)).await?;
        debug_log!("Visual API response: {}", text);

        Ok(serde_json::from_str(&text)?)
    }

    // Helper function to make the POST request; returns the raw body text.
    async fn post(url: &str, payload: Payload<'_>) -> AppResult<String> {
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);

        let headers = Headers::new().map_err(AppError::dom)?;
        match payload {
            Payload::Json(body) => {
                opts.set_body(&JsValue::from_str(body));
                headers
                    .append("Content-Type", "application/json")
                    .map_err(AppError::dom)?;
            }
            Payload::Multipart(form) => {
                opts.set_body(&JsValue::from(form.clone()));
            }
        }
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(url, &opts).map_err(AppError::network)?;

        let window = web_sys::window().ok_or_else(|| AppError::Dom("no global window exists".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(AppError::network)?;
        let resp: Response = resp_value.dyn_into().map_err(AppError::network)?;

        // Any non-2xx is reported by status only; the body is not inspected.
        if !resp.ok() {
            return Err(AppError::Http { status: resp.status() });
        }

        let text = JsFuture::from(resp.text().map_err(AppError::network)?)
            .await
            .map_err(AppError::network)?;
        Ok(text.as_string().unwrap_or_default())
    }
}

/// Decode a `data:` URL into a `Blob` by letting the browser fetch it.
async fn data_url_to_blob(data_url: &str) -> AppResult<Blob> {
    let window = web_sys::window().ok_or_else(|| AppError::Dom("no global window exists".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_str(data_url))
        .await
        .map_err(AppError::dom)?;
    let resp: Response = resp_value.dyn_into().map_err(AppError::dom)?;
    let blob = JsFuture::from(resp.blob().map_err(AppError::dom)?)
        .await
        .map_err(AppError::dom)?;
    blob.dyn_into::<Blob>().map_err(AppError::dom)
}
