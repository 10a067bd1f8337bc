use gloo_timers::future::TimeoutFuture;
use js_sys::{Function, Reflect};
use serde_json::{json, Value};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{FormData, Request};

use crate::error::AppError;
use crate::messages::Message;
use crate::models::{CapturedImage, CbcField, CbcRequest, Gender};
use crate::network::{init_api_config_js, ApiClient};
use crate::router::Route;
use crate::state::{dispatch_global_message, AppState, FlowPhase, APP_STATE};

wasm_bindgen_test_configure!(run_in_browser);

const CBC_URL: &str = "https://cbc.test/predict";
const VISUAL_URL: &str = "https://visual.test/predict";

/// Replaces `window.fetch` for the lifetime of the value. `data:` URLs still
/// go to the browser so captured frames can be turned into blobs.
struct FetchStub {
    original: JsValue,
}

impl FetchStub {
    fn install(status: u16, body: &str) -> Self {
        let window = web_sys::window().unwrap();
        let original = Reflect::get(&window, &"fetch".into()).unwrap();
        Reflect::set(&window, &"__realFetch".into(), &original).unwrap();
        Reflect::set(&window, &"__lastRequest".into(), &JsValue::NULL).unwrap();

        let stub = Function::new_with_args(
            "input, init",
            &format!(
                "if (typeof input === 'string' && input.startsWith('data:')) {{ return window.__realFetch(input, init); }}
                 window.__lastRequest = input;
                 return Promise.resolve(new Response({body}, {{ status: {status} }}));",
                body = serde_json::to_string(body).unwrap(),
                status = status,
            ),
        );
        Reflect::set(&window, &"fetch".into(), &stub).unwrap();
        Self { original }
    }

    fn last_request(&self) -> Request {
        let window = web_sys::window().unwrap();
        Reflect::get(&window, &"__lastRequest".into())
            .unwrap()
            .dyn_into::<Request>()
            .expect("no request reached fetch")
    }
}

impl Drop for FetchStub {
    fn drop(&mut self) {
        let window = web_sys::window().unwrap();
        let _ = Reflect::set(&window, &"fetch".into(), &self.original);
    }
}

fn cbc_request() -> CbcRequest {
    CbcRequest { gender: Gender::Female, hemoglobin: 11.2, mch: 25.1, mchc: 31.4, mcv: 78.0 }
}

const PREDICTION_BODY: &str = r#"{"label":"Anemic","prediction_class":1,"confidence_scores":{"anemic_probability":0.82,"non_anemic_probability":0.18}}"#;

#[wasm_bindgen_test]
async fn non_2xx_is_an_http_error() {
    init_api_config_js(CBC_URL, VISUAL_URL);
    let _stub = FetchStub::install(500, "Internal Server Error");

    let err = ApiClient::predict_cbc(&cbc_request()).await.unwrap_err();
    assert!(matches!(err, AppError::Http { status: 500 }));
    assert_eq!(err.to_string(), "HTTP error! status: 500");
}

#[wasm_bindgen_test]
async fn cbc_posts_fixed_json_shape() {
    init_api_config_js(CBC_URL, VISUAL_URL);
    let stub = FetchStub::install(200, PREDICTION_BODY);

    let prediction = ApiClient::predict_cbc(&cbc_request()).await.unwrap();
    assert!(prediction.is_anemic());
    assert_eq!(prediction.confidence_scores.anemic_probability, 0.82);

    let request = stub.last_request();
    assert_eq!(request.method(), "POST");
    assert_eq!(request.url(), CBC_URL);
    assert_eq!(
        request.headers().get("Content-Type").unwrap().as_deref(),
        Some("application/json")
    );

    let text = JsFuture::from(request.text().unwrap()).await.unwrap().as_string().unwrap();
    let body: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        body,
        json!({"Gender": "Female", "Hemoglobin": 11.2, "MCH": 25.1, "MCHC": 31.4, "MCV": 78.0})
    );
}

#[wasm_bindgen_test]
async fn visual_posts_single_file_part() {
    init_api_config_js(CBC_URL, VISUAL_URL);
    let stub = FetchStub::install(200, r#"{"risk_label":"Low Risk","confidence_score":0.7}"#);

    let image = CapturedImage { data_url: "data:image/jpeg;base64,/9j/4AAQ".into() };
    let prediction = ApiClient::predict_visual(&image).await.unwrap();
    assert_eq!(prediction.risk_label, "Low Risk");

    let request = stub.last_request();
    assert_eq!(request.url(), VISUAL_URL);
    let content_type = request.headers().get("Content-Type").unwrap().unwrap_or_default();
    assert!(content_type.starts_with("multipart/form-data"), "{}", content_type);

    let form: FormData = JsFuture::from(request.form_data().unwrap())
        .await
        .unwrap()
        .dyn_into()
        .unwrap();
    let file = form.get("file");
    assert!(!file.is_undefined() && !file.is_null());
    let name = Reflect::get(&file, &"name".into()).unwrap().as_string();
    assert_eq!(name.as_deref(), Some("conjunctiva.jpg"));
    let mime = Reflect::get(&file, &"type".into()).unwrap().as_string();
    assert_eq!(mime.as_deref(), Some("image/jpeg"));
}

#[wasm_bindgen_test]
async fn failed_submission_lands_in_the_error_banner() {
    init_api_config_js(CBC_URL, VISUAL_URL);
    let document = web_sys::window().unwrap().document().unwrap();
    crate::ui::setup::create_base_ui(&document).unwrap();
    APP_STATE.with(|state| *state.borrow_mut() = AppState::new());
    let _stub = FetchStub::install(503, "");

    dispatch_global_message(Message::Navigate(Route::Cbc));
    dispatch_global_message(Message::CbcGenderSelected(Gender::Male));
    for (field, value) in [
        (CbcField::Hemoglobin, "10.1"),
        (CbcField::Mcv, "70"),
        (CbcField::Mch, "22"),
        (CbcField::Mchc, "30.5"),
    ] {
        dispatch_global_message(Message::CbcFieldChanged { field, value: value.to_string() });
    }
    dispatch_global_message(Message::CbcSubmit);

    // Let the spawned request settle
    TimeoutFuture::new(50).await;

    APP_STATE.with(|state| {
        let state = state.borrow();
        assert_eq!(state.cbc.phase(), FlowPhase::Error);
        assert!(state.cbc.result.is_none());
        assert_eq!(state.cbc.error.as_deref(), Some("HTTP error! status: 503"));
    });
    let banner = document.get_element_by_id(crate::constants::ID_CBC_ERROR).unwrap();
    assert_eq!(banner.text_content().as_deref(), Some("HTTP error! status: 503"));
}
