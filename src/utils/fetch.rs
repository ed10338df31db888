//! Browser fetch of the country dataset.
//!
//! One plain Fetch API GET. Timeouts are left to the browser's network layer.

use country_core::{Country, CountrySource, FetchError, parse_countries};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::COUNTRIES_URL;

/// REST Countries endpoint reached through the browser Fetch API.
#[derive(Clone, Debug)]
pub struct RestCountries {
    url: String,
}

impl RestCountries {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for RestCountries {
    fn default() -> Self {
        Self::new(COUNTRIES_URL)
    }
}

impl CountrySource for RestCountries {
    async fn fetch_all(&self) -> Result<Vec<Country>, FetchError> {
        let body = fetch_text(&self.url).await?;
        parse_countries(&body)
    }
}

/// GET `url` and return the body as text.
async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| FetchError::NetworkError(js_error_message(&e)))?
        .dyn_into()
        .map_err(|_| FetchError::InvalidContent)?;

    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }

    let text = JsFuture::from(response.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

    text.as_string().ok_or(FetchError::InvalidContent)
}

/// Best-effort message from a rejected promise value.
fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| "Unknown error".to_string())
}
