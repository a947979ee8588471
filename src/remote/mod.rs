//! Remote GraphQL Sync
//!
//! Optional mirror of local edits to a managed GraphQL API.
//! Only constructed when the host config carries an `api` section.

mod queue;
mod stock;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::auth::SharedAuthenticator;
use crate::config::ApiConfig;

pub use queue::*;
pub use stock::*;

#[derive(Serialize)]
struct GraphqlRequest<'a, V: Serialize> {
    query: &'a str,
    variables: V,
}

#[derive(Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Clone)]
pub struct GraphqlClient {
    endpoint: String,
    auth: SharedAuthenticator,
}

impl GraphqlClient {
    pub fn new(api: &ApiConfig, auth: SharedAuthenticator) -> Self {
        Self {
            endpoint: api.endpoint.clone(),
            auth,
        }
    }

    /// POST one GraphQL document and decode its `data` member
    pub async fn execute<V, T>(&self, query: &str, variables: V) -> Result<T, String>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let body = request_body(query, variables)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(&self.endpoint, &opts).map_err(js_err)?;
        let headers = request.headers();
        headers.set("Content-Type", "application/json").map_err(js_err)?;
        for (name, value) in self.auth.request_headers() {
            headers.set(&name, &value).map_err(js_err)?;
        }

        let window = web_sys::window().ok_or("no window")?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await.map_err(js_err)?;
        let resp: Response = resp_value.dyn_into().map_err(js_err)?;
        if !resp.ok() {
            return Err(format!("API error: {}", resp.status()));
        }

        let json = JsFuture::from(resp.json().map_err(js_err)?).await.map_err(js_err)?;
        let response: GraphqlResponse<T> = serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())?;
        into_data(response)
    }
}

fn request_body<V: Serialize>(query: &str, variables: V) -> Result<String, String> {
    serde_json::to_string(&GraphqlRequest { query, variables }).map_err(|e| e.to_string())
}

fn into_data<T>(response: GraphqlResponse<T>) -> Result<T, String> {
    if !response.errors.is_empty() {
        let messages: Vec<String> = response.errors.into_iter().map(|e| e.message).collect();
        return Err(messages.join("; "));
    }
    response.data.ok_or_else(|| "Empty response".to_string())
}

fn js_err(e: JsValue) -> String {
    format!("{:?}", e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = request_body("query { ping }", serde_json::json!({ "x": 1 })).unwrap();
        assert_eq!(body, r#"{"query":"query { ping }","variables":{"x":1}}"#);
    }

    #[test]
    fn test_errors_take_precedence_over_data() {
        let response: GraphqlResponse<serde_json::Value> = serde_json::from_str(
            r#"{"data": null, "errors": [{"message": "Unauthorized"}, {"message": "Denied"}]}"#,
        )
        .unwrap();
        assert_eq!(into_data(response).unwrap_err(), "Unauthorized; Denied");
    }

    #[test]
    fn test_missing_data_is_error() {
        let response: GraphqlResponse<serde_json::Value> = serde_json::from_str("{}").unwrap();
        assert_eq!(into_data(response).unwrap_err(), "Empty response");
    }
}
