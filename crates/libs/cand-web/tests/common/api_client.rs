use reqwest::{Method, StatusCode, header::CONTENT_TYPE};
use serde::de::DeserializeOwned;

pub struct ApiClient {
    pub url: String,
    client: reqwest::Client,
}

/// Status, content type and raw body of a response.
pub struct RawResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl RawResponse {
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_str(&self.body).expect("Couldn't Parse Value")
    }
}

impl ApiClient {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    fn path(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.url)
    }

    pub async fn send(&self, method: Method, endpoint: &str, body: Option<&str>) -> RawResponse {
        let mut request = self.client.request(method, self.path(endpoint));
        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(body.to_string());
        }
        let response = request.send().await.expect("Failed to send http request");
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(String::from);
        let body = response
            .text()
            .await
            .expect("Failed to get response text");

        RawResponse {
            status,
            content_type,
            body,
        }
    }

    pub async fn post(&self, endpoint: &str, body: &str) -> RawResponse {
        self.send(Method::POST, endpoint, Some(body)).await
    }

    pub async fn get(&self, endpoint: &str) -> RawResponse {
        self.send(Method::GET, endpoint, None).await
    }
}
