//! Shared helper for OpenAI-compatible `GET /models` listings.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::Error;

/// Default timeout for a model listing request.
pub const DEFAULT_LISTING_TIMEOUT: Duration = Duration::from_secs(30);

/// Listing payload: `{ "data": [ { "id": ... }, ... ] }`.
#[derive(Debug, Deserialize)]
struct ModelsResponse {
    data: Vec<RemoteModel>,
}

/// One entry of a provider's model listing. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteModel {
    pub id: String,
}

/// Fetch the models a provider currently serves.
///
/// Sends `GET {base_url}/models` with a bearer token. The body must carry a
/// `data` array; anything else is reported as [`Error::Parse`]. Non-success
/// statuses become [`Error::Status`]. No retries; the request is abandoned
/// after `timeout`.
#[tracing::instrument(skip(client, api_key))]
pub async fn fetch_models(
    client: &reqwest::Client,
    provider: &str,
    base_url: &str,
    api_key: &str,
    timeout: Duration,
) -> Result<Vec<RemoteModel>, Error> {
    let url = format!("{base_url}/models");
    debug!("fetching models from {url}");

    let response = client
        .get(&url)
        .header("Authorization", format!("Bearer {api_key}"))
        .timeout(timeout)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(Error::Status {
            provider: provider.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    let parsed: ModelsResponse = serde_json::from_str(&body)?;
    info!("fetched {} models from {provider}", parsed.data.len());
    Ok(parsed.data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn list(base_url: &str) -> Result<Vec<RemoteModel>, Error> {
        fetch_models(
            &reqwest::Client::new(),
            "Test",
            base_url,
            "test-key",
            DEFAULT_LISTING_TIMEOUT,
        )
        .await
    }

    #[tokio::test]
    async fn returns_ids_in_listing_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/models"))
            .and(header("Authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "object": "list",
                "data": [
                    {"id": "m1", "object": "model", "owned_by": "someone"},
                    {"id": "m2"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let base_url = format!("{}/v1", server.uri());
        let models = list(&base_url).await.expect("fetch models");

        let ids: Vec<&str> = models.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m2"]);
    }

    #[tokio::test]
    async fn missing_data_field_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"models": []})),
            )
            .mount(&server)
            .await;

        let err = list(&server.uri()).await.unwrap_err();
        assert!(matches!(err, Error::Parse(_)), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn non_json_body_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = list(&server.uri()).await.unwrap_err();
        assert!(matches!(err, Error::Parse(_)), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn error_status_is_reported_with_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
            .mount(&server)
            .await;

        let err = list(&server.uri()).await.unwrap_err();
        match err {
            Error::Status {
                provider,
                status,
                body,
            } => {
                assert_eq!(provider, "Test");
                assert_eq!(status, 401);
                assert_eq!(body, "bad key");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
