// Shared HTTP plumbing for every Leaseweb API surface.
//
// Base URL: {scheme}://{host}/ (defaults to https://api.leaseweb.com/)
// Auth: X-LSW-Auth header

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{Error, ErrorBody};
use crate::transport::TransportConfig;

pub const DEFAULT_HOST: &str = "api.leaseweb.com";
pub const DEFAULT_SCHEME: &str = "https";

/// Header carrying the API key on every request.
pub const AUTH_HEADER: &str = "X-LSW-Auth";

/// Connection settings handed down from the provider configuration.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub api_key: SecretString,
    /// Host (and optional port) of the API, e.g. `api.leaseweb.com`.
    pub host: Option<String>,
    /// `https` unless overridden, mostly for testing against local mocks.
    pub scheme: Option<String>,
}

impl Configuration {
    pub fn new(api_key: SecretString) -> Self {
        Self {
            api_key,
            host: None,
            scheme: None,
        }
    }

    pub fn base_url(&self) -> Result<Url, Error> {
        let scheme = self.scheme.as_deref().unwrap_or(DEFAULT_SCHEME);
        let host = self
            .host
            .as_deref()
            .unwrap_or(DEFAULT_HOST)
            .trim_end_matches('/');
        Ok(Url::parse(&format!("{scheme}://{host}/"))?)
    }
}

// ── Client ───────────────────────────────────────────────────────────

/// Low-level JSON client shared by the per-API clients.
///
/// Cheap to clone: the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a provider configuration and transport settings.
    ///
    /// Injects `X-LSW-Auth` as a sensitive default header on every request.
    pub fn new(config: &Configuration, transport: &TransportConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut key_value = HeaderValue::from_str(config.api_key.expose_secret()).map_err(|e| {
            Error::Authentication {
                message: format!("invalid API key header value: {e}"),
            }
        })?;
        key_value.set_sensitive(true);
        headers.insert(AUTH_HEADER, key_value);

        let http = transport.build_client_with_headers(headers)?;
        let base_url = config.base_url()?;

        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let mut base_url = Url::parse(base_url)?;
        let path = base_url.path().trim_end_matches('/').to_owned();
        base_url.set_path(&format!("{path}/"));
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"publicCloud/v1/instances"`) onto the base URL.
    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        Self::handle_response(resp).await
    }

    pub(crate) async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        Self::handle_response(resp).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        Self::handle_response(resp).await
    }

    pub(crate) async fn post_no_response<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        Self::handle_empty(resp).await
    }

    /// POST an action endpoint that takes no body.
    pub(crate) async fn post_action(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self.http.post(url).send().await?;
        Self::handle_empty(resp).await
    }

    /// POST an action endpoint that takes no body but answers with JSON.
    pub(crate) async fn post_action_with_response<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self.http.post(url).send().await?;
        Self::handle_response(resp).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("PUT {url}");

        let resp = self.http.put(url).json(body).send().await?;
        Self::handle_response(resp).await
    }

    pub(crate) async fn put_no_response<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("PUT {url}");

        let resp = self.http.put(url).json(body).send().await?;
        Self::handle_empty(resp).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        Self::handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview = body_preview(&body);
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn handle_empty(resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let body = resp.text().await.unwrap_or_default();
        debug!(
            status = status.as_u16(),
            body = %body_preview(&body),
            "request failed"
        );

        Error::Api(ErrorBody {
            status: status.as_u16(),
            body,
        })
    }
}

/// First 200 characters of a response body, for logs and error messages.
fn body_preview(body: &str) -> String {
    body.chars().take(200).collect()
}
