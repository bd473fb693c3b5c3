//! Thin JSON client for the AppTrust REST API.
//!
//! The service layer talks to [`ApptrustHttpClient`] only, so it can be driven
//! by [`JfrogHttpClient`] in production and by a recording fake in tests.
#[cfg(test)]
pub(crate) mod fake;

use std::fs;
use std::path::Path;
use std::time::Duration;

use bytes::Bytes;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Certificate, Identity, Method, Url};
use serde::Serialize;

use crate::config::ServerDetails;
use crate::error::{AppTrustError, Result};

/// Every endpoint path is relative to `<platform-url>/apptrust/api`
pub const APPTRUST_API_PATH: &str = "apptrust/api";

/// Status code and raw body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[allow(async_fn_in_trait)]
pub trait ApptrustHttpClient {
    async fn get(&self, path: &str) -> Result<HttpResponse>;

    async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
        params: &[(&str, String)],
    ) -> Result<HttpResponse>;

    async fn patch<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<HttpResponse>;

    async fn delete(&self, path: &str, params: &[(&str, String)]) -> Result<HttpResponse>;
}

/// Joins the platform URL, the API prefix, `path` and the query parameters.
pub fn build_url(base_url: &str, path: &str, params: &[(&str, String)]) -> Result<Url> {
    let base = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{base_url}/")
    };
    let raw = format!("{base}{APPTRUST_API_PATH}{path}");

    let mut url =
        Url::parse(&raw).map_err(|e| AppTrustError::config(format!("invalid URL '{raw}': {e}")))?;
    if !params.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
    }
    Ok(url)
}

/// Bytes left raw in a path segment: unreserved characters plus the
/// sub-delimiters that never split a segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'=')
    .remove(b':')
    .remove(b'@');

/// Percent-escapes a single path segment, `/` `;` and `,` included.
///
/// `.` and `..` are rejected: URL normalization would resolve them away.
pub fn escape_path_segment(segment: &str) -> Result<String> {
    if segment == "." || segment == ".." {
        return Err(AppTrustError::invalid_flag(format!(
            "'{segment}' cannot be used as a URL path segment"
        )));
    }
    Ok(utf8_percent_encode(segment, PATH_SEGMENT).to_string())
}

/// [`ApptrustHttpClient`] backed by `reqwest`, built once per invocation.
pub struct JfrogHttpClient {
    client: reqwest::Client,
    base_url: String,
    retries: u32,
    retry_wait: Duration,
}

impl JfrogHttpClient {
    pub fn new(details: &ServerDetails) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if !details.access_token.is_empty() {
            let mut bearer = HeaderValue::from_str(&format!("Bearer {}", details.access_token))?;
            bearer.set_sensitive(true);
            headers.insert(AUTHORIZATION, bearer);
        }

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(details.insecure_tls);

        if let Some(dir) = &details.certs_dir {
            for certificate in load_certificates(dir)? {
                builder = builder.add_root_certificate(certificate);
            }
        }

        if let (Some(cert), Some(key)) = (&details.client_cert_path, &details.client_cert_key_path)
        {
            let identity = Identity::from_pkcs8_pem(&fs::read(cert)?, &fs::read(key)?)?;
            builder = builder.identity(identity);
        }

        let http = &details.http;
        if let Some(secs) = http.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = http.dial_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: details.url.clone(),
            retries: http.retries,
            retry_wait: Duration::from_millis(http.retry_wait_ms),
        })
    }

    async fn send(&self, method: Method, url: Url, body: Option<Vec<u8>>) -> Result<HttpResponse> {
        let mut attempt = 0;
        loop {
            let mut request = self.client.request(method.clone(), url.clone());
            if let Some(body) = &body {
                request = request.body(body.clone());
            }

            match request.send().await {
                Ok(response) if response.status().is_server_error() && attempt < self.retries => {
                    log::debug!(
                        "{method} {url} returned {}, retrying ({}/{})",
                        response.status(),
                        attempt + 1,
                        self.retries
                    );
                }
                Ok(response) => {
                    let status = response.status().as_u16();
                    let body = response.bytes().await?;
                    return Ok(HttpResponse { status, body });
                }
                Err(err) if attempt < self.retries && !err.is_builder() => {
                    log::debug!(
                        "{method} {url} failed: {err}, retrying ({}/{})",
                        attempt + 1,
                        self.retries
                    );
                }
                Err(err) => return Err(err.into()),
            }

            attempt += 1;
            tokio::time::sleep(self.retry_wait).await;
        }
    }
}

impl ApptrustHttpClient for JfrogHttpClient {
    async fn get(&self, path: &str) -> Result<HttpResponse> {
        let url = build_url(&self.base_url, path, &[])?;
        log::debug!("Sending GET request to: {url}");
        self.send(Method::GET, url, None).await
    }

    async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
        params: &[(&str, String)],
    ) -> Result<HttpResponse> {
        let url = build_url(&self.base_url, path, params)?;
        let content = serde_json::to_vec(body)?;
        log::debug!("Sending POST request to: {url}");
        self.send(Method::POST, url, Some(content)).await
    }

    async fn patch<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<HttpResponse> {
        let url = build_url(&self.base_url, path, &[])?;
        let content = serde_json::to_vec(body)?;
        log::debug!("Sending PATCH request to: {url}");
        self.send(Method::PATCH, url, Some(content)).await
    }

    async fn delete(&self, path: &str, params: &[(&str, String)]) -> Result<HttpResponse> {
        let url = build_url(&self.base_url, path, params)?;
        log::debug!("Sending DELETE request to: {url}");
        self.send(Method::DELETE, url, None).await
    }
}

/// Reads every PEM file of `dir`. A missing directory holds no certificates.
pub fn load_certificates(dir: &Path) -> Result<Vec<Certificate>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut certificates = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_pem = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| matches!(ext, "pem" | "crt" | "cer"));
        if !path.is_file() || !is_pem {
            continue;
        }

        log::debug!("Loading certificate {}", path.display());
        certificates.push(Certificate::from_pem(&fs::read(&path)?)?);
    }
    Ok(certificates)
}
