use std::collections::VecDeque;
use std::sync::Mutex;

use serde::Serialize;
use serde_json::Value;

use super::{ApptrustHttpClient, HttpResponse};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
    pub params: Vec<(String, String)>,
}

/// Records every request and answers from a queue of canned responses.
/// An empty queue answers `200` with no body.
#[derive(Default)]
pub struct FakeClient {
    requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<VecDeque<HttpResponse>>,
}

impl FakeClient {
    pub fn responding(status: u16, body: &str) -> Self {
        let client = Self::default();
        client.push_response(status, body);
        client
    }

    pub fn push_response(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(HttpResponse::new(status, body.to_string()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The single request sent so far.
    pub fn request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {requests:?}");
        requests[0].clone()
    }

    fn record(
        &self,
        method: &'static str,
        path: &str,
        body: Option<Value>,
        params: &[(&str, String)],
    ) -> HttpResponse {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            body,
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| HttpResponse::new(200, ""))
    }
}

impl ApptrustHttpClient for FakeClient {
    async fn get(&self, path: &str) -> Result<HttpResponse> {
        Ok(self.record("GET", path, None, &[]))
    }

    async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
        params: &[(&str, String)],
    ) -> Result<HttpResponse> {
        let body = serde_json::to_value(body)?;
        Ok(self.record("POST", path, Some(body), params))
    }

    async fn patch<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<HttpResponse> {
        let body = serde_json::to_value(body)?;
        Ok(self.record("PATCH", path, Some(body), &[]))
    }

    async fn delete(&self, path: &str, params: &[(&str, String)]) -> Result<HttpResponse> {
        Ok(self.record("DELETE", path, None, params))
    }
}
