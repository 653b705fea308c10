// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use async_trait::async_trait;
use bytes::Bytes;
use s3_connector::s3::error::Error;
use s3_connector::s3::string_map::StringMap;
use s3_connector::s3::transport::{HttpRequest, HttpResponse, Transport};
use std::collections::VecDeque;
use std::sync::Mutex;

/// [`Transport`] that replays scripted responses and records every request.
///
/// When the script runs dry it answers `500` with an S3 error body so that
/// an unexpected extra request fails loudly.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, response: HttpResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn remaining(&self) -> usize {
        self.responses.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        log::debug!("mock {} {}", request.method, request.url);
        self.requests.lock().unwrap().push(request.clone());

        let mut resp = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                response(
                    500,
                    &[("content-type", "application/xml")],
                    "<Error><Code>MockExhausted</Code><Message>no scripted response left</Message></Error>",
                )
            });

        let success = (200..300).contains(&resp.status);
        if success && request.discard_body {
            resp.body = Bytes::new();
        } else if let (true, Some(path)) = (success, &request.sink) {
            tokio::fs::write(path, &resp.body).await?;
            resp.body = Bytes::new();
        }
        Ok(resp)
    }
}

/// Builds a response with lowercase header names
pub fn response(status: u16, headers: &[(&str, &str)], body: &str) -> HttpResponse {
    let mut map = StringMap::new();
    for (name, value) in headers {
        map.insert(name.to_lowercase(), value.to_string());
    }
    HttpResponse {
        status,
        headers: map,
        body: Bytes::from(body.to_string()),
    }
}

pub fn xml_response(status: u16, body: &str) -> HttpResponse {
    response(status, &[("content-type", "application/xml")], body)
}
