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

//! HTTP transport used to execute signed requests.
//!
//! Non-2xx responses are data, not errors: classification happens in the
//! connector. Only connection-level failures surface as [`Error::Network`].

use crate::s3::error::Error;
use crate::s3::object_content::write_file;
use crate::s3::string_map::StringMap;
use async_trait::async_trait;
use bytes::Bytes;
use http::Method;
use std::fmt;
use std::path::PathBuf;

/// Fully signed request ready for the wire
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Bytes>,
    /// File the response body is written to on success, via a temporary
    /// file renamed into place
    pub sink: Option<PathBuf>,
    pub verify_tls: bool,
    /// Skip reading the body of a successful response
    pub discard_body: bool,
}

#[derive(Clone, Debug, Default)]
pub struct HttpResponse {
    pub status: u16,
    /// Header names are lowercase; repeated headers are joined with `,`
    pub headers: StringMap,
    /// Empty when the body went to a sink or was discarded
    pub body: Bytes,
}

#[async_trait]
pub trait Transport: fmt::Debug + Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error>;
}

/// [`Transport`] backed by `reqwest`
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    verifying: reqwest::Client,
    permissive: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            verifying: Self::builder().build()?,
            permissive: Self::permissive_builder().build()?,
        })
    }

    fn builder() -> reqwest::ClientBuilder {
        let user_agent = String::from("s3-connector (")
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ") s3-connector/"
            + env!("CARGO_PKG_VERSION");

        reqwest::Client::builder().no_gzip().user_agent(user_agent)
    }

    #[allow(unused_mut)]
    fn permissive_builder() -> reqwest::ClientBuilder {
        let mut builder = Self::builder();
        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        {
            builder = builder.danger_accept_invalid_certs(true);
        }
        builder
    }

    fn client(&self, verify_tls: bool) -> &reqwest::Client {
        if verify_tls {
            &self.verifying
        } else {
            &self.permissive
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let mut req = self
            .client(request.verify_tls)
            .request(request.method.clone(), &request.url);
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            req = req.body(body);
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();

        let mut headers = StringMap::new();
        for (name, value) in resp.headers() {
            let Ok(value) = value.to_str() else {
                log::debug!("skipping non-ASCII value of response header {name}");
                continue;
            };
            headers
                .entry(name.as_str().to_lowercase())
                .and_modify(|v| {
                    v.push(',');
                    v.push_str(value);
                })
                .or_insert_with(|| value.to_string());
        }

        let success = resp.status().is_success();
        let body = match (&request.sink, success) {
            (_, true) if request.discard_body => Bytes::new(),
            (Some(path), true) => {
                let written = write_file(resp.bytes_stream(), path).await?;
                log::debug!("wrote {written} bytes to {}", path.display());
                Bytes::new()
            }
            _ => resp.bytes().await?,
        };

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
