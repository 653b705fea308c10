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

//! S3Request struct and implementation for executing HTTP requests.

use crate::s3::config::Configuration;
use crate::s3::error::Error;
use crate::s3::header_constants::*;
use crate::s3::http::{
    Url, has_sub_resource, location_host_override, resolve_host, should_verify_tls,
};
use crate::s3::signer::Signer;
use crate::s3::string_map::{StringMap, StringMapExt};
use crate::s3::transport::{HttpRequest, Transport};
use crate::s3::types::S3Response;
use crate::s3::utils::{UtcTime, urlencode_object_key, utc_now};
use bytes::Bytes;
use http::Method;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A single signed exchange with the service.
///
/// Built per call from a [`Configuration`], sent once and then either dropped
/// or kept inside an operation error.
pub struct S3Request {
    method: Method,
    bucket: String,
    key: String,
    host: String,
    https: bool,
    verify_tls: bool,
    path: String,
    base_resource: String,
    query: StringMap,
    amz_headers: StringMap,
    headers: StringMap,
    body: Option<Bytes>,
    sink: Option<PathBuf>,
    date: UtcTime,
    signer: Arc<dyn Signer>,
    prepared: bool,
}

impl S3Request {
    pub fn new(config: &Configuration, method: Method, bucket: &str, key: &str) -> Self {
        // A single leading slash is a path separator, any further ones belong to the key.
        let key = urlencode_object_key(key.strip_prefix('/').unwrap_or(key));
        let host = resolve_host(config, bucket);

        let path = if bucket.is_empty() || !config.use_legacy_path_style() {
            format!("/{key}")
        } else {
            format!("/{bucket}/{key}")
        };
        // The V2 canonicalized resource names the bucket even when the host does.
        let base_resource = if bucket.is_empty() {
            format!("/{key}")
        } else {
            format!("/{bucket}/{key}")
        };

        Self {
            method,
            bucket: bucket.to_string(),
            verify_tls: should_verify_tls(&host),
            key,
            host,
            https: config.use_ssl(),
            path,
            base_resource,
            query: StringMap::new(),
            amz_headers: StringMap::new(),
            headers: StringMap::new(),
            body: None,
            sink: None,
            date: utc_now(),
            signer: config.signer(),
            prepared: false,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Percent-encoded object key
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn https(&self) -> bool {
        self.https
    }

    pub fn verify_tls(&self) -> bool {
        self.verify_tls
    }

    /// HTTP path without the query string
    pub fn path(&self) -> &str {
        &self.path
    }

    /// HTTP path with the query string
    pub fn uri(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query.to_query_string())
        }
    }

    /// Resource covered by a V2 signature
    pub fn resource(&self) -> String {
        if has_sub_resource(&self.query) {
            format!("{}?{}", self.base_resource, self.query.to_query_string())
        } else {
            self.base_resource.clone()
        }
    }

    pub fn url(&self) -> String {
        Url {
            https: self.https,
            host: self.host.clone(),
            path: self.path.clone(),
            query: self.query.clone(),
        }
        .to_string()
    }

    pub fn query(&self) -> &StringMap {
        &self.query
    }

    pub fn headers(&self) -> &StringMap {
        &self.headers
    }

    pub fn amz_headers(&self) -> &StringMap {
        &self.amz_headers
    }

    pub(crate) fn headers_mut(&mut self) -> &mut StringMap {
        &mut self.headers
    }

    pub(crate) fn amz_headers_mut(&mut self) -> &mut StringMap {
        &mut self.amz_headers
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    pub fn sink(&self) -> Option<&Path> {
        self.sink.as_deref()
    }

    pub fn date(&self) -> UtcTime {
        self.date
    }

    /// Overrides the signing timestamp
    pub fn set_date(&mut self, date: UtcTime) {
        self.date = date;
    }

    pub fn add_query<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.query.add(key, value);
    }

    /// Adds a header; `x-amz-*` names (any case) go to the amz headers,
    /// lowercased, everything else to the regular headers.
    pub fn add_header(&mut self, name: &str, value: &str) {
        let lower = name.to_lowercase();
        if lower.starts_with(X_AMZ_PREFIX) {
            self.amz_headers.add(lower, value);
        } else {
            self.headers.set_ignore_case(name, value);
        }
    }

    pub fn add_headers(&mut self, headers: &StringMap) {
        for (name, value) in headers {
            self.add_header(name, value);
        }
    }

    pub fn has_header(&self, name: &str) -> bool {
        self.headers.get_ignore_case(name).is_some()
            || self.amz_headers.get_ignore_case(name).is_some()
    }

    /// Attaches the payload and sets its Content-Length
    pub fn set_body(&mut self, body: Bytes) {
        self.headers
            .set_ignore_case(CONTENT_LENGTH, body.len().to_string());
        self.body = Some(body);
    }

    /// Streams the response body into the file at `path`
    pub fn set_sink(&mut self, path: PathBuf) {
        self.sink = Some(path);
    }

    fn prepare(&mut self) {
        if self.prepared {
            return;
        }
        if let Some(host) = location_host_override(&self.host, &self.uri()) {
            self.host = host.to_string();
            self.verify_tls = should_verify_tls(&self.host);
        }
        self.headers.set_ignore_case(HOST, self.host.clone());

        let signer = Arc::clone(&self.signer);
        signer.pre_process_headers(self);
        self.prepared = true;
    }

    /// Returns the `Authorization` header value, adding the signed headers first
    pub fn authorization(&mut self) -> String {
        self.prepare();
        self.signer.authorization_header(self)
    }

    /// Returns a presigned URL for this request
    pub fn authenticated_url(&mut self, lifetime: u64, force_https: bool) -> String {
        self.prepare();
        self.signer.authenticated_url(self, lifetime, force_https)
    }

    fn to_http_request(&self, authorization: String) -> HttpRequest {
        let mut headers: Vec<(String, String)> = self
            .headers
            .iter()
            .filter(|(k, _)| !k.eq_ignore_ascii_case(HOST))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        headers.extend(self.amz_headers.iter().map(|(k, v)| (k.clone(), v.clone())));
        headers.push((AUTHORIZATION.to_string(), authorization));

        let body = match self.method {
            Method::PUT | Method::POST => self.body.clone(),
            _ => None,
        };

        HttpRequest {
            method: self.method.clone(),
            url: self.url(),
            headers,
            body,
            sink: self.sink.clone(),
            verify_tls: self.verify_tls,
            discard_body: matches!(self.method, Method::HEAD | Method::DELETE),
        }
    }

    /// Signs and sends the request. Non-2xx responses are returned as data.
    pub async fn send(&mut self, transport: &dyn Transport) -> Result<S3Response, Error> {
        let authorization = self.authorization();
        let request = self.to_http_request(authorization);

        log::debug!("{} {}", request.method, request.url);
        let response = S3Response::from_http(transport.execute(request).await?);
        log::debug!(
            "{} {} -> {}",
            self.method,
            self.uri(),
            response.status()
        );

        response.copy_numeric_meta_to(self);
        Ok(response)
    }
}

impl fmt::Debug for S3Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("S3Request")
            .field("method", &self.method)
            .field("host", &self.host)
            .field("uri", &self.uri())
            .field("resource", &self.resource())
            .field("headers", &self.headers)
            .field("amz_headers", &self.amz_headers)
            .field("body_len", &self.body.as_ref().map(Bytes::len))
            .field("sink", &self.sink)
            .field("signer", &self.signer.method())
            .finish()
    }
}
