// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2023 MinIO, Inc.
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

use crate::s3::client::{Connector, DEFAULT_EXPIRY_SECONDS};
use crate::s3::error::{Error, ValidationErr};
use crate::s3::response::GetAuthenticatedUrlResponse;
use crate::s3::utils::{UtcTime, urldecode};
use http::Method;

/// Argument builder for [get_authenticated_url()](crate::s3::Connector::get_authenticated_url) API
#[derive(Clone, Debug)]
pub struct GetAuthenticatedUrl {
    connector: Connector,

    bucket: String,
    key: String,

    method: Method,
    lifetime: u64,
    force_https: bool,
    request_time: Option<UtcTime>,
}

impl GetAuthenticatedUrl {
    pub fn new(connector: Connector, bucket: String, key: String) -> Self {
        Self {
            connector,
            bucket,
            key,
            method: Method::GET,
            lifetime: DEFAULT_EXPIRY_SECONDS,
            force_https: false,
            request_time: None,
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Seconds the URL stays valid
    pub fn lifetime(mut self, seconds: u64) -> Self {
        self.lifetime = seconds;
        self
    }

    pub fn force_https(mut self, force_https: bool) -> Self {
        self.force_https = force_https;
        self
    }

    /// Signing time; defaults to now
    pub fn request_time(mut self, time: UtcTime) -> Self {
        self.request_time = Some(time);
        self
    }

    /// Builds the URL. No request is sent.
    pub fn send(self) -> Result<GetAuthenticatedUrlResponse, Error> {
        let mut config = self.connector.config().clone();
        config.set_use_legacy_path_style(true);

        let (key, query) = match self.key.split_once('?') {
            Some((key, query)) => (key, Some(query)),
            None => (self.key.as_str(), None),
        };

        let mut req = self
            .connector
            .new_request(&config, self.method.clone(), &self.bucket, key);
        for param in query.into_iter().flat_map(|q| q.split('&')) {
            if param.is_empty() {
                continue;
            }
            let (name, value) = param.split_once('=').unwrap_or((param, ""));
            req.add_query(decode_param(name)?, decode_param(value)?);
        }
        if let Some(time) = self.request_time {
            req.set_date(time);
        }

        let url = req.authenticated_url(self.lifetime, self.force_https);
        Ok(GetAuthenticatedUrlResponse {
            bucket: self.bucket,
            key: key.to_string(),
            method: self.method,
            lifetime: self.lifetime,
            url,
        })
    }
}

fn decode_param(value: &str) -> Result<String, Error> {
    urldecode(value)
        .map(|v| v.into_owned())
        .map_err(|_| ValidationErr::InvalidQueryParameter(value.to_string()).into())
}
