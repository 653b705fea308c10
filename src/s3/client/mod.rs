// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2022 MinIO, Inc.
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

//! S3 connector to perform bucket and object operations.
//!
//! Every operation returns a request builder; calling `send()` on it builds a
//! fresh [`S3Request`] from the connector's [`Configuration`] (cloned first
//! when the operation overrides a setting), executes it and maps the
//! [`S3Response`] to a typed result or an [`OperationError`].

use crate::s3::config::Configuration;
use crate::s3::error::{Error, OperationError, OperationKind};
use crate::s3::header_constants::*;
use crate::s3::transport::{ReqwestTransport, Transport};
use crate::s3::types::{S3Request, S3Response};
use http::Method;
use std::sync::Arc;

mod delete_object;
mod get_authenticated_url;
mod get_bucket;
mod get_bucket_location;
mod get_object;
mod head_object;
mod list_buckets;
mod multipart;
mod put_object;

/// Default lifetime of presigned URLs, in seconds
pub const DEFAULT_EXPIRY_SECONDS: u64 = 604_800; // 7 days

/// Upper bound on re-sends after a comma-joined Content-Length echo
const MAX_CONTENT_LENGTH_RETRIES: u32 = 1;

/// Builds a [`Connector`] with an optional custom [`Transport`].
#[derive(Debug)]
pub struct ConnectorBuilder {
    config: Configuration,
    transport: Option<Arc<dyn Transport>>,
}

impl ConnectorBuilder {
    pub fn new(config: Configuration) -> Self {
        Self {
            config,
            transport: None,
        }
    }

    /// Set the transport requests are executed with. Defaults to [`ReqwestTransport`].
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the Connector.
    pub fn build(self) -> Result<Connector, Error> {
        let transport = match self.transport {
            Some(t) => t,
            None => Arc::new(ReqwestTransport::new()?),
        };
        Ok(Connector {
            config: self.config,
            transport,
        })
    }
}

/// Client for Amazon S3 and S3-compatible services.
///
/// Cloning is cheap: the transport is shared.
#[derive(Clone, Debug)]
pub struct Connector {
    config: Configuration,
    transport: Arc<dyn Transport>,
}

impl Connector {
    /// Returns a connector using the default `reqwest` transport.
    ///
    /// # Examples
    ///
    /// ```
    /// use s3_connector::s3::{Configuration, Connector};
    ///
    /// let config = Configuration::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG").unwrap();
    /// let connector = Connector::new(config).unwrap();
    /// assert_eq!(connector.config().region(), "us-east-1");
    /// ```
    pub fn new(config: Configuration) -> Result<Self, Error> {
        ConnectorBuilder::new(config).build()
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub(crate) fn new_request(
        &self,
        config: &Configuration,
        method: Method,
        bucket: &str,
        key: &str,
    ) -> S3Request {
        S3Request::new(config, method, bucket, key)
    }

    /// Sends a request and checks the outcome
    pub(crate) async fn execute(
        &self,
        kind: OperationKind,
        accepted: &[u16],
        mut request: S3Request,
    ) -> Result<(S3Request, S3Response), Error> {
        let response = request.send(self.transport.as_ref()).await?;
        check_response(kind, accepted, request, response)
    }

    /// Sends an upload, re-sending it once with a marker header when the
    /// backend echoes a comma-joined Content-Length.
    pub(crate) async fn execute_upload<F>(
        &self,
        kind: OperationKind,
        accepted: &[u16],
        mut build: F,
    ) -> Result<(S3Request, S3Response), Error>
    where
        F: FnMut() -> Result<S3Request, Error>,
    {
        let mut attempt: u32 = 0;
        loop {
            let mut request = build()?;
            if attempt > 0 {
                request.add_header(X_CONTENT_LENGTH_RETRY, "1");
            }
            let response = request.send(self.transport.as_ref()).await?;

            if attempt < MAX_CONTENT_LENGTH_RETRIES
                && response.has_comma_joined_content_length()
            {
                attempt += 1;
                log::warn!(
                    "{} {}: backend echoed a comma-joined Content-Length (status {}); retrying",
                    request.method(),
                    request.uri(),
                    response.status()
                );
                continue;
            }
            return check_response(kind, accepted, request, response);
        }
    }
}

/// Raises an [`OperationError`] for an unaccepted status or an error body
pub(crate) fn check_response(
    kind: OperationKind,
    accepted: &[u16],
    request: S3Request,
    response: S3Response,
) -> Result<(S3Request, S3Response), Error> {
    if !accepted.contains(&response.status()) || response.is_error() {
        return Err(OperationError::new(kind, request, response).into());
    }
    Ok((request, response))
}
