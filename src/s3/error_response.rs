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

//! Structured `<Error>` payload returned by the service

use crate::s3::error::Error;
use crate::s3::utils::{get_default_text, get_option_text};
use std::fmt;
use xmltree::Element;

/// Diagnostic fields of a service error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub bucket_name: Option<String>,
    pub resource: Option<String>,
    pub request_id: Option<String>,
    pub host_id: Option<String>,
}

impl ErrorResponse {
    /// Builds the error from a parsed body.
    ///
    /// Returns `None` unless the element carries both `Code` and `Message`.
    pub fn from_element(root: &Element) -> Option<Self> {
        if root.get_child("Code").is_none() || root.get_child("Message").is_none() {
            return None;
        }

        Some(Self {
            code: get_default_text(root, "Code"),
            message: get_default_text(root, "Message"),
            bucket_name: get_option_text(root, "BucketName"),
            resource: get_option_text(root, "Resource"),
            request_id: get_option_text(root, "RequestId"),
            host_id: get_option_text(root, "HostId"),
        })
    }

    pub fn parse(body: &[u8]) -> Result<Option<Self>, Error> {
        let root = Element::parse(body).map_err(|e| Error::XmlParse(e.to_string()))?;
        Ok(Self::from_element(&root))
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(v) = &self.bucket_name {
            write!(f, "; bucket: {v}")?;
        }
        if let Some(v) = &self.resource {
            write!(f, "; resource: {v}")?;
        }
        if let Some(v) = &self.request_id {
            write!(f, "; request id: {v}")?;
        }
        if let Some(v) = &self.host_id {
            write!(f, "; host id: {v}")?;
        }
        Ok(())
    }
}
