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

//! Raw HTTP outcome of an [`S3Request`](super::S3Request).
//!
//! The XML body is parsed on first access and memoized; [`S3Response::reparse`]
//! forces a fresh parse. Header names are stored lowercase.

use crate::s3::error::Error;
use crate::s3::error_response::ErrorResponse;
use crate::s3::header_constants::*;
use crate::s3::string_map::{StringMap, StringMapExt};
use crate::s3::transport::HttpResponse;
use crate::s3::types::S3Request;
use crate::s3::utils::{from_http_header_value, strip_quotes};
use bytes::Bytes;
use std::sync::OnceLock;
use xmltree::Element;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug)]
pub struct S3Response {
    status: u16,
    headers: StringMap,
    body: Bytes,
    parsed: OnceLock<Result<Option<Element>, String>>,
    /// Unix timestamp from `Last-Modified`
    pub time: Option<i64>,
    /// Value of `Content-Length`
    pub size: Option<u64>,
    /// Value of `Content-Type`
    pub content_type: Option<String>,
    /// `ETag` without its surrounding quotes
    pub hash: Option<String>,
}

impl S3Response {
    pub fn new(status: u16, headers: StringMap, body: Bytes) -> Self {
        let headers: StringMap = headers
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();

        let time = headers
            .get(LAST_MODIFIED)
            .and_then(|v| from_http_header_value(v).ok())
            .map(|t| t.timestamp());
        let size = headers
            .get_ignore_case(CONTENT_LENGTH)
            .and_then(|v| v.trim().parse::<u64>().ok());
        let content_type = headers.get_ignore_case(CONTENT_TYPE).map(str::to_string);
        let hash = headers
            .get(ETAG)
            .map(|v| strip_quotes(v.trim()).to_string());

        Self {
            status,
            headers,
            body,
            parsed: OnceLock::new(),
            time,
            size,
            content_type,
            hash,
        }
    }

    pub fn from_http(response: HttpResponse) -> Self {
        Self::new(response.status, response.headers, response.body)
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Response headers with lowercase names
    pub fn headers(&self) -> &StringMap {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get_ignore_case(name)
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// Body without a leading byte order mark or whitespace
    fn xml_text(&self) -> &[u8] {
        let body = self.body.as_ref();
        body.strip_prefix(UTF8_BOM)
            .unwrap_or(body)
            .trim_ascii_start()
    }

    fn looks_like_xml(&self) -> bool {
        let text = self.xml_text();
        if text.is_empty() {
            return false;
        }
        let declared = self
            .content_type
            .as_deref()
            .is_some_and(|t| t.to_lowercase().contains("xml"));
        declared || text.starts_with(b"<?xml")
    }

    fn parse_body(&self) -> Result<Option<Element>, String> {
        if !self.looks_like_xml() {
            return Ok(None);
        }
        Element::parse(self.xml_text())
            .map(Some)
            .map_err(|e| e.to_string())
    }

    /// Parsed XML body, or `None` when the body is absent or not XML
    pub fn xml(&self) -> Result<Option<&Element>, Error> {
        match self.parsed.get_or_init(|| self.parse_body()) {
            Ok(root) => Ok(root.as_ref()),
            Err(e) => Err(Error::XmlParse(e.clone())),
        }
    }

    /// Discards the memoized XML and parses the body again
    pub fn reparse(&mut self) -> Result<Option<&Element>, Error> {
        self.parsed = OnceLock::new();
        self.xml()
    }

    /// True when the body is a service error document, whatever the status
    pub fn is_error(&self) -> bool {
        self.error().is_some()
    }

    pub fn error(&self) -> Option<ErrorResponse> {
        match self.xml() {
            Ok(Some(root)) => ErrorResponse::from_element(root),
            _ => None,
        }
    }

    /// Copies numeric `x-amz-meta-*` response values onto the request
    pub(crate) fn copy_numeric_meta_to(&self, request: &mut S3Request) {
        for (name, value) in &self.headers {
            if name.starts_with(X_AMZ_META_PREFIX) && is_numeric(value) {
                request.add_header(name, value);
            }
        }
    }

    /// Detects the backend quirk of echoing a comma-joined Content-Length
    /// back in the XML body of a failed upload.
    pub(crate) fn has_comma_joined_content_length(&self) -> bool {
        match self.xml() {
            Ok(Some(root)) => echoes_comma_joined_length(root),
            _ => false,
        }
    }
}

fn is_numeric(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value.parse::<f64>().is_ok()
}

fn echoes_comma_joined_length(element: &Element) -> bool {
    let text = |tag: &str| {
        element
            .get_child(tag)
            .and_then(|e| e.get_text())
            .map(|t| t.into_owned())
    };

    let names_length = text("ArgumentName")
        .is_some_and(|name| name.trim().eq_ignore_ascii_case(CONTENT_LENGTH));
    if names_length && text("ArgumentValue").is_some_and(|v| v.contains(',')) {
        return true;
    }
    for tag in ["ContentLength", CONTENT_LENGTH] {
        if text(tag).is_some_and(|v| v.contains(',')) {
            return true;
        }
    }

    element
        .children
        .iter()
        .filter_map(|c| c.as_element())
        .any(echoes_comma_joined_length)
}
