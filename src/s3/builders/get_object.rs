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

use crate::s3::client::Connector;
use crate::s3::error::{Error, OperationKind};
use crate::s3::header_constants::*;
use crate::s3::response::{FromS3Response, GetObjectResponse};
use crate::s3::string_map::StringMap;
use http::Method;
use std::path::{Path, PathBuf};

/// Argument builder for [get_object()](crate::s3::Connector::get_object) API
#[derive(Clone, Debug)]
pub struct GetObject {
    connector: Connector,

    bucket: String,
    key: String,

    range: Option<(u64, Option<u64>)>,
    sink: Option<PathBuf>,
    extra_headers: StringMap,
    success_codes: Vec<u16>,
}

impl GetObject {
    pub fn new(connector: Connector, bucket: String, key: String) -> Self {
        Self {
            connector,
            bucket,
            key,
            range: None,
            sink: None,
            extra_headers: StringMap::new(),
            success_codes: vec![200, 206],
        }
    }

    /// Requests bytes `from..=to`, or from `from` to the end when `to` is `None`
    pub fn range(mut self, from: u64, to: Option<u64>) -> Self {
        self.range = Some((from, to));
        self
    }

    /// Writes the object into the file at `path` instead of buffering it
    pub fn sink(mut self, path: &Path) -> Self {
        self.sink = Some(path.to_path_buf());
        self
    }

    pub fn extra_headers(mut self, extra_headers: StringMap) -> Self {
        self.extra_headers = extra_headers;
        self
    }

    pub fn success_codes(mut self, success_codes: Vec<u16>) -> Self {
        self.success_codes = success_codes;
        self
    }

    pub async fn send(self) -> Result<GetObjectResponse, Error> {
        let mut req = self.connector.new_request(
            self.connector.config(),
            Method::GET,
            &self.bucket,
            &self.key,
        );
        req.add_headers(&self.extra_headers);
        if let Some(range) = range_header(self.range) {
            req.add_header(RANGE, &range);
        }
        if let Some(path) = self.sink {
            req.set_sink(path);
        }

        let (req, resp) = self
            .connector
            .execute(OperationKind::Get, &self.success_codes, req)
            .await?;
        GetObjectResponse::from_s3response(&req, resp)
    }
}

fn range_header(range: Option<(u64, Option<u64>)>) -> Option<String> {
    match range? {
        (from, Some(to)) => Some(format!("bytes={from}-{to}")),
        (from, None) => Some(format!("bytes={from}-")),
    }
}
