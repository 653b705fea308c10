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

use crate::s3::error::Error;
use crate::s3::header_constants::*;
use crate::s3::response::FromS3Response;
use crate::s3::string_map::StringMap;
use crate::s3::types::{S3Request, S3Response};
use crate::s3::utils::from_http_header_value;
use std::collections::BTreeMap;

/// Headers whose values are HTTP dates
const DATE_HEADERS: [&str; 4] = ["date", LAST_MODIFIED, EXPIRES, "x-amz-restore-expiry-date"];

/// Response of [head_object()](crate::s3::Connector::head_object) API
#[derive(Clone, Debug)]
pub struct HeadObjectResponse {
    pub headers: StringMap,
    pub bucket: String,
    pub key: String,
    pub size: Option<u64>,
    pub etag: Option<String>,
    pub content_type: Option<String>,
    pub last_modified: Option<i64>,
    /// Date-like headers converted to unix timestamps, keyed by lowercase name
    pub timestamps: BTreeMap<String, i64>,
    /// `x-amz-meta-*` values keyed by name without the prefix
    pub user_metadata: StringMap,
}

impl FromS3Response for HeadObjectResponse {
    fn from_s3response(request: &S3Request, response: S3Response) -> Result<Self, Error> {
        let headers = response.headers().clone();

        let timestamps = headers
            .iter()
            .filter(|(name, _)| DATE_HEADERS.contains(&name.as_str()))
            .filter_map(|(name, value)| {
                from_http_header_value(value)
                    .ok()
                    .map(|t| (name.clone(), t.timestamp()))
            })
            .collect();

        let user_metadata = headers
            .iter()
            .filter_map(|(name, value)| {
                name.strip_prefix(X_AMZ_META_PREFIX)
                    .map(|n| (n.to_string(), value.clone()))
            })
            .collect();

        Ok(Self {
            bucket: request.bucket().to_string(),
            key: request.key().to_string(),
            size: response.size,
            etag: response.hash.clone(),
            content_type: response.content_type.clone(),
            last_modified: response.time,
            timestamps,
            user_metadata,
            headers,
        })
    }
}
