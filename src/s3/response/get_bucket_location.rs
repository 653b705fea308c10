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

use crate::s3::config::DEFAULT_REGION;
use crate::s3::error::Error;
use crate::s3::response::FromS3Response;
use crate::s3::string_map::StringMap;
use crate::s3::types::{S3Request, S3Response};

/// Response of [get_bucket_location()](crate::s3::Connector::get_bucket_location) API
#[derive(Clone, Debug)]
pub struct GetBucketLocationResponse {
    pub headers: StringMap,
    pub bucket: String,
    pub region: String,
}

/// Maps a `LocationConstraint` value to a region name
pub fn normalize_location(constraint: &str) -> String {
    match constraint.trim() {
        "" => DEFAULT_REGION.to_string(),
        "EU" | "eu" => "eu-west-1".to_string(),
        v => v.to_string(),
    }
}

impl FromS3Response for GetBucketLocationResponse {
    fn from_s3response(request: &S3Request, response: S3Response) -> Result<Self, Error> {
        // An empty body means the bucket lives in the default region.
        let constraint = match response.xml()? {
            Some(root) => root.get_text().unwrap_or_default().into_owned(),
            None => String::new(),
        };

        Ok(Self {
            region: normalize_location(&constraint),
            headers: response.headers().clone(),
            bucket: request.bucket().to_string(),
        })
    }
}
