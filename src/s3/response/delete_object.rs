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
use crate::s3::response::FromS3Response;
use crate::s3::string_map::StringMap;
use crate::s3::types::{S3Request, S3Response};

/// Response of [delete_object()](crate::s3::Connector::delete_object) API
#[derive(Clone, Debug)]
pub struct DeleteObjectResponse {
    pub headers: StringMap,
    pub bucket: String,
    pub key: String,
    pub status: u16,
}

impl FromS3Response for DeleteObjectResponse {
    fn from_s3response(request: &S3Request, response: S3Response) -> Result<Self, Error> {
        Ok(Self {
            headers: response.headers().clone(),
            bucket: request.bucket().to_string(),
            key: request.key().to_string(),
            status: response.status(),
        })
    }
}
