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

use crate::s3::error::{Error, ValidationErr};
use crate::s3::response::{FromS3Response, require_xml};
use crate::s3::string_map::StringMap;
use crate::s3::types::{S3Request, S3Response};
use crate::s3::utils::{get_default_text, get_option_text, strip_quotes};

/// Response of [start_multipart()](crate::s3::Connector::start_multipart) API
#[derive(Clone, Debug)]
pub struct StartMultipartResponse {
    pub headers: StringMap,
    pub bucket: String,
    pub key: String,
    pub upload_id: String,
}

impl FromS3Response for StartMultipartResponse {
    fn from_s3response(request: &S3Request, response: S3Response) -> Result<Self, Error> {
        let root = require_xml(&response, "InitiateMultipartUploadResult")?;
        let upload_id = get_default_text(root, "UploadId");
        if upload_id.is_empty() {
            return Err(ValidationErr::InvalidResponse(
                "<UploadId> missing from InitiateMultipartUploadResult".into(),
            )
            .into());
        }

        Ok(Self {
            headers: response.headers().clone(),
            bucket: request.bucket().to_string(),
            key: request.key().to_string(),
            upload_id,
        })
    }
}

/// Response of [upload_multipart()](crate::s3::Connector::upload_multipart) API
#[derive(Clone, Debug)]
pub struct UploadPartResponse {
    pub headers: StringMap,
    pub part_number: u32,
    pub etag: String,
    pub size: u64,
}

impl FromS3Response for UploadPartResponse {
    fn from_s3response(request: &S3Request, response: S3Response) -> Result<Self, Error> {
        let part_number = request
            .query()
            .get("partNumber")
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or_default();
        let etag = response.hash.clone().ok_or_else(|| {
            ValidationErr::InvalidResponse(format!("no ETag returned for part {part_number}"))
        })?;

        Ok(Self {
            headers: response.headers().clone(),
            part_number,
            etag,
            size: request.body().map(|b| b.len() as u64).unwrap_or_default(),
        })
    }
}

/// Response of [finalize_multipart()](crate::s3::Connector::finalize_multipart) API
#[derive(Clone, Debug)]
pub struct FinalizeMultipartResponse {
    pub headers: StringMap,
    pub bucket: String,
    pub key: String,
    pub location: Option<String>,
    pub etag: Option<String>,
}

impl FromS3Response for FinalizeMultipartResponse {
    fn from_s3response(request: &S3Request, response: S3Response) -> Result<Self, Error> {
        let root = require_xml(&response, "CompleteMultipartUploadResult")?;

        Ok(Self {
            location: get_option_text(root, "Location"),
            etag: get_option_text(root, "ETag").map(|v| strip_quotes(&v).to_string()),
            headers: response.headers().clone(),
            bucket: request.bucket().to_string(),
            key: request.key().to_string(),
        })
    }
}

/// Response of [abort_multipart()](crate::s3::Connector::abort_multipart) API
#[derive(Clone, Debug)]
pub struct AbortMultipartResponse {
    pub headers: StringMap,
    pub bucket: String,
    pub key: String,
    pub upload_id: String,
}

impl FromS3Response for AbortMultipartResponse {
    fn from_s3response(request: &S3Request, response: S3Response) -> Result<Self, Error> {
        Ok(Self {
            headers: response.headers().clone(),
            bucket: request.bucket().to_string(),
            key: request.key().to_string(),
            upload_id: request
                .query()
                .get("uploadId")
                .cloned()
                .unwrap_or_default(),
        })
    }
}
