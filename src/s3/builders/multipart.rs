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

use super::add_user_metadata;
use super::put_object::{DEFAULT_ACL, DEFAULT_CONTENT_TYPE};
use crate::s3::client::Connector;
use crate::s3::error::{Error, OperationKind, ValidationErr};
use crate::s3::header_constants::*;
use crate::s3::object_content::ObjectContent;
use crate::s3::response::{
    AbortMultipartResponse, FinalizeMultipartResponse, FromS3Response, StartMultipartResponse,
    UploadPartResponse,
};
use crate::s3::string_map::StringMap;
use crate::s3::types::{MIN_PART_SIZE, Part, part_window};
use crate::s3::utils::strip_quotes;
use bytes::Bytes;
use http::Method;

// region: start-multipart

/// Argument builder for [start_multipart()](crate::s3::Connector::start_multipart) API
#[derive(Clone, Debug)]
pub struct StartMultipart {
    connector: Connector,

    bucket: String,
    key: String,

    acl: String,
    content_type: Option<String>,
    user_metadata: StringMap,
    extra_headers: StringMap,
}

impl StartMultipart {
    pub fn new(connector: Connector, bucket: String, key: String) -> Self {
        Self {
            connector,
            bucket,
            key,
            acl: DEFAULT_ACL.to_string(),
            content_type: None,
            user_metadata: StringMap::new(),
            extra_headers: StringMap::new(),
        }
    }

    pub fn acl(mut self, acl: &str) -> Self {
        self.acl = acl.to_string();
        self
    }

    pub fn content_type(mut self, content_type: &str) -> Self {
        self.content_type = Some(content_type.to_string());
        self
    }

    pub fn user_metadata(mut self, user_metadata: StringMap) -> Self {
        self.user_metadata = user_metadata;
        self
    }

    pub fn extra_headers(mut self, extra_headers: StringMap) -> Self {
        self.extra_headers = extra_headers;
        self
    }

    pub async fn send(self) -> Result<StartMultipartResponse, Error> {
        let mut req = self.connector.new_request(
            self.connector.config(),
            Method::POST,
            &self.bucket,
            &self.key,
        );
        req.add_query("uploads", "");
        req.add_header(
            CONTENT_TYPE,
            self.content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE),
        );
        req.add_header(X_AMZ_ACL, &self.acl);
        add_user_metadata(&mut req, &self.user_metadata);
        req.add_headers(&self.extra_headers);

        let (req, resp) = self
            .connector
            .execute(OperationKind::Put, &[200], req)
            .await?;
        StartMultipartResponse::from_s3response(&req, resp)
    }
}

// endregion: start-multipart

// region: upload-multipart

/// Argument builder for [upload_multipart()](crate::s3::Connector::upload_multipart) API.
///
/// Uploads the `part_number`-th window of `chunk_size` bytes from the content.
#[derive(Clone, Debug)]
pub struct UploadMultipart {
    connector: Connector,

    bucket: String,
    key: String,
    upload_id: String,
    content: ObjectContent,
    part_number: u32,
    chunk_size: u64,
}

impl UploadMultipart {
    pub fn new(
        connector: Connector,
        bucket: String,
        key: String,
        upload_id: String,
        content: ObjectContent,
    ) -> Self {
        Self {
            connector,
            bucket,
            key,
            upload_id,
            content,
            part_number: 1,
            chunk_size: MIN_PART_SIZE,
        }
    }

    pub fn part_number(mut self, part_number: u32) -> Self {
        self.part_number = part_number;
        self
    }

    pub fn chunk_size(mut self, chunk_size: u64) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Returns `Ok(None)` when the part starts at or beyond the end of the content
    pub async fn send(self) -> Result<Option<UploadPartResponse>, Error> {
        if self.upload_id.is_empty() {
            return Err(ValidationErr::MissingUploadId.into());
        }
        if self.chunk_size < MIN_PART_SIZE {
            return Err(ValidationErr::InvalidPartSize(self.chunk_size).into());
        }
        if self.part_number == 0 {
            return Err(ValidationErr::InvalidPartNumber(self.part_number).into());
        }

        let total = self.content.size().await?;
        let Some((offset, length)) = part_window(total, self.chunk_size, self.part_number) else {
            log::debug!(
                "part {} of '{}' starts past the end of {total} bytes",
                self.part_number,
                self.key
            );
            return Ok(None);
        };
        let body: Bytes = self.content.read_window(offset, length).await?;

        let config = self.connector.config();
        let part_number = self.part_number.to_string();
        let build = || {
            let mut req = self
                .connector
                .new_request(config, Method::PUT, &self.bucket, &self.key);
            req.add_query("partNumber", part_number.as_str());
            req.add_query("uploadId", self.upload_id.as_str());
            req.set_body(body.clone());
            Ok(req)
        };

        let (req, resp) = self
            .connector
            .execute_upload(OperationKind::Put, &[200], build)
            .await?;
        UploadPartResponse::from_s3response(&req, resp).map(Some)
    }
}

// endregion: upload-multipart

// region: finalize-multipart

/// Argument builder for [finalize_multipart()](crate::s3::Connector::finalize_multipart) API
#[derive(Clone, Debug)]
pub struct FinalizeMultipart {
    connector: Connector,

    bucket: String,
    key: String,
    upload_id: String,
    parts: Vec<Part>,
}

impl FinalizeMultipart {
    pub fn new(
        connector: Connector,
        bucket: String,
        key: String,
        upload_id: String,
        parts: Vec<Part>,
    ) -> Self {
        Self {
            connector,
            bucket,
            key,
            upload_id,
            parts,
        }
    }

    pub async fn send(self) -> Result<FinalizeMultipartResponse, Error> {
        if self.upload_id.is_empty() {
            return Err(ValidationErr::MissingUploadId.into());
        }
        if self.parts.is_empty() {
            return Err(ValidationErr::EmptyParts("parts cannot be empty".into()).into());
        }

        let mut req = self.connector.new_request(
            self.connector.config(),
            Method::POST,
            &self.bucket,
            &self.key,
        );
        req.add_query("uploadId", self.upload_id.as_str());
        req.add_header(CONTENT_TYPE, "application/xml");
        req.set_body(Bytes::from(complete_multipart_xml(&self.parts)));

        let (req, resp) = self
            .connector
            .execute(OperationKind::Put, &[200], req)
            .await?;
        FinalizeMultipartResponse::from_s3response(&req, resp)
    }
}

/// Body of a CompleteMultipartUpload request; ETags are always sent quoted
pub(crate) fn complete_multipart_xml(parts: &[Part]) -> String {
    let mut data = String::from("<CompleteMultipartUpload>");
    for part in parts {
        data.push_str("<Part><PartNumber>");
        data.push_str(&part.number.to_string());
        data.push_str("</PartNumber><ETag>\"");
        data.push_str(strip_quotes(&part.etag));
        data.push_str("\"</ETag></Part>");
    }
    data.push_str("</CompleteMultipartUpload>");
    data
}

// endregion: finalize-multipart

// region: abort-multipart

/// Argument builder for [abort_multipart()](crate::s3::Connector::abort_multipart) API
#[derive(Clone, Debug)]
pub struct AbortMultipart {
    connector: Connector,

    bucket: String,
    key: String,
    upload_id: String,
}

impl AbortMultipart {
    pub fn new(connector: Connector, bucket: String, key: String, upload_id: String) -> Self {
        Self {
            connector,
            bucket,
            key,
            upload_id,
        }
    }

    pub async fn send(self) -> Result<AbortMultipartResponse, Error> {
        if self.upload_id.is_empty() {
            return Err(ValidationErr::MissingUploadId.into());
        }

        let mut req = self.connector.new_request(
            self.connector.config(),
            Method::DELETE,
            &self.bucket,
            &self.key,
        );
        req.add_query("uploadId", self.upload_id.as_str());

        let (req, resp) = self
            .connector
            .execute(OperationKind::Put, &[204, 200], req)
            .await?;
        AbortMultipartResponse::from_s3response(&req, resp)
    }
}

// endregion: abort-multipart
