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
use crate::s3::client::Connector;
use crate::s3::error::{Error, OperationKind, ValidationErr};
use crate::s3::header_constants::*;
use crate::s3::object_content::ObjectContent;
use crate::s3::response::{FromS3Response, PutObjectResponse};
use crate::s3::string_map::StringMap;
use crate::s3::utils::md5sum_hash;
use http::Method;

pub const DEFAULT_ACL: &str = "private";
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Argument builder for [put_object()](crate::s3::Connector::put_object) API
#[derive(Clone, Debug)]
pub struct PutObject {
    connector: Connector,

    bucket: String,
    key: String,
    content: ObjectContent,

    acl: String,
    content_type: Option<String>,
    content_md5: Option<String>,
    compute_md5: bool,
    user_metadata: StringMap,
    extra_headers: StringMap,
    success_codes: Vec<u16>,
}

impl PutObject {
    pub fn new(connector: Connector, bucket: String, key: String, content: ObjectContent) -> Self {
        Self {
            connector,
            bucket,
            key,
            content,
            acl: DEFAULT_ACL.to_string(),
            content_type: None,
            content_md5: None,
            compute_md5: false,
            user_metadata: StringMap::new(),
            extra_headers: StringMap::new(),
            success_codes: vec![200],
        }
    }

    /// Canned ACL sent as `x-amz-acl`
    pub fn acl(mut self, acl: &str) -> Self {
        self.acl = acl.to_string();
        self
    }

    pub fn content_type(mut self, content_type: &str) -> Self {
        self.content_type = Some(content_type.to_string());
        self
    }

    /// Base64 encoded MD5 of the payload, sent as `Content-MD5`
    pub fn content_md5(mut self, content_md5: &str) -> Self {
        self.content_md5 = Some(content_md5.to_string());
        self
    }

    /// Computes `Content-MD5` from the payload
    pub fn compute_md5(mut self, compute_md5: bool) -> Self {
        self.compute_md5 = compute_md5;
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

    pub fn success_codes(mut self, success_codes: Vec<u16>) -> Self {
        self.success_codes = success_codes;
        self
    }

    pub async fn send(self) -> Result<PutObjectResponse, Error> {
        let is_directory = self.content.is_directory();
        let body = self.content.to_bytes().await?;
        if body.is_empty() && !is_directory {
            return Err(ValidationErr::EmptyPayload {
                bucket: self.bucket,
                key: self.key,
            }
            .into());
        }

        let key = if is_directory && !self.key.ends_with('/') {
            format!("{}/", self.key)
        } else {
            self.key.clone()
        };
        let content_md5 = match &self.content_md5 {
            Some(v) => Some(v.clone()),
            None if self.compute_md5 => Some(md5sum_hash(&body)),
            None => None,
        };

        let config = self.connector.config();
        let build = || {
            let mut req = self
                .connector
                .new_request(config, Method::PUT, &self.bucket, &key);
            req.set_body(body.clone());
            req.add_header(
                CONTENT_TYPE,
                self.content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE),
            );
            if let Some(md5) = &content_md5 {
                req.add_header(CONTENT_MD5, md5);
            }
            req.add_header(X_AMZ_ACL, &self.acl);
            add_user_metadata(&mut req, &self.user_metadata);
            req.add_headers(&self.extra_headers);
            Ok(req)
        };

        let (req, resp) = self
            .connector
            .execute_upload(OperationKind::Put, &self.success_codes, build)
            .await?;
        PutObjectResponse::from_s3response(&req, resp)
    }
}
