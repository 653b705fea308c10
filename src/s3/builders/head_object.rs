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
use crate::s3::response::{FromS3Response, HeadObjectResponse};
use crate::s3::string_map::StringMap;
use http::Method;

/// Argument builder for [head_object()](crate::s3::Connector::head_object) API
#[derive(Clone, Debug)]
pub struct HeadObject {
    connector: Connector,

    bucket: String,
    key: String,

    extra_headers: StringMap,
    success_codes: Vec<u16>,
}

impl HeadObject {
    pub fn new(connector: Connector, bucket: String, key: String) -> Self {
        Self {
            connector,
            bucket,
            key,
            extra_headers: StringMap::new(),
            success_codes: vec![200],
        }
    }

    pub fn extra_headers(mut self, extra_headers: StringMap) -> Self {
        self.extra_headers = extra_headers;
        self
    }

    pub fn success_codes(mut self, success_codes: Vec<u16>) -> Self {
        self.success_codes = success_codes;
        self
    }

    pub async fn send(self) -> Result<HeadObjectResponse, Error> {
        let mut req = self.connector.new_request(
            self.connector.config(),
            Method::HEAD,
            &self.bucket,
            &self.key,
        );
        req.add_headers(&self.extra_headers);

        let (req, resp) = self
            .connector
            .execute(OperationKind::Get, &self.success_codes, req)
            .await?;
        HeadObjectResponse::from_s3response(&req, resp)
    }
}
