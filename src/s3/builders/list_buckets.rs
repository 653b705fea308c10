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
use crate::s3::config::DEFAULT_REGION;
use crate::s3::error::{Error, OperationKind};
use crate::s3::response::{FromS3Response, ListBucketsResponse};
use http::Method;

/// Argument builder for [list_buckets()](crate::s3::Connector::list_buckets) API
#[derive(Clone, Debug)]
pub struct ListBuckets {
    connector: Connector,
}

impl ListBuckets {
    pub fn new(connector: Connector) -> Self {
        Self { connector }
    }

    pub async fn send(self) -> Result<ListBucketsResponse, Error> {
        let mut config = self.connector.config().clone();
        config.set_region(DEFAULT_REGION)?;

        let req = self.connector.new_request(&config, Method::GET, "", "");
        let (req, resp) = self
            .connector
            .execute(OperationKind::ListBuckets, &[200], req)
            .await?;
        ListBucketsResponse::from_s3response(&req, resp)
    }
}
