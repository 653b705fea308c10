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

use crate::s3::client::Connector;
use crate::s3::config::DEFAULT_REGION;
use crate::s3::error::{Error, OperationKind};
use crate::s3::response::{FromS3Response, GetBucketLocationResponse};
use http::Method;

/// Argument builder for [get_bucket_location()](crate::s3::Connector::get_bucket_location) API
#[derive(Clone, Debug)]
pub struct GetBucketLocation {
    connector: Connector,
    bucket: String,
}

impl GetBucketLocation {
    pub fn new(connector: Connector, bucket: String) -> Self {
        Self { connector, bucket }
    }

    pub async fn send(self) -> Result<GetBucketLocationResponse, Error> {
        // Location lookups are always signed for the default region.
        let mut config = self.connector.config().clone();
        config.set_region(DEFAULT_REGION)?;

        let mut req = self
            .connector
            .new_request(&config, Method::GET, &self.bucket, "");
        req.add_query("location", "");

        let (req, resp) = self
            .connector
            .execute(OperationKind::Get, &[200], req)
            .await?;
        GetBucketLocationResponse::from_s3response(&req, resp)
    }
}
