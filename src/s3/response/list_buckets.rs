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
use crate::s3::response::{FromS3Response, require_xml};
use crate::s3::string_map::StringMap;
use crate::s3::types::{Bucket, Owner, S3Request, S3Response};
use crate::s3::utils::{from_iso8601utc, get_children, get_default_text, get_option_text};

/// Response of [list_buckets()](crate::s3::Connector::list_buckets) API
#[derive(Clone, Debug)]
pub struct ListBucketsResponse {
    pub headers: StringMap,
    pub owner: Owner,
    pub buckets: Vec<Bucket>,
}

impl FromS3Response for ListBucketsResponse {
    fn from_s3response(_request: &S3Request, response: S3Response) -> Result<Self, Error> {
        let root = require_xml(&response, "ListAllMyBucketsResult")?;

        let owner = root
            .get_child("Owner")
            .map(|o| Owner {
                id: get_default_text(o, "ID"),
                display_name: get_default_text(o, "DisplayName"),
            })
            .unwrap_or_default();

        let mut buckets = Vec::new();
        if let Some(list) = root.get_child("Buckets") {
            for b in get_children(list, "Bucket") {
                buckets.push(Bucket {
                    name: get_default_text(b, "Name"),
                    creation_date: get_option_text(b, "CreationDate")
                        .map(|v| from_iso8601utc(&v))
                        .transpose()?,
                });
            }
        }

        Ok(Self {
            headers: response.headers().clone(),
            owner,
            buckets,
        })
    }
}
