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

use super::Connector;
use crate::s3::builders::GetBucketLocation;

impl Connector {
    /// Creates a [`GetBucketLocation`] request builder.
    ///
    /// The lookup is signed for `us-east-1` whatever region is configured.
    /// An empty constraint maps to `us-east-1` and `EU` to `eu-west-1`.
    pub fn get_bucket_location<S: Into<String>>(&self, bucket: S) -> GetBucketLocation {
        GetBucketLocation::new(self.clone(), bucket.into())
    }
}
