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
use crate::s3::builders::GetAuthenticatedUrl;

impl Connector {
    /// Creates a [`GetAuthenticatedUrl`] builder for a pre-signed URL.
    ///
    /// The URL always uses path-style addressing. A `?` in `key` starts
    /// extra query parameters that are signed along with the URL.
    ///
    /// # Example
    ///
    /// ```
    /// use s3_connector::s3::{Configuration, Connector};
    ///
    /// let config = Configuration::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG").unwrap();
    /// let connector = Connector::new(config).unwrap();
    /// let resp = connector
    ///     .get_authenticated_url("bucket-name", "report.pdf")
    ///     .lifetime(3600)
    ///     .send()
    ///     .unwrap();
    /// assert!(resp.url.contains("X-Amz-Signature="));
    /// ```
    pub fn get_authenticated_url<S1: Into<String>, S2: Into<String>>(
        &self,
        bucket: S1,
        key: S2,
    ) -> GetAuthenticatedUrl {
        GetAuthenticatedUrl::new(self.clone(), bucket.into(), key.into())
    }
}
