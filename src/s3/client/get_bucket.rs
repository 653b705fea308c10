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
use crate::s3::builders::GetBucket;

impl Connector {
    /// Creates a [`GetBucket`] request builder listing the objects of a bucket.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use s3_connector::s3::{Configuration, Connector};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let connector = Connector::new(Configuration::from_env().unwrap()).unwrap();
    ///     let listing = connector
    ///         .get_bucket("bucket-name")
    ///         .prefix(Some("photos/".into()))
    ///         .max_keys(Some(500))
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     for entry in listing.entries.values() {
    ///         println!("{} {:?}", entry.name, entry.size);
    ///     }
    /// }
    /// ```
    pub fn get_bucket<S: Into<String>>(&self, bucket: S) -> GetBucket {
        GetBucket::new(self.clone(), bucket.into())
    }
}
