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
use crate::s3::builders::GetObject;

impl Connector {
    /// Creates a [`GetObject`] request builder.
    ///
    /// To execute the request, call [`GetObject::send()`], which returns a
    /// [`Result`] containing a [`GetObjectResponse`](crate::s3::response::GetObjectResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use s3_connector::s3::{Configuration, Connector};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let connector = Connector::new(Configuration::from_env().unwrap()).unwrap();
    ///     let resp = connector
    ///         .get_object("bucket-name", "greeting.txt")
    ///         .range(0, Some(4))
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("{} bytes", resp.content.len());
    /// }
    /// ```
    pub fn get_object<S1: Into<String>, S2: Into<String>>(&self, bucket: S1, key: S2) -> GetObject {
        GetObject::new(self.clone(), bucket.into(), key.into())
    }
}
