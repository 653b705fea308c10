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
use crate::s3::builders::PutObject;
use crate::s3::object_content::ObjectContent;

impl Connector {
    /// Creates a [`PutObject`] request builder that stores `content` under `key`.
    ///
    /// To execute the request, call [`PutObject::send()`], which returns a
    /// [`Result`] containing a [`PutObjectResponse`](crate::s3::response::PutObjectResponse).
    /// An empty payload is rejected unless it is [`ObjectContent::Directory`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use s3_connector::s3::{Configuration, Connector};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let config = Configuration::from_env().unwrap();
    ///     let connector = Connector::new(config).unwrap();
    ///     let resp = connector
    ///         .put_object("bucket-name", "greeting.txt", "hello world")
    ///         .content_type("text/plain")
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("stored with etag {:?}", resp.etag);
    /// }
    /// ```
    pub fn put_object<S1: Into<String>, S2: Into<String>, C: Into<ObjectContent>>(
        &self,
        bucket: S1,
        key: S2,
        content: C,
    ) -> PutObject {
        PutObject::new(self.clone(), bucket.into(), key.into(), content.into())
    }
}
