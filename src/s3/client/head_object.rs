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
use crate::s3::builders::HeadObject;

impl Connector {
    /// Creates a [`HeadObject`] request builder returning object metadata
    /// without its content.
    pub fn head_object<S1: Into<String>, S2: Into<String>>(
        &self,
        bucket: S1,
        key: S2,
    ) -> HeadObject {
        HeadObject::new(self.clone(), bucket.into(), key.into())
    }
}
