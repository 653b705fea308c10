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
use crate::s3::builders::{AbortMultipart, FinalizeMultipart, StartMultipart, UploadMultipart};
use crate::s3::object_content::ObjectContent;
use crate::s3::types::Part;

impl Connector {
    /// Creates a [`StartMultipart`] request builder; the response carries the
    /// upload id used by the other multipart calls.
    pub fn start_multipart<S1: Into<String>, S2: Into<String>>(
        &self,
        bucket: S1,
        key: S2,
    ) -> StartMultipart {
        StartMultipart::new(self.clone(), bucket.into(), key.into())
    }

    /// Creates an [`UploadMultipart`] request builder for one part of `content`.
    pub fn upload_multipart<S1, S2, S3, C>(
        &self,
        bucket: S1,
        key: S2,
        upload_id: S3,
        content: C,
    ) -> UploadMultipart
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
        C: Into<ObjectContent>,
    {
        UploadMultipart::new(
            self.clone(),
            bucket.into(),
            key.into(),
            upload_id.into(),
            content.into(),
        )
    }

    /// Creates a [`FinalizeMultipart`] request builder from the ordered part ETags.
    ///
    /// The `n`-th ETag is sent as part number `n`, starting at 1.
    pub fn finalize_multipart<S1, S2, S3>(
        &self,
        bucket: S1,
        key: S2,
        upload_id: S3,
        etags: Vec<String>,
    ) -> FinalizeMultipart
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        let parts = etags
            .into_iter()
            .zip(1u32..)
            .map(|(etag, number)| Part { number, etag })
            .collect();
        FinalizeMultipart::new(
            self.clone(),
            bucket.into(),
            key.into(),
            upload_id.into(),
            parts,
        )
    }

    /// Creates an [`AbortMultipart`] request builder.
    pub fn abort_multipart<S1, S2, S3>(&self, bucket: S1, key: S2, upload_id: S3) -> AbortMultipart
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        AbortMultipart::new(self.clone(), bucket.into(), key.into(), upload_id.into())
    }
}
