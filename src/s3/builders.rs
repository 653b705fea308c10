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

//! Argument builders for [Connector](crate::s3::Connector) APIs

mod delete_object;
mod get_authenticated_url;
mod get_bucket;
mod get_bucket_location;
mod get_object;
mod head_object;
mod list_buckets;
mod multipart;
mod put_object;

pub use delete_object::*;
pub use get_authenticated_url::*;
pub use get_bucket::*;
pub use get_bucket_location::*;
pub use get_object::*;
pub use head_object::*;
pub use list_buckets::*;
pub use multipart::*;
pub use put_object::*;

use crate::s3::header_constants::X_AMZ_META_PREFIX;
use crate::s3::string_map::StringMap;
use crate::s3::types::S3Request;

/// Adds user metadata as `x-amz-meta-*` headers
fn add_user_metadata(request: &mut S3Request, user_metadata: &StringMap) {
    for (name, value) in user_metadata {
        let lower = name.to_lowercase();
        if lower.starts_with(X_AMZ_META_PREFIX) {
            request.add_header(&lower, value);
        } else {
            request.add_header(&format!("{X_AMZ_META_PREFIX}{lower}"), value);
        }
    }
}
