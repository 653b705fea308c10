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

pub const HOST: &str = "Host";
pub const DATE: &str = "Date";
pub const CONTENT_MD5: &str = "Content-MD5";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const AUTHORIZATION: &str = "Authorization";
pub const RANGE: &str = "Range";

pub const LAST_MODIFIED: &str = "last-modified";
pub const ETAG: &str = "etag";
pub const EXPIRES: &str = "expires";

pub const X_AMZ_PREFIX: &str = "x-amz-";
pub const X_AMZ_META_PREFIX: &str = "x-amz-meta-";

pub const X_AMZ_ACL: &str = "x-amz-acl";
pub const X_AMZ_DATE: &str = "x-amz-date";
pub const X_AMZ_CONTENT_SHA256: &str = "x-amz-content-sha256";
pub const X_AMZ_SECURITY_TOKEN: &str = "x-amz-security-token";

/// Marker sent on the single retry of an upload whose Content-Length the
/// backend echoed back comma-joined.
pub const X_CONTENT_LENGTH_RETRY: &str = "X-Content-Length-Retry";

pub const AWS_ACCESS_KEY_ID: &str = "AWSAccessKeyId";
pub const SIGNATURE: &str = "Signature";
pub const EXPIRES_PARAM: &str = "Expires";

pub const X_AMZ_ALGORITHM_PARAM: &str = "X-Amz-Algorithm";
pub const X_AMZ_CREDENTIAL_PARAM: &str = "X-Amz-Credential";
pub const X_AMZ_DATE_PARAM: &str = "X-Amz-Date";
pub const X_AMZ_EXPIRES_PARAM: &str = "X-Amz-Expires";
pub const X_AMZ_SIGNED_HEADERS_PARAM: &str = "X-Amz-SignedHeaders";
pub const X_AMZ_SIGNATURE_PARAM: &str = "X-Amz-Signature";
pub const X_AMZ_SECURITY_TOKEN_PARAM: &str = "X-Amz-Security-Token";
