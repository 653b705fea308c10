// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2022 MinIO, Inc.
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

//! Access credentials

use std::fmt;

#[derive(Clone, PartialEq, Eq)]
/// Credentials contain access key, secret key and session token optionally
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
    pub session_token: Option<String>,
}

impl Credentials {
    /// Returns credentials with given access key, secret key and optional session token
    ///
    /// # Examples
    ///
    /// ```
    /// use s3_connector::s3::creds::Credentials;
    /// let creds = Credentials::new("AKIDEXAMPLE", "secret", None);
    /// assert!(!format!("{creds:?}").contains("secret"));
    /// ```
    pub fn new(access_key: &str, secret_key: &str, session_token: Option<&str>) -> Self {
        Self {
            access_key: access_key.to_string(),
            secret_key: secret_key.to_string(),
            session_token: session_token.map(|v| v.to_string()),
        }
    }

    /// Debug view that includes the secret material
    pub(crate) fn unredacted(&self) -> UnredactedCredentials<'_> {
        UnredactedCredentials(self)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &"<redacted>")
            .field("secret_key", &"<redacted>")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

pub(crate) struct UnredactedCredentials<'a>(&'a Credentials);

impl fmt::Debug for UnredactedCredentials<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.0.access_key)
            .field("secret_key", &self.0.secret_key)
            .field("session_token", &self.0.session_token)
            .finish()
    }
}
