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

//! Connection settings: credentials, region, endpoint and addressing style.
//!
//! Every mutator validates its argument and applies the cross-field rules
//! between signature method, endpoint, region and path style. Mutation order
//! matters: a later setter can override a flag an earlier one derived.

use crate::s3::creds::Credentials;
use crate::s3::error::ConfigError;
use crate::s3::http::match_aws_endpoint;
use crate::s3::signer::{Signer, SignerV2, SignerV4};
use lazy_static::lazy_static;
use regex::Regex;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_ENDPOINT: &str = "s3.amazonaws.com";

lazy_static! {
    static ref REGION_REGEX: Regex = Regex::new(r"^[a-z0-9-]+$").unwrap();
}

/// Request signing algorithm
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignatureMethod {
    /// Legacy HMAC-SHA1 signing
    V2,
    /// Derived-key HMAC-SHA256 signing
    #[default]
    V4,
}

impl FromStr for SignatureMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("v2") {
            Ok(SignatureMethod::V2)
        } else if s.eq_ignore_ascii_case("v4") {
            Ok(SignatureMethod::V4)
        } else {
            Err(ConfigError::InvalidSignatureMethod(s.to_string()))
        }
    }
}

impl fmt::Display for SignatureMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SignatureMethod::V2 => "v2",
            SignatureMethod::V4 => "v4",
        })
    }
}

/// Settings every request is built from
#[derive(Clone)]
pub struct Configuration {
    credentials: Credentials,
    signature_method: SignatureMethod,
    region: String,
    endpoint: String,
    use_ssl: bool,
    use_dual_stack: bool,
    use_legacy_path_style: bool,
    debug: bool,
}

impl Configuration {
    /// Returns a configuration with the given keys and default settings
    ///
    /// # Examples
    ///
    /// ```
    /// use s3_connector::s3::{Configuration, SignatureMethod};
    /// let config = Configuration::new("AKIDEXAMPLE", "secret").unwrap();
    /// assert_eq!(config.region(), "us-east-1");
    /// assert_eq!(config.signature_method(), SignatureMethod::V4);
    /// ```
    pub fn new(access_key: &str, secret_key: &str) -> Result<Self, ConfigError> {
        let mut config = Self {
            credentials: Credentials::new("", "", None),
            signature_method: SignatureMethod::default(),
            region: DEFAULT_REGION.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            use_ssl: true,
            use_dual_stack: false,
            use_legacy_path_style: false,
            debug: false,
        };
        config.set_access_key(access_key)?;
        config.set_secret_key(secret_key)?;
        Ok(config)
    }

    /// Builds a configuration from `S3_*` environment variables.
    ///
    /// `S3_ACCESS_KEY` and `S3_SECRET_KEY` are required. The endpoint is applied
    /// before the signature method so an explicit `S3_SIGNATURE_METHOD` wins
    /// over the method an endpoint implies.
    pub fn from_env() -> Result<Self, ConfigError> {
        let access_key = env::var("S3_ACCESS_KEY")
            .map_err(|_| ConfigError::InvalidAccessKey("S3_ACCESS_KEY is not set".into()))?;
        let secret_key = env::var("S3_SECRET_KEY")
            .map_err(|_| ConfigError::InvalidSecretKey("S3_SECRET_KEY is not set".into()))?;

        let mut config = Self::new(&access_key, &secret_key)?;
        if let Ok(v) = env::var("S3_SESSION_TOKEN") {
            config.set_session_token(Some(&v));
        }
        if let Ok(v) = env::var("S3_ENDPOINT") {
            config.set_endpoint(&v)?;
        }
        if let Ok(v) = env::var("S3_SIGNATURE_METHOD") {
            config.set_signature_method(&v)?;
        }
        if let Ok(v) = env::var("S3_REGION") {
            config.set_region(&v)?;
        }
        if let Some(v) = env_flag("S3_USE_SSL") {
            config.set_use_ssl(v);
        }
        if let Some(v) = env_flag("S3_USE_LEGACY_PATH_STYLE") {
            config.set_use_legacy_path_style(v);
        }
        if let Some(v) = env_flag("S3_USE_DUAL_STACK") {
            config.set_use_dual_stack(v);
        }
        Ok(config)
    }

    pub fn set_access_key(&mut self, access_key: &str) -> Result<(), ConfigError> {
        if access_key.trim().is_empty() {
            return Err(ConfigError::InvalidAccessKey(
                "access key cannot be empty".into(),
            ));
        }
        self.credentials.access_key = access_key.to_string();
        Ok(())
    }

    pub fn set_secret_key(&mut self, secret_key: &str) -> Result<(), ConfigError> {
        if secret_key.is_empty() {
            return Err(ConfigError::InvalidSecretKey(
                "secret key cannot be empty".into(),
            ));
        }
        self.credentials.secret_key = secret_key.to_string();
        Ok(())
    }

    /// Sets the temporary-credentials token, signed as `x-amz-security-token`
    pub fn set_session_token(&mut self, session_token: Option<&str>) {
        self.credentials.session_token = session_token
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string());
    }

    /// Parses and sets the signature method (`v2` or `v4`, any case).
    ///
    /// Switching to V2 against an Amazon endpoint turns legacy path style off.
    pub fn set_signature_method(&mut self, method: &str) -> Result<(), ConfigError> {
        let method = SignatureMethod::from_str(method)?;
        if method == SignatureMethod::V4 && self.region.is_empty() {
            return Err(ConfigError::InvalidRegion(String::new()));
        }
        if method == SignatureMethod::V2 && is_amazon_endpoint(&self.endpoint) {
            self.use_legacy_path_style = false;
        }
        self.signature_method = method;
        Ok(())
    }

    /// Sets the region. A `cn-` region on the default endpoint moves the
    /// endpoint to the China partition.
    pub fn set_region(&mut self, region: &str) -> Result<(), ConfigError> {
        if region.is_empty() {
            if self.signature_method == SignatureMethod::V4 {
                return Err(ConfigError::InvalidRegion(String::new()));
            }
        } else if !REGION_REGEX.is_match(region) {
            return Err(ConfigError::InvalidRegion(region.to_string()));
        }

        if region.starts_with("cn-") && self.endpoint == DEFAULT_ENDPOINT {
            self.endpoint = format!("s3.{region}.amazonaws.com.cn");
        }
        self.region = region.to_string();
        Ok(())
    }

    /// Sets the service host. Any non-Amazon endpoint forces V2 signing.
    pub fn set_endpoint(&mut self, endpoint: &str) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: reason.to_string(),
        };
        if endpoint.is_empty() {
            return Err(invalid("endpoint cannot be empty"));
        }
        if endpoint.contains("://") {
            return Err(invalid("scheme is not allowed; use set_use_ssl instead"));
        }
        if endpoint.contains('/') {
            return Err(invalid("path is not allowed"));
        }
        if endpoint.chars().any(char::is_whitespace) {
            return Err(invalid("whitespace is not allowed"));
        }

        if !is_amazon_endpoint(endpoint) {
            self.signature_method = SignatureMethod::V2;
        }
        self.endpoint = endpoint.to_string();
        Ok(())
    }

    pub fn set_use_ssl(&mut self, use_ssl: bool) {
        self.use_ssl = use_ssl;
    }

    pub fn set_use_dual_stack(&mut self, use_dual_stack: bool) {
        self.use_dual_stack = use_dual_stack;
    }

    pub fn set_use_legacy_path_style(&mut self, use_legacy_path_style: bool) {
        self.use_legacy_path_style = use_legacy_path_style;
    }

    /// Includes credentials in the `Debug` output when set
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn access_key(&self) -> &str {
        &self.credentials.access_key
    }

    pub fn secret_key(&self) -> &str {
        &self.credentials.secret_key
    }

    pub fn session_token(&self) -> Option<&str> {
        self.credentials.session_token.as_deref()
    }

    pub fn signature_method(&self) -> SignatureMethod {
        self.signature_method
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn use_ssl(&self) -> bool {
        self.use_ssl
    }

    pub fn use_dual_stack(&self) -> bool {
        self.use_dual_stack
    }

    pub fn use_legacy_path_style(&self) -> bool {
        self.use_legacy_path_style
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Returns the signer for the configured signature method
    pub fn signer(&self) -> Arc<dyn Signer> {
        match self.signature_method {
            SignatureMethod::V2 => Arc::new(SignerV2::new(self.credentials.clone())),
            SignatureMethod::V4 => {
                Arc::new(SignerV4::new(self.credentials.clone(), self.region.clone()))
            }
        }
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Configuration");
        if self.debug {
            s.field("credentials", &self.credentials.unredacted());
        } else {
            s.field("credentials", &self.credentials);
        }
        s.field("signature_method", &self.signature_method)
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("use_ssl", &self.use_ssl)
            .field("use_dual_stack", &self.use_dual_stack)
            .field("use_legacy_path_style", &self.use_legacy_path_style)
            .field("debug", &self.debug)
            .finish()
    }
}

fn is_amazon_endpoint(endpoint: &str) -> bool {
    endpoint.to_lowercase().contains("amazonaws.com") || match_aws_endpoint(endpoint)
}

fn env_flag(name: &str) -> Option<bool> {
    let value = env::var(name).ok()?;
    Some(matches!(
        value.to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    ))
}
