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

//! HTTP URL definitions and host resolution

use crate::s3::config::{Configuration, SignatureMethod};
use crate::s3::string_map::{StringMap, StringMapExt};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

/// Query parameters that are part of the signed resource
pub const SUB_RESOURCES: [&str; 7] = [
    "acl",
    "location",
    "torrent",
    "logging",
    "uploads",
    "uploadId",
    "partNumber",
];

const US_EAST_1_EXTERNAL_HOST: &str = "s3-external-1.amazonaws.com";
const US_EAST_1_HOST: &str = "s3.amazonaws.com";

#[derive(Clone, Debug, Default)]
/// Represents HTTP URL
pub struct Url {
    pub https: bool,
    pub host: String,
    pub path: String,
    pub query: StringMap,
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.host.is_empty() {
            return Err(std::fmt::Error);
        }

        if self.https {
            f.write_str("https://")?;
        } else {
            f.write_str("http://")?;
        }
        f.write_str(&self.host)?;

        if !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            f.write_str("?")?;
            f.write_str(&self.query.to_query_string())?;
        }

        Ok(())
    }
}

/// Resolves the host a request for `bucket` is sent to.
///
/// Pure function of the configuration's signature method, region, endpoint,
/// legacy path style and dual stack flags.
pub fn resolve_host(config: &Configuration, bucket: &str) -> String {
    if bucket.is_empty() {
        return config.endpoint().to_string();
    }

    let base = match config.signature_method() {
        SignatureMethod::V2 => config.endpoint().to_string(),
        SignatureMethod::V4 => {
            let mut regional = format!("{}.amazonaws.com", config.region());
            if config.region().starts_with("cn-") {
                regional.push_str(".cn");
            }
            if config.use_dual_stack() {
                format!("s3.dualstack.{regional}")
            } else {
                format!("s3.{regional}")
            }
        }
    };

    if config.use_legacy_path_style() {
        base
    } else {
        format!("{bucket}.{base}")
    }
}

/// Rewrites the us-east-1 external host for bucket location lookups
pub fn location_host_override(host: &str, uri: &str) -> Option<&'static str> {
    if uri.ends_with("/?location") && host.eq_ignore_ascii_case(US_EAST_1_EXTERNAL_HOST) {
        return Some(US_EAST_1_HOST);
    }
    None
}

/// Returns whether any of the query keys is a signed sub-resource
pub fn has_sub_resource(query: &StringMap) -> bool {
    query.keys().any(|k| SUB_RESOURCES.contains(&k.as_str()))
}

pub fn match_aws_endpoint(value: &str) -> bool {
    lazy_static! {
        static ref AWS_ENDPOINT_REGEX: Regex = Regex::new(r".*\.amazonaws\.com(|\.cn)$").unwrap();
    }

    AWS_ENDPOINT_REGEX.is_match(value.to_lowercase().as_str())
}

/// Returns whether the host looks like an Amazon S3 host
pub fn is_amazon_s3_host(host: &str) -> bool {
    lazy_static! {
        static ref AWS_S3_LABEL_REGEX: Regex = Regex::new(r"(^|\.)s3([.-]|$)").unwrap();
    }

    match_aws_endpoint(host) && AWS_S3_LABEL_REGEX.is_match(host.to_lowercase().as_str())
}

/// Certificate verification is skipped for Amazon S3 hosts with more than
/// four dots, e.g. virtual-hosted buckets whose names contain dots.
pub fn should_verify_tls(host: &str) -> bool {
    !(is_amazon_s3_host(host) && host.matches('.').count() > 4)
}
