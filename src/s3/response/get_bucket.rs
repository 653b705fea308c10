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

use crate::s3::error::{Error, ValidationErr};
use crate::s3::string_map::StringMap;
use crate::s3::types::ListEntry;
use crate::s3::utils::{
    from_iso8601utc, get_children, get_default_text, get_option_text, strip_quotes,
};
use std::collections::BTreeMap;
use xmltree::Element;

/// Response of [get_bucket()](crate::s3::Connector::get_bucket) API
#[derive(Clone, Debug, Default)]
pub struct GetBucketResponse {
    /// Headers of the last page fetched
    pub headers: StringMap,
    pub bucket: String,
    pub prefix: Option<String>,
    /// Objects and, when requested, common prefixes keyed by name
    pub entries: BTreeMap<String, ListEntry>,
    /// Whether the server had more entries when listing stopped
    pub is_truncated: bool,
    /// Number of pages fetched
    pub pages: u32,
}

/// One `ListBucketResult` page
#[derive(Clone, Debug, Default)]
pub struct ListPage {
    pub entries: Vec<ListEntry>,
    pub common_prefixes: Vec<ListEntry>,
    pub is_truncated: bool,
    pub next_marker: Option<String>,
}

impl ListPage {
    /// Marker the next page starts after: `NextMarker`, else the last key
    pub fn continuation_marker(&self) -> Option<String> {
        self.next_marker
            .clone()
            .filter(|m| !m.is_empty())
            .or_else(|| self.entries.last().map(|e| e.name.clone()))
    }
}

/// Parses a `ListBucketResult` document
pub fn parse_list_page(root: &Element) -> Result<ListPage, Error> {
    if root.name != "ListBucketResult" {
        return Err(ValidationErr::InvalidResponse(format!(
            "expected <ListBucketResult>, got <{}>",
            root.name
        ))
        .into());
    }

    let mut entries = Vec::new();
    for content in get_children(root, "Contents") {
        let size = get_option_text(content, "Size")
            .map(|v| {
                v.trim().parse::<u64>().map_err(|_| {
                    ValidationErr::InvalidResponse(format!("invalid object size '{v}'"))
                })
            })
            .transpose()?;
        let last_modified = get_option_text(content, "LastModified")
            .map(|v| from_iso8601utc(&v))
            .transpose()?;

        entries.push(ListEntry {
            name: get_default_text(content, "Key"),
            last_modified,
            size,
            hash: get_option_text(content, "ETag").map(|v| strip_quotes(&v).to_string()),
            storage_class: get_option_text(content, "StorageClass"),
            is_prefix: false,
        });
    }

    let common_prefixes = get_children(root, "CommonPrefixes")
        .map(|p| ListEntry {
            name: get_default_text(p, "Prefix"),
            is_prefix: true,
            ..Default::default()
        })
        .collect();

    Ok(ListPage {
        entries,
        common_prefixes,
        is_truncated: get_default_text(root, "IsTruncated").eq_ignore_ascii_case("true"),
        next_marker: get_option_text(root, "NextMarker"),
    })
}
