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

use crate::s3::client::Connector;
use crate::s3::error::{Error, OperationKind};
use crate::s3::response::{GetBucketResponse, ListPage, parse_list_page, require_xml};
use crate::s3::string_map::StringMap;
use http::Method;

/// Argument builder for [get_bucket()](crate::s3::Connector::get_bucket) API.
///
/// Follows truncated listings page by page until the server reports no more
/// entries or `max_keys` entries have been gathered. A failure on any page
/// after the first stops the walk and returns what was collected so far.
#[derive(Clone, Debug)]
pub struct GetBucket {
    connector: Connector,

    bucket: String,
    prefix: Option<String>,
    marker: Option<String>,
    delimiter: Option<String>,
    max_keys: Option<u32>,
    include_common_prefixes: bool,
}

impl GetBucket {
    pub fn new(connector: Connector, bucket: String) -> Self {
        Self {
            connector,
            bucket,
            prefix: None,
            marker: None,
            delimiter: None,
            max_keys: None,
            include_common_prefixes: false,
        }
    }

    pub fn prefix(mut self, prefix: Option<String>) -> Self {
        self.prefix = prefix;
        self
    }

    /// Key after which the listing starts
    pub fn marker(mut self, marker: Option<String>) -> Self {
        self.marker = marker;
        self
    }

    pub fn delimiter(mut self, delimiter: Option<String>) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Upper bound on the number of entries returned across all pages
    pub fn max_keys(mut self, max_keys: Option<u32>) -> Self {
        self.max_keys = max_keys;
        self
    }

    /// Adds common prefixes to the entries, flagged with `is_prefix`
    pub fn include_common_prefixes(mut self, include: bool) -> Self {
        self.include_common_prefixes = include;
        self
    }

    async fn fetch_page(
        &self,
        marker: Option<&str>,
        max_keys: Option<u32>,
    ) -> Result<(StringMap, ListPage), Error> {
        let mut req = self.connector.new_request(
            self.connector.config(),
            Method::GET,
            &self.bucket,
            "",
        );
        if let Some(v) = &self.prefix {
            req.add_query("prefix", v);
        }
        if let Some(v) = &self.delimiter {
            req.add_query("delimiter", v);
        }
        if let Some(v) = marker {
            req.add_query("marker", v);
        }
        if let Some(v) = max_keys {
            req.add_query("max-keys", v.to_string());
        }

        let (_, resp) = self
            .connector
            .execute(OperationKind::ListBucket, &[200], req)
            .await?;
        let page = parse_list_page(require_xml(&resp, "ListBucketResult")?)?;
        Ok((resp.headers().clone(), page))
    }

    pub async fn send(self) -> Result<GetBucketResponse, Error> {
        let mut result = GetBucketResponse {
            bucket: self.bucket.clone(),
            prefix: self.prefix.clone(),
            ..Default::default()
        };
        let mut marker = self.marker.clone();

        loop {
            let remaining = self
                .max_keys
                .map(|m| m.saturating_sub(result.entries.len() as u32));
            let (headers, page) = match self.fetch_page(marker.as_deref(), remaining).await {
                Ok(v) => v,
                Err(e) if result.pages > 0 => {
                    log::warn!(
                        "listing of bucket '{}' stopped after {} page(s): {e}",
                        self.bucket,
                        result.pages
                    );
                    break;
                }
                Err(e) => return Err(e),
            };

            result.pages += 1;
            result.headers = headers;
            result.is_truncated = page.is_truncated;
            let next = page.continuation_marker();

            for entry in page.entries {
                result.entries.insert(entry.name.clone(), entry);
            }
            if self.include_common_prefixes {
                for entry in page.common_prefixes {
                    result.entries.insert(entry.name.clone(), entry);
                }
            }

            let wants_more = self
                .max_keys
                .is_none_or(|m| (result.entries.len() as u32) < m);
            if !(page.is_truncated && wants_more) {
                break;
            }
            match next {
                // A marker that does not advance would repeat the same page.
                Some(m) if marker.as_deref() != Some(m.as_str()) => marker = Some(m),
                _ => break,
            }
        }

        if let Some(max_keys) = self.max_keys {
            while result.entries.len() > max_keys as usize {
                result.entries.pop_last();
            }
        }
        Ok(result)
    }
}
