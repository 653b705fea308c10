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

//! Ordered, key-unique string maps used for query parameters and headers.
//!
//! Query parameter keys are kept exactly as given; values are percent-encoded
//! only when serialized. Header maps are unique case-insensitively through the
//! `*_ignore_case` accessors, while amz-header maps always hold lowercase keys.

use crate::s3::utils::urlencode;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Ordered map for string key and string value
pub type StringMap = BTreeMap<String, String>;

pub trait StringMapExt {
    /// Adds a key-value pair, replacing an existing value for the same key
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Adds all pairs of another map
    fn add_map(&mut self, other: StringMap);

    /// Sets a value, replacing any existing key that matches ignoring ASCII case
    fn set_ignore_case<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    fn get_ignore_case(&self, key: &str) -> Option<&str>;

    fn remove_ignore_case(&mut self, key: &str) -> Option<String>;

    /// Converts map to HTTP query string; empty values are emitted as bare keys
    fn to_query_string(&self) -> String;

    /// Converts map to the Signature V4 canonical query string
    fn get_canonical_query_string(&self) -> String;

    /// Converts map to signed headers and canonical headers
    fn get_canonical_headers(&self) -> (String, String);

    /// Folds the map into Signature V2 canonicalized amz headers
    fn get_canonical_amz_headers(&self) -> String;
}

impl StringMapExt for StringMap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn add_map(&mut self, other: StringMap) {
        self.extend(other);
    }

    fn set_ignore_case<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        self.remove_ignore_case(&key);
        self.insert(key, value.into());
    }

    fn get_ignore_case(&self, key: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    fn remove_ignore_case(&mut self, key: &str) -> Option<String> {
        let existing = self.keys().find(|k| k.eq_ignore_ascii_case(key)).cloned()?;
        self.remove(&existing)
    }

    fn to_query_string(&self) -> String {
        let mut query = String::new();
        for (key, value) in self {
            if !query.is_empty() {
                query.push('&');
            }
            query.push_str(&urlencode(key));
            if !value.is_empty() {
                query.push('=');
                query.push_str(&urlencode(value));
            }
        }
        query
    }

    fn get_canonical_query_string(&self) -> String {
        // Keys are sorted on their encoded form, which is what the server sees.
        let mut pairs: Vec<(String, String)> = self
            .iter()
            .map(|(k, v)| (urlencode(k).into_owned(), urlencode(v).into_owned()))
            .collect();
        pairs.sort();

        let mut query = String::new();
        for (key, value) in pairs {
            if !query.is_empty() {
                query.push('&');
            }
            query.push_str(&key);
            query.push('=');
            query.push_str(&value);
        }
        query
    }

    fn get_canonical_headers(&self) -> (String, String) {
        let mut btmap: BTreeMap<String, String> = BTreeMap::new();

        for (k, v) in self {
            let key = k.to_lowercase();
            if "authorization" == key || "user-agent" == key {
                continue;
            }
            btmap.insert(key, collapse_spaces(v).into_owned());
        }

        let mut signed_headers = String::new();
        let mut canonical_headers = String::new();
        let mut add_delim = false;
        for (key, value) in &btmap {
            if add_delim {
                signed_headers.push(';');
                canonical_headers.push('\n');
            }

            signed_headers.push_str(key);

            canonical_headers.push_str(key);
            canonical_headers.push(':');
            canonical_headers.push_str(value);

            add_delim = true;
        }

        (signed_headers, canonical_headers)
    }

    fn get_canonical_amz_headers(&self) -> String {
        let mut btmap: BTreeMap<String, &str> = BTreeMap::new();
        for (k, v) in self {
            btmap.insert(k.to_lowercase(), v.trim());
        }

        let mut folded = String::new();
        for (key, value) in btmap {
            folded.push_str(&key);
            folded.push(':');
            folded.push_str(value);
            folded.push('\n');
        }
        folded
    }
}

/// Trims a header value and collapses runs of spaces into one.
fn collapse_spaces(s: &str) -> Cow<'_, str> {
    let trimmed = s.trim();
    if !trimmed.contains("  ") {
        return Cow::Borrowed(trimmed);
    }

    let mut result = String::with_capacity(trimmed.len());
    let mut prev_space = false;
    for c in trimmed.chars() {
        if c == ' ' {
            if !prev_space {
                result.push(' ');
            }
            prev_space = true;
        } else {
            result.push(c);
            prev_space = false;
        }
    }
    Cow::Owned(result)
}
