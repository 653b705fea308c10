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

//! Core S3 types

pub mod s3_request;
pub mod s3_response;

pub use s3_request::S3Request;
pub use s3_response::S3Response;

use crate::s3::error::ValidationErr;
use crate::s3::utils::UtcTime;
use std::collections::BTreeMap;

/// Smallest part size accepted for every part but the last
pub const MIN_PART_SIZE: u64 = 5 * 1024 * 1024;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Contains information of an item of a bucket listing
pub struct ListEntry {
    pub name: String,
    pub last_modified: Option<UtcTime>,
    pub size: Option<u64>,
    /// ETag without surrounding quotes
    pub hash: Option<String>,
    pub storage_class: Option<String>,
    pub is_prefix: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Contains the bucket name and creation date
pub struct Bucket {
    pub name: String,
    pub creation_date: Option<UtcTime>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Owner of the listed buckets
pub struct Owner {
    pub id: String,
    pub display_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Contains part number and etag of multipart upload
pub struct Part {
    pub number: u32,
    pub etag: String,
}

/// Byte window of part `part_number` (1-based) in a payload of `total_size`
/// bytes, or `None` past the last part.
pub fn part_window(total_size: u64, chunk_size: u64, part_number: u32) -> Option<(u64, u64)> {
    if part_number == 0 || chunk_size == 0 {
        return None;
    }
    let start = chunk_size.checked_mul(u64::from(part_number) - 1)?;
    if start >= total_size {
        return None;
    }
    let end = chunk_size
        .saturating_mul(u64::from(part_number))
        .min(total_size);
    Some((start, end - start))
}

/// Caller-held state of a multipart upload.
///
/// Part uploads may complete in any order; [`MultipartSession::parts`] yields
/// them ordered by part number for finalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultipartSession {
    pub upload_id: String,
    pub chunk_size: u64,
    pub total_size: u64,
    etags: BTreeMap<u32, String>,
}

impl MultipartSession {
    pub fn new(upload_id: &str, chunk_size: u64, total_size: u64) -> Result<Self, ValidationErr> {
        if upload_id.is_empty() {
            return Err(ValidationErr::MissingUploadId);
        }
        if chunk_size < MIN_PART_SIZE {
            return Err(ValidationErr::InvalidPartSize(chunk_size));
        }
        Ok(Self {
            upload_id: upload_id.to_string(),
            chunk_size,
            total_size,
            etags: BTreeMap::new(),
        })
    }

    /// Number of parts the payload splits into
    pub fn part_count(&self) -> u32 {
        self.total_size.div_ceil(self.chunk_size) as u32
    }

    pub fn record(&mut self, part_number: u32, etag: &str) -> Result<(), ValidationErr> {
        if part_number == 0 || part_number > self.part_count() {
            return Err(ValidationErr::InvalidPartNumber(part_number));
        }
        self.etags.insert(part_number, etag.to_string());
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.etags.len() as u32 == self.part_count()
    }

    /// Recorded parts in part-number order; fails on any gap
    pub fn parts(&self) -> Result<Vec<Part>, ValidationErr> {
        if self.etags.is_empty() {
            return Err(ValidationErr::EmptyParts(
                "no parts have been recorded".into(),
            ));
        }
        (1..=self.part_count())
            .map(|number| match self.etags.get(&number) {
                Some(etag) => Ok(Part {
                    number,
                    etag: etag.clone(),
                }),
                None => Err(ValidationErr::MissingPart(number)),
            })
            .collect()
    }
}
