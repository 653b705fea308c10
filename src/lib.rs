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

//! # S3 Connector (`s3-connector`)
//!
//! This crate speaks the Amazon S3 REST protocol: it builds correctly signed
//! requests (Signature Version 2 and Version 4), resolves endpoint and
//! host-naming rules, classifies responses and orchestrates the multi-step
//! operations (paginated listing, multipart upload) on top of single requests.
//!
//! Every operation on the [`s3::Connector`] returns a request builder; call
//! `send()` on it to execute.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use s3_connector::s3::{Configuration, Connector};
//! use s3_connector::s3::object_content::ObjectContent;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut config = Configuration::new("ACCESS", "SECRET").unwrap();
//!     config.set_region("eu-west-1").unwrap();
//!     let connector = Connector::new(config).unwrap();
//!
//!     connector
//!         .put_object("my-bucket", "hello.txt", ObjectContent::from("hello"))
//!         .send()
//!         .await
//!         .expect("put failed");
//!
//!     let listing = connector.get_bucket("my-bucket").send().await.unwrap();
//!     for entry in listing.entries.values() {
//!         println!("{} {:?}", entry.name, entry.size);
//!     }
//! }
//! ```
//!
//! ## Design
//! - [`s3::Configuration`] validates itself on every mutation and selects the signer
//! - [`s3::signer::Signer`] has exactly two implementations, V2 and V4
//! - [`s3::types::S3Request`] owns host/resource resolution and dispatch
//! - [`s3::types::S3Response`] owns classification and lazy XML parsing
//! - The HTTP transport is pluggable through [`s3::transport::Transport`]

#![allow(clippy::result_large_err)]
#![allow(clippy::too_many_arguments)]
pub mod s3;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
