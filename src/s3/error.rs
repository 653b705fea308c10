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

//! Error definitions for S3 operations

use crate::s3::error_response::ErrorResponse;
use crate::s3::types::{S3Request, S3Response};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised synchronously by [`Configuration`](crate::s3::Configuration) mutators.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid access key: {0}")]
    InvalidAccessKey(String),

    #[error("invalid secret key: {0}")]
    InvalidSecretKey(String),

    #[error("invalid region '{0}'")]
    InvalidRegion(String),

    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("invalid signature method '{0}'; expected v2 or v4")]
    InvalidSignatureMethod(String),
}

/// Errors found while validating operation arguments or decoding responses.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationErr {
    #[error("empty payload for object '{key}' in bucket '{bucket}'")]
    EmptyPayload { bucket: String, key: String },

    #[error("part size {0} is not supported; minimum allowed 5MiB")]
    InvalidPartSize(u64),

    #[error("invalid part number {0}; part numbers start at 1")]
    InvalidPartNumber(u32),

    #[error("{0}")]
    EmptyParts(String),

    #[error("part {0} has not been uploaded")]
    MissingPart(u32),

    #[error("upload id cannot be empty")]
    MissingUploadId,

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("invalid query parameter '{0}' in object key")]
    InvalidQueryParameter(String),
}

/// Errors from the local file collaborator.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("cannot open file '{path}' for reading: {source}")]
    CannotOpenFileForRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot open file '{path}' for writing: {source}")]
    CannotOpenFileForWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),
}

/// The operation family an [`OperationError`] was raised from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    Put,
    Get,
    ListBucket,
    ListBuckets,
    Delete,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OperationKind::Put => "cannot put",
            OperationKind::Get => "cannot get",
            OperationKind::ListBucket => "cannot list bucket",
            OperationKind::ListBuckets => "cannot list buckets",
            OperationKind::Delete => "cannot delete",
        })
    }
}

/// Failure of a single operation, raised either from an unexpected HTTP status
/// or from a structured service error in the response body.
///
/// The originating request and response are kept for post-mortem inspection.
#[derive(Debug)]
pub struct OperationError {
    kind: OperationKind,
    service_error: Option<ErrorResponse>,
    request: S3Request,
    response: S3Response,
}

impl OperationError {
    pub fn new(kind: OperationKind, request: S3Request, response: S3Response) -> Self {
        let service_error = response.error();
        Self {
            kind,
            service_error,
            request,
            response,
        }
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// HTTP status code of the response
    pub fn status(&self) -> u16 {
        self.response.status()
    }

    /// Service error code, when the response carried one
    pub fn code(&self) -> Option<&str> {
        self.service_error.as_ref().map(|e| e.code.as_str())
    }

    pub fn message(&self) -> Option<&str> {
        self.service_error.as_ref().map(|e| e.message.as_str())
    }

    pub fn service_error(&self) -> Option<&ErrorResponse> {
        self.service_error.as_ref()
    }

    pub fn request(&self) -> &S3Request {
        &self.request
    }

    pub fn response(&self) -> &S3Response {
        &self.response
    }
}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.request.uri())?;
        match &self.service_error {
            Some(e) => write!(f, ": [{}] {} (status {})", e.code, e.message, self.status()),
            None => write!(f, ": unexpected HTTP status {}", self.status()),
        }
    }
}

impl std::error::Error for OperationError {}

/// Error definitions
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("{0}")]
    Operation(Box<OperationError>),

    #[error("{0}")]
    Io(#[from] IoError),

    #[error("XML parse error: {0}")]
    XmlParse(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("time parse error: {0}")]
    TimeParse(#[from] chrono::ParseError),
}

impl From<OperationError> for Error {
    fn from(err: OperationError) -> Self {
        Error::Operation(Box::new(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(IoError::IOError(err))
    }
}

impl Error {
    /// Returns the operation error, if this is one
    pub fn as_operation(&self) -> Option<&OperationError> {
        match self {
            Error::Operation(e) => Some(e),
            _ => None,
        }
    }
}
