// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2024 MinIO, Inc.
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

use crate::s3::error::{Error, IoError};
use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use std::io::SeekFrom;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};
use uuid::Uuid;

/// Payload of an upload: in-memory bytes, a local file, or a directory marker.
///
/// A directory marker is the only payload allowed to be empty; it uploads a
/// zero-length object whose key ends with `/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObjectContent {
    Bytes(Bytes),
    File(PathBuf),
    Directory,
}

impl From<Bytes> for ObjectContent {
    fn from(value: Bytes) -> Self {
        ObjectContent::Bytes(value)
    }
}

impl From<String> for ObjectContent {
    fn from(value: String) -> Self {
        ObjectContent::Bytes(Bytes::from(value))
    }
}

impl From<Vec<u8>> for ObjectContent {
    fn from(value: Vec<u8>) -> Self {
        ObjectContent::Bytes(Bytes::from(value))
    }
}

impl From<&'static str> for ObjectContent {
    fn from(value: &'static str) -> Self {
        ObjectContent::Bytes(Bytes::from_static(value.as_bytes()))
    }
}

impl From<&Path> for ObjectContent {
    fn from(value: &Path) -> Self {
        ObjectContent::File(value.to_path_buf())
    }
}

impl From<PathBuf> for ObjectContent {
    fn from(value: PathBuf) -> Self {
        ObjectContent::File(value)
    }
}

impl ObjectContent {
    pub fn is_directory(&self) -> bool {
        matches!(self, ObjectContent::Directory)
    }

    /// Total payload size in bytes
    pub async fn size(&self) -> Result<u64, Error> {
        match self {
            ObjectContent::Bytes(b) => Ok(b.len() as u64),
            ObjectContent::File(path) => Ok(tokio::fs::metadata(path)
                .await
                .map_err(|e| read_err(path, e))?
                .len()),
            ObjectContent::Directory => Ok(0),
        }
    }

    /// Reads `length` bytes starting at `offset`.
    ///
    /// Files are opened, sought and read within this call only.
    pub async fn read_window(&self, offset: u64, length: u64) -> Result<Bytes, Error> {
        match self {
            ObjectContent::Bytes(b) => {
                let start = (offset as usize).min(b.len());
                let end = start.saturating_add(length as usize).min(b.len());
                Ok(b.slice(start..end))
            }
            ObjectContent::File(path) => {
                let mut file = tokio::fs::File::open(path)
                    .await
                    .map_err(|e| read_err(path, e))?;
                file.seek(SeekFrom::Start(offset)).await?;
                let mut buf = Vec::with_capacity(length as usize);
                file.take(length).read_to_end(&mut buf).await?;
                Ok(Bytes::from(buf))
            }
            ObjectContent::Directory => Ok(Bytes::new()),
        }
    }

    /// Reads the whole payload
    pub async fn to_bytes(&self) -> Result<Bytes, Error> {
        match self {
            ObjectContent::Bytes(b) => Ok(b.clone()),
            ObjectContent::File(path) => tokio::fs::read(path)
                .await
                .map(Bytes::from)
                .map_err(|e| read_err(path, e).into()),
            ObjectContent::Directory => Ok(Bytes::new()),
        }
    }
}

fn read_err(path: &Path, source: std::io::Error) -> IoError {
    IoError::CannotOpenFileForRead {
        path: path.to_path_buf(),
        source,
    }
}

fn write_err(path: &Path, source: std::io::Error) -> IoError {
    IoError::CannotOpenFileForWrite {
        path: path.to_path_buf(),
        source,
    }
}

/// Writes a byte stream to `path` and returns the number of bytes written.
///
/// Data goes to a temporary file next to `path` that is renamed into place
/// once the stream ends. On failure the temporary file is removed and `path`
/// is left untouched. Missing parent directories are created.
pub async fn write_file<S, E>(stream: S, path: &Path) -> Result<u64, Error>
where
    S: Stream<Item = Result<Bytes, E>>,
    Error: From<E>,
{
    let file_name = path
        .file_name()
        .ok_or_else(|| write_err(path, std::io::Error::other("path has no file name")))?;
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    tokio::fs::create_dir_all(&parent)
        .await
        .map_err(|e| write_err(&parent, e))?;

    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(format!(".{}.part", Uuid::new_v4().simple()));
    let tmp_path = parent.join(tmp_name);

    let written = match copy_stream(stream, &tmp_path).await {
        Ok(n) => n,
        Err(e) => {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(e);
        }
    };
    if let Err(e) = tokio::fs::rename(&tmp_path, path).await {
        let _ = tokio::fs::remove_file(&tmp_path).await;
        return Err(write_err(path, e).into());
    }
    Ok(written)
}

async fn copy_stream<S, E>(stream: S, tmp_path: &Path) -> Result<u64, Error>
where
    S: Stream<Item = Result<Bytes, E>>,
    Error: From<E>,
{
    let mut file = tokio::fs::File::create(tmp_path)
        .await
        .map_err(|e| write_err(tmp_path, e))?;
    let mut stream = std::pin::pin!(stream);
    let mut written = 0;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;
    Ok(written)
}
