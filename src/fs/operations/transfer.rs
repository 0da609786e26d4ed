//! File content transfer over the HTTP channel.

use std::fmt;
use std::time::Duration;

use bytes::Bytes;
use futures::stream::BoxStream;
use futures::{StreamExt, TryStreamExt};
use reqwest::multipart::{Form, Part};

use super::with_timeout;
use crate::error::{FsError, Result};
use crate::fs::{Filesystem, RequestOpts};

/// Stream of file content chunks.
pub type ByteStream = BoxStream<'static, Result<Bytes>>;

/// Representation requested for a file read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadFormat {
    /// Decoded text
    #[default]
    Text,
    /// Byte array materialized from the response buffer
    Bytes,
    /// Opaque binary buffer
    Blob,
    /// Streaming byte source
    Stream,
}

/// Per-call options for [`Filesystem::read`].
#[derive(Debug, Clone, Default)]
pub struct ReadOpts {
    /// Requested content representation.
    pub format: ReadFormat,
    /// Acting username; falls back to the connection default.
    pub user: Option<String>,
    /// Per-call timeout; falls back to the connection default.
    pub request_timeout: Option<Duration>,
}

/// File contents in the representation the caller asked for. Exactly
/// one representation is produced per read.
pub enum FileContents {
    /// Decoded text
    Text(String),
    /// Materialized byte array
    Bytes(Vec<u8>),
    /// Opaque binary buffer
    Blob(Bytes),
    /// Streaming byte source; the caller paces consumption
    Stream(ByteStream),
}

impl FileContents {
    /// Text contents, if that representation was requested.
    pub fn into_text(self) -> Option<String> {
        match self {
            FileContents::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Byte-array contents, if that representation was requested.
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            FileContents::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Binary buffer contents, if that representation was requested.
    pub fn into_blob(self) -> Option<Bytes> {
        match self {
            FileContents::Blob(blob) => Some(blob),
            _ => None,
        }
    }

    /// Byte stream, if that representation was requested.
    pub fn into_stream(self) -> Option<ByteStream> {
        match self {
            FileContents::Stream(stream) => Some(stream),
            _ => None,
        }
    }
}

impl fmt::Debug for FileContents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileContents::Text(text) => f.debug_tuple("Text").field(&text.len()).finish(),
            FileContents::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            FileContents::Blob(blob) => f.debug_tuple("Blob").field(&blob.len()).finish(),
            FileContents::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// Content accepted by [`Filesystem::write`], normalized into a single
/// binary payload before upload.
pub enum WriteData {
    /// Text contents
    Text(String),
    /// Raw byte buffer
    Bytes(Vec<u8>),
    /// Opaque binary buffer
    Blob(Bytes),
    /// Streaming byte source, collected before upload
    Stream(ByteStream),
}

impl WriteData {
    pub(crate) async fn into_payload(self) -> Result<Bytes> {
        match self {
            WriteData::Text(text) => Ok(Bytes::from(text)),
            WriteData::Bytes(bytes) => Ok(Bytes::from(bytes)),
            WriteData::Blob(blob) => Ok(blob),
            WriteData::Stream(mut stream) => {
                let mut payload = Vec::new();
                while let Some(chunk) = stream.next().await {
                    payload.extend_from_slice(&chunk?);
                }
                Ok(Bytes::from(payload))
            }
        }
    }
}

impl From<&str> for WriteData {
    fn from(text: &str) -> Self {
        WriteData::Text(text.to_string())
    }
}

impl From<String> for WriteData {
    fn from(text: String) -> Self {
        WriteData::Text(text)
    }
}

impl From<Vec<u8>> for WriteData {
    fn from(bytes: Vec<u8>) -> Self {
        WriteData::Bytes(bytes)
    }
}

impl From<&[u8]> for WriteData {
    fn from(bytes: &[u8]) -> Self {
        WriteData::Bytes(bytes.to_vec())
    }
}

impl From<Bytes> for WriteData {
    fn from(blob: Bytes) -> Self {
        WriteData::Blob(blob)
    }
}

impl Filesystem {
    /// Read the file at `path` in the representation selected by
    /// `opts.format`.
    ///
    /// For [`ReadFormat::Stream`] the effective timeout bounds
    /// connection and response-header time only; the body is consumed
    /// at the caller's pace.
    pub async fn read(&self, path: &str, opts: &ReadOpts) -> Result<FileContents> {
        let limit = self.config().effective_timeout(opts.request_timeout);
        let url = self.file_url(path, opts.user.as_deref())?;
        let format = opts.format;

        with_timeout(limit, async {
            let response = self.http.get(url).await?;
            match format {
                ReadFormat::Text => Ok(FileContents::Text(response.text().await?)),
                ReadFormat::Bytes => {
                    let buffer = response.bytes().await?;
                    Ok(FileContents::Bytes(buffer.to_vec()))
                }
                ReadFormat::Blob => Ok(FileContents::Blob(response.bytes().await?)),
                ReadFormat::Stream => Ok(FileContents::Stream(
                    response.bytes_stream().map_err(FsError::from).boxed(),
                )),
            }
        })
        .await
    }

    /// Write `data` to the file at `path`, replacing any existing
    /// contents. The payload is normalized to a single buffer and
    /// submitted as a multipart file upload.
    pub async fn write(
        &self,
        path: &str,
        data: impl Into<WriteData>,
        opts: &RequestOpts,
    ) -> Result<()> {
        let limit = self.config().effective_timeout(opts.request_timeout);
        let url = self.file_url(path, opts.user.as_deref())?;
        let data = data.into();
        let file_name = path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or("file")
            .to_string();

        with_timeout(limit, async {
            let payload = data.into_payload().await?;
            let part = Part::bytes(payload.to_vec()).file_name(file_name);
            let form = Form::new().part("file", part);
            self.http.post_multipart(url, form).await?;
            Ok(())
        })
        .await
    }
}
