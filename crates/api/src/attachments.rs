// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reading, encoding and decoding cell attachments.
//!
//! Attachments are stored inline in the schedule as `data:` URIs so the
//! roster document stays a single self-contained value.

use crate::error::{ApiError, ApiResult};
use base64::{Engine, engine::general_purpose::STANDARD as B64};
use roster_domain::{Attachment, DateKey, EmployeeId};
use roster_grid::{Generation, GridEvent};
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, warn};

const FALLBACK_MIME: &str = "application/octet-stream";

/// A decoded attachment ready to be offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAttachment {
    /// Original file name.
    pub file_name: String,
    /// MIME type taken from the data URI.
    pub mime: String,
    /// Raw file content.
    pub bytes: Vec<u8>,
}

/// Guesses a MIME type from a file name's extension.
#[must_use]
pub fn guess_mime(file_name: &str) -> &'static str {
    let extension: String = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "txt" => "text/plain",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => FALLBACK_MIME,
    }
}

/// Encodes raw file content as an inline attachment.
///
/// # Arguments
///
/// * `file_name` - The picked file's name
/// * `bytes` - The file content
#[must_use]
pub fn encode_attachment(file_name: &str, bytes: &[u8]) -> Attachment {
    let content: String = format!("data:{};base64,{}", guess_mime(file_name), B64.encode(bytes));
    Attachment::new(file_name, content)
}

/// Decodes a stored attachment for download.
///
/// # Errors
///
/// Returns `ApiError::MalformedDataUri` if the content is not a base64
/// `data:` URI.
pub fn decode_attachment(attachment: &Attachment) -> ApiResult<DecodedAttachment> {
    let malformed = || ApiError::MalformedDataUri(attachment.file_name.clone());

    let rest: &str = attachment
        .content
        .strip_prefix("data:")
        .ok_or_else(malformed)?;
    let (header, payload): (&str, &str) = rest.split_once(',').ok_or_else(malformed)?;
    let mime: &str = header.strip_suffix(";base64").ok_or_else(malformed)?;
    let bytes: Vec<u8> = B64.decode(payload).map_err(|_| malformed())?;

    Ok(DecodedAttachment {
        file_name: attachment.file_name.clone(),
        mime: if mime.is_empty() {
            FALLBACK_MIME.to_string()
        } else {
            mime.to_string()
        },
        bytes,
    })
}

/// Reads a picked file to the end and encodes it.
///
/// # Errors
///
/// Returns `ApiError::Io` if reading fails.
pub async fn ingest_attachment<R>(file_name: &str, mut reader: R) -> ApiResult<Attachment>
where
    R: AsyncRead + Unpin,
{
    let mut bytes: Vec<u8> = Vec::new();
    reader.read_to_end(&mut bytes).await?;
    debug!(file_name, size = bytes.len(), "Attachment read");
    Ok(encode_attachment(file_name, &bytes))
}

/// Turns the outcome of a file read into the event the grid expects.
///
/// A failed read becomes `AttachmentFailed`, which stores nothing.
#[must_use]
pub fn attachment_event(
    generation: Generation,
    employee: EmployeeId,
    date: DateKey,
    result: ApiResult<Attachment>,
) -> GridEvent {
    match result {
        Ok(attachment) => GridEvent::AttachmentLoaded {
            generation,
            employee,
            date,
            attachment,
        },
        Err(err) => {
            warn!(generation = %generation, error = %err, "Attachment could not be read");
            GridEvent::AttachmentFailed { generation }
        }
    }
}
