// SPDX-License-Identifier: MPL-2.0
//! Asynchronous content reads for previews.

use super::preview::{truncate_text, PreviewCategory, PreviewContent, PreviewTicket};
use crate::domain::intake::ContentSource;
use crate::error::{Error, Result};
use image_rs::ImageReader;
use std::io::Cursor;

/// Reads the full content of a candidate.
pub async fn read_bytes(source: &ContentSource) -> Result<Vec<u8>> {
    match source {
        ContentSource::Path(path) => Ok(tokio::fs::read(path).await?),
        ContentSource::Memory(bytes) => Ok(bytes.to_vec()),
    }
}

/// Returns the pixel dimensions of an encoded image without decoding it fully.
pub fn read_image_dimensions(bytes: &[u8]) -> Result<(u32, u32)> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    Ok(reader.into_dimensions()?)
}

/// Decodes text content lossily and applies the preview cap.
#[must_use]
pub fn decode_text(bytes: &[u8]) -> String {
    truncate_text(&String::from_utf8_lossy(bytes))
}

/// Performs the read scheduled by `ticket` and builds the modal content.
pub async fn load_preview(ticket: PreviewTicket) -> Result<PreviewContent> {
    let bytes = read_bytes(ticket.file().source()).await?;

    match ticket.category() {
        PreviewCategory::Image => {
            let (width, height) = read_image_dimensions(&bytes)?;
            Ok(PreviewContent::Image {
                bytes,
                width,
                height,
            })
        }
        PreviewCategory::Text => Ok(PreviewContent::Text(decode_text(&bytes))),
        PreviewCategory::Document | PreviewCategory::Unsupported => Err(Error::Preview(format!(
            "no content preview for {}",
            ticket.file().name()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::{CandidateFile, EntryId, FileEntry};
    use crate::intake::preview::{PreviewDispatcher, TRUNCATION_MARKER};
    use image_rs::{ImageFormat, RgbImage};
    use tempfile::tempdir;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        RgbImage::new(width, height)
            .write_to(&mut out, ImageFormat::Png)
            .expect("failed to encode png");
        out.into_inner()
    }

    fn ticket_for(file: CandidateFile) -> PreviewTicket {
        let mut dispatcher = PreviewDispatcher::new();
        dispatcher
            .request(&FileEntry::new(EntryId::new(0), file))
            .expect("category needs a read")
    }

    #[tokio::test]
    async fn reads_text_from_disk() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("notes.txt");
        tokio::fs::write(&path, "line one\nline two")
            .await
            .expect("failed to write file");

        let content = read_bytes(&ContentSource::Path(path))
            .await
            .expect("read should succeed");
        assert_eq!(content, b"line one\nline two");
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = read_bytes(&ContentSource::Path(dir.path().join("gone.txt"))).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn text_preview_is_truncated() {
        let file = CandidateFile::from_bytes("long.txt", "text/plain", "a".repeat(1500).into_bytes(), 0);
        let content = load_preview(ticket_for(file)).await.expect("preview should load");
        match content {
            PreviewContent::Text(text) => assert!(text.ends_with(TRUNCATION_MARKER)),
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[tokio::test]
    async fn invalid_utf8_is_replaced() {
        let file = CandidateFile::from_bytes("bin.txt", "text/plain", vec![b'o', b'k', 0xff], 0);
        let content = load_preview(ticket_for(file)).await.expect("preview should load");
        assert_eq!(content, PreviewContent::Text("ok\u{fffd}".into()));
    }

    #[tokio::test]
    async fn image_preview_reports_dimensions() {
        let file = CandidateFile::from_bytes("pixel.png", "image/png", png_bytes(3, 2), 0);
        let content = load_preview(ticket_for(file)).await.expect("preview should load");
        assert!(matches!(
            content,
            PreviewContent::Image {
                width: 3,
                height: 2,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn corrupt_image_fails() {
        let file = CandidateFile::from_bytes("broken.png", "image/png", b"not an image".to_vec(), 0);
        assert!(load_preview(ticket_for(file)).await.is_err());
    }
}
