use std::fs;

use fltk::dialog;

use crate::app::contracts::{FileAccess, PickedFile};
use crate::app::domain::SaveArtifact;
use crate::app::error::{AppError, Result};
use crate::app::file_filters::{html_open_filter, save_filter};
use crate::app::text_ops::extract_filename;

/// Read a file as UTF-8 text. Content that does not decode is a
/// [`AppError::Decode`], named after the file for the alert.
pub fn read_text_file(path: &str) -> Result<String> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| AppError::Decode(extract_filename(path)))
}

/// Write the content verbatim: no line-ending normalization, no encoding
/// re-validation.
pub fn write_text_file(path: &str, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

/// File capability backed by FLTK's native choosers. The chooser retains no
/// selection between calls, so the same path can be picked repeatedly.
pub struct FltkFileAccess;

impl FileAccess for FltkFileAccess {
    fn pick_and_read(&mut self) -> Result<Option<PickedFile>> {
        let Some(path) = dialog::file_chooser("Open File", &html_open_filter(), ".", false) else {
            return Ok(None);
        };
        let content = read_text_file(&path)?;
        Ok(Some(PickedFile {
            name: extract_filename(&path),
            content,
        }))
    }

    fn offer_download(&mut self, artifact: &SaveArtifact) -> Result<()> {
        // The artifact's file name seeds the chooser as the suggested name.
        // Its MIME type has no native-dialog channel; the bytes speak for
        // themselves.
        let Some(path) =
            dialog::file_chooser("Save As", &save_filter(), &artifact.file_name, false)
        else {
            return Ok(()); // cancel is a no-op, not an error
        };
        write_text_file(&path, &artifact.content)
    }
}
