/// Placeholder content shown before any file is opened.
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Untitled</title>
</head>
<body>
    <h1>Hello World</h1>
    <p>Start editing this file...</p>
</body>
</html>"#;

pub const DEFAULT_FILE_NAME: &str = "untitled.html";

/// MIME type every save artifact is declared as. The buffer is written
/// verbatim regardless of whether it is actually HTML.
pub const SAVE_MIME_TYPE: &str = "text/html";

/// What a save produces: the current file name and buffer, untransformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveArtifact {
    pub file_name: String,
    pub content: String,
    pub mime_type: &'static str,
}

/// The single in-memory document: text buffer plus display file name.
///
/// There is no dirty flag. Saving always serializes the current buffer, so
/// nothing needs marking clean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    buffer: String,
    file_name: String,
}

impl Document {
    /// A fresh session document: built-in template, untitled name.
    pub fn untitled() -> Self {
        Self {
            buffer: DEFAULT_TEMPLATE.to_string(),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Replace name and buffer together, as from an opened file.
    /// Content is taken as-is; an empty file yields an empty buffer.
    pub fn load(&mut self, name: String, content: String) {
        self.file_name = name;
        self.buffer = content;
    }

    /// One user-visible change from the editor surface. Name untouched.
    pub fn edit(&mut self, new_buffer: String) {
        self.buffer = new_buffer;
    }

    /// User edited the displayed file name. Buffer untouched.
    pub fn rename(&mut self, new_name: String) {
        self.file_name = new_name;
    }

    /// Snapshot for the save path. Pure; document state is unaffected.
    pub fn serialize_for_save(&self) -> SaveArtifact {
        SaveArtifact {
            file_name: self.file_name.clone(),
            content: self.buffer.clone(),
            mime_type: SAVE_MIME_TYPE,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::untitled()
    }
}
