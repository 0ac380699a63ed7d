//! Clipboard paste handling: pasted files become image uploads.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteItem {
    Text(String),
    File(PastedFile),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PastedFile {
    pub name: Option<String>,
    pub mime_type: Option<String>,
    pub data: Vec<u8>,
}

/// Files worth uploading from a paste. Empty files are skipped.
pub fn pasted_files(items: Vec<PasteItem>) -> Vec<PastedFile> {
    items
        .into_iter()
        .filter_map(|item| match item {
            PasteItem::File(file) if !file.data.is_empty() => Some(file),
            _ => None,
        })
        .collect()
}
