//! Reading a local document for CP/TP extraction

use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Berkas tidak dapat dibaca: {0}")]
    Read(#[from] std::io::Error),

    #[error("Berkas bukan teks (UTF-8)")]
    NotText,

    #[error("Berkas kosong")]
    Empty,
}

/// Read the whole file as UTF-8 text
pub async fn read_text_file(path: &Path) -> Result<String, ImportError> {
    let bytes = tokio::fs::read(path).await?;
    let text = String::from_utf8(bytes).map_err(|_| ImportError::NotText)?;
    if text.trim().is_empty() {
        return Err(ImportError::Empty);
    }
    Ok(text)
}
