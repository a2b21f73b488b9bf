use std::collections::HashMap;
use std::path::Path;

use axum::extract::Multipart;
use bytes::Bytes;
use chrono::Utc;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::config::ALLOWED_UPLOAD_EXTENSIONS;
use crate::error::{AppError, AppResult};
use crate::utils::random::generate_hex_token;

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub data: Bytes,
}

/// Text fields and file parts of a multipart form, keyed by field name.
#[derive(Debug, Default)]
pub struct FormData {
    pub fields: HashMap<String, String>,
    pub files: HashMap<String, UploadedFile>,
}

impl FormData {
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn required(&self, name: &str) -> AppResult<String> {
        self.fields
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::invalid_input(format!("{name} is required")))
    }

    pub fn parse<T: std::str::FromStr>(&self, name: &str) -> AppResult<Option<T>> {
        match self.text(name) {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse::<T>()
                .map(Some)
                .map_err(|_| AppError::invalid_input(format!("Invalid {name}: {raw}"))),
        }
    }

    pub fn parse_required<T: std::str::FromStr>(&self, name: &str) -> AppResult<T> {
        self.parse(name)?
            .ok_or_else(|| AppError::invalid_input(format!("{name} is required")))
    }

    /// Parses a string-valued enum through its serde representation.
    pub fn parse_enum<T: serde::de::DeserializeOwned>(&self, name: &str) -> AppResult<Option<T>> {
        match self.text(name) {
            None => Ok(None),
            Some(raw) => serde_json::from_value(serde_json::Value::String(raw.trim().to_string()))
                .map(Some)
                .map_err(|_| AppError::invalid_input(format!("Invalid {name}: {raw}"))),
        }
    }

    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }
}

pub async fn read_multipart(mut multipart: Multipart) -> AppResult<FormData> {
    let mut form = FormData::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::invalid_input(format!("Failed to read multipart field: {e}")))?
    {
        let field_name = field.name().unwrap_or_default().to_string();

        match field.file_name().map(str::to_string) {
            Some(file_name) => {
                let data = field.bytes().await.map_err(|e| {
                    AppError::invalid_input(format!("Failed to read {field_name}: {e}"))
                })?;
                // Browsers send an empty part when no file was chosen.
                if !file_name.is_empty() && !data.is_empty() {
                    form.files.insert(field_name, UploadedFile { file_name, data });
                }
            }
            None => {
                let value = field.text().await.map_err(|e| {
                    AppError::invalid_input(format!("Failed to read {field_name}: {e}"))
                })?;
                form.fields.insert(field_name, value);
            }
        }
    }

    Ok(form)
}

/// Lowercased extension of `file_name` when it is on the upload allow-list.
pub fn allowed_extension(file_name: &str) -> AppResult<String> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if ALLOWED_UPLOAD_EXTENSIONS.contains(&extension.as_str()) {
        Ok(extension)
    } else {
        Err(AppError::invalid_input(format!(
            "File type not allowed. Allowed: {}",
            ALLOWED_UPLOAD_EXTENSIONS.join(", ")
        )))
    }
}

pub fn stored_file_name(extension: &str) -> String {
    let timestamp = Utc::now().format("%Y%m%d%H%M%S");
    format!("{}_{}.{}", timestamp, generate_hex_token(16), extension)
}

/// Names served from the upload directory must be a single path component.
pub fn is_safe_file_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('/') && !name.contains('\\') && !name.contains("..")
}

/// Writes the file under `upload_dir` and returns the stored name.
pub async fn save_upload(upload_dir: &str, file: &UploadedFile) -> AppResult<String> {
    let extension = allowed_extension(&file.file_name)?;
    let stored_name = stored_file_name(&extension);

    fs::create_dir_all(upload_dir)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create upload directory: {e}"))?;

    let path = Path::new(upload_dir).join(&stored_name);
    let mut output = fs::File::create(&path)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", path.display()))?;
    output
        .write_all(&file.data)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to write upload: {e}"))?;
    output
        .flush()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to flush upload: {e}"))?;

    tracing::info!(original = %file.file_name, stored = %stored_name, "file uploaded");
    Ok(stored_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_check_is_case_insensitive() {
        assert_eq!(allowed_extension("Report.PDF").unwrap(), "pdf");
        assert_eq!(allowed_extension("photo.JpEg").unwrap(), "jpeg");
    }

    #[test]
    fn disallowed_or_missing_extension_is_rejected() {
        assert!(allowed_extension("script.sh").is_err());
        assert!(allowed_extension("no_extension").is_err());
        assert!(allowed_extension("archive.tar.gz").is_err());
    }

    #[test]
    fn stored_name_has_timestamp_and_hex_suffix() {
        let name = stored_file_name("png");
        let (stem, ext) = name.rsplit_once('.').unwrap();
        assert_eq!(ext, "png");
        let (timestamp, token) = stem.split_once('_').unwrap();
        assert_eq!(timestamp.len(), 14);
        assert!(timestamp.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(token.len(), 32);
    }

    #[test]
    fn path_like_names_are_unsafe() {
        assert!(is_safe_file_name("20250101120000_abc.pdf"));
        assert!(!is_safe_file_name("../secret"));
        assert!(!is_safe_file_name("dir/file.pdf"));
        assert!(!is_safe_file_name("dir\\file.pdf"));
        assert!(!is_safe_file_name(""));
    }

    #[tokio::test]
    async fn save_upload_writes_file() {
        let dir = std::env::temp_dir().join(format!("dept_upload_{}", generate_hex_token(4)));
        let dir = dir.to_string_lossy().to_string();
        let file = UploadedFile {
            file_name: "notes.TXT".to_string(),
            data: Bytes::from_static(b"hello"),
        };

        let stored = save_upload(&dir, &file).await.unwrap();
        assert!(stored.ends_with(".txt"));
        let contents = fs::read(Path::new(&dir).join(&stored)).await.unwrap();
        assert_eq!(contents, b"hello");

        fs::remove_dir_all(&dir).await.unwrap();
    }
}
