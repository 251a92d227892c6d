//! PDF Export Options

use serde::{Deserialize, Serialize};

/// Options for PDF export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PdfExportOptions {
    /// Document title
    pub title: Option<String>,
    /// Document author
    pub author: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Creator application
    pub creator: Option<String>,
    /// Whether to compress content streams
    pub compress: bool,
}

impl Default for PdfExportOptions {
    fn default() -> Self {
        Self {
            title: Some("Onboarding Form".to_string()),
            author: None,
            subject: None,
            creator: Some("Onboarding Export".to_string()),
            compress: true,
        }
    }
}

impl PdfExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set compression enabled/disabled
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = PdfExportOptions::default();
        assert!(options.compress);
        assert_eq!(options.title.as_deref(), Some("Onboarding Form"));
        assert!(options.author.is_none());
    }

    #[test]
    fn test_builder() {
        let options = PdfExportOptions::new()
            .with_author("Solutions Team")
            .with_subject("Acme Corp")
            .with_compression(false);
        assert_eq!(options.author.as_deref(), Some("Solutions Team"));
        assert_eq!(options.subject.as_deref(), Some("Acme Corp"));
        assert!(!options.compress);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let options: PdfExportOptions = serde_json::from_str(r#"{"author": "Ops"}"#).unwrap();
        assert_eq!(options.author.as_deref(), Some("Ops"));
        assert!(options.compress);
        assert_eq!(options.creator.as_deref(), Some("Onboarding Export"));
        assert_eq!(options.title.as_deref(), Some("Onboarding Form"));

        let bare: PdfExportOptions = serde_json::from_str(r#"{"title": null}"#).unwrap();
        assert!(bare.title.is_none());
    }
}
