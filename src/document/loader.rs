use crate::document::types::ThemeDocument;
use crate::document::validation::DocumentValidator;
use crate::error::{AppError, AppResult};
use crate::validation::Validator;
use std::path::{Path, PathBuf};
use std::{fs, path};

/// Serialization formats the loader understands, keyed by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(AppError::Config(format!(
                "Unsupported document extension '{}' for '{}' (expected .json or .toml)",
                other.unwrap_or(""),
                path.display()
            ))),
        }
    }
}

/// Document loader responsible for reading and writing theme configuration
/// documents on the filesystem.
pub struct DocumentLoader {
    search_paths: Vec<PathBuf>,
    validator: DocumentValidator,
}

impl DocumentLoader {
    pub fn new() -> Self {
        Self::with_search_paths(Self::default_search_paths())
    }

    pub fn with_search_paths(search_paths: Vec<PathBuf>) -> Self {
        Self {
            search_paths,
            validator: DocumentValidator,
        }
    }

    fn default_search_paths() -> Vec<PathBuf> {
        vec![
            PathBuf::from("theme.config.json"),
            PathBuf::from("theme.config.toml"),
            PathBuf::from("config/theme.config.json"),
            PathBuf::from("config/theme.config.toml"),
        ]
    }

    /// Find the first candidate document that exists on disk.
    pub fn find_document(&self) -> Option<PathBuf> {
        for path in &self.search_paths {
            if path.is_file() {
                log::info!("Found theme document at: {}", path.display());
                return Some(path.clone());
            }
        }

        log::warn!("No theme document found in any expected location");
        None
    }

    /// Load, parse and validate a document from `path`.
    pub fn load(&self, path: &Path) -> AppResult<ThemeDocument> {
        let format = DocumentFormat::from_path(path)?;

        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!(
                "Failed to read theme document '{}': {}",
                path.display(),
                e
            ))
        })?;

        let document: ThemeDocument = match format {
            DocumentFormat::Json => serde_json::from_str(&raw).map_err(|e| {
                AppError::Config(format!(
                    "Failed to parse theme document '{}': {}",
                    path.display(),
                    e
                ))
            })?,
            DocumentFormat::Toml => toml::from_str(&raw).map_err(|e| {
                AppError::Config(format!(
                    "Failed to parse theme document '{}': {}",
                    path.display(),
                    e
                ))
            })?,
        };

        self.validator.validate(&document)?;

        Ok(document)
    }

    /// Serialize a document in the given format.
    pub fn serialize(document: &ThemeDocument, format: DocumentFormat) -> AppResult<String> {
        match format {
            DocumentFormat::Json => serde_json::to_string_pretty(document)
                .map(|mut s| {
                    s.push('\n');
                    s
                })
                .map_err(|e| {
                    AppError::Config(format!("Failed to serialize theme document: {}", e))
                }),
            DocumentFormat::Toml => toml::to_string_pretty(document)
                .map_err(|e| AppError::Config(format!("Failed to serialize theme document: {}", e))),
        }
    }

    /// Write a document to `path`, picking the format from the extension.
    pub fn save(&self, path: &Path, document: &ThemeDocument) -> AppResult<()> {
        let format = DocumentFormat::from_path(path)?;
        let rendered = Self::serialize(document, format)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    AppError::Config(format!(
                        "Failed to create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        fs::write(path, rendered).map_err(|e| {
            AppError::Config(format!(
                "Failed to write theme document '{}': {}",
                path.display(),
                e
            ))
        })?;

        log::info!("Wrote theme document to: {}", path.display());
        Ok(())
    }

    /// Write the default document to `path`, refusing to overwrite unless
    /// `force` is set.
    pub fn init(&self, path: &Path, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "'{}' already exists (pass --force to overwrite)",
                path::absolute(path)
                    .unwrap_or_else(|_| path.to_path_buf())
                    .display()
            )));
        }

        self.save(path, &ThemeDocument::default())
    }
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_none, assert_ok, assert_ok_eq, assert_some_eq};
    use tempfile::tempdir;

    #[test]
    fn save_then_load_returns_equal_document_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme.config.json");
        let loader = DocumentLoader::new();
        let document = ThemeDocument::default();

        assert_ok!(loader.save(&path, &document));
        assert_ok_eq!(loader.load(&path), document);
    }

    #[test]
    fn save_then_load_returns_equal_document_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme.config.toml");
        let loader = DocumentLoader::new();
        let document = ThemeDocument::default();

        assert_ok!(loader.save(&path, &document));
        assert_ok_eq!(loader.load(&path), document);
    }

    #[test]
    fn load_rejects_unknown_extension() {
        let loader = DocumentLoader::new();
        let err = assert_err!(loader.load(Path::new("theme.config.yaml")));
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn load_reports_parse_failures_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme.config.json");
        fs::write(&path, "{ not json").unwrap();

        let loader = DocumentLoader::new();
        let err = assert_err!(loader.load(&path));
        assert!(err.to_string().contains("theme.config.json"));
    }

    #[test]
    fn load_rejects_semantically_invalid_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme.config.json");
        // Parses fine, but the content list is empty
        fs::write(&path, r#"{ "content": [] }"#).unwrap();

        let loader = DocumentLoader::new();
        assert_err!(loader.load(&path));
    }

    #[test]
    fn load_rejects_malformed_hex_color() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme.config.json");
        fs::write(
            &path,
            r##"{
                "content": ["./src/**/*.html"],
                "theme": { "extend": { "colors": { "brand": { "500": "#12345" } } } }
            }"##,
        )
        .unwrap();

        let loader = DocumentLoader::new();
        let err = assert_err!(loader.load(&path));
        assert!(err.to_string().contains("hex color"));
    }

    #[test]
    fn load_rejects_multibyte_hex_color() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme.config.json");
        // Six bytes, two characters - must surface as a parse error
        fs::write(
            &path,
            r##"{
                "content": ["./src/**/*.html"],
                "theme": { "extend": { "colors": { "brand": { "500": "€€" } } } }
            }"##,
        )
        .unwrap();

        let loader = DocumentLoader::new();
        let err = assert_err!(loader.load(&path));
        assert!(err.to_string().contains("hex color"));
    }

    #[test]
    fn find_document_walks_candidates_in_order() {
        let dir = tempdir().unwrap();
        let json_path = dir.path().join("theme.config.json");
        let toml_path = dir.path().join("theme.config.toml");

        let loader =
            DocumentLoader::with_search_paths(vec![json_path.clone(), toml_path.clone()]);
        assert_none!(loader.find_document());

        fs::write(&toml_path, "content = [\"./src/**/*.html\"]\n").unwrap();
        assert_some_eq!(loader.find_document(), toml_path.clone());

        fs::write(&json_path, "{}").unwrap();
        assert_some_eq!(loader.find_document(), json_path);
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme.config.json");
        let loader = DocumentLoader::new();

        assert_ok!(loader.init(&path, false));
        assert_err!(loader.init(&path, false));
        assert_ok!(loader.init(&path, true));
    }
}
