//! Asset loading with embedded fallbacks
//!
//! Templates, fonts and the default config are compiled into the binary. Each
//! can be overridden from the filesystem:
//!
//! - If an env var is NOT set: use embedded assets only (no filesystem access)
//! - If an env var IS set and the file exists there: use the filesystem copy
//! - If an env var IS set but the file is missing: fall back to embedded

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Embedded templates (printable sheet SVG)
#[derive(RustEmbed)]
#[folder = "assets/templates/"]
#[include = "*.svg"]
struct EmbeddedTemplates;

/// Embedded fonts for the rasterized preview
#[derive(RustEmbed)]
#[folder = "assets/fonts/"]
#[include = "*.ttf"]
#[include = "*.otf"]
struct EmbeddedFonts;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// Asset category for selective operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Templates,
    Fonts,
    Config,
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Asset loader with optional filesystem override
pub struct AssetLoader {
    /// External templates directory (from TEMPLATES_DIR env var)
    templates_dir: Option<PathBuf>,
    /// External fonts directory (from FONTS_DIR env var)
    fonts_dir: Option<PathBuf>,
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// Paths should be `Some` only if the corresponding env var was set.
    /// If `None`, embedded assets are used exclusively.
    pub fn new(
        templates_dir: Option<PathBuf>,
        fonts_dir: Option<PathBuf>,
        config_file: Option<PathBuf>,
    ) -> Self {
        Self {
            templates_dir,
            fonts_dir,
            config_file,
        }
    }

    /// Create a loader from the TEMPLATES_DIR, FONTS_DIR and CONFIG_FILE env vars
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("TEMPLATES_DIR").ok().map(PathBuf::from),
            std::env::var("FONTS_DIR").ok().map(PathBuf::from),
            std::env::var("CONFIG_FILE").ok().map(PathBuf::from),
        )
    }

    /// The configured templates directory, if any
    pub fn templates_dir(&self) -> Option<&PathBuf> {
        self.templates_dir.as_ref()
    }

    /// The configured fonts directory, if any
    pub fn fonts_dir(&self) -> Option<&PathBuf> {
        self.fonts_dir.as_ref()
    }

    /// The configured config file, if any
    pub fn config_file(&self) -> Option<&PathBuf> {
        self.config_file.as_ref()
    }

    /// Read a template by file name
    ///
    /// Tries the external directory first when configured, then the embedded copy.
    pub fn read_template(&self, name: &str) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref dir) = self.templates_dir {
            let full_path = dir.join(name);
            if full_path.exists() {
                tracing::trace!(path = %full_path.display(), "Loading template from filesystem");
                return Ok(Cow::Owned(fs::read(&full_path)?));
            }
        }

        EmbeddedTemplates::get(name)
            .map(|f| {
                tracing::trace!(template = %name, "Loading template from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Template not found: {name}"),
                )
            })
    }

    /// Read a template as a UTF-8 string
    pub fn read_template_string(&self, name: &str) -> io::Result<String> {
        let bytes = self.read_template(name)?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// List all available templates (merged view of embedded + external)
    pub fn list_templates(&self) -> Vec<String> {
        let mut files: BTreeSet<String> =
            EmbeddedTemplates::iter().map(|s| s.to_string()).collect();

        if let Some(ref dir) = self.templates_dir {
            if let Ok(entries) = fs::read_dir(dir) {
                for entry in entries.flatten() {
                    if let Some(name) = entry.file_name().to_str() {
                        if name.ends_with(".svg") {
                            files.insert(name.to_string());
                        }
                    }
                }
            }
        }

        files.into_iter().collect()
    }

    /// Get all font data (for loading into fontdb)
    ///
    /// External fonts override embedded fonts with the same file name.
    pub fn get_fonts(&self) -> Vec<(String, Cow<'static, [u8]>)> {
        let mut fonts = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        if let Some(ref dir) = self.fonts_dir {
            if let Ok(entries) = fs::read_dir(dir) {
                for entry in entries.flatten() {
                    let path = entry.path();
                    let is_font = path
                        .extension()
                        .is_some_and(|ext| matches!(ext.to_str(), Some("ttf" | "otf")));
                    if !is_font {
                        continue;
                    }
                    if let Ok(data) = fs::read(&path) {
                        let name = entry.file_name().to_string_lossy().to_string();
                        tracing::trace!(font = %name, "Loading font from filesystem");
                        seen.insert(name.clone());
                        fonts.push((name, Cow::Owned(data)));
                    }
                }
            }
        }

        for file in EmbeddedFonts::iter() {
            let name = file.to_string();
            if seen.contains(&name) {
                continue;
            }
            if let Some(data) = EmbeddedFonts::get(&name) {
                tracing::trace!(font = %name, "Loading font from embedded assets");
                fonts.push((name, data.data));
            }
        }

        fonts
    }

    /// Read the config file
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to embedded config.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading config from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
        }

        EmbeddedConfig::get("config.yaml")
            .map(|f| {
                tracing::trace!("Loading config from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found")
            })
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Extract embedded assets to filesystem (init command)
    ///
    /// Uses the configured paths (or `./templates`, `./fonts` and `./config.yaml`).
    pub fn init(&self, categories: &[AssetCategory], force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        for category in categories {
            match category {
                AssetCategory::Templates => {
                    let dir = self
                        .templates_dir
                        .clone()
                        .unwrap_or_else(|| PathBuf::from("./templates"));
                    fs::create_dir_all(&dir)?;

                    for file in EmbeddedTemplates::iter() {
                        let path = dir.join(file.as_ref());
                        if !force && path.exists() {
                            report.skipped.push(path.display().to_string());
                            continue;
                        }
                        if let Some(data) = EmbeddedTemplates::get(&file) {
                            fs::write(&path, &*data.data)?;
                            report.written.push(path.display().to_string());
                        }
                    }
                }
                AssetCategory::Fonts => {
                    let dir = self
                        .fonts_dir
                        .clone()
                        .unwrap_or_else(|| PathBuf::from("./fonts"));
                    fs::create_dir_all(&dir)?;

                    for file in EmbeddedFonts::iter() {
                        let path = dir.join(file.as_ref());
                        if !force && path.exists() {
                            report.skipped.push(path.display().to_string());
                            continue;
                        }
                        if let Some(data) = EmbeddedFonts::get(&file) {
                            fs::write(&path, &*data.data)?;
                            report.written.push(path.display().to_string());
                        }
                    }
                }
                AssetCategory::Config => {
                    let path = self
                        .config_file
                        .clone()
                        .unwrap_or_else(|| PathBuf::from("./config.yaml"));

                    if !force && path.exists() {
                        report.skipped.push(path.display().to_string());
                        continue;
                    }
                    if let Some(parent) = path.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    if let Some(data) = EmbeddedConfig::get("config.yaml") {
                        fs::write(&path, &*data.data)?;
                        report.written.push(path.display().to_string());
                    }
                }
            }
        }

        Ok(report)
    }

    /// List embedded assets by category (for display)
    pub fn list_embedded(category: AssetCategory) -> Vec<String> {
        match category {
            AssetCategory::Templates => EmbeddedTemplates::iter().map(|s| s.to_string()).collect(),
            AssetCategory::Fonts => EmbeddedFonts::iter().map(|s| s.to_string()).collect(),
            AssetCategory::Config => vec!["config.yaml".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_sheet_template() {
        let loader = AssetLoader::new(None, None, None);
        let svg = loader.read_template_string("sheet.svg").unwrap();
        assert!(svg.contains("<svg"));
        assert_eq!(
            loader.list_templates(),
            vec!["preview.svg".to_string(), "sheet.svg".to_string()]
        );
    }

    #[test]
    fn test_missing_template_is_not_found() {
        let loader = AssetLoader::new(None, None, None);
        let err = loader.read_template("nope.svg").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_external_template_takes_priority() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("sheet.svg"), "<svg>custom</svg>").unwrap();
        fs::write(dir.path().join("poster.svg"), "<svg/>").unwrap();

        let loader = AssetLoader::new(Some(dir.path().to_path_buf()), None, None);
        assert_eq!(
            loader.read_template_string("sheet.svg").unwrap(),
            "<svg>custom</svg>"
        );
        assert_eq!(
            loader.list_templates(),
            vec![
                "poster.svg".to_string(),
                "preview.svg".to_string(),
                "sheet.svg".to_string()
            ]
        );
    }

    #[test]
    fn test_init_writes_and_skips() {
        let dir = tempfile::tempdir().unwrap();
        let templates = dir.path().join("templates");
        let fonts = dir.path().join("fonts");
        let config = dir.path().join("conf/config.yaml");
        let loader = AssetLoader::new(
            Some(templates.clone()),
            Some(fonts.clone()),
            Some(config.clone()),
        );

        let categories = [
            AssetCategory::Templates,
            AssetCategory::Fonts,
            AssetCategory::Config,
        ];
        let report = loader.init(&categories, false).unwrap();
        assert_eq!(report.written.len(), 4);
        assert!(report.skipped.is_empty());
        assert!(templates.join("sheet.svg").exists());
        assert!(templates.join("preview.svg").exists());
        assert!(fonts.join("DejaVuSans-Bold.ttf").exists());
        assert!(config.exists());

        let report = loader.init(&categories, false).unwrap();
        assert!(report.written.is_empty());
        assert_eq!(report.skipped.len(), 4);

        let report = loader.init(&categories, true).unwrap();
        assert_eq!(report.written.len(), 4);
    }

    #[test]
    fn test_embedded_fonts() {
        let loader = AssetLoader::new(None, None, None);
        let fonts = loader.get_fonts();
        let names: Vec<&str> = fonts.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["DejaVuSans-Bold.ttf"]);
        assert!(!fonts[0].1.is_empty());
    }

    #[test]
    fn test_external_font_overrides_embedded() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("DejaVuSans-Bold.ttf"), b"custom").unwrap();
        fs::write(dir.path().join("notes.txt"), b"ignored").unwrap();

        let loader = AssetLoader::new(None, Some(dir.path().to_path_buf()), None);
        let fonts = loader.get_fonts();
        assert_eq!(fonts.len(), 1);
        assert_eq!(&*fonts[0].1, b"custom");
    }
}
