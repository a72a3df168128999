//! Asset catalog: maps logical mesh names to model files on disk.
//!
//! The catalog is built once per run from a snapshot of the asset directory
//! and is read-only afterwards. Lookups use the extension-less basename, so a
//! metadata row naming `silo.obj` resolves to whichever `silo.*` file was
//! exported into the directory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use skyline_domain::common::file_stem;
use skyline_domain::DomainError;
use thiserror::Error;
use tokio::fs;

/// Fatal asset directory problems.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Asset directory not found or unreadable: {path}: {reason}")]
    DirectoryNotFound { path: PathBuf, reason: String },
    #[error("Unsupported asset file {asset_file}: {source}")]
    UnsupportedAssetType {
        asset_file: String,
        #[source]
        source: DomainError,
    },
    #[error("Asset file {asset_file} does not yield a valid node name: {source}")]
    InvalidAssetName {
        asset_file: String,
        #[source]
        source: DomainError,
    },
}

impl CatalogError {
    /// Classify a failure to turn `asset_file` into a scene node.
    pub fn for_asset(asset_file: &str, source: DomainError) -> Self {
        let asset_file = asset_file.to_string();
        match source {
            DomainError::UnsupportedAssetType { .. } => {
                Self::UnsupportedAssetType { asset_file, source }
            }
            _ => Self::InvalidAssetName { asset_file, source },
        }
    }

    fn directory_not_found(path: &Path, reason: impl ToString) -> Self {
        Self::DirectoryNotFound {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

/// Immutable basename -> filename mapping for one asset directory.
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    directory: PathBuf,
    entries: HashMap<String, String>,
}

impl AssetCatalog {
    /// Scan the regular files directly inside `directory` (non-recursive).
    ///
    /// No sorting is applied: if two files share a basename, the one listed
    /// later by the file system wins and a warning is logged.
    pub async fn scan(directory: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let directory = directory.into();

        let mut listing = fs::read_dir(&directory)
            .await
            .map_err(|e| CatalogError::directory_not_found(&directory, e))?;

        let mut filenames = Vec::new();
        while let Some(entry) = listing
            .next_entry()
            .await
            .map_err(|e| CatalogError::directory_not_found(&directory, e))?
        {
            let path = entry.path();
            // Follows symlinks so linked model files are catalogued too.
            match fs::metadata(&path).await {
                Ok(meta) if meta.is_file() => {}
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable asset entry");
                    continue;
                }
            }
            match entry.file_name().into_string() {
                Ok(name) => filenames.push(name),
                Err(name) => {
                    tracing::warn!(file = ?name, "Skipping asset with non UTF-8 filename");
                }
            }
        }

        let catalog = Self::from_filenames(directory, filenames);
        tracing::info!(
            directory = %catalog.directory.display(),
            assets = catalog.len(),
            "Scanned asset directory"
        );
        Ok(catalog)
    }

    /// Build a catalog from filenames in listing order.
    pub fn from_filenames(
        directory: impl Into<PathBuf>,
        filenames: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let mut entries = HashMap::new();
        for filename in filenames {
            let filename = filename.into();
            let stem = file_stem(&filename).to_string();
            if let Some(previous) = entries.insert(stem.clone(), filename.clone()) {
                tracing::warn!(
                    basename = %stem,
                    replaced = %previous,
                    kept = %filename,
                    "Duplicate asset basename, keeping the later file"
                );
            }
        }
        Self {
            directory: directory.into(),
            entries,
        }
    }

    /// Find the file for a mesh name, ignoring its directories and extension.
    ///
    /// Matching is case-sensitive.
    pub fn resolve(&self, mesh_name: &str) -> Option<&str> {
        self.entries.get(file_stem(mesh_name)).map(String::as_str)
    }

    /// Full local path of a catalogued file.
    pub fn asset_path(&self, asset_file: &str) -> PathBuf {
        self.directory.join(asset_file)
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
