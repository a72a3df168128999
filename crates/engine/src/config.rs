//! Command-line and environment configuration.
//!
//! Arguments may fall back to environment variables, which are themselves
//! seeded from `.env.local` / `.env` in the working directory.

use std::path::PathBuf;

use clap::{Args, Parser};
use skyline_domain::{SceneId, WorkspaceId};
use thiserror::Error;

use crate::infrastructure::importers::MetadataFormat;
use crate::use_cases::scene::{ImportRequest, DEFAULT_ENVIRONMENT_PRESET};

const ENV_HELP: &str = "\
Environment:
  SKYLINE_STORE_DIR            Root of the scene and asset store (default: .skyline)
  SKYLINE_ENVIRONMENT_PRESET   Scene environment preset (default: neutral)
  RUST_LOG                     Log filter, e.g. skyline_engine=debug

Example:
  skyline-import --workspace-id CookieFactory --scene-id Skyline \\
      --asset-dir ./converted --building-json ./buildings.json";

/// Build a city skyline scene from building placement metadata.
#[derive(Debug, Parser)]
#[command(name = "skyline-import", version, about, after_help = ENV_HELP)]
pub struct Cli {
    /// Workspace that owns the scene
    #[arg(long, value_name = "ID")]
    pub workspace_id: WorkspaceId,

    /// Scene to create or overwrite
    #[arg(long, value_name = "ID")]
    pub scene_id: SceneId,

    /// Directory holding the converted model files (read non-recursively)
    #[arg(long, value_name = "DIR")]
    pub asset_dir: PathBuf,

    #[command(flatten)]
    pub metadata: MetadataSource,

    /// Environment preset stored with the scene
    #[arg(
        long,
        env = "SKYLINE_ENVIRONMENT_PRESET",
        default_value = DEFAULT_ENVIRONMENT_PRESET
    )]
    pub environment_preset: String,

    /// Root directory of the scene and asset store
    #[arg(long, env = "SKYLINE_STORE_DIR", default_value = ".skyline")]
    pub store_dir: PathBuf,
}

/// Exactly one building metadata file.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct MetadataSource {
    /// Tabular placement file (7 positional columns, first row is a header)
    #[arg(long, value_name = "PATH")]
    pub building_csv: Option<PathBuf>,

    /// JSON placement file (array of building objects)
    #[arg(long, value_name = "PATH")]
    pub building_json: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Exactly one of --building-csv or --building-json is required")]
    MetadataSource,
    #[error("Environment preset cannot be empty")]
    EmptyPreset,
}

impl MetadataSource {
    /// Pick the single metadata file and its format.
    ///
    /// The clap group already enforces this for parsed arguments; the check
    /// here covers a `Cli` assembled in code.
    pub fn resolve(&self) -> Result<(PathBuf, MetadataFormat), ConfigError> {
        match (&self.building_csv, &self.building_json) {
            (Some(path), None) => Ok((path.clone(), MetadataFormat::Csv)),
            (None, Some(path)) => Ok((path.clone(), MetadataFormat::Json)),
            _ => Err(ConfigError::MetadataSource),
        }
    }
}

impl Cli {
    pub fn to_request(&self) -> Result<ImportRequest, ConfigError> {
        let (metadata_path, metadata_format) = self.metadata.resolve()?;
        let environment_preset = self.environment_preset.trim();
        if environment_preset.is_empty() {
            return Err(ConfigError::EmptyPreset);
        }
        Ok(ImportRequest {
            workspace_id: self.workspace_id.clone(),
            scene_id: self.scene_id.clone(),
            asset_dir: self.asset_dir.clone(),
            metadata_path,
            metadata_format,
            environment_preset: environment_preset.to_string(),
        })
    }
}

/// Load `.env.local` then `.env` from the working directory, if present.
///
/// Variables already set in the process environment win.
pub fn load_dotenv() {
    for filename in [".env.local", ".env"] {
        let _ = dotenvy::from_filename(filename);
    }
}
