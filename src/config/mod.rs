mod file_config;

pub use file_config::{DraftConfig, FileConfig};

use crate::listing::{DraftDefaults, ListingStatus};
use anyhow::{anyhow, bail, Context, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Turns a path given on the command line into an absolute one.
///
/// Existing paths are canonicalized. A path that does not exist yet is kept
/// as typed, anchored at the working directory, so the later existence check
/// can name it in its error.
pub fn resolve_cli_path(arg: &str) -> Result<PathBuf> {
    let path = Path::new(arg);
    match path.canonicalize() {
        Ok(canonical) => Ok(canonical),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            if path.is_absolute() {
                Ok(path.to_path_buf())
            } else {
                let cwd = std::env::current_dir().context("Cannot read working directory")?;
                Ok(cwd.join(path))
            }
        }
        Err(err) => Err(err).with_context(|| format!("Cannot resolve path {:?}", arg)),
    }
}

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub snapshot_path: Option<PathBuf>,
    pub seller_id: Option<u64>,
    pub default_status: ListingStatus,
    pub default_price: f64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub snapshot_path: PathBuf,
    pub log_level: Option<String>,
    pub draft_defaults: DraftDefaults,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let snapshot_path = file
            .snapshot_path
            .map(PathBuf::from)
            .or_else(|| cli.snapshot_path.clone())
            .ok_or_else(|| {
                anyhow!("snapshot_path must be specified on the command line or in config file")
            })?;

        if !snapshot_path.exists() {
            bail!("Catalog snapshot does not exist: {:?}", snapshot_path);
        }
        if !snapshot_path.is_file() {
            bail!("Catalog snapshot is not a file: {:?}", snapshot_path);
        }

        let draft_file = file.draft.unwrap_or_default();
        let status = match draft_file.default_status {
            Some(s) => ListingStatus::parse(&s).map_err(|e| anyhow!("Invalid config: {}", e))?,
            None => cli.default_status,
        };
        let price = draft_file.default_price.unwrap_or(cli.default_price);
        if !price.is_finite() || price < 0.0 {
            bail!("default_price must be a non-negative number, got {}", price);
        }

        Ok(Self {
            snapshot_path,
            log_level: file.log_level,
            draft_defaults: DraftDefaults {
                seller_id: draft_file.seller_id.or(cli.seller_id),
                status,
                price,
            },
        })
    }
}
