//! Command-line snapshot input, merged with configured defaults.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::AppConfig;
use crate::domain::{Snapshot, SnapshotError, Variant};

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Where the snapshot comes from and which layout to render it with.
#[derive(Debug, Clone, Default, Args)]
pub struct RenderInput {
    /// Widget layout
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// Snapshot JSON file, or '-' for stdin
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,

    /// Override a snapshot entry (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,
}

impl RenderInput {
    /// Resolve the snapshot and variant, falling back to `config` for
    /// anything not given on the command line. `stdin` is only read when
    /// the snapshot path is `-`.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or parsed, or an
    /// override is malformed.
    pub fn resolve<R: Read>(
        &self,
        config: &AppConfig,
        stdin: R,
    ) -> Result<(Snapshot, Variant), SnapshotError> {
        let variant = self.variant.unwrap_or(config.variant);
        let snapshot = match self.snapshot.as_deref().or(config.snapshot.as_deref()) {
            Some(path) => load_snapshot(path, stdin)?,
            None => {
                tracing::info!("No snapshot given, rendering defaults");
                Snapshot::new()
            }
        };
        let snapshot = snapshot.with_overrides(&self.overrides)?;
        tracing::info!("Rendering {variant} widget from {} entries", snapshot.len());
        Ok((snapshot, variant))
    }
}

/// Load a snapshot from `path`, or from `stdin` when `path` is `-`.
///
/// # Errors
///
/// Returns an error if the source cannot be read or is not a JSON object.
pub fn load_snapshot<R: Read>(path: &Path, mut stdin: R) -> Result<Snapshot, SnapshotError> {
    if path == Path::new(STDIN_PATH) {
        let mut content = String::new();
        stdin
            .read_to_string(&mut content)
            .map_err(|e| SnapshotError::io(STDIN_PATH, e))?;
        return Snapshot::from_json_str(&content);
    }
    Snapshot::from_json_file(path)
}

// ============================================================================
// Tests
// ============================================================================
