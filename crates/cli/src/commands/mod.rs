//! Command implementations.
//!
//! Each command owns its CLI args and execution logic.

mod exp;
mod matchup;
mod stats;

pub use exp::Exp;
pub use matchup::Matchup;
pub use stats::Stats;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use monster_content::{ContentFactory, OracleManager};

/// Data directory used when neither `--data-dir` nor `MONSTER_DATA_DIR` is set.
pub fn default_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../game/content/data")
}

pub(crate) fn load_content(data_dir: &Path) -> Result<OracleManager> {
    ContentFactory::new(data_dir)
        .load_all()
        .with_context(|| format!("Failed to load content from {}", data_dir.display()))
}
