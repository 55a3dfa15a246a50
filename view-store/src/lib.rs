//! JSON-file implementation of the view-state store.
//!
//! Each view key becomes one pretty-printed JSON file under a state
//! directory, the desktop counterpart of the browser's key/value
//! storage. Read and write failures are logged and swallowed: losing a
//! saved view degrades the experience, it must never take the
//! dashboard down.

use anyhow::Context;
use anyhow::Result;
use pulse_core::ViewStateStore;
use pulse_protocol::PersistedView;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;
use tracing::warn;

/// File-backed [`ViewStateStore`].
pub struct JsonViewStore {
    dir: PathBuf,
}

impl JsonViewStore {
    /// Store rooted at `dir`. The directory is created lazily on the
    /// first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory the snapshot files live under.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn view_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn read(&self, key: &str) -> Result<Option<PersistedView>> {
        let path = self.view_path(key);
        let contents = match fs::read(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("read view state from {}", path.display()));
            }
        };
        let view = serde_json::from_slice(&contents)
            .with_context(|| format!("parse view state in {}", path.display()))?;
        Ok(Some(view))
    }

    fn write(&self, key: &str, view: &PersistedView) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("create state dir {}", self.dir.display()))?;
        let path = self.view_path(key);
        let contents = serde_json::to_vec_pretty(view).context("encode view state")?;
        fs::write(&path, contents)
            .with_context(|| format!("write view state to {}", path.display()))
    }
}

impl ViewStateStore for JsonViewStore {
    fn load(&self, key: &str) -> Option<PersistedView> {
        match self.read(key) {
            Ok(view) => view,
            Err(err) => {
                warn!(key, "failed to load saved view state: {err:#}");
                None
            }
        }
    }

    fn save(&self, key: &str, view: &PersistedView) {
        if let Err(err) = self.write(key, view) {
            warn!(key, "failed to save view state: {err:#}");
        }
    }
}
