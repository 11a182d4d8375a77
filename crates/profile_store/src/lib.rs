//! profile_store: persistence for user profiles.
//!
//! The engine and renderer are pure; whatever owns the UI flow holds one
//! `ProfileStore` and passes data through. Two backends: an in-memory
//! slot for tests/embedding and a JSON file for real installs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use hero_core::QuizAnswers;
use hero_data::CharacterCustomization;
use serde::{Deserialize, Serialize};

/// Everything worth keeping between sessions for one user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredProfile {
    #[serde(default)]
    pub answers: QuizAnswers,
    /// Resolved archetype token, once the quiz has been scored.
    #[serde(default)]
    pub archetype: Option<String>,
    #[serde(default)]
    pub customization: CharacterCustomization,
    /// Custom display name chosen at save time.
    #[serde(default)]
    pub hero_name: Option<String>,
}

pub trait ProfileStore {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<StoredProfile>>;
    fn save(&mut self, profile: &StoredProfile) -> Result<()>;
    /// Explicit reset; the only way a stored profile goes away.
    fn reset(&mut self) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Option<StoredProfile>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryStore {
    fn load(&self) -> Result<Option<StoredProfile>> {
        Ok(self.slot.clone())
    }

    fn save(&mut self, profile: &StoredProfile) -> Result<()> {
        self.slot = Some(profile.clone());
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        self.slot = None;
        Ok(())
    }
}

/// Pretty-printed JSON at a caller-chosen path. Parent directories are
/// created on first save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl ProfileStore for JsonFileStore {
    fn load(&self) -> Result<Option<StoredProfile>> {
        if !self.path.is_file() {
            return Ok(None);
        }
        let txt = std::fs::read_to_string(&self.path)
            .with_context(|| format!("read profile: {}", self.path.display()))?;
        let profile: StoredProfile =
            serde_json::from_str(&txt).context("parse profile json")?;
        Ok(Some(profile))
    }

    fn save(&mut self, profile: &StoredProfile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create profile dir: {}", parent.display()))?;
        }
        let txt = serde_json::to_string_pretty(profile).context("serialize profile")?;
        std::fs::write(&self.path, txt)
            .with_context(|| format!("write profile: {}", self.path.display()))?;
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        if self.path.is_file() {
            std::fs::remove_file(&self.path)
                .with_context(|| format!("remove profile: {}", self.path.display()))?;
        }
        Ok(())
    }
}
