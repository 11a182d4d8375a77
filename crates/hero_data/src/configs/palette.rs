//! Regeneration palette configuration (`config/palette.toml` override).

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaletteCfg {
    /// Hex colors the regenerate feature draws primary/accent pairs from.
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,
}

impl Default for PaletteCfg {
    fn default() -> Self {
        Self { colors: default_colors() }
    }
}

fn default_colors() -> Vec<String> {
    ["#32127A", "#E6C34A", "#00a86b", "#0077b6", "#d62828", "#ff9f1c"]
        .iter()
        .map(|c| (*c).to_string())
        .collect()
}

fn data_root() -> PathBuf {
    // Prefer top-level workspace `data/` so tests and tools can run from any crate.
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}

pub fn load_default() -> Result<PaletteCfg> {
    let path = data_root().join("config/palette.toml");
    if path.is_file() {
        let txt = std::fs::read_to_string(&path)
            .with_context(|| format!("read {}", path.display()))?;
        let t: PaletteToml = toml::from_str(&txt).context("parse palette TOML")?;
        Ok(t.palette)
    } else {
        Ok(PaletteCfg::default())
    }
}

#[derive(Debug, Clone, Deserialize)]
struct PaletteToml {
    #[serde(default)]
    palette: PaletteCfg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_is_nonempty_hex() {
        let cfg = PaletteCfg::default();
        assert!(cfg.colors.len() >= 2);
        assert!(cfg.colors.iter().all(|c| c.starts_with('#')));
    }

    #[test]
    fn load_default_yields_a_usable_palette() {
        // Reads data/config/palette.toml when present, built-ins otherwise.
        let cfg = load_default().expect("load");
        assert!(cfg.colors.len() >= 2);
        assert!(cfg.colors.iter().all(|c| c.starts_with('#')));
    }
}
