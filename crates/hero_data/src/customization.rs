//! User-chosen appearance overrides.

use serde::{Deserialize, Serialize};

/// Overrides a user has picked in the customizer. Every field is optional;
/// `None` means "use the archetype default". Persisted as part of the
/// stored profile and cleared only by an explicit [`reset`](Self::reset).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterCustomization {
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub costume: Option<String>,
    #[serde(default)]
    pub accessory: Option<String>,
    #[serde(default)]
    pub head: Option<String>,
    #[serde(default)]
    pub power: Option<String>,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub accent_color: Option<String>,
    /// Named skin tone or raw hex for non-animal bases.
    #[serde(default)]
    pub skin_tone: Option<String>,
    /// Named coat color or raw hex for animal bases.
    #[serde(default)]
    pub animal_color: Option<String>,
    /// Custom display name for the finished character.
    #[serde(default)]
    pub name: Option<String>,
}

impl CharacterCustomization {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_round_trips_as_empty_object() {
        let c = CharacterCustomization::default();
        assert!(c.is_empty());
        let json = serde_json::to_string(&c).expect("serialize");
        let back: CharacterCustomization = serde_json::from_str(&json).expect("parse");
        assert_eq!(back, c);
    }

    #[test]
    fn reset_clears_overrides() {
        let mut c = CharacterCustomization {
            base: Some("robot".into()),
            name: Some("Ledger".into()),
            ..CharacterCustomization::default()
        };
        assert!(!c.is_empty());
        c.reset();
        assert!(c.is_empty());
    }
}
