//! RenderInput: archetype defaults merged with user overrides.
//!
//! A derived view, recomputed on demand. Callers hold the archetype
//! profile and the customization record; this type is never persisted.

use hero_data::{ArchetypeProfile, CharacterCustomization};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderInput {
    pub base: String,
    pub costume: String,
    pub accessory: String,
    /// Head decoration; `None` omits the layer entirely.
    pub head: Option<String>,
    /// Power effect; `None` omits the layer entirely.
    pub power: Option<String>,
    pub primary_color: String,
    pub accent_color: String,
    pub skin_tone: Option<String>,
    pub animal_color: Option<String>,
}

impl Default for RenderInput {
    fn default() -> Self {
        Self {
            base: "neutral".to_string(),
            costume: "classic".to_string(),
            accessory: "cape".to_string(),
            head: None,
            power: None,
            primary_color: "#32127A".to_string(),
            accent_color: "#E6C34A".to_string(),
            skin_tone: None,
            animal_color: None,
        }
    }
}

impl RenderInput {
    /// Seed every field from an archetype's defaults.
    pub fn from_profile(profile: &ArchetypeProfile) -> Self {
        Self {
            base: profile.base_type.to_string(),
            costume: profile.costume_type.to_string(),
            accessory: profile.accessory_type.to_string(),
            head: Some(profile.head_type.to_string()),
            power: Some(profile.power_type.to_string()),
            primary_color: profile.primary_color.to_string(),
            accent_color: profile.accent_color.to_string(),
            skin_tone: None,
            animal_color: None,
        }
    }

    /// Overlay user customization; unset fields keep their current value.
    pub fn apply(mut self, custom: &CharacterCustomization) -> Self {
        if let Some(v) = &custom.base {
            self.base = v.clone();
        }
        if let Some(v) = &custom.costume {
            self.costume = v.clone();
        }
        if let Some(v) = &custom.accessory {
            self.accessory = v.clone();
        }
        if let Some(v) = &custom.head {
            self.head = Some(v.clone());
        }
        if let Some(v) = &custom.power {
            self.power = Some(v.clone());
        }
        if let Some(v) = &custom.primary_color {
            self.primary_color = v.clone();
        }
        if let Some(v) = &custom.accent_color {
            self.accent_color = v.clone();
        }
        if let Some(v) = &custom.skin_tone {
            self.skin_tone = Some(v.clone());
        }
        if let Some(v) = &custom.animal_color {
            self.animal_color = Some(v.clone());
        }
        self
    }

    /// Convenience for the usual pipeline: profile defaults + overrides.
    pub fn merged(profile: &ArchetypeProfile, custom: &CharacterCustomization) -> Self {
        Self::from_profile(profile).apply(custom)
    }
}
