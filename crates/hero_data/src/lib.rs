//! hero_data: reference data for the archetype engine.
//!
//! Holds the static archetype profile table (display and narrative
//! attributes per archetype key), the user customization record, random
//! look generation for the "regenerate" feature, and the palette config.

pub mod configs {
    pub mod palette;
}
pub mod customization;
pub mod look;
pub mod profiles;

pub use customization::CharacterCustomization;
pub use profiles::{ArchetypeProfile, Recommendations};
