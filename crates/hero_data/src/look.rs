//! Random "regenerate" looks.
//!
//! Produces a fresh randomized appearance as a customization record. All
//! randomness lives here, upstream of rendering; the renderer itself stays
//! a pure function of its input.

use rand::Rng;

use crate::configs::palette::PaletteCfg;
use crate::customization::CharacterCustomization;

const BASES: &[&str] = &["masculine", "feminine", "neutral", "robot"];
const COSTUMES: &[&str] = &["classic", "modern", "business", "casual"];
const ACCESSORIES: &[&str] = &["cape", "shield", "tech", "coins"];

/// Roll a random base/costume/accessory/color combination. The accent
/// color always differs from the primary when the palette allows it so
/// overlays stay visible against the base.
pub fn random_look<R: Rng>(palette: &PaletteCfg, rng: &mut R) -> CharacterCustomization {
    let primary = pick(&palette.colors, rng);
    let mut accent = pick(&palette.colors, rng);
    while accent == primary && palette.colors.len() > 1 {
        accent = pick(&palette.colors, rng);
    }
    CharacterCustomization {
        base: Some(pick_static(BASES, rng)),
        costume: Some(pick_static(COSTUMES, rng)),
        accessory: Some(pick_static(ACCESSORIES, rng)),
        primary_color: Some(primary),
        accent_color: Some(accent),
        ..CharacterCustomization::default()
    }
}

fn pick<R: Rng>(colors: &[String], rng: &mut R) -> String {
    if colors.is_empty() {
        return PaletteCfg::default().colors[0].clone();
    }
    colors[rng.random_range(0..colors.len())].clone()
}

fn pick_static<R: Rng>(options: &[&str], rng: &mut R) -> String {
    options[rng.random_range(0..options.len())].to_string()
}
