//! Static shape library.
//!
//! Scope
//! - Body silhouettes (human and animal), costume torso/emblem pairs,
//!   accessories, head decorations, and power effects, keyed by token.
//! - Skin-tone and animal-coat palettes for body fills.
//! - Every lookup is total: unknown tokens resolve to a per-layer default.

/// Shared coordinate space for all library paths.
pub const VIEW_BOX: &str = "0 0 100 200";

pub struct BodyShape {
    pub name: &'static str,
    pub path: &'static str,
    pub animal: bool,
}

pub static BODIES: &[BodyShape] = &[
    BodyShape {
        name: "masculine",
        path: "M50,20 C70,20 80,30 80,50 L80,150 C80,180 70,200 50,200 C30,200 20,180 20,150 L20,50 C20,30 30,20 50,20 Z",
        animal: false,
    },
    BodyShape {
        name: "feminine",
        path: "M50,20 C65,20 75,30 75,50 L75,90 C75,100 80,110 80,120 L80,150 C80,180 70,200 50,200 C30,200 20,180 20,150 L20,120 C20,110 25,100 25,90 L25,50 C25,30 35,20 50,20 Z",
        animal: false,
    },
    BodyShape {
        name: "neutral",
        path: "M50,20 C65,20 75,30 75,50 L75,150 C75,180 65,200 50,200 C35,200 25,180 25,150 L25,50 C25,30 35,20 50,20 Z",
        animal: false,
    },
    BodyShape {
        name: "robot",
        path: "M30,20 L70,20 L80,40 L80,150 L70,180 L30,180 L20,150 L20,40 L30,20 Z",
        animal: false,
    },
    BodyShape {
        name: "dog",
        path: "M50,30 C70,30 80,40 75,50 C85,60 85,70 85,80 C85,90 80,100 75,110 L70,150 C70,180 60,200 50,200 C40,200 30,180 30,150 L25,110 C20,100 15,90 15,80 C15,70 15,60 25,50 C20,40 30,30 50,30 Z M15,60 C10,65 5,70 10,75 C15,80 20,75 20,70 Z M85,60 C90,65 95,70 90,75 C85,80 80,75 80,70 Z",
        animal: true,
    },
    BodyShape {
        name: "cat",
        path: "M50,30 C65,30 75,40 75,50 C75,60 80,70 80,80 C80,90 75,100 70,110 L70,150 C70,180 60,200 50,200 C40,200 30,180 30,150 L30,110 C25,100 20,90 20,80 C20,70 25,60 25,50 C25,40 35,30 50,30 Z M20,40 L10,20 L25,35 Z M80,40 L90,20 L75,35 Z",
        animal: true,
    },
    BodyShape {
        name: "bunny",
        path: "M50,30 C65,30 75,40 75,50 C75,60 80,70 80,80 C80,90 75,100 70,110 L70,150 C70,180 60,200 50,200 C40,200 30,180 30,150 L30,110 C25,100 20,90 20,80 C20,70 25,60 25,50 C25,40 35,30 50,30 Z M30,30 L25,5 L35,20 Z M70,30 L75,5 L65,20 Z",
        animal: true,
    },
    BodyShape {
        name: "unicorn",
        path: "M50,30 C70,30 80,40 75,50 C85,60 85,70 85,80 C85,90 80,100 75,110 L70,150 C70,180 60,200 50,200 C40,200 30,180 30,150 L25,110 C20,100 15,90 15,80 C15,70 15,60 25,50 C20,40 30,30 50,30 Z M15,60 C10,65 5,70 10,75 C15,80 20,75 20,70 Z M85,60 C90,65 95,70 90,75 C85,80 80,75 80,70 Z M50,30 L50,5 L50,30 Z",
        animal: true,
    },
    BodyShape {
        name: "pig",
        path: "M50,30 C70,30 85,40 85,60 C85,70 80,80 80,90 L75,150 C75,180 65,200 50,200 C35,200 25,180 25,150 L20,90 C20,80 15,70 15,60 C15,40 30,30 50,30 Z M30,60 C25,60 25,70 30,70 C35,70 35,60 30,60 Z M70,60 C65,60 65,70 70,70 C75,70 75,60 70,60 Z M50,70 C45,75 45,85 50,90 C55,85 55,75 50,70 Z",
        animal: true,
    },
    BodyShape {
        name: "mouse",
        path: "M50,30 C65,30 75,40 75,50 C75,60 80,70 80,80 C80,90 75,100 70,110 L70,150 C70,180 60,200 50,200 C40,200 30,180 30,150 L30,110 C25,100 20,90 20,80 C20,70 25,60 25,50 C25,40 35,30 50,30 Z M25,40 L10,20 L25,30 Z M75,40 L90,20 L75,30 Z M50,60 L50,70 C40,75 60,75 50,70 Z",
        animal: true,
    },
    BodyShape {
        name: "fish",
        path: "M50,30 C80,30 90,60 90,100 C90,140 80,170 50,170 C20,170 10,140 10,100 C10,60 20,30 50,30 Z M80,100 L95,85 L95,115 Z M20,70 C15,70 15,80 20,80 C25,80 25,70 20,70 Z",
        animal: true,
    },
    BodyShape {
        name: "horse",
        path: "M50,30 C70,30 80,40 75,50 C85,60 85,70 85,80 C85,90 80,100 75,110 L70,150 C70,180 60,200 50,200 C40,200 30,180 30,150 L25,110 C20,100 15,90 15,80 C15,70 15,60 25,50 C20,40 30,30 50,30 Z M50,30 L40,5 L45,25 Z M50,30 L60,5 L55,25 Z",
        animal: true,
    },
    BodyShape {
        name: "goat",
        path: "M50,30 C70,30 80,40 75,50 C85,60 85,70 85,80 C85,90 80,100 75,110 L70,150 C70,180 60,200 50,200 C40,200 30,180 30,150 L25,110 C20,100 15,90 15,80 C15,70 15,60 25,50 C20,40 30,30 50,30 Z M35,30 L25,10 L35,25 Z M65,30 L75,10 L65,25 Z M50,70 C45,75 45,85 50,85 C55,85 55,75 50,70 Z",
        animal: true,
    },
    BodyShape {
        name: "lamb",
        path: "M50,30 C70,30 80,40 80,60 C80,70 90,65 90,80 C90,90 80,85 80,90 L75,150 C75,180 65,200 50,200 C35,200 25,180 25,150 L20,90 C20,85 10,90 10,80 C10,65 20,70 20,60 C20,40 30,30 50,30 Z M50,60 C45,65 45,75 50,75 C55,75 55,65 50,60 Z",
        animal: true,
    },
];

/// Animal bases that still wear a costume overlay.
pub const COSTUME_ANIMALS: &[&str] = &["dog", "cat", "unicorn"];

pub struct CostumeShape {
    pub name: &'static str,
    pub torso: &'static str,
    pub emblem: &'static str,
}

pub static COSTUMES: &[CostumeShape] = &[
    CostumeShape {
        name: "classic",
        torso: "M25,80 L75,80 L75,180 L25,180 Z",
        emblem: "M50,100 m-15,0 a15,15 0 1,0 30,0 a15,15 0 1,0 -30,0 Z",
    },
    CostumeShape {
        name: "modern",
        torso: "M25,80 L75,80 L80,180 L20,180 Z",
        emblem: "M50,100 l-15,-15 h30 Z",
    },
    CostumeShape {
        name: "business",
        torso: "M20,80 L80,80 L80,180 L20,180 Z",
        emblem: "M35,90 L65,90 L65,110 L35,110 Z",
    },
    CostumeShape {
        name: "casual",
        torso: "M30,80 L70,80 L75,180 L25,180 Z",
        emblem: "M40,100 L60,100 L60,120 L40,120 Z",
    },
];

pub struct AccessoryShape {
    pub name: &'static str,
    pub path: &'static str,
}

pub static ACCESSORIES: &[AccessoryShape] = &[
    AccessoryShape { name: "cape", path: "M25,40 L75,40 L100,180 L0,180 Z" },
    AccessoryShape {
        name: "shield",
        path: "M50,70 m-25,0 a25,40 0 1,0 50,0 a25,40 0 1,0 -50,0 Z",
    },
    AccessoryShape {
        name: "tech",
        path: "M30,70 L70,70 L65,100 L35,100 Z M40,100 L60,100 L55,130 L45,130 Z",
    },
    AccessoryShape {
        name: "coins",
        path: "M30,80 m-10,0 a10,10 0 1,0 20,0 a10,10 0 1,0 -20,0 Z M50,100 m-15,0 a15,15 0 1,0 30,0 a15,15 0 1,0 -30,0 Z M70,80 m-10,0 a10,10 0 1,0 20,0 a10,10 0 1,0 -20,0 Z",
    },
];

pub struct HeadShape {
    pub name: &'static str,
    pub path: &'static str,
}

pub static HEADS: &[HeadShape] = &[
    HeadShape {
        name: "mask",
        path: "M50,30 m-20,0 a20,20 0 1,0 40,0 a20,20 0 1,0 -40,0 Z M30,30 L40,45 L60,45 L70,30 Z",
    },
    HeadShape {
        name: "helmet",
        path: "M50,10 C70,10 75,30 75,40 L70,50 L30,50 L25,40 C25,30 30,10 50,10 Z",
    },
    HeadShape {
        name: "glasses",
        path: "M35,30 m-10,0 a10,10 0 1,0 20,0 a10,10 0 1,0 -20,0 Z M65,30 m-10,0 a10,10 0 1,0 20,0 a10,10 0 1,0 -20,0 Z M45,30 L55,30 Z",
    },
    HeadShape {
        name: "crown",
        path: "M30,30 L40,10 L50,20 L60,10 L70,30 Z",
    },
];

pub struct PowerShape {
    pub name: &'static str,
    pub path: &'static str,
    pub opacity: Option<f32>,
    /// Stroke-only effect when set; filled otherwise.
    pub stroke_width: Option<f32>,
}

pub static POWERS: &[PowerShape] = &[
    PowerShape {
        name: "glow",
        path: "M50,100 m-40,0 a40,40 0 1,0 80,0 a40,40 0 1,0 -80,0 Z",
        opacity: Some(0.3),
        stroke_width: None,
    },
    PowerShape {
        name: "lightning",
        path: "M45,20 L60,80 L40,80 L55,180 M65,20 L80,80 L60,80 L75,180 M25,20 L40,80 L20,80 L35,180",
        opacity: None,
        stroke_width: Some(2.0),
    },
    PowerShape {
        name: "bubbles",
        path: "M30,50 m-5,0 a5,5 0 1,0 10,0 a5,5 0 1,0 -10,0 Z M50,30 m-7,0 a7,7 0 1,0 14,0 a7,7 0 1,0 -14,0 Z M70,60 m-6,0 a6,6 0 1,0 12,0 a6,6 0 1,0 -12,0 Z M40,80 m-8,0 a8,8 0 1,0 16,0 a8,8 0 1,0 -16,0 Z M80,40 m-4,0 a4,4 0 1,0 8,0 a4,4 0 1,0 -8,0 Z",
        opacity: Some(0.7),
        stroke_width: None,
    },
    PowerShape {
        name: "stars",
        path: "M20,30 l2,-1 l1,-2 l1,2 l2,1 l-2,1 l-1,2 l-1,-2 Z M50,20 l3,-1.5 l1.5,-3 l1.5,3 l3,1.5 l-3,1.5 l-1.5,3 l-1.5,-3 Z M80,30 l2,-1 l1,-2 l1,2 l2,1 l-2,1 l-1,2 l-1,-2 Z M30,80 l2.5,-1.2 l1.2,-2.5 l1.2,2.5 l2.5,1.2 l-2.5,1.2 l-1.2,2.5 l-1.2,-2.5 Z M70,70 l2,-1 l1,-2 l1,2 l2,1 l-2,1 l-1,2 l-1,-2 Z",
        opacity: Some(0.9),
        stroke_width: None,
    },
];

pub struct NamedColor {
    pub name: &'static str,
    pub hex: &'static str,
}

pub static SKIN_TONES: &[NamedColor] = &[
    NamedColor { name: "light", hex: "#FFE0BD" },
    NamedColor { name: "medium", hex: "#D8A77D" },
    NamedColor { name: "tan", hex: "#C68642" },
    NamedColor { name: "brown", hex: "#8D5524" },
    NamedColor { name: "dark", hex: "#5C3317" },
    NamedColor { name: "custom", hex: "#F8D25C" },
];

pub static ANIMAL_COLORS: &[NamedColor] = &[
    NamedColor { name: "brown", hex: "#8B4513" },
    NamedColor { name: "black", hex: "#2C3E50" },
    NamedColor { name: "white", hex: "#FFFFFF" },
    NamedColor { name: "grey", hex: "#808080" },
    NamedColor { name: "gold", hex: "#DAA520" },
    NamedColor { name: "orange", hex: "#FF8C00" },
    NamedColor { name: "cream", hex: "#FFFDD0" },
    NamedColor { name: "pink", hex: "#FFC0CB" },
    NamedColor { name: "blue", hex: "#1E90FF" },
    NamedColor { name: "purple", hex: "#9370DB" },
    NamedColor { name: "green", hex: "#3CB371" },
];

pub const DEFAULT_SKIN_TONE: &str = "#D8A77D";

/// Body shape for a base token; unknown tokens get the neutral shape.
pub fn body(name: &str) -> &'static BodyShape {
    BODIES
        .iter()
        .find(|b| b.name == name)
        .unwrap_or_else(|| default_body())
}

fn default_body() -> &'static BodyShape {
    BODIES
        .iter()
        .find(|b| b.name == "neutral")
        .unwrap_or(&BODIES[0])
}

pub fn costume(name: &str) -> &'static CostumeShape {
    COSTUMES.iter().find(|c| c.name == name).unwrap_or(&COSTUMES[0])
}

pub fn accessory(name: &str) -> &'static AccessoryShape {
    ACCESSORIES.iter().find(|a| a.name == name).unwrap_or(&ACCESSORIES[0])
}

pub fn head(name: &str) -> &'static HeadShape {
    HEADS.iter().find(|h| h.name == name).unwrap_or(&HEADS[0])
}

pub fn power(name: &str) -> &'static PowerShape {
    POWERS.iter().find(|p| p.name == name).unwrap_or(&POWERS[0])
}

/// Resolve a skin-tone token: raw hex passes through, named tones look up
/// the palette, anything else gets the medium default.
pub fn skin_tone(token: &str) -> &str {
    if token.starts_with('#') {
        return token;
    }
    SKIN_TONES
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(token))
        .map(|t| t.hex)
        .unwrap_or(DEFAULT_SKIN_TONE)
}

/// Resolve an animal-coat token the same way; unknown names get brown.
pub fn animal_color(token: &str) -> &str {
    if token.starts_with('#') {
        return token;
    }
    ANIMAL_COLORS
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(token))
        .map(|c| c.hex)
        .unwrap_or("#8B4513")
}

/// Default coat color per species when no override is given.
pub fn species_coat(base: &str) -> &'static str {
    match base {
        "pig" => "#FFC0CB",
        "unicorn" | "lamb" => "#FFFFFF",
        "cat" => "#2C3E50",
        "fish" => "#1E90FF",
        _ => "#8B4513",
    }
}
