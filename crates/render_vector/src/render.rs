//! The renderer: pure lookups over the shape library, layered
//! back-to-front. Total over its input domain; unknown tokens resolve to
//! per-layer defaults and missing optional parts simply omit their layer.

use crate::input::RenderInput;
use crate::shapes;
use crate::types::{CharacterImage, Element, Layer, LayerKind, Shape};

const EYE_COLOR: &str = "#000000";
/// Stroked curve pair used for non-animal eyes.
const HUMAN_EYES_PATH: &str = "M40,45 C42,43 45,43 47,45 M53,45 C55,43 58,43 60,45";

pub fn render(input: &RenderInput) -> CharacterImage {
    let body = shapes::body(&input.base);
    let mut layers = Vec::with_capacity(6);

    layers.push(accessory_layer(input));
    if let Some(power) = &input.power {
        layers.push(power_layer(power, &input.accent_color));
    }
    layers.push(body_layer(input, body));
    if !body.animal || shapes::COSTUME_ANIMALS.contains(&body.name) {
        layers.push(costume_layer(input));
    }
    if !body.animal {
        if let Some(head) = &input.head {
            layers.push(head_layer(head, &input.accent_color));
        }
    }
    layers.push(eyes_layer(body.animal));

    CharacterImage { view_box: shapes::VIEW_BOX, layers }
}

fn accessory_layer(input: &RenderInput) -> Layer {
    let spec = shapes::accessory(&input.accessory);
    Layer {
        kind: LayerKind::Accessory,
        elements: vec![Element::filled(Shape::Path { d: spec.path }, input.accent_color.clone())],
    }
}

fn power_layer(power: &str, accent: &str) -> Layer {
    let spec = shapes::power(power);
    let shape = Shape::Path { d: spec.path };
    let mut element = match spec.stroke_width {
        Some(width) => Element::stroked(shape, accent, width),
        None => Element::filled(shape, accent),
    };
    element.opacity = spec.opacity;
    Layer { kind: LayerKind::Power, elements: vec![element] }
}

fn body_layer(input: &RenderInput, body: &'static shapes::BodyShape) -> Layer {
    let fill = if body.animal {
        match &input.animal_color {
            Some(token) => shapes::animal_color(token).to_string(),
            None => shapes::species_coat(body.name).to_string(),
        }
    } else {
        match &input.skin_tone {
            Some(token) => shapes::skin_tone(token).to_string(),
            None => shapes::DEFAULT_SKIN_TONE.to_string(),
        }
    };
    let mut elements = vec![Element::filled(Shape::Path { d: body.path }, fill)];
    if body.animal {
        elements.extend(species_features(body.name, &input.accent_color));
    }
    Layer { kind: LayerKind::Body, elements }
}

/// Species accent features drawn on top of the base silhouette.
fn species_features(base: &str, accent: &str) -> Vec<Element> {
    match base {
        "dog" => vec![Element::filled(
            Shape::Ellipse { cx: 50.0, cy: 60.0, rx: 5.0, ry: 3.0 },
            EYE_COLOR,
        )],
        "cat" => vec![Element::stroked(
            Shape::Path {
                d: "M40,60 L25,55 M40,60 L25,60 M40,60 L25,65 M60,60 L75,55 M60,60 L75,60 M60,60 L75,65",
            },
            "#FFFFFF",
            1.0,
        )],
        "unicorn" => vec![Element::stroked(Shape::Path { d: "M50,30 L50,5" }, accent, 3.0)],
        "pig" => vec![
            Element::filled(Shape::Ellipse { cx: 50.0, cy: 60.0, rx: 8.0, ry: 6.0 }, "#FF9999"),
            Element::stroked(
                Shape::Path { d: "M45,60 C46,63 48,63 49,60 M51,60 C52,63 54,63 55,60" },
                EYE_COLOR,
                1.5,
            ),
        ],
        _ => Vec::new(),
    }
}

fn costume_layer(input: &RenderInput) -> Layer {
    let spec = shapes::costume(&input.costume);
    Layer {
        kind: LayerKind::Costume,
        elements: vec![
            Element::filled(Shape::Path { d: spec.torso }, input.accent_color.clone()),
            Element::filled(Shape::Path { d: spec.emblem }, input.primary_color.clone()),
        ],
    }
}

fn head_layer(head: &str, accent: &str) -> Layer {
    let spec = shapes::head(head);
    Layer {
        kind: LayerKind::Head,
        elements: vec![Element::filled(Shape::Path { d: spec.path }, accent)],
    }
}

fn eyes_layer(animal: bool) -> Layer {
    let elements = if animal {
        vec![
            Element::filled(Shape::Circle { cx: 40.0, cy: 50.0, r: 3.0 }, EYE_COLOR),
            Element::filled(Shape::Circle { cx: 60.0, cy: 50.0, r: 3.0 }, EYE_COLOR),
        ]
    } else {
        vec![Element::stroked(Shape::Path { d: HUMAN_EYES_PATH }, EYE_COLOR, 1.5)]
    };
    Layer { kind: LayerKind::Eyes, elements }
}
