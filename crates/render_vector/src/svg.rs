//! SVG serialization for display collaborators.

use std::fmt::Write as _;

use crate::types::{CharacterImage, Element, Shape};

/// Serialize a rendered character as a standalone SVG document.
pub fn document(image: &CharacterImage) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{}\">",
        image.view_box
    );
    for layer in &image.layers {
        let _ = write!(out, "<g class=\"{}\">", layer.kind.css_class());
        for element in &layer.elements {
            write_element(&mut out, element);
        }
        out.push_str("</g>");
    }
    out.push_str("</svg>");
    out
}

fn write_element(out: &mut String, element: &Element) {
    match element.shape {
        Shape::Path { d } => {
            let _ = write!(out, "<path d=\"{d}\"");
        }
        Shape::Circle { cx, cy, r } => {
            let _ = write!(out, "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\"");
        }
        Shape::Ellipse { cx, cy, rx, ry } => {
            let _ = write!(out, "<ellipse cx=\"{cx}\" cy=\"{cy}\" rx=\"{rx}\" ry=\"{ry}\"");
        }
    }
    match &element.fill {
        Some(color) => {
            let _ = write!(out, " fill=\"{color}\"");
        }
        None => out.push_str(" fill=\"none\""),
    }
    if let Some(stroke) = &element.stroke {
        let _ = write!(out, " stroke=\"{}\" stroke-width=\"{}\"", stroke.color, stroke.width);
    }
    if let Some(opacity) = element.opacity {
        let _ = write!(out, " opacity=\"{opacity}\"");
    }
    out.push_str(" />");
}
