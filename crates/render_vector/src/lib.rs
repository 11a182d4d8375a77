//! render_vector: deterministic layered avatar rendering.
//!
//! Turns a merged [`RenderInput`] into a graphics-API-independent
//! [`CharacterImage`]: an ordered stack of shape layers with fills,
//! strokes, and opacity. A small SVG serializer is provided for display
//! collaborators. Rendering is a pure function; identical inputs always
//! produce identical output.

pub mod input;
pub mod render;
pub mod shapes;
pub mod svg;
pub mod types;

pub use input::RenderInput;
pub use render::render;
pub use types::{CharacterImage, Element, Layer, LayerKind, Shape, Stroke};
