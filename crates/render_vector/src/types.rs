//! Layered image types shared by the renderer and serializers.

/// One primitive shape. Library paths are static data; everything a
/// renderer emits references them by pointer rather than copying.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Path { d: &'static str },
    Circle { cx: f32, cy: f32, r: f32 },
    Ellipse { cx: f32, cy: f32, rx: f32, ry: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f32,
}

/// A shape plus its paint. `fill: None` with a stroke renders as an
/// outline; both `None` would be invisible and is never produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub shape: Shape,
    pub fill: Option<String>,
    pub stroke: Option<Stroke>,
    pub opacity: Option<f32>,
}

impl Element {
    pub fn filled(shape: Shape, color: impl Into<String>) -> Self {
        Self { shape, fill: Some(color.into()), stroke: None, opacity: None }
    }

    pub fn stroked(shape: Shape, color: impl Into<String>, width: f32) -> Self {
        Self {
            shape,
            fill: None,
            stroke: Some(Stroke { color: color.into(), width }),
            opacity: None,
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

/// Layer identity, in back-to-front stacking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Accessory,
    Power,
    Body,
    Costume,
    Head,
    Eyes,
}

impl LayerKind {
    pub fn css_class(self) -> &'static str {
        match self {
            LayerKind::Accessory => "accessory",
            LayerKind::Power => "power",
            LayerKind::Body => "body",
            LayerKind::Costume => "costume",
            LayerKind::Head => "head",
            LayerKind::Eyes => "eyes",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub kind: LayerKind,
    pub elements: Vec<Element>,
}

/// The finished avatar: layers ordered back-to-front under a shared
/// coordinate space.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterImage {
    pub view_box: &'static str,
    pub layers: Vec<Layer>,
}

impl CharacterImage {
    pub fn layer(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.iter().find(|l| l.kind == kind)
    }

    pub fn has_layer(&self, kind: LayerKind) -> bool {
        self.layer(kind).is_some()
    }
}
