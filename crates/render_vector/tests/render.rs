use render_vector::{render, LayerKind, RenderInput, Shape};

#[test]
fn render_is_idempotent() {
    let input = RenderInput {
        base: "robot".into(),
        costume: "modern".into(),
        accessory: "tech".into(),
        head: Some("helmet".into()),
        power: Some("bubbles".into()),
        primary_color: "#d62828".into(),
        accent_color: "#0077b6".into(),
        skin_tone: Some("tan".into()),
        animal_color: None,
    };
    assert_eq!(render(&input), render(&input));
}

// Robot is human-like: costume included, stroked-curve eyes, and with no
// head or power requested the stack is exactly accessory/body/costume
// plus the eyes.
#[test]
fn robot_modern_tech_renders_three_layers_plus_eyes() {
    let input = RenderInput {
        base: "robot".into(),
        costume: "modern".into(),
        accessory: "tech".into(),
        ..RenderInput::default()
    };
    let img = render(&input);
    let kinds: Vec<_> = img.layers.iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        [LayerKind::Accessory, LayerKind::Body, LayerKind::Costume, LayerKind::Eyes]
    );
    let eyes = img.layer(LayerKind::Eyes).expect("eyes");
    assert_eq!(eyes.elements.len(), 1);
    assert!(matches!(eyes.elements[0].shape, Shape::Path { .. }));
    assert!(eyes.elements[0].stroke.is_some());
}

#[test]
fn unknown_base_gets_the_default_body_shape() {
    let known = render(&RenderInput { base: "neutral".into(), ..RenderInput::default() });
    let unknown = render(&RenderInput { base: "dragon".into(), ..RenderInput::default() });
    assert_eq!(
        known.layer(LayerKind::Body),
        unknown.layer(LayerKind::Body),
    );
    // Human fallback: costume present, stroked eyes.
    assert!(unknown.has_layer(LayerKind::Costume));
}

#[test]
fn unknown_accessory_falls_back_to_cape_not_an_error() {
    let cape = render(&RenderInput { accessory: "cape".into(), ..RenderInput::default() });
    let unknown = render(&RenderInput { accessory: "jetpack".into(), ..RenderInput::default() });
    assert_eq!(cape.layer(LayerKind::Accessory), unknown.layer(LayerKind::Accessory));
}

#[test]
fn animal_eyes_are_filled_circles() {
    let img = render(&RenderInput { base: "fish".into(), ..RenderInput::default() });
    let eyes = img.layer(LayerKind::Eyes).expect("eyes");
    assert_eq!(eyes.elements.len(), 2);
    for el in &eyes.elements {
        assert!(matches!(el.shape, Shape::Circle { .. }));
        assert_eq!(el.fill.as_deref(), Some("#000000"));
    }
}

#[test]
fn animal_coat_defaults_by_species_and_respects_overrides() {
    let pig = render(&RenderInput { base: "pig".into(), ..RenderInput::default() });
    let body = &pig.layer(LayerKind::Body).expect("body").elements[0];
    assert_eq!(body.fill.as_deref(), Some("#FFC0CB"));

    let golden = render(&RenderInput {
        base: "pig".into(),
        animal_color: Some("gold".into()),
        ..RenderInput::default()
    });
    let body = &golden.layer(LayerKind::Body).expect("body").elements[0];
    assert_eq!(body.fill.as_deref(), Some("#DAA520"));
}

#[test]
fn human_body_uses_skin_tone_not_primary_color() {
    let img = render(&RenderInput {
        base: "masculine".into(),
        primary_color: "#FF0000".into(),
        ..RenderInput::default()
    });
    let body = &img.layer(LayerKind::Body).expect("body").elements[0];
    assert_eq!(body.fill.as_deref(), Some("#D8A77D"));
}

#[test]
fn costume_emblem_takes_the_primary_color() {
    let img = render(&RenderInput {
        costume: "business".into(),
        primary_color: "#00a86b".into(),
        accent_color: "#32127A".into(),
        ..RenderInput::default()
    });
    let costume = img.layer(LayerKind::Costume).expect("costume");
    assert_eq!(costume.elements.len(), 2);
    assert_eq!(costume.elements[0].fill.as_deref(), Some("#32127A"));
    assert_eq!(costume.elements[1].fill.as_deref(), Some("#00a86b"));
}
