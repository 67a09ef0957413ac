//! The process-wide helpers share one registry, so everything runs in a
//! single test to keep the steps ordered.

use cosmo_scenes::{
    build, get_defaults, load_template, set_defaults, Color, SceneError, StyleBundle, StyleKind,
    StyleOverrides, StyleValue, Template, TemplateName,
};

#[test]
fn test_global_registry_lifecycle() {
    // every known template round-trips through the registry
    for name in TemplateName::all() {
        assert_eq!(load_template(name.as_str()), name);
        let template = Template::builtin(name).unwrap();
        for kind in StyleKind::all() {
            assert_eq!(get_defaults(kind), template.bundle(kind), "{} {}", name, kind);
        }
    }

    // unknown names load the fallback without failing
    load_template("cosmic_dawn");
    assert_eq!(load_template("nonexistent_name"), TemplateName::FALLBACK);
    let fallback = Template::builtin(TemplateName::FALLBACK).unwrap();
    assert_eq!(
        get_defaults(StyleKind::Brane),
        fallback.bundle(StyleKind::Brane)
    );

    // overrides stay on the component
    let before = get_defaults(StyleKind::Brane);
    let overrides = StyleOverrides::new().with("brane_color", Color::YELLOW);
    let component = build("black_hole", "none", Some(&overrides)).unwrap();
    assert_eq!(
        component.style().get("brane_color"),
        Some(StyleValue::from(Color::YELLOW))
    );
    assert_eq!(get_defaults(StyleKind::Brane), before);

    // a direct bundle replacement is picked up by the next build only
    let StyleBundle::BlackHole(mut black_hole) = get_defaults(StyleKind::BlackHole) else {
        panic!("black hole defaults have the wrong kind");
    };
    black_hole.bh_size = 2.0;
    set_defaults(StyleBundle::BlackHole(black_hole));
    let bigger = build("black_hole", "none", None).unwrap();
    assert!(bigger.primary_shape().width() > component.primary_shape().width());

    assert!(matches!(
        build("bubble", "plasma", None),
        Err(SceneError::UnknownVariant { .. })
    ));
}
