//! Dark bubble scenarios: a brane nucleating inside a vacuum box.

use super::{rounded_rect, text};
use crate::assets::{AssetLoader, WEIGHT_FIGURE};
use crate::component::{Binding, BubbleVariant, Component, ComponentType, PartName, PartRef, TrackerId};
use crate::error::Result;
use crate::geometry::{Bounds, Direction, Paint, Point, SceneNode, Shape};
use crate::style::{Color, KindDefaults, StyleSnapshot};
use std::f64::consts::{FRAC_PI_4, TAU};
use std::path::Path;

const LABEL_SIZE: f64 = 0.35;
const LABEL_Z: i32 = 4;
/// Starting value of the vacuum energy bar
pub(crate) const INITIAL_ENERGY: f64 = 0.8;
const WAVE_SAMPLES: usize = 720;

pub(super) fn layout(
    variant: BubbleVariant,
    style: &KindDefaults,
    assets: &AssetLoader,
    snapshot: StyleSnapshot,
) -> Result<Component> {
    let brane = &style.brane;
    let vacuum = &style.vacuum;
    let bubble = &style.bubble;
    let r = brane.brane_radius;

    let background = SceneNode::shape(
        rounded_rect(
            Point::ORIGIN,
            bubble.box_width,
            bubble.box_height,
            vacuum.corner_radii(),
        ),
        Paint::stroke(vacuum.vacuum_color, vacuum.vacuum_stroke_w)
            .with_fill(vacuum.vacuum_color, vacuum.vacuum_fill_opa),
    );
    let box_bounds = Bounds::around(Point::ORIGIN, bubble.box_width, bubble.box_height);

    let brane_circle = SceneNode::shape(
        Shape::Circle {
            center: Point::ORIGIN,
            radius: r,
        },
        Paint::stroke(brane.brane_color, brane.brane_stroke_w)
            .with_fill(brane.brane_color, 1.5 * brane.brane_fill_opa),
    );

    let label = |content: &str, position: Point| {
        let mut node = text(content, position, LABEL_SIZE, vacuum.vacuum_text_color);
        node.set_z_index(LABEL_Z);
        node
    };
    let mut inner_label = label("k_{-}", Point::ORIGIN);
    let mut outer_label = label(
        "k_{+}",
        box_bounds.corner(Direction::UpRight) - Point::new(0.45, 0.45),
    );

    let component_type = ComponentType::Bubble(variant);
    let component = match variant {
        BubbleVariant::Empty => Component::new(
            component_type,
            snapshot,
            vec![
                (PartName::Background, background),
                (PartName::OuterLabel, outer_label),
                (PartName::Brane, brane_circle),
                (PartName::InnerLabel, inner_label),
                (PartName::RadiusInfo, radius_info(style)),
            ],
        ),
        BubbleVariant::Instanton => {
            let inner = label("V(\\phi_{-})", Point::ORIGIN);
            let outer = label(
                "V(\\phi_{+})",
                box_bounds.corner(Direction::UpRight) - Point::new(0.55, 0.55),
            );
            Component::new(
                component_type,
                snapshot,
                vec![
                    (PartName::Background, background),
                    (PartName::OuterLabel, outer),
                    (PartName::Brane, brane_circle),
                    (PartName::InnerLabel, inner),
                ],
            )
        }
        BubbleVariant::Radiation => {
            let mass = mass(assets, vacuum.vacuum_text_color)?;
            if let Some(mass_bounds) = mass.bounds() {
                inner_label.next_to(&mass_bounds, Direction::Down, 0.2);
            }
            Component::new(
                component_type,
                snapshot,
                vec![
                    (PartName::Background, background),
                    (PartName::OuterLabel, outer_label),
                    (PartName::Brane, brane_circle),
                    (PartName::InnerLabel, inner_label),
                    (PartName::Mass, mass),
                ],
            )
        }
        BubbleVariant::Gw => {
            let waves = |stroke_width: f64, fill_opacity: f64| {
                let mut paint = Paint::stroke(brane.brane_color, stroke_width);
                if fill_opacity > 0.0 {
                    paint = paint.with_fill(brane.brane_color, fill_opacity);
                }
                SceneNode::shape(Shape::Curve { points: wavy_circle(r) }, paint)
            };
            Component::new(
                component_type,
                snapshot,
                vec![
                    (PartName::Background, background),
                    (PartName::OuterLabel, outer_label),
                    (PartName::Brane, waves(brane.brane_stroke_w, brane.brane_fill_opa)),
                    (PartName::InnerLabel, inner_label),
                    (PartName::BroadcastWaves, waves(brane.brane_stroke_w / 3.0, 0.0)),
                ],
            )
        }
        BubbleVariant::Strings => {
            outer_label.shift(Point::new(0.0, -0.3));
            let anchors: Vec<SceneNode> = (0..8)
                .map(|i| {
                    SceneNode::shape(
                        Shape::Dot {
                            center: Point::polar(r, i as f64 * FRAC_PI_4),
                            radius: 0.0,
                        },
                        Paint::stroke(brane.brane_color, 0.0),
                    )
                })
                .collect();
            let strings: Vec<SceneNode> = Direction::compass()
                .iter()
                .zip(&anchors)
                .map(|(direction, anchor)| {
                    let mut end = box_bounds.corner(*direction);
                    if direction.is_diagonal() {
                        // stay clear of rounded corners
                        let inset = vacuum.corner_rad / 6.0;
                        let (dx, dy) = (direction.unit().x.signum(), direction.unit().y.signum());
                        end = end - Point::new(inset * dx, inset * dy);
                    }
                    SceneNode::shape(
                        Shape::Line {
                            start: anchor.center(),
                            end,
                        },
                        Paint::stroke(bubble.string_color, bubble.string_stroke_w),
                    )
                })
                .collect();
            let brane_with_anchors = SceneNode::group(vec![SceneNode::group(anchors), brane_circle]);

            Component::new(
                component_type,
                snapshot,
                vec![
                    (PartName::Background, background),
                    (PartName::OuterLabel, outer_label),
                    (PartName::BraneAnchors, brane_with_anchors),
                    (PartName::Strings, SceneNode::group(strings)),
                    (PartName::InnerLabel, inner_label),
                ],
            )
            .with_binding(Binding::Tether {
                anchors: PartRef::child(PartName::BraneAnchors, &[0]),
                lines: PartName::Strings.into(),
            })
        }
        BubbleVariant::Em => {
            let inner_radius = 1.05 * r;
            let field_top = SceneNode::shape(
                Shape::Circle {
                    center: Point::ORIGIN,
                    radius: inner_radius,
                },
                Paint::stroke(bubble.field_top_color, 4.0),
            );
            Component::new(
                component_type,
                snapshot,
                vec![
                    (PartName::Background, background),
                    (PartName::OuterLabel, outer_label),
                    (PartName::Brane, brane_circle),
                    (PartName::InnerLabel, inner_label),
                    (PartName::FieldTop, field_top),
                    (PartName::FieldGlow, field_glow(style, Point::ORIGIN)),
                ],
            )
        }
        BubbleVariant::EnergyDiscussion => {
            let mut bar = SceneNode::shape(
                rounded_rect(Point::ORIGIN, bubble.box_width, 0.6, vacuum.corner_radii()),
                Paint::stroke(brane.brane_color, vacuum.vacuum_stroke_w + 0.2),
            );
            bar.next_to(&box_bounds, Direction::Down, 0.2);
            let fill = SceneNode::shape(
                rounded_rect(bar.center(), INITIAL_ENERGY, 0.5, vacuum.corner_radii()),
                Paint::stroke(brane.brane_color, 0.1)
                    .with_fill(brane.brane_color, brane.brane_fill_opa),
            );
            let energy_cost = SceneNode::shape(
                Shape::Circle {
                    center: Point::ORIGIN,
                    radius: r,
                },
                Paint::stroke(brane.brane_color, vacuum.vacuum_stroke_w + 0.9).dashed(),
            );
            let fake_brane = brane_circle.clone();

            Component::new(
                component_type,
                snapshot,
                vec![
                    (PartName::Background, background),
                    (PartName::OuterLabel, outer_label),
                    (PartName::FakeBrane, fake_brane),
                    (PartName::Brane, brane_circle),
                    (PartName::EnergyCost, energy_cost),
                    (PartName::EnergyBar, bar),
                    (PartName::InnerLabel, inner_label),
                    (PartName::EnergyFill, fill),
                ],
            )
            .with_tracker(TrackerId::VacuumEnergy, INITIAL_ENERGY)
            .with_binding(Binding::BarWidth {
                tracker: TrackerId::VacuumEnergy,
                bar: PartName::EnergyFill.into(),
                container: PartName::EnergyBar.into(),
            })
        }
    };
    Ok(component)
}

/// Line from the center out past the brane, labelled with the scale factor
fn radius_info(style: &KindDefaults) -> SceneNode {
    let r = style.brane.brane_radius;
    let color = style.vacuum.vacuum_text_color;
    let line = SceneNode::shape(
        Shape::Line {
            start: Point::ORIGIN,
            end: Point::polar(r, FRAC_PI_4) * 2.5,
        },
        Paint::stroke(color, style.brane.brane_stroke_w),
    );
    let mut caption = SceneNode::shape(
        Shape::Label {
            text: "r=a(\\tau)".to_string(),
            position: Point::ORIGIN,
            font_size: 0.3,
            rotation: FRAC_PI_4,
        },
        Paint::fill(color, 1.0),
    );
    let midpoint = line.center();
    caption.next_to(&Bounds::around(midpoint, 0.0, 0.0), Direction::Left, 0.05);
    SceneNode::group(vec![line, caption])
}

/// Matter figure, one scene unit high
fn mass(assets: &AssetLoader, color: Color) -> Result<SceneNode> {
    let svg = assets.load_svg(Path::new(WEIGHT_FIGURE))?;
    let height = 1.0;
    Ok(SceneNode::shape(
        Shape::Svg {
            source: svg.path.display().to_string(),
            center: Point::ORIGIN,
            width: height * svg.aspect_ratio(),
            height,
        },
        Paint::fill(color, 1.0),
    ))
}

/// Brane outline with a small ripple, traced twice around
fn wavy_circle(radius: f64) -> Vec<Point> {
    (0..=WAVE_SAMPLES)
        .map(|i| {
            let t = 2.0 * TAU * i as f64 / WAVE_SAMPLES as f64;
            Point::polar(radius + 0.01 * (25.0 * t).sin(), t)
        })
        .collect()
}

/// Concentric annuli fading out from just above the brane surface
fn field_glow(style: &KindDefaults, center: Point) -> SceneNode {
    let grad = style.bubble.field_gradient.max(1);
    let color = style.bubble.field_top_color;
    let inner_radius = 1.05 * style.brane.brane_radius;
    let outer_limit = style.brane.brane_radius + 0.6;
    let rings = (0..grad)
        .map(|idx| {
            SceneNode::shape(
                Shape::Annulus {
                    center,
                    inner_radius,
                    outer_radius: inner_radius
                        + idx as f64 / grad as f64 * (outer_limit - inner_radius),
                },
                Paint::fill(color, 0.75 / grad as f64).with_stroke_opacity(0.0),
            )
        })
        .collect();
    SceneNode::group(rings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SceneError;

    fn build(variant: BubbleVariant) -> Component {
        let style = KindDefaults::default();
        let assets = AssetLoader::new(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"));
        let snapshot = StyleSnapshot::capture(&style, ComponentType::Bubble(variant).style_kinds());
        layout(variant, &style, &assets, snapshot).unwrap()
    }

    #[test]
    fn test_part_order_keeps_brane_third() {
        for variant in [
            BubbleVariant::Empty,
            BubbleVariant::Instanton,
            BubbleVariant::Radiation,
            BubbleVariant::Gw,
            BubbleVariant::Em,
        ] {
            assert_eq!(build(variant).index_of(PartName::Brane), Some(2), "{:?}", variant);
        }
        assert_eq!(build(BubbleVariant::Strings).index_of(PartName::BraneAnchors), Some(2));
    }

    #[test]
    fn test_strings_start_on_brane_and_end_on_box() {
        let component = build(BubbleVariant::Strings);
        let strings = component.part(PartName::Strings).unwrap();
        assert_eq!(strings.children().len(), 8);
        let box_bounds = component.part(PartName::Background).unwrap().bounds().unwrap();
        for (i, line) in strings.primitives().into_iter().enumerate() {
            let Shape::Line { start, end } = line.shape else {
                panic!("string is not a line");
            };
            assert!(start.approx_eq(Point::polar(1.0, i as f64 * FRAC_PI_4), 1e-9));
            assert!(box_bounds.contains(end));
        }
    }

    #[test]
    fn test_energy_fill_starts_at_bar_left_edge() {
        let component = build(BubbleVariant::EnergyDiscussion);
        assert_eq!(component.tracker(TrackerId::VacuumEnergy), Some(INITIAL_ENERGY));
        let bar = component.part(PartName::EnergyBar).unwrap().bounds().unwrap();
        let fill = component.part(PartName::EnergyFill).unwrap().bounds().unwrap();
        assert!((fill.min.x - bar.min.x).abs() < 1e-9);
        assert!((fill.width() - INITIAL_ENERGY).abs() < 1e-9);
        let background = component.part(PartName::Background).unwrap().bounds().unwrap();
        assert!((background.min.y - bar.max.y - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_field_glow_has_one_ring_per_gradient_step() {
        let component = build(BubbleVariant::Em);
        let glow = component.part(PartName::FieldGlow).unwrap();
        assert_eq!(glow.children().len(), 50);
    }

    #[test]
    fn test_radiation_requires_mass_figure() {
        let style = KindDefaults::default();
        let dir = tempfile::tempdir().unwrap();
        let assets = AssetLoader::new(dir.path());
        let snapshot = StyleSnapshot::capture(&style, &[]);
        let err = layout(BubbleVariant::Radiation, &style, &assets, snapshot).unwrap_err();
        assert!(matches!(err, SceneError::AssetNotFound { .. }));
    }
}
