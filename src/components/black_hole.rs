//! Brane nucleating through a black hole horizon.

use super::text;
use crate::component::{BlackHoleVariant, Component, ComponentType, PartName};
use crate::geometry::{Direction, Paint, Point, SceneNode, Shape};
use crate::style::{Color, KindDefaults, StyleSnapshot};

pub(super) fn layout(
    variant: BlackHoleVariant,
    style: &KindDefaults,
    snapshot: StyleSnapshot,
) -> Component {
    let size = style.black_hole.bh_size;
    let brane = &style.brane;

    let mut horizon = SceneNode::shape(
        Shape::Circle {
            center: Point::ORIGIN,
            radius: size,
        },
        Paint::stroke(style.black_hole.bh_color, brane.brane_stroke_w)
            .with_fill(style.black_hole.bh_color, style.black_hole.bh_fill_opa),
    );
    horizon.set_z_index(3);

    let brane_circle = SceneNode::shape(
        Shape::Circle {
            center: Point::ORIGIN,
            radius: size,
        },
        Paint::stroke(brane.brane_color, 1.0).with_fill(brane.brane_color, brane.brane_fill_opa),
    );

    let label = |content: &str, position: Point, z: i32| {
        let mut node = text(content, position, 0.35 * size, brane.brane_text_color);
        node.set_z_index(z);
        node
    };

    let mut parts = vec![(PartName::Brane, brane_circle), (PartName::Horizon, horizon)];
    match variant {
        BlackHoleVariant::Plain => {}
        BlackHoleVariant::Fragmentation => {
            parts.push((PartName::ChargeLabel, label("Q > T", Point::ORIGIN, 8)));
        }
        BlackHoleVariant::Spinning => {
            // invisible orbit the angle label travels along
            let theta_path = SceneNode::shape(
                Shape::Circle {
                    center: Point::ORIGIN,
                    radius: 0.7 * size,
                },
                Paint::stroke(Color::WHITE, 0.0),
            );
            let orbit_right = theta_path
                .bounds()
                .map(|b| b.corner(Direction::Right))
                .unwrap_or(Point::ORIGIN);
            parts.push((PartName::MassLabel, label("\\mu", Point::ORIGIN, 7)));
            parts.push((PartName::AngleLabel, label("\\theta", orbit_right, 7)));
            parts.push((PartName::ThetaPath, theta_path));
        }
    }

    Component::new(ComponentType::BlackHole(variant), snapshot, parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleKind;

    fn build(variant: BlackHoleVariant, style: &KindDefaults) -> Component {
        layout(variant, style, StyleSnapshot::capture(style, &[StyleKind::BlackHole]))
    }

    #[test]
    fn test_part_lists() {
        let style = KindDefaults::default();
        assert_eq!(
            build(BlackHoleVariant::Plain, &style).part_names(),
            vec![PartName::Brane, PartName::Horizon]
        );
        assert_eq!(
            build(BlackHoleVariant::Fragmentation, &style).part_names(),
            vec![PartName::Brane, PartName::Horizon, PartName::ChargeLabel]
        );
        assert_eq!(
            build(BlackHoleVariant::Spinning, &style).part_names(),
            vec![
                PartName::Brane,
                PartName::Horizon,
                PartName::MassLabel,
                PartName::AngleLabel,
                PartName::ThetaPath
            ]
        );
    }

    #[test]
    fn test_sizes_follow_bh_size() {
        let mut style = KindDefaults::default();
        style.black_hole.bh_size = 2.0;
        let component = build(BlackHoleVariant::Spinning, &style);
        assert!((component.part(PartName::Horizon).unwrap().width() - 4.0).abs() < 1e-9);
        let angle = component.part(PartName::AngleLabel).unwrap().center();
        assert!(angle.approx_eq(Point::new(1.4, 0.0), 1e-9));
        let horizon = component.part(PartName::Horizon).unwrap().first_primitive().unwrap();
        assert_eq!(horizon.paint.z_index, 3);
        assert_eq!(horizon.paint.fill_color, Some(Color::BLACK));
    }
}
