//! A junction brane between two AdS vacua.

use super::{rounded_rect, text};
use crate::component::{BranePairVariant, Component, ComponentType, PartName};
use crate::geometry::{Direction, Paint, Point, SceneNode, Shape};
use crate::style::{KindDefaults, StyleSnapshot};

const VACUUM_SIDE: f64 = 4.0;
const GAP: f64 = 0.1;
const LABEL_SIZE: f64 = 0.48;

pub(super) fn layout(
    variant: BranePairVariant,
    style: &KindDefaults,
    snapshot: StyleSnapshot,
) -> Component {
    let vacuum = &style.vacuum;
    let brane = &style.brane;

    let brane_line = SceneNode::shape(
        Shape::Line {
            start: Point::new(0.0, -2.0),
            end: Point::new(0.0, 2.2),
        },
        Paint::stroke(brane.brane_color, brane.brane_stroke_w + 1.0),
    );
    let brane_bottom = -2.0;

    // both boxes sit on the brane's lower end
    let offset = GAP + VACUUM_SIDE / 2.0;
    let center_y = brane_bottom + VACUUM_SIDE / 2.0;
    let outer_center = Point::new(offset, center_y);
    let inner_center = Point::new(-offset, center_y);

    let radii = vacuum.corner_radii();
    let mirrored = [radii[1], radii[0], radii[3], radii[2]];
    let inner_fill = match variant {
        BranePairVariant::Rs => vacuum.vacuum_fill_opa,
        BranePairVariant::Db => vacuum.vacuum_fill_opa + 0.3,
    };
    let vacuum_box = |center: Point, corner_radii: [f64; 4], fill: f64| {
        SceneNode::shape(
            rounded_rect(center, VACUUM_SIDE, VACUUM_SIDE, corner_radii),
            Paint::stroke(vacuum.vacuum_color, vacuum.vacuum_stroke_w)
                .with_fill(vacuum.vacuum_color, fill),
        )
    };
    let inner_vacuum = vacuum_box(inner_center, mirrored, inner_fill);
    let outer_vacuum = vacuum_box(outer_center, radii, vacuum.vacuum_fill_opa);

    let label = |content: &str, center: Point| {
        text(
            content,
            center + Point::new(0.0, -0.5),
            LABEL_SIZE,
            vacuum.vacuum_text_color,
        )
    };
    let inner_label = label("\\Lambda_{5D}= -6 k_{-}^{2}", inner_center);
    let outer_label = match variant {
        BranePairVariant::Rs => label("\\Lambda_{5D}= -6 k_{-}^{2}", outer_center),
        BranePairVariant::Db => label("\\Lambda_{5D}= -6 k_{+}^{2}", outer_center),
    };

    let mut arrow = SceneNode::shape(
        Shape::Arrow {
            start: Point::new(-1.0, 0.0),
            end: Point::new(0.3, 0.0),
        },
        Paint::stroke(style.junction.arrow_color, 6.0),
    );
    if let Some(inner_bounds) = inner_vacuum.bounds() {
        arrow.move_to(inner_bounds.corner(Direction::Left));
    }

    let mut parts = vec![
        (PartName::Brane, brane_line),
        (PartName::InnerVacuum, inner_vacuum),
        (PartName::InnerLabel, inner_label),
        (PartName::OuterVacuum, outer_vacuum),
        (PartName::OuterLabel, outer_label),
    ];
    if variant == BranePairVariant::Rs {
        let symmetry = text(
            "\\mathbb{Z}_{2}",
            Point::new(0.3, 2.3),
            LABEL_SIZE,
            brane.brane_color,
        );
        parts.push((PartName::Symmetry, symmetry));
    }
    parts.push((PartName::NormalArrow, arrow));

    Component::new(ComponentType::BranePair(variant), snapshot, parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{CornerMask, StyleKind};

    fn build(variant: BranePairVariant, style: &KindDefaults) -> Component {
        layout(variant, style, StyleSnapshot::capture(style, &[StyleKind::Vacuum]))
    }

    #[test]
    fn test_vacua_flank_the_brane() {
        let component = build(BranePairVariant::Db, &KindDefaults::default());
        let inner = component.part(PartName::InnerVacuum).unwrap().bounds().unwrap();
        let outer = component.part(PartName::OuterVacuum).unwrap().bounds().unwrap();
        assert!((inner.max.x + 0.1).abs() < 1e-9);
        assert!((outer.min.x - 0.1).abs() < 1e-9);
        assert!((outer.min.y + 2.0).abs() < 1e-9);
        assert!(!inner.overlaps(&outer));

        let arrow = component.part(PartName::NormalArrow).unwrap().center();
        assert!(arrow.approx_eq(Point::new(-4.1, 0.0), 1e-9));
        assert_eq!(component.part_names().last(), Some(&PartName::NormalArrow));
    }

    #[test]
    fn test_symmetry_only_for_rs() {
        let style = KindDefaults::default();
        assert!(build(BranePairVariant::Rs, &style).part(PartName::Symmetry).is_some());
        assert!(build(BranePairVariant::Db, &style).part(PartName::Symmetry).is_none());
    }

    #[test]
    fn test_inner_vacuum_is_mirrored() {
        let mut style = KindDefaults::default();
        style.vacuum.corner_rad = 0.5;
        style.vacuum.corner_rad_direction = CornerMask([1.0, 0.0, 0.0, 0.0]);
        let component = build(BranePairVariant::Rs, &style);
        let corners = |name| match &component.part(name).unwrap().first_primitive().unwrap().shape {
            Shape::RoundedRect { corner_radii, .. } => *corner_radii,
            _ => panic!("vacuum is not a rounded rectangle"),
        };
        assert_eq!(corners(PartName::OuterVacuum), [0.5, 0.0, 0.0, 0.0]);
        assert_eq!(corners(PartName::InnerVacuum), [0.0, 0.5, 0.0, 0.0]);
    }
}
