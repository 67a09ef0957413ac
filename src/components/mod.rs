//! Layout of every component kind.
//!
//! Each submodule turns a resolved style into the named sub-parts of one
//! kind. Nothing here reads the registry: the factory resolves styles first
//! and hands the result down.

mod black_hole;
mod brane_pair;
mod bubble;
mod plots;
mod tables;

pub(crate) use tables::CELLS;

#[cfg(test)]
pub(crate) use plots::{FALSE_VACUUM, NUCLEATION_RADIUS};

use crate::assets::AssetLoader;
use crate::component::{Component, ComponentType};
use crate::error::Result;
use crate::geometry::{Paint, Point, SceneNode, Shape};
use crate::style::{Color, KindDefaults, StyleSnapshot};

/// Build the sub-parts of `component_type` from `style`
pub(crate) fn layout(
    component_type: ComponentType,
    style: &KindDefaults,
    assets: &AssetLoader,
) -> Result<Component> {
    let snapshot = StyleSnapshot::capture(style, component_type.style_kinds());
    match component_type {
        ComponentType::Bubble(variant) => bubble::layout(variant, style, assets, snapshot),
        ComponentType::BlackHole(variant) => Ok(black_hole::layout(variant, style, snapshot)),
        ComponentType::BranePair(variant) => Ok(brane_pair::layout(variant, style, snapshot)),
        ComponentType::TableEmbedding(layout) => {
            Ok(tables::embedding(layout, &style.table, snapshot))
        }
        ComponentType::TableSummary => Ok(tables::summary(&style.table, snapshot)),
        ComponentType::TableEnergyScales => Ok(tables::energy_scales(&style.table, snapshot)),
        ComponentType::Plot(kind, framing) => Ok(plots::layout(kind, framing, &style.plot, snapshot)),
    }
}

/// Solid text label
fn text(content: &str, position: Point, font_size: f64, color: Color) -> SceneNode {
    SceneNode::shape(Shape::label(content, position, font_size), Paint::fill(color, 1.0))
}

fn rounded_rect(center: Point, width: f64, height: f64, corner_radii: [f64; 4]) -> Shape {
    Shape::RoundedRect {
        center,
        width,
        height,
        corner_radii,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_catalogue_entry_lays_out() {
        let dir = tempfile::tempdir().unwrap();
        let figures = dir.path().join("figures");
        std::fs::create_dir_all(&figures).unwrap();
        std::fs::write(
            figures.join("weight.svg"),
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 50 100"></svg>"#,
        )
        .unwrap();
        let assets = AssetLoader::new(dir.path());
        let style = KindDefaults::default();

        for component_type in ComponentType::catalogue() {
            let component = layout(component_type, &style, &assets).unwrap();
            assert!(!component.parts().is_empty(), "{} has no parts", component_type);
            assert!(
                component.part(component_type.primary_part()).is_some(),
                "{} lacks its primary part",
                component_type
            );
            // nothing is realized until an animation says so
            for part in component.parts() {
                assert!(!part.node.is_visible(), "{} {:?} visible", component_type, part.name);
            }
        }
    }

    #[test]
    fn test_label_helper() {
        let node = text("k_{+}", Point::new(1.0, 2.0), 0.35, Color::WHITE);
        assert_eq!(node.center(), Point::new(1.0, 2.0));
        assert!(node.first_primitive().unwrap().paint.fill_color.is_some());
    }
}
