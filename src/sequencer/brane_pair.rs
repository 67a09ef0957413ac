use super::{finish, require_variant, Sequencer};
use crate::animation::{Animation, Timing, Transform};
use crate::component::{BranePairVariant, Component, ComponentType, PartName};
use crate::error::{Result, SceneError};
use crate::geometry::{Axis, Direction, Point};
use std::f64::consts::PI;

fn is_rs(component_type: ComponentType) -> bool {
    component_type == ComponentType::BranePair(BranePairVariant::Rs)
}

fn is_db(component_type: ComponentType) -> bool {
    component_type == ComponentType::BranePair(BranePairVariant::Db)
}

fn brane_center(component: &Component) -> Result<Point> {
    Ok(component.require(&PartName::Brane.into())?.center())
}

/// Midpoint of the component's right edge
fn right_edge(component: &Component) -> Result<Point> {
    component
        .bounds()
        .map(|b| b.corner(Direction::Right))
        .ok_or_else(|| SceneError::MissingPart {
            component: component.component_type().to_string(),
            part: "bounds".to_string(),
        })
}

fn flip_about(about: Point, timing: Timing) -> Animation {
    Animation::on(
        PartName::OuterVacuum,
        Transform::Rotate {
            angle: PI,
            about: Some(about),
            axis: Axis::Y,
        },
        timing,
    )
}

impl Sequencer {
    pub fn fade_in_arrow(component: &mut Component, timing: Timing) -> Result<Animation> {
        require_variant(component, "fade_in_arrow", |t| {
            matches!(t, ComponentType::BranePair(_))
        })?;
        let animation = Animation::on(PartName::NormalArrow, Transform::FadeIn, timing);
        Ok(finish(component, "fade_in_arrow", animation))
    }

    /// Fold the outer vacuum over the brane onto the inner one
    pub fn show_symmetry(component: &mut Component, timing: Timing) -> Result<Animation> {
        require_variant(component, "show_symmetry", is_rs)?;
        let half = timing.scaled(0.5);
        let animation = Animation::Sequence(vec![
            Animation::on(PartName::OuterLabel, Transform::FadeOut, half),
            flip_about(brane_center(component)?, half),
        ]);
        Ok(finish(component, "show_symmetry", animation))
    }

    /// Undo [`Sequencer::show_symmetry`]
    pub fn restore_symmetry(component: &mut Component, timing: Timing) -> Result<Animation> {
        require_variant(component, "restore_symmetry", is_rs)?;
        let half = timing.scaled(0.5);
        let animation = Animation::Sequence(vec![
            flip_about(brane_center(component)?, half),
            Animation::on(PartName::OuterLabel, Transform::FadeIn, half),
        ]);
        Ok(finish(component, "restore_symmetry", animation))
    }

    /// Carry the normal vector onto the brane, flip it, and push it out the far side
    pub fn show_n_vector_rs(component: &mut Component, timing: Timing) -> Result<Animation> {
        require_variant(component, "show_n_vector_rs", is_rs)?;
        let third = timing.scaled(1.0 / 3.0);
        let center = brane_center(component)?;
        let right = right_edge(component)?;

        let animation = Animation::Sequence(vec![
            Animation::on(
                PartName::NormalArrow,
                Transform::MoveTo { point: center },
                third,
            ),
            Animation::on(
                PartName::NormalArrow,
                Transform::Rotate {
                    angle: PI,
                    about: Some(center),
                    axis: Axis::Z,
                },
                third,
            ),
            Animation::Group(vec![
                Animation::on(
                    PartName::NormalArrow,
                    Transform::Rotate {
                        angle: PI,
                        about: None,
                        axis: Axis::Z,
                    },
                    third,
                ),
                Animation::on(
                    PartName::NormalArrow,
                    Transform::MoveTo { point: right },
                    third,
                ),
            ]),
        ]);
        Ok(finish(component, "show_n_vector_rs", animation))
    }

    /// Slide the normal vector across to the outer side
    pub fn show_n_vector_db(component: &mut Component, timing: Timing) -> Result<Animation> {
        require_variant(component, "show_n_vector_db", is_db)?;
        let right = right_edge(component)?;
        let animation = Animation::on(
            PartName::NormalArrow,
            Transform::MoveTo { point: right },
            timing,
        );
        Ok(finish(component, "show_n_vector_db", animation))
    }
}
