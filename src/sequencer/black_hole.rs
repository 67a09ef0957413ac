use super::{finish, incompatible, move_along, Sequencer};
use crate::animation::{Animation, Timing, Transform};
use crate::component::{BlackHoleVariant, Component, ComponentType, PartName};
use crate::error::Result;

fn black_hole_variant(component: &Component, operation: &str) -> Result<BlackHoleVariant> {
    match component.component_type() {
        ComponentType::BlackHole(variant) => Ok(variant),
        _ => Err(incompatible(operation, component)),
    }
}

impl Sequencer {
    /// The brane pops out of the horizon
    pub fn nucleate(component: &mut Component, timing: Timing, factor: f64) -> Result<Animation> {
        black_hole_variant(component, "nucleate")?;
        let animation = Animation::Group(vec![Animation::on(
            PartName::Brane,
            Transform::scale(factor),
            timing,
        )]);
        Ok(finish(component, "nucleate", animation))
    }

    /// Grow the brane; a spinning hole also sweeps the angle label around its orbit
    pub fn expand_black_hole(
        component: &mut Component,
        timing: Timing,
        factor: f64,
    ) -> Result<Animation> {
        let variant = black_hole_variant(component, "expand")?;
        let mut steps = vec![Animation::on(
            PartName::Brane,
            Transform::scale(factor),
            timing,
        )];
        if variant == BlackHoleVariant::Spinning {
            steps.push(move_along(
                component,
                PartName::AngleLabel.into(),
                PartName::ThetaPath.into(),
                timing,
            )?);
        }
        Ok(finish(component, "expand", Animation::Group(steps)))
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::build;
    use super::*;
    use crate::error::SceneError;

    #[test]
    fn test_nucleate_scales_the_brane() {
        let mut component = build("black_hole", "none");
        let before = component.part(PartName::Brane).unwrap().width();
        let animation = Sequencer::nucleate(&mut component, Timing::linear(0.5), 1.1).unwrap();
        assert!(animation.is_group());
        assert_eq!(animation.duration(), 0.5);
        let after = component.part(PartName::Brane).unwrap().width();
        assert!((after - 1.1 * before).abs() < 1e-9);
    }

    #[test]
    fn test_spinning_expand_orbits_the_angle_label() {
        let mut component = build("black_hole", "spinning");
        let start = component.part(PartName::AngleLabel).unwrap().center();
        let animation =
            Sequencer::expand_black_hole(&mut component, Timing::linear(3.0), 2.5).unwrap();

        assert!(animation.is_group());
        let steps = animation.steps();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].transform, Transform::scale(2.5));
        match &steps[1].transform {
            Transform::MoveAlongPath { path, points } => {
                assert_eq!(path.part, PartName::ThetaPath);
                assert!(points[0].approx_eq(start, 1e-9));
            }
            other => panic!("expected a path move, got {:?}", other),
        }
        // one full loop ends where it started
        let end = component.part(PartName::AngleLabel).unwrap().center();
        assert!(end.approx_eq(start, 1e-9));
    }

    #[test]
    fn test_plain_expand_is_a_single_scale() {
        let mut component = build("black_hole", "fragmentation");
        let animation =
            Sequencer::expand_black_hole(&mut component, Timing::linear(3.0), 2.5).unwrap();
        assert_eq!(animation.steps().len(), 1);
    }

    #[test]
    fn test_nucleate_rejects_other_kinds() {
        let mut component = build("bubble", "empty");
        assert!(matches!(
            Sequencer::nucleate(&mut component, Timing::linear(0.5), 1.1),
            Err(SceneError::IncompatibleVariant { .. })
        ));
    }
}
