use super::{finish, incompatible, set_value, Sequencer};
use crate::animation::{Animation, Timing, Transform};
use crate::component::{Component, ComponentType, PartName, PartRef, PlotKind, TrackerId};
use crate::error::Result;

/// Field value the instanton marker decays to
const TRUE_VACUUM_SIDE: f64 = 0.7;

fn require_plot(component: &Component, operation: &str, kind: PlotKind) -> Result<()> {
    match component.component_type() {
        ComponentType::Plot(plot, _) if plot == kind => Ok(()),
        _ => Err(incompatible(operation, component)),
    }
}

/// Write each child of `part` in turn
fn write_pieces(component: &Component, part: PartName, timing: Timing) -> Result<Animation> {
    let pieces = component.require(&part.into())?.children().len();
    let steps = (0..pieces)
        .map(|i| Animation::on(PartRef::child(part, &[i]), Transform::Write, timing))
        .collect();
    Ok(Animation::Sequence(steps))
}

impl Sequencer {
    pub fn fade_in_field_position(component: &mut Component, timing: Timing) -> Result<Animation> {
        require_plot(component, "fade_in_field_position", PlotKind::Instanton)?;
        let animation = Animation::on(PartName::FieldPosition, Transform::FadeIn, timing);
        Ok(finish(component, "fade_in_field_position", animation))
    }

    /// Tunnel the field from the false vacuum through the barrier
    pub fn decay(component: &mut Component, timing: Timing) -> Result<Animation> {
        require_plot(component, "decay", PlotKind::Instanton)?;
        let animation = set_value(
            component,
            TrackerId::FieldPosition,
            TRUE_VACUUM_SIDE,
            PartName::FieldPosition,
            timing,
        )?;
        Ok(finish(component, "decay", animation))
    }

    /// Each wave function curve and label, one after another
    pub fn create_wave_functions(component: &mut Component, timing: Timing) -> Result<Animation> {
        require_plot(component, "create_wave_functions", PlotKind::Quantum)?;
        let animation = write_pieces(component, PartName::WaveFunctions, timing)?;
        Ok(finish(component, "create_wave_functions", animation))
    }

    pub fn create_function(component: &mut Component, timing: Timing) -> Result<Animation> {
        require_plot(component, "create_function", PlotKind::Tension)?;
        let animation = write_pieces(component, PartName::Functions, timing)?;
        Ok(finish(component, "create_function", animation))
    }

    pub fn show_potential(component: &mut Component, timing: Timing) -> Result<Animation> {
        require_plot(component, "show_potential", PlotKind::InducedPotential)?;
        let animation = Animation::on(PartName::Potential, Transform::Write, timing);
        Ok(finish(component, "show_potential", animation))
    }

    /// The junction condition contribution
    pub fn show_jc(component: &mut Component, timing: Timing) -> Result<Animation> {
        require_plot(component, "show_jc", PlotKind::InducedPotential)?;
        let animation = Animation::on(PartName::JunctionPotential, Transform::Write, timing);
        Ok(finish(component, "show_jc", animation))
    }

    pub fn nucleate_brane(component: &mut Component, timing: Timing) -> Result<Animation> {
        require_plot(component, "nucleate_brane", PlotKind::InducedPotential)?;
        let animation = Animation::Sequence(vec![
            Animation::on(PartName::BranePosition, Transform::FadeIn, timing),
            set_value(component, TrackerId::BranePosition, 1.7, PartName::BranePosition, timing)?,
        ]);
        Ok(finish(component, "nucleate_brane", animation))
    }

    pub fn accelerate(component: &mut Component, timing: Timing) -> Result<Animation> {
        require_plot(component, "accelerate", PlotKind::InducedPotential)?;
        let animation =
            set_value(component, TrackerId::BranePosition, 2.4, PartName::BranePosition, timing)?;
        Ok(finish(component, "accelerate", animation))
    }

    /// Up the potential wall and back
    pub fn bounce(component: &mut Component, timing: Timing) -> Result<Animation> {
        require_plot(component, "bounce", PlotKind::InducedPotential)?;
        let half = timing.scaled(0.5);
        let up = set_value(
            component,
            TrackerId::BranePosition,
            3.9,
            PartName::BranePosition,
            half,
        )?;
        // the second leg starts where the first one stops
        let down = Animation::on(
            PartName::BranePosition,
            Transform::SetValue {
                tracker: TrackerId::BranePosition,
                from: 3.9,
                to: 1.72,
            },
            half,
        );
        Ok(finish(component, "bounce", Animation::Sequence(vec![up, down])))
    }

    /// Draw the potential with a cosmological constant, then let the brane run away
    pub fn add_cc_and_expand(component: &mut Component, timing: Timing) -> Result<Animation> {
        require_plot(component, "add_cc_and_expand", PlotKind::InducedPotential)?;
        let animation = Animation::Sequence(vec![
            Animation::on(
                PartName::CosmologicalPotential,
                Transform::Write,
                timing.scaled(1.0 / 3.0),
            ),
            Animation::wait(1.0),
            set_value(
                component,
                TrackerId::BranePosition,
                6.0,
                PartName::BranePosition,
                timing.scaled(2.0 / 3.0),
            )?,
        ]);
        Ok(finish(component, "add_cc_and_expand", animation))
    }
}
