//! Canned animations for built components.
//!
//! Every operation reads the component's named sub-parts, returns the
//! [`Animation`] the renderer should play and records its end state on the
//! component, so chained calls build on each other. Operations tied to one
//! variant fail with [`SceneError::IncompatibleVariant`] elsewhere.

mod black_hole;
mod brane_pair;
mod bubble;
mod plots;
mod tables;

use crate::animation::{Animation, Easing, Timing, Transform};
use crate::component::{
    BranePairVariant, BubbleVariant, Component, ComponentType, EmbeddingLayout, PartName,
    PartRef, PlotKind, TrackerId,
};
use crate::error::{Result, SceneError};
use crate::geometry::{Point, Shape};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use tracing::debug;

/// Samples used when a circular path is flattened
const LOOP_SAMPLES: usize = 64;

/// Caller-supplied timing; anything left unset takes the action's default
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionParams {
    pub duration: Option<f64>,
    pub easing: Option<Easing>,
    pub scale: Option<f64>,
}

impl ActionParams {
    fn timing(&self, duration: f64, easing: Easing) -> Timing {
        Timing::new(
            self.duration.unwrap_or(duration),
            self.easing.unwrap_or(easing),
        )
    }

    fn scale_or(&self, factor: f64) -> f64 {
        self.scale.unwrap_or(factor)
    }
}

/// Builds animations for components
pub struct Sequencer;

impl Sequencer {
    /// Every action name [`Sequencer::run`] accepts for `component_type`
    pub fn actions(component_type: ComponentType) -> Vec<&'static str> {
        let mut actions = vec!["fade_in"];
        match component_type {
            ComponentType::Bubble(variant) => {
                actions.extend([
                    "create",
                    "expand",
                    "fade_in_bulk",
                    "create_bubble",
                    "expand_bubble",
                ]);
                match variant {
                    BubbleVariant::EnergyDiscussion => actions.push("fail_creation"),
                    BubbleVariant::Empty => actions.push("show_radius"),
                    _ => {}
                }
            }
            ComponentType::BlackHole(_) => actions.extend(["create", "expand", "nucleate"]),
            ComponentType::BranePair(variant) => {
                actions.push("fade_in_arrow");
                match variant {
                    BranePairVariant::Rs => {
                        actions.extend(["show_symmetry", "restore_symmetry", "show_n_vector_rs"])
                    }
                    BranePairVariant::Db => actions.push("show_n_vector_db"),
                }
            }
            ComponentType::TableEmbedding(EmbeddingLayout::Split) => {
                actions.extend(["move_non_compact", "move_compact"])
            }
            ComponentType::TableEmbedding(EmbeddingLayout::Together) => actions.push("move_all"),
            ComponentType::TableSummary | ComponentType::TableEnergyScales => {}
            ComponentType::Plot(plot, _) => {
                actions.push("create");
                actions.extend(match plot {
                    PlotKind::Instanton => &["fade_in_field_position", "decay"][..],
                    PlotKind::Quantum => &["create_wave_functions"][..],
                    PlotKind::Tension => &["create_function"][..],
                    PlotKind::InducedPotential => &[
                        "show_potential",
                        "show_jc",
                        "nucleate_brane",
                        "accelerate",
                        "bounce",
                        "add_cc_and_expand",
                    ][..],
                });
            }
        }
        actions
    }

    /// Run `action` by name with its default timing, overridden by `params`.
    pub fn run(
        component: &mut Component,
        action: &str,
        params: &ActionParams,
    ) -> Result<Animation> {
        let linear = |d| params.timing(d, Easing::Linear);
        match action {
            "fade_in" => Self::fade_in(component, linear(1.0)),
            "create" => Self::create(component, params),
            "expand" => Self::expand(component, params),
            // bubble
            "fade_in_bulk" => Self::fade_in_bulk(component, linear(1.0)),
            "fail_creation" => Self::fail_creation(
                component,
                params.timing(3.0, Easing::ThereAndBackWithPause),
            ),
            "create_bubble" => Self::create_bubble(component, linear(0.2)),
            "expand_bubble" => {
                Self::expand_bubble(component, linear(6.0), params.scale_or(2.5))
            }
            "show_radius" => Self::show_radius(component, linear(1.0)),
            // black hole
            "nucleate" => Self::nucleate(component, linear(0.5), params.scale_or(1.1)),
            // brane pair
            "fade_in_arrow" => Self::fade_in_arrow(component, linear(2.0)),
            "show_symmetry" => Self::show_symmetry(component, linear(2.0)),
            "restore_symmetry" => Self::restore_symmetry(component, linear(2.0)),
            "show_n_vector_rs" => Self::show_n_vector_rs(component, linear(2.0)),
            "show_n_vector_db" => Self::show_n_vector_db(component, linear(2.0)),
            // tables
            "move_non_compact" => Self::move_non_compact(component, linear(3.0)),
            "move_compact" => Self::move_compact(component, linear(3.0)),
            "move_all" => Self::move_all(component, linear(3.0)),
            // plots
            "fade_in_field_position" => Self::fade_in_field_position(component, linear(0.5)),
            "decay" => Self::decay(component, linear(0.5)),
            "create_wave_functions" => Self::create_wave_functions(component, linear(2.0)),
            "create_function" => Self::create_function(component, linear(1.0)),
            "show_potential" => Self::show_potential(component, linear(2.0)),
            "show_jc" => Self::show_jc(component, linear(2.0)),
            "nucleate_brane" => Self::nucleate_brane(component, linear(0.5)),
            "accelerate" => Self::accelerate(component, linear(0.5)),
            "bounce" => Self::bounce(component, linear(4.0)),
            "add_cc_and_expand" => Self::add_cc_and_expand(component, linear(6.0)),
            other => Err(SceneError::UnknownAction(other.to_string())),
        }
    }

    /// Fade in every part that is not drawn by a later operation
    pub fn fade_in(component: &mut Component, timing: Timing) -> Result<Animation> {
        let deferred = deferred_parts(component.component_type());
        let targets = component
            .part_names()
            .into_iter()
            .filter(|name| !deferred.contains(name))
            .map(PartRef::from)
            .collect();
        let animation = Animation::step(targets, Transform::FadeIn, timing);
        Ok(finish(component, "fade_in", animation))
    }

    /// The kind's build-up animation
    pub fn create(component: &mut Component, params: &ActionParams) -> Result<Animation> {
        let linear = |d| params.timing(d, Easing::Linear);
        match component.component_type() {
            ComponentType::Bubble(_) => Self::create_bubble(component, linear(0.2)),
            ComponentType::BlackHole(_) => {
                Self::nucleate(component, linear(0.5), params.scale_or(1.1))
            }
            ComponentType::Plot(PlotKind::Instanton, _) => {
                Self::fade_in_field_position(component, linear(0.5))
            }
            ComponentType::Plot(PlotKind::Quantum, _) => {
                Self::create_wave_functions(component, linear(2.0))
            }
            ComponentType::Plot(PlotKind::Tension, _) => {
                Self::create_function(component, linear(1.0))
            }
            ComponentType::Plot(PlotKind::InducedPotential, _) => {
                Self::show_potential(component, linear(2.0))
            }
            _ => Err(incompatible("create", component)),
        }
    }

    /// The kind's growth animation
    pub fn expand(component: &mut Component, params: &ActionParams) -> Result<Animation> {
        match component.component_type() {
            ComponentType::Bubble(_) => Self::expand_bubble(
                component,
                params.timing(6.0, Easing::Linear),
                params.scale_or(2.5),
            ),
            ComponentType::BlackHole(_) => Self::expand_black_hole(
                component,
                params.timing(3.0, Easing::Linear),
                params.scale_or(2.5),
            ),
            _ => Err(incompatible("expand", component)),
        }
    }
}

/// Parts that stay hidden through `fade_in` because another operation draws them
fn deferred_parts(component_type: ComponentType) -> &'static [PartName] {
    match component_type {
        ComponentType::BranePair(_) => &[PartName::NormalArrow],
        ComponentType::Plot(PlotKind::Instanton, _) => &[PartName::FieldPosition],
        ComponentType::Plot(PlotKind::Quantum, _) => &[PartName::WaveFunctions],
        ComponentType::Plot(PlotKind::Tension, _) => &[PartName::Functions],
        ComponentType::Plot(PlotKind::InducedPotential, _) => &[
            PartName::Potential,
            PartName::JunctionPotential,
            PartName::CosmologicalPotential,
            PartName::BranePosition,
        ],
        _ => &[],
    }
}

fn incompatible(operation: &str, component: &Component) -> SceneError {
    SceneError::IncompatibleVariant {
        operation: operation.to_string(),
        component: component.component_type().to_string(),
    }
}

/// Fail unless `accepts` holds for the component's type
fn require_variant(
    component: &Component,
    operation: &str,
    accepts: impl FnOnce(ComponentType) -> bool,
) -> Result<()> {
    if accepts(component.component_type()) {
        Ok(())
    } else {
        Err(incompatible(operation, component))
    }
}

/// Record the end state and hand the animation back
fn finish(component: &mut Component, operation: &str, animation: Animation) -> Animation {
    component.apply(&animation);
    debug!(
        component = %component.component_type(),
        operation,
        steps = animation.steps().len(),
        duration = animation.duration(),
        "sequenced animation"
    );
    animation
}

/// Points a node travels through when moved along `path`, starting where `mover` sits.
///
/// Lines run start to end; circles are walked once around from the
/// mover's angle; curves use their samples.
fn path_points(component: &Component, path: &PartRef, mover: &PartRef) -> Result<Vec<Point>> {
    let start = component.require(mover)?.center();
    let shape = component
        .require(path)?
        .first_primitive()
        .map(|p| p.shape.clone());
    let points = match shape {
        Some(Shape::Line { start: a, end: b }) | Some(Shape::Arrow { start: a, end: b }) => {
            vec![a, b]
        }
        Some(Shape::Circle { center, radius }) => {
            let offset = start - center;
            let phase = offset.y.atan2(offset.x);
            (0..=LOOP_SAMPLES)
                .map(|i| {
                    let angle = phase + TAU * i as f64 / LOOP_SAMPLES as f64;
                    center + Point::polar(radius, angle)
                })
                .collect()
        }
        Some(Shape::Curve { points }) => points,
        _ => vec![start, component.require(path)?.center()],
    };
    Ok(points)
}

/// Move `mover` along `path` over `timing`
fn move_along(
    component: &Component,
    mover: PartRef,
    path: PartRef,
    timing: Timing,
) -> Result<Animation> {
    let points = path_points(component, &path, &mover)?;
    Ok(Animation::step(
        vec![mover],
        Transform::MoveAlongPath { path, points },
        timing,
    ))
}

/// Drive `tracker` from its current value to `to`; `target` is the part it moves
fn set_value(
    component: &Component,
    tracker: TrackerId,
    to: f64,
    target: PartName,
    timing: Timing,
) -> Result<Animation> {
    let from = component
        .tracker(tracker)
        .ok_or_else(|| SceneError::MissingPart {
            component: component.component_type().to_string(),
            part: format!("{:?} tracker", tracker),
        })?;
    Ok(Animation::on(
        target,
        Transform::SetValue { tracker, from, to },
        timing,
    ))
}

/// Center of the primary shape, the focal point for radiating effects
fn primary_center(component: &Component) -> Point {
    component.primary_shape().center()
}
