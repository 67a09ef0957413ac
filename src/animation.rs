//! Declarative animation values handed to the renderer.

use crate::component::{PartRef, TrackerId};
use crate::geometry::{Axis, Point};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rate functions mapping normalized time to progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    Smooth,
    RushInto,
    RushFrom,
    ThereAndBack,
    ThereAndBackWithPause,
    DoubleSmooth,
}

const INFLECTION: f64 = 10.0;
const PAUSE_RATIO: f64 = 1.0 / 3.0;

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn smooth(t: f64) -> f64 {
    let error = sigmoid(-INFLECTION / 2.0);
    ((sigmoid(INFLECTION * (t - 0.5)) - error) / (1.0 - 2.0 * error)).clamp(0.0, 1.0)
}

impl Easing {
    /// Progress at `t`, clamped to `[0, 1]`
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Smooth => smooth(t),
            Easing::RushInto => 2.0 * smooth(t / 2.0),
            Easing::RushFrom => 2.0 * smooth(t / 2.0 + 0.5) - 1.0,
            Easing::ThereAndBack => {
                let t = if t < 0.5 { 2.0 * t } else { 2.0 * (1.0 - t) };
                smooth(t)
            }
            Easing::ThereAndBackWithPause => {
                let a = 1.0 / PAUSE_RATIO;
                if t < 0.5 - PAUSE_RATIO / 2.0 {
                    smooth(a * t)
                } else if t < 0.5 + PAUSE_RATIO / 2.0 {
                    1.0
                } else {
                    smooth(a - a * t)
                }
            }
            Easing::DoubleSmooth => {
                if t < 0.5 {
                    0.5 * smooth(2.0 * t)
                } else {
                    0.5 * (1.0 + smooth(2.0 * t - 1.0))
                }
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Smooth => "smooth",
            Easing::RushInto => "rush_into",
            Easing::RushFrom => "rush_from",
            Easing::ThereAndBack => "there_and_back",
            Easing::ThereAndBackWithPause => "there_and_back_with_pause",
            Easing::DoubleSmooth => "double_smooth",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Duration and rate function of one sequencer call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    pub duration: f64,
    pub easing: Easing,
}

impl Timing {
    pub fn new(duration: f64, easing: Easing) -> Self {
        Self { duration, easing }
    }

    pub fn linear(duration: f64) -> Self {
        Self::new(duration, Easing::Linear)
    }

    /// Same easing, duration multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.duration * factor, self.easing)
    }
}

/// What happens to the targets of a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Transform {
    FadeIn,
    FadeOut,
    GrowFromCenter,
    /// Stroke drawn progressively
    Create,
    /// Text or curve written progressively
    Write,
    Scale {
        factor: f64,
        /// Scale about this point instead of each target's own center
        #[serde(default, skip_serializing_if = "Option::is_none")]
        about: Option<Point>,
    },
    Rotate {
        angle: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        about: Option<Point>,
        #[serde(default)]
        axis: Axis,
    },
    MoveTo {
        point: Point,
    },
    MoveAlongPath {
        path: PartRef,
        /// Sampled path, first point to last
        points: Vec<Point>,
    },
    SetValue {
        tracker: TrackerId,
        from: f64,
        to: f64,
    },
    SetOpacity {
        opacity: f64,
    },
    /// Copies of the target radiating from `focal_point` while fading
    Broadcast {
        focal_point: Point,
        n_copies: u32,
        initial_opacity: f64,
        final_opacity: f64,
    },
    Wait,
}

impl Transform {
    /// Broadcast with the usual fifteen copies fading from opaque to clear
    pub fn broadcast(focal_point: Point) -> Self {
        Transform::Broadcast {
            focal_point,
            n_copies: 15,
            initial_opacity: 1.0,
            final_opacity: 0.0,
        }
    }

    pub fn scale(factor: f64) -> Self {
        Transform::Scale {
            factor,
            about: None,
        }
    }
}

/// One transition for a set of sub-parts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationStep {
    pub targets: Vec<PartRef>,
    pub transform: Transform,
    pub duration: f64,
    pub easing: Easing,
}

/// Steps composed strictly in order (`Sequence`) or concurrently (`Group`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Animation {
    Step(AnimationStep),
    Sequence(Vec<Animation>),
    Group(Vec<Animation>),
}

impl Animation {
    pub fn step(targets: Vec<PartRef>, transform: Transform, timing: Timing) -> Self {
        Animation::Step(AnimationStep {
            targets,
            transform,
            duration: timing.duration,
            easing: timing.easing,
        })
    }

    /// Step on a single target
    pub fn on(target: impl Into<PartRef>, transform: Transform, timing: Timing) -> Self {
        Self::step(vec![target.into()], transform, timing)
    }

    pub fn wait(duration: f64) -> Self {
        Self::step(Vec::new(), Transform::Wait, Timing::linear(duration))
    }

    /// Sequences add up, groups last as long as their longest child
    pub fn duration(&self) -> f64 {
        match self {
            Animation::Step(step) => step.duration,
            Animation::Sequence(children) => children.iter().map(Animation::duration).sum(),
            Animation::Group(children) => children
                .iter()
                .map(Animation::duration)
                .fold(0.0, f64::max),
        }
    }

    /// Leaf steps in declaration order
    pub fn steps(&self) -> Vec<&AnimationStep> {
        match self {
            Animation::Step(step) => vec![step],
            Animation::Sequence(children) | Animation::Group(children) => {
                children.iter().flat_map(Animation::steps).collect()
            }
        }
    }

    pub fn as_step(&self) -> Option<&AnimationStep> {
        match self {
            Animation::Step(step) => Some(step),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Animation] {
        match self {
            Animation::Step(_) => &[],
            Animation::Sequence(children) | Animation::Group(children) => children,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Animation::Group(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Animation::Sequence(_))
    }
}
