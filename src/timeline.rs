use crate::animation::{Animation, AnimationStep};
use serde::Serialize;

/// Timeline for scheduling the steps of an animation
#[derive(Debug, Clone, Serialize)]
pub struct Timeline {
    total_duration: f64,
    steps: Vec<ScheduledStep>,
}

/// A step with its absolute start and end time in seconds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledStep {
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub step: AnimationStep,
}

impl Timeline {
    /// Create timeline from an animation tree.
    ///
    /// Sequence children run back to back; group children share their
    /// parent's start time.
    pub fn from_animation(animation: &Animation) -> Self {
        let mut steps = Vec::new();
        let total_duration = Self::schedule(animation, 0.0, &mut steps);
        Self {
            total_duration,
            steps,
        }
    }

    /// Schedule `animation` at `start`, returning its end time
    fn schedule(animation: &Animation, start: f64, out: &mut Vec<ScheduledStep>) -> f64 {
        match animation {
            Animation::Step(step) => {
                let end = start + step.duration;
                out.push(ScheduledStep {
                    index: out.len(),
                    start,
                    end,
                    step: step.clone(),
                });
                end
            }
            Animation::Sequence(children) => children
                .iter()
                .fold(start, |cursor, child| Self::schedule(child, cursor, out)),
            Animation::Group(children) => children
                .iter()
                .map(|child| Self::schedule(child, start, out))
                .fold(start, f64::max),
        }
    }

    /// Steps running at time `t`
    pub fn active_at(&self, t: f64) -> Vec<&ScheduledStep> {
        self.steps
            .iter()
            .filter(|s| t >= s.start && t < s.end)
            .collect()
    }

    pub fn steps(&self) -> &[ScheduledStep] {
        &self.steps
    }

    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }

    /// Get total frame count at a given FPS
    pub fn frame_count(&self, fps: u32) -> u32 {
        (self.total_duration * fps as f64).round() as u32
    }

    /// Convert frame number to time in seconds
    pub fn frame_to_time(frame: u32, fps: u32) -> f64 {
        frame as f64 / fps as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Timing, Transform};
    use crate::component::PartName;

    fn sample() -> Animation {
        let t = Timing::linear(1.0);
        Animation::Sequence(vec![
            Animation::on(PartName::Brane, Transform::GrowFromCenter, t),
            Animation::Group(vec![
                Animation::on(PartName::InnerLabel, Transform::FadeIn, t),
                Animation::on(PartName::FieldTop, Transform::Create, t.scaled(2.0)),
            ]),
            Animation::wait(0.5),
        ])
    }

    #[test]
    fn test_timeline_creation() {
        let timeline = Timeline::from_animation(&sample());
        assert_eq!(timeline.steps().len(), 4);
        assert_eq!(timeline.total_duration(), 3.5);
        assert_eq!(timeline.frame_count(30), 105);
    }

    #[test]
    fn test_sequence_and_group_scheduling() {
        let timeline = Timeline::from_animation(&sample());
        let steps = timeline.steps();
        assert_eq!((steps[0].start, steps[0].end), (0.0, 1.0));
        assert_eq!((steps[1].start, steps[1].end), (1.0, 2.0));
        assert_eq!((steps[2].start, steps[2].end), (1.0, 3.0));
        // the wait starts after the longest group member
        assert_eq!((steps[3].start, steps[3].end), (3.0, 3.5));
    }

    #[test]
    fn test_active_at() {
        let timeline = Timeline::from_animation(&sample());
        assert_eq!(timeline.active_at(0.5).len(), 1);
        assert_eq!(timeline.active_at(1.5).len(), 2);
        assert_eq!(timeline.active_at(2.5).len(), 1);
        assert!(timeline.active_at(10.0).is_empty());
        assert_eq!(Timeline::frame_to_time(45, 30), 1.5);
    }
}
