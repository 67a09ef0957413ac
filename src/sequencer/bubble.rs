use super::{finish, incompatible, primary_center, require_variant, set_value, Sequencer};
use crate::animation::{Animation, Timing, Transform};
use crate::component::{BubbleVariant, Component, ComponentType, PartName, PartRef, TrackerId};
use crate::error::Result;
use crate::geometry::Direction;

/// Label gap below the brane center while the radius is shown
const RADIUS_LABEL_BUFF: f64 = 0.2;

fn bubble_variant(component: &Component, operation: &str) -> Result<BubbleVariant> {
    match component.component_type() {
        ComponentType::Bubble(variant) => Ok(variant),
        _ => Err(incompatible(operation, component)),
    }
}

fn targets(names: &[PartName]) -> Vec<PartRef> {
    names.iter().copied().map(PartRef::from).collect()
}

impl Sequencer {
    /// Reveal the surrounding bulk; the energy bubble also draws its gauge
    pub fn fade_in_bulk(component: &mut Component, timing: Timing) -> Result<Animation> {
        let variant = bubble_variant(component, "fade_in_bulk")?;
        let bulk = Animation::step(
            targets(&[PartName::Background, PartName::OuterLabel]),
            Transform::FadeIn,
            timing,
        );
        let animation = match variant {
            BubbleVariant::EnergyDiscussion => Animation::Sequence(vec![
                bulk,
                Animation::on(PartName::EnergyCost, Transform::FadeIn, timing),
                Animation::step(
                    targets(&[PartName::EnergyBar, PartName::EnergyFill]),
                    Transform::Create,
                    timing,
                ),
            ]),
            _ => bulk,
        };
        Ok(finish(component, "fade_in_bulk", animation))
    }

    /// A nucleation attempt without enough energy: the brane swells and collapses
    pub fn fail_creation(component: &mut Component, timing: Timing) -> Result<Animation> {
        require_variant(component, "fail_creation", |t| {
            t == ComponentType::Bubble(BubbleVariant::EnergyDiscussion)
        })?;
        let animation = Animation::Group(vec![
            set_value(component, TrackerId::VacuumEnergy, 2.0, PartName::EnergyFill, timing)?,
            Animation::Sequence(vec![
                Animation::on(
                    PartName::FakeBrane,
                    Transform::scale(0.8),
                    Timing::new(0.0, timing.easing),
                ),
                Animation::on(PartName::FakeBrane, Transform::GrowFromCenter, timing),
            ]),
        ]);
        Ok(finish(component, "fail_creation", animation))
    }

    /// Grow the brane, then bring in what sits inside it
    pub fn create_bubble(component: &mut Component, timing: Timing) -> Result<Animation> {
        let variant = bubble_variant(component, "create_bubble")?;
        let grow = |name: PartName| Animation::on(name, Transform::GrowFromCenter, timing);
        let fade_in =
            |names: &[PartName]| Animation::step(targets(names), Transform::FadeIn, timing);

        let steps = match variant {
            BubbleVariant::EnergyDiscussion => vec![
                set_value(
                    component,
                    TrackerId::VacuumEnergy,
                    2.5,
                    PartName::EnergyFill,
                    timing.scaled(5.0),
                )?,
                Animation::on(PartName::Brane, Transform::GrowFromCenter, timing.scaled(5.0)),
                Animation::on(
                    PartName::EnergyCost,
                    Transform::SetOpacity { opacity: 0.0 },
                    timing,
                ),
            ],
            BubbleVariant::Em => vec![
                grow(PartName::Brane),
                fade_in(&[PartName::InnerLabel]),
                Animation::on(PartName::FieldTop, Transform::Create, timing),
                Animation::wait(1.0),
                Animation::on(PartName::FieldGlow, Transform::Create, timing.scaled(2.0)),
            ],
            BubbleVariant::Strings => vec![
                grow(PartName::BraneAnchors),
                Animation::on(PartName::Strings, Transform::Create, timing),
                fade_in(&[PartName::InnerLabel]),
            ],
            BubbleVariant::Radiation => vec![
                grow(PartName::Brane),
                fade_in(&[PartName::InnerLabel, PartName::Mass]),
            ],
            BubbleVariant::Empty | BubbleVariant::Instanton | BubbleVariant::Gw => vec![
                grow(PartName::Brane),
                fade_in(&[PartName::InnerLabel]),
            ],
        };
        Ok(finish(component, "create_bubble", Animation::Sequence(steps)))
    }

    /// Scale the brane by `factor`, with whatever moves along with it
    pub fn expand_bubble(
        component: &mut Component,
        timing: Timing,
        factor: f64,
    ) -> Result<Animation> {
        let variant = bubble_variant(component, "expand_bubble")?;
        let scale =
            |name: PartName, factor: f64| Animation::on(name, Transform::scale(factor), timing);

        let animation = match variant {
            BubbleVariant::EnergyDiscussion => Animation::Sequence(vec![
                set_value(
                    component,
                    TrackerId::VacuumEnergy,
                    4.5,
                    PartName::EnergyFill,
                    timing.scaled(1.0 / 3.0),
                )?,
                scale(PartName::Brane, factor),
            ]),
            BubbleVariant::Gw => {
                let focal_point = primary_center(component);
                Animation::Group(vec![
                    scale(PartName::Brane, factor),
                    Animation::Sequence(vec![
                        Animation::on(
                            PartName::BroadcastWaves,
                            Transform::scale(0.6 * factor),
                            Timing::new(0.0, timing.easing),
                        ),
                        Animation::on(
                            PartName::BroadcastWaves,
                            Transform::broadcast(focal_point),
                            timing,
                        ),
                    ]),
                ])
            }
            BubbleVariant::Em => Animation::Group(vec![
                scale(PartName::Brane, 0.8 * factor),
                Animation::step(
                    targets(&[PartName::FieldTop, PartName::FieldGlow]),
                    Transform::scale(0.8 * factor),
                    timing,
                ),
            ]),
            // the strings follow the anchors through their tether
            BubbleVariant::Strings => {
                Animation::Group(vec![scale(PartName::BraneAnchors, factor)])
            }
            BubbleVariant::Empty | BubbleVariant::Instanton | BubbleVariant::Radiation => {
                Animation::Group(vec![scale(PartName::Brane, factor)])
            }
        };
        Ok(finish(component, "expand_bubble", animation))
    }

    /// Drop the inner label below the center and draw the radius
    pub fn show_radius(component: &mut Component, timing: Timing) -> Result<Animation> {
        require_variant(component, "show_radius", |t| {
            t == ComponentType::Bubble(BubbleVariant::Empty)
        })?;
        let center = primary_center(component);
        let label = component.require(&PartName::InnerLabel.into())?;
        let half_height = label.height() / 2.0;
        let target = center + Direction::Down.unit() * (RADIUS_LABEL_BUFF + half_height);

        let animation = Animation::Sequence(vec![
            Animation::on(
                PartName::InnerLabel,
                Transform::MoveTo { point: target },
                timing,
            ),
            Animation::on(PartName::RadiusInfo, Transform::Create, timing),
        ]);
        Ok(finish(component, "show_radius", animation))
    }
}
