//! Built components: the (kind, variant) catalogue, named sub-parts and
//! the value trackers that drive geometry.

use crate::animation::{Animation, AnimationStep, Transform};
use crate::error::{Result, SceneError};
use crate::geometry::{Bounds, Direction, Point, SceneNode, Shape};
use crate::style::{StyleKind, StyleSnapshot};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The closed set of component kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    BranePair,
    BlackHole,
    Bubble,
    TableEmbedding,
    TableSummary,
    TableEnergyScales,
    PlotInstanton,
    PlotQuantum,
    PlotInducedPotential,
    PlotTension,
}

impl ComponentKind {
    pub fn all() -> [ComponentKind; 10] {
        [
            ComponentKind::BranePair,
            ComponentKind::BlackHole,
            ComponentKind::Bubble,
            ComponentKind::TableEmbedding,
            ComponentKind::TableSummary,
            ComponentKind::TableEnergyScales,
            ComponentKind::PlotInstanton,
            ComponentKind::PlotQuantum,
            ComponentKind::PlotInducedPotential,
            ComponentKind::PlotTension,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::BranePair => "brane_pair",
            ComponentKind::BlackHole => "black_hole",
            ComponentKind::Bubble => "bubble",
            ComponentKind::TableEmbedding => "table_bh_embedding",
            ComponentKind::TableSummary => "table_summary",
            ComponentKind::TableEnergyScales => "table_energy_scales",
            ComponentKind::PlotInstanton => "plot_instanton",
            ComponentKind::PlotQuantum => "plot_quantum",
            ComponentKind::PlotInducedPotential => "plot_induced_potential",
            ComponentKind::PlotTension => "plot_tension",
        }
    }

    fn alias(&self) -> Option<&'static str> {
        match self {
            ComponentKind::BranePair => Some("ads_jc"),
            ComponentKind::TableEmbedding => Some("table_embedding"),
            _ => None,
        }
    }

    /// Accepted variant names, canonical spelling
    pub fn variants(&self) -> &'static [&'static str] {
        match self {
            ComponentKind::BranePair => BranePairVariant::NAMES,
            ComponentKind::BlackHole => BlackHoleVariant::NAMES,
            ComponentKind::Bubble => BubbleVariant::NAMES,
            ComponentKind::TableEmbedding => EmbeddingLayout::NAMES,
            ComponentKind::TableSummary | ComponentKind::TableEnergyScales => &["default"],
            ComponentKind::PlotInstanton
            | ComponentKind::PlotQuantum
            | ComponentKind::PlotInducedPotential
            | ComponentKind::PlotTension => Framing::NAMES,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        ComponentKind::all()
            .into_iter()
            .find(|kind| kind.as_str() == normalized || kind.alias() == Some(normalized.as_str()))
            .ok_or_else(|| SceneError::UnknownKind(s.to_string()))
    }
}

/// Declares a closed variant enum with its accepted spellings.
macro_rules! variant_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal $(| $alias:literal)*),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
            pub const NAMES: &'static [&'static str] = &[$($label),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Case-insensitive lookup
            pub fn parse(s: &str) -> Option<Self> {
                let s = s.trim();
                $(
                    if s.eq_ignore_ascii_case($label) $(|| s.eq_ignore_ascii_case($alias))* {
                        return Some($name::$variant);
                    }
                )+
                None
            }
        }
    };
}

variant_enum!(
    /// Randall-Sundrum (mirrored vacua) or dark bubble (distinct inside and outside)
    BranePairVariant {
        Rs => "RS",
        Db => "DB",
    }
);

variant_enum!(BlackHoleVariant {
    Plain => "none",
    Fragmentation => "fragmentation",
    Spinning => "spinning",
});

variant_enum!(BubbleVariant {
    Empty => "empty",
    Instanton => "instanton",
    Radiation => "radiation",
    Strings => "strings",
    Gw => "GW",
    Em => "em",
    EnergyDiscussion => "energy_discussion",
});

variant_enum!(EmbeddingLayout {
    Together => "together",
    Split => "split",
});

variant_enum!(
    /// Whether a plot is drawn inside a surrounding frame
    Framing {
        Boxed => "box" | "default",
        Plain => "plain",
    }
);

/// Which function a plot component draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlotKind {
    Instanton,
    Quantum,
    InducedPotential,
    Tension,
}

/// A fully resolved (kind, variant) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
    BranePair(BranePairVariant),
    BlackHole(BlackHoleVariant),
    Bubble(BubbleVariant),
    TableEmbedding(EmbeddingLayout),
    TableSummary,
    TableEnergyScales,
    Plot(PlotKind, Framing),
}

impl ComponentType {
    /// Resolve kind and variant strings, failing on anything outside the catalogue
    pub fn parse(kind: &str, variant: &str) -> Result<Self> {
        let kind: ComponentKind = kind.parse()?;
        let unknown = || SceneError::UnknownVariant {
            kind: kind.to_string(),
            variant: variant.to_string(),
        };

        let component_type = match kind {
            ComponentKind::BranePair => {
                ComponentType::BranePair(BranePairVariant::parse(variant).ok_or_else(unknown)?)
            }
            ComponentKind::BlackHole => {
                ComponentType::BlackHole(BlackHoleVariant::parse(variant).ok_or_else(unknown)?)
            }
            ComponentKind::Bubble => {
                ComponentType::Bubble(BubbleVariant::parse(variant).ok_or_else(unknown)?)
            }
            ComponentKind::TableEmbedding => {
                ComponentType::TableEmbedding(EmbeddingLayout::parse(variant).ok_or_else(unknown)?)
            }
            ComponentKind::TableSummary | ComponentKind::TableEnergyScales => {
                if !variant.trim().eq_ignore_ascii_case("default") {
                    return Err(unknown());
                }
                if kind == ComponentKind::TableSummary {
                    ComponentType::TableSummary
                } else {
                    ComponentType::TableEnergyScales
                }
            }
            ComponentKind::PlotInstanton => {
                ComponentType::Plot(PlotKind::Instanton, Framing::parse(variant).ok_or_else(unknown)?)
            }
            ComponentKind::PlotQuantum => {
                ComponentType::Plot(PlotKind::Quantum, Framing::parse(variant).ok_or_else(unknown)?)
            }
            ComponentKind::PlotInducedPotential => ComponentType::Plot(
                PlotKind::InducedPotential,
                Framing::parse(variant).ok_or_else(unknown)?,
            ),
            ComponentKind::PlotTension => {
                ComponentType::Plot(PlotKind::Tension, Framing::parse(variant).ok_or_else(unknown)?)
            }
        };
        Ok(component_type)
    }

    /// Every (kind, variant) pair, in catalogue order
    pub fn catalogue() -> Vec<ComponentType> {
        let mut all = Vec::new();
        all.extend(BranePairVariant::ALL.iter().map(|v| ComponentType::BranePair(*v)));
        all.extend(BlackHoleVariant::ALL.iter().map(|v| ComponentType::BlackHole(*v)));
        all.extend(BubbleVariant::ALL.iter().map(|v| ComponentType::Bubble(*v)));
        all.extend(EmbeddingLayout::ALL.iter().map(|v| ComponentType::TableEmbedding(*v)));
        all.push(ComponentType::TableSummary);
        all.push(ComponentType::TableEnergyScales);
        for plot in [
            PlotKind::Instanton,
            PlotKind::Quantum,
            PlotKind::InducedPotential,
            PlotKind::Tension,
        ] {
            all.extend(Framing::ALL.iter().map(|f| ComponentType::Plot(plot, *f)));
        }
        all
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            ComponentType::BranePair(_) => ComponentKind::BranePair,
            ComponentType::BlackHole(_) => ComponentKind::BlackHole,
            ComponentType::Bubble(_) => ComponentKind::Bubble,
            ComponentType::TableEmbedding(_) => ComponentKind::TableEmbedding,
            ComponentType::TableSummary => ComponentKind::TableSummary,
            ComponentType::TableEnergyScales => ComponentKind::TableEnergyScales,
            ComponentType::Plot(PlotKind::Instanton, _) => ComponentKind::PlotInstanton,
            ComponentType::Plot(PlotKind::Quantum, _) => ComponentKind::PlotQuantum,
            ComponentType::Plot(PlotKind::InducedPotential, _) => ComponentKind::PlotInducedPotential,
            ComponentType::Plot(PlotKind::Tension, _) => ComponentKind::PlotTension,
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            ComponentType::BranePair(v) => v.as_str(),
            ComponentType::BlackHole(v) => v.as_str(),
            ComponentType::Bubble(v) => v.as_str(),
            ComponentType::TableEmbedding(v) => v.as_str(),
            ComponentType::TableSummary | ComponentType::TableEnergyScales => "default",
            ComponentType::Plot(_, framing) => framing.as_str(),
        }
    }

    /// Style facets the layout reads, in override lookup order
    pub fn style_kinds(&self) -> &'static [StyleKind] {
        match self {
            ComponentType::Bubble(_) => &[StyleKind::Brane, StyleKind::Vacuum, StyleKind::Bubble],
            ComponentType::BlackHole(_) => &[StyleKind::Brane, StyleKind::BlackHole],
            ComponentType::BranePair(_) => {
                &[StyleKind::Vacuum, StyleKind::Brane, StyleKind::Junction]
            }
            ComponentType::TableEmbedding(_)
            | ComponentType::TableSummary
            | ComponentType::TableEnergyScales => &[StyleKind::Table],
            ComponentType::Plot(..) => &[StyleKind::Plot],
        }
    }

    /// The sub-part animation methods treat as the main shape
    pub fn primary_part(&self) -> PartName {
        match self {
            ComponentType::Bubble(BubbleVariant::Strings) => PartName::BraneAnchors,
            ComponentType::Bubble(_) | ComponentType::BlackHole(_) | ComponentType::BranePair(_) => {
                PartName::Brane
            }
            ComponentType::TableEmbedding(EmbeddingLayout::Split) => PartName::NonCompact,
            ComponentType::TableEmbedding(EmbeddingLayout::Together)
            | ComponentType::TableSummary
            | ComponentType::TableEnergyScales => PartName::Table,
            ComponentType::Plot(..) => PartName::Axes,
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind(), self.variant_name())
    }
}

impl Serialize for ComponentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ComponentType", 2)?;
        state.serialize_field("kind", self.kind().as_str())?;
        state.serialize_field("variant", self.variant_name())?;
        state.end()
    }
}

/// Name of a top-level sub-part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartName {
    // bubbles
    Background,
    OuterLabel,
    Brane,
    InnerLabel,
    RadiusInfo,
    Mass,
    BroadcastWaves,
    BraneAnchors,
    Strings,
    FieldTop,
    FieldGlow,
    FakeBrane,
    EnergyCost,
    EnergyBar,
    EnergyFill,
    // black holes
    Horizon,
    ChargeLabel,
    MassLabel,
    AngleLabel,
    ThetaPath,
    // brane pair
    InnerVacuum,
    OuterVacuum,
    Symmetry,
    NormalArrow,
    // tables
    Table,
    Frame,
    NonCompact,
    Compact,
    // plots
    Axes,
    AxisLabels,
    Potential,
    MinimaLabels,
    FieldPosition,
    Divider,
    RegionLabels,
    WaveFunctions,
    Functions,
    JunctionPotential,
    CosmologicalPotential,
    BranePosition,
}

/// Reference to a node: a top-level part, then child indices below it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartRef {
    pub part: PartName,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<usize>,
}

impl PartRef {
    pub fn new(part: PartName) -> Self {
        Self {
            part,
            path: Vec::new(),
        }
    }

    pub fn child(part: PartName, path: &[usize]) -> Self {
        Self {
            part,
            path: path.to_vec(),
        }
    }
}

impl From<PartName> for PartRef {
    fn from(part: PartName) -> Self {
        PartRef::new(part)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubPart {
    pub name: PartName,
    pub node: SceneNode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackerId {
    /// Energy available for nucleation, drawn as the energy bar fill
    VacuumEnergy,
    /// Field value of the instanton plot marker
    FieldPosition,
    /// Scale factor of the brane in the induced potential plot
    BranePosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tracker {
    pub id: TrackerId,
    pub value: f64,
}

/// Geometry that follows component state.
///
/// Bindings are resolved after every state change, so the geometry always
/// matches the current tracker values and anchor positions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "binding", rename_all = "snake_case")]
pub enum Binding {
    /// Rounded bar whose width equals the tracker value, left-aligned in `container`
    BarWidth {
        tracker: TrackerId,
        bar: PartRef,
        container: PartRef,
    },
    /// Node centred on the axes point `(tracker, 0)`
    AxisPoint {
        tracker: TrackerId,
        marker: PartRef,
        axes: PartRef,
    },
    /// Line `i` of `lines` starts at the center of child `i` of `anchors`
    Tether { anchors: PartRef, lines: PartRef },
}

/// An instantiated visual entity of a given kind and variant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    component_type: ComponentType,
    style: StyleSnapshot,
    parts: Vec<SubPart>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    trackers: Vec<Tracker>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    bindings: Vec<Binding>,
}

impl Component {
    pub(crate) fn new(
        component_type: ComponentType,
        style: StyleSnapshot,
        parts: Vec<(PartName, SceneNode)>,
    ) -> Self {
        Self {
            component_type,
            style,
            parts: parts
                .into_iter()
                .map(|(name, node)| SubPart { name, node })
                .collect(),
            trackers: Vec::new(),
            bindings: Vec::new(),
        }
    }

    pub(crate) fn with_tracker(mut self, id: TrackerId, value: f64) -> Self {
        self.trackers.push(Tracker { id, value });
        self
    }

    pub(crate) fn with_binding(mut self, binding: Binding) -> Self {
        self.bindings.push(binding);
        self.resolve_bindings();
        self
    }

    pub fn component_type(&self) -> ComponentType {
        self.component_type
    }

    pub fn kind(&self) -> ComponentKind {
        self.component_type.kind()
    }

    pub fn style(&self) -> &StyleSnapshot {
        &self.style
    }

    pub fn parts(&self) -> &[SubPart] {
        &self.parts
    }

    pub fn part_names(&self) -> Vec<PartName> {
        self.parts.iter().map(|p| p.name).collect()
    }

    pub fn index_of(&self, name: PartName) -> Option<usize> {
        self.parts.iter().position(|p| p.name == name)
    }

    pub fn part(&self, name: PartName) -> Option<&SceneNode> {
        self.parts.iter().find(|p| p.name == name).map(|p| &p.node)
    }

    pub fn primary_index(&self) -> usize {
        self.index_of(self.component_type.primary_part()).unwrap_or(0)
    }

    /// The shape animation methods scale, grow and move
    pub fn primary_shape(&self) -> &SceneNode {
        &self.parts[self.primary_index()].node
    }

    pub fn node(&self, target: &PartRef) -> Option<&SceneNode> {
        self.part(target.part)?.descendant(&target.path)
    }

    fn node_mut(&mut self, target: &PartRef) -> Option<&mut SceneNode> {
        self.parts
            .iter_mut()
            .find(|p| p.name == target.part)?
            .node
            .descendant_mut(&target.path)
    }

    /// Like [`Component::node`], but a missing node is an error
    pub fn require(&self, target: &PartRef) -> Result<&SceneNode> {
        self.node(target).ok_or_else(|| SceneError::MissingPart {
            component: self.component_type.to_string(),
            part: format!("{:?}{:?}", target.part, target.path),
        })
    }

    pub fn tracker(&self, id: TrackerId) -> Option<f64> {
        self.trackers.iter().find(|t| t.id == id).map(|t| t.value)
    }

    pub fn trackers(&self) -> &[Tracker] {
        &self.trackers
    }

    pub fn set_tracker(&mut self, id: TrackerId, value: f64) {
        if let Some(tracker) = self.trackers.iter_mut().find(|t| t.id == id) {
            tracker.value = value;
        }
        self.resolve_bindings();
    }

    /// Bounding box over every sub-part
    pub fn bounds(&self) -> Option<Bounds> {
        self.parts
            .iter()
            .filter_map(|p| p.node.bounds())
            .reduce(|a, b| a.union(&b))
    }

    /// Mutable access used while laying out
    pub(crate) fn part_mut(&mut self, name: PartName) -> Option<&mut SceneNode> {
        self.parts.iter_mut().find(|p| p.name == name).map(|p| &mut p.node)
    }

    /// Record the end state of `animation`: visibility, geometry and tracker values.
    pub fn apply(&mut self, animation: &Animation) {
        for step in animation.steps() {
            self.apply_step(step);
        }
    }

    fn apply_step(&mut self, step: &AnimationStep) {
        if let Transform::SetValue { tracker, to, .. } = &step.transform {
            if let Some(t) = self.trackers.iter_mut().find(|t| t.id == *tracker) {
                t.value = *to;
            }
        }

        // an easing that ends at zero leaves the targets where they started
        if step.easing.apply(1.0).abs() < 1e-9 {
            self.resolve_bindings();
            return;
        }

        for target in &step.targets {
            let Some(node) = self.node_mut(target) else {
                continue;
            };
            match &step.transform {
                Transform::FadeIn
                | Transform::GrowFromCenter
                | Transform::Create
                | Transform::Write => {
                    node.set_visible(true);
                    node.set_opacity(1.0);
                }
                Transform::FadeOut => node.set_visible(false),
                Transform::Scale { factor, about } => {
                    let about = about.unwrap_or_else(|| node.center());
                    node.scale_about(*factor, about);
                }
                Transform::Rotate { angle, about, axis } => {
                    let about = about.unwrap_or_else(|| node.center());
                    node.rotate(*angle, about, *axis);
                }
                Transform::MoveTo { point } => {
                    node.move_to(*point);
                }
                Transform::MoveAlongPath { points, .. } => {
                    if let Some(end) = points.last() {
                        node.move_to(*end);
                    }
                }
                Transform::SetOpacity { opacity } => node.set_opacity(*opacity),
                Transform::SetValue { .. } | Transform::Broadcast { .. } | Transform::Wait => {}
            }
        }

        self.resolve_bindings();
    }

    fn resolve_bindings(&mut self) {
        let bindings = self.bindings.clone();
        for binding in &bindings {
            match binding {
                Binding::BarWidth {
                    tracker,
                    bar,
                    container,
                } => {
                    let Some(width) = self.tracker(*tracker) else {
                        continue;
                    };
                    let Some(left) = self
                        .node(container)
                        .and_then(SceneNode::bounds)
                        .map(|b| b.corner(Direction::Left))
                    else {
                        continue;
                    };
                    if let Some(SceneNode::Primitive(p)) = self.node_mut(bar) {
                        if let Shape::RoundedRect { center, width: w, .. } = &mut p.shape {
                            *w = width.max(0.0);
                            *center = Point::new(left.x + *w / 2.0, left.y);
                        }
                    }
                }
                Binding::AxisPoint {
                    tracker,
                    marker,
                    axes,
                } => {
                    let Some(value) = self.tracker(*tracker) else {
                        continue;
                    };
                    let target = match self.node(axes).and_then(SceneNode::first_primitive) {
                        Some(p) => match &p.shape {
                            Shape::Axes(frame) => frame.c2p(value, 0.0),
                            _ => continue,
                        },
                        None => continue,
                    };
                    if let Some(node) = self.node_mut(marker) {
                        node.move_to(target);
                    }
                }
                Binding::Tether { anchors, lines } => {
                    let starts: Vec<Point> = match self.node(anchors) {
                        Some(node) => node.children().iter().map(SceneNode::center).collect(),
                        None => continue,
                    };
                    let Some(SceneNode::Group { children }) = self.node_mut(lines) else {
                        continue;
                    };
                    for (line, anchor) in children.iter_mut().zip(starts) {
                        if let SceneNode::Primitive(p) = line {
                            if let Shape::Line { start, .. } = &mut p.shape {
                                *start = anchor;
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{AxesFrame, Paint};
    use crate::style::{Color, KindDefaults};

    fn dot(center: Point) -> SceneNode {
        SceneNode::shape(
            Shape::Dot {
                center,
                radius: 0.05,
            },
            Paint::fill(Color::WHITE, 1.0),
        )
    }

    fn snapshot() -> StyleSnapshot {
        StyleSnapshot::capture(&KindDefaults::default(), &[StyleKind::Plot])
    }

    #[test]
    fn test_kind_parsing_accepts_separators_and_aliases() {
        assert_eq!("black-hole".parse::<ComponentKind>(), Ok(ComponentKind::BlackHole));
        assert_eq!("ads_jc".parse::<ComponentKind>(), Ok(ComponentKind::BranePair));
        assert_eq!(
            "table-embedding".parse::<ComponentKind>(),
            Ok(ComponentKind::TableEmbedding)
        );
        assert!(matches!(
            "wormhole".parse::<ComponentKind>(),
            Err(SceneError::UnknownKind(_))
        ));
    }

    #[test]
    fn test_type_parsing() {
        assert_eq!(
            ComponentType::parse("bubble", "gw"),
            Ok(ComponentType::Bubble(BubbleVariant::Gw))
        );
        assert_eq!(
            ComponentType::parse("plot-tension", "default"),
            Ok(ComponentType::Plot(PlotKind::Tension, Framing::Boxed))
        );
        assert_eq!(
            ComponentType::parse("table_summary", "default"),
            Ok(ComponentType::TableSummary)
        );
        let err = ComponentType::parse("bubble", "plasma").unwrap_err();
        assert_eq!(
            err,
            SceneError::UnknownVariant {
                kind: "bubble".into(),
                variant: "plasma".into()
            }
        );
        assert!(ComponentType::parse("table_summary", "split").is_err());
    }

    #[test]
    fn test_catalogue_covers_every_kind_and_variant() {
        let catalogue = ComponentType::catalogue();
        for kind in ComponentKind::all() {
            for variant in kind.variants() {
                let parsed = ComponentType::parse(kind.as_str(), variant).unwrap();
                assert!(catalogue.contains(&parsed), "{} missing", parsed);
            }
        }
        assert_eq!(catalogue.len(), 2 + 3 + 7 + 2 + 1 + 1 + 4 * 2);
    }

    #[test]
    fn test_component_type_serializes_names() {
        let json = serde_json::to_value(ComponentType::BlackHole(BlackHoleVariant::Plain)).unwrap();
        assert_eq!(json["kind"], "black_hole");
        assert_eq!(json["variant"], "none");
    }

    #[test]
    fn test_axis_point_binding_follows_tracker() {
        let axes = AxesFrame::new([0.0, 10.0], [-1.0, 1.0], 10.0, 2.0);
        let component = Component::new(
            ComponentType::Plot(PlotKind::Instanton, Framing::Plain),
            snapshot(),
            vec![
                (PartName::Axes, SceneNode::shape(Shape::Axes(axes), Paint::stroke(Color::WHITE, 1.0))),
                (PartName::FieldPosition, dot(Point::new(9.0, 9.0))),
            ],
        )
        .with_tracker(TrackerId::FieldPosition, 2.0)
        .with_binding(Binding::AxisPoint {
            tracker: TrackerId::FieldPosition,
            marker: PartName::FieldPosition.into(),
            axes: PartName::Axes.into(),
        });

        let marker = component.part(PartName::FieldPosition).unwrap();
        assert!(marker.center().approx_eq(Point::new(-3.0, 0.0), 1e-9));

        let mut component = component;
        component.set_tracker(TrackerId::FieldPosition, 7.0);
        let marker = component.part(PartName::FieldPosition).unwrap();
        assert!(marker.center().approx_eq(Point::new(2.0, 0.0), 1e-9));
    }

    #[test]
    fn test_require_reports_missing_part() {
        let component = Component::new(
            ComponentType::TableSummary,
            snapshot(),
            vec![(PartName::Table, SceneNode::group(vec![]))],
        );
        assert!(component.require(&PartName::Table.into()).is_ok());
        let err = component.require(&PartRef::child(PartName::Table, &[3])).unwrap_err();
        assert!(matches!(err, SceneError::MissingPart { .. }));
        assert!(component.require(&PartName::Frame.into()).is_err());
    }
}
