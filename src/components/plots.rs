//! Function plots on labelled axes, optionally framed.

use super::{rounded_rect, text};
use crate::component::{Binding, Component, ComponentType, Framing, PartName, PlotKind, TrackerId};
use crate::geometry::{AxesFrame, Bounds, Direction, Paint, Point, SceneNode, Shape};
use crate::style::{Color, PlotStyle, StyleSnapshot};
use std::f64::consts::PI;

const SAMPLES: usize = 200;
const DOT_RADIUS: f64 = 0.08;

/// Field value of the false vacuum
pub(crate) const FALSE_VACUUM: f64 = -0.845649;
/// Scale factor the brane nucleates at
pub(crate) const NUCLEATION_RADIUS: f64 = 1.2;

pub(super) fn layout(
    kind: PlotKind,
    framing: Framing,
    style: &PlotStyle,
    snapshot: StyleSnapshot,
) -> Component {
    let component_type = ComponentType::Plot(kind, framing);
    match kind {
        PlotKind::Instanton => instanton(component_type, framing, style, snapshot),
        PlotKind::Quantum => quantum(component_type, framing, style, snapshot),
        PlotKind::Tension => tension(component_type, framing, style, snapshot),
        PlotKind::InducedPotential => induced_potential(component_type, framing, style, snapshot),
    }
}

/// Point where the axis lines cross
fn axes_origin(axes: &AxesFrame) -> Point {
    let clamp = |v: f64, [lo, hi]: [f64; 2]| v.clamp(lo, hi);
    axes.c2p(clamp(0.0, axes.x_range), clamp(0.0, axes.y_range))
}

fn axes_node(axes: &AxesFrame, color: Color, stroke: f64, opacity: f64) -> SceneNode {
    SceneNode::shape(
        Shape::Axes(axes.clone()),
        Paint::stroke(color, stroke).with_stroke_opacity(opacity),
    )
}

/// Axis names at the far ends of the axis lines
fn axis_labels(
    axes: &AxesFrame,
    (x_name, x_size): (&str, f64),
    (y_name, y_size): (&str, f64),
    color: Color,
) -> [SceneNode; 2] {
    let origin = axes_origin(axes);
    let x_end = Point::new(axes.c2p(axes.x_range[1], 0.0).x, origin.y);
    let y_end = Point::new(origin.x, axes.c2p(0.0, axes.y_range[1]).y);
    let mut x_label = text(x_name, Point::ORIGIN, x_size, color);
    x_label.next_to(&Bounds::around(x_end, 0.0, 0.0), Direction::UpRight, 0.1);
    let mut y_label = text(y_name, Point::ORIGIN, y_size, color);
    y_label.next_to(&Bounds::around(y_end, 0.0, 0.0), Direction::UpRight, 0.1);
    [x_label, y_label]
}

fn curve(axes: &AxesFrame, f: impl Fn(f64) -> f64, [start, end]: [f64; 2], paint: Paint) -> SceneNode {
    SceneNode::shape(
        Shape::Curve {
            points: axes.plot(f, start, end, SAMPLES),
        },
        paint,
    )
}

fn dot(center: Point, radius: f64, paint: Paint) -> SceneNode {
    SceneNode::shape(Shape::Dot { center, radius }, paint)
}

/// Rectangle around the axes, `buff` away from them
fn surrounding_frame(axes: &AxesFrame, buff: f64, style: &PlotStyle) -> SceneNode {
    let bounds = Shape::Axes(axes.clone()).bounds().expand(buff);
    SceneNode::shape(
        rounded_rect(bounds.center(), bounds.width(), bounds.height(), style.corner_radii()),
        Paint::stroke(style.decorator_color, style.decorator_stroke_w)
            .with_fill(style.decorator_color, style.fill_opa),
    )
}

fn instanton_potential(x: f64) -> f64 {
    -2.0 * x.powi(2) + (x - 0.1).powi(4) + 0.64
}

fn instanton(
    component_type: ComponentType,
    framing: Framing,
    style: &PlotStyle,
    snapshot: StyleSnapshot,
) -> Component {
    let axes = AxesFrame::new([-2.1, 2.1], [-1.0, 1.5], 4.2, 2.5);
    let [mut x_label, mut y_label] =
        axis_labels(&axes, ("\\phi", 0.2), ("V(\\phi)", 0.25), style.func_main_color);
    x_label.shift(Point::new(-0.2, 0.0));
    y_label.shift(Point::new(0.0, -0.2));

    let potential = curve(
        &axes,
        instanton_potential,
        [-1.3, 1.6],
        Paint::stroke(style.func_main_color, style.axis_stroke),
    );

    let minimum = |x: f64, name: &str, offset: f64| {
        let at = axes.c2p(x, instanton_potential(x)) + Point::new(0.05, offset);
        text(name, at, 0.2, style.func_main_color)
    };
    let minima = SceneNode::group(vec![
        minimum(FALSE_VACUUM, "V_{+}", 0.25),
        minimum(1.15, "V_{-}", -0.2),
    ]);

    let marker = dot(
        Point::ORIGIN,
        DOT_RADIUS,
        Paint::stroke(style.decorator_color, style.stroke_w).with_fill(style.decorator_color, 1.0),
    );

    let mut parts = vec![
        (
            PartName::Axes,
            axes_node(&axes, style.text_color, style.axis_stroke, style.axis_opacity),
        ),
        (PartName::AxisLabels, SceneNode::group(vec![x_label, y_label])),
        (PartName::Potential, potential),
        (PartName::MinimaLabels, minima),
    ];
    if framing == Framing::Boxed {
        parts.push((PartName::Frame, surrounding_frame(&axes, style.tightness, style)));
    }
    parts.push((PartName::FieldPosition, marker));

    Component::new(component_type, snapshot, parts)
        .with_tracker(TrackerId::FieldPosition, FALSE_VACUUM)
        .with_binding(Binding::AxisPoint {
            tracker: TrackerId::FieldPosition,
            marker: PartName::FieldPosition.into(),
            axes: PartName::Axes.into(),
        })
}

/// Hartle-Hawking no-boundary wave function
fn hartle_hawking(x: f64) -> f64 {
    let u = 0.06 * x.powi(2);
    ((1.0 - (4.0 * (x - 5.0)).tanh()) * (1.0 - (1.0 - u).abs().powf(1.5)).exp()
        + 2.0 / (x + 1.0).sqrt() * (1.0 + (2.0 * (x - 4.0)).tanh()) * (5.0 * (u - 1.0).powi(2)).cos())
        / 3.0
}

/// Vilenkin tunneling wave function
fn vilenkin(x: f64) -> f64 {
    let u = 0.06 * x.powi(2);
    ((1.0 - (x - 4.0).tanh()) * (-1.0 + (1.0 - u).abs().powf(1.5)).exp()
        + ((2.0 * (x - 4.0)).tanh() + 1.0) / 2.0 * (5.0 * (u - 1.0).powi(2) + PI / 4.0).cos()
            / x.sqrt()
            / 2.0)
        / 3.0
}

fn quantum(
    component_type: ComponentType,
    framing: Framing,
    style: &PlotStyle,
    snapshot: StyleSnapshot,
) -> Component {
    let axes = AxesFrame::new([0.01, 7.0], [0.01, 4.0], 6.99, 3.99);
    let potential = curve(
        &axes,
        |x| x.powi(2) - x.powi(4) / 16.0,
        [0.0, 4.07],
        Paint::stroke(style.func_main_color, style.stroke_w),
    );

    let divider = SceneNode::shape(
        Shape::Line {
            start: axes.c2p(4.0, 0.01),
            end: axes.c2p(4.0, 4.0),
        },
        Paint::stroke(style.text_color, style.stroke_w),
    );
    let divider_bounds = divider.bounds().unwrap_or_else(|| Bounds::around(Point::ORIGIN, 0.0, 0.0));
    let mut region_one = text("I", Point::ORIGIN, 0.3, style.text_color);
    region_one.next_to(&divider_bounds, Direction::Left, 1.0);
    let mut region_two = text("II", Point::ORIGIN, 0.3, style.text_color);
    region_two.next_to(&divider_bounds, Direction::Right, 1.0);

    let [x_label, y_label] = axis_labels(&axes, ("a", 0.25), ("V(a)", 0.25), style.text_color);

    let hh_curve = curve(
        &axes,
        hartle_hawking,
        [0.01, 7.0],
        Paint::stroke(style.func_3_color, style.stroke_w),
    );
    let vilenkin_curve = curve(
        &axes,
        vilenkin,
        [0.01, 7.0],
        Paint::stroke(style.func_2_color, style.stroke_w),
    );
    let mut hh_label = text("H-H", Point::ORIGIN, 0.29, style.func_3_color);
    hh_label.align_edge(Direction::Left, axes.center + Point::new(2.5, 0.0));
    let hh_bounds = hh_label.bounds().unwrap_or_else(|| Bounds::around(Point::ORIGIN, 0.0, 0.0));
    let mut vilenkin_label = text("Vilenkin", Point::ORIGIN, 0.29, style.func_2_color);
    vilenkin_label.align_edge(
        Direction::UpLeft,
        hh_bounds.corner(Direction::DownLeft) - Point::new(0.0, 0.1),
    );

    let mut parts = vec![
        (
            PartName::Axes,
            axes_node(&axes, style.text_color, style.axis_stroke, style.axis_opacity),
        ),
        (PartName::Potential, potential),
        (PartName::Divider, divider),
        (PartName::RegionLabels, SceneNode::group(vec![region_one, region_two])),
        (PartName::AxisLabels, SceneNode::group(vec![x_label, y_label])),
    ];
    if framing == Framing::Boxed {
        parts.push((
            PartName::Frame,
            surrounding_frame(&axes, style.tightness + 0.4, style),
        ));
    }
    parts.push((
        PartName::WaveFunctions,
        SceneNode::group(vec![hh_curve, hh_label, vilenkin_curve, vilenkin_label]),
    ));

    Component::new(component_type, snapshot, parts)
}

/// Four-dimensional cosmological constant against brane tension
fn lambda_of_tension(x: f64) -> f64 {
    let (kp, km) = (3.0_f64, 4.0_f64);
    x.powi(2) / 12.0 - 1.5 * (kp.powi(2) + km.powi(2))
        + 6.75 * ((km.powi(2) - kp.powi(2)) / x).powi(2)
}

fn tension(
    component_type: ComponentType,
    framing: Framing,
    style: &PlotStyle,
    snapshot: StyleSnapshot,
) -> Component {
    let axes = AxesFrame::new([0.0, 25.0], [-27.0, 20.0], 14.0, 7.0);
    let [x_label, mut y_label] =
        axis_labels(&axes, ("\\sigma", 0.4), ("\\Lambda_{4}", 0.4), style.text_color);
    y_label.shift(Point::new(0.0, -0.2));

    let main = Paint::stroke(style.func_main_color, style.stroke_w);
    let critical = |x: f64| {
        dot(
            axes.c2p(x, 0.0),
            3.0 * DOT_RADIUS,
            Paint::stroke(style.func_3_color, style.stroke_w)
                .with_fill(style.func_3_color, style.fill_opa),
        )
    };
    let functions = SceneNode::group(vec![
        curve(&axes, lambda_of_tension, [2.4, 3.0], main.clone()),
        curve(
            &axes,
            lambda_of_tension,
            [3.0, 21.0],
            Paint::stroke(style.func_2_color, style.stroke_w).dashed(),
        ),
        curve(&axes, lambda_of_tension, [21.0, 25.0], main),
        critical(3.0),
        critical(21.0),
    ]);

    let mut parts = vec![
        (
            PartName::Axes,
            axes_node(&axes, style.text_color, style.axis_stroke, style.stroke_opa),
        ),
        (PartName::AxisLabels, SceneNode::group(vec![x_label, y_label])),
    ];
    if framing == Framing::Boxed {
        parts.push((PartName::Frame, surrounding_frame(&axes, style.tightness, style)));
    }
    parts.push((PartName::Functions, functions));

    Component::new(component_type, snapshot, parts)
}

/// Effective potential of the brane scale factor.
///
/// `coupling` is the junction-condition strength and `cc` the
/// four-dimensional cosmological constant term.
fn induced(x: f64, coupling: f64, cc: f64) -> f64 {
    let a = NUCLEATION_RADIUS;
    let geometric = (a.powi(2) - x.powi(2)) * (1.0 - x.powi(2)) * (a.powi(2) + 2.0 + x.powi(2))
        / x.powi(4);
    let junction = (x.powi(4) - a.powi(4)
        + (coupling / a) * (2.0 + a.powi(2)).sqrt() * (1.0 - a.powi(2) / x.powi(2)))
    .powi(2)
        / (coupling.powi(2) + x.powi(6));
    1.5 * (geometric - junction - cc / 40.0 * x.powi(2))
}

fn induced_potential(
    component_type: ComponentType,
    framing: Framing,
    style: &PlotStyle,
    snapshot: StyleSnapshot,
) -> Component {
    let axes = AxesFrame::new([NUCLEATION_RADIUS, 6.0], [-1.6, 1.2], 12.0, 6.0);
    let [x_label, mut y_label] =
        axis_labels(&axes, ("a", 0.4), ("V(a)", 0.4), style.func_main_color);
    y_label.shift(Point::new(0.0, -0.5));

    let range = [NUCLEATION_RADIUS, 6.0];
    let potential = curve(
        &axes,
        |x| induced(x, 5.0, 0.0),
        range,
        Paint::stroke(style.func_main_color, style.decorator_stroke_w),
    );
    let junction = curve(
        &axes,
        |x| induced(x, 10.0, 0.0),
        range,
        Paint::stroke(style.func_2_color, style.decorator_stroke_w).dashed(),
    );
    let with_cc = curve(
        &axes,
        |x| induced(x, 5.0, 0.9),
        range,
        Paint::stroke(style.func_3_color, style.decorator_stroke_w),
    );
    let position = dot(
        Point::ORIGIN,
        DOT_RADIUS,
        Paint::stroke(style.decorator_color, style.stroke_w).with_fill(style.decorator_color, 1.0),
    );

    let mut parts = vec![
        (
            PartName::Axes,
            axes_node(&axes, style.func_main_color, style.axis_stroke, style.axis_opacity),
        ),
        (PartName::AxisLabels, SceneNode::group(vec![x_label, y_label])),
    ];
    if framing == Framing::Boxed {
        parts.push((
            PartName::Frame,
            surrounding_frame(&axes, style.tightness + 0.2, style),
        ));
    }
    parts.extend([
        (PartName::Potential, potential),
        (PartName::JunctionPotential, junction),
        (PartName::CosmologicalPotential, with_cc),
        (PartName::BranePosition, position),
    ]);

    Component::new(component_type, snapshot, parts)
        .with_tracker(TrackerId::BranePosition, NUCLEATION_RADIUS)
        .with_binding(Binding::AxisPoint {
            tracker: TrackerId::BranePosition,
            marker: PartName::BranePosition.into(),
            axes: PartName::Axes.into(),
        })
}
