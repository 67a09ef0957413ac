//! 2D scene graph: points, bounds, shapes and groups.
//!
//! Everything is expressed in scene units centred on the origin, x to the
//! right and y upwards. Out-of-plane rotations are projected back onto the
//! plane, which is all a flat presentation frame ever shows.

use crate::style::Color;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;
use std::ops::{Add, Mul, Neg, Sub};
use unicode_segmentation::UnicodeSegmentation;

/// Width of one rendered glyph relative to the font size
pub const LABEL_CHAR_WIDTH: f64 = 0.5;
/// Height of a line of text relative to the font size
pub const LABEL_LINE_HEIGHT: f64 = 1.0;

const EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(&self, other: Point) -> f64 {
        (*self - other).length()
    }

    /// In-plane rotation about `center`
    pub fn rotate_about(&self, center: Point, angle: f64) -> Point {
        let (sin, cos) = angle.sin_cos();
        let d = *self - center;
        center + Point::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
    }

    pub fn scale_about(&self, center: Point, factor: f64) -> Point {
        center + (*self - center) * factor
    }

    /// Unit vector at `angle` radians from the x axis
    pub fn polar(radius: f64, angle: f64) -> Point {
        let (sin, cos) = angle.sin_cos();
        Point::new(radius * cos, radius * sin)
    }

    pub fn approx_eq(&self, other: Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// Compass directions used for placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Unit-length step in this direction (diagonals are normalized)
    pub fn unit(&self) -> Point {
        match self {
            Direction::Up => Point::new(0.0, 1.0),
            Direction::Down => Point::new(0.0, -1.0),
            Direction::Left => Point::new(-1.0, 0.0),
            Direction::Right => Point::new(1.0, 0.0),
            Direction::UpLeft => Point::new(-FRAC_1_SQRT_2, FRAC_1_SQRT_2),
            Direction::UpRight => Point::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2),
            Direction::DownLeft => Point::new(-FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
            Direction::DownRight => Point::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
        }
    }

    /// Sign pattern of the direction, `(-1|0|1, -1|0|1)`
    fn signs(&self) -> (f64, f64) {
        let u = self.unit();
        (sign(u.x), sign(u.y))
    }

    pub fn is_diagonal(&self) -> bool {
        let (sx, sy) = self.signs();
        sx != 0.0 && sy != 0.0
    }

    /// The eight directions counter-clockwise from `Right`
    pub fn compass() -> [Direction; 8] {
        [
            Direction::Right,
            Direction::UpRight,
            Direction::Up,
            Direction::UpLeft,
            Direction::Left,
            Direction::DownLeft,
            Direction::Down,
            Direction::DownRight,
        ]
    }
}

fn sign(v: f64) -> f64 {
    if v > EPSILON {
        1.0
    } else if v < -EPSILON {
        -1.0
    } else {
        0.0
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn new(min: Point, max: Point) -> Self {
        Self {
            min: Point::new(min.x.min(max.x), min.y.min(max.y)),
            max: Point::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    pub fn around(center: Point, width: f64, height: f64) -> Self {
        let half = Point::new(width / 2.0, height / 2.0);
        Self::new(center - half, center + half)
    }

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(Bounds::new(first, first), |acc, p| {
            acc.union(&Bounds::new(*p, *p))
        }))
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        (self.min + self.max) * 0.5
    }

    /// Edge midpoint for cardinal directions, corner for diagonals
    pub fn corner(&self, direction: Direction) -> Point {
        let (sx, sy) = direction.signs();
        let c = self.center();
        Point::new(
            c.x + sx * self.width() / 2.0,
            c.y + sy * self.height() / 2.0,
        )
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    pub fn expand(&self, buff: f64) -> Bounds {
        Bounds::new(
            self.min - Point::new(buff, buff),
            self.max + Point::new(buff, buff),
        )
    }

    /// True when the interiors intersect; touching edges do not count.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.min.x < other.max.x - EPSILON
            && other.min.x < self.max.x - EPSILON
            && self.min.y < other.max.y - EPSILON
            && other.min.y < self.max.y - EPSILON
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x - EPSILON
            && p.x <= self.max.x + EPSILON
            && p.y >= self.min.y - EPSILON
            && p.y <= self.max.y + EPSILON
    }
}

/// Rotation axis. `Y` rotations are seen edge-on and project onto the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    #[default]
    Z,
    Y,
}

/// Stroke and fill of one primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub stroke_opacity: f64,
    pub fill_color: Option<Color>,
    pub fill_opacity: f64,
    #[serde(default)]
    pub dashed: bool,
    #[serde(default)]
    pub z_index: i32,
}

impl Paint {
    pub fn stroke(color: Color, width: f64) -> Self {
        Self {
            stroke_color: color,
            stroke_width: width,
            stroke_opacity: 1.0,
            fill_color: None,
            fill_opacity: 0.0,
            dashed: false,
            z_index: 0,
        }
    }

    /// Filled, no outline
    pub fn fill(color: Color, opacity: f64) -> Self {
        Self::stroke(color, 0.0).with_fill(color, opacity)
    }

    pub fn with_fill(mut self, color: Color, opacity: f64) -> Self {
        self.fill_color = Some(color);
        self.fill_opacity = opacity;
        self
    }

    pub fn with_stroke_opacity(mut self, opacity: f64) -> Self {
        self.stroke_opacity = opacity;
        self
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }

    pub fn z(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }
}

/// A coordinate system drawn on screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxesFrame {
    pub center: Point,
    pub x_range: [f64; 2],
    pub y_range: [f64; 2],
    pub x_length: f64,
    pub y_length: f64,
}

impl AxesFrame {
    pub fn new(x_range: [f64; 2], y_range: [f64; 2], x_length: f64, y_length: f64) -> Self {
        Self {
            center: Point::ORIGIN,
            x_range,
            y_range,
            x_length,
            y_length,
        }
    }

    /// Coordinates to scene point
    pub fn c2p(&self, x: f64, y: f64) -> Point {
        let [x0, x1] = self.x_range;
        let [y0, y1] = self.y_range;
        let origin = self.center - Point::new(self.x_length / 2.0, self.y_length / 2.0);
        origin
            + Point::new(
                (x - x0) / (x1 - x0) * self.x_length,
                (y - y0) / (y1 - y0) * self.y_length,
            )
    }

    /// Sample `f` over `[start, end]` as a polyline in scene coordinates
    pub fn plot(&self, f: impl Fn(f64) -> f64, start: f64, end: f64, samples: usize) -> Vec<Point> {
        let samples = samples.max(2);
        (0..samples)
            .map(|i| {
                let x = start + (end - start) * i as f64 / (samples - 1) as f64;
                self.c2p(x, f(x))
            })
            .collect()
    }
}

/// Geometry of a primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Shape {
    Circle {
        center: Point,
        radius: f64,
    },
    Annulus {
        center: Point,
        inner_radius: f64,
        outer_radius: f64,
    },
    RoundedRect {
        center: Point,
        width: f64,
        height: f64,
        /// `[top-left, top-right, bottom-right, bottom-left]`
        corner_radii: [f64; 4],
    },
    Line {
        start: Point,
        end: Point,
    },
    Arrow {
        start: Point,
        end: Point,
    },
    Dot {
        center: Point,
        radius: f64,
    },
    Curve {
        points: Vec<Point>,
    },
    Axes(AxesFrame),
    Label {
        text: String,
        position: Point,
        font_size: f64,
        #[serde(default)]
        rotation: f64,
    },
    Svg {
        source: String,
        center: Point,
        width: f64,
        height: f64,
    },
}

impl Shape {
    pub fn label(text: impl Into<String>, position: Point, font_size: f64) -> Self {
        Shape::Label {
            text: text.into(),
            position,
            font_size,
            rotation: 0.0,
        }
    }

    pub fn bounds(&self) -> Bounds {
        match self {
            Shape::Circle { center, radius } | Shape::Dot { center, radius } => {
                Bounds::around(*center, 2.0 * radius, 2.0 * radius)
            }
            Shape::Annulus {
                center,
                outer_radius,
                ..
            } => Bounds::around(*center, 2.0 * outer_radius, 2.0 * outer_radius),
            Shape::RoundedRect {
                center,
                width,
                height,
                ..
            }
            | Shape::Svg {
                center,
                width,
                height,
                ..
            } => Bounds::around(*center, *width, *height),
            Shape::Line { start, end } | Shape::Arrow { start, end } => Bounds::new(*start, *end),
            Shape::Curve { points } => {
                Bounds::from_points(points).unwrap_or_else(|| Bounds::around(Point::ORIGIN, 0.0, 0.0))
            }
            Shape::Axes(frame) => Bounds::around(frame.center, frame.x_length, frame.y_length),
            Shape::Label {
                text,
                position,
                font_size,
                rotation,
            } => {
                let width = glyph_count(text) * font_size * LABEL_CHAR_WIDTH;
                let height = font_size * LABEL_LINE_HEIGHT;
                let (sin, cos) = rotation.sin_cos();
                Bounds::around(
                    *position,
                    (width * cos).abs() + (height * sin).abs(),
                    (width * sin).abs() + (height * cos).abs(),
                )
            }
        }
    }

    pub fn shift(&mut self, delta: Point) {
        match self {
            Shape::Circle { center, .. }
            | Shape::Dot { center, .. }
            | Shape::Annulus { center, .. }
            | Shape::RoundedRect { center, .. }
            | Shape::Svg { center, .. } => *center = *center + delta,
            Shape::Line { start, end } | Shape::Arrow { start, end } => {
                *start = *start + delta;
                *end = *end + delta;
            }
            Shape::Curve { points } => points.iter_mut().for_each(|p| *p = *p + delta),
            Shape::Axes(frame) => frame.center = frame.center + delta,
            Shape::Label { position, .. } => *position = *position + delta,
        }
    }

    pub fn scale_about(&mut self, factor: f64, about: Point) {
        let s = |p: &mut Point| *p = p.scale_about(about, factor);
        match self {
            Shape::Circle { center, radius } | Shape::Dot { center, radius } => {
                s(center);
                *radius *= factor;
            }
            Shape::Annulus {
                center,
                inner_radius,
                outer_radius,
            } => {
                s(center);
                *inner_radius *= factor;
                *outer_radius *= factor;
            }
            Shape::RoundedRect {
                center,
                width,
                height,
                corner_radii,
            } => {
                s(center);
                *width *= factor;
                *height *= factor;
                corner_radii.iter_mut().for_each(|r| *r *= factor);
            }
            Shape::Svg {
                center,
                width,
                height,
                ..
            } => {
                s(center);
                *width *= factor;
                *height *= factor;
            }
            Shape::Line { start, end } | Shape::Arrow { start, end } => {
                s(start);
                s(end);
            }
            Shape::Curve { points } => points.iter_mut().for_each(s),
            Shape::Axes(frame) => {
                s(&mut frame.center);
                frame.x_length *= factor;
                frame.y_length *= factor;
            }
            Shape::Label {
                position,
                font_size,
                ..
            } => {
                s(position);
                *font_size *= factor;
            }
        }
    }

    pub fn rotate(&mut self, angle: f64, about: Point, axis: Axis) {
        match axis {
            Axis::Z => self.rotate_in_plane(angle, about),
            Axis::Y => self.rotate_edge_on(angle, about),
        }
    }

    fn rotate_in_plane(&mut self, angle: f64, about: Point) {
        let r = |p: &mut Point| *p = p.rotate_about(about, angle);
        match self {
            Shape::Circle { center, .. }
            | Shape::Dot { center, .. }
            | Shape::Annulus { center, .. }
            | Shape::Svg { center, .. }
            | Shape::RoundedRect { center, .. } => r(center),
            Shape::Line { start, end } | Shape::Arrow { start, end } => {
                r(start);
                r(end);
            }
            Shape::Curve { points } => points.iter_mut().for_each(r),
            Shape::Axes(frame) => r(&mut frame.center),
            Shape::Label {
                position, rotation, ..
            } => {
                r(position);
                *rotation += angle;
            }
        }
    }

    fn rotate_edge_on(&mut self, angle: f64, about: Point) {
        let cos = angle.cos();
        let project = |p: &mut Point| p.x = about.x + (p.x - about.x) * cos;
        match self {
            Shape::Circle { center, .. }
            | Shape::Dot { center, .. }
            | Shape::Annulus { center, .. }
            | Shape::Svg { center, .. } => project(center),
            Shape::RoundedRect {
                center,
                width,
                corner_radii,
                ..
            } => {
                project(center);
                *width *= cos.abs();
                if cos < 0.0 {
                    // mirrored: left and right corners swap
                    *corner_radii = [corner_radii[1], corner_radii[0], corner_radii[3], corner_radii[2]];
                }
            }
            Shape::Line { start, end } | Shape::Arrow { start, end } => {
                project(start);
                project(end);
            }
            Shape::Curve { points } => points.iter_mut().for_each(project),
            Shape::Axes(frame) => {
                project(&mut frame.center);
                frame.x_length *= cos.abs();
            }
            Shape::Label { position, .. } => project(position),
        }
    }
}

/// Approximate number of rendered glyphs in a TeX string.
///
/// A control word such as `\\alpha` renders as one glyph, grouping and
/// script markers render as nothing, and a control symbol such as `\\,`
/// is a thin space.
pub fn glyph_count(text: &str) -> f64 {
    let mut count = 0.0;
    let mut graphemes = text.graphemes(true).peekable();
    while let Some(g) = graphemes.next() {
        match g {
            "\\" => {
                let mut word = false;
                while graphemes
                    .peek()
                    .is_some_and(|next| next.chars().all(|c| c.is_ascii_alphabetic()))
                {
                    graphemes.next();
                    word = true;
                }
                if word {
                    count += 1.0;
                } else {
                    graphemes.next();
                    count += 0.25;
                }
            }
            "{" | "}" | "^" | "_" => {}
            " " => count += 0.25,
            _ => count += 1.0,
        }
    }
    count
}

/// A shape with its paint and realization state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub shape: Shape,
    pub paint: Paint,
    /// Realized on screen
    pub visible: bool,
    /// Multiplier applied on top of the paint opacities
    pub opacity: f64,
}

impl Primitive {
    pub fn new(shape: Shape, paint: Paint) -> Self {
        Self {
            shape,
            paint,
            visible: false,
            opacity: 1.0,
        }
    }
}

/// Node of a component's scene graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum SceneNode {
    Primitive(Primitive),
    Group { children: Vec<SceneNode> },
}

impl SceneNode {
    pub fn shape(shape: Shape, paint: Paint) -> Self {
        SceneNode::Primitive(Primitive::new(shape, paint))
    }

    pub fn group(children: Vec<SceneNode>) -> Self {
        SceneNode::Group { children }
    }

    /// Bounding box of everything below this node; `None` for an empty group
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            SceneNode::Primitive(p) => Some(p.shape.bounds()),
            SceneNode::Group { children } => children
                .iter()
                .filter_map(SceneNode::bounds)
                .reduce(|a, b| a.union(&b)),
        }
    }

    pub fn center(&self) -> Point {
        self.bounds().map(|b| b.center()).unwrap_or(Point::ORIGIN)
    }

    pub fn width(&self) -> f64 {
        self.bounds().map(|b| b.width()).unwrap_or(0.0)
    }

    pub fn height(&self) -> f64 {
        self.bounds().map(|b| b.height()).unwrap_or(0.0)
    }

    pub fn for_each_primitive_mut(&mut self, f: &mut impl FnMut(&mut Primitive)) {
        match self {
            SceneNode::Primitive(p) => f(p),
            SceneNode::Group { children } => {
                children.iter_mut().for_each(|c| c.for_each_primitive_mut(f))
            }
        }
    }

    pub fn primitives(&self) -> Vec<&Primitive> {
        match self {
            SceneNode::Primitive(p) => vec![p],
            SceneNode::Group { children } => {
                children.iter().flat_map(SceneNode::primitives).collect()
            }
        }
    }

    pub fn shift(&mut self, delta: Point) -> &mut Self {
        self.for_each_primitive_mut(&mut |p| p.shape.shift(delta));
        self
    }

    pub fn move_to(&mut self, target: Point) -> &mut Self {
        let delta = target - self.center();
        self.shift(delta)
    }

    pub fn scale_about(&mut self, factor: f64, about: Point) -> &mut Self {
        self.for_each_primitive_mut(&mut |p| p.shape.scale_about(factor, about));
        self
    }

    /// Scale about the node's own center
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        let about = self.center();
        self.scale_about(factor, about)
    }

    pub fn rotate(&mut self, angle: f64, about: Point, axis: Axis) -> &mut Self {
        self.for_each_primitive_mut(&mut |p| p.shape.rotate(angle, about, axis));
        self
    }

    /// Place this node beside `anchor` in `direction`, leaving a gap of `buff`.
    pub fn next_to(&mut self, anchor: &Bounds, direction: Direction, buff: f64) -> &mut Self {
        let Some(own) = self.bounds() else {
            return self;
        };
        let target = anchor.corner(direction) + direction_offset(direction, buff);
        let opposite = own.corner(opposite(direction));
        let (sx, sy) = direction.signs();
        // only move along the axes the direction points to, then align centers on the rest
        let delta = Point::new(
            if sx != 0.0 { target.x - opposite.x } else { anchor.center().x - own.center().x },
            if sy != 0.0 { target.y - opposite.y } else { anchor.center().y - own.center().y },
        );
        self.shift(delta)
    }

    /// Shift so the node's edge or corner in `direction` sits on `point`
    pub fn align_edge(&mut self, direction: Direction, point: Point) -> &mut Self {
        let Some(own) = self.bounds() else {
            return self;
        };
        let delta = point - own.corner(direction);
        self.shift(delta)
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.for_each_primitive_mut(&mut |p| p.visible = visible);
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.for_each_primitive_mut(&mut |p| p.opacity = opacity);
    }

    pub fn set_z_index(&mut self, z_index: i32) {
        self.for_each_primitive_mut(&mut |p| p.paint.z_index = z_index);
    }

    /// True when at least one primitive is realized
    pub fn is_visible(&self) -> bool {
        self.primitives().iter().any(|p| p.visible)
    }

    pub fn children(&self) -> &[SceneNode] {
        match self {
            SceneNode::Primitive(_) => &[],
            SceneNode::Group { children } => children,
        }
    }

    /// Descend by child indices
    pub fn descendant(&self, path: &[usize]) -> Option<&SceneNode> {
        match path.split_first() {
            None => Some(self),
            Some((i, rest)) => self.children().get(*i)?.descendant(rest),
        }
    }

    pub fn descendant_mut(&mut self, path: &[usize]) -> Option<&mut SceneNode> {
        match path.split_first() {
            None => Some(self),
            Some((i, rest)) => match self {
                SceneNode::Primitive(_) => None,
                SceneNode::Group { children } => children.get_mut(*i)?.descendant_mut(rest),
            },
        }
    }

    /// First primitive in depth-first order
    pub fn first_primitive(&self) -> Option<&Primitive> {
        match self {
            SceneNode::Primitive(p) => Some(p),
            SceneNode::Group { children } => children.iter().find_map(SceneNode::first_primitive),
        }
    }

    pub fn first_primitive_mut(&mut self) -> Option<&mut Primitive> {
        match self {
            SceneNode::Primitive(p) => Some(p),
            SceneNode::Group { children } => {
                children.iter_mut().find_map(SceneNode::first_primitive_mut)
            }
        }
    }
}

fn opposite(direction: Direction) -> Direction {
    match direction {
        Direction::Up => Direction::Down,
        Direction::Down => Direction::Up,
        Direction::Left => Direction::Right,
        Direction::Right => Direction::Left,
        Direction::UpLeft => Direction::DownRight,
        Direction::UpRight => Direction::DownLeft,
        Direction::DownLeft => Direction::UpRight,
        Direction::DownRight => Direction::UpLeft,
    }
}

fn direction_offset(direction: Direction, buff: f64) -> Point {
    let (sx, sy) = direction.signs();
    Point::new(sx * buff, sy * buff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn square(center: Point, side: f64) -> SceneNode {
        SceneNode::shape(
            Shape::RoundedRect {
                center,
                width: side,
                height: side,
                corner_radii: [0.0; 4],
            },
            Paint::stroke(Color::WHITE, 1.0),
        )
    }

    #[test]
    fn test_point_rotation() {
        let p = Point::new(1.0, 0.0).rotate_about(Point::ORIGIN, PI / 2.0);
        assert!(p.approx_eq(Point::new(0.0, 1.0), 1e-12));
    }

    #[test]
    fn test_bounds_corners_and_overlap() {
        let b = Bounds::around(Point::ORIGIN, 4.0, 2.0);
        assert_eq!(b.corner(Direction::UpRight), Point::new(2.0, 1.0));
        assert_eq!(b.corner(Direction::Down), Point::new(0.0, -1.0));

        let touching = Bounds::around(Point::new(4.0, 0.0), 4.0, 2.0);
        assert!(!b.overlaps(&touching));
        let crossing = Bounds::around(Point::new(3.9, 0.0), 4.0, 2.0);
        assert!(b.overlaps(&crossing));
    }

    #[test]
    fn test_next_to_leaves_buffer() {
        let anchor = Bounds::around(Point::ORIGIN, 2.0, 2.0);
        let mut node = square(Point::new(5.0, 5.0), 1.0);
        node.next_to(&anchor, Direction::Right, 0.25);
        let b = node.bounds().unwrap();
        assert!((b.min.x - 1.25).abs() < 1e-12);
        assert!((b.center().y).abs() < 1e-12);
        assert!(!b.overlaps(&anchor));
    }

    #[test]
    fn test_group_bounds_and_scale() {
        let mut group = SceneNode::group(vec![
            square(Point::new(-1.0, 0.0), 1.0),
            square(Point::new(1.0, 0.0), 1.0),
        ]);
        assert_eq!(group.width(), 3.0);
        group.scale(2.0);
        assert_eq!(group.width(), 6.0);
        assert_eq!(group.center(), Point::ORIGIN);
        assert!(SceneNode::group(vec![]).bounds().is_none());
    }

    #[test]
    fn test_edge_on_rotation_mirrors() {
        let mut node = square(Point::new(2.0, 0.0), 1.0);
        node.rotate(-PI, Point::ORIGIN, Axis::Y);
        assert!(node.center().approx_eq(Point::new(-2.0, 0.0), 1e-12));
        assert!((node.width() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_label_width_counts_glyphs() {
        let tex = Shape::label("k_{+}", Point::ORIGIN, 1.0).bounds();
        let greek = Shape::label("φ₊", Point::ORIGIN, 1.0).bounds();
        assert_eq!(tex.width(), greek.width());
        assert_eq!(glyph_count("\\alpha"), 1.0);
        assert_eq!(glyph_count("\\Lambda_{4}>0"), 4.0);
    }

    #[test]
    fn test_axes_c2p() {
        let axes = AxesFrame::new([0.0, 10.0], [0.0, 4.0], 10.0, 4.0);
        assert!(axes.c2p(0.0, 0.0).approx_eq(Point::new(-5.0, -2.0), 1e-12));
        assert!(axes.c2p(10.0, 4.0).approx_eq(Point::new(5.0, 2.0), 1e-12));
    }

    #[test]
    fn test_descendant_paths() {
        let group = SceneNode::group(vec![
            square(Point::ORIGIN, 1.0),
            SceneNode::group(vec![square(Point::new(3.0, 0.0), 1.0)]),
        ]);
        let inner = group.descendant(&[1, 0]).unwrap();
        assert_eq!(inner.center(), Point::new(3.0, 0.0));
        assert!(group.descendant(&[0, 0]).is_none());
        assert!(group.descendant(&[2]).is_none());
    }
}
