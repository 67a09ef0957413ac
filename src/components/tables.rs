//! Tables: a header row with highlighted cells, inner grid lines and a frame.
//!
//! Every table node has the same three children so sequencer paths stay
//! stable across kinds:
//!
//! ```text
//! table
//! ├── 0: highlights (one rounded rect per highlighted header cell)
//! ├── 1: cells      (one group per row, one node per cell)
//! └── 2: grid       (inner lines only)
//! ```

use super::{rounded_rect, text};
use crate::component::{Component, ComponentType, EmbeddingLayout, PartName};
use crate::geometry::{Bounds, Direction, Paint, Point, SceneNode, Shape};
use crate::style::{Color, StyleSnapshot, TableStyle};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// Child index of the cell rows inside a table node
pub(crate) const CELLS: usize = 1;

const TEXT_SIZE: f64 = 0.48;
const COORDINATE_SIZE: f64 = 0.6;
const GLYPH_SIDE: f64 = 1.4;
const DOT_RADIUS: f64 = 0.12;

const SUMMARY_ROWS: [[&str; 3]; 6] = [
    ["5D", "4D", "Article"],
    ["\\Lambda_{5}^{(\\pm)} <0, \\: r= a(\\tau)", "\\Lambda_{4}>0", "1807.01570"],
    ["M", "Radiation \\propto \\tfrac{1}{a^{4}}", "1907.04268"],
    ["Strings^{*}", "Dust \\propto \\tfrac{1}{a^{3}}", "1907.04268"],
    ["\\delta g_{\\mu \\nu}", "\\delta g_{ab}", "2202.00545"],
    ["H_{\\mu \\nu \\gamma}", "F_{ab}", "2310.15032"],
];

const ENERGY_ROWS: [[&str; 3]; 5] = [
    ["Scale", "{\\rm Length} (m)", "Energy"],
    ["L", "5.1 \\times10^{-5}", "3.8 \\, {\\rm meV}"],
    ["\\sqrt{\\alpha'}", "1.8 \\times 10^{-20}", "11.2 \\,{\\rm TeV}"],
    ["\\tilde{\\ell}_{10}", "1.4 \\times 10^{-20}", "13.7 \\,{\\rm TeV}"],
    ["\\tilde{\\ell}_{5}", "3.9 \\times 10^{-45}", "5.1 \\times10^{28} \\, {\\rm TeV}"],
];

const NON_COMPACT: [&str; 4] = ["\\alpha", "\\beta", "\\gamma", "\\mathcal{Z}"];
const COMPACT: [&str; 5] = ["\\Theta", "\\Psi", "\\phi_{1}", "\\phi_{2}", "\\phi_{3}"];

/// Header-cell highlight
struct Highlight {
    color: Color,
    opacity: f64,
}

struct Grid {
    rows: Vec<Vec<SceneNode>>,
    v_buff: f64,
    h_buff: f64,
    line_paint: Paint,
    highlights: Vec<Highlight>,
    /// Radius rounding the outer corners of the first and last highlight
    corner_rad: f64,
}

impl Grid {
    /// Lay the cells out centred on the origin
    fn build(self) -> SceneNode {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        let col_widths: Vec<f64> = (0..columns)
            .map(|c| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(c))
                    .map(SceneNode::width)
                    .fold(0.0, f64::max)
                    + self.h_buff
            })
            .collect();
        let row_heights: Vec<f64> = self
            .rows
            .iter()
            .map(|row| row.iter().map(SceneNode::height).fold(0.0, f64::max) + self.v_buff)
            .collect();
        let width: f64 = col_widths.iter().sum();
        let height: f64 = row_heights.iter().sum();

        let left = -width / 2.0;
        let top = height / 2.0;
        let col_centers = running_centers(left, &col_widths, 1.0);
        let row_centers = running_centers(top, &row_heights, -1.0);

        let rows = self
            .rows
            .into_iter()
            .zip(&row_centers)
            .map(|(row, y)| {
                let cells = row
                    .into_iter()
                    .zip(&col_centers)
                    .map(|(mut cell, x)| {
                        cell.move_to(Point::new(*x, *y));
                        cell
                    })
                    .collect();
                SceneNode::group(cells)
            })
            .collect();

        let last = self.highlights.len().saturating_sub(1);
        let highlights = self
            .highlights
            .iter()
            .enumerate()
            .zip(&col_centers)
            .zip(&col_widths)
            .map(|(((i, highlight), x), w)| {
                let mut corners = [0.0; 4];
                if i == 0 {
                    corners[0] = self.corner_rad;
                }
                if i == last {
                    corners[1] = self.corner_rad;
                }
                SceneNode::shape(
                    rounded_rect(Point::new(*x, row_centers[0]), *w, row_heights[0], corners),
                    Paint::fill(highlight.color, highlight.opacity).z(-1),
                )
            })
            .collect();

        let mut lines = Vec::new();
        let mut x = left;
        for w in col_widths.iter().take(columns.saturating_sub(1)) {
            x += w;
            lines.push(SceneNode::shape(
                Shape::Line {
                    start: Point::new(x, top),
                    end: Point::new(x, top - height),
                },
                self.line_paint.clone(),
            ));
        }
        let mut y = top;
        for h in row_heights.iter().take(row_heights.len().saturating_sub(1)) {
            y -= h;
            lines.push(SceneNode::shape(
                Shape::Line {
                    start: Point::new(left, y),
                    end: Point::new(left + width, y),
                },
                self.line_paint.clone(),
            ));
        }

        SceneNode::group(vec![
            SceneNode::group(highlights),
            SceneNode::group(rows),
            SceneNode::group(lines),
        ])
    }
}

fn running_centers(origin: f64, sizes: &[f64], sign: f64) -> Vec<f64> {
    let mut edge = origin;
    sizes
        .iter()
        .map(|size| {
            let center = edge + sign * size / 2.0;
            edge += sign * size;
            center
        })
        .collect()
}

/// Outline drawn around a whole table
fn frame(table: &SceneNode, style: &TableStyle) -> SceneNode {
    let bounds = table
        .bounds()
        .unwrap_or_else(|| Bounds::around(Point::ORIGIN, 0.0, 0.0));
    let mut frame = SceneNode::shape(
        rounded_rect(bounds.center(), bounds.width(), bounds.height(), style.corner_radii()),
        Paint::stroke(style.decorator_color, style.decorator_stroke_w),
    );
    frame.set_z_index(-3);
    frame
}

fn text_rows<const N: usize>(rows: &[[&str; N]], color: Color) -> Vec<Vec<SceneNode>> {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|cell| text(cell, Point::ORIGIN, TEXT_SIZE, color))
                .collect()
        })
        .collect()
}

/// Three-column text table with a highlighted header row
fn text_table<const N: usize>(rows: &[[&str; N]], style: &TableStyle) -> SceneNode {
    let opacity = style.fill_opa + 0.1;
    Grid {
        rows: text_rows(rows, style.text_color),
        v_buff: 0.2,
        h_buff: 0.7,
        line_paint: Paint::stroke(style.text_color, style.stroke_w)
            .with_stroke_opacity((2.0 * style.fill_opa).min(1.0)),
        highlights: [style.hlight_1_color, style.hlight_2_color, style.hlight_3_color]
            .into_iter()
            .map(|color| Highlight { color, opacity })
            .collect(),
        corner_rad: style.corner_radii()[0],
    }
    .build()
}

pub(super) fn summary(style: &TableStyle, snapshot: StyleSnapshot) -> Component {
    let table = text_table(&SUMMARY_ROWS[..], style);
    let frame = frame(&table, style);
    Component::new(
        ComponentType::TableSummary,
        snapshot,
        vec![(PartName::Table, table), (PartName::Frame, frame)],
    )
}

pub(super) fn energy_scales(style: &TableStyle, snapshot: StyleSnapshot) -> Component {
    let table = text_table(&ENERGY_ROWS[..], style);
    let frame = frame(&table, style);
    Component::new(
        ComponentType::TableEnergyScales,
        snapshot,
        vec![(PartName::Table, table), (PartName::Frame, frame)],
    )
}

/// Three flat directions drawn as squares
fn flat_dimension(style: &TableStyle) -> SceneNode {
    let opacity = 2.0 * (style.fill_opa + 0.1);
    SceneNode::shape(
        rounded_rect(Point::ORIGIN, GLYPH_SIDE, GLYPH_SIDE, style.corner_radii()),
        Paint::stroke(style.hlight_1_color, style.stroke_w)
            .with_fill(style.hlight_1_color, opacity.min(1.0)),
    )
}

/// The AdS throat: a diagonal segment with a marker at its lower end
fn ads_dimension(style: &TableStyle) -> SceneNode {
    let start = Point::polar(1.0, FRAC_PI_4 + std::f64::consts::PI);
    let end = Point::polar(1.0, FRAC_PI_4);
    SceneNode::group(vec![
        SceneNode::shape(
            Shape::Line { start, end },
            Paint::stroke(style.hlight_2_color, 0.7),
        ),
        SceneNode::shape(
            Shape::Dot {
                center: start,
                radius: DOT_RADIUS,
            },
            Paint::fill(style.hlight_2_color, 1.0),
        ),
    ])
}

/// A compact circle with a marker at its lowest point
fn compact_dimension(style: &TableStyle) -> SceneNode {
    let radius = 0.7;
    SceneNode::group(vec![
        SceneNode::shape(
            Shape::Circle {
                center: Point::ORIGIN,
                radius,
            },
            Paint::stroke(style.hlight_3_color, style.stroke_w),
        ),
        SceneNode::shape(
            Shape::Dot {
                center: Point::polar(radius, -FRAC_PI_2),
                radius: DOT_RADIUS,
            },
            Paint::fill(style.hlight_3_color, 1.0),
        ),
    ])
}

fn coordinate_table(columns: Vec<(&str, Color, SceneNode)>, style: &TableStyle) -> SceneNode {
    let opacity = style.fill_opa + 0.1;
    let mut labels = Vec::new();
    let mut glyphs = Vec::new();
    let mut highlights = Vec::new();
    for (name, color, glyph) in columns {
        labels.push(text(name, Point::ORIGIN, COORDINATE_SIZE, color));
        glyphs.push(glyph);
        highlights.push(Highlight { color, opacity });
    }
    Grid {
        rows: vec![labels, glyphs],
        v_buff: 0.8,
        h_buff: 1.3,
        line_paint: Paint::stroke(style.decorator_color, style.stroke_w),
        highlights,
        corner_rad: style.corner_radii()[0],
    }
    .build()
}

fn non_compact_columns(style: &TableStyle) -> Vec<(&'static str, Color, SceneNode)> {
    NON_COMPACT
        .iter()
        .enumerate()
        .map(|(i, name)| {
            if i < 3 {
                (*name, style.hlight_1_color, flat_dimension(style))
            } else {
                (*name, style.hlight_2_color, ads_dimension(style))
            }
        })
        .collect()
}

fn compact_columns(style: &TableStyle) -> Vec<(&'static str, Color, SceneNode)> {
    COMPACT
        .iter()
        .map(|name| (*name, style.hlight_3_color, compact_dimension(style)))
        .collect()
}

pub(super) fn embedding(
    layout: EmbeddingLayout,
    style: &TableStyle,
    snapshot: StyleSnapshot,
) -> Component {
    let component_type = ComponentType::TableEmbedding(layout);
    match layout {
        EmbeddingLayout::Together => {
            let mut columns = non_compact_columns(style);
            columns.extend(compact_columns(style));
            let table = coordinate_table(columns, style);
            let frame = frame(&table, style);
            Component::new(
                component_type,
                snapshot,
                vec![(PartName::Table, table), (PartName::Frame, frame)],
            )
        }
        EmbeddingLayout::Split => {
            let non_compact_table = coordinate_table(non_compact_columns(style), style);
            let non_compact_frame = frame(&non_compact_table, style);
            let non_compact = SceneNode::group(vec![non_compact_table, non_compact_frame]);

            let compact_table = coordinate_table(compact_columns(style), style);
            let compact_frame = frame(&compact_table, style);
            let mut compact = SceneNode::group(vec![compact_table, compact_frame]);
            let target_width = non_compact.width();
            let own_width = compact.width();
            if own_width > 0.0 {
                compact.scale(target_width / own_width);
            }
            if let Some(anchor) = non_compact.bounds() {
                compact.next_to(&anchor, Direction::Right, 0.25);
            }

            Component::new(
                component_type,
                snapshot,
                vec![(PartName::NonCompact, non_compact), (PartName::Compact, compact)],
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> StyleSnapshot {
        StyleSnapshot::capture(&Default::default(), &[crate::style::StyleKind::Table])
    }

    #[test]
    fn test_grid_has_only_inner_lines() {
        let table = text_table(&ENERGY_ROWS[..], &TableStyle::default());
        // 3 columns and 5 rows: 2 vertical and 4 horizontal separators
        assert_eq!(table.children()[2].children().len(), 6);
        assert_eq!(table.children()[CELLS].children().len(), 5);
        assert_eq!(table.children()[0].children().len(), 3);
    }

    #[test]
    fn test_cells_do_not_overlap() {
        let table = text_table(&SUMMARY_ROWS[..], &TableStyle::default());
        let cells: Vec<_> = table.children()[CELLS]
            .children()
            .iter()
            .flat_map(|row| row.children())
            .filter_map(SceneNode::bounds)
            .collect();
        for (i, a) in cells.iter().enumerate() {
            for b in &cells[i + 1..] {
                assert!(!a.overlaps(b));
            }
        }
    }

    #[test]
    fn test_highlight_corners_round_outer_edges_only() {
        let style = TableStyle {
            corner_rad: 0.2,
            corner_rad_direction: crate::style::CornerMask::ALL,
            ..TableStyle::default()
        };
        let table = text_table(&SUMMARY_ROWS[..], &style);
        let radii: Vec<[f64; 4]> = table.children()[0]
            .primitives()
            .iter()
            .map(|p| match p.shape {
                Shape::RoundedRect { corner_radii, .. } => corner_radii,
                _ => panic!("highlight is not a rounded rectangle"),
            })
            .collect();
        assert_eq!(radii, vec![[0.2, 0.0, 0.0, 0.0], [0.0; 4], [0.0, 0.2, 0.0, 0.0]]);
    }

    #[test]
    fn test_split_tables_sit_side_by_side() {
        let component = embedding(EmbeddingLayout::Split, &TableStyle::default(), snapshot());
        let left = component.part(PartName::NonCompact).unwrap().bounds().unwrap();
        let right = component.part(PartName::Compact).unwrap().bounds().unwrap();
        assert!(!left.overlaps(&right));
        assert!((right.width() - left.width()).abs() < 1e-9);
        assert!((right.min.x - left.max.x - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_together_has_nine_coordinates() {
        let component = embedding(EmbeddingLayout::Together, &TableStyle::default(), snapshot());
        let table = component.part(PartName::Table).unwrap();
        let rows = table.children()[CELLS].children();
        assert_eq!(rows[0].children().len(), 9);
        assert_eq!(rows[1].children().len(), 9);
        let frame = component.part(PartName::Frame).unwrap().bounds().unwrap();
        let bounds = table.bounds().unwrap();
        assert!((frame.width() - bounds.width()).abs() < 1e-9);
    }
}
