//! Style facets shared by every component kind.
//!
//! A component never inherits styling from several bases. Instead it is
//! given one typed facet per style kind it depends on (a bubble reads the
//! brane, vacuum and bubble facets), copied out of the registry when it is
//! built.

use crate::error::{Result, SceneError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// RGBA color, serialized as a `#RRGGBB` / `#RRGGBBAA` hex string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const RED: Color = Color::rgb(0xFC, 0x62, 0x55);
    pub const BLUE: Color = Color::rgb(0x58, 0xC4, 0xDD);
    pub const GREEN: Color = Color::rgb(0x83, 0xC1, 0x67);
    pub const PINK: Color = Color::rgb(0xD1, 0x47, 0xBD);
    pub const YELLOW: Color = Color::rgb(0xF7, 0xD9, 0x6F);
    pub const GRAY: Color = Color::rgb(0x88, 0x88, 0x88);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a hex color (`#RRGGBB`, `#RRGGBBAA`, leading `#` optional) or
    /// one of the named palette colors.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let named = match input.to_ascii_uppercase().as_str() {
            "WHITE" => Some(Self::WHITE),
            "BLACK" => Some(Self::BLACK),
            "RED" => Some(Self::RED),
            "BLUE" => Some(Self::BLUE),
            "GREEN" => Some(Self::GREEN),
            "PINK" => Some(Self::PINK),
            "YELLOW" => Some(Self::YELLOW),
            "GRAY" | "GREY" => Some(Self::GRAY),
            _ => None,
        };
        if named.is_some() {
            return named;
        }

        let hex = input.strip_prefix('#').unwrap_or(input);
        if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a,
        })
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Color::parse(s).ok_or_else(|| format!("'{}' is not a hex or named color", s))
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Which corners of a rectangle are rounded: `[top-left, top-right, bottom-right, bottom-left]`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CornerMask(pub [f64; 4]);

impl CornerMask {
    pub const NONE: CornerMask = CornerMask([0.0; 4]);
    pub const ALL: CornerMask = CornerMask([1.0; 4]);

    /// Effective corner radii for a base radius
    pub fn radii(&self, corner_rad: f64) -> [f64; 4] {
        self.0.map(|factor| factor * corner_rad)
    }
}

/// The closed set of style facets the registry stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleKind {
    Brane,
    Vacuum,
    BlackHole,
    Junction,
    Bubble,
    Table,
    Plot,
}

impl StyleKind {
    pub fn all() -> [StyleKind; 7] {
        [
            StyleKind::Brane,
            StyleKind::Vacuum,
            StyleKind::BlackHole,
            StyleKind::Junction,
            StyleKind::Bubble,
            StyleKind::Table,
            StyleKind::Plot,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StyleKind::Brane => "brane",
            StyleKind::Vacuum => "vacuum",
            StyleKind::BlackHole => "black_hole",
            StyleKind::Junction => "junction",
            StyleKind::Bubble => "bubble",
            StyleKind::Table => "table",
            StyleKind::Plot => "plot",
        }
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleKind {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        StyleKind::all()
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| SceneError::UnknownKind(s.to_string()))
    }
}

/// Styling of branes (bubble walls, black hole horizons, junction lines)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BraneStyle {
    pub brane_color: Color,
    pub brane_radius: f64,
    pub brane_fill_opa: f64,
    pub brane_stroke_w: f64,
    pub brane_text_color: Color,
}

impl Default for BraneStyle {
    fn default() -> Self {
        Self {
            brane_color: Color::RED,
            brane_radius: 1.0,
            brane_fill_opa: 0.1,
            brane_stroke_w: 0.2,
            brane_text_color: Color::WHITE,
        }
    }
}

/// Styling of the AdS vacua surrounding a brane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VacuumStyle {
    pub vacuum_color: Color,
    pub vacuum_fill_opa: f64,
    pub vacuum_stroke_w: f64,
    pub vacuum_text_color: Color,
    pub corner_rad: f64,
    pub corner_rad_direction: CornerMask,
}

impl VacuumStyle {
    pub fn corner_radii(&self) -> [f64; 4] {
        self.corner_rad_direction.radii(self.corner_rad)
    }
}

impl Default for VacuumStyle {
    fn default() -> Self {
        Self {
            vacuum_color: Color::RED,
            vacuum_fill_opa: 0.2,
            vacuum_stroke_w: 0.2,
            vacuum_text_color: Color::WHITE,
            corner_rad: 0.0,
            corner_rad_direction: CornerMask::NONE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlackHoleStyle {
    pub bh_size: f64,
    pub bh_color: Color,
    pub bh_fill_opa: f64,
}

impl Default for BlackHoleStyle {
    fn default() -> Self {
        Self {
            bh_size: 1.0,
            bh_color: Color::BLACK,
            bh_fill_opa: 0.8,
        }
    }
}

/// Normal-vector arrow of the brane pair diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JunctionStyle {
    pub arrow_color: Color,
}

impl Default for JunctionStyle {
    fn default() -> Self {
        Self {
            arrow_color: Color::WHITE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BubbleStyle {
    pub box_height: f64,
    pub box_width: f64,
    pub string_color: Color,
    pub string_stroke_w: f64,
    /// Number of annuli in the field glow
    pub field_gradient: u32,
    pub field_top_color: Color,
    pub field_bulk_color: Color,
}

impl Default for BubbleStyle {
    fn default() -> Self {
        Self {
            box_height: 6.0,
            box_width: 8.0,
            string_color: Color::BLUE,
            string_stroke_w: 1.5,
            field_gradient: 50,
            field_top_color: Color::BLUE,
            field_bulk_color: Color::PINK,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableStyle {
    pub text_color: Color,
    pub hlight_1_color: Color,
    pub hlight_2_color: Color,
    pub hlight_3_color: Color,
    pub decorator_color: Color,
    pub decorator_stroke_w: f64,
    pub corner_rad: f64,
    pub corner_rad_direction: CornerMask,
    pub stroke_w: f64,
    pub stroke_opa: f64,
    pub fill_opa: f64,
}

impl TableStyle {
    pub fn corner_radii(&self) -> [f64; 4] {
        self.corner_rad_direction.radii(self.corner_rad)
    }
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            text_color: Color::WHITE,
            hlight_1_color: Color::GREEN,
            hlight_2_color: Color::RED,
            hlight_3_color: Color::BLUE,
            decorator_color: Color::WHITE,
            decorator_stroke_w: 1.0,
            corner_rad: 0.0,
            corner_rad_direction: CornerMask::NONE,
            stroke_w: 1.0,
            stroke_opa: 1.0,
            fill_opa: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotStyle {
    pub func_main_color: Color,
    pub func_2_color: Color,
    pub func_3_color: Color,
    pub text_color: Color,
    pub axis_opacity: f64,
    pub axis_stroke: f64,
    pub decorator_color: Color,
    pub decorator_stroke_w: f64,
    pub corner_rad: f64,
    pub corner_rad_direction: CornerMask,
    pub fill_opa: f64,
    pub stroke_w: f64,
    pub stroke_opa: f64,
    /// Padding between the axes and the surrounding frame
    pub tightness: f64,
}

impl PlotStyle {
    pub fn corner_radii(&self) -> [f64; 4] {
        self.corner_rad_direction.radii(self.corner_rad)
    }
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            func_main_color: Color::GREEN,
            func_2_color: Color::RED,
            func_3_color: Color::BLUE,
            text_color: Color::WHITE,
            axis_opacity: 0.5,
            axis_stroke: 1.0,
            decorator_color: Color::WHITE,
            decorator_stroke_w: 1.0,
            corner_rad: 0.0,
            corner_rad_direction: CornerMask::NONE,
            fill_opa: 0.1,
            stroke_w: 1.0,
            stroke_opa: 1.0,
            tightness: 0.3,
        }
    }
}

/// A single override value: a number, a color or keyword, or a corner mask
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Mask([f64; 4]),
    Text(String),
}

impl StyleValue {
    fn to_json(&self) -> serde_json::Value {
        match self {
            // Integral numbers stay integral so they can land in integer fields.
            StyleValue::Number(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
                serde_json::Value::from(*n as i64)
            }
            StyleValue::Number(n) => serde_json::Value::from(*n),
            StyleValue::Mask(mask) => serde_json::Value::from(mask.to_vec()),
            StyleValue::Text(text) => serde_json::Value::from(text.clone()),
        }
    }

    fn from_json(value: serde_json::Value) -> Option<Self> {
        serde_json::from_value(value).ok()
    }
}

impl FromStr for StyleValue {
    type Err = String;

    /// `0.4` is a number, `[1,1,0,0]` a mask, anything else text (colors included).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty style value".to_string());
        }
        if let Ok(n) = s.parse::<f64>() {
            return Ok(StyleValue::Number(n));
        }
        if s.starts_with('[') {
            let inner = s.trim_start_matches('[').trim_end_matches(']');
            let parts = inner
                .split(',')
                .map(|p| p.trim().parse::<f64>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| format!("bad mask '{}': {}", s, e))?;
            let mask: [f64; 4] = parts
                .try_into()
                .map_err(|_| format!("mask '{}' must have 4 entries", s))?;
            return Ok(StyleValue::Mask(mask));
        }
        Ok(StyleValue::Text(s.to_string()))
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<Color> for StyleValue {
    fn from(value: Color) -> Self {
        StyleValue::Text(value.to_hex())
    }
}

impl From<CornerMask> for StyleValue {
    fn from(value: CornerMask) -> Self {
        StyleValue::Mask(value.0)
    }
}

/// A named collection of style attributes for one kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StyleBundle {
    Brane(BraneStyle),
    Vacuum(VacuumStyle),
    BlackHole(BlackHoleStyle),
    Junction(JunctionStyle),
    Bubble(BubbleStyle),
    Table(TableStyle),
    Plot(PlotStyle),
}

impl StyleBundle {
    pub fn kind(&self) -> StyleKind {
        match self {
            StyleBundle::Brane(_) => StyleKind::Brane,
            StyleBundle::Vacuum(_) => StyleKind::Vacuum,
            StyleBundle::BlackHole(_) => StyleKind::BlackHole,
            StyleBundle::Junction(_) => StyleKind::Junction,
            StyleBundle::Bubble(_) => StyleKind::Bubble,
            StyleBundle::Table(_) => StyleKind::Table,
            StyleBundle::Plot(_) => StyleKind::Plot,
        }
    }

    /// Attribute keys carried by this bundle, in declaration order
    pub fn keys(&self) -> Vec<String> {
        self.attributes().into_iter().map(|(key, _)| key).collect()
    }

    /// Look up one attribute by key
    pub fn get(&self, key: &str) -> Option<StyleValue> {
        self.attributes()
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    fn attributes(&self) -> Vec<(String, StyleValue)> {
        let value = match self {
            StyleBundle::Brane(s) => serde_json::to_value(s),
            StyleBundle::Vacuum(s) => serde_json::to_value(s),
            StyleBundle::BlackHole(s) => serde_json::to_value(s),
            StyleBundle::Junction(s) => serde_json::to_value(s),
            StyleBundle::Bubble(s) => serde_json::to_value(s),
            StyleBundle::Table(s) => serde_json::to_value(s),
            StyleBundle::Plot(s) => serde_json::to_value(s),
        };
        match value {
            Ok(serde_json::Value::Object(map)) => map
                .into_iter()
                .filter_map(|(k, v)| StyleValue::from_json(v).map(|v| (k, v)))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Replace one attribute. Returns `Ok(false)` when the bundle has no such key.
    pub fn set(&mut self, key: &str, value: &StyleValue) -> Result<bool> {
        match self {
            StyleBundle::Brane(s) => set_field(s, key, value),
            StyleBundle::Vacuum(s) => set_field(s, key, value),
            StyleBundle::BlackHole(s) => set_field(s, key, value),
            StyleBundle::Junction(s) => set_field(s, key, value),
            StyleBundle::Bubble(s) => set_field(s, key, value),
            StyleBundle::Table(s) => set_field(s, key, value),
            StyleBundle::Plot(s) => set_field(s, key, value),
        }
    }
}

fn set_field<T: Serialize + DeserializeOwned>(
    facet: &mut T,
    key: &str,
    value: &StyleValue,
) -> Result<bool> {
    let invalid = |reason: String| SceneError::InvalidStyleValue {
        key: key.to_string(),
        reason,
    };

    let mut json = serde_json::to_value(&*facet).map_err(|e| invalid(e.to_string()))?;
    let Some(fields) = json.as_object_mut() else {
        return Ok(false);
    };
    if !fields.contains_key(key) {
        return Ok(false);
    }
    fields.insert(key.to_string(), value.to_json());
    *facet = serde_json::from_value(json).map_err(|e| invalid(e.to_string()))?;
    Ok(true)
}

/// Per-call style fields that take precedence over the registry snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleOverrides(BTreeMap<String, StyleValue>);

impl StyleOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: StyleValue) {
        self.0.insert(key.into(), value);
    }

    /// Parse a `key=value` assignment as written on the command line
    pub fn parse_assignment(assignment: &str) -> std::result::Result<(String, StyleValue), String> {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| format!("expected key=value, got '{}'", assignment))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(format!("missing key in '{}'", assignment));
        }
        Ok((key.to_string(), value.parse()?))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &StyleValue)> {
        self.0.iter()
    }
}

/// The active bundle for every style kind plus the presentation background
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KindDefaults {
    pub background: Color,
    pub brane: BraneStyle,
    pub vacuum: VacuumStyle,
    pub black_hole: BlackHoleStyle,
    pub junction: JunctionStyle,
    pub bubble: BubbleStyle,
    pub table: TableStyle,
    pub plot: PlotStyle,
}

impl Default for KindDefaults {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            brane: BraneStyle::default(),
            vacuum: VacuumStyle::default(),
            black_hole: BlackHoleStyle::default(),
            junction: JunctionStyle::default(),
            bubble: BubbleStyle::default(),
            table: TableStyle::default(),
            plot: PlotStyle::default(),
        }
    }
}

impl KindDefaults {
    pub fn bundle(&self, kind: StyleKind) -> StyleBundle {
        match kind {
            StyleKind::Brane => StyleBundle::Brane(self.brane.clone()),
            StyleKind::Vacuum => StyleBundle::Vacuum(self.vacuum.clone()),
            StyleKind::BlackHole => StyleBundle::BlackHole(self.black_hole.clone()),
            StyleKind::Junction => StyleBundle::Junction(self.junction.clone()),
            StyleKind::Bubble => StyleBundle::Bubble(self.bubble.clone()),
            StyleKind::Table => StyleBundle::Table(self.table.clone()),
            StyleKind::Plot => StyleBundle::Plot(self.plot.clone()),
        }
    }

    /// Whole-bundle replace of the facet the bundle belongs to
    pub fn set(&mut self, bundle: StyleBundle) {
        match bundle {
            StyleBundle::Brane(s) => self.brane = s,
            StyleBundle::Vacuum(s) => self.vacuum = s,
            StyleBundle::BlackHole(s) => self.black_hole = s,
            StyleBundle::Junction(s) => self.junction = s,
            StyleBundle::Bubble(s) => self.bubble = s,
            StyleBundle::Table(s) => self.table = s,
            StyleBundle::Plot(s) => self.plot = s,
        }
    }

    /// Apply per-call overrides to the facets in `kinds`, first match wins.
    pub fn with_overrides(
        &self,
        kinds: &[StyleKind],
        overrides: &StyleOverrides,
        component: &str,
    ) -> Result<KindDefaults> {
        let mut resolved = self.clone();
        for (key, value) in overrides.iter() {
            let mut applied = false;
            for kind in kinds {
                let mut bundle = resolved.bundle(*kind);
                if bundle.set(key, value)? {
                    resolved.set(bundle);
                    applied = true;
                    break;
                }
            }
            if !applied {
                return Err(SceneError::UnknownStyleKey {
                    key: key.clone(),
                    component: component.to_string(),
                });
            }
        }
        resolved.validate()?;
        Ok(resolved)
    }

    /// Check the value ranges the attribute types cannot express
    pub fn validate(&self) -> Result<()> {
        unit_interval("brane.brane_fill_opa", self.brane.brane_fill_opa)?;
        non_negative("brane.brane_stroke_w", self.brane.brane_stroke_w)?;
        non_negative("brane.brane_radius", self.brane.brane_radius)?;

        unit_interval("vacuum.vacuum_fill_opa", self.vacuum.vacuum_fill_opa)?;
        non_negative("vacuum.vacuum_stroke_w", self.vacuum.vacuum_stroke_w)?;
        mask("vacuum.corner_rad_direction", &self.vacuum.corner_rad_direction)?;

        unit_interval("black_hole.bh_fill_opa", self.black_hole.bh_fill_opa)?;
        non_negative("black_hole.bh_size", self.black_hole.bh_size)?;

        non_negative("bubble.box_width", self.bubble.box_width)?;
        non_negative("bubble.box_height", self.bubble.box_height)?;
        non_negative("bubble.string_stroke_w", self.bubble.string_stroke_w)?;
        if self.bubble.field_gradient == 0 {
            return Err(invalid("bubble.field_gradient", "must be greater than 0".into()));
        }

        unit_interval("table.fill_opa", self.table.fill_opa)?;
        unit_interval("table.stroke_opa", self.table.stroke_opa)?;
        non_negative("table.stroke_w", self.table.stroke_w)?;
        non_negative("table.decorator_stroke_w", self.table.decorator_stroke_w)?;
        mask("table.corner_rad_direction", &self.table.corner_rad_direction)?;

        unit_interval("plot.fill_opa", self.plot.fill_opa)?;
        unit_interval("plot.stroke_opa", self.plot.stroke_opa)?;
        unit_interval("plot.axis_opacity", self.plot.axis_opacity)?;
        non_negative("plot.stroke_w", self.plot.stroke_w)?;
        non_negative("plot.axis_stroke", self.plot.axis_stroke)?;
        non_negative("plot.decorator_stroke_w", self.plot.decorator_stroke_w)?;
        non_negative("plot.tightness", self.plot.tightness)?;
        mask("plot.corner_rad_direction", &self.plot.corner_rad_direction)?;

        Ok(())
    }
}

fn invalid(key: &str, reason: String) -> SceneError {
    SceneError::InvalidStyleValue {
        key: key.to_string(),
        reason,
    }
}

fn unit_interval(key: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(invalid(key, format!("must be within [0, 1], got {}", value)));
    }
    Ok(())
}

fn non_negative(key: &str, value: f64) -> Result<()> {
    if value < 0.0 || value.is_nan() {
        return Err(invalid(key, format!("cannot be negative, got {}", value)));
    }
    Ok(())
}

fn mask(key: &str, mask: &CornerMask) -> Result<()> {
    for (i, factor) in mask.0.iter().enumerate() {
        unit_interval(&format!("{}[{}]", key, i), *factor)?;
    }
    Ok(())
}

/// The style a component was built with: one bundle per facet it reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSnapshot {
    bundles: Vec<StyleBundle>,
}

impl StyleSnapshot {
    pub fn capture(defaults: &KindDefaults, kinds: &[StyleKind]) -> Self {
        Self {
            bundles: kinds.iter().map(|kind| defaults.bundle(*kind)).collect(),
        }
    }

    pub fn bundle(&self, kind: StyleKind) -> Option<&StyleBundle> {
        self.bundles.iter().find(|b| b.kind() == kind)
    }

    pub fn bundles(&self) -> &[StyleBundle] {
        &self.bundles
    }

    /// Look up an attribute across all facets of the snapshot
    pub fn get(&self, key: &str) -> Option<StyleValue> {
        self.bundles.iter().find_map(|b| b.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parsing() {
        assert_eq!(Color::parse("#003E7C"), Some(Color::rgb(0x00, 0x3E, 0x7C)));
        assert_eq!(Color::parse("003e7c"), Some(Color::rgb(0x00, 0x3E, 0x7C)));
        assert_eq!(Color::parse("white"), Some(Color::WHITE));
        assert_eq!(Color::parse("#11223344").map(|c| c.a), Some(0x44));
        assert_eq!(Color::parse("#12345"), None);
        assert_eq!(Color::parse("#GG0000"), None);
        assert_eq!(Color::parse("teal"), None);
    }

    #[test]
    fn test_color_serde_as_hex() {
        let json = serde_json::to_string(&Color::RED).unwrap();
        assert_eq!(json, "\"#FC6255\"");
        let color: Color = serde_json::from_str("\"#9D4EDD\"").unwrap();
        assert_eq!(color, Color::rgb(0x9D, 0x4E, 0xDD));
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }

    #[test]
    fn test_corner_mask_radii() {
        let mask = CornerMask([1.0, 1.0, 0.0, 1.0]);
        assert_eq!(mask.radii(0.1), [0.1, 0.1, 0.0, 0.1]);
        assert_eq!(CornerMask::NONE.radii(3.0), [0.0; 4]);
    }

    #[test]
    fn test_bundle_get_and_keys() {
        let bundle = StyleBundle::Vacuum(VacuumStyle::default());
        assert_eq!(bundle.kind(), StyleKind::Vacuum);
        assert!(bundle.keys().contains(&"corner_rad_direction".to_string()));
        assert_eq!(bundle.get("vacuum_fill_opa"), Some(StyleValue::Number(0.2)));
        assert_eq!(
            bundle.get("vacuum_color"),
            Some(StyleValue::Text("#FC6255".into()))
        );
        assert_eq!(bundle.get("brane_color"), None);
    }

    #[test]
    fn test_bundle_set_replaces_one_field() {
        let mut bundle = StyleBundle::Bubble(BubbleStyle::default());
        assert!(bundle.set("field_gradient", &StyleValue::Number(12.0)).unwrap());
        assert!(bundle
            .set("string_color", &StyleValue::Text("#C6FF7C".into()))
            .unwrap());
        match &bundle {
            StyleBundle::Bubble(style) => {
                assert_eq!(style.field_gradient, 12);
                assert_eq!(style.string_color, Color::rgb(0xC6, 0xFF, 0x7C));
                assert_eq!(style.box_width, 8.0);
            }
            other => panic!("unexpected bundle {:?}", other),
        }
        assert!(!bundle.set("arrow_color", &StyleValue::Number(1.0)).unwrap());
    }

    #[test]
    fn test_bundle_set_rejects_ill_typed_values() {
        let mut bundle = StyleBundle::Brane(BraneStyle::default());
        let err = bundle
            .set("brane_color", &StyleValue::Number(3.0))
            .unwrap_err();
        assert!(matches!(err, SceneError::InvalidStyleValue { .. }));

        let mut bundle = StyleBundle::Bubble(BubbleStyle::default());
        assert!(bundle
            .set("field_gradient", &StyleValue::Number(2.5))
            .is_err());
    }

    #[test]
    fn test_style_value_parsing() {
        assert_eq!("0.4".parse::<StyleValue>(), Ok(StyleValue::Number(0.4)));
        assert_eq!(
            "[1, 1, 0, 0]".parse::<StyleValue>(),
            Ok(StyleValue::Mask([1.0, 1.0, 0.0, 0.0]))
        );
        assert_eq!(
            "#FF6B6B".parse::<StyleValue>(),
            Ok(StyleValue::Text("#FF6B6B".into()))
        );
        assert!("[1, 2]".parse::<StyleValue>().is_err());
        assert!("".parse::<StyleValue>().is_err());
    }

    #[test]
    fn test_parse_assignment() {
        let (key, value) = StyleOverrides::parse_assignment("brane_fill_opa=0.5").unwrap();
        assert_eq!(key, "brane_fill_opa");
        assert_eq!(value, StyleValue::Number(0.5));
        assert!(StyleOverrides::parse_assignment("brane_fill_opa").is_err());
        assert!(StyleOverrides::parse_assignment("=0.5").is_err());
    }

    #[test]
    fn test_overrides_only_touch_requested_kinds() {
        let defaults = KindDefaults::default();
        let overrides = StyleOverrides::new()
            .with("brane_color", Color::BLUE)
            .with("corner_rad", 0.2);
        let resolved = defaults
            .with_overrides(&[StyleKind::Brane, StyleKind::Vacuum], &overrides, "bubble")
            .unwrap();
        assert_eq!(resolved.brane.brane_color, Color::BLUE);
        assert_eq!(resolved.vacuum.corner_rad, 0.2);
        // table also has corner_rad but was not requested
        assert_eq!(resolved.table.corner_rad, 0.0);
        assert_eq!(defaults, KindDefaults::default());
    }

    #[test]
    fn test_unknown_override_key_is_rejected() {
        let overrides = StyleOverrides::new().with("tightness", 0.5);
        let err = KindDefaults::default()
            .with_overrides(&[StyleKind::Brane, StyleKind::BlackHole], &overrides, "black hole")
            .unwrap_err();
        assert!(matches!(err, SceneError::UnknownStyleKey { ref key, .. } if key == "tightness"));
    }

    #[test]
    fn test_snapshot_holds_requested_facets() {
        let snapshot = StyleSnapshot::capture(
            &KindDefaults::default(),
            &[StyleKind::Brane, StyleKind::BlackHole],
        );
        assert_eq!(snapshot.bundles().len(), 2);
        assert!(snapshot.bundle(StyleKind::Vacuum).is_none());
        assert_eq!(snapshot.get("bh_fill_opa"), Some(StyleValue::Number(0.8)));
    }

    #[test]
    fn test_style_kind_from_str() {
        assert_eq!("black-hole".parse::<StyleKind>(), Ok(StyleKind::BlackHole));
        assert_eq!("Plot".parse::<StyleKind>(), Ok(StyleKind::Plot));
        assert!("glow".parse::<StyleKind>().is_err());
    }
}
