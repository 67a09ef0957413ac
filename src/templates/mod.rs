pub mod parser;

pub use parser::TemplateParser;

use crate::error::{Result, SceneError};
use crate::registry::StyleRegistry;
use crate::style::{KindDefaults, StyleBundle, StyleKind};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use tracing::{error, info, warn};

/// Built-in style templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[value(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TemplateName {
    DefaultTemplate,
    CosmicDawn,
    QuantumDusk,
    DarkEnergy,
    GreenMint,
    BlueIce,
    RedAutumn,
    BeamerBlue,
    BeamerGreen,
}

impl TemplateName {
    /// Substituted for any name that is not in the catalogue
    pub const FALLBACK: TemplateName = TemplateName::DefaultTemplate;

    pub fn all() -> [TemplateName; 9] {
        [
            TemplateName::DefaultTemplate,
            TemplateName::CosmicDawn,
            TemplateName::QuantumDusk,
            TemplateName::DarkEnergy,
            TemplateName::GreenMint,
            TemplateName::BlueIce,
            TemplateName::RedAutumn,
            TemplateName::BeamerBlue,
            TemplateName::BeamerGreen,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateName::DefaultTemplate => "default_template",
            TemplateName::CosmicDawn => "cosmic_dawn",
            TemplateName::QuantumDusk => "quantum_dusk",
            TemplateName::DarkEnergy => "dark_energy",
            TemplateName::GreenMint => "green_mint",
            TemplateName::BlueIce => "blue_ice",
            TemplateName::RedAutumn => "red_autumn",
            TemplateName::BeamerBlue => "beamer_blue",
            TemplateName::BeamerGreen => "beamer_green",
        }
    }

    /// Exact catalogue lookup, `None` for unknown names
    pub fn parse(name: &str) -> Option<TemplateName> {
        Self::all().into_iter().find(|t| t.as_str() == name.trim())
    }

    fn source(&self) -> &'static str {
        match self {
            TemplateName::DefaultTemplate => include_str!("default_template.toml"),
            TemplateName::CosmicDawn => include_str!("cosmic_dawn.toml"),
            TemplateName::QuantumDusk => include_str!("quantum_dusk.toml"),
            TemplateName::DarkEnergy => include_str!("dark_energy.toml"),
            TemplateName::GreenMint => include_str!("green_mint.toml"),
            TemplateName::BlueIce => include_str!("blue_ice.toml"),
            TemplateName::RedAutumn => include_str!("red_autumn.toml"),
            TemplateName::BeamerBlue => include_str!("beamer_blue.toml"),
            TemplateName::BeamerGreen => include_str!("beamer_green.toml"),
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named set of style bundles, one per kind, applied together
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Template {
    pub name: String,
    pub styles: KindDefaults,
}

impl Template {
    /// Parse one of the embedded templates
    pub fn builtin(name: TemplateName) -> Result<Template> {
        let styles = TemplateParser::parse_str(name.source()).map_err(|e| {
            SceneError::InvalidTemplate {
                name: name.to_string(),
                reason: format!("{:#}", e),
            }
        })?;
        Ok(Template {
            name: name.to_string(),
            styles,
        })
    }

    pub fn bundle(&self, kind: StyleKind) -> StyleBundle {
        self.styles.bundle(kind)
    }
}

pub struct TemplateLoader;

impl TemplateLoader {
    /// Load a template into `registry` by name.
    ///
    /// Unknown names are not an error: a warning is logged and
    /// [`TemplateName::FALLBACK`] is loaded instead. Returns the template
    /// that ended up active.
    pub fn load_template(registry: &StyleRegistry, name: &str) -> TemplateName {
        let resolved = match TemplateName::parse(name) {
            Some(known) => known,
            None => {
                warn!(
                    requested = name,
                    fallback = %TemplateName::FALLBACK,
                    "unknown template, loading fallback"
                );
                TemplateName::FALLBACK
            }
        };

        match Template::builtin(resolved) {
            Ok(template) => Self::apply(registry, &template),
            Err(e) => {
                // embedded documents are covered by tests; keep the build going regardless
                error!(error = %e, "built-in template rejected, using baseline styles");
                registry.replace_all(KindDefaults::default(), resolved.as_str());
            }
        }
        resolved
    }

    /// Make `template` the active style table, replacing every kind at once
    pub fn apply(registry: &StyleRegistry, template: &Template) {
        registry.replace_all(template.styles.clone(), &template.name);
        info!(
            template = %template.name,
            background = %template.styles.background,
            "template loaded"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, CornerMask, TableStyle};

    #[test]
    fn test_every_builtin_template_parses() {
        for name in TemplateName::all() {
            let template = Template::builtin(name).unwrap();
            assert_eq!(template.name, name.as_str());
        }
    }

    #[test]
    fn test_template_names_round_trip() {
        for name in TemplateName::all() {
            assert_eq!(TemplateName::parse(name.as_str()), Some(name));
        }
        assert_eq!(TemplateName::parse("nonexistent_name"), None);
    }

    #[test]
    fn test_load_known_template_sets_every_kind() {
        let registry = StyleRegistry::new();
        for name in TemplateName::all() {
            let loaded = TemplateLoader::load_template(&registry, name.as_str());
            assert_eq!(loaded, name);
            let expected = Template::builtin(name).unwrap();
            for kind in StyleKind::all() {
                assert_eq!(registry.get_defaults(kind), expected.bundle(kind));
            }
            assert_eq!(registry.background(), expected.styles.background);
            assert_eq!(registry.active_template(), name.as_str());
        }
    }

    #[test]
    fn test_unknown_template_falls_back() {
        let registry = StyleRegistry::new();
        TemplateLoader::load_template(&registry, "dark_energy");
        let loaded = TemplateLoader::load_template(&registry, "nonexistent_name");
        assert_eq!(loaded, TemplateName::FALLBACK);

        let fallback = Template::builtin(TemplateName::FALLBACK).unwrap();
        assert_eq!(
            registry.get_defaults(StyleKind::Brane),
            fallback.bundle(StyleKind::Brane)
        );
        assert_eq!(registry.active_template(), "default_template");
    }

    #[test]
    fn test_second_template_fully_supersedes_first() {
        let registry = StyleRegistry::new();
        TemplateLoader::load_template(&registry, "dark_energy");
        assert_eq!(registry.snapshot().table.fill_opa, 0.4);

        // cosmic_dawn has no table section, so the baseline comes back
        TemplateLoader::load_template(&registry, "cosmic_dawn");
        assert_eq!(registry.snapshot().table, TableStyle::default());
        assert_eq!(registry.background(), Color::parse("#1A1A2E").unwrap());
    }

    #[test]
    fn test_palette_values() {
        let green = Template::builtin(TemplateName::GreenMint).unwrap();
        assert_eq!(
            green.styles.vacuum.corner_rad_direction,
            CornerMask([1.0, 1.0, 0.0, 1.0])
        );
        let autumn = Template::builtin(TemplateName::RedAutumn).unwrap();
        assert_eq!(autumn.styles.vacuum.corner_rad, -0.05);
        let beamer = Template::builtin(TemplateName::BeamerBlue).unwrap();
        assert_eq!(beamer.styles.bubble.string_color, Color::parse("#97DDF9").unwrap());
    }
}
