use super::Template;
use crate::style::{KindDefaults, StyleKind};
use anyhow::{Context, Result};
use std::path::Path;

/// Parser for TOML template documents
pub struct TemplateParser;

impl TemplateParser {
    /// Parse a template file; the file stem becomes the template name
    pub fn parse_toml(path: &Path) -> Result<Template> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read template file: {}", path.display()))?;

        let styles = Self::parse_str(&content)
            .with_context(|| format!("Failed to parse template: {}", path.display()))?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .with_context(|| format!("Template path has no usable name: {}", path.display()))?;

        Ok(Template {
            name: name.to_string(),
            styles,
        })
    }

    /// Parse and validate a template document held in memory
    pub fn parse_str(content: &str) -> Result<KindDefaults> {
        let styles: KindDefaults = toml::from_str(content).context("Invalid template TOML")?;
        styles.validate()?;
        Ok(styles)
    }

    /// Get a summary of the template contents
    pub fn summarize(template: &Template) -> String {
        let mut summary = String::new();
        summary.push_str(&format!("Template: {}\n", template.name));
        summary.push_str(&format!("Background: {}\n", template.styles.background));

        for kind in StyleKind::all() {
            let bundle = template.bundle(kind);
            let keys = bundle.keys();
            summary.push_str(&format!("\n[{}] {} attributes\n", kind, keys.len()));
            for key in keys {
                if let Some(value) = bundle.get(&key) {
                    let rendered = serde_json::to_string(&value).unwrap_or_default();
                    summary.push_str(&format!("  {} = {}\n", key, rendered.trim_matches('"')));
                }
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_partial_document_keeps_baseline() {
        let styles = TemplateParser::parse_str(
            r##"
background = "#101010"

[brane]
brane_color = "#123456"
"##,
        )
        .unwrap();
        assert_eq!(styles.background, Color::rgb(0x10, 0x10, 0x10));
        assert_eq!(styles.brane.brane_color, Color::rgb(0x12, 0x34, 0x56));
        assert_eq!(styles.brane.brane_fill_opa, 0.1);
        assert_eq!(styles.vacuum, KindDefaults::default().vacuum);
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let err = TemplateParser::parse_str("[brane]\nbrane_fill_opa = 1.5\n").unwrap_err();
        assert!(err.to_string().contains("brane.brane_fill_opa"));

        assert!(TemplateParser::parse_str("[bubble]\nfield_gradient = 0\n").is_err());
        assert!(TemplateParser::parse_str("[plot]\nstroke_w = -1.0\n").is_err());
        assert!(
            TemplateParser::parse_str("[table]\ncorner_rad_direction = [1.0, 2.0, 0.0, 0.0]\n")
                .is_err()
        );
    }

    #[test]
    fn test_rejects_unknown_keys_and_bad_colors() {
        assert!(TemplateParser::parse_str("[brane]\nbrane_colour = \"RED\"\n").is_err());
        assert!(TemplateParser::parse_str("[brane]\nbrane_color = \"mauve\"\n").is_err());
        assert!(TemplateParser::parse_str("[nebula]\nglow = 1.0\n").is_err());
    }

    #[test]
    fn test_parse_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("night_sky.toml");
        std::fs::write(&path, "background = \"BLACK\"\n[junction]\narrow_color = \"YELLOW\"\n")
            .unwrap();

        let template = TemplateParser::parse_toml(&path).unwrap();
        assert_eq!(template.name, "night_sky");
        assert_eq!(template.styles.background, Color::BLACK);
        assert_eq!(template.styles.junction.arrow_color, Color::YELLOW);
    }

    #[test]
    fn test_parse_toml_reports_context() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[vacuum]\nvacuum_fill_opa = \"lots\"").unwrap();
        let err = TemplateParser::parse_toml(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse template"));

        let missing = TemplateParser::parse_toml(Path::new("/nonexistent/template.toml"));
        assert!(missing.is_err());
    }

    #[test]
    fn test_summarize_lists_every_kind() {
        let template = Template::builtin(crate::templates::TemplateName::DarkEnergy).unwrap();
        let summary = TemplateParser::summarize(&template);
        assert!(summary.contains("Template: dark_energy"));
        assert!(summary.contains("Background: #0F0F1E"));
        assert!(summary.contains("[black_hole]"));
        assert!(summary.contains("tightness = 0.3"));
    }
}
