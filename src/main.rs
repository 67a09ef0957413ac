use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cosmo_scenes::animation::Easing;
use cosmo_scenes::{
    ActionParams, Animation, AppConfig, AssetLoader, ComponentFactory, Sequencer, StyleOverrides,
    StyleRegistry, Template, TemplateLoader, TemplateName, TemplateParser, Timeline,
};
use serde::Serialize;
use std::path::Path;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cosmo-scenes")]
#[command(about = "Styled scene components and animations for cosmology talks", long_about = None)]
struct Cli {
    /// Configuration file name, without extension
    #[arg(long, default_value = "cosmo_scenes")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in templates
    Templates,
    /// Show the styles of a template (built-in name or .toml file)
    Template {
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Build one component and print it as JSON
    Build {
        kind: String,
        variant: String,

        /// Template to load before building
        #[arg(short, long)]
        template: Option<String>,

        /// Style override for this component only, as key=value
        #[arg(long = "set", value_name = "KEY=VALUE", value_parser = StyleOverrides::parse_assignment)]
        overrides: Vec<(String, cosmo_scenes::StyleValue)>,
    },
    /// Build a component, run sequencer actions on it and print the result
    Animate {
        kind: String,
        variant: String,

        #[arg(required = true, value_name = "ACTION")]
        actions: Vec<String>,

        #[arg(short, long)]
        template: Option<String>,

        /// Duration in seconds, replacing each action's default
        #[arg(short, long)]
        duration: Option<f64>,

        #[arg(short, long, value_enum)]
        easing: Option<Easing>,

        /// Scale factor for expanding actions
        #[arg(short, long)]
        scale: Option<f64>,
    },
    /// Build every catalogue entry and print a summary line for each
    Gallery {
        #[arg(short, long)]
        template: Option<String>,
    },
}

#[derive(Serialize)]
struct AnimateOutput<'a> {
    component: &'a cosmo_scenes::Component,
    animations: Vec<NamedAnimation<'a>>,
    timeline: Timeline,
}

#[derive(Serialize)]
struct NamedAnimation<'a> {
    action: &'a str,
    animation: Animation,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(&cli.config).context("Failed to load configuration")?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    // logs go to stderr so stdout stays machine readable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let registry = StyleRegistry::global();
    TemplateLoader::load_template(registry, &config.style.template);
    let factory = ComponentFactory::new(registry, AssetLoader::new(&config.assets.base_path));

    match cli.command {
        Commands::Templates => {
            for name in TemplateName::all() {
                let marker = if name == TemplateName::FALLBACK {
                    " (fallback)"
                } else {
                    ""
                };
                println!("{}{}", name, marker);
            }
        }
        Commands::Template { name } => {
            let template = resolve_template(&name)?;
            println!("{}", TemplateParser::summarize(&template));
        }
        Commands::Build {
            kind,
            variant,
            template,
            overrides,
        } => {
            activate(registry, template.as_deref())?;
            let mut style = StyleOverrides::new();
            for (key, value) in overrides {
                style.insert(key, value);
            }
            let component = factory
                .build(&kind, &variant, Some(&style))
                .with_context(|| format!("Failed to build {} '{}'", kind, variant))?;
            println!("{}", serde_json::to_string_pretty(&component)?);
        }
        Commands::Animate {
            kind,
            variant,
            actions,
            template,
            duration,
            easing,
            scale,
        } => {
            activate(registry, template.as_deref())?;
            let mut component = factory
                .build(&kind, &variant, None)
                .with_context(|| format!("Failed to build {} '{}'", kind, variant))?;
            let params = ActionParams {
                duration,
                easing,
                scale,
            };

            let mut animations = Vec::new();
            for action in &actions {
                let animation = Sequencer::run(&mut component, action, &params)
                    .with_context(|| format!("Action '{}' failed", action))?;
                animations.push(NamedAnimation {
                    action: action.as_str(),
                    animation,
                });
            }
            let script =
                Animation::Sequence(animations.iter().map(|a| a.animation.clone()).collect());
            let output = AnimateOutput {
                component: &component,
                animations,
                timeline: Timeline::from_animation(&script),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::Gallery { template } => {
            activate(registry, template.as_deref())?;
            let gallery = factory.build_gallery()?;
            for component in &gallery {
                println!(
                    "{}: {} parts, actions: {}",
                    component.component_type(),
                    component.parts().len(),
                    Sequencer::actions(component.component_type()).join(", ")
                );
            }
            println!(
                "\n{} components, {} assets loaded",
                gallery.len(),
                factory.assets().cached()
            );
        }
    }

    Ok(())
}

/// A `.toml` path is parsed as a user template, anything else is a built-in name
fn resolve_template(name: &str) -> Result<Template> {
    let path = Path::new(name);
    if path.extension().is_some_and(|ext| ext == "toml") {
        return TemplateParser::parse_toml(path);
    }
    let resolved = match TemplateName::parse(name) {
        Some(known) => known,
        None => {
            warn!(
                requested = name,
                fallback = %TemplateName::FALLBACK,
                "unknown template, showing fallback"
            );
            TemplateName::FALLBACK
        }
    };
    Ok(Template::builtin(resolved)?)
}

fn activate(registry: &StyleRegistry, template: Option<&str>) -> Result<()> {
    let Some(name) = template else {
        return Ok(());
    };
    if name.ends_with(".toml") {
        let template = TemplateParser::parse_toml(Path::new(name))?;
        TemplateLoader::apply(registry, &template);
    } else {
        TemplateLoader::load_template(registry, name);
    }
    Ok(())
}
