pub mod animation;
pub mod assets;
pub mod component;
mod components;
pub mod config;
pub mod error;
pub mod factory;
pub mod geometry;
pub mod registry;
pub mod sequencer;
pub mod style;
pub mod templates;
pub mod timeline;

pub use animation::{Animation, AnimationStep, Easing, Timing, Transform};
pub use assets::AssetLoader;
pub use component::{Component, ComponentKind, ComponentType, PartName, PartRef, TrackerId};
pub use config::AppConfig;
pub use error::{Result, SceneError};
pub use factory::ComponentFactory;
pub use geometry::{Point, SceneNode, Shape};
pub use registry::StyleRegistry;
pub use sequencer::{ActionParams, Sequencer};
pub use style::{Color, StyleBundle, StyleKind, StyleOverrides, StyleValue};
pub use templates::{Template, TemplateLoader, TemplateName, TemplateParser};
pub use timeline::Timeline;

/// Asset root used by the process-wide helpers below
pub const DEFAULT_ASSET_ROOT: &str = "assets";

/// Load a template into the process-wide registry; unknown names fall back
pub fn load_template(name: &str) -> TemplateName {
    TemplateLoader::load_template(StyleRegistry::global(), name)
}

pub fn get_defaults(kind: StyleKind) -> StyleBundle {
    StyleRegistry::global().get_defaults(kind)
}

pub fn set_defaults(bundle: StyleBundle) {
    StyleRegistry::global().set_defaults(bundle)
}

/// Build a component from the process-wide registry with assets under [`DEFAULT_ASSET_ROOT`]
pub fn build(kind: &str, variant: &str, overrides: Option<&StyleOverrides>) -> Result<Component> {
    ComponentFactory::new(StyleRegistry::global(), AssetLoader::new(DEFAULT_ASSET_ROOT))
        .build(kind, variant, overrides)
}
