use crate::assets::AssetLoader;
use crate::component::{Component, ComponentType};
use crate::components;
use crate::error::Result;
use crate::registry::StyleRegistry;
use crate::style::StyleOverrides;
use rayon::prelude::*;
use tracing::debug;

/// Builds components from the registry's current defaults
pub struct ComponentFactory<'a> {
    registry: &'a StyleRegistry,
    assets: AssetLoader,
}

impl<'a> ComponentFactory<'a> {
    pub fn new(registry: &'a StyleRegistry, assets: AssetLoader) -> Self {
        Self { registry, assets }
    }

    pub fn assets(&self) -> &AssetLoader {
        &self.assets
    }

    /// Build a component of `kind` and `variant`.
    ///
    /// The style is the registry snapshot taken at call time with
    /// `overrides` layered on top; the registry itself is never touched.
    pub fn build(
        &self,
        kind: &str,
        variant: &str,
        overrides: Option<&StyleOverrides>,
    ) -> Result<Component> {
        let component_type = ComponentType::parse(kind, variant)?;
        self.build_typed(component_type, overrides)
    }

    pub fn build_typed(
        &self,
        component_type: ComponentType,
        overrides: Option<&StyleOverrides>,
    ) -> Result<Component> {
        let mut style = self.registry.snapshot();
        if let Some(overrides) = overrides.filter(|o| !o.is_empty()) {
            style = style.with_overrides(
                component_type.style_kinds(),
                overrides,
                &component_type.to_string(),
            )?;
        }

        let component = components::layout(component_type, &style, &self.assets)?;
        debug!(
            component = %component_type,
            parts = component.parts().len(),
            "built component"
        );
        Ok(component)
    }

    /// Every catalogue entry, built in parallel, in catalogue order
    pub fn build_gallery(&self) -> Result<Vec<Component>> {
        ComponentType::catalogue()
            .into_par_iter()
            .map(|component_type| self.build_typed(component_type, None))
            .collect()
    }
}
