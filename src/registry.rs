//! Process-wide table of the active style bundle per kind.

use crate::style::{Color, KindDefaults, StyleBundle, StyleKind};
use parking_lot::RwLock;
use std::sync::LazyLock;
use tracing::debug;

/// Template name reported before any template has been loaded
pub const BUILTIN_TEMPLATE: &str = "builtin";

#[derive(Debug, Clone)]
struct RegistryState {
    defaults: KindDefaults,
    template: String,
}

/// Holds the active [`StyleBundle`] for every [`StyleKind`].
///
/// Reads hand out copies, so a component built from a snapshot never sees a
/// later template switch. A template load replaces the whole table under a
/// single write lock; readers observe either the old or the new template,
/// never a mix.
#[derive(Debug)]
pub struct StyleRegistry {
    state: RwLock<RegistryState>,
}

static GLOBAL_REGISTRY: LazyLock<StyleRegistry> = LazyLock::new(StyleRegistry::new);

impl StyleRegistry {
    /// A registry holding the built-in bundles
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RegistryState {
                defaults: KindDefaults::default(),
                template: BUILTIN_TEMPLATE.to_string(),
            }),
        }
    }

    /// The registry shared by the whole process
    pub fn global() -> &'static StyleRegistry {
        &GLOBAL_REGISTRY
    }

    pub fn get_defaults(&self, kind: StyleKind) -> StyleBundle {
        self.state.read().defaults.bundle(kind)
    }

    /// Replace the bundle of one kind as a whole
    pub fn set_defaults(&self, bundle: StyleBundle) {
        debug!(kind = %bundle.kind(), "replacing style bundle");
        self.state.write().defaults.set(bundle);
    }

    /// Copy of every active bundle, taken under one read lock
    pub fn snapshot(&self) -> KindDefaults {
        self.state.read().defaults.clone()
    }

    /// Swap in a complete table at once
    pub fn replace_all(&self, defaults: KindDefaults, template: &str) {
        let mut state = self.state.write();
        state.defaults = defaults;
        state.template = template.to_string();
    }

    pub fn background(&self) -> Color {
        self.state.read().defaults.background
    }

    /// Name of the template the current bundles came from
    pub fn active_template(&self) -> String {
        self.state.read().template.clone()
    }

    /// Back to the built-in bundles
    pub fn reset(&self) {
        self.replace_all(KindDefaults::default(), BUILTIN_TEMPLATE);
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{BlackHoleStyle, BraneStyle};
    use std::sync::Arc;

    #[test]
    fn test_new_registry_holds_builtin_bundles() {
        let registry = StyleRegistry::new();
        assert_eq!(
            registry.get_defaults(StyleKind::Brane),
            StyleBundle::Brane(BraneStyle::default())
        );
        assert_eq!(registry.active_template(), BUILTIN_TEMPLATE);
        assert_eq!(registry.background(), Color::WHITE);
    }

    #[test]
    fn test_set_defaults_replaces_one_kind() {
        let registry = StyleRegistry::new();
        let bundle = StyleBundle::BlackHole(BlackHoleStyle {
            bh_size: 2.0,
            bh_color: Color::RED,
            bh_fill_opa: 0.5,
        });
        registry.set_defaults(bundle.clone());
        assert_eq!(registry.get_defaults(StyleKind::BlackHole), bundle);
        assert_eq!(
            registry.get_defaults(StyleKind::Brane),
            StyleBundle::Brane(BraneStyle::default())
        );
    }

    #[test]
    fn test_reads_are_copies() {
        let registry = StyleRegistry::new();
        let before = registry.snapshot();
        let mut changed = before.clone();
        changed.brane.brane_fill_opa = 0.9;
        registry.replace_all(changed, "custom");
        assert_eq!(before.brane.brane_fill_opa, 0.1);
        assert_eq!(registry.snapshot().brane.brane_fill_opa, 0.9);
        assert_eq!(registry.active_template(), "custom");
        registry.reset();
        assert_eq!(registry.snapshot(), KindDefaults::default());
    }

    #[test]
    fn test_concurrent_readers_never_see_a_mixed_table() {
        let registry = Arc::new(StyleRegistry::new());
        let mut alternate = KindDefaults::default();
        alternate.brane.brane_fill_opa = 0.7;
        alternate.vacuum.vacuum_fill_opa = 0.7;

        let writer = {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                for i in 0..200 {
                    if i % 2 == 0 {
                        registry.replace_all(alternate.clone(), "alternate");
                    } else {
                        registry.reset();
                    }
                }
            })
        };

        for _ in 0..200 {
            let snapshot = registry.snapshot();
            assert_eq!(snapshot.brane.brane_fill_opa == 0.7, snapshot.vacuum.vacuum_fill_opa == 0.7);
        }
        writer.join().unwrap();
    }
}
