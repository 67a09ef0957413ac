use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building components or sequencing their animations.
///
/// Template resolution never produces an error for an unknown name (it falls
/// back instead); everything here is a structural mistake in the calling
/// script.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// The component kind is not part of the catalogue
    #[error("unknown component kind '{0}'")]
    UnknownKind(String),

    /// The variant is not defined for the given kind
    #[error("unknown variant '{variant}' for component kind '{kind}'")]
    UnknownVariant { kind: String, variant: String },

    /// An override names an attribute that none of the component's style facets carry
    #[error("style attribute '{key}' does not apply to {component}")]
    UnknownStyleKey { key: String, component: String },

    /// An override value has the wrong shape for its attribute
    #[error("invalid value for style attribute '{key}': {reason}")]
    InvalidStyleValue { key: String, reason: String },

    /// A sequencer action name that no component understands
    #[error("unknown animation action '{0}'")]
    UnknownAction(String),

    /// A sequencer operation was requested on a component of the wrong kind or variant
    #[error("'{operation}' is not available for {component}")]
    IncompatibleVariant { operation: String, component: String },

    /// A sub-part an operation relies on is missing from the component
    #[error("{component} has no sub-part '{part}'")]
    MissingPart { component: String, part: String },

    /// A fixed-path asset could not be found
    #[error("asset not found: {}", path.display())]
    AssetNotFound { path: PathBuf },

    /// An asset exists but cannot be interpreted
    #[error("malformed asset {}: {reason}", path.display())]
    MalformedAsset { path: PathBuf, reason: String },

    /// A template document failed to parse or validate
    #[error("invalid template '{name}': {reason}")]
    InvalidTemplate { name: String, reason: String },
}

impl SceneError {
    /// True for the errors caused by an unknown kind, variant or style key.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            SceneError::UnknownKind(_)
                | SceneError::UnknownVariant { .. }
                | SceneError::UnknownStyleKey { .. }
                | SceneError::InvalidStyleValue { .. }
                | SceneError::UnknownAction(_)
        )
    }
}

/// Result type for scene operations
pub type Result<T> = std::result::Result<T, SceneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors_are_flagged() {
        assert!(SceneError::UnknownKind("ghost".into()).is_configuration_error());
        assert!(SceneError::UnknownVariant {
            kind: "bubble".into(),
            variant: "ghost".into()
        }
        .is_configuration_error());
        assert!(!SceneError::AssetNotFound {
            path: PathBuf::from("figures/weight.svg")
        }
        .is_configuration_error());
    }

    #[test]
    fn test_error_messages_name_the_bad_value() {
        let err = SceneError::UnknownVariant {
            kind: "bubble".into(),
            variant: "plasma".into(),
        };
        let message = err.to_string();
        assert!(message.contains("plasma"));
        assert!(message.contains("bubble"));

        let err = SceneError::AssetNotFound {
            path: PathBuf::from("assets/figures/weight.svg"),
        };
        assert!(err.to_string().contains("assets/figures/weight.svg"));
    }
}
