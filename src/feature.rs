use serde::Serialize;

/// Behavior of a flag when no override is present.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeatureState {
    Enabled,
    Disabled,
}

impl FeatureState {
    pub fn is_enabled(self) -> bool {
        matches!(self, FeatureState::Enabled)
    }
}

/// A single feature-flag declaration.
///
/// The name is the stable key that remote experiment configuration targets.
/// Once a flag has shipped, its name is never reused for a different flag.
#[derive(Debug, Serialize)]
pub struct Feature {
    name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<&'static str>,
    default_state: FeatureState,
}

impl Feature {
    pub const fn enabled(name: &'static str) -> Self {
        Self {
            name,
            display_name: None,
            default_state: FeatureState::Enabled,
        }
    }

    pub const fn disabled(name: &'static str) -> Self {
        Self {
            name,
            display_name: None,
            default_state: FeatureState::Disabled,
        }
    }

    /// Attach the legacy string form some flags carry for
    /// backward-compatible experiment targeting.
    pub const fn with_display_name(mut self, display_name: &'static str) -> Self {
        self.display_name = Some(display_name);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn display_name(&self) -> Option<&'static str> {
        self.display_name
    }

    pub fn default_state(&self) -> FeatureState {
        self.default_state
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.name)
    }
}
