use thiserror::Error;

/// Errors raised while turning flag parameters into a layout.
///
/// Validation happens before any drawing, so a run that fails here has
/// produced no output at all.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlagError {
    #[error("Invalid parameter '{name}': {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl FlagError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        FlagError::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    /// Name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            FlagError::InvalidParameter { name, .. } => name,
        }
    }
}
