// ── Provider error types ──
//
// Internal fallible helpers (request builders, validators, provider setup)
// return `ProviderError`. Handlers never bubble it up: it is turned into a
// diagnostic at the attribute it names, or at resource level otherwise.

use thiserror::Error;

use crate::diagnostics::Diagnostics;
use crate::path::AttributePath;

#[derive(Debug, Error)]
pub enum ProviderError {
    // ── Validation ───────────────────────────────────────────────────
    #[error("{message}")]
    Validation {
        path: AttributePath,
        message: String,
    },

    #[error("invalid value {value:?} for {path}, expected one of: {}", .allowed.join(", "))]
    InvalidValue {
        path: AttributePath,
        value: String,
        allowed: Vec<String>,
    },

    #[error("{path} must be set")]
    Missing { path: AttributePath },

    /// The remote object is in a state that forbids the operation.
    #[error("{message}")]
    Rejected { message: String },

    // ── Setup ────────────────────────────────────────────────────────
    #[error("Provider configuration error: {message}")]
    Config { message: String },

    // ── Remote ───────────────────────────────────────────────────────
    #[error(transparent)]
    Api(#[from] leaseweb_api::Error),
}

impl ProviderError {
    pub fn validation(path: AttributePath, message: impl Into<String>) -> Self {
        Self::Validation {
            path,
            message: message.into(),
        }
    }

    pub fn invalid_value<I, S>(path: AttributePath, value: impl ToString, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        Self::InvalidValue {
            path,
            value: value.to_string(),
            allowed: allowed.into_iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn missing(path: AttributePath) -> Self {
        Self::Missing { path }
    }

    /// The attribute this error belongs to, if any.
    pub fn path(&self) -> Option<&AttributePath> {
        match self {
            Self::Validation { path, .. }
            | Self::InvalidValue { path, .. }
            | Self::Missing { path } => Some(path),
            Self::Rejected { .. } | Self::Config { .. } | Self::Api(_) => None,
        }
    }

    /// Record as a diagnostic under `summary`.
    pub fn report(&self, summary: &str, diags: &mut Diagnostics) {
        match self {
            Self::Api(err) => crate::api_error::handle_sdk_error(summary, err, diags),
            other => match other.path() {
                Some(path) => diags.add_attribute_error(path.clone(), summary, other.to_string()),
                None => diags.add_error(summary, other.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_names_the_value() {
        let err = ProviderError::invalid_value(
            AttributePath::root("contract").at_name("term"),
            555,
            [0, 1, 3, 6, 12],
        );
        let message = err.to_string();
        assert!(message.contains("555"));
        assert!(message.contains("contract.term"));
    }

    #[test]
    fn report_attaches_to_attribute() {
        let mut diags = Diagnostics::new();
        ProviderError::validation(AttributePath::root("reference"), "too long")
            .report("Invalid Attribute Value", &mut diags);

        let diag = diags.iter().next();
        assert_eq!(
            diag.and_then(|d| d.attribute.as_ref()).map(ToString::to_string),
            Some("reference".to_owned())
        );
    }
}
