// ── Attribute validators ──
//
// Checks run against configuration before any remote call. Each check
// returns a `ProviderError` scoped to the attribute it rejects; schema
// validation collects them into diagnostics.

use leaseweb_api::public_cloud::types::{ContractType, InstanceState};
use serde_json::Value;

use crate::error::ProviderError;
use crate::path::AttributePath;

// ── Scalar checks ────────────────────────────────────────────────────

pub fn one_of(path: &AttributePath, value: &str, allowed: &[&str]) -> Result<(), ProviderError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(ProviderError::invalid_value(path.clone(), value, allowed))
    }
}

pub fn one_of_int(path: &AttributePath, value: i64, allowed: &[i32]) -> Result<(), ProviderError> {
    if allowed.iter().any(|a| i64::from(*a) == value) {
        Ok(())
    } else {
        Err(ProviderError::invalid_value(path.clone(), value, allowed))
    }
}

pub fn length_at_most(path: &AttributePath, value: &str, max: usize) -> Result<(), ProviderError> {
    let len = value.chars().count();
    if len <= max {
        Ok(())
    } else {
        Err(ProviderError::validation(
            path.clone(),
            format!("{path} must be at most {max} characters long, got {len}"),
        ))
    }
}

pub fn int_between(path: &AttributePath, value: i64, min: i64, max: i64) -> Result<(), ProviderError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ProviderError::validation(
            path.clone(),
            format!("{path} must be between {min} and {max}, got {value}"),
        ))
    }
}

pub fn float_greater_than(path: &AttributePath, value: f64, min: f64) -> Result<(), ProviderError> {
    if value > min {
        Ok(())
    } else {
        Err(ProviderError::validation(
            path.clone(),
            format!("{path} must be greater than {min}, got {value}"),
        ))
    }
}

// ── Cross-field checks ───────────────────────────────────────────────

/// Monthly contracts need a term, hourly ones must not have one.
///
/// `path` points at the contract object; the error lands on its `term`.
/// Unknown contract types are left to the enum check.
pub fn contract_term_matches_type(
    path: &AttributePath,
    contract_type: &str,
    term: i64,
) -> Result<(), ProviderError> {
    let term_path = path.clone().at_name("term");
    match contract_type.parse::<ContractType>() {
        Ok(ContractType::Monthly) if term == 0 => Err(ProviderError::validation(
            term_path,
            format!("contract term cannot be 0 when contract type is {}", ContractType::Monthly),
        )),
        Ok(ContractType::Hourly) if term != 0 => Err(ProviderError::validation(
            term_path,
            format!(
                "contract term must be 0 when contract type is {}, got {term}",
                ContractType::Hourly
            ),
        )),
        _ => Ok(()),
    }
}

/// Instances on their way out cannot be terminated again.
pub fn instance_can_be_terminated(state: &str) -> Result<(), ProviderError> {
    match state.parse::<InstanceState>() {
        Ok(InstanceState::Destroying | InstanceState::Destroyed) => Err(ProviderError::Rejected {
            message: format!("instance is in state {state} and cannot be terminated"),
        }),
        _ => Ok(()),
    }
}

// ── Schema-attached validators ───────────────────────────────────────

/// Declarative form of the checks above, attached to schema attributes
/// and evaluated against raw configuration JSON. Null values always pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Validator {
    OneOf(&'static [&'static str]),
    OneOfInt(&'static [i32]),
    LengthAtMost(usize),
    IntBetween(i64, i64),
    FloatGreaterThan(f64),
    /// Object level: `{ "type": ..., "term": ... }` must agree.
    ContractTerm,
}

impl Validator {
    pub fn description(&self) -> String {
        match self {
            Self::OneOf(allowed) => format!("one of: {}", allowed.join(", ")),
            Self::OneOfInt(allowed) => format!(
                "one of: {}",
                allowed.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
            ),
            Self::LengthAtMost(max) => format!("at most {max} characters"),
            Self::IntBetween(min, max) => format!("between {min} and {max}"),
            Self::FloatGreaterThan(min) => format!("greater than {min}"),
            Self::ContractTerm => "term 0 for HOURLY contracts, non-zero for MONTHLY".to_owned(),
        }
    }

    pub fn validate(&self, path: &AttributePath, value: &Value) -> Result<(), ProviderError> {
        if value.is_null() {
            return Ok(());
        }
        match self {
            Self::OneOf(allowed) => one_of(path, expect_str(path, value)?, allowed),
            Self::OneOfInt(allowed) => one_of_int(path, expect_int(path, value)?, allowed),
            Self::LengthAtMost(max) => length_at_most(path, expect_str(path, value)?, *max),
            Self::IntBetween(min, max) => int_between(path, expect_int(path, value)?, *min, *max),
            Self::FloatGreaterThan(min) => {
                let number = value.as_f64().ok_or_else(|| {
                    ProviderError::validation(path.clone(), format!("{path} must be a number"))
                })?;
                float_greater_than(path, number, *min)
            }
            Self::ContractTerm => {
                let contract_type = value.get("type").and_then(Value::as_str);
                let term = value.get("term").and_then(Value::as_i64);
                match (contract_type, term) {
                    (Some(contract_type), Some(term)) => {
                        contract_term_matches_type(path, contract_type, term)
                    }
                    _ => Ok(()),
                }
            }
        }
    }
}

fn expect_str<'a>(path: &AttributePath, value: &'a Value) -> Result<&'a str, ProviderError> {
    value
        .as_str()
        .ok_or_else(|| ProviderError::validation(path.clone(), format!("{path} must be a string")))
}

fn expect_int(path: &AttributePath, value: &Value) -> Result<i64, ProviderError> {
    value
        .as_i64()
        .ok_or_else(|| ProviderError::validation(path.clone(), format!("{path} must be an integer")))
}
