// ── Attribute paths ──
//
// Addresses a (possibly nested) attribute inside a resource model, e.g.
// `contract.billing_frequency` or `ips[0].reverse_lookup`. Diagnostics
// carry one to point at the offending attribute.

use std::fmt;

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    Attribute(String),
    Index(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AttributePath {
    steps: Vec<PathStep>,
}

impl AttributePath {
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            steps: vec![PathStep::Attribute(name.into())],
        }
    }

    pub fn at_name(mut self, name: impl Into<String>) -> Self {
        self.steps.push(PathStep::Attribute(name.into()));
        self
    }

    pub fn at_index(mut self, index: usize) -> Self {
        self.steps.push(PathStep::Index(index));
        self
    }
}

impl<S: Into<String>> FromIterator<S> for AttributePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            steps: iter
                .into_iter()
                .map(|s| PathStep::Attribute(s.into()))
                .collect(),
        }
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                PathStep::Attribute(name) if i == 0 => f.write_str(name)?,
                PathStep::Attribute(name) => write!(f, ".{name}")?,
                PathStep::Index(idx) => write!(f, "[{idx}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for AttributePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_names_and_indexes() {
        let path = AttributePath::root("ips").at_index(0).at_name("ddos");
        assert_eq!(path.to_string(), "ips[0].ddos");
    }

    #[test]
    fn collects_from_segments() {
        let path: AttributePath = ["contract", "billing_frequency"].into_iter().collect();
        assert_eq!(path, AttributePath::root("contract").at_name("billing_frequency"));
        assert_eq!(path.to_string(), "contract.billing_frequency");
    }
}
