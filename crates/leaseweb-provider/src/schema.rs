// ── Schema declarations ──
//
// Each resource and data source declares its attributes once. The schema
// drives three things: configuration validation, planning (which values
// come from config, which are kept from state, which force replacement)
// and the JSON description printed by the host shim.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::diagnostics::Diagnostics;
use crate::path::AttributePath;
use crate::validators::Validator;

// ── Types ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Int32,
    Int64,
    Float64,
    Bool,
    List(Box<AttributeType>),
    Object(BTreeMap<String, AttributeType>),
}

impl AttributeType {
    pub fn list_of(element: AttributeType) -> Self {
        Self::List(Box::new(element))
    }

    /// Whether a non-null JSON value has this shape.
    fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::String, Value::String(_)) | (Self::Bool, Value::Bool(_)) => true,
            (Self::Int32 | Self::Int64, Value::Number(n)) => n.is_i64() || n.is_u64(),
            (Self::Float64, Value::Number(_)) => true,
            (Self::List(_), Value::Array(_)) | (Self::Object(_), Value::Object(_)) => true,
            _ => false,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int32 | Self::Int64 => "integer",
            Self::Float64 => "number",
            Self::Bool => "bool",
            Self::List(_) => "list",
            Self::Object(_) => "object",
        }
    }
}

/// Implemented by nested models so tests can check that the schema and
/// the model agree on the nested object's shape.
pub trait AttributeTypes {
    fn attribute_types() -> BTreeMap<String, AttributeType>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanModifier {
    /// Keep the prior state value instead of marking it unknown.
    UseStateForUnknown,
    /// A change to this attribute destroys and recreates the resource.
    RequiresReplace,
}

// ── Attributes ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "is_false")]
    pub required: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub optional: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub computed: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub sensitive: bool,
    #[serde(skip)]
    pub validators: Vec<Validator>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
    /// Nested attributes of an object, or of each element of a list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nested: Option<BTreeMap<String, Attribute>>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(b: &bool) -> bool {
    !*b
}

impl Attribute {
    fn new(attribute_type: AttributeType) -> Self {
        Self {
            attribute_type,
            description: String::new(),
            required: false,
            optional: false,
            computed: false,
            sensitive: false,
            validators: Vec::new(),
            plan_modifiers: Vec::new(),
            nested: None,
        }
    }

    pub fn string() -> Self {
        Self::new(AttributeType::String)
    }

    pub fn int32() -> Self {
        Self::new(AttributeType::Int32)
    }

    pub fn int64() -> Self {
        Self::new(AttributeType::Int64)
    }

    pub fn float64() -> Self {
        Self::new(AttributeType::Float64)
    }

    pub fn bool() -> Self {
        Self::new(AttributeType::Bool)
    }

    pub fn list(element: AttributeType) -> Self {
        Self::new(AttributeType::list_of(element))
    }

    pub fn object(attributes: BTreeMap<String, Attribute>) -> Self {
        let mut attr = Self::new(AttributeType::Object(types_of(&attributes)));
        attr.nested = Some(attributes);
        attr
    }

    pub fn list_nested(attributes: BTreeMap<String, Attribute>) -> Self {
        let mut attr = Self::new(AttributeType::list_of(AttributeType::Object(types_of(
            &attributes,
        ))));
        attr.nested = Some(attributes);
        attr
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    #[must_use]
    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    #[must_use]
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    #[must_use]
    pub fn plan_modifier(mut self, modifier: PlanModifier) -> Self {
        self.plan_modifiers.push(modifier);
        self
    }

    /// Set by the user rather than only reported by the remote side.
    pub fn is_configurable(&self) -> bool {
        self.required || self.optional
    }

    fn has_modifier(&self, modifier: PlanModifier) -> bool {
        self.plan_modifiers.contains(&modifier)
    }
}

fn types_of(attributes: &BTreeMap<String, Attribute>) -> BTreeMap<String, AttributeType> {
    attributes
        .iter()
        .map(|(name, attr)| (name.clone(), attr.attribute_type.clone()))
        .collect()
}

/// Build an attribute map from `(name, attribute)` pairs.
pub fn attributes<const N: usize>(entries: [(&str, Attribute); N]) -> BTreeMap<String, Attribute> {
    entries
        .into_iter()
        .map(|(name, attr)| (name.to_owned(), attr))
        .collect()
}

// ── Schema ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    pub description: String,
    pub attributes: BTreeMap<String, Attribute>,
}

/// Result of planning a change against prior state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    pub value: Value,
    /// Attributes whose change forces the resource to be replaced.
    pub requires_replace: Vec<AttributePath>,
}

impl Schema {
    pub fn new(description: impl Into<String>, attributes: BTreeMap<String, Attribute>) -> Self {
        Self {
            description: description.into(),
            attributes,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Check a configuration document: required attributes, value types,
    /// attribute validators and computed-only attributes set by the user.
    pub fn validate(&self, config: &Value) -> Diagnostics {
        let mut diags = Diagnostics::new();
        match config {
            Value::Object(map) => validate_attributes(&self.attributes, map, None, &mut diags),
            _ => diags.add_error(
                "Invalid Configuration",
                "configuration must be a JSON object",
            ),
        }
        diags
    }

    /// Merge configuration with prior state into the planned new state.
    ///
    /// Configured values win. Computed attributes absent from the config
    /// keep their prior value under `UseStateForUnknown` and are left out
    /// (unknown) otherwise; inside a configured object they always keep
    /// their prior value. Optional attributes absent from both are null.
    pub fn plan(&self, prior: Option<&Value>, config: &Value) -> Plan {
        let mut requires_replace = Vec::new();
        let planned = plan_attributes(
            &self.attributes,
            prior.and_then(Value::as_object),
            config.as_object(),
            None,
            &mut requires_replace,
        );
        Plan {
            value: Value::Object(planned),
            requires_replace,
        }
    }
}

fn child_path(parent: Option<&AttributePath>, name: &str) -> AttributePath {
    parent.map_or_else(|| AttributePath::root(name), |p| p.clone().at_name(name))
}

fn plan_attributes(
    attributes: &BTreeMap<String, Attribute>,
    prior: Option<&Map<String, Value>>,
    config: Option<&Map<String, Value>>,
    parent: Option<&AttributePath>,
    requires_replace: &mut Vec<AttributePath>,
) -> Map<String, Value> {
    let mut planned = Map::new();

    for (name, attr) in attributes {
        let path = child_path(parent, name);
        let configured = config.and_then(|c| c.get(name)).filter(|v| !v.is_null());
        let previous = prior.and_then(|p| p.get(name)).filter(|v| !v.is_null());
        let keep_prior = parent.is_some() || attr.has_modifier(PlanModifier::UseStateForUnknown);

        let value = match configured {
            Some(value) if attr.is_configurable() => Some(match (&attr.nested, value) {
                (Some(nested), Value::Object(map)) => Value::Object(plan_attributes(
                    nested,
                    previous.and_then(Value::as_object),
                    Some(map),
                    Some(&path),
                    requires_replace,
                )),
                _ => value.clone(),
            }),
            _ if attr.computed => {
                if keep_prior {
                    previous.cloned()
                } else {
                    None
                }
            }
            _ => Some(Value::Null),
        };

        let changed = matches!((previous, value.as_ref()), (Some(before), Some(after)) if before != after);
        if changed && attr.has_modifier(PlanModifier::RequiresReplace) {
            requires_replace.push(path);
        }

        if let Some(value) = value {
            planned.insert(name.clone(), value);
        }
    }

    planned
}

fn validate_attributes(
    attributes: &BTreeMap<String, Attribute>,
    config: &Map<String, Value>,
    parent: Option<&AttributePath>,
    diags: &mut Diagnostics,
) {
    for (name, attr) in attributes {
        let path = child_path(parent, name);
        let value = config.get(name).unwrap_or(&Value::Null);
        validate_attribute(attr, &path, value, diags);
    }

    for key in config.keys() {
        if !attributes.contains_key(key) {
            let path = child_path(parent, key);
            diags.add_attribute_error(
                path,
                "Unsupported Attribute",
                format!("An attribute named \"{key}\" is not expected here."),
            );
        }
    }
}

fn validate_attribute(attr: &Attribute, path: &AttributePath, value: &Value, diags: &mut Diagnostics) {
    if value.is_null() {
        if attr.required {
            diags.add_attribute_error(
                path.clone(),
                "Missing Required Attribute",
                format!("The attribute {path} is required."),
            );
        }
        return;
    }

    if !attr.is_configurable() {
        diags.add_attribute_error(
            path.clone(),
            "Invalid Configuration for Read-Only Attribute",
            format!("Cannot set value for {path}: it is computed by the provider."),
        );
        return;
    }

    if !attr.attribute_type.accepts(value) {
        diags.add_attribute_error(
            path.clone(),
            "Incorrect Attribute Value Type",
            format!("{path} must be a {}.", attr.attribute_type.name()),
        );
        return;
    }

    for validator in &attr.validators {
        if let Err(err) = validator.validate(path, value) {
            err.report("Invalid Attribute Value", diags);
        }
    }

    let Some(nested) = &attr.nested else {
        return;
    };
    match value {
        Value::Object(map) => validate_attributes(nested, map, Some(path), diags),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                let item_path = path.clone().at_index(i);
                match item {
                    Value::Object(map) => validate_attributes(nested, map, Some(&item_path), diags),
                    _ => diags.add_attribute_error(
                        item_path,
                        "Incorrect Attribute Value Type",
                        "list elements must be objects",
                    ),
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn sample() -> Schema {
        Schema::new(
            "sample",
            attributes([
                (
                    "id",
                    Attribute::string()
                        .computed()
                        .plan_modifier(PlanModifier::UseStateForUnknown),
                ),
                (
                    "region",
                    Attribute::string()
                        .required()
                        .validator(Validator::OneOf(&["eu-west-3", "us-east-1"]))
                        .plan_modifier(PlanModifier::RequiresReplace),
                ),
                ("reference", Attribute::string().optional().validator(Validator::LengthAtMost(5))),
                ("state", Attribute::string().computed()),
                (
                    "contract",
                    Attribute::object(attributes([
                        ("type", Attribute::string().required()),
                        ("term", Attribute::int32().required()),
                    ]))
                    .required()
                    .validator(Validator::ContractTerm),
                ),
            ]),
        )
    }

    #[test]
    fn object_attribute_type_follows_nested_attributes() {
        let schema = sample();
        let contract = schema.attribute("contract").unwrap();
        assert_eq!(
            contract.attribute_type,
            AttributeType::Object(BTreeMap::from([
                ("term".to_owned(), AttributeType::Int32),
                ("type".to_owned(), AttributeType::String),
            ]))
        );
    }

    #[test]
    fn validate_reports_each_problem_at_its_attribute() {
        let diags = sample().validate(&json!({
            "region": "mars-1",
            "reference": "far too long",
            "state": "RUNNING",
            "contract": { "type": "MONTHLY", "term": 0 },
        }));

        let paths: Vec<String> = diags
            .iter()
            .filter_map(|d| d.attribute.as_ref().map(ToString::to_string))
            .collect();
        assert_eq!(paths, vec!["contract.term", "reference", "region", "state"]);
        assert!(diags.iter().any(|d| d.detail.contains("mars-1")));
    }

    #[test]
    fn validate_flags_missing_and_mistyped_values() {
        let diags = sample().validate(&json!({
            "contract": { "type": "HOURLY", "term": "zero", "extra": 1 },
        }));
        let rendered: Vec<String> = diags.iter().map(ToString::to_string).collect();
        assert_eq!(diags.len(), 3, "{rendered:?}");
        assert!(rendered.iter().any(|d| d.contains("Missing Required Attribute [region]")));
        assert!(rendered.iter().any(|d| d.contains("[contract.term]")));
        assert!(rendered.iter().any(|d| d.contains("[contract.extra]")));
    }

    #[test]
    fn plan_keeps_id_and_marks_region_replacement() {
        let prior = json!({
            "id": "abc",
            "region": "eu-west-3",
            "reference": "web",
            "state": "RUNNING",
            "contract": { "type": "HOURLY", "term": 0 },
        });
        let config = json!({
            "region": "us-east-1",
            "contract": { "type": "HOURLY", "term": 0 },
        });

        let plan = sample().plan(Some(&prior), &config);

        assert_eq!(
            plan.value,
            json!({
                "id": "abc",
                "region": "us-east-1",
                "reference": null,
                "contract": { "type": "HOURLY", "term": 0 },
            })
        );
        assert_eq!(plan.requires_replace, vec![AttributePath::root("region")]);
    }

    #[test]
    fn plan_merges_configured_objects_with_prior_computed_fields() {
        let schema = Schema::new(
            "image holder",
            attributes([(
                "image",
                Attribute::object(attributes([
                    ("id", Attribute::string().required()),
                    ("name", Attribute::string().computed()),
                ]))
                .required()
                .plan_modifier(PlanModifier::RequiresReplace),
            )]),
        );
        let prior = json!({ "image": { "id": "UBUNTU_22_04_64BIT", "name": "Ubuntu 22.04" } });

        let unchanged = schema.plan(Some(&prior), &json!({ "image": { "id": "UBUNTU_22_04_64BIT" } }));
        assert_eq!(unchanged.value, prior);
        assert!(unchanged.requires_replace.is_empty());

        let changed = schema.plan(Some(&prior), &json!({ "image": { "id": "DEBIAN_12_64BIT" } }));
        assert_eq!(changed.requires_replace, vec![AttributePath::root("image")]);
    }

    #[test]
    fn plan_without_prior_state_leaves_computed_unknown() {
        let plan = sample().plan(None, &json!({ "region": "eu-west-3" }));
        assert!(plan.value.get("id").is_none());
        assert!(plan.requires_replace.is_empty());
    }
}
