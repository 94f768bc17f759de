// Nested attribute schemas shared by public cloud resources and data sources.

use strum::VariantNames;

use leaseweb_api::public_cloud::types::{BillingFrequency, ContractTerm, ContractType};

use crate::schema::{Attribute, AttributeType, attributes};
use crate::validators::Validator;

/// Settable contract of an instance or load balancer.
pub(crate) fn contract_attribute() -> Attribute {
    Attribute::object(attributes([
        (
            "billing_frequency",
            Attribute::int32()
                .required()
                .description("The billing frequency (in months).")
                .validator(Validator::OneOfInt(BillingFrequency::ALLOWED)),
        ),
        (
            "term",
            Attribute::int32()
                .required()
                .description("Contract term (in months). Used only when type is MONTHLY.")
                .validator(Validator::OneOfInt(ContractTerm::ALLOWED)),
        ),
        (
            "type",
            Attribute::string()
                .required()
                .description("Select HOURLY for billing based on hourly usage, else MONTHLY.")
                .validator(Validator::OneOf(ContractType::VARIANTS)),
        ),
        ("ends_at", Attribute::string().computed()),
        ("renewals_at", Attribute::string().computed()),
        ("created_at", Attribute::string().computed()),
        ("state", Attribute::string().computed()),
    ]))
    .required()
    .validator(Validator::ContractTerm)
}

pub(crate) fn computed_contract() -> Attribute {
    Attribute::object(attributes([
        ("billing_frequency", Attribute::int32().computed()),
        ("term", Attribute::int32().computed()),
        ("type", Attribute::string().computed()),
        ("ends_at", Attribute::string().computed()),
        ("renewals_at", Attribute::string().computed()),
        ("created_at", Attribute::string().computed()),
        ("state", Attribute::string().computed()),
    ]))
    .computed()
}

fn image_attributes(id: Attribute) -> Attribute {
    Attribute::object(attributes([
        ("id", id),
        ("name", Attribute::string().computed()),
        ("version", Attribute::string().computed()),
        ("family", Attribute::string().computed()),
        ("flavour", Attribute::string().computed()),
        ("market_apps", Attribute::list(AttributeType::String).computed()),
        ("storage_types", Attribute::list(AttributeType::String).computed()),
    ]))
}

pub(crate) fn image_attribute() -> Attribute {
    image_attributes(
        Attribute::string()
            .required()
            .description("Image ID, e.g. UBUNTU_22_04_64BIT."),
    )
    .required()
}

pub(crate) fn computed_image() -> Attribute {
    image_attributes(Attribute::string().computed()).computed()
}

pub(crate) fn ips_attribute() -> Attribute {
    Attribute::list_nested(attributes([
        ("ip", Attribute::string().computed()),
        ("prefix_length", Attribute::string().computed()),
        ("version", Attribute::int32().computed()),
        ("null_routed", Attribute::bool().computed()),
        ("main_ip", Attribute::bool().computed()),
        ("network_type", Attribute::string().computed()),
        ("reverse_lookup", Attribute::string().computed()),
        (
            "ddos",
            Attribute::object(attributes([
                ("detection_profile", Attribute::string().computed()),
                ("protection_type", Attribute::string().computed()),
            ]))
            .computed(),
        ),
    ]))
    .computed()
}

pub(crate) fn private_network_attribute() -> Attribute {
    Attribute::object(attributes([
        ("id", Attribute::string().computed()),
        ("status", Attribute::string().computed()),
        ("subnet", Attribute::string().computed()),
    ]))
    .computed()
}

fn value_unit(value: Attribute) -> Attribute {
    Attribute::object(attributes([
        ("value", value.computed()),
        ("unit", Attribute::string().computed()),
    ]))
    .computed()
}

pub(crate) fn resources_attribute() -> Attribute {
    Attribute::object(attributes([
        ("cpu", value_unit(Attribute::int32()).description("Number of cores")),
        ("memory", value_unit(Attribute::float64()).description("Total memory in GiB")),
        (
            "public_network_speed",
            value_unit(Attribute::int32()).description("Public network speed in Gbps"),
        ),
        (
            "private_network_speed",
            value_unit(Attribute::int32()).description("Private network speed in Gbps"),
        ),
    ]))
    .computed()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{
        ContractModel, ImageModel, IpModel, PrivateNetworkModel, ResourcesModel,
    };
    use crate::schema::AttributeTypes;

    #[test]
    fn nested_schemas_match_model_descriptors() {
        let object = |types| AttributeType::Object(types);

        assert_eq!(contract_attribute().attribute_type, object(ContractModel::attribute_types()));
        assert_eq!(computed_contract().attribute_type, object(ContractModel::attribute_types()));
        assert_eq!(image_attribute().attribute_type, object(ImageModel::attribute_types()));
        assert_eq!(computed_image().attribute_type, object(ImageModel::attribute_types()));
        assert_eq!(
            ips_attribute().attribute_type,
            AttributeType::list_of(object(IpModel::attribute_types()))
        );
        assert_eq!(
            private_network_attribute().attribute_type,
            object(PrivateNetworkModel::attribute_types())
        );
        assert_eq!(resources_attribute().attribute_type, object(ResourcesModel::attribute_types()));
    }
}
