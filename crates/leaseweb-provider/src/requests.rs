// ── Model-to-request builders ──
//
// The reverse direction of `convert`: turn planned attribute models into
// typed request options. Enum-like attributes are parsed here, so an
// invalid value is reported against its attribute before any remote call.
// Only attributes holding a value are sent.

use std::str::FromStr;

use strum::VariantNames;

use leaseweb_api::dedicated_server::types::{
    DataTrafficUnit, NotificationFrequency, NotificationSettingOpts,
};
use leaseweb_api::public_cloud::types::{
    BillingFrequency, ContractTerm, ContractType, LaunchInstanceOpts, LaunchLoadBalancerOpts,
    RegionName, RootDiskStorageType, TypeName, UpdateInstanceOpts, UpdateLoadBalancerOpts,
};

use crate::attr::Attr;
use crate::error::ProviderError;
use crate::model::{
    ContractModel, InstanceResourceModel, LoadBalancerResourceModel,
    NotificationSettingDatatrafficModel,
};
use crate::path::AttributePath;
use crate::validators;

// ── Field parsers ────────────────────────────────────────────────────

fn required<'a, T>(attr: &'a Attr<T>, path: &AttributePath) -> Result<&'a T, ProviderError> {
    attr.value()
        .ok_or_else(|| ProviderError::missing(path.clone()))
}

fn parse_enum<E>(path: &AttributePath, raw: &str) -> Result<E, ProviderError>
where
    E: FromStr + VariantNames,
{
    raw.parse()
        .map_err(|_| ProviderError::invalid_value(path.clone(), raw, E::VARIANTS))
}

fn parse_type_name(path: &AttributePath, raw: &str) -> Result<TypeName, ProviderError> {
    TypeName::try_from(raw.to_owned())
        .map_err(|_| ProviderError::invalid_value(path.clone(), raw, TypeName::ALLOWED))
}

fn parse_term(path: &AttributePath, raw: i32) -> Result<ContractTerm, ProviderError> {
    ContractTerm::try_from(raw)
        .map_err(|_| ProviderError::invalid_value(path.clone(), raw, ContractTerm::ALLOWED))
}

fn parse_billing_frequency(path: &AttributePath, raw: i32) -> Result<BillingFrequency, ProviderError> {
    BillingFrequency::try_from(raw)
        .map_err(|_| ProviderError::invalid_value(path.clone(), raw, BillingFrequency::ALLOWED))
}

fn optional<T, U>(
    attr: &Attr<T>,
    parse: impl FnOnce(&T) -> Result<U, ProviderError>,
) -> Result<Option<U>, ProviderError> {
    attr.value().map(parse).transpose()
}

// ── Contract ─────────────────────────────────────────────────────────

/// Parsed settable contract fields. `None` where the plan has no value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ContractOpts {
    contract_type: Option<ContractType>,
    term: Option<ContractTerm>,
    billing_frequency: Option<BillingFrequency>,
}

fn contract_opts(contract: &Attr<ContractModel>) -> Result<ContractOpts, ProviderError> {
    let base = AttributePath::root("contract");
    let Some(contract) = contract.value() else {
        return Ok(ContractOpts::default());
    };

    let opts = ContractOpts {
        contract_type: optional(&contract.contract_type, |raw| {
            parse_enum(&base.clone().at_name("type"), raw)
        })?,
        term: optional(&contract.term, |raw| {
            parse_term(&base.clone().at_name("term"), *raw)
        })?,
        billing_frequency: optional(&contract.billing_frequency, |raw| {
            parse_billing_frequency(&base.clone().at_name("billing_frequency"), *raw)
        })?,
    };

    if let (Some(contract_type), Some(term)) = (opts.contract_type, opts.term) {
        validators::contract_term_matches_type(
            &base,
            &contract_type.to_string(),
            i64::from(term.months()),
        )?;
    }
    Ok(opts)
}

fn required_contract(contract: &Attr<ContractModel>) -> Result<(ContractType, ContractTerm, BillingFrequency), ProviderError> {
    let base = AttributePath::root("contract");
    if !contract.is_value() {
        return Err(ProviderError::missing(base));
    }
    let opts = contract_opts(contract)?;
    Ok((
        opts.contract_type
            .ok_or_else(|| ProviderError::missing(base.clone().at_name("type")))?,
        opts.term
            .ok_or_else(|| ProviderError::missing(base.clone().at_name("term")))?,
        opts.billing_frequency
            .ok_or_else(|| ProviderError::missing(base.at_name("billing_frequency")))?,
    ))
}

// ── Instances ────────────────────────────────────────────────────────

pub fn launch_instance_opts(
    model: &InstanceResourceModel,
) -> Result<LaunchInstanceOpts, ProviderError> {
    let region_path = AttributePath::root("region");
    let type_path = AttributePath::root("type");
    let storage_path = AttributePath::root("root_disk_storage_type");
    let image_path = AttributePath::root("image").at_name("id");

    let region = parse_enum::<RegionName>(&region_path, required(&model.region, &region_path)?)?;
    let instance_type =
        parse_type_name(&type_path, required(&model.instance_type, &type_path)?)?;
    let root_disk_storage_type = parse_enum::<RootDiskStorageType>(
        &storage_path,
        required(&model.root_disk_storage_type, &storage_path)?,
    )?;
    let image_id = model
        .image
        .value()
        .and_then(|image| image.id.value())
        .ok_or_else(|| ProviderError::missing(image_path))?
        .clone();
    let (contract_type, contract_term, billing_frequency) = required_contract(&model.contract)?;

    Ok(LaunchInstanceOpts {
        region,
        instance_type,
        reference: model.reference.value().cloned(),
        image_id,
        contract_type,
        contract_term,
        billing_frequency,
        root_disk_size: model.root_disk_size.value().copied(),
        root_disk_storage_type,
        market_app_id: model.market_app_id.value().cloned(),
        ssh_key: model.ssh_key.value().cloned(),
    })
}

/// `type` is only sent when it differs from `state`; the API refuses a
/// switch to the current type.
pub fn update_instance_opts(
    plan: &InstanceResourceModel,
    state: &InstanceResourceModel,
) -> Result<UpdateInstanceOpts, ProviderError> {
    let type_path = AttributePath::root("type");
    let contract = contract_opts(&plan.contract)?;

    let instance_type = if plan.instance_type.is_set_and_changed(&state.instance_type) {
        optional(&plan.instance_type, |raw| parse_type_name(&type_path, raw))?
    } else {
        None
    };

    Ok(UpdateInstanceOpts {
        instance_type,
        reference: plan.reference.value().cloned(),
        contract_type: contract.contract_type,
        contract_term: contract.term,
        billing_frequency: contract.billing_frequency,
        root_disk_size: plan.root_disk_size.value().copied(),
    })
}

// ── Load balancers ───────────────────────────────────────────────────

pub fn launch_load_balancer_opts(
    model: &LoadBalancerResourceModel,
) -> Result<LaunchLoadBalancerOpts, ProviderError> {
    let region_path = AttributePath::root("region");
    let type_path = AttributePath::root("type");

    let region = parse_enum::<RegionName>(&region_path, required(&model.region, &region_path)?)?;
    let load_balancer_type =
        parse_type_name(&type_path, required(&model.load_balancer_type, &type_path)?)?;
    let (contract_type, contract_term, billing_frequency) = required_contract(&model.contract)?;

    Ok(LaunchLoadBalancerOpts {
        region,
        load_balancer_type,
        reference: model.reference.value().cloned(),
        contract_type,
        contract_term,
        billing_frequency,
    })
}

pub fn update_load_balancer_opts(
    plan: &LoadBalancerResourceModel,
    state: &LoadBalancerResourceModel,
) -> Result<UpdateLoadBalancerOpts, ProviderError> {
    let type_path = AttributePath::root("type");
    let load_balancer_type = if plan.load_balancer_type.is_set_and_changed(&state.load_balancer_type) {
        optional(&plan.load_balancer_type, |raw| parse_type_name(&type_path, raw))?
    } else {
        None
    };

    Ok(UpdateLoadBalancerOpts {
        load_balancer_type,
        reference: plan.reference.value().cloned(),
    })
}

// ── Notification settings ────────────────────────────────────────────

pub fn notification_setting_opts(
    model: &NotificationSettingDatatrafficModel,
) -> Result<NotificationSettingOpts, ProviderError> {
    let frequency_path = AttributePath::root("frequency");
    let unit_path = AttributePath::root("unit");
    let threshold_path = AttributePath::root("threshold");

    let frequency = parse_enum::<NotificationFrequency>(
        &frequency_path,
        required(&model.frequency, &frequency_path)?,
    )?;
    let unit = parse_enum::<DataTrafficUnit>(&unit_path, required(&model.unit, &unit_path)?)?;
    let threshold = *required(&model.threshold, &threshold_path)?;
    validators::float_greater_than(&threshold_path, threshold, 0.0)?;

    Ok(NotificationSettingOpts {
        frequency,
        threshold,
        unit,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use leaseweb_api::public_cloud::types::{Contract, Image, Instance, LoadBalancer};

    use super::*;

    fn remote_instance() -> Instance {
        Instance {
            id: "ace712e9-a166-47f1-9065-4af0f7e7fce1".into(),
            instance_type: "lsw.m3.large".into(),
            region: "eu-west-3".into(),
            reference: Some("my webserver".into()),
            image: Image {
                id: "UBUNTU_22_04_64BIT".into(),
                ..Image::default()
            },
            state: "RUNNING".into(),
            root_disk_size: 55,
            root_disk_storage_type: "CENTRAL".into(),
            contract: Contract {
                billing_frequency: 1,
                term: 3,
                contract_type: "MONTHLY".into(),
                ..Contract::default()
            },
            market_app_id: Some("CPANEL_30".into()),
            ..Instance::default()
        }
    }

    #[test]
    fn adapted_instance_launches_with_same_settable_fields() {
        let model = InstanceResourceModel::from(remote_instance());
        let opts = launch_instance_opts(&model).unwrap();

        assert_eq!(opts.region, RegionName::EuWest3);
        assert_eq!(opts.instance_type.as_str(), "lsw.m3.large");
        assert_eq!(opts.reference.as_deref(), Some("my webserver"));
        assert_eq!(opts.image_id, "UBUNTU_22_04_64BIT");
        assert_eq!(opts.contract_type, ContractType::Monthly);
        assert_eq!(opts.contract_term, ContractTerm::Three);
        assert_eq!(opts.billing_frequency, BillingFrequency::One);
        assert_eq!(opts.root_disk_size, Some(55));
        assert_eq!(opts.root_disk_storage_type, RootDiskStorageType::Central);
        assert_eq!(opts.market_app_id.as_deref(), Some("CPANEL_30"));
        assert_eq!(opts.ssh_key, None);
    }

    #[test]
    fn adapted_load_balancer_launches_with_same_settable_fields() {
        let model = LoadBalancerResourceModel::from(LoadBalancer {
            id: "lb-1".into(),
            load_balancer_type: "lsw.m4.xlarge".into(),
            region: "us-east-1".into(),
            reference: None,
            contract: Contract {
                billing_frequency: 1,
                term: 0,
                contract_type: "HOURLY".into(),
                ..Contract::default()
            },
            ..LoadBalancer::default()
        });
        let opts = launch_load_balancer_opts(&model).unwrap();

        assert_eq!(opts.region, RegionName::UsEast1);
        assert_eq!(opts.load_balancer_type.as_str(), "lsw.m4.xlarge");
        assert_eq!(opts.reference, None);
        assert_eq!(opts.contract_term, ContractTerm::Zero);
    }

    #[test]
    fn invalid_term_is_named_in_the_error() {
        let state = InstanceResourceModel::from(remote_instance());
        let mut plan = state.clone();
        if let Attr::Value(contract) = &mut plan.contract {
            contract.term = Attr::Value(555);
        }

        let err = update_instance_opts(&plan, &state).unwrap_err();
        assert!(err.to_string().contains("555"));
        assert_eq!(err.path().map(ToString::to_string).as_deref(), Some("contract.term"));
    }

    #[test]
    fn invalid_region_is_named_in_the_error() {
        let mut model = InstanceResourceModel::from(remote_instance());
        model.region = Attr::Value("tralala".into());

        let err = launch_instance_opts(&model).unwrap_err();
        assert!(err.to_string().contains("tralala"));
        assert!(err.to_string().contains("eu-west-3"));
    }

    #[test]
    fn monthly_contract_without_term_is_rejected() {
        let mut model = InstanceResourceModel::from(remote_instance());
        if let Attr::Value(contract) = &mut model.contract {
            contract.term = Attr::Value(0);
        }
        let err = launch_instance_opts(&model).unwrap_err();
        assert!(err.to_string().contains("MONTHLY"));
    }

    #[test]
    fn update_sends_type_only_when_changed() {
        let state = InstanceResourceModel::from(remote_instance());
        let mut plan = state.clone();
        plan.reference = Attr::Null;
        plan.root_disk_size = Attr::Unset;

        let opts = update_instance_opts(&plan, &state).unwrap();
        assert_eq!(opts.instance_type, None);
        assert_eq!(opts.reference, None);
        assert_eq!(opts.root_disk_size, None);
        assert_eq!(opts.contract_term, Some(ContractTerm::Three));

        plan.instance_type = Attr::Value("lsw.m5.large".into());
        let opts = update_instance_opts(&plan, &state).unwrap();
        assert_eq!(opts.instance_type.map(|t| t.to_string()).as_deref(), Some("lsw.m5.large"));
    }

    #[test]
    fn missing_contract_is_reported() {
        let mut model = InstanceResourceModel::from(remote_instance());
        model.contract = Attr::Null;
        let err = launch_instance_opts(&model).unwrap_err();
        assert_eq!(err.to_string(), "contract must be set");
    }

    #[test]
    fn notification_threshold_must_be_positive() {
        let model = NotificationSettingDatatrafficModel {
            frequency: Attr::Value("WEEKLY".into()),
            threshold: Attr::Value(0.0),
            unit: Attr::Value("GB".into()),
            ..NotificationSettingDatatrafficModel::default()
        };
        let err = notification_setting_opts(&model).unwrap_err();
        assert_eq!(err.path().map(ToString::to_string).as_deref(), Some("threshold"));

        let model = NotificationSettingDatatrafficModel {
            threshold: Attr::Value(1.5),
            ..model
        };
        let opts = notification_setting_opts(&model).unwrap();
        assert_eq!(opts.frequency, NotificationFrequency::Weekly);
        assert_eq!(opts.unit, DataTrafficUnit::Gigabyte);
    }
}
