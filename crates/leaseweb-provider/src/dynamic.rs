// ── Type-erased handlers ──
//
// The host only speaks JSON values. These traits wrap every typed
// `Resource` / `DataSource` so the provider can keep them in one registry
// keyed by type name.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::data_sources::DataSource;
use crate::diagnostics::Diagnostics;
use crate::provider::ProviderData;
use crate::resources::Resource;
use crate::schema::{Plan, Schema};

const CONVERSION_ERROR: &str = "Value Conversion Error";

fn decode<S: DeserializeOwned>(type_name: &str, what: &str, value: Value, diags: &mut Diagnostics) -> Option<S> {
    match serde_json::from_value(value) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            diags.add_error(
                CONVERSION_ERROR,
                format!("could not decode {what} of {type_name}: {e}"),
            );
            None
        }
    }
}

fn encode<S: Serialize>(type_name: &str, value: &S, diags: &mut Diagnostics) -> Option<Value> {
    match serde_json::to_value(value) {
        Ok(encoded) => Some(encoded),
        Err(e) => {
            diags.add_error(
                CONVERSION_ERROR,
                format!("could not encode state of {type_name}: {e}"),
            );
            None
        }
    }
}

// ── Resources ────────────────────────────────────────────────────────

#[async_trait]
pub trait DynamicResource: Send + Sync {
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> Schema;

    fn configure(&mut self, provider_data: Option<&ProviderData>, diags: &mut Diagnostics);

    fn validate(&self, config: &Value) -> Diagnostics {
        self.schema().validate(config)
    }

    /// Validate `config` and plan it against `prior`. Returns `None` when
    /// validation fails; no remote call is ever made.
    fn plan(&self, diags: &mut Diagnostics, prior: Option<&Value>, config: &Value) -> Option<Plan> {
        diags.append(self.validate(config));
        if diags.has_error() {
            return None;
        }
        Some(self.schema().plan(prior, config))
    }

    async fn read(&self, diags: &mut Diagnostics, state: Value) -> Option<Value>;

    async fn create(&self, diags: &mut Diagnostics, plan: Value) -> Option<Value>;

    async fn update(&self, diags: &mut Diagnostics, prior: Value, plan: Value) -> Option<Value>;

    async fn delete(&self, diags: &mut Diagnostics, state: Value) -> Option<()>;

    async fn import_state(&self, diags: &mut Diagnostics, id: String) -> Option<Value>;
}

#[async_trait]
impl<T: Resource> DynamicResource for T {
    fn type_name(&self) -> &'static str {
        T::TYPE_NAME
    }

    fn schema(&self) -> Schema {
        Resource::schema(self)
    }

    fn configure(&mut self, provider_data: Option<&ProviderData>, diags: &mut Diagnostics) {
        Resource::configure(self, provider_data, diags);
    }

    async fn read(&self, diags: &mut Diagnostics, state: Value) -> Option<Value> {
        let state = decode::<T::State>(T::TYPE_NAME, "state", state, diags)?;
        let state = Resource::read(self, diags, state).await?;
        encode(T::TYPE_NAME, &state, diags)
    }

    async fn create(&self, diags: &mut Diagnostics, plan: Value) -> Option<Value> {
        let plan = decode::<T::State>(T::TYPE_NAME, "plan", plan, diags)?;
        debug!(type_name = T::TYPE_NAME, "create");
        let state = Resource::create(self, diags, plan).await?;
        encode(T::TYPE_NAME, &state, diags)
    }

    async fn update(&self, diags: &mut Diagnostics, prior: Value, plan: Value) -> Option<Value> {
        let prior = decode::<T::State>(T::TYPE_NAME, "prior state", prior, diags)?;
        let plan = decode::<T::State>(T::TYPE_NAME, "plan", plan, diags)?;
        debug!(type_name = T::TYPE_NAME, "update");
        let state = Resource::update(self, diags, prior, plan).await?;
        encode(T::TYPE_NAME, &state, diags)
    }

    async fn delete(&self, diags: &mut Diagnostics, state: Value) -> Option<()> {
        let state = decode::<T::State>(T::TYPE_NAME, "state", state, diags)?;
        debug!(type_name = T::TYPE_NAME, "delete");
        Resource::delete(self, diags, state).await
    }

    async fn import_state(&self, diags: &mut Diagnostics, id: String) -> Option<Value> {
        debug!(type_name = T::TYPE_NAME, id, "import");
        let state = Resource::import_state(self, diags, id).await?;
        encode(T::TYPE_NAME, &state, diags)
    }
}

// ── Data sources ─────────────────────────────────────────────────────

#[async_trait]
pub trait DynamicDataSource: Send + Sync {
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> Schema;

    fn configure(&mut self, provider_data: Option<&ProviderData>, diags: &mut Diagnostics);

    fn validate(&self, config: &Value) -> Diagnostics {
        self.schema().validate(config)
    }

    /// Validates `config` before touching the API.
    async fn read(&self, diags: &mut Diagnostics, config: Value) -> Option<Value>;
}

#[async_trait]
impl<T: DataSource> DynamicDataSource for T {
    fn type_name(&self) -> &'static str {
        T::TYPE_NAME
    }

    fn schema(&self) -> Schema {
        DataSource::schema(self)
    }

    fn configure(&mut self, provider_data: Option<&ProviderData>, diags: &mut Diagnostics) {
        DataSource::configure(self, provider_data, diags);
    }

    async fn read(&self, diags: &mut Diagnostics, config: Value) -> Option<Value> {
        diags.append(DynamicDataSource::validate(self, &config));
        if diags.has_error() {
            return None;
        }
        let config = decode::<T::State>(T::TYPE_NAME, "configuration", config, diags)?;
        let state = DataSource::read(self, diags, config).await?;
        encode(T::TYPE_NAME, &state, diags)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::resources::InstanceResource;

    #[tokio::test]
    async fn malformed_state_is_a_conversion_error() {
        let resource: Box<dyn DynamicResource> = Box::new(InstanceResource::new());
        let mut diags = Diagnostics::new();

        let state = resource.read(&mut diags, json!({ "root_disk_size": "big" })).await;

        assert!(state.is_none());
        assert_eq!(diags.iter().next().unwrap().summary, CONVERSION_ERROR);
    }

    #[test]
    fn plan_refuses_invalid_configuration() {
        let resource: Box<dyn DynamicResource> = Box::new(InstanceResource::new());
        let mut diags = Diagnostics::new();
        let config = json!({
            "region": "eu-west-3",
            "type": "lsw.m3.large",
            "image": { "id": "UBUNTU_22_04_64BIT" },
            "root_disk_storage_type": "CENTRAL",
            "contract": { "billing_frequency": 1, "term": 555, "type": "MONTHLY" }
        });

        assert!(resource.plan(&mut diags, None, &config).is_none());
        assert!(diags.has_error());
    }
}
