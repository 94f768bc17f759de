// leaseweb-provider: Declarative resource and data source handlers for
// Leaseweb Public Cloud and dedicated servers, on top of leaseweb-api.

pub mod api_error;
pub mod attr;
pub mod convert;
pub mod data_sources;
pub mod diagnostics;
pub mod dynamic;
pub mod error;
pub mod model;
pub mod path;
pub mod provider;
pub mod requests;
pub mod resources;
pub mod schema;
pub mod validators;

// ── Primary re-exports ──────────────────────────────────────────────
pub use attr::Attr;
pub use data_sources::DataSource;
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use dynamic::{DynamicDataSource, DynamicResource};
pub use error::ProviderError;
pub use path::AttributePath;
pub use provider::{LeasewebProvider, ProviderConfig, ProviderData};
pub use resources::Resource;
pub use schema::{Attribute, AttributeType, Plan, PlanModifier, Schema};
