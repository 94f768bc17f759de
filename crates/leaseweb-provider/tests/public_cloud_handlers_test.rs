#![allow(clippy::unwrap_used)]
// Integration tests for the public cloud handlers using wiremock.

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use leaseweb_provider::{Diagnostics, LeasewebProvider, ProviderConfig, Severity};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, LeasewebProvider) {
    let server = MockServer::start().await;
    let mut config = ProviderConfig::new("secret-key");
    config.host = Some(server.address().to_string());
    config.scheme = Some("http".into());

    let mut provider = LeasewebProvider::new();
    let mut diags = Diagnostics::new();
    assert!(provider.configure(&config, &mut diags));
    (server, provider)
}

fn instance_json(id: &str, state: &str) -> Value {
    json!({
        "id": id,
        "type": "lsw.m3.large",
        "region": "eu-west-3",
        "reference": "web-01",
        "image": { "id": "UBUNTU_24_04_64BIT", "name": "Ubuntu 24.04", "family": "linux", "flavour": "ubuntu" },
        "state": state,
        "rootDiskSize": 50,
        "rootDiskStorageType": "CENTRAL",
        "ips": [],
        "contract": { "type": "MONTHLY", "term": 1, "billingFrequency": 1, "state": "ACTIVE" }
    })
}

fn instance_plan() -> Value {
    json!({
        "region": "eu-west-3",
        "type": "lsw.m3.large",
        "reference": "web-01",
        "image": { "id": "UBUNTU_24_04_64BIT" },
        "root_disk_storage_type": "CENTRAL",
        "contract": { "billing_frequency": 1, "term": 1, "type": "MONTHLY" },
        "ssh_key": "ssh-ed25519 AAAA"
    })
}

fn attribute_paths(diags: &Diagnostics) -> Vec<String> {
    let mut paths: Vec<String> = diags
        .iter()
        .filter_map(|d| d.attribute.as_ref().map(ToString::to_string))
        .collect();
    paths.sort();
    paths
}

// ── Instances ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_instance_reads_back_and_keeps_ssh_key() {
    let (server, provider) = setup().await;

    Mock::given(method("POST"))
        .and(path("/publicCloud/v1/instances"))
        .respond_with(ResponseTemplate::new(201).set_body_json(instance_json("abc", "CREATING")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/publicCloud/v1/instances/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(instance_json("abc", "RUNNING")))
        .expect(1)
        .mount(&server)
        .await;

    let mut diags = Diagnostics::new();
    let resource = provider
        .resource("leaseweb_public_cloud_instance", &mut diags)
        .unwrap();
    let state = resource.create(&mut diags, instance_plan()).await.unwrap();

    assert!(diags.is_empty(), "{diags:?}");
    assert_eq!(state["id"], "abc");
    assert_eq!(state["state"], "RUNNING");
    assert_eq!(state["contract"]["term"], 1);
    assert_eq!(state["ssh_key"], "ssh-ed25519 AAAA");
}

#[tokio::test]
async fn test_update_with_invalid_term_makes_no_request() {
    let (server, provider) = setup().await;

    let mut diags = Diagnostics::new();
    let resource = provider
        .resource("leaseweb_public_cloud_instance", &mut diags)
        .unwrap();

    let mut prior = instance_plan();
    prior["id"] = json!("abc");
    let mut plan = prior.clone();
    plan["contract"]["term"] = json!(555);

    let state = resource.update(&mut diags, prior, plan).await;

    assert!(state.is_none());
    assert!(diags.has_error());
    assert!(diags.iter().any(|d| d.detail.contains("555")));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_error_details_become_attribute_diagnostics() {
    let (server, provider) = setup().await;

    Mock::given(method("POST"))
        .and(path("/publicCloud/v1/instances"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "correlationId": "289346a1-3eaf-4da4-b707-62ef12eb08be",
            "errorCode": "400",
            "errorMessage": "Validation Failed",
            "errorDetails": {
                "contract.billingFrequency": ["The value is not allowed"],
                "rootDiskSize": ["Too small", "Must be at least 5"]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut diags = Diagnostics::new();
    let resource = provider
        .resource("leaseweb_public_cloud_instance", &mut diags)
        .unwrap();
    let state = resource.create(&mut diags, instance_plan()).await;

    assert!(state.is_none());
    assert_eq!(diags.len(), 3);
    assert!(diags.iter().all(|d| d.severity == Severity::Error && d.attribute.is_some()));
    assert_eq!(
        attribute_paths(&diags),
        vec!["contract.billingfrequency", "root.disk.size", "root.disk.size"]
    );
}

#[tokio::test]
async fn test_plain_error_body_is_one_resource_diagnostic() {
    let (server, provider) = setup().await;

    Mock::given(method("GET"))
        .and(path("/publicCloud/v1/instances/abc"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "correlationId": "c-1",
            "errorCode": "404",
            "errorMessage": "Resource not found"
        })))
        .mount(&server)
        .await;

    let mut diags = Diagnostics::new();
    let resource = provider
        .resource("leaseweb_public_cloud_instance", &mut diags)
        .unwrap();
    let state = resource.import_state(&mut diags, "abc".into()).await;

    assert!(state.is_none());
    assert_eq!(diags.len(), 1);
    let diag = diags.iter().next().unwrap();
    assert!(diag.attribute.is_none());
    assert!(diag.detail.contains("Resource not found"));
}

#[tokio::test]
async fn test_delete_rejects_destroyed_instance() {
    let (server, provider) = setup().await;

    let mut diags = Diagnostics::new();
    let resource = provider
        .resource("leaseweb_public_cloud_instance", &mut diags)
        .unwrap();
    let state = json!({ "id": "abc", "state": "DESTROYED" });

    assert!(resource.delete(&mut diags, state).await.is_none());
    assert!(diags.iter().any(|d| d.detail.contains("DESTROYED")));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_rejects_type_not_offered_for_upgrade() {
    let (server, provider) = setup().await;

    Mock::given(method("GET"))
        .and(path("/publicCloud/v1/instances/abc/instanceTypesUpdate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "instanceTypes": [{ "name": "lsw.m3.xlarge" }],
            "_metadata": { "limit": 50, "offset": 0, "totalCount": 1 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut diags = Diagnostics::new();
    let resource = provider
        .resource("leaseweb_public_cloud_instance", &mut diags)
        .unwrap();
    let mut prior = instance_plan();
    prior["id"] = json!("abc");
    let mut plan = prior.clone();
    plan["type"] = json!("lsw.m4.large");

    assert!(resource.update(&mut diags, prior, plan).await.is_none());
    assert_eq!(attribute_paths(&diags), vec!["type"]);
    // only the lookup, no PUT
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

// ── Data sources ────────────────────────────────────────────────────

#[tokio::test]
async fn test_instances_data_source_aggregates_pages() {
    let (server, provider) = setup().await;

    Mock::given(method("GET"))
        .and(path("/publicCloud/v1/instances"))
        .and(query_param_is_missing("offset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "instances": [instance_json("first", "RUNNING")],
            "_metadata": { "limit": 1, "offset": 0, "totalCount": 2 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/publicCloud/v1/instances"))
        .and(query_param("offset", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "instances": [instance_json("second", "STOPPED")],
            "_metadata": { "limit": 1, "offset": 1, "totalCount": 2 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut diags = Diagnostics::new();
    let data_source = provider
        .data_source("leaseweb_public_cloud_instances", &mut diags)
        .unwrap();
    let state = data_source.read(&mut diags, json!({})).await.unwrap();

    let ids: Vec<&str> = state["instances"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["first", "second"]);
    assert!(diags.is_empty());
}

#[tokio::test]
async fn test_credential_data_source_rejects_unknown_type() {
    let (server, provider) = setup().await;

    let mut diags = Diagnostics::new();
    let data_source = provider
        .data_source("leaseweb_public_cloud_credential", &mut diags)
        .unwrap();
    let config = json!({ "instance_id": "abc", "type": "SSH", "username": "root" });

    assert!(data_source.read(&mut diags, config).await.is_none());
    assert_eq!(attribute_paths(&diags), vec!["type"]);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_credential_data_source_reads_password() {
    let (server, provider) = setup().await;

    Mock::given(method("GET"))
        .and(path(
            "/publicCloud/v1/instances/abc/credentials/OPERATING_SYSTEM/root",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "OPERATING_SYSTEM",
            "username": "root",
            "password": "hunter2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut diags = Diagnostics::new();
    let data_source = provider
        .data_source("leaseweb_public_cloud_credential", &mut diags)
        .unwrap();
    let config = json!({ "instance_id": "abc", "type": "OPERATING_SYSTEM", "username": "root" });
    let state = data_source.read(&mut diags, config).await.unwrap();

    assert_eq!(
        state,
        json!({
            "instance_id": "abc",
            "type": "OPERATING_SYSTEM",
            "username": "root",
            "password": "hunter2"
        })
    );
}
