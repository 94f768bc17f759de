#![allow(clippy::unwrap_used)]
// Integration tests for `PublicCloudClient` using wiremock.

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use leaseweb_api::public_cloud::types::{
    BillingFrequency, ContractTerm, ContractType, CredentialType, LaunchInstanceOpts, RegionName,
    RootDiskStorageType, UpdateLoadBalancerOpts,
};
use leaseweb_api::{ApiClient, Configuration, Error, PublicCloudClient, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, PublicCloudClient) {
    let server = MockServer::start().await;
    let api = ApiClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, PublicCloudClient::new(api))
}

fn instance_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "type": "lsw.m3.large",
        "region": "eu-west-3",
        "reference": "web-01",
        "image": { "id": "UBUNTU_24_04_64BIT", "name": "Ubuntu 24.04", "family": "linux", "flavour": "ubuntu" },
        "state": "RUNNING",
        "rootDiskSize": 50,
        "rootDiskStorageType": "CENTRAL",
        "ips": [],
        "contract": { "type": "MONTHLY", "term": 1, "billingFrequency": 1, "state": "ACTIVE" }
    })
}

// ── Auth ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_api_key_header_is_sent() {
    let server = MockServer::start().await;
    let address = server.address();

    Mock::given(method("GET"))
        .and(path("/publicCloud/v1/instances/abc"))
        .and(header("X-LSW-Auth", "secret-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(instance_json("abc")))
        .expect(1)
        .mount(&server)
        .await;

    let config = Configuration {
        api_key: SecretString::from("secret-key".to_string()),
        host: Some(address.to_string()),
        scheme: Some("http".into()),
    };
    let api = ApiClient::new(&config, &TransportConfig::default()).unwrap();
    let client = PublicCloudClient::new(api);

    let instance = client.get_instance("abc").await.unwrap();
    assert_eq!(instance.id, "abc");
}

// ── Instances ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_all_instances_follows_metadata() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/publicCloud/v1/instances"))
        .and(query_param_is_missing("offset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "instances": [instance_json("first")],
            "_metadata": { "limit": 1, "offset": 0, "totalCount": 2 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/publicCloud/v1/instances"))
        .and(query_param("offset", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "instances": [instance_json("second")],
            "_metadata": { "limit": 1, "offset": 1, "totalCount": 2 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let instances = client.list_all_instances().await.unwrap();

    let ids: Vec<&str> = instances.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second"]);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_all_instances_discards_pages_on_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/publicCloud/v1/instances"))
        .and(query_param_is_missing("offset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "instances": [instance_json("first")],
            "_metadata": { "limit": 1, "offset": 0, "totalCount": 2 }
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/publicCloud/v1/instances"))
        .and(query_param("offset", "1"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let result = client.list_all_instances().await;

    match result {
        Err(Error::Api(body)) => {
            assert_eq!(body.status, 503);
            assert_eq!(body.body, "unavailable");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_launch_instance_sends_typed_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/publicCloud/v1/instances"))
        .and(body_json(json!({
            "region": "eu-west-3",
            "type": "lsw.m3.large",
            "imageId": "UBUNTU_24_04_64BIT",
            "contractType": "MONTHLY",
            "contractTerm": 1,
            "billingFrequency": 1,
            "rootDiskStorageType": "CENTRAL"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(instance_json("new")))
        .expect(1)
        .mount(&server)
        .await;

    let opts = LaunchInstanceOpts {
        region: RegionName::EuWest3,
        instance_type: "lsw.m3.large".parse().unwrap(),
        reference: None,
        image_id: "UBUNTU_24_04_64BIT".into(),
        contract_type: ContractType::Monthly,
        contract_term: ContractTerm::One,
        billing_frequency: BillingFrequency::One,
        root_disk_size: None,
        root_disk_storage_type: RootDiskStorageType::Central,
        market_app_id: None,
        ssh_key: None,
    };

    let instance = client.launch_instance(&opts).await.unwrap();
    assert_eq!(instance.id, "new");
}

#[tokio::test]
async fn test_terminate_instance() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/publicCloud/v1/instances/abc"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.terminate_instance("abc").await.unwrap();
}

#[tokio::test]
async fn test_instance_types_for_update() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/publicCloud/v1/instances/abc/instanceTypesUpdate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "instanceTypes": [{ "name": "lsw.m4.large" }, { "name": "lsw.m4.xlarge" }],
            "_metadata": { "limit": 50, "offset": 0, "totalCount": 2 }
        })))
        .mount(&server)
        .await;

    let types = client.instance_types_for_update("abc").await.unwrap();

    assert!(types.contains("lsw.m4.xlarge"));
    assert!(!types.contains("lsw.m3.large"));
    assert_eq!(types.names(), vec!["lsw.m4.large", "lsw.m4.xlarge"]);
}

#[tokio::test]
async fn test_get_credential_path() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(
            "/publicCloud/v1/instances/abc/credentials/OPERATING_SYSTEM/root",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "OPERATING_SYSTEM",
            "username": "root",
            "password": "hunter2"
        })))
        .mount(&server)
        .await;

    let credential = client
        .get_credential("abc", CredentialType::OperatingSystem, "root")
        .await
        .unwrap();
    assert_eq!(credential.password, "hunter2");
}

// ── Load balancers ──────────────────────────────────────────────────

#[tokio::test]
async fn test_update_load_balancer_only_sends_set_fields() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/publicCloud/v1/loadBalancers/lb-1"))
        .and(body_json(json!({ "reference": "edge" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "lb-1",
            "type": "lsw.c3.large",
            "region": "eu-west-3",
            "reference": "edge",
            "state": "RUNNING",
            "contract": { "type": "HOURLY", "term": 0, "billingFrequency": 1, "state": "ACTIVE" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let opts = UpdateLoadBalancerOpts {
        reference: Some("edge".into()),
        ..Default::default()
    };
    let lb = client.update_load_balancer("lb-1", &opts).await.unwrap();

    assert_eq!(lb.reference.as_deref(), Some("edge"));
    assert_eq!(lb.contract.contract_type, "HOURLY");
}

// ── Error handling ──────────────────────────────────────────────────

#[tokio::test]
async fn test_error_body_is_preserved() {
    let (server, client) = setup().await;

    let body = json!({
        "correlationId": "abc-123",
        "errorCode": "404",
        "errorMessage": "Resource not found"
    });

    Mock::given(method("GET"))
        .and(path("/publicCloud/v1/instances/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(&body))
        .mount(&server)
        .await;

    let err = client.get_instance("missing").await.unwrap_err();

    assert!(err.is_not_found());
    let raw: serde_json::Value = serde_json::from_str(&err.response().unwrap().body).unwrap();
    assert_eq!(raw, body);
}

#[tokio::test]
async fn test_malformed_success_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/publicCloud/v1/instances/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client.get_instance("abc").await.unwrap_err();

    assert!(matches!(err, Error::Deserialization { ref body, .. } if body == "not json"));
    assert!(err.response().is_none());
}
