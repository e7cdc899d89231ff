//! HTTP behaviour of `CloudDriverClient` against a mock tagging service

use lineage_core::retry::HttpStatusError;
use lineage_tags::{CloudDriverClient, EntityTagsQuery, EntityTagsSource, Error, FeatureGate};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn query() -> EntityTagsQuery {
    EntityTagsQuery::server_group("aws", "myapp-v003", "prod", "us-east-1")
}

#[tokio::test]
async fn test_get_entity_tags_sends_query_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tags"))
        .and(query_param("cloudProvider", "aws"))
        .and(query_param("entityType", "serverGroup"))
        .and(query_param("entityId", "myapp-v003"))
        .and(query_param("account", "prod"))
        .and(query_param("region", "us-east-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "aws:servergroup:myapp-v003:prod:us-east-1",
                "tags": [
                    {
                        "name": "spinnaker:metadata",
                        "value": {
                            "previousServerGroup": {
                                "name": "myapp-v002",
                                "imageName": "myapp-v002-ami"
                            }
                        }
                    }
                ]
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = CloudDriverClient::new(server.uri()).unwrap();
    let records = client.get_entity_tags(&query()).await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].tags[0].name, "spinnaker:metadata");
    assert_eq!(
        records[0].tags[0].value["previousServerGroup"]["imageName"],
        "myapp-v002-ami"
    );
}

#[tokio::test]
async fn test_get_entity_tags_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = CloudDriverClient::new(server.uri()).unwrap();
    assert!(client.get_entity_tags(&query()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_entity_tags_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tags"))
        .respond_with(ResponseTemplate::new(503).set_body_string("elasticsearch unavailable"))
        .mount(&server)
        .await;

    let client = CloudDriverClient::new(server.uri()).unwrap();
    let err = client.get_entity_tags(&query()).await.unwrap_err();

    assert_eq!(err.status_code(), Some(503));
    assert!(err.to_string().contains("elasticsearch unavailable"));
}

#[tokio::test]
async fn test_get_entity_tags_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&server)
        .await;

    let client = CloudDriverClient::new(server.uri()).unwrap();
    let err = client.get_entity_tags(&query()).await.unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn test_entity_tags_available_when_stage_enabled() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/features/stages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "deployManifest", "enabled": true },
            { "name": "upsertEntityTags", "enabled": true }
        ])))
        .mount(&server)
        .await;

    let client = CloudDriverClient::new(server.uri()).unwrap();
    assert!(client.entity_tags_available().await.unwrap());
}

#[tokio::test]
async fn test_entity_tags_unavailable_when_stage_disabled_or_missing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/features/stages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "upsertEntityTags", "enabled": false },
            { "name": "deleteEntityTags", "enabled": true }
        ])))
        .mount(&server)
        .await;

    let client = CloudDriverClient::new(server.uri()).unwrap();
    assert!(!client.entity_tags_available().await.unwrap());
}

#[tokio::test]
async fn test_feature_endpoint_failure_is_an_error_not_a_disabled_feature() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/features/stages"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = CloudDriverClient::new(server.uri()).unwrap();
    let err = client.entity_tags_available().await.unwrap_err();
    assert_eq!(err.status_code(), Some(503));
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_feature_check_recovers_after_transient_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/features/stages"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/features/stages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "upsertEntityTags", "enabled": true }
        ])))
        .mount(&server)
        .await;

    let client = CloudDriverClient::new(server.uri()).unwrap();
    assert!(client.entity_tags_available().await.is_err());
    assert!(client.entity_tags_available().await.unwrap());
}
