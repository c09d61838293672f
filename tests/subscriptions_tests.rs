//! Integration tests for the subscriptions service, including the review
//! screenshot upload.

mod common;

use asc_api::rest::resources::{
    ListSubscriptionsQuery, SubscriptionPriceInline, SubscriptionState, SubscriptionUpdateAttributes,
    SubscriptionUpdateRequest,
};
use asc_api::rest::{Placeholder, UploadError};
use asc_api::HttpError;
use common::{client_for, temp_file};
use serde_json::json;
use wiremock::matchers::{any, body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn subscription_json(id: &str) -> serde_json::Value {
    json!({
        "data": {
            "type": "subscriptions",
            "id": id,
            "attributes": {"name": "Monthly", "productId": "com.example.monthly", "state": "READY_TO_SUBMIT"}
        },
        "links": {"self": ""}
    })
}

// ============================================================================
// Subscription Group Tests
// ============================================================================

#[tokio::test]
async fn test_create_subscription_group_links_the_app() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/subscriptionGroups"))
        .and(body_json(json!({"data": {
            "type": "subscriptionGroups",
            "attributes": {"referenceName": "Premium"},
            "relationships": {"app": {"data": {"id": "1234567890", "type": "apps"}}}
        }})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {
                "type": "subscriptionGroups",
                "id": "group-1",
                "attributes": {"referenceName": "Premium"}
            },
            "links": {"self": ""}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let group = client
        .subscriptions()
        .create_subscription_group("1234567890", "Premium")
        .await
        .unwrap();

    assert_eq!(group.data.id, "group-1");
    assert_eq!(group.data.attributes.as_ref().unwrap().reference_name, "Premium");
}

#[tokio::test]
async fn test_list_subscriptions_for_group() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/subscriptionGroups/group-1/subscriptions"))
        .and(query_param("filter[state]", "READY_TO_SUBMIT,APPROVED"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"type": "subscriptions", "id": "sub-1", "attributes": {"state": "APPROVED"}}],
            "links": {"self": ""}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client
        .subscriptions()
        .list_subscriptions_for_group(
            "group-1",
            &ListSubscriptionsQuery {
                filter_state: vec![SubscriptionState::ReadyToSubmit, SubscriptionState::Approved],
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(
        page.data[0].attributes.as_ref().unwrap().state,
        Some(SubscriptionState::Approved)
    );
}

// ============================================================================
// Subscription Tests
// ============================================================================

#[tokio::test]
async fn test_get_subscription() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/subscriptions/sub-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(subscription_json("sub-1")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let subscription = client.subscriptions().get_subscription("sub-1").await.unwrap();

    assert_eq!(
        subscription.data.attributes.as_ref().unwrap().product_id.as_deref(),
        Some("com.example.monthly")
    );
}

#[tokio::test]
async fn test_update_subscription_creates_prices_inline() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/v1/subscriptions/sub-1"))
        .and(body_json(json!({
            "data": {
                "id": "sub-1",
                "type": "subscriptions",
                "attributes": {"familySharable": true},
                "relationships": {"prices": {"data": [
                    {"id": "${usa}", "type": "subscriptionPrices"}
                ]}}
            },
            "included": [{
                "id": "${usa}",
                "type": "subscriptionPrices",
                "attributes": {"preserveCurrentPrice": false},
                "relationships": {
                    "subscription": {"data": {"id": "sub-1", "type": "subscriptions"}},
                    "subscriptionPricePoint": {"data": {"id": "pp-usa", "type": "subscriptionPricePoints"}},
                    "territory": {"data": {"id": "USA", "type": "territories"}}
                }
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(subscription_json("sub-1")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut price = SubscriptionPriceInline::new("pp-usa").in_territory("USA");
    price.preserve_current_price = Some(false);
    let request = SubscriptionUpdateRequest::with_attributes(SubscriptionUpdateAttributes {
        family_sharable: Some(true),
        ..Default::default()
    })
    .add_price(Placeholder::new("usa"), price);

    let updated = client
        .subscriptions()
        .update_subscription("sub-1", &request)
        .await
        .unwrap();
    assert_eq!(updated.data.id, "sub-1");
}

// ============================================================================
// Review Screenshot Upload Tests
// ============================================================================

fn reservation_json(server: &MockServer, length: u64) -> serde_json::Value {
    reservation_json_with_headers(
        server,
        length,
        json!([{"name": "Content-Type", "value": "image/png"}]),
    )
}

fn reservation_json_with_headers(
    server: &MockServer,
    length: u64,
    request_headers: serde_json::Value,
) -> serde_json::Value {
    json!({
        "data": {
            "type": "subscriptionAppStoreReviewScreenshots",
            "id": "shot-1",
            "attributes": {
                "fileName": "review.png",
                "fileSize": length,
                "uploadOperations": [{
                    "method": "PUT",
                    "url": format!("{}/upload/shot-1", server.uri()),
                    "offset": 0,
                    "length": length,
                    "requestHeaders": request_headers
                }]
            }
        },
        "links": {"self": ""}
    })
}

#[tokio::test]
async fn test_upload_review_screenshot_reserves_uploads_and_commits() {
    let server = MockServer::start().await;
    let contents = b"\x89PNG fake image bytes";
    let file = temp_file("upload-ok-review.png", contents);

    Mock::given(method("POST"))
        .and(path("/v1/subscriptionAppStoreReviewScreenshots"))
        .and(body_json(json!({"data": {
            "type": "subscriptionAppStoreReviewScreenshots",
            "attributes": {"fileName": "upload-ok-review.png", "fileSize": contents.len()},
            "relationships": {"subscription": {"data": {"id": "sub-1", "type": "subscriptions"}}}
        }})))
        .respond_with(ResponseTemplate::new(201).set_body_json(reservation_json(&server, contents.len() as u64)))
        .expect(1)
        .mount(&server)
        .await;
    // Upload hosts must never see the API token.
    Mock::given(method("PUT"))
        .and(path("/upload/shot-1"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(401))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/upload/shot-1"))
        .and(header("content-type", "image/png"))
        .and(header("content-length", contents.len().to_string().as_str()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/v1/subscriptionAppStoreReviewScreenshots/shot-1"))
        .and(body_json(json!({"data": {
            "id": "shot-1",
            "type": "subscriptionAppStoreReviewScreenshots",
            "attributes": {"uploaded": true}
        }})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "type": "subscriptionAppStoreReviewScreenshots",
                "id": "shot-1",
                "attributes": {"assetDeliveryState": {"state": "UPLOAD_COMPLETE"}}
            },
            "links": {"self": ""}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let screenshot = client
        .subscriptions()
        .upload_review_screenshot("sub-1", &file)
        .await
        .unwrap();
    assert_eq!(screenshot.data.id, "shot-1");

    let uploaded = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .find(|request| request.url.path() == "/upload/shot-1")
        .unwrap();
    assert_eq!(uploaded.body, contents);
}

async fn upload_with_operation_headers(file_name: &str, request_headers: serde_json::Value) {
    let server = MockServer::start().await;
    let contents = b"\x89PNG";
    let file = temp_file(file_name, contents);

    Mock::given(method("POST"))
        .and(path("/v1/subscriptionAppStoreReviewScreenshots"))
        .respond_with(ResponseTemplate::new(201).set_body_json(reservation_json_with_headers(
            &server,
            contents.len() as u64,
            request_headers,
        )))
        .mount(&server)
        .await;
    // A single Content-Type value of image/png, nothing else.
    Mock::given(method("PUT"))
        .and(path("/upload/shot-1"))
        .and(header("content-type", "image/png"))
        .and(header("content-length", "4"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/v1/subscriptionAppStoreReviewScreenshots/shot-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"type": "subscriptionAppStoreReviewScreenshots", "id": "shot-1"},
            "links": {"self": ""}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .subscriptions()
        .upload_review_screenshot("sub-1", &file)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_upload_defaults_to_png_content_type() {
    upload_with_operation_headers("upload-no-headers-review.png", json!([])).await;
}

#[tokio::test]
async fn test_upload_lowercase_operation_header_replaces_the_default() {
    upload_with_operation_headers(
        "upload-lowercase-header-review.png",
        json!([{"name": "content-type", "value": "image/png"}]),
    )
    .await;
}

#[tokio::test]
async fn test_path_without_file_name_fails_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client
        .subscriptions()
        .upload_review_screenshot("sub-1", "..")
        .await
        .unwrap_err();

    match error {
        UploadError::File { path, source } => {
            assert_eq!(path, std::path::PathBuf::from(".."));
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidInput);
        }
        other => panic!("expected a file error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rejected_upload_is_not_committed() {
    let server = MockServer::start().await;
    let contents = b"png";
    let file = temp_file("upload-rejected-review.png", contents);

    Mock::given(method("POST"))
        .and(path("/v1/subscriptionAppStoreReviewScreenshots"))
        .respond_with(ResponseTemplate::new(201).set_body_json(reservation_json(&server, 3)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/upload/shot-1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upload host failure"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client
        .subscriptions()
        .upload_review_screenshot("sub-1", &file)
        .await
        .unwrap_err();

    match error {
        UploadError::UploadRejected { status, url, body } => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/upload/shot-1"));
            assert_eq!(body, "upload host failure");
        }
        other => panic!("expected a rejected upload, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_file_fails_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let missing = std::env::temp_dir().join("asc-api-tests-does-not-exist.png");
    let error = client
        .subscriptions()
        .upload_review_screenshot("sub-1", &missing)
        .await
        .unwrap_err();

    match error {
        UploadError::File { path, .. } => assert_eq!(path, missing),
        other => panic!("expected a file error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_reservation_without_operations_is_an_error() {
    let server = MockServer::start().await;
    let file = temp_file("upload-no-ops-review.png", b"png");

    Mock::given(method("POST"))
        .and(path("/v1/subscriptionAppStoreReviewScreenshots"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"type": "subscriptionAppStoreReviewScreenshots", "id": "shot-1", "attributes": {}},
            "links": {"self": ""}
        })))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client
        .subscriptions()
        .upload_review_screenshot("sub-1", &file)
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        UploadError::NoUploadOperations { ref file_name } if file_name == "upload-no-ops-review.png"
    ));
}

#[tokio::test]
async fn test_operation_beyond_file_size_is_rejected_locally() {
    let server = MockServer::start().await;
    let file = temp_file("upload-range-review.png", b"png");

    Mock::given(method("POST"))
        .and(path("/v1/subscriptionAppStoreReviewScreenshots"))
        .respond_with(ResponseTemplate::new(201).set_body_json(reservation_json(&server, 10)))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client
        .subscriptions()
        .upload_review_screenshot("sub-1", &file)
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        UploadError::OperationOutOfRange { offset: 0, end: 10, file_size: 3 }
    ));
}

#[tokio::test]
async fn test_failed_reservation_is_an_http_error() {
    let server = MockServer::start().await;
    let file = temp_file("upload-forbidden-review.png", b"png");

    Mock::given(method("POST"))
        .and(path("/v1/subscriptionAppStoreReviewScreenshots"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"errors": [{
            "status": "403", "code": "FORBIDDEN_ERROR", "title": "This request is forbidden for security reasons"
        }]})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client
        .subscriptions()
        .upload_review_screenshot("sub-1", &file)
        .await
        .unwrap_err();

    assert!(matches!(error, UploadError::Http(HttpError::Response(ref e)) if e.code == 403));
}
