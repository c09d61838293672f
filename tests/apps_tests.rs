//! Integration tests for the apps service against a mock server.

mod common;

use asc_api::rest::resources::{
    AppInfoLocalizationCreateRequest, AppScreenshotSetCreateRequest, AppUpdateAttributes,
    AppUpdateRequest, GetAppScreenshotSetQuery, ListAppScreenshotIdsQuery, ListAppsQuery,
    ScreenshotDisplayType,
};
use asc_api::rest::ResourceIdentifier;
use asc_api::HttpError;
use common::client_for;
use serde_json::json;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app_json(id: &str) -> serde_json::Value {
    json!({
        "type": "apps",
        "id": id,
        "attributes": {"name": "Example", "bundleId": "com.example.app", "sku": "EX1", "primaryLocale": "en-US"},
        "links": {"self": format!("https://api.appstoreconnect.apple.com/v1/apps/{id}")}
    })
}

// ============================================================================
// Query Encoding Tests
// ============================================================================

#[tokio::test]
async fn test_list_apps_sends_exactly_the_set_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/apps"))
        .and(query_param("filter[id]", "123"))
        .and(query_param("limit", "10"))
        .and(header_exists("authorization"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [app_json("123")],
            "links": {"self": "https://api.appstoreconnect.apple.com/v1/apps?filter[id]=123&limit=10"},
            "meta": {"paging": {"total": 1, "limit": 10}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let apps = client
        .apps()
        .list_apps(&ListAppsQuery {
            filter_id: vec!["123".to_string()],
            limit: Some(10),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(apps.status(), 200);
    assert_eq!(apps.data.len(), 1);
    assert_eq!(apps.data[0].id, "123");
    assert_eq!(apps.total(), Some(1));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("filter[id]=123&limit=10"));
}

#[tokio::test]
async fn test_list_apps_without_options_sends_no_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/apps"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [], "links": {"self": ""}})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let apps = client.apps().list_apps(&ListAppsQuery::default()).await.unwrap();

    assert!(apps.data.is_empty());
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

// ============================================================================
// Pagination Tests
// ============================================================================

#[tokio::test]
async fn test_next_cursor_feeds_the_following_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/apps"))
        .and(query_param("cursor", "ABC%3D"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [app_json("2")],
            "links": {"self": "https://api.appstoreconnect.apple.com/v1/apps?cursor=ABC%253D"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/apps"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [app_json("1")],
            "links": {
                "self": "https://api.appstoreconnect.apple.com/v1/apps?limit=1",
                "next": "https://api.appstoreconnect.apple.com/v1/apps?cursor=ABC%253D&limit=1"
            },
            "meta": {"paging": {"total": 2, "limit": 1}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut query = ListAppsQuery {
        limit: Some(1),
        ..Default::default()
    };

    let first = client.apps().list_apps(&query).await.unwrap();
    assert!(first.has_next_page());
    query.cursor = first.next_cursor();
    assert_eq!(query.cursor.as_deref(), Some("ABC%3D"));

    let second = client.apps().list_apps(&query).await.unwrap();
    assert_eq!(second.data[0].id, "2");
    assert!(!second.has_next_page());
}

// ============================================================================
// Error Tests
// ============================================================================

#[tokio::test]
async fn test_conflict_surfaces_status_and_raw_body() {
    let server = MockServer::start().await;
    let body = r#"{"errors":[{"id":"e1","status":"409","code":"ENTITY_ERROR.ATTRIBUTE.INVALID","title":"An attribute value is invalid.","detail":"bundleId is taken","source":{"pointer":"/data/attributes/bundleId"}}]}"#;
    Mock::given(method("PATCH"))
        .and(path("/v1/apps/42"))
        .respond_with(
            ResponseTemplate::new(409)
                .insert_header("x-request-id", "req-409")
                .set_body_string(body),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = AppUpdateRequest {
        attributes: Some(AppUpdateAttributes {
            bundle_id: Some("com.example.taken".to_string()),
            ..Default::default()
        }),
        relationships: None,
    };
    let error = client.apps().update_app("42", &request).await.unwrap_err();

    match error {
        HttpError::Response(e) => {
            assert_eq!(e.code, 409);
            assert_eq!(e.body, body);
            assert!(e.is_conflict());
            assert_eq!(e.errors[0].code, "ENTITY_ERROR.ATTRIBUTE.INVALID");
            assert_eq!(e.request_id.as_deref(), Some("req-409"));
        }
        other => panic!("expected a response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_undecodable_success_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/apps"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data": 5}"#))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.apps().list_apps(&ListAppsQuery::default()).await.unwrap_err();

    match error {
        HttpError::Decode(e) => {
            assert_eq!(e.code, 200);
            assert_eq!(e.body, r#"{"data": 5}"#);
        }
        other => panic!("expected a decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_not_found_is_distinguishable() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/appInfoLocalizations/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": [{
            "status": "404", "code": "NOT_FOUND", "title": "The specified resource does not exist"
        }]})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.apps().delete_app_info_localization("gone").await.unwrap_err();

    assert_eq!(error.status(), Some(404));
    assert!(matches!(error, HttpError::Response(ref e) if e.is_not_found()));
}

// ============================================================================
// Write Tests
// ============================================================================

#[tokio::test]
async fn test_update_app_sends_envelope_and_reads_rate_limit() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/v1/apps/42"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"data": {
            "id": "42",
            "type": "apps",
            "attributes": {"primaryLocale": "en-GB"}
        }})))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-rate-limit", "user-hour-lim:3600;user-hour-rem:3599;")
                .set_body_json(json!({"data": app_json("42"), "links": {"self": ""}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = AppUpdateRequest {
        attributes: Some(AppUpdateAttributes {
            primary_locale: Some("en-GB".to_string()),
            ..Default::default()
        }),
        relationships: None,
    };
    let app = client.apps().update_app("42", &request).await.unwrap();

    assert_eq!(app.data.id, "42");
    let limit = app.rate_limit().unwrap();
    assert_eq!(limit.limit, 3600);
    assert_eq!(limit.remaining, 3599);
}

#[tokio::test]
async fn test_remove_beta_testers_sends_linkages_in_delete_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/apps/42/relationships/betaTesters"))
        .and(body_json(json!({"data": [
            {"id": "t1", "type": "betaTesters"},
            {"id": "t2", "type": "betaTesters"}
        ]})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let testers = [
        ResourceIdentifier::new("betaTesters", "t1"),
        ResourceIdentifier::new("betaTesters", "t2"),
    ];
    let response = client
        .apps()
        .remove_beta_testers_from_app("42", &testers)
        .await
        .unwrap();

    assert_eq!(response.code, 204);
}

#[tokio::test]
async fn test_create_app_info_localization() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/appInfoLocalizations"))
        .and(body_json(json!({"data": {
            "type": "appInfoLocalizations",
            "attributes": {"locale": "fr-FR"},
            "relationships": {"appInfo": {"data": {"id": "info-1", "type": "appInfos"}}}
        }})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"type": "appInfoLocalizations", "id": "loc-fr", "attributes": {"locale": "fr-FR"}},
            "links": {"self": ""}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = client
        .apps()
        .create_app_info_localization(&AppInfoLocalizationCreateRequest::new("info-1", "fr-FR"))
        .await
        .unwrap();

    assert_eq!(created.status(), 201);
    assert_eq!(created.data.id, "loc-fr");
}

// ============================================================================
// Screenshot Set Tests
// ============================================================================

#[tokio::test]
async fn test_screenshot_set_linkages_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/appScreenshotSets/set-1/relationships/appScreenshots"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"type": "appScreenshots", "id": "s1"}, {"type": "appScreenshots", "id": "s2"}],
            "links": {"self": ""},
            "meta": {"paging": {"total": 2, "limit": 50}}
        })))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/v1/appScreenshotSets/set-1/relationships/appScreenshots"))
        .and(body_json(json!({"data": [
            {"id": "s2", "type": "appScreenshots"},
            {"id": "s1", "type": "appScreenshots"}
        ]})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ids = client
        .apps()
        .list_app_screenshot_ids_for_set("set-1", &ListAppScreenshotIdsQuery::default())
        .await
        .unwrap();

    let mut order = ids.into_inner().data;
    order.reverse();
    let response = client
        .apps()
        .replace_app_screenshots_for_set("set-1", &order)
        .await
        .unwrap();
    assert_eq!(response.code, 204);
}

#[tokio::test]
async fn test_get_screenshot_set_with_included_screenshots() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/appScreenshotSets/set-1"))
        .and(query_param("include", "appScreenshots"))
        .and(query_param("limit[appScreenshots]", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "type": "appScreenshotSets",
                "id": "set-1",
                "attributes": {"screenshotDisplayType": "APP_IPHONE_65"}
            },
            "included": [{"type": "appScreenshots", "id": "s1", "attributes": {"fileName": "a.png"}}],
            "links": {"self": ""}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let set = client
        .apps()
        .get_app_screenshot_set(
            "set-1",
            &GetAppScreenshotSetQuery {
                include: vec!["appScreenshots".to_string()],
                limit_app_screenshots: Some(5),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(
        set.data.attributes.as_ref().unwrap().screenshot_display_type,
        Some(ScreenshotDisplayType::AppIphone65)
    );
    assert_eq!(set.included.len(), 1);
}

#[tokio::test]
async fn test_create_and_delete_screenshot_set() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/appScreenshotSets"))
        .and(body_json(json!({"data": {
            "type": "appScreenshotSets",
            "attributes": {"screenshotDisplayType": "APP_IPAD_PRO_3GEN_129"},
            "relationships": {"appStoreVersionLocalization": {"data": {"id": "vl-1", "type": "appStoreVersionLocalizations"}}}
        }})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"type": "appScreenshotSets", "id": "set-9"},
            "links": {"self": ""}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/appScreenshotSets/set-9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = client
        .apps()
        .create_app_screenshot_set(&AppScreenshotSetCreateRequest {
            app_store_version_localization_id: "vl-1".to_string(),
            screenshot_display_type: ScreenshotDisplayType::AppIpadPro3Gen129,
        })
        .await
        .unwrap();

    let deleted = client
        .apps()
        .delete_app_screenshot_set(&created.data.id)
        .await
        .unwrap();
    assert_eq!(deleted.code, 204);
}
