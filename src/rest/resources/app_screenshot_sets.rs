//! App screenshot sets and their screenshots.
//!
//! A screenshot set groups the screenshots of one display type for one
//! App Store version localization. The order of screenshots in a set is
//! changed by replacing the set's `appScreenshots` linkages.
//!
//! # Example
//!
//! ```rust,ignore
//! use asc_api::rest::resources::{ListAppScreenshotIdsQuery};
//!
//! let ids = client
//!     .apps()
//!     .list_app_screenshot_ids_for_set("set-id", &ListAppScreenshotIdsQuery::default())
//!     .await?;
//!
//! // Reverse the order
//! let mut order = ids.into_inner().data;
//! order.reverse();
//! client.apps().replace_app_screenshots_for_set("set-id", &order).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::{HttpError, HttpResponse};
use crate::rest::resources::assets::{AssetDeliveryState, ImageAsset, UploadOperation};
use crate::rest::resources::AppsService;
use crate::rest::{
    build_path, ApiResponse, Document, LinkagesResponse, RequestBody, Resource, ResourceData,
    ResourceIdentifier, ToManyResponse, ToOne, ToOneResponse,
};

/// Resource type of screenshot sets.
pub const APP_SCREENSHOT_SETS: &str = "appScreenshotSets";

/// Screenshot display target.
///
/// Each variant serializes to the device class name App Store Connect uses,
/// e.g. `APP_IPHONE_65` for 6.5-inch iPhones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenshotDisplayType {
    #[serde(rename = "APP_APPLE_TV")]
    AppAppleTv,
    #[serde(rename = "APP_DESKTOP")]
    AppDesktop,
    #[serde(rename = "APP_IPAD_105")]
    AppIpad105,
    #[serde(rename = "APP_IPAD_97")]
    AppIpad97,
    #[serde(rename = "APP_IPAD_PRO_129")]
    AppIpadPro129,
    #[serde(rename = "APP_IPAD_PRO_3GEN_11")]
    AppIpadPro3Gen11,
    #[serde(rename = "APP_IPAD_PRO_3GEN_129")]
    AppIpadPro3Gen129,
    #[serde(rename = "APP_IPHONE_35")]
    AppIphone35,
    #[serde(rename = "APP_IPHONE_40")]
    AppIphone40,
    #[serde(rename = "APP_IPHONE_47")]
    AppIphone47,
    #[serde(rename = "APP_IPHONE_55")]
    AppIphone55,
    #[serde(rename = "APP_IPHONE_58")]
    AppIphone58,
    #[serde(rename = "APP_IPHONE_65")]
    AppIphone65,
    #[serde(rename = "APP_WATCH_SERIES_3")]
    AppWatchSeries3,
    #[serde(rename = "APP_WATCH_SERIES_4")]
    AppWatchSeries4,
    #[serde(rename = "IMESSAGE_APP_IPAD_105")]
    ImessageAppIpad105,
    #[serde(rename = "IMESSAGE_APP_IPAD_97")]
    ImessageAppIpad97,
    #[serde(rename = "IMESSAGE_APP_IPAD_PRO_129")]
    ImessageAppIpadPro129,
    #[serde(rename = "IMESSAGE_APP_IPAD_PRO_3GEN_11")]
    ImessageAppIpadPro3Gen11,
    #[serde(rename = "IMESSAGE_APP_IPAD_PRO_3GEN_129")]
    ImessageAppIpadPro3Gen129,
    #[serde(rename = "IMESSAGE_APP_IPHONE_40")]
    ImessageAppIphone40,
    #[serde(rename = "IMESSAGE_APP_IPHONE_47")]
    ImessageAppIphone47,
    #[serde(rename = "IMESSAGE_APP_IPHONE_55")]
    ImessageAppIphone55,
    #[serde(rename = "IMESSAGE_APP_IPHONE_58")]
    ImessageAppIphone58,
    #[serde(rename = "IMESSAGE_APP_IPHONE_65")]
    ImessageAppIphone65,
}

/// Attributes of a screenshot set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppScreenshotSetAttributes {
    /// The display target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot_display_type: Option<ScreenshotDisplayType>,
}

/// Relationships of a screenshot set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppScreenshotSetRelationships {
    /// Screenshots in display order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_screenshots: Option<ToManyResponse>,
    /// The owning version localization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_store_version_localization: Option<ToOneResponse>,
}

/// A screenshot set.
pub type AppScreenshotSet = Resource<AppScreenshotSetAttributes, AppScreenshotSetRelationships>;

/// Attributes of a screenshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppScreenshotAttributes {
    /// Size of the uploaded file in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    /// Name of the uploaded file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// MD5 checksum of the source file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file_checksum: Option<String>,
    /// The processed image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_asset: Option<ImageAsset>,
    /// Asset token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_token: Option<String>,
    /// Asset type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    /// Pending upload operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_operations: Option<Vec<UploadOperation>>,
    /// Processing state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_delivery_state: Option<AssetDeliveryState>,
}

/// Relationships of a screenshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppScreenshotRelationships {
    /// The set the screenshot belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_screenshot_set: Option<ToOneResponse>,
}

/// A screenshot.
pub type AppScreenshot = Resource<AppScreenshotAttributes, AppScreenshotRelationships>;

/// A single screenshot set. `included` holds screenshots when requested.
pub type AppScreenshotSetResponse = Document<AppScreenshotSet, AppScreenshot>;

/// A page of screenshots.
pub type AppScreenshotsResponse = Document<Vec<AppScreenshot>>;

/// A new screenshot set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppScreenshotSetCreateRequest {
    /// ID of the App Store version localization the set belongs to.
    pub app_store_version_localization_id: String,
    /// The display target.
    pub screenshot_display_type: ScreenshotDisplayType,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateAttributes {
    screenshot_display_type: ScreenshotDisplayType,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateRelationships {
    app_store_version_localization: ToOne,
}

impl AppScreenshotSetCreateRequest {
    fn to_body(&self) -> RequestBody<ResourceData<CreateAttributes, CreateRelationships>> {
        RequestBody::new(
            ResourceData::create(APP_SCREENSHOT_SETS)
                .with_attributes(CreateAttributes {
                    screenshot_display_type: self.screenshot_display_type,
                })
                .with_relationships(CreateRelationships {
                    app_store_version_localization: ToOne::new(
                        "appStoreVersionLocalizations",
                        self.app_store_version_localization_id.as_str(),
                    ),
                }),
        )
    }
}

/// Query options for [`AppsService::get_app_screenshot_set`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetAppScreenshotSetQuery {
    /// Attributes of `appScreenshots` to return.
    #[serde(rename = "fields[appScreenshots]")]
    pub fields_app_screenshots: Vec<String>,
    /// Attributes of `appScreenshotSets` to return.
    #[serde(rename = "fields[appScreenshotSets]")]
    pub fields_app_screenshot_sets: Vec<String>,
    /// Related resources to include.
    pub include: Vec<String>,
    /// Maximum number of included `appScreenshots`.
    #[serde(rename = "limit[appScreenshots]")]
    pub limit_app_screenshots: Option<u32>,
}

/// Query options for [`AppsService::list_app_screenshots_for_set`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListAppScreenshotsQuery {
    /// Attributes of `appScreenshotSets` to return.
    #[serde(rename = "fields[appScreenshotSets]")]
    pub fields_app_screenshot_sets: Vec<String>,
    /// Attributes of `appScreenshots` to return.
    #[serde(rename = "fields[appScreenshots]")]
    pub fields_app_screenshots: Vec<String>,
    /// Maximum number of resources per page (default 50, max 200).
    pub limit: Option<u32>,
    /// Related resources to include.
    pub include: Vec<String>,
    /// Pagination cursor from a previous page.
    pub cursor: Option<String>,
}

/// Query options for [`AppsService::list_app_screenshot_ids_for_set`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListAppScreenshotIdsQuery {
    /// Maximum number of resources per page (default 50, max 200).
    pub limit: Option<u32>,
    /// Pagination cursor from a previous page.
    pub cursor: Option<String>,
}

impl AppsService<'_> {
    /// Gets a screenshot set, optionally with its screenshots included.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_app_screenshot_set(
        &self,
        id: &str,
        query: &GetAppScreenshotSetQuery,
    ) -> Result<ApiResponse<AppScreenshotSetResponse>, HttpError> {
        self.client()
            .get(&build_path("appScreenshotSets/{id}", &[("id", id)]), query)
            .await
    }

    /// Adds a screenshot set to a version localization.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create_app_screenshot_set(
        &self,
        request: &AppScreenshotSetCreateRequest,
    ) -> Result<ApiResponse<AppScreenshotSetResponse>, HttpError> {
        self.client().post(APP_SCREENSHOT_SETS, &request.to_body()).await
    }

    /// Deletes a screenshot set and its screenshots.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_app_screenshot_set(&self, id: &str) -> Result<HttpResponse, HttpError> {
        self.client()
            .delete(&build_path("appScreenshotSets/{id}", &[("id", id)]))
            .await
    }

    /// Lists the screenshots of a set.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list_app_screenshots_for_set(
        &self,
        id: &str,
        query: &ListAppScreenshotsQuery,
    ) -> Result<ApiResponse<AppScreenshotsResponse>, HttpError> {
        self.client()
            .get(&build_path("appScreenshotSets/{id}/appScreenshots", &[("id", id)]), query)
            .await
    }

    /// Lists the IDs of the screenshots of a set, in display order.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list_app_screenshot_ids_for_set(
        &self,
        id: &str,
        query: &ListAppScreenshotIdsQuery,
    ) -> Result<ApiResponse<LinkagesResponse>, HttpError> {
        self.client()
            .get(
                &build_path("appScreenshotSets/{id}/relationships/appScreenshots", &[("id", id)]),
                query,
            )
            .await
    }

    /// Replaces the screenshots of a set. The order of `screenshots`
    /// becomes the display order.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn replace_app_screenshots_for_set(
        &self,
        id: &str,
        screenshots: &[ResourceIdentifier],
    ) -> Result<HttpResponse, HttpError> {
        self.client()
            .patch_no_content(
                &build_path("appScreenshotSets/{id}/relationships/appScreenshots", &[("id", id)]),
                &RequestBody::new(screenshots),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::QueryParams;
    use serde_json::json;

    #[test]
    fn test_display_type_wire_names() {
        assert_eq!(
            serde_json::to_value(ScreenshotDisplayType::AppIpadPro3Gen129).unwrap(),
            json!("APP_IPAD_PRO_3GEN_129")
        );
        assert_eq!(
            serde_json::from_value::<ScreenshotDisplayType>(json!("IMESSAGE_APP_IPHONE_65")).unwrap(),
            ScreenshotDisplayType::ImessageAppIphone65
        );
    }

    #[test]
    fn test_create_body() {
        let request = AppScreenshotSetCreateRequest {
            app_store_version_localization_id: "loc-1".to_string(),
            screenshot_display_type: ScreenshotDisplayType::AppIphone65,
        };

        assert_eq!(
            serde_json::to_value(request.to_body()).unwrap(),
            json!({"data": {
                "type": "appScreenshotSets",
                "attributes": {"screenshotDisplayType": "APP_IPHONE_65"},
                "relationships": {
                    "appStoreVersionLocalization": {
                        "data": {"id": "loc-1", "type": "appStoreVersionLocalizations"}
                    }
                }
            }})
        );
    }

    #[test]
    fn test_set_with_included_screenshots() {
        let body = json!({
            "data": {
                "type": "appScreenshotSets",
                "id": "set-1",
                "attributes": {"screenshotDisplayType": "APP_IPHONE_65"},
                "relationships": {
                    "appScreenshots": {
                        "data": [{"type": "appScreenshots", "id": "s1"}],
                        "meta": {"paging": {"total": 1, "limit": 10}}
                    }
                }
            },
            "included": [{
                "type": "appScreenshots",
                "id": "s1",
                "attributes": {
                    "fileName": "one.png",
                    "fileSize": 2048,
                    "assetDeliveryState": {"state": "COMPLETE"}
                }
            }],
            "links": {"self": "https://api.appstoreconnect.apple.com/v1/appScreenshotSets/set-1"}
        });

        let response: AppScreenshotSetResponse = serde_json::from_value(body).unwrap();
        let linkage = response.data.relationships.as_ref().unwrap().app_screenshots.as_ref().unwrap();
        assert_eq!(linkage.data.as_ref().unwrap()[0].id, "s1");
        assert_eq!(linkage.meta.as_ref().unwrap().paging.total, 1);

        let screenshot = &response.included[0];
        assert_eq!(
            screenshot.attributes.as_ref().unwrap().file_name.as_deref(),
            Some("one.png")
        );
    }

    #[test]
    fn test_ids_query() {
        let query = ListAppScreenshotIdsQuery {
            limit: Some(20),
            cursor: None,
        };
        assert_eq!(QueryParams::from_options(&query).unwrap().to_query_string(), "limit=20");
    }
}
