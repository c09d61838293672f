//! App resources.
//!
//! An app is the root of most App Store Connect data: versions, builds,
//! in-app purchases, metadata and pricing all hang off it.
//!
//! # Example
//!
//! ```rust,ignore
//! use asc_api::rest::resources::{AppUpdateAttributes, AppUpdateRequest, ListAppsQuery};
//!
//! let apps = client
//!     .apps()
//!     .list_apps(&ListAppsQuery {
//!         filter_bundle_id: vec!["com.example.app".to_string()],
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let app_id = &apps.data[0].id;
//! let update = AppUpdateRequest {
//!     attributes: Some(AppUpdateAttributes {
//!         primary_locale: Some("en-GB".to_string()),
//!         ..Default::default()
//!     }),
//!     relationships: None,
//! };
//! client.apps().update_app(app_id, &update).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::{HttpError, HttpResponse, RestClient};
use crate::rest::{
    build_path, ApiResponse, Document, RequestBody, Resource, ResourceData, ResourceIdentifier,
    ToMany, ToManyResponse, ToOneResponse,
};

/// Resource type of apps.
pub const APPS: &str = "apps";

/// Operating system an app or version targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// iOS.
    #[serde(rename = "IOS")]
    Ios,
    /// macOS.
    #[serde(rename = "MAC_OS")]
    MacOs,
    /// tvOS.
    #[serde(rename = "TV_OS")]
    TvOs,
}

/// Attributes of an app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppAttributes {
    /// Whether the app becomes available in territories Apple adds later.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_in_new_territories: Option<bool>,
    /// The bundle ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<String>,
    /// Third-party content declaration, e.g. `DOES_NOT_USE_THIRD_PARTY_CONTENT`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_rights_declaration: Option<String>,
    /// Whether the app is, or ever was, made for kids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_or_ever_was_made_for_kids: Option<bool>,
    /// The app name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The primary locale, e.g. `en-US`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_locale: Option<String>,
    /// The SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

/// Relationships of an app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppRelationships {
    /// App info records, one per App Store state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_infos: Option<ToManyResponse>,
    /// App Store versions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_store_versions: Option<ToManyResponse>,
    /// Territories the app is available in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_territories: Option<ToManyResponse>,
    /// Localized TestFlight information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta_app_localizations: Option<ToManyResponse>,
    /// TestFlight review contact details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta_app_review_detail: Option<ToOneResponse>,
    /// TestFlight beta groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta_groups: Option<ToManyResponse>,
    /// TestFlight license agreement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta_license_agreement: Option<ToOneResponse>,
    /// Uploaded builds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builds: Option<ToManyResponse>,
    /// Custom end user license agreement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_user_license_agreement: Option<ToOneResponse>,
    /// Versions with Game Center enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_center_enabled_versions: Option<ToManyResponse>,
    /// In-app purchases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_app_purchases: Option<ToManyResponse>,
    /// Pre-order settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_order: Option<ToOneResponse>,
    /// TestFlight pre-release versions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_release_versions: Option<ToManyResponse>,
    /// Price schedule entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices: Option<ToManyResponse>,
    /// Subscription groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_groups: Option<ToManyResponse>,
}

/// An app.
pub type App = Resource<AppAttributes, AppRelationships>;

/// Response of [`AppsService::get_app`] and [`AppsService::update_app`].
pub type AppResponse = Document<App>;

/// A page of apps.
pub type AppsResponse = Document<Vec<App>>;

/// Attributes that can be changed on an app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUpdateAttributes {
    /// Whether the app becomes available in territories Apple adds later.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_in_new_territories: Option<bool>,
    /// The bundle ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<String>,
    /// Third-party content declaration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_rights_declaration: Option<String>,
    /// The primary locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_locale: Option<String>,
}

/// Relationships that can be replaced on an app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUpdateRelationships {
    /// Territories the app is available in (`territories`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_territories: Option<ToMany>,
    /// Price schedule entries (`appPrices`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices: Option<ToMany>,
}

/// Changes to apply to an app.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppUpdateRequest {
    /// Attribute changes.
    pub attributes: Option<AppUpdateAttributes>,
    /// Relationship replacements.
    pub relationships: Option<AppUpdateRelationships>,
}

impl AppUpdateRequest {
    /// Builds the request body for the app `id`.
    #[must_use]
    pub fn to_body(
        &self,
        id: &str,
    ) -> RequestBody<ResourceData<&AppUpdateAttributes, &AppUpdateRelationships>> {
        RequestBody::new(ResourceData {
            id: Some(id.to_string()),
            kind: APPS.to_string(),
            attributes: self.attributes.as_ref(),
            relationships: self.relationships.as_ref(),
        })
    }
}

/// Query options for [`AppsService::list_apps`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListAppsQuery {
    /// Attributes of `apps` to return.
    #[serde(rename = "fields[apps]")]
    pub fields_apps: Vec<String>,
    /// Attributes of `betaLicenseAgreements` to return.
    #[serde(rename = "fields[betaLicenseAgreements]")]
    pub fields_beta_license_agreements: Vec<String>,
    /// Attributes of `preReleaseVersions` to return.
    #[serde(rename = "fields[preReleaseVersions]")]
    pub fields_pre_release_versions: Vec<String>,
    /// Attributes of `betaAppReviewDetails` to return.
    #[serde(rename = "fields[betaAppReviewDetails]")]
    pub fields_beta_app_review_details: Vec<String>,
    /// Attributes of `betaAppLocalizations` to return.
    #[serde(rename = "fields[betaAppLocalizations]")]
    pub fields_beta_app_localizations: Vec<String>,
    /// Attributes of `builds` to return.
    #[serde(rename = "fields[builds]")]
    pub fields_builds: Vec<String>,
    /// Attributes of `betaGroups` to return.
    #[serde(rename = "fields[betaGroups]")]
    pub fields_beta_groups: Vec<String>,
    /// Attributes of `endUserLicenseAgreements` to return.
    #[serde(rename = "fields[endUserLicenseAgreements]")]
    pub fields_end_user_license_agreements: Vec<String>,
    /// Attributes of `appStoreVersions` to return.
    #[serde(rename = "fields[appStoreVersions]")]
    pub fields_app_store_versions: Vec<String>,
    /// Attributes of `territories` to return.
    #[serde(rename = "fields[territories]")]
    pub fields_territories: Vec<String>,
    /// Attributes of `appPrices` to return.
    #[serde(rename = "fields[appPrices]")]
    pub fields_app_prices: Vec<String>,
    /// Attributes of `appPreOrders` to return.
    #[serde(rename = "fields[appPreOrders]")]
    pub fields_app_pre_orders: Vec<String>,
    /// Attributes of `appInfos` to return.
    #[serde(rename = "fields[appInfos]")]
    pub fields_app_infos: Vec<String>,
    /// Attributes of `perfPowerMetrics` to return.
    #[serde(rename = "fields[perfPowerMetrics]")]
    pub fields_perf_power_metrics: Vec<String>,
    /// Attributes of `inAppPurchases` to return.
    #[serde(rename = "fields[inAppPurchases]")]
    pub fields_in_app_purchases: Vec<String>,
    /// Only return resources matching these `bundleId` values.
    #[serde(rename = "filter[bundleId]")]
    pub filter_bundle_id: Vec<String>,
    /// Only return resources matching these `id` values.
    #[serde(rename = "filter[id]")]
    pub filter_id: Vec<String>,
    /// Only return resources matching these `name` values.
    #[serde(rename = "filter[name]")]
    pub filter_name: Vec<String>,
    /// Only return resources matching these `sku` values.
    #[serde(rename = "filter[sku]")]
    pub filter_sku: Vec<String>,
    /// Only return resources matching these `appStoreVersions` values.
    #[serde(rename = "filter[appStoreVersions]")]
    pub filter_app_store_versions: Vec<String>,
    /// Only return resources matching these `appStoreVersions.platform` values.
    #[serde(rename = "filter[appStoreVersions.platform]")]
    pub filter_app_store_versions_platform: Vec<Platform>,
    /// Only return resources matching these `appStoreVersions.appStoreState` values.
    #[serde(rename = "filter[appStoreVersions.appStoreState]")]
    pub filter_app_store_versions_app_store_state: Vec<String>,
    /// Only return resources matching these `gameCenterEnabledVersions` values.
    #[serde(rename = "filter[gameCenterEnabledVersions]")]
    pub filter_game_center_enabled_versions: Vec<String>,
    /// Related resources to include.
    pub include: Vec<String>,
    /// Maximum number of resources per page (default 50, max 200).
    pub limit: Option<u32>,
    /// Maximum number of included `preReleaseVersions`.
    #[serde(rename = "limit[preReleaseVersions]")]
    pub limit_pre_release_versions: Option<u32>,
    /// Maximum number of included `builds`.
    #[serde(rename = "limit[builds]")]
    pub limit_builds: Option<u32>,
    /// Maximum number of included `betaGroups`.
    #[serde(rename = "limit[betaGroups]")]
    pub limit_beta_groups: Option<u32>,
    /// Maximum number of included `betaAppLocalizations`.
    #[serde(rename = "limit[betaAppLocalizations]")]
    pub limit_beta_app_localizations: Option<u32>,
    /// Maximum number of included `prices`.
    #[serde(rename = "limit[prices]")]
    pub limit_prices: Option<u32>,
    /// Maximum number of included `availableTerritories`.
    #[serde(rename = "limit[availableTerritories]")]
    pub limit_available_territories: Option<u32>,
    /// Maximum number of included `appStoreVersions`.
    #[serde(rename = "limit[appStoreVersions]")]
    pub limit_app_store_versions: Option<u32>,
    /// Maximum number of included `appInfos`.
    #[serde(rename = "limit[appInfos]")]
    pub limit_app_infos: Option<u32>,
    /// Maximum number of included `gameCenterEnabledVersions`.
    #[serde(rename = "limit[gameCenterEnabledVersions]")]
    pub limit_game_center_enabled_versions: Option<u32>,
    /// Maximum number of included `inAppPurchases`.
    #[serde(rename = "limit[inAppPurchases]")]
    pub limit_in_app_purchases: Option<u32>,
    /// Sort keys, prefixed with `-` for descending order.
    pub sort: Vec<String>,
    /// Only return resources where `gameCenterEnabledVersions` exists (or, if `false`, does not).
    #[serde(rename = "exists[gameCenterEnabledVersions]")]
    pub exists_game_center_enabled_versions: Option<bool>,
    /// Pagination cursor from a previous page.
    pub cursor: Option<String>,
}

/// Query options for [`AppsService::get_app`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetAppQuery {
    /// Attributes of `apps` to return.
    #[serde(rename = "fields[apps]")]
    pub fields_apps: Vec<String>,
    /// Attributes of `betaLicenseAgreements` to return.
    #[serde(rename = "fields[betaLicenseAgreements]")]
    pub fields_beta_license_agreements: Vec<String>,
    /// Attributes of `preReleaseVersions` to return.
    #[serde(rename = "fields[preReleaseVersions]")]
    pub fields_pre_release_versions: Vec<String>,
    /// Attributes of `betaAppReviewDetails` to return.
    #[serde(rename = "fields[betaAppReviewDetails]")]
    pub fields_beta_app_review_details: Vec<String>,
    /// Attributes of `betaAppLocalizations` to return.
    #[serde(rename = "fields[betaAppLocalizations]")]
    pub fields_beta_app_localizations: Vec<String>,
    /// Attributes of `builds` to return.
    #[serde(rename = "fields[builds]")]
    pub fields_builds: Vec<String>,
    /// Attributes of `betaGroups` to return.
    #[serde(rename = "fields[betaGroups]")]
    pub fields_beta_groups: Vec<String>,
    /// Attributes of `endUserLicenseAgreements` to return.
    #[serde(rename = "fields[endUserLicenseAgreements]")]
    pub fields_end_user_license_agreements: Vec<String>,
    /// Attributes of `appStoreVersions` to return.
    #[serde(rename = "fields[appStoreVersions]")]
    pub fields_app_store_versions: Vec<String>,
    /// Attributes of `territories` to return.
    #[serde(rename = "fields[territories]")]
    pub fields_territories: Vec<String>,
    /// Attributes of `appPrices` to return.
    #[serde(rename = "fields[appPrices]")]
    pub fields_app_prices: Vec<String>,
    /// Attributes of `appPreOrders` to return.
    #[serde(rename = "fields[appPreOrders]")]
    pub fields_app_pre_orders: Vec<String>,
    /// Attributes of `appInfos` to return.
    #[serde(rename = "fields[appInfos]")]
    pub fields_app_infos: Vec<String>,
    /// Attributes of `perfPowerMetrics` to return.
    #[serde(rename = "fields[perfPowerMetrics]")]
    pub fields_perf_power_metrics: Vec<String>,
    /// Attributes of `gameCenterEnabledVersions` to return.
    #[serde(rename = "fields[gameCenterEnabledVersions]")]
    pub fields_game_center_enabled_versions: Vec<String>,
    /// Attributes of `inAppPurchases` to return.
    #[serde(rename = "fields[inAppPurchases]")]
    pub fields_in_app_purchases: Vec<String>,
    /// Related resources to include.
    pub include: Vec<String>,
    /// Maximum number of included `preReleaseVersions`.
    #[serde(rename = "limit[preReleaseVersions]")]
    pub limit_pre_release_versions: Option<u32>,
    /// Maximum number of included `builds`.
    #[serde(rename = "limit[builds]")]
    pub limit_builds: Option<u32>,
    /// Maximum number of included `betaGroups`.
    #[serde(rename = "limit[betaGroups]")]
    pub limit_beta_groups: Option<u32>,
    /// Maximum number of included `betaAppLocalizations`.
    #[serde(rename = "limit[betaAppLocalizations]")]
    pub limit_beta_app_localizations: Option<u32>,
    /// Maximum number of included `prices`.
    #[serde(rename = "limit[prices]")]
    pub limit_prices: Option<u32>,
    /// Maximum number of included `availableTerritories`.
    #[serde(rename = "limit[availableTerritories]")]
    pub limit_available_territories: Option<u32>,
    /// Maximum number of included `appStoreVersions`.
    #[serde(rename = "limit[appStoreVersions]")]
    pub limit_app_store_versions: Option<u32>,
    /// Maximum number of included `appInfos`.
    #[serde(rename = "limit[appInfos]")]
    pub limit_app_infos: Option<u32>,
    /// Maximum number of included `gameCenterEnabledVersions`.
    #[serde(rename = "limit[gameCenterEnabledVersions]")]
    pub limit_game_center_enabled_versions: Option<u32>,
    /// Maximum number of included `inAppPurchases`.
    #[serde(rename = "limit[inAppPurchases]")]
    pub limit_in_app_purchases: Option<u32>,
}

/// Operations on apps and their metadata.
///
/// Obtained from [`RestClient::apps`]. In-app purchase, app info
/// localization and screenshot set operations live in their own modules
/// but are methods of this service too.
#[derive(Debug, Clone, Copy)]
pub struct AppsService<'a> {
    client: &'a RestClient,
}

impl<'a> AppsService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    pub(crate) const fn client(&self) -> &'a RestClient {
        self.client
    }

    /// Finds and lists apps added in App Store Connect.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list_apps(&self, query: &ListAppsQuery) -> Result<ApiResponse<AppsResponse>, HttpError> {
        self.client.get(APPS, query).await
    }

    /// Gets information about a specific app.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_app(&self, id: &str, query: &GetAppQuery) -> Result<ApiResponse<AppResponse>, HttpError> {
        self.client.get(&build_path("apps/{id}", &[("id", id)]), query).await
    }

    /// Updates app information including bundle ID, primary locale, price
    /// schedule and global availability.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_app(
        &self,
        id: &str,
        request: &AppUpdateRequest,
    ) -> Result<ApiResponse<AppResponse>, HttpError> {
        self.client
            .patch(&build_path("apps/{id}", &[("id", id)]), &request.to_body(id))
            .await
    }

    /// Removes beta testers' access to every build of an app.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn remove_beta_testers_from_app(
        &self,
        id: &str,
        testers: &[ResourceIdentifier],
    ) -> Result<HttpResponse, HttpError> {
        self.client
            .delete_with_body(
                &build_path("apps/{id}/relationships/betaTesters", &[("id", id)]),
                &RequestBody::new(testers),
            )
            .await
    }
}
