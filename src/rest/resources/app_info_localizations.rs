//! App info localizations: the per-locale name, subtitle and privacy
//! policy of an app.
//!
//! # Example
//!
//! ```rust,ignore
//! use asc_api::rest::resources::{AppInfoLocalizationCreateRequest, AppInfoLocalizationUpdateAttributes};
//!
//! let created = client
//!     .apps()
//!     .create_app_info_localization(&AppInfoLocalizationCreateRequest::new("app-info-id", "de-DE"))
//!     .await?;
//!
//! client
//!     .apps()
//!     .update_app_info_localization(
//!         &created.data.id,
//!         &AppInfoLocalizationUpdateAttributes {
//!             subtitle: Some("Die beste App".to_string()),
//!             ..Default::default()
//!         },
//!     )
//!     .await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::{HttpError, HttpResponse};
use crate::rest::resources::AppsService;
use crate::rest::{
    build_path, ApiResponse, Document, RequestBody, Resource, ResourceData, ToOne, ToOneResponse,
};

/// Resource type of app info localizations.
pub const APP_INFO_LOCALIZATIONS: &str = "appInfoLocalizations";

/// Attributes of an app info localization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfoLocalizationAttributes {
    /// The locale, e.g. `en-US`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// The localized app name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Privacy policy text (tvOS).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_policy_text: Option<String>,
    /// Privacy policy URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_policy_url: Option<String>,
    /// Privacy choices URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_choices_url: Option<String>,
    /// The localized subtitle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

/// Relationships of an app info localization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfoLocalizationRelationships {
    /// The owning app info.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_info: Option<ToOneResponse>,
}

/// An app info localization.
pub type AppInfoLocalization = Resource<AppInfoLocalizationAttributes, AppInfoLocalizationRelationships>;

/// A single app info localization.
pub type AppInfoLocalizationResponse = Document<AppInfoLocalization>;

/// A page of app info localizations.
pub type AppInfoLocalizationsResponse = Document<Vec<AppInfoLocalization>>;

/// Attributes for creating a localization. `locale` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfoLocalizationCreateAttributes {
    /// The locale.
    pub locale: String,
    /// The localized app name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Privacy policy text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_policy_text: Option<String>,
    /// Privacy policy URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_policy_url: Option<String>,
    /// Privacy choices URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_choices_url: Option<String>,
    /// The localized subtitle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AppInfoLocalizationCreateRelationships {
    app_info: ToOne,
}

/// A new localization for an app info.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfoLocalizationCreateRequest {
    /// ID of the app info the localization belongs to.
    pub app_info_id: String,
    /// The attributes.
    pub attributes: AppInfoLocalizationCreateAttributes,
}

impl AppInfoLocalizationCreateRequest {
    /// Creates a request for `locale` with no other attributes set.
    #[must_use]
    pub fn new(app_info_id: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            app_info_id: app_info_id.into(),
            attributes: AppInfoLocalizationCreateAttributes {
                locale: locale.into(),
                ..Default::default()
            },
        }
    }

    fn to_body(
        &self,
    ) -> RequestBody<ResourceData<&AppInfoLocalizationCreateAttributes, AppInfoLocalizationCreateRelationships>>
    {
        RequestBody::new(
            ResourceData::create(APP_INFO_LOCALIZATIONS)
                .with_attributes(&self.attributes)
                .with_relationships(AppInfoLocalizationCreateRelationships {
                    app_info: ToOne::new("appInfos", self.app_info_id.as_str()),
                }),
        )
    }
}

/// Attributes that can be changed on a localization. The locale is fixed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfoLocalizationUpdateAttributes {
    /// The localized app name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Privacy policy text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_policy_text: Option<String>,
    /// Privacy policy URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_policy_url: Option<String>,
    /// Privacy choices URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_choices_url: Option<String>,
    /// The localized subtitle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

/// Query options for [`AppsService::list_app_info_localizations_for_app_info`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListAppInfoLocalizationsQuery {
    /// Attributes of `appInfos` to return.
    #[serde(rename = "fields[appInfos]")]
    pub fields_app_infos: Vec<String>,
    /// Attributes of `appInfoLocalizations` to return.
    #[serde(rename = "fields[appInfoLocalizations]")]
    pub fields_app_info_localizations: Vec<String>,
    /// Maximum number of resources per page (default 50, max 200).
    pub limit: Option<u32>,
    /// Related resources to include.
    pub include: Vec<String>,
    /// Only return resources matching these `locale` values.
    #[serde(rename = "filter[locale]")]
    pub filter_locale: Vec<String>,
    /// Pagination cursor from a previous page.
    pub cursor: Option<String>,
}

/// Query options for [`AppsService::get_app_info_localization`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetAppInfoLocalizationQuery {
    /// Attributes of `appInfoLocalizations` to return.
    #[serde(rename = "fields[appInfoLocalizations]")]
    pub fields_app_info_localizations: Vec<String>,
    /// Related resources to include.
    pub include: Vec<String>,
}

impl AppsService<'_> {
    /// Lists the localized metadata of an app info.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list_app_info_localizations_for_app_info(
        &self,
        id: &str,
        query: &ListAppInfoLocalizationsQuery,
    ) -> Result<ApiResponse<AppInfoLocalizationsResponse>, HttpError> {
        self.client()
            .get(&build_path("appInfos/{id}/appInfoLocalizations", &[("id", id)]), query)
            .await
    }

    /// Reads one app info localization.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_app_info_localization(
        &self,
        id: &str,
        query: &GetAppInfoLocalizationQuery,
    ) -> Result<ApiResponse<AppInfoLocalizationResponse>, HttpError> {
        self.client()
            .get(&build_path("appInfoLocalizations/{id}", &[("id", id)]), query)
            .await
    }

    /// Adds localized metadata to an app info.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails, e.g. with `409` when the
    /// locale already exists.
    pub async fn create_app_info_localization(
        &self,
        request: &AppInfoLocalizationCreateRequest,
    ) -> Result<ApiResponse<AppInfoLocalizationResponse>, HttpError> {
        self.client().post(APP_INFO_LOCALIZATIONS, &request.to_body()).await
    }

    /// Modifies the localized metadata of an app info.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_app_info_localization(
        &self,
        id: &str,
        attributes: &AppInfoLocalizationUpdateAttributes,
    ) -> Result<ApiResponse<AppInfoLocalizationResponse>, HttpError> {
        let body = RequestBody::new(
            ResourceData::update(APP_INFO_LOCALIZATIONS, id).with_attributes(attributes),
        );
        self.client()
            .patch(&build_path("appInfoLocalizations/{id}", &[("id", id)]), &body)
            .await
    }

    /// Deletes an app info localization.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_app_info_localization(&self, id: &str) -> Result<HttpResponse, HttpError> {
        self.client()
            .delete(&build_path("appInfoLocalizations/{id}", &[("id", id)]))
            .await
    }
}
