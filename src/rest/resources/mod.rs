//! Resource models and service methods.
//!
//! Each module holds the models, query options and operations of one
//! resource family. Operations are methods of a service obtained from the
//! [`RestClient`](crate::RestClient):
//!
//! - [`AppsService`] (`client.apps()`): apps, in-app purchases, app info
//!   localizations and app screenshot sets
//! - [`SubscriptionsService`] (`client.subscriptions()`): subscription
//!   groups, subscriptions and their App Review screenshots
//!
//! # Example
//!
//! ```rust,ignore
//! use asc_api::rest::resources::{GetAppScreenshotSetQuery, ListAppsQuery};
//!
//! let apps = client.apps().list_apps(&ListAppsQuery::default()).await?;
//!
//! let set = client
//!     .apps()
//!     .get_app_screenshot_set(
//!         "set-id",
//!         &GetAppScreenshotSetQuery {
//!             include: vec!["appScreenshots".to_string()],
//!             ..Default::default()
//!         },
//!     )
//!     .await?;
//! for screenshot in &set.included {
//!     println!("{:?}", screenshot.attributes);
//! }
//! ```
//!
//! # Query Options
//!
//! Query structs name their fields after the bracketed parameter they set,
//! so `filter_bundle_id` is sent as `filter[bundleId]` and
//! `limit_builds` as `limit[builds]`. Unset fields are not sent.

mod app_info_localizations;
mod app_screenshot_sets;
mod apps;
mod assets;
mod in_app_purchases;
mod subscription_review_screenshots;
mod subscriptions;

pub use app_info_localizations::{
    AppInfoLocalization, AppInfoLocalizationAttributes, AppInfoLocalizationCreateAttributes,
    AppInfoLocalizationCreateRequest, AppInfoLocalizationRelationships, AppInfoLocalizationResponse,
    AppInfoLocalizationUpdateAttributes, AppInfoLocalizationsResponse, GetAppInfoLocalizationQuery,
    ListAppInfoLocalizationsQuery, APP_INFO_LOCALIZATIONS,
};
pub use app_screenshot_sets::{
    AppScreenshot, AppScreenshotAttributes, AppScreenshotRelationships, AppScreenshotSet,
    AppScreenshotSetAttributes, AppScreenshotSetCreateRequest, AppScreenshotSetRelationships,
    AppScreenshotSetResponse, AppScreenshotsResponse, GetAppScreenshotSetQuery,
    ListAppScreenshotIdsQuery, ListAppScreenshotsQuery, ScreenshotDisplayType, APP_SCREENSHOT_SETS,
};
pub use apps::{
    App, AppAttributes, AppRelationships, AppResponse, AppUpdateAttributes, AppUpdateRelationships,
    AppUpdateRequest, AppsResponse, AppsService, GetAppQuery, ListAppsQuery, Platform, APPS,
};
pub use assets::{
    AssetDeliveryError, AssetDeliveryState, AssetState, ImageAsset, UploadOperation,
    UploadOperationHeader,
};
pub use in_app_purchases::{
    GetInAppPurchaseQuery, InAppPurchase, InAppPurchaseAttributes, InAppPurchaseRelationships,
    InAppPurchaseResponse, InAppPurchaseType, InAppPurchasesResponse, ListInAppPurchasesQuery,
    IN_APP_PURCHASES,
};
pub use subscription_review_screenshots::{
    SubscriptionReviewScreenshot, SubscriptionReviewScreenshotAttributes,
    SubscriptionReviewScreenshotRelationships, SubscriptionReviewScreenshotResponse,
    SUBSCRIPTION_REVIEW_SCREENSHOTS,
};
pub use subscriptions::{
    ListSubscriptionsQuery, Subscription, SubscriptionAttributes, SubscriptionCreateAttributes,
    SubscriptionCreateRequest, SubscriptionGroup, SubscriptionGroupAttributes,
    SubscriptionGroupRelationships, SubscriptionGroupResponse, SubscriptionPeriod,
    SubscriptionPriceData, SubscriptionPriceInline, SubscriptionPriceInlineAttributes,
    SubscriptionPriceInlineRelationships, SubscriptionRelationships, SubscriptionResponse,
    SubscriptionState, SubscriptionUpdateAttributes, SubscriptionUpdateBody,
    SubscriptionUpdateRelationships, SubscriptionUpdateRequest, SubscriptionsResponse,
    SubscriptionsService, SUBSCRIPTIONS, SUBSCRIPTION_GROUPS, SUBSCRIPTION_PRICES,
};
