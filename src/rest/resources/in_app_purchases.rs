//! In-app purchase resources (read-only).

use serde::{Deserialize, Serialize};

use crate::clients::HttpError;
use crate::rest::resources::AppsService;
use crate::rest::{build_path, ApiResponse, Document, Resource, ToManyResponse};

/// Resource type of in-app purchases.
pub const IN_APP_PURCHASES: &str = "inAppPurchases";

/// Kind of in-app purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InAppPurchaseType {
    /// Auto-renewable subscription.
    AutomaticallyRenewableSubscription,
    /// Non-consumable purchase.
    NonConsumable,
    /// Consumable purchase.
    Consumable,
    /// Non-renewing subscription.
    NonRenewingSubscription,
    /// Free subscription.
    FreeSubscription,
}

/// Attributes of an in-app purchase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InAppPurchaseAttributes {
    /// The purchase type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_app_purchase_type: Option<InAppPurchaseType>,
    /// The product identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Internal reference name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_name: Option<String>,
    /// Review state, e.g. `APPROVED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Relationships of an in-app purchase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InAppPurchaseRelationships {
    /// Apps offering the purchase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apps: Option<ToManyResponse>,
}

/// An in-app purchase.
pub type InAppPurchase = Resource<InAppPurchaseAttributes, InAppPurchaseRelationships>;

/// A single in-app purchase.
pub type InAppPurchaseResponse = Document<InAppPurchase>;

/// A page of in-app purchases.
pub type InAppPurchasesResponse = Document<Vec<InAppPurchase>>;

/// Query options for [`AppsService::list_in_app_purchases_for_app`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListInAppPurchasesQuery {
    /// Attributes of `apps` to return.
    #[serde(rename = "fields[apps]")]
    pub fields_apps: Vec<String>,
    /// Attributes of `inAppPurchases` to return.
    #[serde(rename = "fields[inAppPurchases]")]
    pub fields_in_app_purchases: Vec<String>,
    /// Only return resources matching these `canBeSubmitted` values.
    #[serde(rename = "filter[canBeSubmitted]")]
    pub filter_can_be_submitted: Vec<String>,
    /// Only return resources matching these `inAppPurchaseType` values.
    #[serde(rename = "filter[inAppPurchaseType]")]
    pub filter_in_app_purchase_type: Vec<InAppPurchaseType>,
    /// Maximum number of resources per page (default 50, max 200).
    pub limit: Option<u32>,
    /// Related resources to include.
    pub include: Vec<String>,
    /// Sort keys, prefixed with `-` for descending order.
    pub sort: Vec<String>,
    /// Pagination cursor from a previous page.
    pub cursor: Option<String>,
}

/// Query options for [`AppsService::get_in_app_purchase`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetInAppPurchaseQuery {
    /// Attributes of `inAppPurchases` to return.
    #[serde(rename = "fields[inAppPurchases]")]
    pub fields_in_app_purchases: Vec<String>,
    /// Related resources to include.
    pub include: Vec<String>,
    /// Maximum number of included `apps`.
    #[serde(rename = "limit[apps]")]
    pub limit_apps: Option<u32>,
}

impl AppsService<'_> {
    /// Lists the in-app purchases available for an app.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list_in_app_purchases_for_app(
        &self,
        id: &str,
        query: &ListInAppPurchasesQuery,
    ) -> Result<ApiResponse<InAppPurchasesResponse>, HttpError> {
        self.client()
            .get(&build_path("apps/{id}/inAppPurchases", &[("id", id)]), query)
            .await
    }

    /// Gets information about an in-app purchase.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_in_app_purchase(
        &self,
        id: &str,
        query: &GetInAppPurchaseQuery,
    ) -> Result<ApiResponse<InAppPurchaseResponse>, HttpError> {
        self.client()
            .get(&build_path("inAppPurchases/{id}", &[("id", id)]), query)
            .await
    }
}
