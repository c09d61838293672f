//! Auto-renewable subscriptions and subscription groups.
//!
//! Subscriptions live in a subscription group owned by an app. Prices are
//! created inline while updating a subscription: each new price is an
//! `included` resource with a placeholder ID that the subscription's
//! `prices` relationship refers to.
//!
//! # Example
//!
//! ```rust,ignore
//! use asc_api::rest::resources::{SubscriptionPriceInline, SubscriptionUpdateRequest};
//! use asc_api::rest::Placeholder;
//!
//! let group = client
//!     .subscriptions()
//!     .create_subscription_group("1234567890", "Premium")
//!     .await?;
//!
//! let update = SubscriptionUpdateRequest::default()
//!     .add_price(Placeholder::new("usa"), SubscriptionPriceInline::new("price-point-usa"))
//!     .add_price(Placeholder::new("deu"), SubscriptionPriceInline::new("price-point-deu"));
//! client.subscriptions().update_subscription("sub-id", &update).await?;
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clients::{HttpError, RestClient};
use crate::rest::{
    build_path, ApiResponse, Document, Placeholder, RequestBody, Resource, ResourceData, ToMany,
    ToManyResponse, ToOne, ToOneResponse,
};

/// Resource type of subscription groups.
pub const SUBSCRIPTION_GROUPS: &str = "subscriptionGroups";
/// Resource type of subscriptions.
pub const SUBSCRIPTIONS: &str = "subscriptions";
/// Resource type of subscription prices.
pub const SUBSCRIPTION_PRICES: &str = "subscriptionPrices";

/// Attributes of a subscription group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionGroupAttributes {
    /// Internal reference name.
    #[serde(default)]
    pub reference_name: String,
}

/// Relationships of a subscription group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionGroupRelationships {
    /// Subscriptions in the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriptions: Option<ToManyResponse>,
    /// Group localizations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_group_localizations: Option<ToManyResponse>,
}

/// A subscription group.
pub type SubscriptionGroup = Resource<SubscriptionGroupAttributes, SubscriptionGroupRelationships>;

/// A single subscription group.
pub type SubscriptionGroupResponse = Document<SubscriptionGroup>;

/// Billing period of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionPeriod {
    /// One week.
    OneWeek,
    /// One month.
    OneMonth,
    /// Two months.
    TwoMonths,
    /// Three months.
    ThreeMonths,
    /// Six months.
    SixMonths,
    /// One year.
    OneYear,
}

/// Review state of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionState {
    /// Required metadata is missing.
    MissingMetadata,
    /// Ready to be submitted for review.
    ReadyToSubmit,
    /// Submitted and waiting for review.
    WaitingForReview,
    /// Currently in review.
    InReview,
    /// The reviewer asked for changes.
    DeveloperActionNeeded,
    /// Approved, waiting for the app build to be approved.
    PendingBinaryApproval,
    /// Approved for sale.
    Approved,
    /// Removed from sale by the developer.
    DeveloperRemovedFromSale,
    /// Removed from sale by Apple.
    RemovedFromSale,
    /// Rejected in review.
    Rejected,
}

/// Attributes of a subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionAttributes {
    /// Reference name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Product identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Whether Family Sharing is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_sharable: Option<bool>,
    /// Review state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<SubscriptionState>,
    /// Billing period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_period: Option<SubscriptionPeriod>,
    /// Note for App Review.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_note: Option<String>,
    /// Rank within the group, 1 being the highest service level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_level: Option<u32>,
}

/// Relationships of a subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRelationships {
    /// The owning group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<ToOneResponse>,
    /// Prices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices: Option<ToManyResponse>,
    /// Localizations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_localizations: Option<ToManyResponse>,
    /// The App Review screenshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_store_review_screenshot: Option<ToOneResponse>,
}

/// A subscription.
pub type Subscription = Resource<SubscriptionAttributes, SubscriptionRelationships>;

/// A single subscription.
pub type SubscriptionResponse = Document<Subscription>;

/// A page of subscriptions.
pub type SubscriptionsResponse = Document<Vec<Subscription>>;

/// Attributes for a new subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionCreateAttributes {
    /// Reference name.
    pub name: String,
    /// Product identifier.
    pub product_id: String,
    /// Whether Family Sharing is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_sharable: Option<bool>,
    /// Billing period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_period: Option<SubscriptionPeriod>,
    /// Note for App Review.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_note: Option<String>,
    /// Rank within the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_level: Option<u32>,
}

/// A new subscription in a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionCreateRequest {
    /// ID of the subscription group.
    pub group_id: String,
    /// The attributes.
    pub attributes: SubscriptionCreateAttributes,
}

#[derive(Debug, Serialize)]
struct GroupRelationship {
    group: ToOne,
}

impl SubscriptionCreateRequest {
    fn to_body(&self) -> RequestBody<ResourceData<&SubscriptionCreateAttributes, GroupRelationship>> {
        RequestBody::new(
            ResourceData::create(SUBSCRIPTIONS)
                .with_attributes(&self.attributes)
                .with_relationships(GroupRelationship {
                    group: ToOne::new(SUBSCRIPTION_GROUPS, self.group_id.as_str()),
                }),
        )
    }
}

/// Attributes that can be changed on a subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionUpdateAttributes {
    /// Reference name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether Family Sharing is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_sharable: Option<bool>,
    /// Billing period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_period: Option<SubscriptionPeriod>,
    /// Note for App Review.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_note: Option<String>,
    /// Rank within the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_level: Option<u32>,
}

/// A price to create inline with a subscription update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionPriceInline {
    /// ID of the `subscriptionPricePoints` resource.
    pub price_point_id: String,
    /// ID of the territory; defaults to the price point's territory.
    pub territory_id: Option<String>,
    /// First day the price applies. `None` means immediately.
    pub start_date: Option<NaiveDate>,
    /// Keep existing subscribers on their current price.
    pub preserve_current_price: Option<bool>,
}

impl SubscriptionPriceInline {
    /// Creates a price for the given price point, effective immediately.
    #[must_use]
    pub fn new(price_point_id: impl Into<String>) -> Self {
        Self {
            price_point_id: price_point_id.into(),
            territory_id: None,
            start_date: None,
            preserve_current_price: None,
        }
    }

    /// Sets the start date.
    #[must_use]
    pub const fn starting(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the territory.
    #[must_use]
    pub fn in_territory(mut self, territory_id: impl Into<String>) -> Self {
        self.territory_id = Some(territory_id.into());
        self
    }
}

/// Attributes of an inline subscription price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPriceInlineAttributes {
    /// First day the price applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Keep existing subscribers on their current price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_current_price: Option<bool>,
}

/// Relationships of an inline subscription price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPriceInlineRelationships {
    /// The subscription being priced.
    pub subscription: ToOne,
    /// The price point to charge.
    pub subscription_price_point: ToOne,
    /// The territory the price applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub territory: Option<ToOne>,
}

/// Inline price resource of a compound subscription update.
pub type SubscriptionPriceData =
    ResourceData<SubscriptionPriceInlineAttributes, SubscriptionPriceInlineRelationships>;

/// Relationships written by a subscription update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionUpdateRelationships {
    /// Links to the inline prices.
    pub prices: ToMany,
}

/// The body of a subscription update.
pub type SubscriptionUpdateBody<'a> = RequestBody<
    ResourceData<&'a SubscriptionUpdateAttributes, SubscriptionUpdateRelationships>,
    SubscriptionPriceData,
>;

/// Changes to apply to a subscription, optionally creating prices.
///
/// Every price added with [`add_price`](Self::add_price) appears once in
/// `included` and once in the `prices` relationship. Adding a price under
/// an existing placeholder replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionUpdateRequest {
    /// Attribute changes.
    pub attributes: Option<SubscriptionUpdateAttributes>,
    prices: Vec<(Placeholder, SubscriptionPriceInline)>,
}

impl SubscriptionUpdateRequest {
    /// Creates a request changing only attributes.
    #[must_use]
    pub const fn with_attributes(attributes: SubscriptionUpdateAttributes) -> Self {
        Self {
            attributes: Some(attributes),
            prices: Vec::new(),
        }
    }

    /// Adds a price created together with the update.
    #[must_use]
    pub fn add_price(mut self, placeholder: Placeholder, price: SubscriptionPriceInline) -> Self {
        if let Some(existing) = self.prices.iter_mut().find(|(p, _)| *p == placeholder) {
            existing.1 = price;
        } else {
            self.prices.push((placeholder, price));
        }
        self
    }

    /// Returns the placeholders of the prices added so far.
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.prices.iter().map(|(placeholder, _)| placeholder)
    }

    /// Builds the compound body for the subscription `id`.
    #[must_use]
    pub fn to_body(&self, id: &str) -> SubscriptionUpdateBody<'_> {
        let relationships = (!self.prices.is_empty()).then(|| SubscriptionUpdateRelationships {
            prices: ToMany::new(SUBSCRIPTION_PRICES, self.placeholders().map(ToString::to_string)),
        });
        let included = self
            .prices
            .iter()
            .map(|(placeholder, price)| {
                ResourceData::inline(SUBSCRIPTION_PRICES, placeholder)
                    .with_attributes(SubscriptionPriceInlineAttributes {
                        start_date: price.start_date,
                        preserve_current_price: price.preserve_current_price,
                    })
                    .with_relationships(SubscriptionPriceInlineRelationships {
                        subscription: ToOne::new(SUBSCRIPTIONS, id),
                        subscription_price_point: ToOne::new(
                            "subscriptionPricePoints",
                            price.price_point_id.as_str(),
                        ),
                        territory: price
                            .territory_id
                            .as_deref()
                            .map(|territory| ToOne::new("territories", territory)),
                    })
            })
            .collect();

        RequestBody::new(ResourceData {
            id: Some(id.to_string()),
            kind: SUBSCRIPTIONS.to_string(),
            attributes: self.attributes.as_ref(),
            relationships,
        })
        .with_included(included)
    }
}

/// Query options for [`SubscriptionsService::list_subscriptions_for_group`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListSubscriptionsQuery {
    /// Subscription attributes to return.
    #[serde(rename = "fields[subscriptions]")]
    pub fields_subscriptions: Vec<String>,
    /// Only subscriptions with these names.
    #[serde(rename = "filter[name]")]
    pub filter_name: Vec<String>,
    /// Only subscriptions with these product IDs.
    #[serde(rename = "filter[productId]")]
    pub filter_product_id: Vec<String>,
    /// Only subscriptions in these states.
    #[serde(rename = "filter[state]")]
    pub filter_state: Vec<SubscriptionState>,
    /// Related resources to include.
    pub include: Vec<String>,
    /// Maximum number of subscriptions per page.
    pub limit: Option<u32>,
    /// Sort keys, prefixed with `-` for descending order.
    pub sort: Vec<String>,
    /// Pagination cursor from a previous page.
    pub cursor: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GroupCreateAttributes<'a> {
    reference_name: &'a str,
}

#[derive(Debug, Serialize)]
struct AppRelationship {
    app: ToOne,
}

/// Operations on subscriptions.
///
/// Obtained from [`RestClient::subscriptions`].
#[derive(Debug, Clone, Copy)]
pub struct SubscriptionsService<'a> {
    client: &'a RestClient,
}

impl<'a> SubscriptionsService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    pub(crate) const fn client(&self) -> &'a RestClient {
        self.client
    }

    /// Creates a subscription group for an app.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create_subscription_group(
        &self,
        app_id: &str,
        reference_name: &str,
    ) -> Result<ApiResponse<SubscriptionGroupResponse>, HttpError> {
        let body = RequestBody::new(
            ResourceData::create(SUBSCRIPTION_GROUPS)
                .with_attributes(GroupCreateAttributes { reference_name })
                .with_relationships(AppRelationship {
                    app: ToOne::new("apps", app_id),
                }),
        );
        self.client.post(SUBSCRIPTION_GROUPS, &body).await
    }

    /// Reads a subscription.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_subscription(&self, id: &str) -> Result<ApiResponse<SubscriptionResponse>, HttpError> {
        self.client
            .get(&build_path("subscriptions/{id}", &[("id", id)]), &())
            .await
    }

    /// Creates a subscription in a group.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create_subscription(
        &self,
        request: &SubscriptionCreateRequest,
    ) -> Result<ApiResponse<SubscriptionResponse>, HttpError> {
        self.client.post(SUBSCRIPTIONS, &request.to_body()).await
    }

    /// Updates a subscription, creating any prices added to `request`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_subscription(
        &self,
        id: &str,
        request: &SubscriptionUpdateRequest,
    ) -> Result<ApiResponse<SubscriptionResponse>, HttpError> {
        self.client
            .patch(&build_path("subscriptions/{id}", &[("id", id)]), &request.to_body(id))
            .await
    }

    /// Lists the subscriptions of a group.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list_subscriptions_for_group(
        &self,
        id: &str,
        query: &ListSubscriptionsQuery,
    ) -> Result<ApiResponse<SubscriptionsResponse>, HttpError> {
        self.client
            .get(&build_path("subscriptionGroups/{id}/subscriptions", &[("id", id)]), query)
            .await
    }
}
