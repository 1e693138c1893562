//! HTTP client and sub-clients for the Stripe API.
//!
//! The main entry point is [`StripeClient`], which is built via
//! [`StripeClientBuilder`] or from a [`ClientConfig`]. Sub-clients for each
//! resource are accessible via methods on the main client and share its
//! immutable configuration.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::{StripeError, StripeResult};
use crate::form::{FormParams, ListOptions};
use crate::models::*;
use crate::transport::{resource_path, Transport};

const USER_AGENT: &str = concat!("stripe-sdk/", env!("CARGO_PKG_VERSION"));

// ---------------------------------------------------------------------------
// StripeClient
// ---------------------------------------------------------------------------

/// The main Stripe API client.
///
/// Cheap to clone; clones share one connection pool and configuration.
///
/// ```rust,no_run
/// use stripe_sdk::{CreateChargeRequest, StripeClient, Token};
///
/// # async fn example() -> Result<(), stripe_sdk::StripeError> {
/// let client = StripeClient::builder("sk_test_...").build()?;
///
/// let charge = client
///     .charges()
///     .create(CreateChargeRequest::new(1000, "usd", Token::from_id("tok_123")))
///     .await?;
/// assert!(charge.paid);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct StripeClient {
    inner: Arc<Transport>,
}

impl StripeClient {
    /// Start building a new client.
    pub fn builder(api_key: impl Into<String>) -> StripeClientBuilder {
        StripeClientBuilder {
            config: ClientConfig::new(api_key),
            http: None,
        }
    }

    /// Build a client from an existing configuration.
    pub fn new(config: ClientConfig) -> StripeResult<Self> {
        StripeClientBuilder { config, http: None }.build()
    }

    /// Versioned API root, e.g. `https://api.stripe.com/v1/`.
    pub fn base_url(&self) -> &str {
        self.inner.base_url().as_str()
    }

    // -- Sub-clients ----------------------------------------------------------

    /// Charges and refunds.
    pub fn charges(&self) -> ChargesClient {
        ChargesClient {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Customer CRUD operations.
    pub fn customers(&self) -> CustomersClient {
        CustomersClient {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Card tokens.
    pub fn tokens(&self) -> TokensClient {
        TokensClient {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Plan CRUD operations.
    pub fn plans(&self) -> PlansClient {
        PlansClient {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Coupons.
    pub fn coupons(&self) -> CouponsClient {
        CouponsClient {
            inner: Arc::clone(&self.inner),
        }
    }

    /// A customer's subscription.
    pub fn subscriptions(&self) -> SubscriptionsClient {
        SubscriptionsClient {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Invoices (read-only).
    pub fn invoices(&self) -> InvoicesClient {
        InvoicesClient {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Invoice items.
    pub fn invoice_items(&self) -> InvoiceItemsClient {
        InvoiceItemsClient {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Events (read-only).
    pub fn events(&self) -> EventsClient {
        EventsClient {
            inner: Arc::clone(&self.inner),
        }
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builder for [`StripeClient`].
pub struct StripeClientBuilder {
    config: ClientConfig,
    http: Option<reqwest::Client>,
}

impl StripeClientBuilder {
    /// API host (default: `api.stripe.com`).
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// API version number (default: `1`).
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.config.version = version.into();
        self
    }

    /// Override the origin entirely, e.g. `http://127.0.0.1:8080`.
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.config.api_base = Some(api_base.into());
        self
    }

    /// Use a preconfigured `reqwest` client (proxies, timeouts, TLS).
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the client.
    pub fn build(self) -> StripeResult<StripeClient> {
        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder().user_agent(USER_AGENT).build()?,
        };
        Ok(StripeClient {
            inner: Arc::new(Transport::new(&self.config, http)?),
        })
    }
}

async fn delete_resource(inner: &Transport, path: &str) -> StripeResult<bool> {
    let deleted: Deleted = inner.delete(path).await?;
    Ok(deleted.deleted)
}

async fn list_resource<T: serde::de::DeserializeOwned>(
    inner: &Transport,
    collection: &str,
    params: &FormParams,
) -> StripeResult<List<T>> {
    inner.get(&params.to_query(collection)).await
}

// ---------------------------------------------------------------------------
// ChargesClient
// ---------------------------------------------------------------------------

/// Sub-client for charges.
#[derive(Debug, Clone)]
pub struct ChargesClient {
    inner: Arc<Transport>,
}

impl ChargesClient {
    /// Charge a card, token or customer.
    pub async fn create(&self, req: CreateChargeRequest) -> StripeResult<Charge> {
        let params = req.values()?;
        self.inner.post("charges", &params).await
    }

    /// Get a charge by ID.
    pub async fn get(&self, id: &str) -> StripeResult<Charge> {
        self.inner.get(&resource_path("charges", id)?).await
    }

    /// Refund a charge, in full when `amount` is `None`.
    ///
    /// Any non-negative amount is sent as given and checked by the server.
    /// Negative amounts are rejected before the request.
    pub async fn refund(&self, id: &str, amount: Option<i64>) -> StripeResult<Charge> {
        if matches!(amount, Some(amount) if amount < 0) {
            return Err(StripeError::invalid("refund amount must not be negative"));
        }
        let path = format!("{}/refund", resource_path("charges", id)?);
        let mut params = FormParams::new();
        params.set_opt("amount", amount);
        self.inner.post(&path, &params).await
    }

    /// List charges, newest first.
    pub async fn list(&self, req: ChargeListRequest) -> StripeResult<List<Charge>> {
        list_resource(&self.inner, "charges", &req.values()).await
    }
}

// ---------------------------------------------------------------------------
// CustomersClient
// ---------------------------------------------------------------------------

/// Sub-client for customers.
#[derive(Debug, Clone)]
pub struct CustomersClient {
    inner: Arc<Transport>,
}

impl CustomersClient {
    /// Create a new customer.
    pub async fn create(&self, req: CustomerRequest) -> StripeResult<Customer> {
        let params = req.values()?;
        self.inner.post("customers", &params).await
    }

    /// Get a customer by ID.
    pub async fn get(&self, id: &str) -> StripeResult<Customer> {
        self.inner.get(&resource_path("customers", id)?).await
    }

    /// Update the fields set on `req`; others are left unchanged.
    pub async fn update(&self, id: &str, req: CustomerRequest) -> StripeResult<Customer> {
        let path = resource_path("customers", id)?;
        let params = req.values()?;
        self.inner.post(&path, &params).await
    }

    /// Delete a customer. Returns whether the server confirmed the deletion.
    pub async fn delete(&self, id: &str) -> StripeResult<bool> {
        delete_resource(&self.inner, &resource_path("customers", id)?).await
    }

    /// List customers.
    pub async fn list(&self, options: ListOptions) -> StripeResult<List<Customer>> {
        list_resource(&self.inner, "customers", &options.to_params()).await
    }
}

// ---------------------------------------------------------------------------
// TokensClient
// ---------------------------------------------------------------------------

/// Sub-client for card tokens.
#[derive(Debug, Clone)]
pub struct TokensClient {
    inner: Arc<Transport>,
}

impl TokensClient {
    /// Tokenize raw card details.
    pub async fn create(&self, req: CreateTokenRequest) -> StripeResult<Token> {
        let params = req.values()?;
        self.inner.post("tokens", &params).await
    }

    /// Get a token by ID.
    pub async fn get(&self, id: &str) -> StripeResult<Token> {
        self.inner.get(&resource_path("tokens", id)?).await
    }
}

// ---------------------------------------------------------------------------
// PlansClient
// ---------------------------------------------------------------------------

/// Sub-client for plans.
#[derive(Debug, Clone)]
pub struct PlansClient {
    inner: Arc<Transport>,
}

impl PlansClient {
    /// Create a new plan.
    pub async fn create(&self, plan: &Plan) -> StripeResult<Plan> {
        let params = plan.values()?;
        self.inner.post("plans", &params).await
    }

    /// Get a plan by ID.
    pub async fn get(&self, id: &str) -> StripeResult<Plan> {
        self.inner.get(&resource_path("plans", id)?).await
    }

    /// Rename a plan. Nothing else about a plan can change.
    pub async fn update(&self, id: &str, name: &str) -> StripeResult<Plan> {
        let path = resource_path("plans", id)?;
        if name.trim().is_empty() {
            return Err(StripeError::invalid("plan requires a name"));
        }
        let mut params = FormParams::new();
        params.set("name", name);
        self.inner.post(&path, &params).await
    }

    /// Delete a plan. Existing subscribers are unaffected.
    pub async fn delete(&self, id: &str) -> StripeResult<bool> {
        delete_resource(&self.inner, &resource_path("plans", id)?).await
    }

    /// List plans.
    pub async fn list(&self, options: ListOptions) -> StripeResult<List<Plan>> {
        list_resource(&self.inner, "plans", &options.to_params()).await
    }
}

// ---------------------------------------------------------------------------
// CouponsClient
// ---------------------------------------------------------------------------

/// Sub-client for coupons.
#[derive(Debug, Clone)]
pub struct CouponsClient {
    inner: Arc<Transport>,
}

impl CouponsClient {
    /// Create a new coupon.
    pub async fn create(&self, coupon: &Coupon) -> StripeResult<Coupon> {
        let params = coupon.values()?;
        self.inner.post("coupons", &params).await
    }

    /// Get a coupon by ID.
    pub async fn get(&self, id: &str) -> StripeResult<Coupon> {
        self.inner.get(&resource_path("coupons", id)?).await
    }

    /// Delete a coupon. Discounts already applied stay in place.
    pub async fn delete(&self, id: &str) -> StripeResult<bool> {
        delete_resource(&self.inner, &resource_path("coupons", id)?).await
    }

    /// List coupons.
    pub async fn list(&self, options: ListOptions) -> StripeResult<List<Coupon>> {
        list_resource(&self.inner, "coupons", &options.to_params()).await
    }
}

// ---------------------------------------------------------------------------
// SubscriptionsClient
// ---------------------------------------------------------------------------

/// Sub-client for subscriptions, keyed by customer ID.
#[derive(Debug, Clone)]
pub struct SubscriptionsClient {
    inner: Arc<Transport>,
}

impl SubscriptionsClient {
    /// Subscribe a customer to a plan, replacing any current subscription.
    pub async fn update(
        &self,
        customer_id: &str,
        req: UpdateSubscriptionRequest,
    ) -> StripeResult<Subscription> {
        let params = req.values()?;
        let path = format!("{}/subscription", resource_path("customers", customer_id)?);
        self.inner.post(&path, &params).await
    }

    /// Cancel a customer's subscription, now or when the current period ends.
    pub async fn cancel(&self, customer_id: &str, at_period_end: bool) -> StripeResult<Subscription> {
        let mut params = FormParams::new();
        params.set_opt("at_period_end", at_period_end.then_some("true"));
        let path = format!("{}/subscription", resource_path("customers", customer_id)?);
        self.inner.delete(&params.to_query(&path)).await
    }
}

// ---------------------------------------------------------------------------
// InvoicesClient
// ---------------------------------------------------------------------------

/// Sub-client for invoices.
#[derive(Debug, Clone)]
pub struct InvoicesClient {
    inner: Arc<Transport>,
}

impl InvoicesClient {
    /// Get an invoice by ID.
    pub async fn get(&self, id: &str) -> StripeResult<Invoice> {
        self.inner.get(&resource_path("invoices", id)?).await
    }

    /// Preview the invoice a customer will be billed next.
    pub async fn upcoming(&self, customer_id: &str) -> StripeResult<Invoice> {
        if customer_id.trim().is_empty() {
            return Err(StripeError::invalid("upcoming invoice requires a customer"));
        }
        let mut params = FormParams::new();
        params.set("customer", customer_id);
        self.inner.get(&params.to_query("invoices/upcoming")).await
    }

    /// List invoices.
    pub async fn list(&self, req: InvoiceListRequest) -> StripeResult<List<Invoice>> {
        list_resource(&self.inner, "invoices", &req.values()).await
    }
}

// ---------------------------------------------------------------------------
// InvoiceItemsClient
// ---------------------------------------------------------------------------

/// Sub-client for invoice items.
#[derive(Debug, Clone)]
pub struct InvoiceItemsClient {
    inner: Arc<Transport>,
}

impl InvoiceItemsClient {
    /// Add an item to a customer's next (or a given) invoice.
    pub async fn create(&self, req: CreateInvoiceItemRequest) -> StripeResult<InvoiceItem> {
        let params = req.values()?;
        self.inner.post("invoiceitems", &params).await
    }

    /// Get an invoice item by ID.
    pub async fn get(&self, id: &str) -> StripeResult<InvoiceItem> {
        self.inner.get(&resource_path("invoiceitems", id)?).await
    }

    /// Change an item's amount or description.
    pub async fn update(
        &self,
        id: &str,
        req: UpdateInvoiceItemRequest,
    ) -> StripeResult<InvoiceItem> {
        let path = resource_path("invoiceitems", id)?;
        self.inner.post(&path, &req.values()).await
    }

    /// Delete an invoice item that has not been invoiced yet.
    pub async fn delete(&self, id: &str) -> StripeResult<bool> {
        delete_resource(&self.inner, &resource_path("invoiceitems", id)?).await
    }

    /// List invoice items.
    pub async fn list(&self, req: InvoiceListRequest) -> StripeResult<List<InvoiceItem>> {
        list_resource(&self.inner, "invoiceitems", &req.values()).await
    }
}

// ---------------------------------------------------------------------------
// EventsClient
// ---------------------------------------------------------------------------

/// Sub-client for events.
#[derive(Debug, Clone)]
pub struct EventsClient {
    inner: Arc<Transport>,
}

impl EventsClient {
    /// Get an event by ID.
    pub async fn get(&self, id: &str) -> StripeResult<Event> {
        self.inner.get(&resource_path("events", id)?).await
    }

    /// List events matching `query`. Filtering happens server-side.
    pub async fn list(&self, query: EventQuery) -> StripeResult<List<Event>> {
        list_resource(&self.inner, "events", &query.values()).await
    }
}
