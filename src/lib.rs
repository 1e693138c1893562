//! # Stripe SDK for Rust
//!
//! A typed async client for the Stripe REST API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stripe_sdk::{CreateChargeRequest, Interval, Plan, StripeClient, Token};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), stripe_sdk::StripeError> {
//!     let client = StripeClient::builder("sk_test_...").build()?;
//!
//!     // Charge a token
//!     let charge = client
//!         .charges()
//!         .create(CreateChargeRequest::new(1000, "usd", Token::from_id("tok_123")))
//!         .await?;
//!
//!     // Create a monthly plan
//!     let plan = client
//!         .plans()
//!         .create(&Plan::new("gold", "Gold", 500, "usd", Interval::Month))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! | Sub-client | Access | Paths |
//! |------------|--------|-------|
//! | [`ChargesClient`] | `client.charges()` | `charges`, `charges/{id}/refund` |
//! | [`CustomersClient`] | `client.customers()` | `customers` |
//! | [`TokensClient`] | `client.tokens()` | `tokens` |
//! | [`PlansClient`] | `client.plans()` | `plans` |
//! | [`CouponsClient`] | `client.coupons()` | `coupons` |
//! | [`SubscriptionsClient`] | `client.subscriptions()` | `customers/{id}/subscription` |
//! | [`InvoicesClient`] | `client.invoices()` | `invoices`, `invoices/upcoming` |
//! | [`InvoiceItemsClient`] | `client.invoice_items()` | `invoiceitems` |
//! | [`EventsClient`] | `client.events()` | `events` |
//!
//! Every call performs exactly one HTTP request. Nothing is retried or cached.
//! Charges and subscriptions take a [`Chargeable`]: a [`Card`], a [`Token`] or a
//! [`Customer`] with a card on file.

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
mod transport;

pub use client::*;
pub use config::{load_config, ClientConfig};
pub use error::{ApiError, CardError, ErrorBody, RequestSummary, StripeError, StripeResult};
pub use form::{FormParams, ListOptions};
pub use models::*;
