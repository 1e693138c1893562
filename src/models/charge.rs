//! Charge models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{StripeError, StripeResult};
use crate::form::{FormParams, ListOptions};
use crate::models::{check_currency, Chargeable, PartialCard};

/// A single payment attempt.
///
/// Charges are never edited in place: a refund yields a new snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Charge {
    pub id: String,
    pub object: Option<String>,
    /// Amount in the currency's smallest unit.
    pub amount: i64,
    pub currency: String,
    pub card: Option<PartialCard>,
    /// ID of the customer charged, if any.
    pub customer: Option<String>,
    pub description: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    pub fee: Option<i64>,
    pub livemode: bool,
    pub paid: bool,
    pub refunded: bool,
    pub amount_refunded: Option<i64>,
    pub failure_message: Option<String>,
}

/// Request for `POST /charges`.
#[derive(Debug, Clone)]
pub struct CreateChargeRequest {
    pub amount: i64,
    pub currency: String,
    pub source: Chargeable,
    pub description: Option<String>,
}

impl CreateChargeRequest {
    /// Charge `amount` minor units of `currency` to `source`.
    pub fn new(amount: i64, currency: impl Into<String>, source: impl Into<Chargeable>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            source: source.into(),
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn values(&self) -> StripeResult<FormParams> {
        if self.amount <= 0 {
            return Err(StripeError::invalid("charge amount must be positive"));
        }
        check_currency(&self.currency)?;

        let mut params = FormParams::new();
        params
            .set("amount", self.amount)
            .set("currency", &self.currency)
            .set_str("description", self.description.as_deref());
        self.source.project_into(&mut params)?;
        Ok(params)
    }
}

/// Filter for `GET /charges`.
#[derive(Debug, Clone, Default)]
pub struct ChargeListRequest {
    pub options: ListOptions,
    /// Only charges belonging to this customer.
    pub customer: Option<String>,
}

impl ChargeListRequest {
    /// All charges, server-default paging.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(mut self, options: ListOptions) -> Self {
        self.options = options;
        self
    }

    pub fn customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = Some(customer.into());
        self
    }

    pub(crate) fn values(&self) -> FormParams {
        let mut params = self.options.to_params();
        params.set_str("customer", self.customer.as_deref());
        params
    }
}
