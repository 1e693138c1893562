//! Customer models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StripeResult;
use crate::form::FormParams;
use crate::models::{Card, Discount, PartialCard, Subscription};

/// A billing identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    pub id: String,
    pub object: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub active_card: Option<PartialCard>,
    /// Credit (negative) or debt (positive) applied to the next invoice.
    pub account_balance: i64,
    pub discount: Option<Discount>,
    pub subscription: Option<Subscription>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    pub livemode: bool,
    pub delinquent: bool,
    pub deleted: bool,
}

/// Fields for creating or updating a customer. Unset fields are not sent.
#[derive(Debug, Clone, Default)]
pub struct CustomerRequest {
    pub card: Option<Card>,
    pub coupon: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    /// Plan to subscribe a new customer to.
    pub plan: Option<String>,
    pub trial_end: Option<DateTime<Utc>>,
    pub account_balance: Option<i64>,
}

impl CustomerRequest {
    /// A request with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a card; pass [`Card::from_token`] to attach a token.
    pub fn card(mut self, card: Card) -> Self {
        self.card = Some(card);
        self
    }

    pub fn coupon(mut self, coupon: impl Into<String>) -> Self {
        self.coupon = Some(coupon.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn plan(mut self, plan: impl Into<String>) -> Self {
        self.plan = Some(plan.into());
        self
    }

    pub fn trial_end(mut self, trial_end: DateTime<Utc>) -> Self {
        self.trial_end = Some(trial_end);
        self
    }

    pub fn account_balance(mut self, balance: i64) -> Self {
        self.account_balance = Some(balance);
        self
    }

    pub(crate) fn values(&self) -> StripeResult<FormParams> {
        let mut params = FormParams::new();
        if let Some(card) = &self.card {
            card.values(&mut params)?;
        }
        params
            .set_str("coupon", self.coupon.as_deref())
            .set_str("email", self.email.as_deref())
            .set_str("description", self.description.as_deref())
            .set_str("plan", self.plan.as_deref())
            .set_opt("trial_end", self.trial_end.map(|t| t.timestamp()))
            .set_opt("account_balance", self.account_balance);
        Ok(params)
    }
}
