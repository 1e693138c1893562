//! Subscription models. A customer has at most one subscription, addressed
//! through the customer's path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{StripeError, StripeResult};
use crate::form::FormParams;
use crate::models::{Chargeable, Plan};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Trialing,
    #[default]
    Active,
    PastDue,
    Canceled,
    Unpaid,
}

/// Binds a customer to a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
    pub object: Option<String>,
    pub status: SubscriptionStatus,
    /// ID of the subscribed customer.
    pub customer: String,
    pub plan: Option<Plan>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub start: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub current_period_start: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub current_period_end: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub trial_start: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub trial_end: Option<DateTime<Utc>>,
    pub cancel_at_period_end: bool,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub canceled_at: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub ended_at: Option<DateTime<Utc>>,
}

/// Request for `POST /customers/{id}/subscription`.
#[derive(Debug, Clone)]
pub struct UpdateSubscriptionRequest {
    /// Required.
    pub plan: String,
    pub coupon: Option<String>,
    /// Prorate the price change; defaults to `true`.
    pub prorate: bool,
    pub trial_end: Option<DateTime<Utc>>,
    /// New payment source to attach while subscribing.
    pub card: Option<Chargeable>,
}

impl Default for UpdateSubscriptionRequest {
    fn default() -> Self {
        Self {
            plan: String::new(),
            coupon: None,
            prorate: true,
            trial_end: None,
            card: None,
        }
    }
}

impl UpdateSubscriptionRequest {
    /// Subscribe to `plan`, prorating by default.
    pub fn new(plan: impl Into<String>) -> Self {
        Self {
            plan: plan.into(),
            ..Default::default()
        }
    }

    pub fn coupon(mut self, coupon: impl Into<String>) -> Self {
        self.coupon = Some(coupon.into());
        self
    }

    pub fn prorate(mut self, prorate: bool) -> Self {
        self.prorate = prorate;
        self
    }

    pub fn trial_end(mut self, trial_end: DateTime<Utc>) -> Self {
        self.trial_end = Some(trial_end);
        self
    }

    pub fn card(mut self, source: impl Into<Chargeable>) -> Self {
        self.card = Some(source.into());
        self
    }

    pub(crate) fn values(&self) -> StripeResult<FormParams> {
        if self.plan.trim().is_empty() {
            return Err(StripeError::invalid("subscription requires a plan ID"));
        }

        let mut params = FormParams::new();
        params
            .set("plan", &self.plan)
            .set_str("coupon", self.coupon.as_deref())
            .set_opt("prorate", (!self.prorate).then_some("false"))
            .set_opt("trial_end", self.trial_end.map(|t| t.timestamp()));
        if let Some(card) = &self.card {
            card.project_into(&mut params)?;
        }
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Token;

    #[test]
    fn test_missing_plan_fails_validation() {
        let err = UpdateSubscriptionRequest::default().values().unwrap_err();
        assert!(matches!(err, StripeError::InvalidArgument(_)));
        assert!(UpdateSubscriptionRequest::new("  ").values().is_err());
    }

    #[test]
    fn test_values() {
        let params = UpdateSubscriptionRequest::new("gold").values().unwrap();
        assert_eq!(params.encode(), "plan=gold");

        let params = UpdateSubscriptionRequest::new("gold")
            .coupon("HALF")
            .prorate(false)
            .card(Token::from_id("tok_1"))
            .values()
            .unwrap();
        assert_eq!(params.encode(), "plan=gold&coupon=HALF&prorate=false&card=tok_1");
    }

    #[test]
    fn test_status_decodes() {
        let sub: Subscription = serde_json::from_str(
            r#"{"status":"past_due","customer":"cus_1","current_period_start":1356000000,
                "current_period_end":1358678400,"cancel_at_period_end":true,"trial_start":null}"#,
        )
        .unwrap();
        assert_eq!(sub.status, SubscriptionStatus::PastDue);
        assert!(sub.cancel_at_period_end);
        assert_eq!(sub.trial_start, None);
        assert_eq!(
            sub.current_period_end.map(|t| t.timestamp()),
            Some(1_358_678_400)
        );
    }
}
