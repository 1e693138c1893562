//! Plan models: recurring billing templates.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{StripeError, StripeResult};
use crate::form::FormParams;
use crate::models::check_currency;

/// How often a plan bills.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    #[default]
    Month,
    Year,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Month => "month",
            Interval::Year => "year",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Interval {
    type Err = StripeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "month" => Ok(Interval::Month),
            "year" => Ok(Interval::Year),
            other => Err(StripeError::invalid(format!(
                "interval must be \"month\" or \"year\", got {other:?}"
            ))),
        }
    }
}

/// A recurring billing template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub interval: Interval,
    pub currency: String,
    /// Amount billed per interval, in the currency's smallest unit.
    pub amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_period_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(default)]
    pub livemode: bool,
}

impl Plan {
    /// A plan without a trial period.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        amount: i64,
        currency: impl Into<String>,
        interval: Interval,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            interval,
            currency: currency.into(),
            amount,
            ..Default::default()
        }
    }

    pub fn trial_period_days(mut self, days: u32) -> Self {
        self.trial_period_days = Some(days);
        self
    }

    /// Validate the plan and project it into create parameters.
    pub fn values(&self) -> StripeResult<FormParams> {
        if self.id.trim().is_empty() {
            return Err(StripeError::invalid("plan requires an id"));
        }
        if self.name.trim().is_empty() {
            return Err(StripeError::invalid("plan requires a name"));
        }
        if self.amount <= 0 {
            return Err(StripeError::invalid("plan amount must be positive"));
        }
        check_currency(&self.currency)?;

        let mut params = FormParams::new();
        params
            .set("id", &self.id)
            .set("name", &self.name)
            .set("amount", self.amount)
            .set("currency", &self.currency)
            .set("interval", self.interval)
            .set_opt("trial_period_days", self.trial_period_days);
        Ok(params)
    }
}
