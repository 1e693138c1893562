//! Coupon and discount models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{StripeError, StripeResult};
use crate::form::FormParams;

/// How long a coupon keeps applying once redeemed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouponDuration {
    #[default]
    Once,
    Forever,
    /// For `duration_in_months` billing periods.
    Repeating,
}

impl fmt::Display for CouponDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CouponDuration::Once => "once",
            CouponDuration::Forever => "forever",
            CouponDuration::Repeating => "repeating",
        })
    }
}

/// A reusable discount template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coupon {
    /// Optional on create; the server generates one when empty.
    pub id: String,
    pub object: Option<String>,
    pub percent_off: u32,
    pub duration: CouponDuration,
    pub duration_in_months: Option<u32>,
    pub max_redemptions: Option<u32>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub redeem_by: Option<DateTime<Utc>>,
    pub times_redeemed: u32,
    pub livemode: bool,
}

impl Coupon {
    /// A coupon with a server-assigned ID.
    pub fn new(percent_off: u32, duration: CouponDuration) -> Self {
        Self {
            percent_off,
            duration,
            ..Default::default()
        }
    }

    /// Pick the ID instead of letting the server assign one.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn duration_in_months(mut self, months: u32) -> Self {
        self.duration_in_months = Some(months);
        self
    }

    pub fn max_redemptions(mut self, max: u32) -> Self {
        self.max_redemptions = Some(max);
        self
    }

    pub fn redeem_by(mut self, redeem_by: DateTime<Utc>) -> Self {
        self.redeem_by = Some(redeem_by);
        self
    }

    /// Validate the coupon and project it into create parameters.
    pub fn values(&self) -> StripeResult<FormParams> {
        if !(1..=100).contains(&self.percent_off) {
            return Err(StripeError::invalid("percent_off must be between 1 and 100"));
        }

        let mut params = FormParams::new();
        params
            .set("percent_off", self.percent_off)
            .set("duration", self.duration);

        if self.duration == CouponDuration::Repeating {
            match self.duration_in_months.filter(|months| *months > 0) {
                Some(months) => params.set("duration_in_months", months),
                None => {
                    return Err(StripeError::invalid(
                        "repeating coupons require duration_in_months",
                    ))
                }
            };
        }

        params
            .set_opt("max_redemptions", self.max_redemptions.filter(|max| *max > 0))
            .set_opt("redeem_by", self.redeem_by.map(|t| t.timestamp()))
            .set_str("id", Some(self.id.as_str()));
        Ok(params)
    }
}

/// A coupon applied to one customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Discount {
    pub id: Option<String>,
    pub object: Option<String>,
    pub coupon: Coupon,
    /// ID of the customer the discount belongs to.
    pub customer: String,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub start: Option<DateTime<Utc>>,
    /// `None` for coupons that last forever.
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub end: Option<DateTime<Utc>>,
}
