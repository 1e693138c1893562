//! Data models for the Stripe SDK.
//!
//! Response types mirror the JSON the API returns. Request types are builders
//! whose `values` projection validates required fields and produces the
//! URL-encoded form, leaving unset fields out.

pub mod card;
pub mod charge;
pub mod chargeable;
pub mod coupon;
pub mod customer;
pub mod event;
pub mod invoice;
pub mod list;
pub mod plan;
pub mod subscription;

pub use card::*;
pub use charge::*;
pub use chargeable::*;
pub use coupon::*;
pub use customer::*;
pub use event::*;
pub use invoice::*;
pub use list::*;
pub use plan::*;
pub use subscription::*;

use crate::error::{StripeError, StripeResult};

/// The only currency the API accepts for charges and plans.
pub const SUPPORTED_CURRENCY: &str = "usd";

pub(crate) fn check_currency(currency: &str) -> StripeResult<()> {
    if currency == SUPPORTED_CURRENCY {
        Ok(())
    } else {
        Err(StripeError::invalid(format!(
            "unsupported currency {currency:?}; expected {SUPPORTED_CURRENCY:?}"
        )))
    }
}
