//! Card models: raw card submissions, the masked card the server echoes, and tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{StripeError, StripeResult};
use crate::form::FormParams;

/// Card details submitted by the caller.
///
/// Either [`Card::token`] or the number/expiry triple must be set. When a
/// token is present the raw details are ignored.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Card {
    pub token: Option<String>,
    pub number: Option<String>,
    pub exp_month: Option<u32>,
    pub exp_year: Option<i32>,
    pub cvc: Option<String>,
    pub name: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub address_zip: Option<String>,
    pub address_state: Option<String>,
    pub address_country: Option<String>,
}

impl Card {
    /// A card identified by its number and expiry.
    pub fn new(number: impl Into<String>, exp_month: u32, exp_year: i32) -> Self {
        Self {
            number: Some(number.into()),
            exp_month: Some(exp_month),
            exp_year: Some(exp_year),
            ..Default::default()
        }
    }

    /// A card identified by a previously issued token.
    pub fn from_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Default::default()
        }
    }

    /// Security code, checked by the server when present.
    pub fn cvc(mut self, cvc: impl Into<String>) -> Self {
        self.cvc = Some(cvc.into());
        self
    }

    /// Cardholder name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the billing address lines.
    pub fn address(mut self, line1: impl Into<String>, line2: Option<String>) -> Self {
        self.address_line1 = Some(line1.into());
        self.address_line2 = line2;
        self
    }

    /// Postal code, used for the server's ZIP check.
    pub fn address_zip(mut self, zip: impl Into<String>) -> Self {
        self.address_zip = Some(zip.into());
        self
    }

    pub fn address_state(mut self, state: impl Into<String>) -> Self {
        self.address_state = Some(state.into());
        self
    }

    pub fn address_country(mut self, country: impl Into<String>) -> Self {
        self.address_country = Some(country.into());
        self
    }

    fn token_id(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// Write this card under `card` (as a token ID) or `card[...]` (raw details).
    pub(crate) fn values(&self, params: &mut FormParams) -> StripeResult<()> {
        if let Some(token) = self.token_id() {
            params.set("card", token);
            return Ok(());
        }
        self.detail_values(params)
    }

    /// Write raw card details only; tokens are not accepted here.
    pub(crate) fn detail_values(&self, params: &mut FormParams) -> StripeResult<()> {
        let number = self.number.as_deref().filter(|n| !n.is_empty());
        let (number, exp_month, exp_year) = match (number, self.exp_month, self.exp_year) {
            (Some(number), Some(month), Some(year)) => (number, month, year),
            _ => {
                return Err(StripeError::invalid(
                    "card requires a token, or a number with exp_month and exp_year",
                ))
            }
        };

        params
            .set("card[number]", number)
            .set("card[exp_month]", exp_month)
            .set("card[exp_year]", exp_year)
            .set_str("card[cvc]", self.cvc.as_deref())
            .set_str("card[name]", self.name.as_deref())
            .set_str("card[address_line1]", self.address_line1.as_deref())
            .set_str("card[address_line2]", self.address_line2.as_deref())
            .set_str("card[address_zip]", self.address_zip.as_deref())
            .set_str("card[address_state]", self.address_state.as_deref())
            .set_str("card[address_country]", self.address_country.as_deref());
        Ok(())
    }
}

impl std::fmt::Debug for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let masked = self.number.as_deref().map(|n| {
            let last4: String = n.chars().rev().take(4).collect::<Vec<_>>().into_iter().rev().collect();
            format!("****{last4}")
        });
        f.debug_struct("Card")
            .field("token", &self.token)
            .field("number", &masked)
            .field("exp_month", &self.exp_month)
            .field("exp_year", &self.exp_year)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The masked card the server echoes back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialCard {
    pub id: Option<String>,
    pub object: Option<String>,
    pub last4: String,
    pub exp_month: u32,
    pub exp_year: i32,
    /// Brand, e.g. `Visa`.
    #[serde(rename = "type")]
    pub brand: Option<String>,
    pub country: Option<String>,
    pub name: Option<String>,
    pub fingerprint: Option<String>,
    /// `pass`, `fail` or `unchecked`.
    pub cvc_check: Option<String>,
    pub address_line1_check: Option<String>,
    pub address_zip_check: Option<String>,
}

/// A single-use stand-in for card details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub id: String,
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub livemode: bool,
    #[serde(default)]
    pub used: bool,
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub card: Option<PartialCard>,
}

impl Token {
    /// A token known only by its ID.
    pub fn from_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// Request for `POST /tokens`.
#[derive(Debug, Clone)]
pub struct CreateTokenRequest {
    pub card: Card,
    pub amount: Option<i64>,
    pub currency: Option<String>,
}

impl CreateTokenRequest {
    /// Tokenize `card`, with no amount attached.
    pub fn new(card: Card) -> Self {
        Self {
            card,
            amount: None,
            currency: None,
        }
    }

    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub(crate) fn values(&self) -> StripeResult<FormParams> {
        let mut params = FormParams::new();
        self.card.detail_values(&mut params)?;
        params
            .set_opt("amount", self.amount)
            .set_str("currency", self.currency.as_deref());
        Ok(params)
    }
}
