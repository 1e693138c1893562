//! Invoice and invoice item models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{StripeError, StripeResult};
use crate::form::{FormParams, ListOptions};
use crate::models::Plan;

/// A bill aggregating invoice items and subscription charges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Invoice {
    /// Absent on upcoming invoices.
    pub id: Option<String>,
    pub object: Option<String>,
    pub customer: Option<String>,
    pub subtotal: i64,
    pub total: i64,
    pub amount_due: Option<i64>,
    pub attempted: bool,
    pub closed: bool,
    pub paid: bool,
    pub livemode: bool,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub date: Option<DateTime<Utc>>,
    /// Newer payloads send `created` alongside or instead of `date`.
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub period_start: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub period_end: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub next_payment_attempt: Option<DateTime<Utc>>,
    pub lines: InvoiceLines,
}

impl Invoice {
    /// When the invoice was issued, from `date` or else `created`.
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.date.or(self.created)
    }
}

/// Invoice lines, grouped by origin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceLines {
    pub invoiceitems: Vec<InvoiceItem>,
    pub subscriptions: Vec<InvoiceLine>,
    pub prorations: Vec<InvoiceItem>,
}

/// A subscription charge on an invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceLine {
    pub id: Option<String>,
    pub object: Option<String>,
    pub amount: i64,
    pub currency: String,
    pub plan: Option<Plan>,
    pub quantity: Option<u32>,
    pub period: Option<Period>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Period {
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub start: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub end: Option<DateTime<Utc>>,
}

/// A standalone billable line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceItem {
    pub id: String,
    pub object: Option<String>,
    pub amount: i64,
    pub currency: String,
    pub customer: Option<String>,
    pub description: Option<String>,
    /// Invoice the item is attached to, if any.
    pub invoice: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub date: Option<DateTime<Utc>>,
    pub proration: bool,
    pub livemode: bool,
}

/// Request for `POST /invoiceitems`.
#[derive(Debug, Clone)]
pub struct CreateInvoiceItemRequest {
    pub customer: String,
    pub amount: i64,
    pub currency: String,
    pub invoice: Option<String>,
    pub description: Option<String>,
}

impl CreateInvoiceItemRequest {
    /// Add `amount` in `currency` to the customer's next invoice.
    pub fn new(customer: impl Into<String>, amount: i64, currency: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
            amount,
            currency: currency.into(),
            invoice: None,
            description: None,
        }
    }

    /// Attach to an existing invoice instead of the customer's next one.
    pub fn invoice(mut self, invoice: impl Into<String>) -> Self {
        self.invoice = Some(invoice.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn values(&self) -> StripeResult<FormParams> {
        if self.customer.trim().is_empty() {
            return Err(StripeError::invalid("invoice item requires a customer"));
        }
        if self.currency.trim().is_empty() {
            return Err(StripeError::invalid("invoice item requires a currency"));
        }

        let mut params = FormParams::new();
        params
            .set("customer", &self.customer)
            .set("amount", self.amount)
            .set("currency", &self.currency)
            .set_str("invoice", self.invoice.as_deref())
            .set_str("description", self.description.as_deref());
        Ok(params)
    }
}

/// Request for `POST /invoiceitems/{id}`.
#[derive(Debug, Clone, Default)]
pub struct UpdateInvoiceItemRequest {
    pub amount: Option<i64>,
    pub description: Option<String>,
}

impl UpdateInvoiceItemRequest {
    /// An update that changes nothing until fields are set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn values(&self) -> FormParams {
        let mut params = FormParams::new();
        params
            .set_opt("amount", self.amount)
            .set_str("description", self.description.as_deref());
        params
    }
}

/// Filter for `GET /invoices` and `GET /invoiceitems`.
#[derive(Debug, Clone, Default)]
pub struct InvoiceListRequest {
    pub options: ListOptions,
    pub customer: Option<String>,
}

impl InvoiceListRequest {
    /// All items, server-default paging.
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
