//! Error types for the Stripe SDK.
//!
//! Failures are split by where they were detected:
//!
//! - below HTTP ([`StripeError::Network`]),
//! - by HTTP status ([`StripeError::BadRequest`], [`StripeError::Unauthorized`],
//!   [`StripeError::RequestFailed`], [`StripeError::NotFound`], [`StripeError::Server`],
//!   [`StripeError::Unknown`]),
//! - while decoding the body ([`StripeError::Decode`]),
//! - inside a well-formed 200 body that carries an `error` object ([`StripeError::Api`]),
//! - before anything was sent ([`StripeError::InvalidArgument`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The request a failed call was issuing, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSummary {
    /// HTTP method, e.g. `POST`.
    pub method: String,
    /// Absolute URL including the query string.
    pub url: String,
}

impl fmt::Display for RequestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}

/// The `error` object as the server sends it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// `invalid_request_error`, `api_error` or `card_error`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self.message.as_deref().unwrap_or("no message");
        match (&self.code, &self.param) {
            (Some(code), Some(param)) => write!(f, "{message} (code: {code}, param: {param})"),
            (Some(code), None) => write!(f, "{message} (code: {code})"),
            (None, Some(param)) => write!(f, "{message} (param: {param})"),
            (None, None) => f.write_str(message),
        }
    }
}

/// A card could not be charged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardError {
    pub code: String,
    pub param: Option<String>,
    pub message: Option<String>,
}

impl CardError {
    /// Human-readable explanation of [`CardError::code`], suitable for end users.
    ///
    /// Returns `None` for codes the server may add later.
    pub fn details(&self) -> Option<&'static str> {
        card_error_details(&self.code)
    }
}

impl fmt::Display for CardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.details(), &self.message) {
            (Some(details), _) => write!(f, "{details} ({})", self.code),
            (None, Some(message)) => write!(f, "{message} ({})", self.code),
            (None, None) => f.write_str(&self.code),
        }
    }
}

/// Maps a card error code to its end-user message.
pub fn card_error_details(code: &str) -> Option<&'static str> {
    let details = match code {
        "invalid_number" => "The card number is invalid.",
        "incorrect_number" => "The card number is incorrect.",
        "invalid_expiry_month" => "The card's expiration month is invalid.",
        "invalid_expiry_year" => "The card's expiration year is invalid.",
        "invalid_cvc" => "The card's security code is invalid.",
        "expired_card" => "The card has expired.",
        "invalid_amount" => "An invalid amount was entered.",
        "incorrect_cvc" => "The card's security code is incorrect.",
        "card_declined" => "The card was declined.",
        "missing" => "There is no card on that customer.",
        "duplicate_transaction" => {
            "A transaction with identical amount and credit card information was submitted very recently."
        }
        "processing_error" => "An error occurred while processing the card.",
        _ => return None,
    };
    Some(details)
}

/// A server-reported failure, classified by the `type` of its error object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request had invalid parameters.
    InvalidRequest(ErrorBody),
    /// The card was rejected.
    Card(CardError),
    /// Anything else the server reports, including `api_error`.
    Api(ErrorBody),
}

impl ApiError {
    /// The card error, when this is one.
    pub fn as_card_error(&self) -> Option<&CardError> {
        match self {
            ApiError::Card(card) => Some(card),
            _ => None,
        }
    }
}

impl From<ErrorBody> for ApiError {
    fn from(body: ErrorBody) -> Self {
        match body.kind.as_deref() {
            Some("card_error") => ApiError::Card(CardError {
                code: body.code.unwrap_or_default(),
                param: body.param,
                message: body.message,
            }),
            Some("invalid_request_error") => ApiError::InvalidRequest(body),
            _ => ApiError::Api(body),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidRequest(body) => write!(f, "invalid request: {body}"),
            ApiError::Card(card) => write!(f, "card error: {card}"),
            ApiError::Api(body) => write!(f, "api error: {body}"),
        }
    }
}

fn describe(error: &Option<ApiError>) -> String {
    match error {
        Some(error) => format!(": {error}"),
        None => String::new(),
    }
}

/// Errors that can occur when using the Stripe SDK.
#[derive(Error, Debug)]
pub enum StripeError {
    /// A network or transport error occurred below HTTP.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// HTTP 400.
    #[error("Bad request ({request}){}", describe(.error))]
    BadRequest {
        request: RequestSummary,
        error: Option<ApiError>,
    },

    /// HTTP 401. Carries the `Authorization` header that was sent.
    #[error("Unauthorized ({request})")]
    Unauthorized {
        request: RequestSummary,
        authorization: Option<String>,
    },

    /// HTTP 402, typically a declined card.
    #[error("Request failed ({request}){}", describe(.error))]
    RequestFailed {
        request: RequestSummary,
        error: Option<ApiError>,
    },

    /// HTTP 404.
    #[error("Not found ({request}){}", describe(.error))]
    NotFound {
        request: RequestSummary,
        error: Option<ApiError>,
    },

    /// HTTP 500, 502, 503 or 504.
    #[error("Server error {status} ({request})")]
    Server { status: u16, request: RequestSummary },

    /// Any status the client does not classify.
    #[error("Unexpected status {status} ({request})")]
    Unknown { status: u16, request: RequestSummary },

    /// The response body was not the JSON we expected.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A 200 response whose body carried an `error` object.
    #[error("API error: {0}")]
    Api(ApiError),

    /// Invalid configuration (e.g. malformed base URL).
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A parameter failed validation; nothing was sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// URL parsing error.
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),
}

impl StripeError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        StripeError::InvalidArgument(message.into())
    }

    /// The server-side error object, if the failure carried one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            StripeError::BadRequest { error, .. }
            | StripeError::RequestFailed { error, .. }
            | StripeError::NotFound { error, .. } => error.as_ref(),
            StripeError::Api(error) => Some(error),
            _ => None,
        }
    }

    /// The card error, if the failure was a card rejection.
    pub fn card_error(&self) -> Option<&CardError> {
        self.api_error().and_then(ApiError::as_card_error)
    }

    /// The HTTP status that produced this error, where one was classified.
    pub fn status(&self) -> Option<u16> {
        match self {
            StripeError::BadRequest { .. } => Some(400),
            StripeError::Unauthorized { .. } => Some(401),
            StripeError::RequestFailed { .. } => Some(402),
            StripeError::NotFound { .. } => Some(404),
            StripeError::Server { status, .. } | StripeError::Unknown { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

/// Convenience type alias for SDK results.
pub type StripeResult<T> = Result<T, StripeError>;
