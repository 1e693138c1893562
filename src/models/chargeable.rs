//! Payment sources.
//!
//! Charges and subscriptions accept a card, a token, or a customer with a card
//! on file interchangeably. [`Chargeable`] closes over the three and writes
//! whichever one it holds into the request form.

use crate::error::{StripeError, StripeResult};
use crate::form::FormParams;
use crate::models::{Card, Customer, Token};

/// Something that can be charged.
#[derive(Debug, Clone)]
pub enum Chargeable {
    /// Raw card details, or a card carrying a token ID.
    Card(Card),
    /// A previously created token.
    Token(Token),
    /// A customer; the charge goes to their active card.
    Customer(Customer),
}

impl Chargeable {
    /// Write the payment-source fields into `params`.
    ///
    /// Fails without touching `params` when the source cannot identify what to
    /// charge.
    pub fn project_into(&self, params: &mut FormParams) -> StripeResult<()> {
        match self {
            Chargeable::Card(card) => {
                let mut staged = FormParams::new();
                card.values(&mut staged)?;
                for (key, value) in staged.pairs() {
                    params.set(key.as_str(), value);
                }
                Ok(())
            }
            Chargeable::Token(token) => {
                if token.id.is_empty() {
                    return Err(StripeError::invalid("token has no ID"));
                }
                params.set("card", &token.id);
                Ok(())
            }
            Chargeable::Customer(customer) => {
                if customer.id.is_empty() {
                    return Err(StripeError::invalid("customer has no ID"));
                }
                if customer.active_card.is_none() {
                    return Err(StripeError::invalid(format!(
                        "customer {} has no active card",
                        customer.id
                    )));
                }
                params.set("customer", &customer.id);
                Ok(())
            }
        }
    }
}

impl From<Card> for Chargeable {
    fn from(card: Card) -> Self {
        Chargeable::Card(card)
    }
}

impl From<Token> for Chargeable {
    fn from(token: Token) -> Self {
        Chargeable::Token(token)
    }
}

impl From<Customer> for Chargeable {
    fn from(customer: Customer) -> Self {
        Chargeable::Customer(customer)
    }
}

impl From<&Card> for Chargeable {
    fn from(card: &Card) -> Self {
        Chargeable::Card(card.clone())
    }
}

impl From<&Token> for Chargeable {
    fn from(token: &Token) -> Self {
        Chargeable::Token(token.clone())
    }
}

impl From<&Customer> for Chargeable {
    fn from(customer: &Customer) -> Self {
        Chargeable::Customer(customer.clone())
    }
}
