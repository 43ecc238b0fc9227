//! WhatsApp handoff messages.
//!
//! Checkout and contact do not create server-side records; they hand the
//! visitor a `wa.me` link pre-filled with a plain-text summary. The message
//! layouts here are load-bearing: the business reads these texts verbatim,
//! so field order and wording stay fixed.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::cart::CartEntry;

/// Customer block of a checkout submission. `company` is the only
/// optional field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
}

impl CustomerDetails {
    /// Whether every required field is filled in (whitespace does not
    /// count).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [
            &self.name,
            &self.email,
            &self.phone,
            &self.address,
            &self.city,
            &self.country,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}

/// A contact-form submission. `phone` is the only optional field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactDetails {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// The order summary text sent at checkout.
#[must_use]
pub fn order_message(
    customer: &CustomerDetails,
    items: &[CartEntry],
    total: Decimal,
    payment_method: &str,
) -> String {
    let mut message = format!(
        "New Order Received\n\nCustomer Details:\nName: {}\nEmail: {}\nPhone: {}\n",
        customer.name, customer.email, customer.phone
    );
    if !customer.company.trim().is_empty() {
        message.push_str(&format!("Company: {}\n", customer.company));
    }
    message.push_str(&format!(
        "Address: {}, {}, {}\n\n",
        customer.address, customer.city, customer.country
    ));

    message.push_str("Order Items:\n");
    for item in items {
        message.push_str(&format!(
            "- {} (Qty: {}) - GHS {:.2}\n",
            item.name,
            item.quantity,
            item.line_total().round_dp(2)
        ));
    }

    message.push_str(&format!(
        "\nTotal: GHS {:.2}\nPayment Method: {}\n",
        total.round_dp(2),
        payment_method
    ));
    message
}

/// The contact text sent from the contact form.
#[must_use]
pub fn contact_message(contact: &ContactDetails) -> String {
    let mut message = format!(
        "New Contact Message\n\nName: {}\nEmail: {}\n",
        contact.name, contact.email
    );
    if !contact.phone.trim().is_empty() {
        message.push_str(&format!("Phone: {}\n", contact.phone));
    }
    message.push_str(&format!(
        "Subject: {}\n\nMessage:\n{}\n",
        contact.subject, contact.message
    ));
    message
}

/// Append the percent-encoded message to the business link as its `text`
/// query parameter.
#[must_use]
pub fn handoff_url(base_link: &str, message: &str) -> String {
    let separator = if base_link.contains('?') { '&' } else { '?' };
    format!(
        "{base_link}{separator}text={}",
        urlencoding::encode(message)
    )
}
