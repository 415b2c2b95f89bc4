//! Delivery-address syntax checks.
//!
//! Deliberately structural, not RFC-complete: the address is only ever used
//! to route the delivery, and the delivery channels do their own rejection.

use restrip_core::DeliveryMethod;

/// Check `address` against the syntax of the chosen delivery method.
pub fn is_valid(method: DeliveryMethod, address: &str) -> bool {
    match method {
        DeliveryMethod::Email => is_valid_email(address),
        DeliveryMethod::Telegram => is_valid_handle(address),
    }
}

/// `local@domain` with a dotted, non-edge-dotted domain and no whitespace.
fn is_valid_email(address: &str) -> bool {
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if domain.contains('@') || address.chars().any(char::is_whitespace) {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Telegram handles are `@` followed by the username.
fn is_valid_handle(address: &str) -> bool {
    address.starts_with('@') && address.len() > 1
}
