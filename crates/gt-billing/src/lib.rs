//! # gt-billing
//!
//! The mock subscription page's data and input helpers.
//!
//! There is no real payment processing anywhere in the app — the page
//! collects card details into local state and never submits them. What
//! this crate provides is the pure string formatting the inputs apply on
//! every keystroke, plus the fixed plan/benefit copy.
//!
//! ## Key components
//!
//! - [`format_card_number`] / [`format_expiry`] / [`clamp_cvc`] — the
//!   keystroke formatters
//! - [`Plan`] — the $5/month Premium plan with its three benefits
//! - [`PaymentForm`] / [`SubscriptionPage`] — form state whose setters
//!   apply the formatters, and the collapsed ⇄ payment-open page toggle

pub mod card;
pub mod plan;

pub use card::{clamp_cvc, format_card_number, format_expiry};
pub use plan::{Benefit, PaymentForm, Plan, SubscriptionPage};
