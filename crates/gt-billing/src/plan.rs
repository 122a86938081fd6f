// plan.rs — The mock Premium plan and payment-form state.

use serde::Serialize;

use crate::card::{clamp_cvc, format_card_number, format_expiry};

/// One benefit entry on the subscription page.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Benefit {
    pub title: &'static str,
    pub description: &'static str,
}

/// The subscription plan on offer. There is exactly one.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub monthly_price_usd: u32,
}

impl Plan {
    pub fn premium() -> Self {
        Self {
            name: "Premium",
            monthly_price_usd: 5,
        }
    }

    /// The three fixed benefits shown on the page.
    pub fn benefits() -> &'static [Benefit] {
        &[
            Benefit {
                title: "AI-Powered Insights",
                description: "Get personalized goal recommendations and progress analysis",
            },
            Benefit {
                title: "Advanced Analytics",
                description: "Track your progress with detailed statistics and reports",
            },
            Benefit {
                title: "Priority Support",
                description: "Get faster responses and dedicated support",
            },
        ]
    }
}

/// Local payment-form state. Setters apply the keystroke formatters;
/// nothing is ever submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentForm {
    card_number: String,
    card_name: String,
    expiry: String,
    cvc: String,
}

impl PaymentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_card_number(&mut self, raw: &str) {
        self.card_number = format_card_number(raw);
    }

    pub fn set_card_name(&mut self, raw: &str) {
        self.card_name = raw.to_string();
    }

    pub fn set_expiry(&mut self, raw: &str) {
        self.expiry = format_expiry(raw);
    }

    pub fn set_cvc(&mut self, raw: &str) {
        self.cvc = clamp_cvc(raw);
    }

    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    pub fn card_name(&self) -> &str {
        &self.card_name
    }

    pub fn expiry(&self) -> &str {
        &self.expiry
    }

    pub fn cvc(&self) -> &str {
        &self.cvc
    }
}

/// The subscription page: plan overview, expandable into the payment form.
///
/// Closing the form keeps whatever was typed — the state lives for the
/// page's lifetime, like the component state it models.
#[derive(Debug, Default)]
pub struct SubscriptionPage {
    show_payment_form: bool,
    form: PaymentForm,
}

impl SubscriptionPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn payment_form_open(&self) -> bool {
        self.show_payment_form
    }

    pub fn open_payment_form(&mut self) {
        self.show_payment_form = true;
    }

    pub fn close_payment_form(&mut self) {
        self.show_payment_form = false;
    }

    pub fn form(&self) -> &PaymentForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PaymentForm {
        &mut self.form
    }
}
