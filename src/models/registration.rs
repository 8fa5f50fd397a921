use serde::{Deserialize, Serialize};

/// Registration lifecycle. Payments only ever move a registration through
/// the first three states; ticket issuance and departure are flipped by
/// back-office staff through the raw status setter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegistrationStatus {
    Draft,
    DownPaymentMade,
    PaidInFull,
    TicketIssued,
    Departed,
}

/// The five documents collected per pilgrim before departure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    Passport,
    IdCard,
    Vaccine,
    Visa,
    Ticket,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentChecklist {
    pub passport: bool,
    pub id_card: bool,
    pub vaccine: bool,
    pub visa: bool,
    pub ticket: bool,
}

impl DocumentChecklist {
    pub fn set(&mut self, document: DocumentKind, verified: bool) {
        match document {
            DocumentKind::Passport => self.passport = verified,
            DocumentKind::IdCard => self.id_card = verified,
            DocumentKind::Vaccine => self.vaccine = verified,
            DocumentKind::Visa => self.visa = verified,
            DocumentKind::Ticket => self.ticket = verified,
        }
    }

    pub fn verified_count(&self) -> usize {
        [self.passport, self.id_card, self.vaccine, self.visa, self.ticket]
            .iter()
            .filter(|flag| **flag)
            .count()
    }
}

/// A pilgrim's booking against a package, with its running payment state.
///
/// Invariant held by every ledger mutation:
/// `paid_amount + remaining_amount == total_amount`. Overpayment is
/// accepted and leaves `remaining_amount` at or below zero.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Registration {
    /// Registration ID
    pub id: String,
    pub pilgrim_id: String,
    pub package_id: String,
    /// Referring agent, when the booking came through one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    pub status: RegistrationStatus,
    /// Package price at creation time, whole rupiah
    pub total_amount: i64,
    /// First payment amount, fixed once the first payment lands
    pub dp_amount: i64,
    /// Running total of payments received
    pub paid_amount: i64,
    /// `total_amount - paid_amount`, recomputed on every payment
    pub remaining_amount: i64,
    /// Unix timestamp of creation
    pub created_at: i64,
    pub documents: DocumentChecklist,
}
