use crate::models::package::Package;
use crate::models::registration::{
    DocumentChecklist, DocumentKind, Registration, RegistrationStatus,
};
use dashmap::DashMap;

/// In-memory registration ledger. Registrations are appended and mutated,
/// never removed.
pub struct RegistrationLedger {
    registrations: DashMap<String, Registration>,
}

impl RegistrationLedger {
    pub fn new() -> Self {
        Self {
            registrations: DashMap::new(),
        }
    }

    /// Append an existing registration record (seed data)
    pub fn add_registration(&self, registration: Registration) {
        self.registrations
            .insert(registration.id.clone(), registration);
    }

    /// Open a draft registration against a package. The package price is
    /// copied into the registration; later price changes do not follow.
    pub fn create(
        &self,
        id: String,
        package: &Package,
        pilgrim_id: String,
        agent_id: Option<String>,
        created_at: i64,
    ) -> Registration {
        let registration = Registration {
            id: id.clone(),
            pilgrim_id,
            package_id: package.id.clone(),
            agent_id,
            status: RegistrationStatus::Draft,
            total_amount: package.price,
            dp_amount: 0,
            paid_amount: 0,
            remaining_amount: package.price,
            created_at,
            documents: DocumentChecklist::default(),
        };
        self.registrations.insert(id, registration.clone());
        registration
    }

    /// Get a registration by id
    pub fn get(&self, id: &str) -> Option<Registration> {
        self.registrations.get(id).map(|entry| entry.value().clone())
    }

    /// Raw status overwrite, no transition guard.
    /// Returns false when the id is unknown.
    pub fn set_status(&self, id: &str, status: RegistrationStatus) -> bool {
        match self.registrations.get_mut(id) {
            Some(mut entry) => {
                entry.value_mut().status = status;
                true
            }
            None => false,
        }
    }

    /// Apply one installment payment.
    ///
    /// `remaining_amount` is recomputed from the total rather than
    /// decremented, so it self-corrects. Overpayment is accepted and lands
    /// at paid-in-full with a non-positive remainder. The first non-zero
    /// payment fixes `dp_amount`.
    ///
    /// Returns the updated record, or None when the id is unknown.
    pub fn apply_payment(&self, id: &str, amount: i64) -> Option<Registration> {
        let mut entry = self.registrations.get_mut(id)?;
        let registration = entry.value_mut();

        registration.paid_amount += amount;
        registration.remaining_amount = registration.total_amount - registration.paid_amount;

        if registration.paid_amount >= registration.total_amount {
            registration.status = RegistrationStatus::PaidInFull;
        } else if registration.paid_amount > 0 {
            registration.status = RegistrationStatus::DownPaymentMade;
        }

        if registration.dp_amount == 0 {
            registration.dp_amount = amount;
        }

        Some(registration.clone())
    }

    /// Flip one document checklist flag.
    /// Returns the updated record, or None when the id is unknown.
    pub fn set_document(
        &self,
        id: &str,
        document: DocumentKind,
        verified: bool,
    ) -> Option<Registration> {
        let mut entry = self.registrations.get_mut(id)?;
        entry.value_mut().documents.set(document, verified);
        Some(entry.value().clone())
    }

    pub fn list(&self) -> Vec<Registration> {
        let mut registrations: Vec<Registration> = self
            .registrations
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        registrations.sort_by(|a, b| a.id.cmp(&b.id));
        registrations
    }

    pub fn for_pilgrim(&self, pilgrim_id: &str) -> Vec<Registration> {
        let mut registrations: Vec<Registration> = self
            .registrations
            .iter()
            .filter(|entry| entry.value().pilgrim_id == pilgrim_id)
            .map(|entry| entry.value().clone())
            .collect();
        registrations.sort_by(|a, b| a.id.cmp(&b.id));
        registrations
    }

    pub fn for_agent(&self, agent_id: &str) -> Vec<Registration> {
        let mut registrations: Vec<Registration> = self
            .registrations
            .iter()
            .filter(|entry| entry.value().agent_id.as_deref() == Some(agent_id))
            .map(|entry| entry.value().clone())
            .collect();
        registrations.sort_by(|a, b| a.id.cmp(&b.id));
        registrations
    }

    /// Sum of payments received across the whole ledger
    pub fn total_collected(&self) -> i64 {
        self.registrations
            .iter()
            .map(|entry| entry.value().paid_amount)
            .sum()
    }

    pub fn count_with_status(&self, status: RegistrationStatus) -> usize {
        self.registrations
            .iter()
            .filter(|entry| entry.value().status == status)
            .count()
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

impl Default for RegistrationLedger {
    fn default() -> Self {
        Self::new()
    }
}
