use crate::models::registration::RegistrationStatus;
use crate::models::user::Role;
use crate::stores::directory::UserDirectory;
use crate::stores::package_catalog::PackageCatalog;
use crate::stores::registration_ledger::RegistrationLedger;
use crate::utils::currency::format_idr;
use serde::{Deserialize, Serialize};

/// Office-wide figures the admin/branch/treasurer dashboards show.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalSummary {
    pub pilgrims: usize,
    pub agents: usize,
    pub packages: usize,
    pub registrations: usize,
    pub draft: usize,
    pub down_payment_made: usize,
    pub paid_in_full: usize,
    pub ticket_issued: usize,
    pub departed: usize,
    /// Sum of payments received, whole rupiah
    pub total_revenue: i64,
    pub total_revenue_formatted: String,
}

/// Figures for one agent's dashboard: their referred registrations and
/// the commission earned on landed down payments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSummary {
    pub agent_id: String,
    pub referred_registrations: usize,
    /// Whole rupiah
    pub commission: i64,
    pub commission_formatted: String,
}

pub fn portal_summary(
    directory: &UserDirectory,
    packages: &PackageCatalog,
    ledger: &RegistrationLedger,
) -> PortalSummary {
    let total_revenue = ledger.total_collected();

    PortalSummary {
        pilgrims: directory.count_by_role(Role::Pilgrim),
        agents: directory.count_by_role(Role::Agent),
        packages: packages.len(),
        registrations: ledger.len(),
        draft: ledger.count_with_status(RegistrationStatus::Draft),
        down_payment_made: ledger.count_with_status(RegistrationStatus::DownPaymentMade),
        paid_in_full: ledger.count_with_status(RegistrationStatus::PaidInFull),
        ticket_issued: ledger.count_with_status(RegistrationStatus::TicketIssued),
        departed: ledger.count_with_status(RegistrationStatus::Departed),
        total_revenue,
        total_revenue_formatted: format_idr(total_revenue),
    }
}

/// Commission applies once a referred registration has a landed down
/// payment, at `rate` of the down-payment amount.
pub fn agent_summary(ledger: &RegistrationLedger, agent_id: &str, rate: f64) -> AgentSummary {
    let referred = ledger.for_agent(agent_id);

    let commission = referred
        .iter()
        .filter(|registration| {
            matches!(
                registration.status,
                RegistrationStatus::DownPaymentMade | RegistrationStatus::PaidInFull
            )
        })
        .map(|registration| (registration.dp_amount as f64 * rate).round() as i64)
        .sum();

    AgentSummary {
        agent_id: agent_id.to_string(),
        referred_registrations: referred.len(),
        commission,
        commission_formatted: format_idr(commission),
    }
}
