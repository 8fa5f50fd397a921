use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackageKind {
    Umrah,
    HajjStandard,
    HajjPremium,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackageStatus {
    Open,
    Closed,
    Full,
}

/// A departure package. Catalog entries are seeded at startup and never
/// mutated afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Package {
    /// Package ID
    pub id: String,
    pub name: String,
    pub kind: PackageKind,
    /// Full price in whole rupiah
    pub price: i64,
    /// Minimum accepted down payment in whole rupiah
    pub min_down_payment: i64,
    /// Total seats
    pub quota: u32,
    /// Seats already taken
    pub registered: u32,
    /// Departure date, ISO yyyy-mm-dd
    pub departure_date: String,
    /// Trip length, e.g. "12 hari"
    pub duration: String,
    pub status: PackageStatus,
}

impl Package {
    pub fn seats_remaining(&self) -> u32 {
        self.quota.saturating_sub(self.registered)
    }
}
