//! Time-based identifiers, in the shapes the rest of the agency's tooling
//! already expects: `R<millis>` registration ids and `AG<millis>` agent
//! referral codes.

pub fn registration_id(now_millis: i64) -> String {
    format!("R{now_millis}")
}

pub fn agent_code(now_millis: i64) -> String {
    format!("AG{now_millis}")
}
