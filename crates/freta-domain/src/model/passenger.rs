//! Passenger entries for the passenger-list export
//!
//! Ephemeral: passengers exist only while a list document is being built
//! and are never persisted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hard cap on the number of passengers in one list.
pub const PASSENGER_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    #[serde(default = "new_passenger_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cpf: String,
}

impl Passenger {
    pub fn new(name: &str, cpf: &str) -> Self {
        Self {
            id: new_passenger_id(),
            name: name.trim().to_uppercase(),
            cpf: mask_cpf(cpf),
        }
    }
}

fn new_passenger_id() -> String {
    Uuid::new_v4().simple().to_string()[..7].to_string()
}

/// Apply the progressive CPF digit-group mask (`000.000.000-00`).
///
/// Non-digits are dropped and input is capped at 11 digits. Partial input
/// is grouped as far as it goes; a 10-digit value stays unformatted, as in
/// the original entry mask.
pub fn mask_cpf(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(11)
        .collect();

    match digits.len() {
        11 => format!(
            "{}.{}.{}-{}",
            &digits[0..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..11]
        ),
        7..=9 => format!("{}.{}.{}", &digits[0..3], &digits[3..6], &digits[6..]),
        4..=6 => format!("{}.{}", &digits[0..3], &digits[3..]),
        _ => digits,
    }
}
