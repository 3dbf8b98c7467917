//! Free-text classification rules
//!
//! Status and occupancy arrive as unconstrained spreadsheet text. Both are
//! classified by an ordered rule table: the first rule whose pattern occurs
//! in the upper-cased input wins, otherwise the default applies. Same text
//! in, same category out.

use crate::model::{Occupancy, Status};

/// One classification rule: any of `patterns` found as a substring maps the
/// input to `status`.
pub struct StatusRule {
    pub patterns: &'static [&'static str],
    pub status: Status,
}

/// Status rules in priority order.
pub const STATUS_RULES: &[StatusRule] = &[
    StatusRule {
        patterns: &["CONFIRMADA"],
        status: Status::Confirmada,
    },
    StatusRule {
        patterns: &["REALIZADA"],
        status: Status::Realizada,
    },
    StatusRule {
        patterns: &["CANCELADA"],
        status: Status::Cancelada,
    },
    StatusRule {
        patterns: &["NÃO ATENDIDA"],
        status: Status::NaoAtendida,
    },
    StatusRule {
        patterns: &["DIÁRIA", "COBRANÇA"],
        status: Status::CobrancaDiaria,
    },
];

/// Classify raw status text; unrecognized text is a plain request.
pub fn classify_status(raw: &str) -> Status {
    let upper = raw.trim().to_uppercase();
    for rule in STATUS_RULES {
        if rule.patterns.iter().any(|pattern| upper.contains(pattern)) {
            return rule.status;
        }
    }
    Status::Solicitada
}

pub struct OccupancyRule {
    pub patterns: &'static [&'static str],
    pub occupancy: Occupancy,
}

pub const OCCUPANCY_RULES: &[OccupancyRule] = &[
    OccupancyRule {
        patterns: &["BAIXA"],
        occupancy: Occupancy::Baixa,
    },
    OccupancyRule {
        patterns: &["MÉDIA", "MEDIA"],
        occupancy: Occupancy::Media,
    },
    OccupancyRule {
        patterns: &["BOA", "ALTA"],
        occupancy: Occupancy::Boa,
    },
];

/// Classify raw occupancy text; anything else is not applicable.
pub fn classify_occupancy(raw: &str) -> Occupancy {
    let upper = raw.trim().to_uppercase();
    for rule in OCCUPANCY_RULES {
        if rule.patterns.iter().any(|pattern| upper.contains(pattern)) {
            return rule.occupancy;
        }
    }
    Occupancy::NaoAplicavel
}
