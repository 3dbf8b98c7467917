//! Dashboard row filtering
//!
//! Mirrors the dashboard filter bar: every criterion is optional and they
//! combine conjunctively. Filtering happens before aggregation.

use serde::{Deserialize, Serialize};

use crate::model::{ProcessData, Status};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessFilter {
    /// Case-insensitive substring of the process number.
    pub process: Option<String>,
    /// Month of the departure date, two digits (`01` … `12`).
    pub month: Option<String>,
    pub executive: Option<String>,
    pub sector: Option<String>,
    pub company: Option<String>,
    pub status: Option<Status>,
}

impl ProcessFilter {
    pub fn is_empty(&self) -> bool {
        self == &ProcessFilter::default()
    }

    pub fn matches(&self, process: &ProcessData) -> bool {
        if let Some(ref needle) = self.process {
            if !process
                .processo
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        if let Some(ref month) = self.month {
            if !process.start_date.contains(&format!("/{}/", month)) {
                return false;
            }
        }
        if let Some(ref executive) = self.executive {
            if &process.executive != executive {
                return false;
            }
        }
        if let Some(ref sector) = self.sector {
            if &process.sector != sector {
                return false;
            }
        }
        if let Some(ref company) = self.company {
            if &process.company != company {
                return false;
            }
        }
        if let Some(status) = self.status {
            if process.status != status {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, processes: &[ProcessData]) -> Vec<ProcessData> {
        processes
            .iter()
            .filter(|process| self.matches(process))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Occupancy;

    fn process(processo: &str, month: &str, executive: &str, status: Status) -> ProcessData {
        ProcessData {
            id: processo.to_string(),
            processo: processo.to_string(),
            origin: String::new(),
            destination: String::new(),
            start_date: format!("10/{}/2026", month),
            end_date: String::new(),
            company: "VIAÇÃO A".into(),
            status,
            value: 0.0,
            bus_quantity: 0.0,
            occupancy: Occupancy::NaoAplicavel,
            occupancy_rate: "0%".into(),
            payment_terms: String::new(),
            deadline_status: String::new(),
            deadline_days: 0.0,
            executive: executive.to_string(),
            sector: "GARE".into(),
            program: String::new(),
            month: String::new(),
            km_qtd_previsto: 0.0,
            km_qtd_realizado: 0.0,
            km_val_previsto: 0.0,
            km_val_realizado: 0.0,
            dia_qtd_previsto: 0.0,
            dia_qtd_realizado: 0.0,
            dia_val_previsto: 0.0,
            dia_val_realizado: 0.0,
            mot_qtd_previsto: 0.0,
            mot_qtd_realizado: 0.0,
            mot_val_previsto: 0.0,
            mot_val_realizado: 0.0,
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = ProcessFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&process("SEI-1", "03", "SEE A", Status::Solicitada)));
    }

    #[test]
    fn test_process_substring_is_case_insensitive() {
        let filter = ProcessFilter {
            process: Some("sei-1".into()),
            ..Default::default()
        };
        assert!(filter.matches(&process("SEI-123", "03", "SEE A", Status::Solicitada)));
        assert!(!filter.matches(&process("SEI-200", "03", "SEE A", Status::Solicitada)));
    }

    #[test]
    fn test_month_and_status_filters() {
        let filter = ProcessFilter {
            month: Some("03".into()),
            status: Some(Status::Confirmada),
            ..Default::default()
        };
        assert!(filter.matches(&process("P", "03", "SEE A", Status::Confirmada)));
        assert!(!filter.matches(&process("P", "04", "SEE A", Status::Confirmada)));
        assert!(!filter.matches(&process("P", "03", "SEE A", Status::Realizada)));
    }

    #[test]
    fn test_apply_keeps_order() {
        let rows = vec![
            process("A", "01", "X", Status::Solicitada),
            process("B", "02", "X", Status::Solicitada),
            process("C", "01", "Y", Status::Solicitada),
        ];
        let filter = ProcessFilter {
            month: Some("01".into()),
            ..Default::default()
        };
        let kept = filter.apply(&rows);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].processo, "A");
        assert_eq!(kept[1].processo, "C");
    }
}
