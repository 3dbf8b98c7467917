//! Dashboard process rows
//!
//! One `ProcessData` per remote feed row, rebuilt wholesale on every fetch.
//! Derived fields (status, occupancy, month, realized value) are pure
//! functions of the raw cells and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a charter process, classified from free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Solicitada")]
    Solicitada,
    #[serde(rename = "Confirmada")]
    Confirmada,
    #[serde(rename = "Realizada")]
    Realizada,
    #[serde(rename = "Cancelada")]
    Cancelada,
    #[serde(rename = "Não Atendida")]
    NaoAtendida,
    #[serde(rename = "Cobrança/Diária")]
    CobrancaDiaria,
}

impl Status {
    pub const ALL: [Status; 6] = [
        Status::Solicitada,
        Status::Confirmada,
        Status::Realizada,
        Status::Cancelada,
        Status::NaoAtendida,
        Status::CobrancaDiaria,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Status::Solicitada => "Solicitada",
            Status::Confirmada => "Confirmada",
            Status::Realizada => "Realizada",
            Status::Cancelada => "Cancelada",
            Status::NaoAtendida => "Não Atendida",
            Status::CobrancaDiaria => "Cobrança/Diária",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse occupancy band of the contracted vehicles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Occupancy {
    #[serde(rename = "Baixa")]
    Baixa,
    #[serde(rename = "Média")]
    Media,
    #[serde(rename = "Boa")]
    Boa,
    #[serde(rename = "N/A")]
    NaoAplicavel,
}

impl Occupancy {
    pub fn label(self) -> &'static str {
        match self {
            Occupancy::Baixa => "Baixa",
            Occupancy::Media => "Média",
            Occupancy::Boa => "Boa",
            Occupancy::NaoAplicavel => "N/A",
        }
    }
}

impl std::fmt::Display for Occupancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One reshaped feed row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessData {
    pub id: String,
    /// SEI process number; the valid-row filter keys on this cell.
    pub processo: String,
    pub origin: String,
    pub destination: String,
    /// Normalized `DD/MM/YYYY` departure date.
    pub start_date: String,
    pub end_date: String,
    pub company: String,
    pub status: Status,
    /// Realized total: km + daily-rate + additional-driver values.
    pub value: f64,
    pub bus_quantity: f64,
    pub occupancy: Occupancy,
    /// Raw occupancy percentage text as published.
    pub occupancy_rate: String,
    pub payment_terms: String,
    pub deadline_status: String,
    /// Days of advance notice; under 15 counts as a delayed request.
    pub deadline_days: f64,
    pub executive: String,
    pub sector: String,
    pub program: String,
    /// Upper-case Portuguese month name of the departure date.
    pub month: String,
    pub km_qtd_previsto: f64,
    pub km_qtd_realizado: f64,
    pub km_val_previsto: f64,
    pub km_val_realizado: f64,
    pub dia_qtd_previsto: f64,
    pub dia_qtd_realizado: f64,
    pub dia_val_previsto: f64,
    pub dia_val_realizado: f64,
    pub mot_qtd_previsto: f64,
    pub mot_qtd_realizado: f64,
    pub mot_val_previsto: f64,
    pub mot_val_realizado: f64,
}
