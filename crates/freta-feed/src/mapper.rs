//! Positional row mapping
//!
//! The feed publishes no header names, only positions. The mapping below is
//! the contract with the BASE_API worksheet; a column inserted upstream
//! shifts everything after it, so the indices live here in one place.

use freta_domain::model::ProcessData;
use freta_domain::service::{
    classify_occupancy, classify_status, month_name, normalize_feed_date, EMPTY_DATE,
};

use crate::table::{FeedRow, FeedTable};

// Worksheet column indices (zero-based): B, D, E, I, J, L, P, Q, T, AC,
// AL, AN, AO, AP, AQ..BE, BF, BG, BN.
const COL_ID: usize = 1;
const COL_COMPANY: usize = 3;
const COL_PROCESS: usize = 4;
const COL_EXECUTIVE: usize = 8;
const COL_SECTOR: usize = 9;
const COL_PROGRAM: usize = 11;
const COL_START_DATE: usize = 15;
const COL_END_DATE: usize = 16;
const COL_ORIGIN: usize = 19;
const COL_DESTINATION: usize = 28;
const COL_STATUS: usize = 37;
const COL_BUS_QUANTITY: usize = 39;
const COL_OCCUPANCY: usize = 40;
const COL_OCCUPANCY_RATE: usize = 41;
const COL_KM_QTD_PREVISTO: usize = 42;
const COL_KM_QTD_REALIZADO: usize = 43;
const COL_KM_VAL_PREVISTO: usize = 45;
const COL_KM_VAL_REALIZADO: usize = 46;
const COL_DIA_QTD_PREVISTO: usize = 48;
const COL_DIA_QTD_REALIZADO: usize = 49;
const COL_DIA_VAL_PREVISTO: usize = 50;
const COL_DIA_VAL_REALIZADO: usize = 51;
const COL_MOT_QTD_PREVISTO: usize = 52;
const COL_MOT_QTD_REALIZADO: usize = 53;
const COL_MOT_VAL_PREVISTO: usize = 55;
const COL_MOT_VAL_REALIZADO: usize = 56;
const COL_DEADLINE_STATUS: usize = 57;
const COL_PAYMENT_TERMS: usize = 58;
const COL_DEADLINE_DAYS: usize = 65;

/// Map every feed row into a process row. No filtering happens here.
pub fn map_rows(table: &FeedTable) -> Vec<ProcessData> {
    table.rows.iter().map(map_row).collect()
}

/// Drop stray header/blank rows: a row only counts when its process-number
/// cell is a real value.
pub fn valid_rows(processes: Vec<ProcessData>) -> Vec<ProcessData> {
    processes
        .into_iter()
        .filter(|p| !p.processo.is_empty() && p.processo != "PROCESSO" && p.processo != "null")
        .collect()
}

fn map_row(row: &FeedRow) -> ProcessData {
    let start_date = date_text(row, COL_START_DATE);
    let month = month_name(&start_date).to_string();

    let km_val_realizado = row.number(COL_KM_VAL_REALIZADO);
    let dia_val_realizado = row.number(COL_DIA_VAL_REALIZADO);
    let mot_val_realizado = row.number(COL_MOT_VAL_REALIZADO);

    ProcessData {
        id: row.text(COL_ID),
        processo: row.text(COL_PROCESS).trim().to_string(),
        origin: row.text(COL_ORIGIN),
        destination: row.text(COL_DESTINATION),
        start_date,
        end_date: date_text(row, COL_END_DATE),
        company: row.text(COL_COMPANY),
        status: classify_status(&row.text(COL_STATUS)),
        value: km_val_realizado + dia_val_realizado + mot_val_realizado,
        bus_quantity: row.number(COL_BUS_QUANTITY),
        occupancy: classify_occupancy(&row.text(COL_OCCUPANCY)),
        occupancy_rate: row.text_or(COL_OCCUPANCY_RATE, "0%"),
        payment_terms: row.text_or(COL_PAYMENT_TERMS, "A Definir"),
        deadline_status: row.text(COL_DEADLINE_STATUS),
        deadline_days: row.number(COL_DEADLINE_DAYS),
        executive: row.text_or(COL_EXECUTIVE, "N/I"),
        sector: row.text_or(COL_SECTOR, "Geral"),
        program: row.text_or(COL_PROGRAM, "Geral"),
        month,
        km_qtd_previsto: row.number(COL_KM_QTD_PREVISTO),
        km_qtd_realizado: row.number(COL_KM_QTD_REALIZADO),
        km_val_previsto: row.number(COL_KM_VAL_PREVISTO),
        km_val_realizado,
        dia_qtd_previsto: row.number(COL_DIA_QTD_PREVISTO),
        dia_qtd_realizado: row.number(COL_DIA_QTD_REALIZADO),
        dia_val_previsto: row.number(COL_DIA_VAL_PREVISTO),
        dia_val_realizado,
        mot_qtd_previsto: row.number(COL_MOT_QTD_PREVISTO),
        mot_qtd_realizado: row.number(COL_MOT_QTD_REALIZADO),
        mot_val_previsto: row.number(COL_MOT_VAL_PREVISTO),
        mot_val_realizado,
    }
}

fn date_text(row: &FeedRow, index: usize) -> String {
    let text = row.text(index);
    if text.is_empty() {
        EMPTY_DATE.to_string()
    } else {
        normalize_feed_date(&text)
    }
}
