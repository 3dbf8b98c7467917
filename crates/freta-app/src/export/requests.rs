//! Spreadsheet export of the request collection
//!
//! Layout contract: a banner region merged across all 33 columns, the
//! header row at row 8 with cell text equal to the schema labels, then one
//! data row per record in collection order.

use std::path::Path;

use chrono::Utc;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};

use freta_domain::model::{
    is_highlighted_column, FieldDefinition, FieldId, FieldKind, TransportRequest, FIELDS,
};
use freta_domain::service::format_date_br;
use freta_types::{Error, Result};

const BANNER_TEXT: &str =
    "SECRETARIA DE EDUCAÇÃO | GOVERNO DE PERNAMBUCO          Solicitação de Transporte (Fretamento)";

const NAVY: u32 = 0x001F54;
const HEADER_GREY: u32 = 0xD3D3D3;
const HEADER_YELLOW: u32 = 0xFFFF00;

// Worksheet rows (zero-based): banner spans 0..=5, header sits at 7, data
// starts at 8.
const BANNER_LAST_ROW: u32 = 5;
const HEADER_ROW: u32 = 7;
const DATA_START_ROW: u32 = 8;

/// Export the whole collection to an OpenXML spreadsheet at `output_path`.
///
/// An empty collection is refused rather than producing an empty document.
pub fn export_requests(requests: &[TransportRequest], output_path: &Path) -> Result<()> {
    if requests.is_empty() {
        return Err(Error::EmptyExport);
    }

    let rows = build_rows(requests);

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    write_requests_sheet(sheet, &rows)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

/// Render the data grid: one row per record in collection order, one cell
/// per schema field in schema order. Pure, so export determinism reduces to
/// this function.
pub fn build_rows(requests: &[TransportRequest]) -> Vec<Vec<String>> {
    requests
        .iter()
        .map(|request| {
            FIELDS
                .iter()
                .map(|definition| render_cell(request, definition))
                .collect()
        })
        .collect()
}

fn render_cell(request: &TransportRequest, definition: &FieldDefinition) -> String {
    let value = request.value(definition.id);
    match definition.kind {
        FieldKind::Date => format_date_br(value),
        _ => value.to_string(),
    }
}

/// Derive the output filename from the first record's event name and
/// period, falling back to a generic dated name.
pub fn derive_export_filename(requests: &[TransportRequest]) -> String {
    if let Some(first) = requests.first() {
        let event = sanitize_component(first.value(FieldId::EVENT_NAME));
        let period = sanitize_component(first.value(FieldId::EVENT_PERIOD));
        let parts: Vec<&str> = [event.as_str(), period.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();
        if !parts.is_empty() {
            return format!("SOLICITACAO_FRETAMENTO_{}.xlsx", parts.join("_"));
        }
    }
    format!(
        "SOLICITACAO_FRETAMENTO_PE_{}.xlsx",
        Utc::now().format("%Y-%m-%d")
    )
}

// Replace filesystem-unsafe characters with underscores, collapsing runs.
fn sanitize_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c.is_alphanumeric() {
            out.push(c);
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    out.trim_matches('_').to_string()
}

fn write_requests_sheet(sheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    sheet
        .set_name("Solicitações")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet.set_screen_gridlines(false);

    let banner_format = Format::new()
        .set_bold()
        .set_font_size(22)
        .set_font_name("Arial")
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(NAVY))
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter);

    sheet
        .merge_range(
            0,
            0,
            BANNER_LAST_ROW,
            (FieldId::COUNT - 1) as u16,
            BANNER_TEXT,
            &banner_format,
        )
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_base = Format::new()
        .set_bold()
        .set_font_size(10)
        .set_font_name("Arial")
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    let header_grey = header_base.clone().set_background_color(Color::RGB(HEADER_GREY));
    let header_yellow = header_base.set_background_color(Color::RGB(HEADER_YELLOW));

    sheet
        .set_row_height(HEADER_ROW, 35)
        .map_err(|e| Error::Excel(e.to_string()))?;

    for definition in FIELDS.iter() {
        let format = if is_highlighted_column(definition) {
            &header_yellow
        } else {
            &header_grey
        };
        sheet
            .write_string_with_format(
                HEADER_ROW,
                definition.id.index() as u16,
                definition.label,
                format,
            )
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    let cell_format = Format::new()
        .set_font_size(10)
        .set_font_name("Arial")
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    for (row_index, row) in rows.iter().enumerate() {
        let sheet_row = DATA_START_ROW + row_index as u32;
        sheet
            .set_row_height(sheet_row, 20)
            .map_err(|e| Error::Excel(e.to_string()))?;
        for (col_index, cell) in row.iter().enumerate() {
            sheet
                .write_string_with_format(sheet_row, col_index as u16, cell, &cell_format)
                .map_err(|e| Error::Excel(e.to_string()))?;
        }
    }

    for (col_index, width) in compute_column_widths(rows).into_iter().enumerate() {
        sheet
            .set_column_width(col_index as u16, width)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    Ok(())
}

/// Width per column from the longest rendered cell (header included),
/// subject to a minimum and a padding factor so nothing is truncated.
fn compute_column_widths(rows: &[Vec<String>]) -> Vec<f64> {
    FIELDS
        .iter()
        .enumerate()
        .map(|(col_index, definition)| {
            let mut max_len = definition.label.chars().count();
            for row in rows {
                max_len = max_len.max(row[col_index].chars().count());
            }
            column_width(max_len)
        })
        .collect()
}

fn column_width(max_len: usize) -> f64 {
    if max_len < 12 {
        15.0
    } else {
        max_len as f64 * 1.15 + 4.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freta_domain::model::RequestDraft;
    use tempfile::tempdir;

    fn request(event: &str, departure: &str) -> TransportRequest {
        let mut draft = RequestDraft::new();
        draft.set(FieldId::PROCESS_NUMBER, "SEI-1");
        draft.set(FieldId::EVENT_NAME, event);
        draft.set(FieldId::EVENT_PERIOD, "10 A 12 DE MARÇO");
        draft.set(FieldId::DEPARTURE_DATE, departure);
        TransportRequest::from_draft(format!("id-{}", event), draft)
    }

    #[test]
    fn test_build_rows_follows_collection_and_schema_order() {
        let requests = vec![
            request("primeiro", "2026-03-10"),
            request("segundo", "2026-03-11"),
            request("terceiro", "2026-03-12"),
        ];
        let rows = build_rows(&requests);

        assert_eq!(rows.len(), 3);
        for row in &rows {
            assert_eq!(row.len(), FieldId::COUNT);
        }
        assert_eq!(rows[0][FieldId::EVENT_NAME.index()], "PRIMEIRO");
        assert_eq!(rows[1][FieldId::EVENT_NAME.index()], "SEGUNDO");
        assert_eq!(rows[2][FieldId::EVENT_NAME.index()], "TERCEIRO");
        // Absent fields render as empty cells.
        assert_eq!(rows[0][FieldId::DESTINATION_CITY.index()], "");
    }

    #[test]
    fn test_build_rows_reformats_dates_only() {
        let rows = build_rows(&[request("evento", "2026-01-20")]);
        assert_eq!(rows[0][FieldId::DEPARTURE_DATE.index()], "20/01/2026");
        assert_eq!(rows[0][FieldId::EVENT_PERIOD.index()], "10 A 12 DE MARÇO");

        // A value that is not YYYY-MM-DD passes through untouched.
        let rows = build_rows(&[request("evento", "JANEIRO")]);
        assert_eq!(rows[0][FieldId::DEPARTURE_DATE.index()], "JANEIRO");
    }

    #[test]
    fn test_build_rows_is_deterministic() {
        let requests = vec![request("a", "2026-03-10"), request("b", "2026-03-11")];
        assert_eq!(build_rows(&requests), build_rows(&requests));
    }

    #[test]
    fn test_column_width_rules() {
        assert_eq!(column_width(0), 15.0);
        assert_eq!(column_width(11), 15.0);
        assert_eq!(column_width(12), 12.0 * 1.15 + 4.0);
        assert!(column_width(40) > column_width(20));
    }

    #[test]
    fn test_derive_export_filename_from_first_record() {
        let requests = vec![request("Festival de Bandas", "2026-03-10")];
        assert_eq!(
            derive_export_filename(&requests),
            "SOLICITACAO_FRETAMENTO_FESTIVAL_DE_BANDAS_10_A_12_DE_MARÇO.xlsx"
        );
    }

    #[test]
    fn test_derive_export_filename_fallback() {
        let name = derive_export_filename(&[]);
        assert!(name.starts_with("SOLICITACAO_FRETAMENTO_PE_"));
        assert!(name.ends_with(".xlsx"));
    }

    #[test]
    fn test_sanitize_component() {
        assert_eq!(sanitize_component("JOGOS / ESCOLARES 2026"), "JOGOS_ESCOLARES_2026");
        assert_eq!(sanitize_component("  "), "");
    }

    #[test]
    fn test_export_refuses_empty_collection() {
        let dir = tempdir().expect("tempdir");
        let err = export_requests(&[], &dir.path().join("out.xlsx")).unwrap_err();
        assert!(matches!(err, Error::EmptyExport));
        assert!(!dir.path().join("out.xlsx").exists());
    }

    #[test]
    fn test_export_writes_workbook() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("out.xlsx");
        let requests = vec![request("evento", "2026-03-10")];
        export_requests(&requests, &path).expect("export");
        assert!(path.metadata().expect("metadata").len() > 0);
    }
}
