//! Passenger list PDF export
//!
//! Same source data as the spreadsheet rendition, laid out as a title band,
//! a metadata band, and a table paginated across A4 pages.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use freta_domain::model::Passenger;
use freta_types::{Error, Result};

use super::passengers::{check_passenger_count, process_band, route_band, PassengerListHeader};

/// Table rows per A4 page.
pub const ROWS_PER_PAGE: usize = 28;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 18.0;
const TABLE_TOP: f32 = 245.0;
const ROW_STEP: f32 = 7.0;

// Column x positions: number, name, CPF.
const COL_NUMBER_X: f32 = MARGIN;
const COL_NAME_X: f32 = 34.0;
const COL_CPF_X: f32 = 150.0;

/// Write the passenger list as a paginated PDF at `output_path`.
pub fn export_passenger_list_pdf(
    header: &PassengerListHeader,
    passengers: &[Passenger],
    output_path: &Path,
) -> Result<()> {
    check_passenger_count(passengers)?;

    let (doc, first_page, first_layer) = PdfDocument::new(
        "Lista de Passageiros - Fretamento",
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| Error::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| Error::Pdf(e.to_string()))?;

    let pages: Vec<&[Passenger]> = passengers.chunks(ROWS_PER_PAGE).collect();
    let total_pages = pages.len();

    for (page_index, chunk) in pages.iter().enumerate() {
        let layer = if page_index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            doc.get_page(page).get_layer(layer)
        };

        write_page_frame(&layer, header, &bold, &regular, page_index, total_pages);

        for (row_index, passenger) in chunk.iter().enumerate() {
            let y = TABLE_TOP - ROW_STEP * (row_index as f32 + 1.0);
            let number = page_index * ROWS_PER_PAGE + row_index + 1;
            layer.use_text(format!("{:02}", number), 10.0, Mm(COL_NUMBER_X), Mm(y), &regular);
            layer.use_text(dash_if_empty(&passenger.name), 10.0, Mm(COL_NAME_X), Mm(y), &regular);
            layer.use_text(dash_if_empty(&passenger.cpf), 10.0, Mm(COL_CPF_X), Mm(y), &regular);
        }
    }

    let file = File::create(output_path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| Error::Pdf(e.to_string()))?;

    Ok(())
}

fn write_page_frame(
    layer: &PdfLayerReference,
    header: &PassengerListHeader,
    bold: &IndirectFontRef,
    regular: &IndirectFontRef,
    page_index: usize,
    total_pages: usize,
) {
    // Title band.
    layer.use_text(
        "LISTA DE PASSAGEIROS - FRETAMENTO",
        16.0,
        Mm(MARGIN),
        Mm(275.0),
        bold,
    );

    // Metadata band.
    layer.use_text(process_band(header), 10.0, Mm(MARGIN), Mm(265.0), regular);
    layer.use_text(route_band(header), 10.0, Mm(MARGIN), Mm(259.0), regular);

    // Table header.
    layer.use_text("Nº", 10.0, Mm(COL_NUMBER_X), Mm(TABLE_TOP), bold);
    layer.use_text("NOME COMPLETO", 10.0, Mm(COL_NAME_X), Mm(TABLE_TOP), bold);
    layer.use_text("CPF", 10.0, Mm(COL_CPF_X), Mm(TABLE_TOP), bold);

    layer.use_text(
        format!("Página {} de {}", page_index + 1, total_pages),
        8.0,
        Mm(PAGE_WIDTH - 2.0 * MARGIN),
        Mm(12.0),
        regular,
    );
}

fn dash_if_empty(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn header() -> PassengerListHeader {
        PassengerListHeader {
            process_number: "SEI-2026-010".into(),
            departure_date: "2026-03-10".into(),
            return_date: String::new(),
            origin_city: "RECIFE".into(),
            destination_city: "CARUARU".into(),
        }
    }

    #[test]
    fn test_pdf_export_refuses_empty_list() {
        let dir = tempdir().expect("tempdir");
        let err =
            export_passenger_list_pdf(&header(), &[], &dir.path().join("l.pdf")).unwrap_err();
        assert!(matches!(err, Error::EmptyExport));
    }

    #[test]
    fn test_pdf_export_writes_multiple_pages() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("lista.pdf");
        let passengers: Vec<Passenger> = (0..ROWS_PER_PAGE + 5)
            .map(|i| Passenger::new(&format!("Passageiro {}", i), "12345678901"))
            .collect();

        export_passenger_list_pdf(&header(), &passengers, &path).expect("export");
        assert!(path.metadata().expect("metadata").len() > 0);
    }
}
