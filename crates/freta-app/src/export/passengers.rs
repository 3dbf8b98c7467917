//! Passenger list spreadsheet export
//!
//! An independent small document: process metadata bands plus a bounded
//! passenger table. The passenger data is ephemeral and only lives inside
//! the document being built.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use serde::{Deserialize, Serialize};

use freta_domain::model::{Passenger, PASSENGER_LIMIT};
use freta_domain::service::format_date_br;
use freta_types::{Error, Result};

const NAVY: u32 = 0x001F54;
const SKY: u32 = 0x0EA5E9;
const BAND_GREY: u32 = 0xF1F5F9;
const STRIPE_GREY: u32 = 0xF8FAFC;

/// Process metadata shown above the passenger table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerListHeader {
    #[serde(default)]
    pub process_number: String,
    /// Entry-form date (`YYYY-MM-DD`).
    #[serde(default)]
    pub departure_date: String,
    #[serde(default)]
    pub return_date: String,
    #[serde(default)]
    pub origin_city: String,
    #[serde(default)]
    pub destination_city: String,
}

impl PassengerListHeader {
    /// Entry-boundary normalization, matching the dialog's upper-casing.
    pub fn normalized(self) -> Self {
        Self {
            process_number: self.process_number.trim().to_uppercase(),
            departure_date: self.departure_date.trim().to_string(),
            return_date: self.return_date.trim().to_string(),
            origin_city: self.origin_city.trim().to_uppercase(),
            destination_city: self.destination_city.trim().to_uppercase(),
        }
    }
}

/// Raw passenger entry as supplied in a list document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PassengerInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cpf: String,
}

/// A passenger-list document as read from JSON input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PassengerListDocument {
    #[serde(flatten)]
    pub header: PassengerListHeader,
    #[serde(default)]
    pub passengers: Vec<PassengerInput>,
}

impl PassengerListDocument {
    /// Normalize the header and mask every passenger entry.
    pub fn into_parts(self) -> (PassengerListHeader, Vec<Passenger>) {
        let passengers = self
            .passengers
            .iter()
            .map(|entry| Passenger::new(&entry.name, &entry.cpf))
            .collect();
        (self.header.normalized(), passengers)
    }
}

/// Derive the spreadsheet filename from the route.
pub fn passenger_list_filename(header: &PassengerListHeader) -> String {
    let origin = non_empty_or(&header.origin_city, "ORIGEM");
    let destination = non_empty_or(&header.destination_city, "DESTINO");
    format!("Listas de Passageiros - {} x {}.xlsx", origin, destination)
}

/// Write the passenger list spreadsheet at `output_path`.
pub fn export_passenger_list(
    header: &PassengerListHeader,
    passengers: &[Passenger],
    output_path: &Path,
) -> Result<()> {
    check_passenger_count(passengers)?;

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    write_passenger_sheet(sheet, header, passengers)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

pub(crate) fn check_passenger_count(passengers: &[Passenger]) -> Result<()> {
    if passengers.is_empty() {
        return Err(Error::EmptyExport);
    }
    if passengers.len() > PASSENGER_LIMIT {
        return Err(Error::Validation(format!(
            "passenger list exceeds the limit of {} entries",
            PASSENGER_LIMIT
        )));
    }
    Ok(())
}

/// Metadata band texts shared by the spreadsheet and PDF renditions.
pub(crate) fn process_band(header: &PassengerListHeader) -> String {
    format!(
        "PROCESSO: {}   |   SAÍDA: {}   |   RETORNO: {}",
        non_empty_or(&header.process_number, "-"),
        non_empty_or(&format_date_br(&header.departure_date), "-"),
        non_empty_or(&format_date_br(&header.return_date), "-"),
    )
}

pub(crate) fn route_band(header: &PassengerListHeader) -> String {
    format!(
        "ORIGEM: {}   |   DESTINO: {}",
        non_empty_or(&header.origin_city, "-"),
        non_empty_or(&header.destination_city, "-"),
    )
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn write_passenger_sheet(
    sheet: &mut Worksheet,
    header: &PassengerListHeader,
    passengers: &[Passenger],
) -> Result<()> {
    sheet
        .set_name("Lista de Passageiros")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet.set_screen_gridlines(false);

    let title_format = Format::new()
        .set_bold()
        .set_font_size(16)
        .set_font_name("Arial")
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(NAVY))
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    sheet
        .set_row_height(0, 35)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .merge_range(0, 0, 0, 2, "LISTA DE PASSAGEIROS - FRETAMENTO", &title_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let band_format = Format::new()
        .set_bold()
        .set_font_size(10)
        .set_font_name("Arial")
        .set_background_color(Color::RGB(BAND_GREY))
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    sheet
        .set_row_height(1, 25)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .merge_range(1, 0, 1, 2, &process_band(header), &band_format)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_row_height(2, 25)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .merge_range(2, 0, 2, 2, &route_band(header), &band_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .set_row_height(3, 10)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let table_header_format = Format::new()
        .set_bold()
        .set_font_size(11)
        .set_font_name("Arial")
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(SKY))
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    sheet
        .set_row_height(4, 25)
        .map_err(|e| Error::Excel(e.to_string()))?;
    for (col, label) in ["Nº", "NOME COMPLETO", "CPF"].iter().enumerate() {
        sheet
            .write_string_with_format(4, col as u16, *label, &table_header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    let cell_base = Format::new()
        .set_font_size(10)
        .set_font_name("Arial")
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::VerticalCenter);
    let centered = cell_base.clone().set_align(FormatAlign::Center);
    let centered_striped = centered
        .clone()
        .set_background_color(Color::RGB(STRIPE_GREY));
    let name_cell = cell_base.set_align(FormatAlign::Left);
    let name_striped = name_cell
        .clone()
        .set_background_color(Color::RGB(STRIPE_GREY));

    for (index, passenger) in passengers.iter().enumerate() {
        let row = 5 + index as u32;
        sheet
            .set_row_height(row, 22)
            .map_err(|e| Error::Excel(e.to_string()))?;

        let striped = index % 2 != 0;
        let number_format = if striped { &centered_striped } else { &centered };
        let text_format = if striped { &name_striped } else { &name_cell };

        sheet
            .write_number_with_format(row, 0, (index + 1) as f64, number_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string_with_format(row, 1, &non_empty_or(&passenger.name, "-"), text_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string_with_format(row, 2, &non_empty_or(&passenger.cpf, "-"), number_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    sheet
        .set_column_width(0, 8)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(1, 65)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(2, 25)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn header() -> PassengerListHeader {
        PassengerListHeader {
            process_number: "SEI-2026-010".into(),
            departure_date: "2026-03-10".into(),
            return_date: "2026-03-12".into(),
            origin_city: "RECIFE".into(),
            destination_city: "CARUARU".into(),
        }
    }

    #[test]
    fn test_filename_uses_route() {
        assert_eq!(
            passenger_list_filename(&header()),
            "Listas de Passageiros - RECIFE x CARUARU.xlsx"
        );
        assert_eq!(
            passenger_list_filename(&PassengerListHeader::default()),
            "Listas de Passageiros - ORIGEM x DESTINO.xlsx"
        );
    }

    #[test]
    fn test_bands_reformat_dates_and_dash_missing() {
        assert_eq!(
            process_band(&header()),
            "PROCESSO: SEI-2026-010   |   SAÍDA: 10/03/2026   |   RETORNO: 12/03/2026"
        );
        assert_eq!(
            process_band(&PassengerListHeader::default()),
            "PROCESSO: -   |   SAÍDA: -   |   RETORNO: -"
        );
        assert_eq!(route_band(&header()), "ORIGEM: RECIFE   |   DESTINO: CARUARU");
    }

    #[test]
    fn test_document_into_parts_normalizes() {
        let document: PassengerListDocument = serde_json::from_str(
            r#"{
                "process_number": "sei-1",
                "origin_city": "recife",
                "passengers": [{"name": "ana lima", "cpf": "12345678901"}]
            }"#,
        )
        .expect("document");
        let (header, passengers) = document.into_parts();
        assert_eq!(header.process_number, "SEI-1");
        assert_eq!(header.origin_city, "RECIFE");
        assert_eq!(passengers.len(), 1);
        assert_eq!(passengers[0].name, "ANA LIMA");
        assert_eq!(passengers[0].cpf, "123.456.789-01");
    }

    #[test]
    fn test_export_enforces_bounds() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("lista.xlsx");

        let err = export_passenger_list(&header(), &[], &path).unwrap_err();
        assert!(matches!(err, Error::EmptyExport));

        let too_many: Vec<Passenger> = (0..=PASSENGER_LIMIT)
            .map(|i| Passenger::new(&format!("P {}", i), ""))
            .collect();
        let err = export_passenger_list(&header(), &too_many, &path).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_export_writes_workbook() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("lista.xlsx");
        let passengers = vec![
            Passenger::new("Ana Lima", "12345678901"),
            Passenger::new("Bruno Alves", ""),
        ];
        export_passenger_list(&header(), &passengers, &path).expect("export");
        assert!(path.metadata().expect("metadata").len() > 0);
    }
}
