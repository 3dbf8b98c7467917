//! Fixed field schema for transport requests
//!
//! The single source of truth for field identity, column order, and header
//! labels. The form, the table listing, and every export consume this list
//! in the same order under the same ids.

use serde::{Deserialize, Serialize};

/// Identifier of one schema field (`col_0` … `col_32`).
///
/// A closed set: values outside the schema cannot be constructed, so a
/// `FieldId` held anywhere in the program is always a valid index into
/// [`FIELDS`]. Ordering follows schema (column) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldId(u8);

impl FieldId {
    pub const COUNT: usize = 33;

    pub const PROCESS_NUMBER: FieldId = FieldId(0);
    pub const EVENT_NAME: FieldId = FieldId(8);
    pub const EVENT_PERIOD: FieldId = FieldId(9);
    pub const DEPARTURE_DATE: FieldId = FieldId(11);
    pub const RETURN_DATE: FieldId = FieldId(12);
    pub const ORIGIN_CITY: FieldId = FieldId(15);
    pub const DESTINATION_CITY: FieldId = FieldId(24);

    /// Build from a zero-based column index.
    pub fn new(index: usize) -> Option<FieldId> {
        if index < Self::COUNT {
            Some(FieldId(index as u8))
        } else {
            None
        }
    }

    /// Parse the textual form `col_N`.
    pub fn parse(s: &str) -> Option<FieldId> {
        let index: usize = s.strip_prefix("col_")?.parse().ok()?;
        Self::new(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// All ids in schema order.
    pub fn all() -> impl Iterator<Item = FieldId> {
        (0..Self::COUNT as u8).map(FieldId)
    }

    pub fn definition(self) -> &'static FieldDefinition {
        &FIELDS[self.index()]
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "col_{}", self.0)
    }
}

impl Serialize for FieldId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        FieldId::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown field id: {}", s)))
    }
}

/// Input kind of a schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Date,
    Time,
    Number,
    Email,
    Tel,
}

impl FieldKind {
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Date => "date",
            FieldKind::Time => "time",
            FieldKind::Number => "number",
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
        }
    }
}

/// One entry of the field schema
#[derive(Debug, Clone, Copy)]
pub struct FieldDefinition {
    pub id: FieldId,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldDefinition {
    /// Input hint shown alongside the field in entry surfaces.
    pub fn placeholder(&self) -> String {
        format!("Digite {}", self.label.to_lowercase())
    }
}

const fn field(index: u8, label: &'static str, kind: FieldKind, required: bool) -> FieldDefinition {
    FieldDefinition {
        id: FieldId(index),
        label,
        kind,
        required,
    }
}

/// The 33 fields of a transport request, in column order.
pub const FIELDS: [FieldDefinition; FieldId::COUNT] = [
    field(0, "NÚMERO DO SEI", FieldKind::Text, true),
    field(1, "NOME DO SOLICITANTE", FieldKind::Text, true),
    field(2, "TELEFONE DO SOLICITANTE", FieldKind::Tel, true),
    field(3, "E-MAIL DO SOLICITANTE", FieldKind::Email, true),
    field(4, "EXECUTIVA", FieldKind::Text, true),
    field(5, "SETOR DO SOLICITANTE", FieldKind::Text, true),
    field(
        6,
        "CASO O SETOR DO SOLICITANTE FOR OUTROS, INFORME AQUI",
        FieldKind::Text,
        false,
    ),
    field(7, "PROGRAMA", FieldKind::Text, true),
    field(8, "NOME DO EVENTO", FieldKind::Text, true),
    field(9, "PERÍODO DO EVENTO", FieldKind::Text, true),
    field(10, "HORÁRIO DO EVENTO", FieldKind::Time, true),
    field(11, "DATA DE SAÍDA", FieldKind::Date, true),
    field(12, "DATA DO RETORNO", FieldKind::Date, false),
    field(13, "HORÁRIO DE SAÍDA", FieldKind::Time, true),
    field(14, "HORÁRIO DE RETORNO", FieldKind::Time, false),
    field(15, "CIDADE DE ORIGEM", FieldKind::Text, true),
    field(16, "LOCAL DE SAÍDA", FieldKind::Text, true),
    field(17, "ENDEREÇO COMPLETO DE ORIGEM", FieldKind::Text, true),
    field(18, "PARADA 1", FieldKind::Text, false),
    field(19, "PARADA 2", FieldKind::Text, false),
    field(20, "PARADA 3", FieldKind::Text, false),
    field(21, "PARADA 4", FieldKind::Text, false),
    field(22, "PARADA 5", FieldKind::Text, false),
    field(23, "PARADA 6", FieldKind::Text, false),
    field(24, "CIDADE DE DESTINO", FieldKind::Text, true),
    field(25, "LOCAL DE DESTINO", FieldKind::Text, true),
    field(26, "ENDEREÇO COMPLETO DE DESTINO", FieldKind::Text, true),
    field(27, "TOTAL DE PASSAGEIROS", FieldKind::Number, true),
    field(28, "MODALIDADE DA VIAGEM", FieldKind::Text, true),
    field(29, "DISPONIBILIDADE DE VEÍCULO", FieldKind::Text, true),
    field(30, "NOME DO RESPONSÁVEL", FieldKind::Text, true),
    field(31, "TELEFONE DO RESPONSÁVEL", FieldKind::Tel, true),
    field(32, "INFORMAÇÕES COMPLEMENTARES", FieldKind::Text, false),
];

/// Columns that get the highlight style in spreadsheet exports: the
/// free-text "other sector" field and the stop (PARADA) fields.
pub fn is_highlighted_column(definition: &FieldDefinition) -> bool {
    definition.label == "CASO O SETOR DO SOLICITANTE FOR OUTROS, INFORME AQUI"
        || definition.label.starts_with("PARADA")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_has_33_sequential_ids() {
        assert_eq!(FIELDS.len(), FieldId::COUNT);
        for (index, definition) in FIELDS.iter().enumerate() {
            assert_eq!(definition.id.index(), index);
            assert_eq!(definition.id.to_string(), format!("col_{}", index));
        }
    }

    #[test]
    fn test_field_id_parse() {
        assert_eq!(FieldId::parse("col_0"), Some(FieldId::PROCESS_NUMBER));
        assert_eq!(FieldId::parse("col_32"), FieldId::new(32));
        assert_eq!(FieldId::parse("col_33"), None);
        assert_eq!(FieldId::parse("id"), None);
        assert_eq!(FieldId::parse("col_x"), None);
    }

    #[test]
    fn test_well_known_fields() {
        assert_eq!(FieldId::EVENT_NAME.definition().label, "NOME DO EVENTO");
        assert_eq!(FieldId::EVENT_PERIOD.definition().label, "PERÍODO DO EVENTO");
        assert_eq!(FieldId::DEPARTURE_DATE.definition().kind, FieldKind::Date);
        assert_eq!(FieldId::RETURN_DATE.definition().kind, FieldKind::Date);
        assert!(!FieldId::RETURN_DATE.definition().required);
    }

    #[test]
    fn test_highlighted_columns() {
        let highlighted: Vec<usize> = FIELDS
            .iter()
            .filter(|d| is_highlighted_column(d))
            .map(|d| d.id.index())
            .collect();
        assert_eq!(highlighted, vec![6, 18, 19, 20, 21, 22, 23]);
    }

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<&str> = FIELDS.iter().map(|d| d.label).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), FieldId::COUNT);
    }
}
