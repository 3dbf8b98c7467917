//! Domain model types

pub mod passenger;
pub mod process;
pub mod request;
pub mod schema;

pub use passenger::{mask_cpf, Passenger, PASSENGER_LIMIT};
pub use process::{Occupancy, ProcessData, Status};
pub use request::{new_request_id, RequestDraft, TransportRequest};
pub use schema::{is_highlighted_column, FieldDefinition, FieldId, FieldKind, FIELDS};
