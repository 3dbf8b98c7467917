//! Export generators
//!
//! All exports are deterministic for identical input and never mutate the
//! source collection.

mod passenger_pdf;
mod passengers;
mod requests;

pub use passenger_pdf::export_passenger_list_pdf;
pub use passengers::{
    export_passenger_list, passenger_list_filename, PassengerListDocument, PassengerListHeader,
};
pub use requests::{build_rows, derive_export_filename, export_requests};
