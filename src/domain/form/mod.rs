//! Form state tracking module

mod field;
mod state;

pub use field::{required_fields, FieldId};
pub use state::{FormState, RequestState, ValidatedRequest};
