//! Application state module

mod app_state;
mod field;
mod form_fields;
mod interest;
mod phone;
mod splash_state;
mod validation;
mod wizard;

pub use app_state::*;
pub use field::*;
pub use form_fields::*;
pub use interest::*;
pub use phone::*;
pub use splash_state::*;
pub use validation::*;
pub use wizard::*;
