mod field_label;
#[allow(clippy::module_inception)]
mod form;
mod select_field;

pub use self::field_label::*;
pub use self::form::*;
pub use self::select_field::*;
