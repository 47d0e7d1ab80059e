mod alert;
mod button;
mod details;
mod form;
mod image;
mod layout;
mod table;
mod topbar;

pub use self::alert::*;
pub use self::button::*;
pub use self::details::*;
pub use self::form::*;
pub use self::image::*;
pub use self::layout::*;
pub use self::table::*;
pub use self::topbar::*;
