mod get;
mod page;
mod props;

pub use self::get::get;
