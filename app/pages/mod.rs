pub mod health;
pub mod index;
pub mod overall;
pub mod phases;
