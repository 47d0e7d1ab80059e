pub mod accuracy;
pub mod category;
pub mod dataframe_table;
pub mod error;
pub mod load;
pub mod phase;
pub mod tokens;
