pub mod amount;
pub mod config;
pub mod csv_models;
pub mod output_format;
pub mod statement_date;
