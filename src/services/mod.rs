pub mod csv_service;
pub mod row_transformer;
