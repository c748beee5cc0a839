pub mod statement_row;
