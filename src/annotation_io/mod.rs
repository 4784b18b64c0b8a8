pub mod csv_sink;
pub mod json_sink;
