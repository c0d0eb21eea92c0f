//! Output formatting for generated and cleaned queries

pub mod console;
