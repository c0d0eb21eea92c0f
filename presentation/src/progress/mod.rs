//! Progress reporting for query generation

pub mod reporter;
