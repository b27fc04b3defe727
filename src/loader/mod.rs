//! Flat-file ingest: the graph data format and the query format.
//!
//! Both loaders consume their input strictly sequentially through a
//! [`cursor::LineCursor`] and fail fast on the first structural violation.

pub mod cursor;
pub mod data;
pub mod query;

pub use data::load_graph;
pub use query::load_query;
