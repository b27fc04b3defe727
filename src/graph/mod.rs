//! In-memory social graph and the query pipeline stages that run over it.

pub mod filter;
pub mod present;
pub mod store;
pub mod traversal;
