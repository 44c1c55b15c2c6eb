//! Domain types and pure logic for the moodboard review service.
//!
//! Nothing in this crate performs I/O: the database, object store, and HTTP
//! layers build on the types and validation defined here.

pub mod error;
pub mod feedback;
pub mod naming;
pub mod review;
pub mod types;
