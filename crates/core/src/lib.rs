//! contactbook_core - pure types and contracts for the contactbook service.
//!
//! Nothing in this crate performs I/O. The server and the client both depend
//! on it so request and response shapes stay in sync.

pub mod contact;
pub mod storage;
