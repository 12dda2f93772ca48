//! Wire contracts shared between the dashboard frontend and the REST
//! backend: entity records, create/update payloads, sparse filters,
//! enums, and the purchase draft calculator.
//!
//! Everything here is plain data with no I/O and no UI types, so the
//! whole crate compiles and tests natively.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
