//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local recipe and user stores.
//!
//! Adapters translate between domain types and their storage representation
//! and hold no business rules beyond the store invariants.

pub mod memory;
