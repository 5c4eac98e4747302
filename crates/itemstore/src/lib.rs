//! Top-level facade crate for itemstore.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use itemstore_core::*;
}

pub mod server {
    pub use itemstore_server::*;
}
