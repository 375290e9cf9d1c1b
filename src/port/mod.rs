//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   ┌──────────────┐      ┌─────────────────┐      ┌──────────────────┐
//!   │ HTTP adapter │ ───▶ │  ClusterStore   │ ◀─── │ memory / sqlite  │
//!   │  (inbound)   │      │     (port)      │      │    (outbound)    │
//!   └──────────────┘      └─────────────────┘      └──────────────────┘
//! ```

pub mod outbound;

pub use outbound::store::ClusterStore;
