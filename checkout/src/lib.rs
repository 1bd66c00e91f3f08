//! Checkout pricing core
//!
//! # Architecture overview
//!
//! This crate turns an in-memory cart into persisted-order figures. It is
//! pure computation over session-local state: no I/O, no async, no shared
//! mutable state. The surrounding application owns the catalog, storage and
//! messaging collaborators and hands this engine immutable inputs.
//!
//! # Module structure
//!
//! ```text
//! checkout/src/
//! ├── money/     # Decimal conversion, rounding, boundary validation
//! ├── pricing/   # Per-line gross, tax split and discount
//! ├── cart       # Session cart: merge-by-configuration line items
//! ├── totals     # Order-level subtotal / tax / discount folding
//! ├── payload    # Structured order draft for the storage collaborator
//! ├── message    # Human-readable order summary (messaging handoff)
//! └── error      # Engine error taxonomy
//! ```

pub mod cart;
pub mod error;
pub mod message;
pub mod money;
pub mod payload;
pub mod pricing;
pub mod totals;

// Re-export public types
pub use cart::Cart;
pub use error::CheckoutError;
pub use message::OrderMessageRenderer;
pub use payload::build_order_draft;
pub use totals::compute_order_totals;
