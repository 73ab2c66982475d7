//! VT102 terminal emulation core.
//!
//! Two components in dependency order:
//!
//! - **state**: screen backend owning the character/attribute grid, cursor,
//!   scroll margins and dirty flags
//! - **parser**: byte-driven escape sequence state machine driving the backend
//!
//! # Architecture
//!
//! ```text
//! host bytes ──▶ VtParser ──▶ TermScreen ──▶ grid + dirty flags ──▶ renderer
//!                    │
//!                    └──▶ Response (device attributes) ──▶ host writer
//! ```

pub mod parser;
pub mod state;
