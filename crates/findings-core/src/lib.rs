//! Findings Core Types
//!
//! This crate provides the collaborator types consumed by the `findings`
//! diagnostics library. It includes:
//!
//! - **Source locations**: positions and ranges within named source files
//!   ([`source::SourcePos`], [`source::SourceRange`])
//! - **Error groups**: an ordered aggregate of causal errors
//!   ([`error_group::ErrorGroup`])

pub mod error_group;
pub mod source;
