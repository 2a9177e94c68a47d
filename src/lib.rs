//! Purpose: Response materialization layer for Graph-style JSON APIs.
//! Exports: `api` (entities, lists, materializer, raw-json store) and `core` (errors, field coercion).
//! Role: Sits between an external HTTP transport and application code.
//! Invariants: Materialization is synchronous and never returns partial objects.
//! Invariants: Core modules prefer explicit inputs/outputs over hidden state.
pub mod api;
pub mod core;
mod json;
