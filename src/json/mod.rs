//! Purpose: Internal JSON parsing boundary for response payloads.
//! Exports: `parse` module with decode helpers used by the response layer.
//! Role: Single seam for the tokenizer so materializers only ever see a `Value` tree.
//! Invariants: Response payload decoding goes through this module.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub(crate) mod parse;
