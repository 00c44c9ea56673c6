//! Internal graph accessors and low-level building blocks.
//!
//! This module is intentionally `pub(crate)` so traversals can share scratch
//! primitives (visited sets) without exposing them as part of the public API.

pub(crate) mod visited;
