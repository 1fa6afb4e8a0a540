//! Common Framework
//!
//! Shared text primitives for the combinator framework.

pub mod text_slice;

pub use text_slice::TextSlice;
