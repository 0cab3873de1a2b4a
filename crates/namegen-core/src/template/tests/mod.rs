//! Tests for the construction language
//!
//! Organized into focused submodules: lexing, parsing, canonical form,
//! evaluation and casing.

// Test helper functions
mod helpers;


// Parser tests
mod parse_basic;
