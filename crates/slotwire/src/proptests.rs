//! Property-based tests for identifier construction.
