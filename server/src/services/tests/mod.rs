//! Tests for server services
//!
//! These tests verify the store and verifier implementations, including the
//! live-registry client pointed at a local mock server.
