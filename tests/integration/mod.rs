//! Integration tests for v2ex-topics
//!
//! These tests run the complete parse over saved listing pages and check
//! every decoded field.

mod edge_cases;
mod node_listing;
mod tab_listing;
