//! Test Module
//!
//! Integration test suite for the CampusChat analytics backend.
//!
//! ## Test Categories
//! - `analysis_tests`: extraction, language, category, greeting, escalation
//! - `database_tests`: transcript storage and corpus queries
//! - `integration_tests`: full store-to-report aggregation passes
