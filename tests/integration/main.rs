//! Integration tests for the estimation pipeline
//!
//! These tests use wiremock to stand in for homepages and the search API and
//! exercise the pipeline from a domain string to a persisted result.

mod batch_tests;
mod common;
mod lookup_tests;
