//! Integration tests for the cominty CLI
//!
//! These tests spawn the actual binary and test end-to-end behavior. None of
//! them reach docker, terraform or AWS: every case fails or finishes before
//! an external process would start.

mod cli_tests;
