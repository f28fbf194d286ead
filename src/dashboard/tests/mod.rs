//! Unit tests for dashboard aggregation.

mod stats_tests;
