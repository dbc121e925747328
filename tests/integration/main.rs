//! Integration tests for the assembled booking engine.

mod booking_flow_test;
mod helpers;
mod persistence_test;
