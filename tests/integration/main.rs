//! Integration tests driving the full router in-process

mod common;

mod api_tests;
mod lifecycle_tests;
