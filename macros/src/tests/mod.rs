//! Tests for the macro implementations

mod domain_object_tests;
