//! Tests for the manifest line parser
