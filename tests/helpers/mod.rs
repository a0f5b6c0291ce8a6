//! Shared test helpers.

#![allow(dead_code)]

pub mod highlight_helpers;
pub mod source_fixtures;
