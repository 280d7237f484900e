//! refoodify-probe - integration smoke tests for Refoodify's external APIs
//!
//! Verifies that the configured Spoonacular and Google Maps keys are valid
//! and that every endpoint the application depends on answers with the
//! expected payload shape. One sequential pass over an ordered probe
//! registry; exit code 0 when everything passes.

pub mod cli;
pub mod config;
pub mod core;
