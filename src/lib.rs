//! Earth Story - Sustainability Checkup Engine
//!
//! This crate implements the checkup flow behind the Earth Story demo:
//! a three-step questionnaire over industries, supply-chain regions, and
//! an energy-mix profile, with snapshot persistence and derived previews.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
