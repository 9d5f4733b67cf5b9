//! Supplier MCDM - multi-criteria supplier ranking.
//!
//! This crate ranks suppliers against weighted criteria with two methods:
//! VIKOR (compromise ranking over a numeric decision matrix) and PROMETHEE
//! (outranking flows over qualitative rating levels).

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
