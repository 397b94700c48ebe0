//! Contribution and tax estimator for Polish B2B self-employment
//!
//! This crate estimates monthly ZUS social contributions, the health
//! contribution, personal income tax and VAT for a chosen taxation form. The
//! social contribution base is derived from the projected average salary,
//! which is read from the ZUS announcement page and cached for a fixed window.
//! The rules cover one simplified tax year and are approximate by design.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod reference;
