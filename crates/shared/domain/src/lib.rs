//! # Domain Models
//!
//! This crate contains pure domain types with a single dependency (`serde`).
//! Keep it lean: no I/O, networking, or validation, just data and simple helpers.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod route;
pub mod view;
