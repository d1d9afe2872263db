//! Salary breakdown for Australian take-home pay
//!
//! This crate collects salary inputs from a form, publishes them over an
//! in-process message channel, and presents the calculated take-home pay,
//! super and taxes broken down per week, fortnight, month and year.

#![warn(missing_docs)]

pub mod api;
pub mod bus;
pub mod calculation;
pub mod collector;
pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod presenter;
pub mod service;
