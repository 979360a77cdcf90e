//! Credit Approval Scoring Toolkit
//!
//! A machine learning-based tool for scoring credit applications from
//! client records.

pub mod commands;
pub mod history;
