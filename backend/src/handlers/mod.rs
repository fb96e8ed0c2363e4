//! HTTP handlers for the Garden Records API

pub mod collections;
pub mod health;
pub mod report;
pub mod species;
pub mod upload;
pub mod views;
