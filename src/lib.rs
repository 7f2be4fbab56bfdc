//! Book recommendation service
//!
//! Serves a precomputed popularity list and content-similarity
//! recommendations over a fixed catalog whose feature matrix is built offline.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
