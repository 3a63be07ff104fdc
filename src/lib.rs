// src/lib.rs

//! FARA Supplemental Statement Watcher Library

pub mod config;
pub mod error;
#[cfg(feature = "lambda")]
pub mod lambda;
pub mod models;
pub mod pipeline;
pub mod services;
