//! HTTP request handlers.
//!
//! Handlers stay thin: extract, delegate to the store or the view resolver,
//! map into DTOs.

pub mod entities;
pub mod network;
pub mod views;
