//! Transport contract constants.
//!
//! String constants for view names, template resources, and API routes
//! shared between the web adapter and its tests. Keep these string-only with
//! no framework-specific types to avoid dependency creep.

pub mod http;
