//! Client side of the car marketplace: search filter handling, admin account
//! forms, and a typed client for the marketplace HTTP API.

pub mod accounts;
pub mod api;
pub mod config;
pub mod filters;
pub mod models;
