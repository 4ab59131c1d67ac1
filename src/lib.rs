//! Collaborative movie recommendations over a small corpus of user
//! liked-lists, served over HTTP.
//!
//! The core lives in [`services::recommendations`] (the engine) and
//! [`services::catalog`] (the browsing-list normalizer); both are pure and
//! synchronous. Everything else is the shell: a [`services::providers`]
//! seam to the external JSON data service, snapshot state, and an axum API.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
