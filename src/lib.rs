//! JWT authentication boilerplate: registration, login, bearer-token protected routes.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repos;
pub mod services;
pub mod state;
