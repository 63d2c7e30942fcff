//! HTTP implementation of the console's collaborator services.

mod auth;
pub mod client;
pub mod config;
mod students;

pub use client::ApiClient;
