/// Session holder and email challenge
pub mod auth;
/// Public client facade
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces implemented by the client
pub mod interfaces;
