/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// Authentication response models
pub mod auth;
/// HTTP request helper and response decoding
pub mod http;
/// Cursor pagination over the app listing
pub mod pagination;
/// Request models for API calls
pub mod requests;
