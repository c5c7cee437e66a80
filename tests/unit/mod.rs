// Unit tests for the Mobbin client
//
// HTTP behaviour is exercised against a local mockito server.

mod common;
mod utils;
