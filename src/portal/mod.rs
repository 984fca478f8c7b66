//! Portal access layer: session client, login handshake, page fetches.

pub mod auth;
pub mod pages;
pub mod session;
pub mod tokens;
