//! Realtime layer: presence tracking and best-effort event fan-out.
//!
//! Connections are plain WebSockets authenticated with the same access token
//! as the HTTP API. Everything lives in process memory; an event sent while
//! a user is offline is dropped, and clients resynchronize over REST.

pub mod handler;
pub mod registry;
