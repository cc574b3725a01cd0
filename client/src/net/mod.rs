//! Networking for the console's JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps every `/api/...` route the server exposes. The browser never
//! talks to the hosted backend directly.

pub mod api;
