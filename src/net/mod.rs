//! Network layer: wire types shared with the admin backend and the REST
//! helpers that talk to the recipients endpoints.

pub mod api;
pub mod types;
