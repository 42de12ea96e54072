//! Tech news site: hash-routed posts, quarterly newsletter archive and a
//! browser-local signup list.
//!
//! Everything except `web` is host-agnostic and runs natively under test;
//! `web` binds it to the browser when compiled for `wasm32`.

pub mod app;
pub mod content;
pub mod format;
pub mod models;
pub mod nav;
pub mod render;
pub mod routes;
pub mod store;
pub mod subscribers;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(test)]
mod tests;
