//! Artwork table client library
//!
//! A Rust async library for browsing the Art Institute of Chicago artworks
//! collection page by page while keeping a selection that spans pages.

pub mod api;
pub mod error;
pub mod model;
pub mod selection;
pub mod table;

mod client;
mod config;

pub use client::*;
pub use config::TableConfig;
