//! HTTP adapter for the Cochera REST backend

pub mod client;

pub use client::ApiClient;
