//! # earthlink-client
//!
//! HTTP/JSON client for the EarthLink API, implementing
//! [`earthlink_core::RemoteApi`].

pub mod client;
pub mod mappers;
pub mod models;

pub use client::HttpRemote;
