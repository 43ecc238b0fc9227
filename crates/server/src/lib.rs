//! Rezar server library.
//!
//! This crate provides the backend functionality as a library, allowing it
//! to be tested in-process and reused by the CLI (seeding and admin
//! management drive the same store types).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod error;
pub mod media;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod whatsapp;
