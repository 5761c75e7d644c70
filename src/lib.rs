// ABOUTME: Library crate for saasforge exposing the public API for testing

#![allow(missing_docs)]

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod models;
