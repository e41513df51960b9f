// src/lib.rs
// Main library module declarations

pub mod api;
pub mod config;
pub mod controllers;
pub mod domain;
pub mod notify;
