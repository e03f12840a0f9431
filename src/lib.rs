pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod session;
pub mod web;
