pub mod config;
pub mod controller;
pub mod error;
pub mod handlers;
pub mod local_storage;
pub mod models;
pub mod navigation;
pub mod services;
