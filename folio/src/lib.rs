pub mod api;
pub mod assistant;
pub mod config;
pub mod db;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
