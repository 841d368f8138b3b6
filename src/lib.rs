//! KrishiMitra advisory API
//!
//! This library backs the KrishiMitra farmer-advisory service: crop
//! recommendation and yield prediction over built-in agronomic catalogs,
//! plus leaf-photo disease detection and a farming chat assistant.

pub mod app_state;
pub mod catalog;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;
