//! Application service layer - config, repositories, export, dashboard

pub mod config;
pub mod dashboard;
pub mod export;
pub mod repository;
