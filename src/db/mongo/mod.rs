pub mod connection;
pub mod error;
pub mod models;
pub mod mongo_service;
pub mod repository;
