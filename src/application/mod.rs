// Application layer - Use cases and ports
pub mod env_service;
pub mod feed;
pub mod stream_source;
pub mod telemetry_repository;
