// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod graphql_repository;
pub mod mjpeg_source;
