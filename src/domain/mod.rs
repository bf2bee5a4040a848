// Domain layer - Core telemetry models and pure policies
pub mod series;
pub mod stream_lifecycle;
pub mod telemetry;
pub mod timebucket;
