// Domain layer - Core models and metric derivation
pub mod derive;
pub mod history;
pub mod location;
pub mod metrics;
pub mod network;
pub mod prediction;
pub mod weather;
