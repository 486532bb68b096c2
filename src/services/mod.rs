pub mod analytics;
pub mod assessment;
pub mod completion;
pub mod module;
pub mod progress;
pub mod rules;
pub mod simulation;
pub mod user;
