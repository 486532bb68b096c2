pub mod analytics;
pub mod assessment;
pub mod audit;
pub mod content;
pub mod feedback;
pub mod progress;
pub mod simulation;
pub mod user;

pub use assessment::AssessmentType;
pub use content::QuestionBank;
pub use progress::ProgressStatus;
