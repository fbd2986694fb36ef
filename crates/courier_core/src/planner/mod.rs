pub mod collaborators;
pub mod compose;
pub mod conditions;
pub mod endpoint;
pub mod plan;
pub mod planner;
pub mod presets;
