pub mod domain;
pub mod estimate;
pub mod planner;
pub mod recommend;
pub mod render;
pub mod status;
mod utils;
