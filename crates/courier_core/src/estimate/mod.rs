pub mod distance;
pub mod speed;
