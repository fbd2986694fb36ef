pub mod recommendation;
pub mod vehicle_recommender;
