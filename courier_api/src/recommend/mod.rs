pub mod recommend_handler;
