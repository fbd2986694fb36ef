pub mod plan_handler;
