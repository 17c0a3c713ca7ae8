pub mod controller;
pub mod evaluation;
pub mod handlers;
pub mod prompts;
pub mod turn;
