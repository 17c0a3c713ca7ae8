pub mod scorecard;
pub mod session;
