pub mod chat;
pub mod diagnosis;
pub mod error;
pub mod recommendation;
pub mod yield_prediction;
