pub mod chat;
pub mod disease;
pub mod health;
pub mod metrics;
pub mod recommend;
pub mod yield_prediction;
