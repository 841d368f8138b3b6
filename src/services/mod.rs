pub mod advisor;
pub mod assistant;
pub mod classifier;
pub mod scorer;
pub mod yield_estimator;
