pub mod classifier;
pub mod mockview;
pub mod router;
