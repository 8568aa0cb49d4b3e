// Aggregates the split model files
pub mod item;
pub mod schedule;

// Re-export so callers can use `crate::model::Performance`
pub use item::Performance;
