pub mod calculate_operations;
pub mod operation;
