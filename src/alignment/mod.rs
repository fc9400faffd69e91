pub mod edit_distance;
pub mod hypothesis;
pub mod propagation;
pub mod tokenization;
