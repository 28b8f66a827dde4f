// Request schema
pub mod patient;

// Prediction result and presentation mapping
pub mod prediction;

// Domain-specific error types
pub mod errors;
