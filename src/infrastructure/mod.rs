// Startup loading of the model artifacts
pub mod artifacts;
