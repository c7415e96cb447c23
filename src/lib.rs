pub mod constants;
pub mod operators;
pub mod orbit;
pub mod particle;
pub mod particle_params;
pub mod simulation;
pub mod smatrack_errors;
