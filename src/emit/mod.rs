/// Skip-based frame sampling.
pub mod emitter;
