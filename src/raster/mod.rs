/// Monochrome plotting surface.
pub mod canvas;
/// Immutable rendered snapshots.
pub mod frame;
