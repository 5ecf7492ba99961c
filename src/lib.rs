///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Modules
///
///////////////////////////////////////////////////////////////////////////////////////////////////
pub mod backdrop;
pub mod frame_loop;
pub mod hexagon;
pub mod ring_button;
pub mod rotation;
pub mod spin;

pub use frame_loop::{FrameHandle, FrameLoop};
pub use rotation::RotationController;
pub use spin::{SpinData, SpinDataAccess};

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Constants
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Fastest counter-clockwise speed, in degrees per frame.
pub const MIN_SPEED: i32 = -10;
/// Fastest clockwise speed, in degrees per frame.
pub const MAX_SPEED: i32 = 10;
/// Speed change applied by one press of a control.
pub const SPEED_STEP: i32 = 1;
