//! The two demonstration data shapes
//!
//! - [`Dimensions`]: a value type. Assignment copies.
//! - [`VideoMode`]: a reference type. Assignment shares one heap instance,
//!   and [`Identity`] tells handles to the same instance apart from equal
//!   but separate ones.

mod dimensions;
mod display;
mod identity;
mod video_mode;

pub use dimensions::Dimensions;
pub use display::Float;
pub use identity::Identity;
pub use video_mode::{retime, VideoMode, VideoModeState};
