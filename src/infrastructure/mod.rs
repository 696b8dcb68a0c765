pub mod frame_loop;
pub mod motion;
pub mod services;

pub use frame_loop::FrameLoop;
pub use motion::detect_motion_preference;
pub use services::{BrowserTimeProvider, ConsoleLogger};
