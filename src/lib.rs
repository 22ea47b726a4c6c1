#![doc = include_str!("../README.md")]

pub mod device;
pub mod frame;
pub mod listener;
pub mod record;
pub mod status;
pub mod stream;
pub mod types;
pub mod util;

pub use status::{Error, Status, extended_error};
pub use types::{
    DeviceInfo, DeviceState, ImageRegistrationMode, PixelFormat, SensorInfo, SensorType, Version,
    VideoMode,
};
