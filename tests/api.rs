//! Compile-level checks of the public property surface. None of these touch a
//! device; they pin the signatures a downstream crate can rely on.

use std::os::raw::c_int;

use openni2_rust::{
    Error,
    device::Device,
    stream::{CameraSettings, VideoStream},
};

#[test]
fn generic_property_access_is_public() {
    let _: fn(&Device, c_int) -> Result<i32, Error> = Device::get_property::<i32>;
    let _: fn(&Device, c_int, &f32) -> Result<(), Error> = Device::set_property::<f32>;
    let _: fn(&Device, c_int, &mut i32) -> Result<(), Error> = Device::invoke::<i32>;
    let _: fn(&VideoStream, c_int) -> Result<i32, Error> = VideoStream::get_property::<i32>;
    let _: fn(&VideoStream, c_int, &i32) -> Result<(), Error> = VideoStream::set_property::<i32>;
}

#[test]
fn exposure_and_gain_have_typed_accessors() {
    let _: fn(&CameraSettings<'static>) -> Result<i32, Error> = CameraSettings::exposure;
    let _: fn(&CameraSettings<'static>, i32) -> Result<(), Error> = CameraSettings::set_exposure;
    let _: fn(&CameraSettings<'static>) -> Result<i32, Error> = CameraSettings::gain;
    let _: fn(&CameraSettings<'static>, i32) -> Result<(), Error> = CameraSettings::set_gain;
}
