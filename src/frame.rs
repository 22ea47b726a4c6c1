//! Frames read from a stream, plus helpers to turn raw pixel data into
//! displayable arrays.

use std::iter::zip;

use openni2_sys as sys;

use crate::status::{Error, Status};
use crate::types::{PixelFormat, SensorType, VideoMode};

/// One frame of depth/IR/color data.
///
/// Holds a reference on the native, ref-counted frame buffer; the data stays
/// valid until the last clone is dropped.
#[derive(Debug)]
pub struct Frame {
    raw: *mut sys::OniFrame,
}

impl Frame {
    /// Takes over the reference returned by the native read call.
    pub(crate) fn from_raw(raw: *mut sys::OniFrame) -> Result<Self, Error> {
        if raw.is_null() {
            return Err(Error::new(Status::Error, "frame pointer is null"));
        }
        Ok(Self { raw })
    }

    fn inner(&self) -> &sys::OniFrame {
        unsafe { &*self.raw }
    }

    pub fn width(&self) -> i32 {
        self.inner().width
    }

    pub fn height(&self) -> i32 {
        self.inner().height
    }

    /// Length of one row in bytes.
    pub fn stride_bytes(&self) -> i32 {
        self.inner().stride
    }

    pub fn data_size(&self) -> usize {
        self.inner().dataSize.max(0) as usize
    }

    /// Capture time in microseconds.
    pub fn timestamp_us(&self) -> u64 {
        self.inner().timestamp
    }

    pub fn frame_index(&self) -> i32 {
        self.inner().frameIndex
    }

    pub fn sensor_type(&self) -> Option<SensorType> {
        SensorType::from_raw(self.inner().sensorType)
    }

    pub fn video_mode(&self) -> Option<VideoMode> {
        VideoMode::from_raw(self.inner().videoMode)
    }

    pub fn cropping_enabled(&self) -> bool {
        self.inner().croppingEnabled != 0
    }

    pub fn crop_origin(&self) -> (i32, i32) {
        let inner = self.inner();
        (inner.cropOriginX, inner.cropOriginY)
    }

    /// Raw frame data as bytes.
    pub fn data(&self) -> &[u8] {
        let inner = self.inner();
        if inner.data.is_null() {
            return &[];
        }
        unsafe { std::slice::from_raw_parts(inner.data.cast::<u8>(), self.data_size()) }
    }

    /// Frame data as 16-bit pixels for depth and GRAY16 formats, `None` for
    /// other formats.
    pub fn pixels_u16(&self) -> Option<&[u16]> {
        let format = PixelFormat::from_raw(self.inner().videoMode.pixelFormat)?;
        if format.bytes_per_pixel() != Some(2) {
            return None;
        }
        let inner = self.inner();
        if inner.data.is_null() {
            return None;
        }
        Some(unsafe {
            std::slice::from_raw_parts(inner.data.cast::<u16>(), self.data_size() / 2)
        })
    }
}

impl Clone for Frame {
    fn clone(&self) -> Self {
        unsafe { sys::oniFrameAddRef(self.raw) };
        Self { raw: self.raw }
    }
}

impl Drop for Frame {
    fn drop(&mut self) {
        unsafe { sys::oniFrameRelease(self.raw) }
    }
}

/// Scales 16-bit depth values in mm to `u8`, clamped to
/// `min_depth..max_depth`. A degenerate range (`min_depth >= max_depth`) maps
/// every value to 0.
pub fn normalized_depth(depth_mm: &[u16], min_depth: u16, max_depth: u16, out: &mut [u8]) {
    if min_depth >= max_depth {
        out.fill(0);
        return;
    }
    let range = (max_depth - min_depth) as f32;
    for (oi, di) in zip(out, depth_mm) {
        let depth = (*di).clamp(min_depth, max_depth);
        *oi = ((depth - min_depth) as f32 * 255.0 / range).floor() as u8;
    }
}

/// Copies RGB888 frame data into `out`.
pub fn copy_rgb(frame: &Frame, out: &mut [u8]) {
    for (oi, di) in zip(out, frame.data()) {
        *oi = *di;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_depth_scales_and_clamps() {
        let depth = [0u16, 500, 750, 1000, 9999];
        let mut out = [0u8; 5];
        normalized_depth(&depth, 500, 1000, &mut out);

        // below min clamps to 0, above max clamps to 255
        assert_eq!(out[0], 0);
        assert_eq!(out[1], 0);
        assert_eq!(out[2], 127);
        assert_eq!(out[3], 255);
        assert_eq!(out[4], 255);
    }

    #[test]
    fn normalized_depth_degenerate_range_maps_to_zero() {
        let depth = [100u16, 200, 300];

        let mut out = [7u8; 3];
        normalized_depth(&depth, 500, 500, &mut out);
        assert_eq!(out, [0, 0, 0]);

        let mut out = [7u8; 3];
        normalized_depth(&depth, 800, 200, &mut out);
        assert_eq!(out, [0, 0, 0]);
    }
}
