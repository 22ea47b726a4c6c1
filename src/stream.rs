//! Video streams: creation, start/stop, frame reading, and stream settings.

use std::mem::MaybeUninit;
use std::os::raw::{c_int, c_void};
use std::time::Duration;

use openni2_sys as sys;
use tracing::debug;

use crate::device::Device;
use crate::frame::Frame;
use crate::listener::FrameListener;
use crate::status::{Error, Status, check};
use crate::types::{SensorInfo, SensorType, VideoMode};

/// Rectangular region of interest of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cropping {
    pub origin_x: i32,
    pub origin_y: i32,
    pub width: i32,
    pub height: i32,
}

/// Blocks until one of `streams` has a frame ready and returns its index.
/// `None` waits indefinitely; otherwise the native library times out with
/// [`Status::TimeOut`](crate::Status::TimeOut) after `timeout`.
pub fn wait_for_any_stream(
    streams: &[&VideoStream],
    timeout: Option<Duration>,
) -> Result<usize, Error> {
    let mut handles: Vec<sys::OniStreamHandle> = streams.iter().map(|s| s.handle).collect();
    let timeout_ms = match timeout {
        Some(timeout) => timeout.as_millis().min(c_int::MAX as u128) as c_int,
        None => sys::ONI_TIMEOUT_FOREVER,
    };
    let mut ready: c_int = 0;
    check(unsafe {
        sys::oniWaitForAnyStream(
            handles.as_mut_ptr(),
            handles.len() as c_int,
            &mut ready,
            timeout_ms,
        )
    })?;
    Ok(ready.max(0) as usize)
}

/// A video stream of one sensor of a device.
///
/// The stream borrows nothing at the type level, but it must not outlive the
/// [`Device`] it was created from; the native handle dangles otherwise. The
/// stream is destroyed on drop.
#[derive(Debug)]
pub struct VideoStream {
    pub(crate) handle: sys::OniStreamHandle,
    // a stream obtained inside a new-frame callback is only borrowed
    pub(crate) owned: bool,
}

impl VideoStream {
    /// Creates a stream for the given sensor of `device`.
    pub fn create(device: &Device, sensor_type: SensorType) -> Result<Self, Error> {
        let mut handle: sys::OniStreamHandle = std::ptr::null_mut();
        check(unsafe {
            sys::oniDeviceCreateStream(device.handle, sensor_type.to_raw(), &mut handle)
        })?;
        if handle.is_null() {
            return Err(Error::new(Status::Error, "stream handle is null"));
        }
        debug!(sensor = %sensor_type, "stream created");
        Ok(Self {
            handle,
            owned: true,
        })
    }

    pub fn start(&self) -> Result<(), Error> {
        check(unsafe { sys::oniStreamStart(self.handle) })
    }

    pub fn stop(&self) {
        unsafe { sys::oniStreamStop(self.handle) }
    }

    /// Blocks until the next frame arrives and returns it. The frame keeps its
    /// own reference on the native buffer and is valid after the call.
    pub fn read_frame(&self) -> Result<Frame, Error> {
        let mut raw: *mut sys::OniFrame = std::ptr::null_mut();
        check(unsafe { sys::oniStreamReadFrame(self.handle, &mut raw) })?;
        Frame::from_raw(raw)
    }

    /// Registers `callback` to be invoked by the native library on its frame
    /// delivery thread whenever a new frame is ready on this stream. The
    /// returned listener borrows the stream and unregisters on drop.
    pub fn register_new_frame_callback<F>(&self, callback: F) -> Result<FrameListener<'_>, Error>
    where
        F: FnMut(&mut VideoStream) + Send + 'static,
    {
        FrameListener::register(self, Box::new(callback))
    }

    /// The sensor backing this stream together with its supported modes.
    pub fn sensor_info(&self) -> Option<SensorInfo> {
        unsafe {
            let raw = sys::oniStreamGetSensorInfo(self.handle);
            SensorInfo::from_raw(raw)
        }
    }

    pub fn video_mode(&self) -> Result<VideoMode, Error> {
        let raw: sys::OniVideoMode =
            self.get_property(sys::OniStreamProperty_ONI_STREAM_PROPERTY_VIDEO_MODE as c_int)?;
        VideoMode::from_raw(raw)
            .ok_or_else(|| Error::new(Status::Error, "stream reports an unknown pixel format"))
    }

    pub fn set_video_mode(&self, mode: VideoMode) -> Result<(), Error> {
        self.set_property(
            sys::OniStreamProperty_ONI_STREAM_PROPERTY_VIDEO_MODE as c_int,
            &mode.to_raw(),
        )
    }

    pub fn mirroring_enabled(&self) -> Result<bool, Error> {
        let raw: sys::OniBool =
            self.get_property(sys::OniStreamProperty_ONI_STREAM_PROPERTY_MIRRORING as c_int)?;
        Ok(raw != 0)
    }

    pub fn set_mirroring(&self, enabled: bool) -> Result<(), Error> {
        self.set_property(
            sys::OniStreamProperty_ONI_STREAM_PROPERTY_MIRRORING as c_int,
            &(enabled as sys::OniBool),
        )
    }

    pub fn is_cropping_supported(&self) -> bool {
        self.is_property_supported(sys::OniStreamProperty_ONI_STREAM_PROPERTY_CROPPING as c_int)
    }

    /// The active cropping region, `None` if cropping is off.
    pub fn cropping(&self) -> Result<Option<Cropping>, Error> {
        let raw: sys::OniCropping =
            self.get_property(sys::OniStreamProperty_ONI_STREAM_PROPERTY_CROPPING as c_int)?;
        if raw.enabled == 0 {
            return Ok(None);
        }
        Ok(Some(Cropping {
            origin_x: raw.originX,
            origin_y: raw.originY,
            width: raw.width,
            height: raw.height,
        }))
    }

    pub fn set_cropping(&self, cropping: Cropping) -> Result<(), Error> {
        let raw = sys::OniCropping {
            enabled: 1,
            originX: cropping.origin_x,
            originY: cropping.origin_y,
            width: cropping.width,
            height: cropping.height,
        };
        self.set_property(
            sys::OniStreamProperty_ONI_STREAM_PROPERTY_CROPPING as c_int,
            &raw,
        )
    }

    pub fn reset_cropping(&self) -> Result<(), Error> {
        let raw = sys::OniCropping {
            enabled: 0,
            ..Default::default()
        };
        self.set_property(
            sys::OniStreamProperty_ONI_STREAM_PROPERTY_CROPPING as c_int,
            &raw,
        )
    }

    /// Horizontal field of view in radians.
    pub fn horizontal_fov(&self) -> Result<f32, Error> {
        self.get_property(sys::OniStreamProperty_ONI_STREAM_PROPERTY_HORIZONTAL_FOV as c_int)
    }

    /// Vertical field of view in radians.
    pub fn vertical_fov(&self) -> Result<f32, Error> {
        self.get_property(sys::OniStreamProperty_ONI_STREAM_PROPERTY_VERTICAL_FOV as c_int)
    }

    /// Largest raw pixel value this stream can produce (depth streams).
    pub fn max_pixel_value(&self) -> Result<i32, Error> {
        self.get_property(sys::OniStreamProperty_ONI_STREAM_PROPERTY_MAX_VALUE as c_int)
    }

    /// Smallest raw pixel value this stream can produce (depth streams).
    pub fn min_pixel_value(&self) -> Result<i32, Error> {
        self.get_property(sys::OniStreamProperty_ONI_STREAM_PROPERTY_MIN_VALUE as c_int)
    }

    /// Exposure settings of a color stream. [`CameraSettings::is_valid`] tells
    /// whether the stream supports them.
    pub fn camera_settings(&self) -> CameraSettings<'_> {
        CameraSettings { stream: self }
    }

    pub fn is_property_supported(&self, property_id: c_int) -> bool {
        unsafe { sys::oniStreamIsPropertySupported(self.handle, property_id) != 0 }
    }

    /// Reads a stream property into a plain `T`. The property id dictates the
    /// native layout; `T` must match it, and a size mismatch is reported as
    /// [`Status::BadParameter`].
    pub fn get_property<T: Copy>(&self, property_id: c_int) -> Result<T, Error> {
        let mut value = MaybeUninit::<T>::uninit();
        let mut size = size_of::<T>() as c_int;
        check(unsafe {
            sys::oniStreamGetProperty(
                self.handle,
                property_id,
                value.as_mut_ptr().cast::<c_void>(),
                &mut size,
            )
        })?;
        if size as usize != size_of::<T>() {
            return Err(Error::new(Status::BadParameter, "property size mismatch"));
        }
        Ok(unsafe { value.assume_init() })
    }

    /// Writes a stream property from a plain `T`. The property id dictates
    /// the native layout; `T` must match it.
    pub fn set_property<T: Copy>(&self, property_id: c_int, value: &T) -> Result<(), Error> {
        check(unsafe {
            sys::oniStreamSetProperty(
                self.handle,
                property_id,
                (value as *const T).cast::<c_void>(),
                size_of::<T>() as c_int,
            )
        })
    }
}

impl Drop for VideoStream {
    fn drop(&mut self) {
        if self.owned {
            unsafe { sys::oniStreamDestroy(self.handle) }
        }
    }
}

/// Exposure settings of a color stream. Borrowed view, nothing to own.
#[derive(Debug)]
pub struct CameraSettings<'s> {
    stream: &'s VideoStream,
}

impl CameraSettings<'_> {
    /// Whether the underlying stream supports exposure settings at all.
    pub fn is_valid(&self) -> bool {
        self.stream.is_property_supported(
            sys::OniStreamProperty_ONI_STREAM_PROPERTY_AUTO_EXPOSURE as c_int,
        )
    }

    pub fn auto_exposure_enabled(&self) -> Result<bool, Error> {
        let raw: sys::OniBool = self
            .stream
            .get_property(sys::OniStreamProperty_ONI_STREAM_PROPERTY_AUTO_EXPOSURE as c_int)?;
        Ok(raw != 0)
    }

    pub fn set_auto_exposure(&self, enabled: bool) -> Result<(), Error> {
        self.stream.set_property(
            sys::OniStreamProperty_ONI_STREAM_PROPERTY_AUTO_EXPOSURE as c_int,
            &(enabled as sys::OniBool),
        )
    }

    pub fn auto_white_balance_enabled(&self) -> Result<bool, Error> {
        let raw: sys::OniBool = self.stream.get_property(
            sys::OniStreamProperty_ONI_STREAM_PROPERTY_AUTO_WHITE_BALANCE as c_int,
        )?;
        Ok(raw != 0)
    }

    pub fn set_auto_white_balance(&self, enabled: bool) -> Result<(), Error> {
        self.stream.set_property(
            sys::OniStreamProperty_ONI_STREAM_PROPERTY_AUTO_WHITE_BALANCE as c_int,
            &(enabled as sys::OniBool),
        )
    }

    /// Manual exposure value. Only meaningful while auto exposure is off.
    pub fn exposure(&self) -> Result<i32, Error> {
        self.stream
            .get_property(sys::OniStreamProperty_ONI_STREAM_PROPERTY_EXPOSURE as c_int)
    }

    pub fn set_exposure(&self, exposure: i32) -> Result<(), Error> {
        self.stream.set_property(
            sys::OniStreamProperty_ONI_STREAM_PROPERTY_EXPOSURE as c_int,
            &exposure,
        )
    }

    /// Manual gain value. Only meaningful while auto exposure is off.
    pub fn gain(&self) -> Result<i32, Error> {
        self.stream
            .get_property(sys::OniStreamProperty_ONI_STREAM_PROPERTY_GAIN as c_int)
    }

    pub fn set_gain(&self, gain: i32) -> Result<(), Error> {
        self.stream.set_property(
            sys::OniStreamProperty_ONI_STREAM_PROPERTY_GAIN as c_int,
            &gain,
        )
    }
}
