//! Recording streams to a file and controlling playback of recorded files.

use std::ffi::CString;
use std::os::raw::c_int;

use openni2_sys as sys;
use tracing::debug;

use crate::device::Device;
use crate::status::{Error, Status, check};
use crate::stream::VideoStream;

/// Records attached streams to an `.oni` file. The recording is finalized and
/// the recorder destroyed on drop.
#[derive(Debug)]
pub struct Recorder {
    handle: sys::OniRecorderHandle,
}

impl Recorder {
    /// Creates a recorder writing to `path`.
    pub fn create(path: &str) -> Result<Self, Error> {
        let path_c = CString::new(path)
            .map_err(|_| Error::new(Status::BadParameter, "path contains NUL"))?;
        let mut handle: sys::OniRecorderHandle = std::ptr::null_mut();
        check(unsafe { sys::oniCreateRecorder(path_c.as_ptr(), &mut handle) })?;
        if handle.is_null() {
            return Err(Error::new(Status::Error, "recorder handle is null"));
        }
        debug!(path, "recorder created");
        Ok(Self { handle })
    }

    /// Attaches a stream to the recording. Must be called before
    /// [`Recorder::start`]. `allow_lossy` permits lossy compression.
    pub fn attach(&self, stream: &VideoStream, allow_lossy: bool) -> Result<(), Error> {
        check(unsafe {
            sys::oniRecorderAttachStream(self.handle, stream.handle, allow_lossy as sys::OniBool)
        })
    }

    pub fn start(&self) -> Result<(), Error> {
        check(unsafe { sys::oniRecorderStart(self.handle) })
    }

    pub fn stop(&self) {
        // native stop returns a status, but there is no recovery at this point
        let _ = unsafe { sys::oniRecorderStop(self.handle) };
    }

    /// Whether the recorder holds a live native handle. Always true for a
    /// recorder obtained from [`Recorder::create`].
    pub fn is_valid(&self) -> bool {
        !self.handle.is_null()
    }
}

impl Drop for Recorder {
    fn drop(&mut self) {
        unsafe {
            sys::oniRecorderStop(self.handle);
            sys::oniRecorderDestroy(&mut self.handle);
        }
    }
}

/// Playback control of a device backed by a recording file. Obtained via
/// [`Device::playback_control`].
#[derive(Debug)]
pub struct PlaybackControl<'d> {
    device: &'d Device,
}

impl<'d> PlaybackControl<'d> {
    pub(crate) fn new(device: &'d Device) -> Self {
        Self { device }
    }

    /// Playback speed as a multiple of the recorded rate. `0.0` means frames
    /// are delivered as fast as they are read.
    pub fn speed(&self) -> Result<f32, Error> {
        self.device
            .get_property(sys::OniDeviceProperty_ONI_DEVICE_PROPERTY_PLAYBACK_SPEED as c_int)
    }

    pub fn set_speed(&self, speed: f32) -> Result<(), Error> {
        self.device.set_property(
            sys::OniDeviceProperty_ONI_DEVICE_PROPERTY_PLAYBACK_SPEED as c_int,
            &speed,
        )
    }

    /// Whether playback restarts from the beginning after the last frame.
    pub fn repeat_enabled(&self) -> Result<bool, Error> {
        let raw: sys::OniBool = self.device.get_property(
            sys::OniDeviceProperty_ONI_DEVICE_PROPERTY_PLAYBACK_REPEAT_ENABLED as c_int,
        )?;
        Ok(raw != 0)
    }

    pub fn set_repeat(&self, enabled: bool) -> Result<(), Error> {
        self.device.set_property(
            sys::OniDeviceProperty_ONI_DEVICE_PROPERTY_PLAYBACK_REPEAT_ENABLED as c_int,
            &(enabled as sys::OniBool),
        )
    }

    /// Total number of frames recorded for `stream`.
    pub fn number_of_frames(&self, stream: &VideoStream) -> Result<i32, Error> {
        stream.get_property(sys::OniStreamProperty_ONI_STREAM_PROPERTY_NUMBER_OF_FRAMES as c_int)
    }

    /// Seeks `stream` to `frame_index`. The next read on the stream returns
    /// that frame.
    pub fn seek(&self, stream: &VideoStream, frame_index: i32) -> Result<(), Error> {
        let mut seek = sys::OniSeek {
            frameIndex: frame_index,
            stream: stream.handle,
        };
        self.device.invoke(
            sys::OniDeviceCommand_ONI_DEVICE_COMMAND_SEEK as c_int,
            &mut seek,
        )
    }
}
