//! Runtime initialization, device enumeration, and the [`Device`] handle.

use std::ffi::CString;
use std::mem::MaybeUninit;
use std::os::raw::{c_char, c_int, c_void};
use std::thread::sleep;
use std::time::Duration;

use openni2_sys as sys;
use sys::OniStatus_ONI_STATUS_OK as OK;
use tracing::{debug, warn};

use crate::record::PlaybackControl;
use crate::status::{Error, Status, check};
use crate::types::{DeviceInfo, ImageRegistrationMode, SensorInfo, SensorType, Version};

/// Initializes the native runtime. Must be called before any other call into
/// the library. Safe to call more than once.
pub fn initialize() -> Result<(), Error> {
    debug!("initializing OpenNI2 runtime");
    check(unsafe { sys::oniInitialize(sys::ONI_API_VERSION as c_int) })
}

/// Shuts the native runtime down. All devices, streams, and listeners must be
/// dropped before this is called.
pub fn shutdown() {
    debug!("shutting down OpenNI2 runtime");
    unsafe { sys::oniShutdown() }
}

/// Version of the native library.
pub fn version() -> Version {
    unsafe { sys::oniGetVersion() }.into()
}

/// Returns a snapshot of all currently connected devices.
pub fn enumerate_devices() -> Result<Vec<DeviceInfo>, Error> {
    unsafe {
        let mut list: *mut sys::OniDeviceInfo = std::ptr::null_mut();
        let mut count: c_int = 0;
        check(sys::oniGetDeviceList(&mut list, &mut count))?;

        let mut devices = Vec::with_capacity(count.max(0) as usize);
        for i in 0..count.max(0) as usize {
            devices.push(DeviceInfo::from_raw(&*list.add(i)));
        }

        // the native list is only borrowed, copies were taken above
        check(sys::oniReleaseDeviceList(list))?;
        Ok(devices)
    }
}

/// Polls for a connected device every 200 ms for at most `scan_time` and
/// returns the first one found. Set `scan_time = Duration::MAX` to wait
/// indefinitely (useful to wait for reconnection).
pub fn wait_for_device(scan_time: Duration) -> Result<DeviceInfo, Error> {
    let scan_interval = Duration::from_millis(200);
    let try_count = scan_time.div_duration_f64(scan_interval).ceil() as u64;

    debug!("searching for device...");
    let mut times_tried = 0;
    loop {
        if let Some(info) = enumerate_devices()?.into_iter().next() {
            debug!(uri = %info.uri, "device found");
            return Ok(info);
        }
        times_tried += 1;
        if times_tried >= try_count {
            return Err(Error::new(Status::NoDevice, "no device found"));
        }
        sleep(scan_interval);
    }
}

/// An open device. Closing happens on drop.
#[derive(Debug)]
pub struct Device {
    pub(crate) handle: sys::OniDeviceHandle,
}

impl Device {
    /// Opens the device at `uri`, or any connected device if `uri` is `None`.
    /// The uri of a recording file opens that file as a playback device.
    pub fn open(uri: Option<&str>) -> Result<Self, Error> {
        let uri_c = match uri {
            Some(uri) => Some(
                CString::new(uri).map_err(|_| Error::new(Status::BadParameter, "uri contains NUL"))?,
            ),
            None => None,
        };
        let uri_ptr = uri_c
            .as_ref()
            .map_or(std::ptr::null(), |u| u.as_ptr());

        let mut handle: sys::OniDeviceHandle = std::ptr::null_mut();
        check(unsafe { sys::oniDeviceOpen(uri_ptr, &mut handle) })?;
        if handle.is_null() {
            return Err(Error::new(Status::Error, "device handle is null"));
        }
        debug!(uri = uri.unwrap_or("<any>"), "device opened");
        Ok(Self { handle })
    }

    /// Identity snapshot of this device.
    pub fn info(&self) -> Result<DeviceInfo, Error> {
        let mut raw = sys::OniDeviceInfo::default();
        check(unsafe { sys::oniDeviceGetInfo(self.handle, &mut raw) })?;
        Ok(DeviceInfo::from_raw(&raw))
    }

    /// Whether the device provides the given sensor.
    pub fn has_sensor(&self, sensor_type: SensorType) -> bool {
        !unsafe { sys::oniDeviceGetSensorInfo(self.handle, sensor_type.to_raw()) }.is_null()
    }

    /// The given sensor together with its supported video modes, or `None` if
    /// the device has no such sensor.
    pub fn sensor_info(&self, sensor_type: SensorType) -> Option<SensorInfo> {
        unsafe {
            let raw = sys::oniDeviceGetSensorInfo(self.handle, sensor_type.to_raw());
            SensorInfo::from_raw(raw)
        }
    }

    /// Whether this device is a recording file rather than live hardware.
    pub fn is_file(&self) -> bool {
        self.is_property_supported(
            sys::OniDeviceProperty_ONI_DEVICE_PROPERTY_PLAYBACK_SPEED as c_int,
        ) && self.is_property_supported(
            sys::OniDeviceProperty_ONI_DEVICE_PROPERTY_PLAYBACK_REPEAT_ENABLED as c_int,
        ) && self
            .is_command_supported(sys::OniDeviceCommand_ONI_DEVICE_COMMAND_SEEK as c_int)
    }

    /// Playback control for a recording file, `None` for live devices.
    pub fn playback_control(&self) -> Option<PlaybackControl<'_>> {
        if self.is_file() {
            Some(PlaybackControl::new(self))
        } else {
            None
        }
    }

    pub fn image_registration_mode(&self) -> Result<ImageRegistrationMode, Error> {
        let raw: sys::OniImageRegistrationMode = self.get_property(
            sys::OniDeviceProperty_ONI_DEVICE_PROPERTY_IMAGE_REGISTRATION as c_int,
        )?;
        Ok(ImageRegistrationMode::from_raw(raw))
    }

    pub fn set_image_registration_mode(
        &self,
        mode: ImageRegistrationMode,
    ) -> Result<(), Error> {
        self.set_property(
            sys::OniDeviceProperty_ONI_DEVICE_PROPERTY_IMAGE_REGISTRATION as c_int,
            &mode.to_raw(),
        )
    }

    pub fn is_image_registration_mode_supported(&self, mode: ImageRegistrationMode) -> bool {
        unsafe { sys::oniDeviceIsImageRegistrationModeSupported(self.handle, mode.to_raw()) != 0 }
    }

    /// Synchronize depth and color frames to the same capture time.
    pub fn set_depth_color_sync(&self, enabled: bool) -> Result<(), Error> {
        unsafe {
            if enabled {
                check(sys::oniDeviceEnableDepthColorSync(self.handle))
            } else {
                sys::oniDeviceDisableDepthColorSync(self.handle);
                Ok(())
            }
        }
    }

    pub fn depth_color_sync_enabled(&self) -> bool {
        unsafe { sys::oniDeviceGetDepthColorSyncEnabled(self.handle) != 0 }
    }

    /// Firmware version string reported by the device.
    pub fn firmware_version(&self) -> Result<String, Error> {
        self.get_string_property(
            sys::OniDeviceProperty_ONI_DEVICE_PROPERTY_FIRMWARE_VERSION as c_int,
        )
    }

    /// Serial number string reported by the device.
    pub fn serial_number(&self) -> Result<String, Error> {
        self.get_string_property(
            sys::OniDeviceProperty_ONI_DEVICE_PROPERTY_SERIAL_NUMBER as c_int,
        )
    }

    pub fn is_property_supported(&self, property_id: c_int) -> bool {
        unsafe { sys::oniDeviceIsPropertySupported(self.handle, property_id) != 0 }
    }

    pub fn is_command_supported(&self, command_id: c_int) -> bool {
        unsafe { sys::oniDeviceIsCommandSupported(self.handle, command_id) != 0 }
    }

    /// Reads a device property into a plain `T`. The property id dictates the
    /// native layout; `T` must match it, and a size mismatch is reported as
    /// [`Status::BadParameter`].
    pub fn get_property<T: Copy>(&self, property_id: c_int) -> Result<T, Error> {
        let mut value = MaybeUninit::<T>::uninit();
        let mut size = size_of::<T>() as c_int;
        check(unsafe {
            sys::oniDeviceGetProperty(
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

    /// Writes a device property from a plain `T`. The property id dictates
    /// the native layout; `T` must match it.
    pub fn set_property<T: Copy>(&self, property_id: c_int, value: &T) -> Result<(), Error> {
        check(unsafe {
            sys::oniDeviceSetProperty(
                self.handle,
                property_id,
                (value as *const T).cast::<c_void>(),
                size_of::<T>() as c_int,
            )
        })
    }

    /// Invokes a device command with `data` as its in/out argument. The
    /// command id dictates the native layout of `T`.
    pub fn invoke<T: Copy>(&self, command_id: c_int, data: &mut T) -> Result<(), Error> {
        check(unsafe {
            sys::oniDeviceInvoke(
                self.handle,
                command_id,
                (data as *mut T).cast::<c_void>(),
                size_of::<T>() as c_int,
            )
        })
    }

    // private functions_______________________________________________________

    fn get_string_property(&self, property_id: c_int) -> Result<String, Error> {
        let mut buffer = [0 as c_char; sys::ONI_MAX_STR as usize];
        let mut size = buffer.len() as c_int;
        check(unsafe {
            sys::oniDeviceGetProperty(
                self.handle,
                property_id,
                buffer.as_mut_ptr().cast::<c_void>(),
                &mut size,
            )
        })?;
        Ok(crate::types::string_from_chars(&buffer))
    }
}

impl Drop for Device {
    fn drop(&mut self) {
        let status = unsafe { sys::oniDeviceClose(self.handle) };
        if status != OK {
            warn!(status = %Status::from_raw(status), "closing device failed");
        }
    }
}
