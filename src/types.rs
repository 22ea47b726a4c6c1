//! Plain-data records and enums mirrored from the native library.

use std::fmt;
use std::os::raw::c_char;

use openni2_sys as sys;

/// The sensors a device can provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorType {
    Ir,
    Color,
    Depth,
}

impl SensorType {
    pub(crate) fn to_raw(self) -> sys::OniSensorType {
        match self {
            SensorType::Ir => sys::OniSensorType_ONI_SENSOR_IR,
            SensorType::Color => sys::OniSensorType_ONI_SENSOR_COLOR,
            SensorType::Depth => sys::OniSensorType_ONI_SENSOR_DEPTH,
        }
    }

    pub(crate) fn from_raw(raw: sys::OniSensorType) -> Option<Self> {
        match raw {
            sys::OniSensorType_ONI_SENSOR_IR => Some(SensorType::Ir),
            sys::OniSensorType_ONI_SENSOR_COLOR => Some(SensorType::Color),
            sys::OniSensorType_ONI_SENSOR_DEPTH => Some(SensorType::Depth),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SensorType::Ir => "IR",
            SensorType::Color => "COLOR",
            SensorType::Depth => "DEPTH",
        }
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pixel formats of a video mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Depth1Mm,
    Depth100Um,
    Shift9_2,
    Shift9_3,
    Rgb888,
    Yuv422,
    Gray8,
    Gray16,
    Jpeg,
    Yuyv,
}

impl PixelFormat {
    pub(crate) fn to_raw(self) -> sys::OniPixelFormat {
        match self {
            PixelFormat::Depth1Mm => sys::OniPixelFormat_ONI_PIXEL_FORMAT_DEPTH_1_MM,
            PixelFormat::Depth100Um => sys::OniPixelFormat_ONI_PIXEL_FORMAT_DEPTH_100_UM,
            PixelFormat::Shift9_2 => sys::OniPixelFormat_ONI_PIXEL_FORMAT_SHIFT_9_2,
            PixelFormat::Shift9_3 => sys::OniPixelFormat_ONI_PIXEL_FORMAT_SHIFT_9_3,
            PixelFormat::Rgb888 => sys::OniPixelFormat_ONI_PIXEL_FORMAT_RGB888,
            PixelFormat::Yuv422 => sys::OniPixelFormat_ONI_PIXEL_FORMAT_YUV422,
            PixelFormat::Gray8 => sys::OniPixelFormat_ONI_PIXEL_FORMAT_GRAY8,
            PixelFormat::Gray16 => sys::OniPixelFormat_ONI_PIXEL_FORMAT_GRAY16,
            PixelFormat::Jpeg => sys::OniPixelFormat_ONI_PIXEL_FORMAT_JPEG,
            PixelFormat::Yuyv => sys::OniPixelFormat_ONI_PIXEL_FORMAT_YUYV,
        }
    }

    pub(crate) fn from_raw(raw: sys::OniPixelFormat) -> Option<Self> {
        match raw {
            sys::OniPixelFormat_ONI_PIXEL_FORMAT_DEPTH_1_MM => Some(PixelFormat::Depth1Mm),
            sys::OniPixelFormat_ONI_PIXEL_FORMAT_DEPTH_100_UM => Some(PixelFormat::Depth100Um),
            sys::OniPixelFormat_ONI_PIXEL_FORMAT_SHIFT_9_2 => Some(PixelFormat::Shift9_2),
            sys::OniPixelFormat_ONI_PIXEL_FORMAT_SHIFT_9_3 => Some(PixelFormat::Shift9_3),
            sys::OniPixelFormat_ONI_PIXEL_FORMAT_RGB888 => Some(PixelFormat::Rgb888),
            sys::OniPixelFormat_ONI_PIXEL_FORMAT_YUV422 => Some(PixelFormat::Yuv422),
            sys::OniPixelFormat_ONI_PIXEL_FORMAT_GRAY8 => Some(PixelFormat::Gray8),
            sys::OniPixelFormat_ONI_PIXEL_FORMAT_GRAY16 => Some(PixelFormat::Gray16),
            sys::OniPixelFormat_ONI_PIXEL_FORMAT_JPEG => Some(PixelFormat::Jpeg),
            sys::OniPixelFormat_ONI_PIXEL_FORMAT_YUYV => Some(PixelFormat::Yuyv),
            _ => None,
        }
    }

    /// Bytes per pixel for uncompressed formats, `None` for JPEG.
    pub fn bytes_per_pixel(&self) -> Option<usize> {
        match self {
            PixelFormat::Gray8 => Some(1),
            PixelFormat::Depth1Mm
            | PixelFormat::Depth100Um
            | PixelFormat::Shift9_2
            | PixelFormat::Shift9_3
            | PixelFormat::Gray16
            | PixelFormat::Yuv422
            | PixelFormat::Yuyv => Some(2),
            PixelFormat::Rgb888 => Some(3),
            PixelFormat::Jpeg => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PixelFormat::Depth1Mm => "DEPTH_1_MM",
            PixelFormat::Depth100Um => "DEPTH_100_UM",
            PixelFormat::Shift9_2 => "SHIFT_9_2",
            PixelFormat::Shift9_3 => "SHIFT_9_3",
            PixelFormat::Rgb888 => "RGB888",
            PixelFormat::Yuv422 => "YUV422",
            PixelFormat::Gray8 => "GRAY8",
            PixelFormat::Gray16 => "GRAY16",
            PixelFormat::Jpeg => "JPEG",
            PixelFormat::Yuyv => "YUYV",
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection state reported by the device-state-changed listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceState {
    Ok,
    Error,
    NotReady,
    Eof,
    Unknown(u32),
}

impl DeviceState {
    pub(crate) fn from_raw(raw: sys::OniDeviceState) -> Self {
        match raw {
            sys::OniDeviceState_ONI_DEVICE_STATE_OK => DeviceState::Ok,
            sys::OniDeviceState_ONI_DEVICE_STATE_ERROR => DeviceState::Error,
            sys::OniDeviceState_ONI_DEVICE_STATE_NOT_READY => DeviceState::NotReady,
            sys::OniDeviceState_ONI_DEVICE_STATE_EOF => DeviceState::Eof,
            other => DeviceState::Unknown(other),
        }
    }
}

/// Mapping of the depth image into the color camera's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRegistrationMode {
    Off,
    DepthToColor,
}

impl ImageRegistrationMode {
    pub(crate) fn to_raw(self) -> sys::OniImageRegistrationMode {
        match self {
            ImageRegistrationMode::Off => {
                sys::OniImageRegistrationMode_ONI_IMAGE_REGISTRATION_OFF
            }
            ImageRegistrationMode::DepthToColor => {
                sys::OniImageRegistrationMode_ONI_IMAGE_REGISTRATION_DEPTH_TO_COLOR
            }
        }
    }

    pub(crate) fn from_raw(raw: sys::OniImageRegistrationMode) -> Self {
        if raw == sys::OniImageRegistrationMode_ONI_IMAGE_REGISTRATION_DEPTH_TO_COLOR {
            ImageRegistrationMode::DepthToColor
        } else {
            ImageRegistrationMode::Off
        }
    }
}

/// Version of the native library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: i32,
    pub minor: i32,
    pub maintenance: i32,
    pub build: i32,
}

impl From<sys::OniVersion> for Version {
    fn from(v: sys::OniVersion) -> Self {
        Self {
            major: v.major,
            minor: v.minor,
            maintenance: v.maintenance,
            build: v.build,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.maintenance, self.build
        )
    }
}

/// Resolution, pixel format, and frame rate of a video stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoMode {
    pub pixel_format: PixelFormat,
    pub width: i32,
    pub height: i32,
    pub fps: i32,
}

impl VideoMode {
    pub const fn new(pixel_format: PixelFormat, width: i32, height: i32, fps: i32) -> Self {
        Self {
            pixel_format,
            width,
            height,
            fps,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub(crate) fn to_raw(self) -> sys::OniVideoMode {
        sys::OniVideoMode {
            pixelFormat: self.pixel_format.to_raw(),
            resolutionX: self.width,
            resolutionY: self.height,
            fps: self.fps,
        }
    }

    pub(crate) fn from_raw(raw: sys::OniVideoMode) -> Option<Self> {
        Some(Self {
            pixel_format: PixelFormat::from_raw(raw.pixelFormat)?,
            width: raw.resolutionX,
            height: raw.resolutionY,
            fps: raw.fps,
        })
    }
}

impl fmt::Display for VideoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}@{} {}",
            self.width, self.height, self.fps, self.pixel_format
        )
    }
}

/// Snapshot of the identity of a device. All fields are copied out of the
/// native record, so the snapshot stays valid independent of the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub uri: String,
    pub vendor: String,
    pub name: String,
    pub usb_vendor_id: u16,
    pub usb_product_id: u16,
}

impl DeviceInfo {
    pub(crate) fn from_raw(raw: &sys::OniDeviceInfo) -> Self {
        Self {
            uri: string_from_chars(&raw.uri),
            vendor: string_from_chars(&raw.vendor),
            name: string_from_chars(&raw.name),
            usb_vendor_id: raw.usbVendorId,
            usb_product_id: raw.usbProductId,
        }
    }
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({:04x}:{:04x}) at {}",
            self.vendor, self.name, self.usb_vendor_id, self.usb_product_id, self.uri
        )
    }
}

/// A sensor of a device together with the video modes it supports.
#[derive(Debug, Clone)]
pub struct SensorInfo {
    pub sensor_type: SensorType,
    pub video_modes: Vec<VideoMode>,
}

impl SensorInfo {
    /// Copies the native record. `raw` must point to a live `OniSensorInfo`
    /// owned by the native library.
    pub(crate) unsafe fn from_raw(raw: *const sys::OniSensorInfo) -> Option<Self> {
        if raw.is_null() {
            return None;
        }
        let info = unsafe { &*raw };
        let sensor_type = SensorType::from_raw(info.sensorType)?;
        let mut video_modes = Vec::new();
        if !info.pSupportedVideoModes.is_null() {
            let modes = unsafe {
                std::slice::from_raw_parts(
                    info.pSupportedVideoModes,
                    info.numSupportedVideoModes.max(0) as usize,
                )
            };
            video_modes.extend(modes.iter().filter_map(|m| VideoMode::from_raw(*m)));
        }
        Some(Self {
            sensor_type,
            video_modes,
        })
    }
}

/// Copies a NUL-terminated native char array into an owned `String`.
pub(crate) fn string_from_chars(chars: &[c_char]) -> String {
    let bytes: Vec<u8> = chars
        .iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars_from(s: &str) -> [c_char; 256] {
        let mut out = [0 as c_char; 256];
        for (o, b) in out.iter_mut().zip(s.bytes()) {
            *o = b as c_char;
        }
        out
    }

    #[test]
    fn device_info_snapshot_outlives_source() {
        let mut raw = sys::OniDeviceInfo {
            uri: chars_from("freenect://0"),
            vendor: chars_from("Microsoft"),
            name: chars_from("Kinect"),
            usbVendorId: 0x045e,
            usbProductId: 0x02ae,
        };
        let info = DeviceInfo::from_raw(&raw);

        // mutate the source buffer; the snapshot must be unaffected
        raw.uri = chars_from("gone");
        raw.usbVendorId = 0;

        assert_eq!(info.uri, "freenect://0");
        assert_eq!(info.vendor, "Microsoft");
        assert_eq!(info.name, "Kinect");
        assert_eq!(info.usb_vendor_id, 0x045e);
        assert_eq!(info.usb_product_id, 0x02ae);
    }

    #[test]
    fn pixel_format_sizes() {
        assert_eq!(PixelFormat::Depth1Mm.bytes_per_pixel(), Some(2));
        assert_eq!(PixelFormat::Rgb888.bytes_per_pixel(), Some(3));
        assert_eq!(PixelFormat::Gray8.bytes_per_pixel(), Some(1));
        assert_eq!(PixelFormat::Jpeg.bytes_per_pixel(), None);
    }

    #[test]
    fn pixel_format_round_trip() {
        for format in [
            PixelFormat::Depth1Mm,
            PixelFormat::Depth100Um,
            PixelFormat::Rgb888,
            PixelFormat::Gray16,
            PixelFormat::Yuyv,
        ] {
            assert_eq!(PixelFormat::from_raw(format.to_raw()), Some(format));
        }
        assert_eq!(PixelFormat::from_raw(9999), None);
    }

    #[test]
    fn video_mode_display() {
        let mode = VideoMode::new(PixelFormat::Depth1Mm, 640, 480, 30);
        assert_eq!(mode.to_string(), "640x480@30 DEPTH_1_MM");
        assert_eq!(mode.pixel_count(), 307200);
    }
}
