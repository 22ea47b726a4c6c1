//! Status codes of the native library and the crate error type.

use std::ffi::CStr;
use std::fmt;

use openni2_sys as sys;
use thiserror::Error;

/// Return status of the native library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Error,
    NotImplemented,
    NotSupported,
    BadParameter,
    OutOfFlow,
    NoDevice,
    TimeOut,
    /// A status code not covered by the native taxonomy.
    Unknown(u32),
}

impl Status {
    pub fn from_raw(raw: sys::OniStatus) -> Self {
        match raw {
            sys::OniStatus_ONI_STATUS_OK => Status::Ok,
            sys::OniStatus_ONI_STATUS_ERROR => Status::Error,
            sys::OniStatus_ONI_STATUS_NOT_IMPLEMENTED => Status::NotImplemented,
            sys::OniStatus_ONI_STATUS_NOT_SUPPORTED => Status::NotSupported,
            sys::OniStatus_ONI_STATUS_BAD_PARAMETER => Status::BadParameter,
            sys::OniStatus_ONI_STATUS_OUT_OF_FLOW => Status::OutOfFlow,
            sys::OniStatus_ONI_STATUS_NO_DEVICE => Status::NoDevice,
            sys::OniStatus_ONI_STATUS_TIME_OUT => Status::TimeOut,
            other => Status::Unknown(other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Error => "ERROR",
            Status::NotImplemented => "NOT_IMPLEMENTED",
            Status::NotSupported => "NOT_SUPPORTED",
            Status::BadParameter => "BAD_PARAMETER",
            Status::OutOfFlow => "OUT_OF_FLOW",
            Status::NoDevice => "NO_DEVICE",
            Status::TimeOut => "TIME_OUT",
            Status::Unknown(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Unknown(code) => write!(f, "UNKNOWN({code})"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Error returned by all fallible calls. Carries the native status plus the
/// extended error string captured at failure time, so a failure is always
/// distinguishable from a legitimate zero/false/empty result.
#[derive(Debug, Clone, Error)]
#[error("{status}: {detail}")]
pub struct Error {
    pub status: Status,
    pub detail: String,
}

impl Error {
    pub(crate) fn new(status: Status, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    /// Builds an error from a raw status, attaching the native extended error.
    pub(crate) fn last(raw: sys::OniStatus) -> Self {
        Self {
            status: Status::from_raw(raw),
            detail: extended_error(),
        }
    }
}

/// Converts a raw status into a `Result`, capturing the extended error on
/// failure.
pub(crate) fn check(raw: sys::OniStatus) -> Result<(), Error> {
    if raw == sys::OniStatus_ONI_STATUS_OK {
        Ok(())
    } else {
        Err(Error::last(raw))
    }
}

/// Returns additional information about the last error raised by the native
/// library. Empty if there is none.
pub fn extended_error() -> String {
    unsafe {
        let msg = sys::oniGetExtendedError();
        if msg.is_null() {
            String::new()
        } else {
            CStr::from_ptr(msg).to_string_lossy().into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trip() {
        for raw in [0, 1, 2, 3, 4, 5, 6, 102] {
            let status = Status::from_raw(raw);
            assert_ne!(status.as_str(), "UNKNOWN");
        }
        assert_eq!(Status::from_raw(0), Status::Ok);
        assert_eq!(Status::from_raw(102), Status::TimeOut);
        assert_eq!(Status::from_raw(77), Status::Unknown(77));
    }

    #[test]
    fn status_strings_match_native_table() {
        assert_eq!(Status::NoDevice.to_string(), "NO_DEVICE");
        assert_eq!(Status::BadParameter.to_string(), "BAD_PARAMETER");
        assert_eq!(Status::Unknown(77).to_string(), "UNKNOWN(77)");
    }

    #[test]
    fn error_displays_status_and_detail() {
        let err = Error::new(Status::NoDevice, "no device found");
        assert_eq!(err.to_string(), "NO_DEVICE: no device found");
    }
}
