//! Callback adapters: native event listeners driven by Rust closures.
//!
//! The native library delivers hotplug and new-frame events to registered
//! listener objects on threads of its own choosing. The adapters here box the
//! caller's closure, hand an `extern "C"` trampoline plus the box as cookie to
//! the native registration call, and keep the returned callback handle so the
//! listener can be unregistered later. The box stays alive exactly as long as
//! the registration: it is reclaimed immediately if registration fails, and
//! freed after unregistration.
//!
//! Dispatch is a direct, synchronous pass-through on the native thread; no
//! queuing or reordering. Panics raised by a callback are caught at the
//! boundary and logged, never unwound into the native library.

use std::marker::PhantomData;
use std::os::raw::c_void;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::ptr;

use openni2_sys as sys;
use sys::OniStatus_ONI_STATUS_OK as OK;
use tracing::error;

use crate::status::Error;
use crate::stream::VideoStream;
use crate::types::{DeviceInfo, DeviceState};

type ConnectCallback = Box<dyn FnMut(DeviceInfo) + Send>;
type StateCallback = Box<dyn FnMut(DeviceInfo, DeviceState) + Send>;
type FrameCallback = Box<dyn FnMut(&mut VideoStream) + Send>;

#[derive(Default)]
struct DeviceCallbackState {
    on_connected: Option<ConnectCallback>,
    on_disconnected: Option<ConnectCallback>,
    on_state_changed: Option<StateCallback>,
}

/// Builder for device hotplug/state listeners. All callbacks are optional;
/// [`DeviceEvents::register`] installs the set ones in one native
/// registration.
#[derive(Default)]
pub struct DeviceEvents {
    state: DeviceCallbackState,
}

impl DeviceEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invoked when a device is plugged in.
    pub fn on_connected(mut self, callback: impl FnMut(DeviceInfo) + Send + 'static) -> Self {
        self.state.on_connected = Some(Box::new(callback));
        self
    }

    /// Invoked when a device is unplugged.
    pub fn on_disconnected(mut self, callback: impl FnMut(DeviceInfo) + Send + 'static) -> Self {
        self.state.on_disconnected = Some(Box::new(callback));
        self
    }

    /// Invoked when the state of a connected device changes.
    pub fn on_state_changed(
        mut self,
        callback: impl FnMut(DeviceInfo, DeviceState) + Send + 'static,
    ) -> Self {
        self.state.on_state_changed = Some(Box::new(callback));
        self
    }

    /// Registers the callbacks with the native library. On failure nothing is
    /// left registered and the boxed callbacks are reclaimed.
    pub fn register(self) -> Result<DeviceListener, Error> {
        let mut callbacks = sys::OniDeviceCallbacks {
            deviceConnected: Some(device_connected_trampoline),
            deviceDisconnected: Some(device_disconnected_trampoline),
            deviceStateChanged: Some(device_state_changed_trampoline),
        };

        let mut handle: sys::OniCallbackHandle = ptr::null_mut();
        let state = register_cookie(self.state, |cookie| unsafe {
            sys::oniRegisterDeviceCallbacks(&mut callbacks, cookie, &mut handle)
        })?;
        Ok(DeviceListener { handle, state })
    }
}

/// Boxes callback state into the raw cookie for a native registration call.
/// The box is reclaimed when registration reports failure, so no state is ever
/// left "active" without a matching native handle.
fn register_cookie<T>(
    state: T,
    register: impl FnOnce(*mut c_void) -> sys::OniStatus,
) -> Result<*mut T, Error> {
    let cookie = Box::into_raw(Box::new(state));
    let status = register(cookie.cast::<c_void>());
    if status != OK {
        drop(unsafe { Box::from_raw(cookie) });
        return Err(Error::last(status));
    }
    Ok(cookie)
}

/// An active device listener registration. Unregisters on drop.
pub struct DeviceListener {
    handle: sys::OniCallbackHandle,
    state: *mut DeviceCallbackState,
}

// the boxed callbacks are Send and the raw pointers are only touched here
unsafe impl Send for DeviceListener {}

impl DeviceListener {
    /// Unregisters the callbacks. Equivalent to dropping the listener.
    pub fn unregister(self) {}
}

impl Drop for DeviceListener {
    fn drop(&mut self) {
        unsafe {
            // the native call returns only after in-flight callbacks are done,
            // after which the state box can be freed
            sys::oniUnregisterDeviceCallbacks(self.handle);
            drop(Box::from_raw(self.state));
        }
    }
}

/// An active new-frame listener registration on one stream. Unregisters on
/// drop. Borrows the stream it was registered on, so the stream cannot be
/// destroyed while the registration is alive.
pub struct FrameListener<'s> {
    stream: sys::OniStreamHandle,
    handle: sys::OniCallbackHandle,
    state: *mut FrameCallback,
    _stream: PhantomData<&'s VideoStream>,
}

unsafe impl Send for FrameListener<'_> {}

impl<'s> FrameListener<'s> {
    pub(crate) fn register(
        stream: &'s VideoStream,
        callback: FrameCallback,
    ) -> Result<Self, Error> {
        let mut handle: sys::OniCallbackHandle = ptr::null_mut();
        let state = register_cookie(callback, |cookie| unsafe {
            sys::oniStreamRegisterNewFrameCallback(
                stream.handle,
                Some(new_frame_trampoline),
                cookie,
                &mut handle,
            )
        })?;
        Ok(Self {
            stream: stream.handle,
            handle,
            state,
            _stream: PhantomData,
        })
    }

    /// Unregisters the callback. Equivalent to dropping the listener.
    pub fn unregister(self) {}
}

impl Drop for FrameListener<'_> {
    fn drop(&mut self) {
        unsafe {
            sys::oniStreamUnregisterNewFrameCallback(self.stream, self.handle);
            drop(Box::from_raw(self.state));
        }
    }
}

// trampolines ________________________________________________________________

/// Translates the native payload into a [`DeviceInfo`] snapshot. A null
/// payload drops the event.
unsafe fn snapshot(info: *const sys::OniDeviceInfo) -> Option<DeviceInfo> {
    if info.is_null() {
        None
    } else {
        Some(DeviceInfo::from_raw(unsafe { &*info }))
    }
}

fn contain_panic(event: &str, dispatch: impl FnMut()) {
    if catch_unwind(AssertUnwindSafe(dispatch)).is_err() {
        error!(event, "callback panicked; event dropped at the native boundary");
    }
}

unsafe extern "C" fn device_connected_trampoline(
    info: *const sys::OniDeviceInfo,
    cookie: *mut c_void,
) {
    let Some(info) = (unsafe { snapshot(info) }) else {
        return;
    };
    let state = unsafe { &mut *cookie.cast::<DeviceCallbackState>() };
    if let Some(callback) = state.on_connected.as_mut() {
        contain_panic("device_connected", || callback(info.clone()));
    }
}

unsafe extern "C" fn device_disconnected_trampoline(
    info: *const sys::OniDeviceInfo,
    cookie: *mut c_void,
) {
    let Some(info) = (unsafe { snapshot(info) }) else {
        return;
    };
    let state = unsafe { &mut *cookie.cast::<DeviceCallbackState>() };
    if let Some(callback) = state.on_disconnected.as_mut() {
        contain_panic("device_disconnected", || callback(info.clone()));
    }
}

unsafe extern "C" fn device_state_changed_trampoline(
    info: *const sys::OniDeviceInfo,
    device_state: sys::OniDeviceState,
    cookie: *mut c_void,
) {
    let Some(info) = (unsafe { snapshot(info) }) else {
        return;
    };
    let state = unsafe { &mut *cookie.cast::<DeviceCallbackState>() };
    if let Some(callback) = state.on_state_changed.as_mut() {
        contain_panic("device_state_changed", || {
            callback(info.clone(), DeviceState::from_raw(device_state))
        });
    }
}

unsafe extern "C" fn new_frame_trampoline(stream: sys::OniStreamHandle, cookie: *mut c_void) {
    let callback = unsafe { &mut *cookie.cast::<FrameCallback>() };
    // borrowed view; `owned: false` keeps drop from destroying the stream
    let mut view = VideoStream {
        handle: stream,
        owned: false,
    };
    contain_panic("new_frame", || callback(&mut view));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::raw::c_char;
    use std::sync::Arc;
    use std::sync::Mutex;

    fn raw_info(name: &str) -> sys::OniDeviceInfo {
        let mut raw = sys::OniDeviceInfo::default();
        for (o, b) in raw.name.iter_mut().zip(name.bytes()) {
            *o = b as c_char;
        }
        raw.usbVendorId = 0x1d27;
        raw
    }

    #[test]
    fn connected_trampoline_translates_payload() {
        let received = Arc::new(Mutex::new(Vec::<DeviceInfo>::new()));
        let sink = received.clone();
        let state = Box::into_raw(Box::new(DeviceCallbackState {
            on_connected: Some(Box::new(move |info| sink.lock().unwrap().push(info))),
            on_disconnected: None,
            on_state_changed: None,
        }));

        let raw = raw_info("Carmine 1.08");
        unsafe { device_connected_trampoline(&raw, state.cast()) };

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].name, "Carmine 1.08");
        assert_eq!(received[0].usb_vendor_id, 0x1d27);

        drop(unsafe { Box::from_raw(state) });
    }

    #[test]
    fn state_changed_trampoline_translates_state() {
        let received = Arc::new(Mutex::new(Vec::<(String, DeviceState)>::new()));
        let sink = received.clone();
        let state = Box::into_raw(Box::new(DeviceCallbackState {
            on_connected: None,
            on_disconnected: None,
            on_state_changed: Some(Box::new(move |info, device_state| {
                sink.lock().unwrap().push((info.name, device_state));
            })),
        }));

        let raw = raw_info("Xtion");
        unsafe {
            device_state_changed_trampoline(
                &raw,
                sys::OniDeviceState_ONI_DEVICE_STATE_NOT_READY,
                state.cast(),
            )
        };

        let received = received.lock().unwrap();
        assert_eq!(received.as_slice(), [("Xtion".to_string(), DeviceState::NotReady)]);

        drop(unsafe { Box::from_raw(state) });
    }

    #[test]
    fn unset_callback_drops_event() {
        let state = Box::into_raw(Box::new(DeviceCallbackState {
            on_connected: None,
            on_disconnected: None,
            on_state_changed: None,
        }));

        let raw = raw_info("PS1080");
        unsafe { device_disconnected_trampoline(&raw, state.cast()) };

        drop(unsafe { Box::from_raw(state) });
    }

    #[test]
    fn null_payload_drops_event() {
        let state = Box::into_raw(Box::new(DeviceCallbackState {
            on_connected: Some(Box::new(|_| panic!("must not be invoked"))),
            on_disconnected: None,
            on_state_changed: None,
        }));

        unsafe { device_connected_trampoline(ptr::null(), state.cast()) };

        drop(unsafe { Box::from_raw(state) });
    }

    #[test]
    fn panicking_callback_never_unwinds_into_native_code() {
        let state = Box::into_raw(Box::new(DeviceCallbackState {
            on_connected: Some(Box::new(|_| panic!("boom"))),
            on_disconnected: None,
            on_state_changed: None,
        }));

        let raw = raw_info("Kinect");
        // the trampoline must swallow the panic, so this unwind check is empty
        let outcome = catch_unwind(AssertUnwindSafe(|| unsafe {
            device_connected_trampoline(&raw, state.cast())
        }));
        assert!(outcome.is_ok());

        drop(unsafe { Box::from_raw(state) });
    }

    #[test]
    fn failed_registration_reclaims_callback_state() {
        let alive = Arc::new(());
        let state = alive.clone();

        let result = register_cookie(state, |_| sys::OniStatus_ONI_STATUS_ERROR);

        assert!(result.is_err());
        assert_eq!(Arc::strong_count(&alive), 1);
    }

    #[test]
    fn successful_registration_keeps_state_until_freed() {
        let alive = Arc::new(());
        let state = alive.clone();

        let cookie = register_cookie(state, |_| sys::OniStatus_ONI_STATUS_OK).unwrap();
        assert_eq!(Arc::strong_count(&alive), 2);

        drop(unsafe { Box::from_raw(cookie) });
        assert_eq!(Arc::strong_count(&alive), 1);
    }

    #[test]
    fn frame_listener_borrows_its_stream() {
        // type-checks only while the listener carries the stream's lifetime
        fn _tied<'s>(stream: &'s VideoStream) -> Result<FrameListener<'s>, Error> {
            stream.register_new_frame_callback(|_| {})
        }
        let _ = _tied;
    }

    #[test]
    fn frame_trampoline_passes_borrowed_stream() {
        let seen = Arc::new(Mutex::new(Vec::<bool>::new()));
        let sink = seen.clone();
        let callback: FrameCallback = Box::new(move |stream| {
            sink.lock().unwrap().push(!stream.owned);
        });
        let state = Box::into_raw(Box::new(callback));

        let fake_stream = 0x1 as sys::OniStreamHandle;
        unsafe { new_frame_trampoline(fake_stream, state.cast()) };

        assert_eq!(seen.lock().unwrap().as_slice(), [true]);

        drop(unsafe { Box::from_raw(state) });
    }
}
