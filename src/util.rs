//! Small helpers used by the demos.

use std::io::{BufRead, BufReader, Write};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::thread::JoinHandle;
use std::time::Instant;

use tracing::warn;

/// Creates a new vector of length `size` with capacity set to `size` and
/// initializes it with `init`.
pub fn new_fixed_vec<T: Clone>(size: usize, init: T) -> Vec<T> {
    let mut v = Vec::<T>::with_capacity(size);
    v.resize(size, init);
    v
}

/// A counter to be used in the main loop to get fps and frame count info. The
/// `print_fps_frame_count_info()` function will be called every
/// `info_interval`th loop.
pub struct Counter {
    count: u64,
    now: Instant,
    info_interval: u64,
}

impl Counter {
    pub fn new(info_interval: u64) -> Self {
        Self {
            count: 0,
            now: Instant::now(),
            info_interval,
        }
    }

    pub fn print_fps_frame_count_info(&mut self) {
        self.count += 1;
        if self.count % self.info_interval == 0 {
            let elapsed = self.now.elapsed().as_secs_f64();
            self.now = Instant::now();
            print!(
                "  fps: {:.1}  frame: {}\r",
                self.info_interval as f64 / elapsed,
                self.count
            );
            let _ = std::io::stdout().flush();
        }
    }
}

/// Simple keybord event handler. Reads one line from stdin on a background
/// thread and raises a flag if it matches the watched key.
pub struct KeyboardEvent {
    pressed: Arc<AtomicBool>,
    thread: JoinHandle<()>,
}

impl KeyboardEvent {
    /// Create a new Event for the keystroke `key`.
    pub fn new(key: &str) -> Self {
        Self::from_reader(BufReader::new(std::io::stdin()), key)
    }

    fn from_reader<R: BufRead + Send + 'static>(mut reader: R, key: &str) -> Self {
        let pressed = Arc::new(AtomicBool::new(false));
        let pressed_cl = pressed.clone();
        let key = String::from(key);
        let thread = std::thread::spawn(move || {
            let mut input = String::new();
            match reader.read_line(&mut input) {
                Ok(_) if input == key => pressed_cl.store(true, Ordering::Relaxed),
                Ok(_) => {}
                Err(e) => warn!("reading keyboard input failed: {e}"),
            }
        });
        Self { pressed, thread }
    }

    /// Check if a key was pressed.
    pub fn key_was_pressed(&self) -> bool {
        self.pressed.load(Ordering::Relaxed)
    }

    /// Join with the main thread.
    pub fn join(self) {
        if self.thread.join().is_err() {
            warn!("keyboard input thread panicked");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};
    use std::time::Duration;

    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "input gone"))
        }
    }

    #[test]
    fn watched_key_raises_the_flag() {
        let event = KeyboardEvent::from_reader(Cursor::new("\n"), "\n");
        for _ in 0..100 {
            if event.key_was_pressed() {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(event.key_was_pressed());
        event.join();
    }

    #[test]
    fn other_input_leaves_the_flag_unset() {
        let event = KeyboardEvent::from_reader(Cursor::new("q\n"), "\n");
        let pressed = event.pressed.clone();
        event.join();
        assert!(!pressed.load(Ordering::Relaxed));
    }

    #[test]
    fn read_error_does_not_panic() {
        let event = KeyboardEvent::from_reader(BufReader::new(BrokenReader), "\n");
        let pressed = event.pressed.clone();
        event.join();
        assert!(!pressed.load(Ordering::Relaxed));
    }
}
