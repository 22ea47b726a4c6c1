/*!
Registers device hotplug and state-change callbacks and prints the events as
they arrive. Plug a camera in and out to see it work; quit with Enter.
*/

use openni2_rust::{device, listener::DeviceEvents, util::KeyboardEvent};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    device::initialize()?;

    // callbacks run on the native hotplug thread, synchronously per event
    let listener = DeviceEvents::new()
        .on_connected(|info| println!("connected: {info}"))
        .on_disconnected(|info| println!("disconnected: {info}"))
        .on_state_changed(|info, state| println!("state of {} is now {state:?}", info.uri))
        .register()?;

    println!("waiting for hotplug events, press Enter to quit");
    let stop = KeyboardEvent::new("\n");
    while !stop.key_was_pressed() {
        std::thread::sleep(std::time::Duration::from_millis(100));
    }
    stop.join();

    listener.unregister();
    device::shutdown();
    Ok(())
}
