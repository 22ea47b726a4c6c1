/*!
Connects to a device, prints its identity, streams depth frames for a short
while, and prints per-frame statistics. No display, no extra setup.
*/

use std::time::Duration;

use openni2_rust::{
    SensorType,
    device::{self, Device},
    stream::VideoStream,
    util::Counter,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    device::initialize()?;
    println!("OpenNI2 version {}", device::version());

    let info = match device::wait_for_device(Duration::from_secs(10)) {
        Ok(info) => info,
        Err(msg) => {
            println!("{msg}");
            device::shutdown();
            return Ok(());
        }
    };
    println!("found {info}");

    let dev = Device::open(Some(&info.uri))?;
    if let Ok(firmware) = dev.firmware_version() {
        println!("firmware: {firmware}");
    }

    for sensor_type in [SensorType::Depth, SensorType::Color, SensorType::Ir] {
        if let Some(sensor) = dev.sensor_info(sensor_type) {
            println!("{sensor_type} modes:");
            for mode in &sensor.video_modes {
                println!("  {mode}");
            }
        }
    }

    let depth = VideoStream::create(&dev, SensorType::Depth)?;
    depth.start()?;
    let mode = depth.video_mode()?;
    println!(
        "streaming {mode}, fov {:.2} x {:.2} rad",
        depth.horizontal_fov()?,
        depth.vertical_fov()?
    );

    let mut counter = Counter::new(10);
    for _ in 0..100 {
        let frame = depth.read_frame()?;
        if let Some(pixels) = frame.pixels_u16() {
            let valid = pixels.iter().filter(|&&d| d > 0).count();
            let max = pixels.iter().max().copied().unwrap_or(0);
            print!(
                "frame {}: {valid} valid pixels, max {max} mm   ",
                frame.frame_index()
            );
        }
        counter.print_fps_frame_count_info();
    }
    println!();

    depth.stop();
    drop(depth);
    drop(dev);
    device::shutdown();
    Ok(())
}
