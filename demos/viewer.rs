/*!
Displays live depth and color streams in two windows. The depth image is
normalized to the measuring range reported by the stream. Quit with Enter.
*/

use std::time::Duration;

use show_image::{ImageInfo, ImageView, WindowOptions, WindowProxy};

use openni2_rust::{
    SensorType,
    device::{self, Device},
    frame::{copy_rgb, normalized_depth},
    stream::VideoStream,
    util::{Counter, KeyboardEvent, new_fixed_vec},
};

#[show_image::main]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    device::initialize()?;

    let info = match device::wait_for_device(Duration::from_secs(10)) {
        Ok(info) => info,
        Err(msg) => {
            println!("{msg}");
            device::shutdown();
            return Ok(());
        }
    };
    let dev = Device::open(Some(&info.uri))?;

    let depth = VideoStream::create(&dev, SensorType::Depth)?;
    depth.start()?;
    let depth_mode = depth.video_mode()?;

    // measuring range for the depth normalization
    let min_depth = depth.min_pixel_value()? as u16;
    let max_depth = depth.max_pixel_value()? as u16;
    println!("depth range: {min_depth} mm to {max_depth} mm");

    let color = if dev.has_sensor(SensorType::Color) {
        let color = VideoStream::create(&dev, SensorType::Color)?;
        color.start()?;
        Some(color)
    } else {
        None
    };

    let mut depth_mono = new_fixed_vec(depth_mode.pixel_count(), 0u8);
    let depth_window = create_window("depth", depth_mode.width as u32, depth_mode.height as u32);
    let mut color_window = color
        .as_ref()
        .map(|c| c.video_mode())
        .transpose()?
        .map(|mode| {
            (
                create_window("color", mode.width as u32, mode.height as u32),
                new_fixed_vec(3 * mode.pixel_count(), 0u8),
                mode,
            )
        });

    let stop = KeyboardEvent::new("\n");
    let mut counter = Counter::new(10);
    println!("press Enter to quit");

    loop {
        let frame = depth.read_frame()?;
        if let Some(pixels) = frame.pixels_u16() {
            normalized_depth(pixels, min_depth, max_depth, &mut depth_mono);
            let image = ImageView::new(
                ImageInfo::mono8(depth_mode.width as u32, depth_mode.height as u32),
                &depth_mono,
            );
            depth_window.set_image("image", image)?;
        }

        if let (Some(color), Some((window, rgb, mode))) = (&color, color_window.as_mut()) {
            let frame = color.read_frame()?;
            copy_rgb(&frame, rgb);
            let image = ImageView::new(
                ImageInfo::rgb8(mode.width as u32, mode.height as u32),
                rgb,
            );
            window.set_image("image", image)?;
        }

        counter.print_fps_frame_count_info();

        if stop.key_was_pressed() {
            break;
        }
    }
    stop.join();

    if let Some(color) = &color {
        color.stop();
    }
    depth.stop();
    drop(color_window);
    drop(color);
    drop(depth);
    drop(dev);
    device::shutdown();

    Ok(())
}

fn create_window(name: &str, width: u32, height: u32) -> WindowProxy {
    show_image::create_window(
        name,
        WindowOptions {
            size: Some([width, height]),
            ..Default::default()
        },
    )
    .unwrap()
}
