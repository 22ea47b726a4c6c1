/*!
OpenCL smoke test. Loads kernel source from a file (first argument, default
`demos/square.cl`), squares a fixed-size random float array on the first
available device, reads the result back, and prints how many elements came
back correct. Exits non-zero if the kernel source is missing or any OpenCL
step fails.
*/

use std::process::ExitCode;
use std::{env, fs};

use ocl::ProQue;
use rand::Rng;

const DATA_SIZE: usize = 1024;

fn main() -> ExitCode {
    match run() {
        Ok(correct) => {
            println!("computed {correct}/{DATA_SIZE} correct values");
            if correct == DATA_SIZE {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(msg) => {
            eprintln!("error: {msg}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<usize, String> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/square.cl".to_string());
    let src = fs::read_to_string(&path)
        .map_err(|e| format!("cannot read kernel source {path}: {e}"))?;

    let mut rng = rand::thread_rng();
    let data: Vec<f32> = (0..DATA_SIZE).map(|_| rng.gen_range(0.0f32..1.0)).collect();

    let pro_que = ProQue::builder()
        .src(src)
        .dims(DATA_SIZE)
        .build()
        .map_err(|e| format!("cannot build program: {e}"))?;

    let input = pro_que
        .create_buffer::<f32>()
        .map_err(|e| format!("cannot allocate input buffer: {e}"))?;
    let output = pro_que
        .create_buffer::<f32>()
        .map_err(|e| format!("cannot allocate output buffer: {e}"))?;

    input
        .write(&data)
        .enq()
        .map_err(|e| format!("cannot write input buffer: {e}"))?;

    let kernel = pro_que
        .kernel_builder("square")
        .arg(&input)
        .arg(&output)
        .arg(DATA_SIZE as u32)
        .build()
        .map_err(|e| format!("cannot create kernel: {e}"))?;

    unsafe {
        kernel
            .enq()
            .map_err(|e| format!("cannot execute kernel: {e}"))?;
    }

    let mut results = vec![0.0f32; DATA_SIZE];
    output
        .read(&mut results)
        .enq()
        .map_err(|e| format!("cannot read output buffer: {e}"))?;

    Ok(data
        .iter()
        .zip(&results)
        .filter(|(d, r)| **r == **d * **d)
        .count())
}
