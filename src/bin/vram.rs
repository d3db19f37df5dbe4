use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use timedwall::gpu;

/// Report the minimum amount of VRAM across the available GPUs.
///
/// By default only non-integrated GPUs are considered; if none exist,
/// the minimum over the remaining (integrated) GPUs is reported instead.
#[derive(Parser)]
#[command(name = "vram", version)]
struct Args {
    /// List bus ID, description and the amount of VRAM for each GPU
    #[arg(short, long)]
    list: bool,

    /// Include integrated GPUs when finding the minimum amount of
    /// available VRAM
    #[arg(short, long)]
    integrated: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let all = gpu::list_gpus(true).context("could not enumerate GPUs")?;

    if args.list {
        for gpu in &all {
            println!("[{}] {}, {} MiB", gpu.bus, gpu.name, gpu.vram_mib);
        }
        return Ok(());
    }

    let chosen = gpu::pick_gpus(&all, args.integrated);
    let non_integrated = all.iter().filter(|gpu| !gpu.integrated).count();

    match gpu::min_vram(&chosen) {
        Some(minimum) => {
            println!("{minimum} MiB");
            Ok(())
        }
        None => {
            if non_integrated == 0 {
                eprintln!("error: could not find any GPU");
            } else {
                eprintln!(
                    "error: found {} GPUs, where {} of them are non-integrated",
                    all.len(),
                    non_integrated
                );
            }
            process::exit(1);
        }
    }
}
