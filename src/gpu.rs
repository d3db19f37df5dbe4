//! GPU enumeration from the PCI bus, for the `vram` tool.
//!
//! `lspci -vmm` provides the machine-readable device list; VRAM comes from
//! the driver's sysfs counter when present, otherwise from the largest
//! prefetchable BAR in `lspci -v` output. Parsing is kept in pure
//! functions over captured text so it can be tested without hardware.

use std::fs;
use std::path::Path;
use std::process::Command;

use crate::error::GpuError;

/// One graphics adapter on the PCI bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gpu {
    /// PCI slot, e.g. `01:00.0`.
    pub bus: String,
    /// Vendor and device description.
    pub name: String,
    /// Total VRAM in MiB; 0 when no size could be determined.
    pub vram_mib: u64,
    /// True for integrated controllers ("VGA compatible controller"),
    /// false for discrete adapters ("3D controller" etc).
    pub integrated: bool,
}

/// Enumerate GPUs, optionally including integrated controllers.
pub fn list_gpus(include_integrated: bool) -> Result<Vec<Gpu>, GpuError> {
    let listing = run_lspci(&["-vmm"])?;
    let mut gpus = Vec::new();
    for record in parse_records(&listing) {
        let Some(integrated) = classify(&record.class) else {
            continue;
        };
        if integrated && !include_integrated {
            continue;
        }
        let vram_mib = vram_from_sysfs(&record.slot)
            .or_else(|| vram_from_bars(&record.slot))
            .unwrap_or(0);
        gpus.push(Gpu {
            bus: record.slot,
            name: format!("{} {}", record.vendor, record.device),
            vram_mib,
            integrated,
        });
    }
    Ok(gpus)
}

/// Minimum VRAM in MiB across the given GPUs; `None` when there are none.
pub fn min_vram(gpus: &[Gpu]) -> Option<u64> {
    gpus.iter().map(|gpu| gpu.vram_mib).min()
}

/// The GPUs the minimum should be computed over: all of them when
/// integrated controllers are requested, otherwise the discrete adapters,
/// falling back to the full list on systems without any discrete adapter.
pub fn pick_gpus(all: &[Gpu], include_integrated: bool) -> Vec<Gpu> {
    if include_integrated {
        return all.to_vec();
    }
    let discrete: Vec<Gpu> = all.iter().filter(|gpu| !gpu.integrated).cloned().collect();
    if discrete.is_empty() {
        all.to_vec()
    } else {
        discrete
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct PciRecord {
    slot: String,
    class: String,
    vendor: String,
    device: String,
}

/// Split `lspci -vmm` output into its blank-line-separated records.
fn parse_records(listing: &str) -> Vec<PciRecord> {
    let mut records = Vec::new();
    let mut current = PciRecord::default();
    for line in listing.lines() {
        if line.trim().is_empty() {
            if !current.slot.is_empty() {
                records.push(std::mem::take(&mut current));
            }
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match key {
            "Slot" => current.slot = value.to_string(),
            "Class" => current.class = value.to_string(),
            "Vendor" => current.vendor = value.to_string(),
            "Device" => current.device = value.to_string(),
            _ => {}
        }
    }
    if !current.slot.is_empty() {
        records.push(current);
    }
    records
}

/// Map a PCI class string to `Some(integrated)`, or `None` for anything
/// that is not a display controller.
fn classify(class: &str) -> Option<bool> {
    if class.starts_with("VGA") {
        Some(true)
    } else if class.starts_with("3D") || class.starts_with("Display") {
        Some(false)
    } else {
        None
    }
}

/// VRAM as reported by the driver, e.g. amdgpu's `mem_info_vram_total`.
fn vram_from_sysfs(slot: &str) -> Option<u64> {
    // lspci drops the leading domain for the common 0000 case.
    let address = if slot.matches(':').count() == 1 {
        format!("0000:{slot}")
    } else {
        slot.to_string()
    };
    let path = Path::new("/sys/bus/pci/devices")
        .join(address)
        .join("mem_info_vram_total");
    let bytes: u64 = fs::read_to_string(path).ok()?.trim().parse().ok()?;
    Some(bytes / (1024 * 1024))
}

/// Fallback: the largest prefetchable memory region of the device, which
/// on discrete cards is the VRAM aperture.
fn vram_from_bars(slot: &str) -> Option<u64> {
    let detail = run_lspci(&["-v", "-s", slot]).ok()?;
    largest_prefetchable_mib(&detail)
}

fn largest_prefetchable_mib(detail: &str) -> Option<u64> {
    detail
        .lines()
        .filter(|line| line.contains("prefetchable") && !line.contains("non-prefetchable"))
        .filter_map(region_size_mib)
        .max()
}

/// Parse the `[size=...]` suffix of an lspci memory region line.
fn region_size_mib(line: &str) -> Option<u64> {
    let start = line.rfind("[size=")? + "[size=".len();
    let rest = &line[start..];
    let size = &rest[..rest.find(']')?];
    if let Some(n) = size.strip_suffix('T') {
        return Some(n.parse::<u64>().ok()? * 1024 * 1024);
    }
    if let Some(n) = size.strip_suffix('G') {
        return Some(n.parse::<u64>().ok()? * 1024);
    }
    if let Some(n) = size.strip_suffix('M') {
        return n.parse::<u64>().ok();
    }
    if let Some(n) = size.strip_suffix('K') {
        return Some(n.parse::<u64>().ok()? / 1024);
    }
    Some(size.parse::<u64>().ok()? / (1024 * 1024))
}

fn run_lspci(args: &[&str]) -> Result<String, GpuError> {
    let output = Command::new("lspci")
        .args(args)
        .output()
        .map_err(|source| GpuError::Spawn {
            command: "lspci".to_string(),
            source,
        })?;
    if !output.status.success() {
        return Err(GpuError::Failed {
            command: "lspci".to_string(),
            status: output.status,
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
