use anyhow::{anyhow, Result};
use candle::Device;
use tracing::warn;

/// Resolves a device preference such as `cpu`, `cuda` or `cuda:1`.
pub fn select_device(preference: &str) -> Result<Device> {
    let trimmed = preference.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.is_empty() || lower == "cpu" {
        Ok(Device::Cpu)
    } else if lower.starts_with("cuda") || lower.starts_with("gpu") {
        let ordinal = trimmed
            .split(':')
            .nth(1)
            .and_then(|part| part.parse::<usize>().ok())
            .unwrap_or(0);
        try_cuda_device(ordinal)
    } else {
        warn!(
            "unrecognized device preference '{}', defaulting to cpu",
            trimmed
        );
        Ok(Device::Cpu)
    }
}

fn try_cuda_device(ordinal: usize) -> Result<Device> {
    Device::new_cuda(ordinal).map_err(|err| {
        anyhow!(
            "failed to initialize CUDA device {} ({err}). Build with the `cuda` \
             feature and ensure CUDA libraries are available.",
            ordinal
        )
    })
}

#[cfg(test)]
mod tests {
    use super::select_device;

    #[test]
    fn cpu_and_unknown_preferences_resolve_to_cpu() {
        assert!(select_device("cpu").unwrap().is_cpu());
        assert!(select_device("  CPU ").unwrap().is_cpu());
        assert!(select_device("").unwrap().is_cpu());
        assert!(select_device("tpu").unwrap().is_cpu());
    }
}
