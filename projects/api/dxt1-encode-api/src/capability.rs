//! Runtime selection of the fastest backend for this machine.

use dxt1_encode::Capability;
use tracing::debug;

/// Returns the fastest [`Capability`] the running CPU supports.
///
/// With the `no-runtime-cpu-detection` feature, only features enabled at compile time count.
///
/// The result never changes within a process, so callers may compute it once and reuse it.
pub fn detect_capability() -> Capability {
    let capability = detect_backend();
    debug!(
        backend = capability.backend().name(),
        "Selected DXT1 encode backend"
    );
    capability
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
fn detect_backend() -> Capability {
    if dxt1_encode_common::cpu_detect::has_sse2() {
        // SAFETY: SSE2 support was just confirmed.
        return unsafe { Capability::with_backend(dxt1_encode::Backend::Sse2) };
    }

    Capability::portable()
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
fn detect_backend() -> Capability {
    Capability::portable()
}
