//! Runtime CPU feature probes, usable in `no_std`.
//!
//! The encoder core never calls these itself; callers probe once at startup and hand the result
//! to the encoder as an immutable capability value. After the first call the result is cached,
//! so repeated probes cost a single load.

/// Whether the running CPU can execute the SSE2 block kernel.
///
/// With `no-runtime-cpu-detection`, reports whether SSE2 was enabled at compile time instead.
#[inline]
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub fn has_sse2() -> bool {
    #[cfg(not(feature = "no-runtime-cpu-detection"))]
    {
        cpufeatures::new!(cpuid_sse2, "sse2");
        cpuid_sse2::get()
    }

    #[cfg(feature = "no-runtime-cpu-detection")]
    {
        cfg!(target_feature = "sse2")
    }
}
