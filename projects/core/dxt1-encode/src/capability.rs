//! Selection of the block encoding backend.
//!
//! The encoder never probes the CPU. Callers decide once (typically at startup, through
//! [`dxt1_encode_common::cpu_detect`]) which backend the machine can run, and pass the resulting
//! immutable [`Capability`] into every encode call. All backends produce identical output;
//! the choice only affects speed.

use crate::encode_block::portable32::Portable32Encoder;
use crate::encode_block::BlockEncoder;

/// An implementation of the per-block encoding pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Scalar reference implementation. Always available.
    Portable32,
    /// SSE2 kernel, x86 and x86-64 only.
    ///
    /// On other architectures this backend runs the [`Backend::Portable32`] code.
    Sse2,
}

impl Backend {
    /// Every backend, in order of preference from slowest to fastest.
    pub const fn all_values() -> &'static [Backend] {
        &[Backend::Portable32, Backend::Sse2]
    }

    /// Short human readable name.
    pub const fn name(&self) -> &'static str {
        match self {
            Backend::Portable32 => "portable32",
            Backend::Sse2 => "sse2",
        }
    }
}

/// Immutable description of which backend the encoder may use.
///
/// Only [`Capability::portable`] is safe to construct unconditionally; SIMD backends require the
/// caller to vouch for the CPU via [`Capability::with_backend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capability {
    backend: Backend,
}

impl Capability {
    /// The scalar reference backend, available on every CPU.
    #[inline]
    pub const fn portable() -> Self {
        Self {
            backend: Backend::Portable32,
        }
    }

    /// Uses the given backend.
    ///
    /// # Safety
    ///
    /// The running CPU must support the instruction set `backend` uses
    /// (e.g. SSE2 for [`Backend::Sse2`] on x86). Passing [`Backend::Portable32`] is always sound.
    #[inline]
    pub const unsafe fn with_backend(backend: Backend) -> Self {
        Self { backend }
    }

    /// The backend encode calls will run.
    #[inline]
    pub const fn backend(&self) -> Backend {
        self.backend
    }

    /// Whether a SIMD backend was selected.
    #[inline]
    pub const fn is_accelerated(&self) -> bool {
        !matches!(self.backend, Backend::Portable32)
    }

    /// The block encoder implementing the selected backend.
    pub fn encoder(&self) -> &'static dyn BlockEncoder {
        static PORTABLE32: Portable32Encoder = Portable32Encoder;

        match self.backend {
            Backend::Portable32 => &PORTABLE32,
            #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
            Backend::Sse2 => {
                use crate::encode_block::sse2::Sse2Encoder;
                static SSE2: Sse2Encoder = Sse2Encoder::new_unchecked();
                &SSE2
            }
            #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
            Backend::Sse2 => &PORTABLE32,
        }
    }
}

impl Default for Capability {
    fn default() -> Self {
        Self::portable()
    }
}
