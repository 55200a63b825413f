//! Performance instrumentation for the interaction hot paths.
//!
//! Pointer-move handling runs once per frame while dragging, and the bounds
//! cache is rebuilt after every item-list change. Both are wrapped in
//! [`profile_scope!`], which compiles to nothing unless the `profiling`
//! feature is enabled:
//!
//! ```toml
//! [dependencies]
//! labelboard = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! use labelboard::profile_scope;
//!
//! fn pointer_move() {
//!     profile_scope!("pointer_move", 4.0);
//!     // ... work ...
//! }
//! ```

use std::time::Instant;
use tracing::{trace, warn};

/// Default warning threshold for scoped timers
pub const DEFAULT_THRESHOLD_MS: f64 = 16.67;

// ============================================================================
// Profiling Macros (zero-cost when disabled)
// ============================================================================

/// Profile a scope with the given name, optionally with a warning threshold
/// in milliseconds. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::perf::DEFAULT_THRESHOLD_MS);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

// ============================================================================
// Scoped Timer
// ============================================================================

/// RAII timer that logs its scope's duration when dropped.
///
/// Scopes slower than the threshold are logged at `warn`, the rest at
/// `trace`.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Milliseconds since the timer started
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn exceeds_threshold(&self, elapsed_ms: f64) -> bool {
        elapsed_ms > self.threshold_ms
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if self.exceeds_threshold(elapsed_ms) {
            warn!(
                "Slow operation '{}': {:.2}ms (threshold: {:.2}ms)",
                self.name, elapsed_ms, self.threshold_ms
            );
        } else {
            trace!("{}: {:.2}ms", self.name, elapsed_ms);
        }
    }
}
