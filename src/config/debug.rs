//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Every flag is additionally gated by `cfg(debug_assertions)`
//! at the call site.

/// Emit each RSI reading together with its window averages.
pub const PRINT_RSI_WINDOWS: bool = false;

/// Emit every zone as it is closed and turned into an annotation.
pub const PRINT_ZONE_EMITS: bool = false;

/// Emit the limited window, visible/look-back point counts and y-axis range for each viewport.
pub const PRINT_VIEWPORT: bool = false;

/// Emit one line per symbol as the screener finishes it.
pub const PRINT_SCREENER_PROGRESS: bool = false;

/// Emit details while decoding daily price documents.
pub const PRINT_SERDE: bool = false;
