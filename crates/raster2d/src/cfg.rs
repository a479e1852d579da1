//! Tolerance defaults shared by the kernel.
//!
//! Policy
//! - Fixed constants instead of per-call tolerances. Inputs are canvas
//!   coordinates (roughly 1..1e4), so absolute epsilons are adequate.
//! - Every division in the kernel is guarded by one of these.

/// Cross products with magnitude at or below this count as collinear.
pub const EPS_COLLINEAR: f64 = 1e-9;
/// Line-intersection denominators below this mean "parallel".
pub const EPS_DENOM: f64 = 1e-9;
/// Vectors shorter than this are not normalized (zero vector instead).
pub const EPS_LENGTH: f64 = 1e-9;
/// Edge dy below this is horizontal; span ends snap to integers within this.
pub const EPS_SPAN: f64 = 1e-9;
/// Absolute tolerance for deduplicating intersection points.
pub const DEDUP_TOL: f64 = 1e-6;
/// Default number of parameter steps when sampling a cubic curve (`t += 0.01`).
pub const DEFAULT_CURVE_STEPS: usize = 100;
/// Largest radius, semi-axis or focal distance a conic rasterizer accepts, and
/// the cap on `ConicCfg::max_extent`. Decision variables stay inside `i128`.
pub const MAX_CONIC_AXIS: i64 = 1 << 24;
