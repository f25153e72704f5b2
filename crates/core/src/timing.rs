//! Tick interval curve.
//!
//! Speed rises linearly with score until the floor is reached:
//!
//! | Score | Interval |
//! |-------|----------|
//! | 0 | 180ms |
//! | 5 | 160ms |
//! | 10 | 140ms |
//! | 20 | 100ms |
//! | 25+ | 80ms (floor) |

use crate::types::{BASE_TICK_MS, TICK_DELTA_MS, TICK_FLOOR_MS};

/// Movement interval in milliseconds for the given score.
pub fn tick_interval_ms(score: u32) -> u32 {
    let reduction = score.saturating_mul(TICK_DELTA_MS);
    BASE_TICK_MS.saturating_sub(reduction).max(TICK_FLOOR_MS)
}
