//! Evaluation terms.
//!
//! Contains evaluation functions for:
//! - Positional square weights
//! - Corner control (held and potential corners)
//! - Mobility (actual and potential)
//! - Disc stability

mod corners;
mod mobility;
mod positional;
mod stability;
pub mod tables;

/// `100 * (a - b) / (a + b)`, truncated toward zero; exactly 0 when both
/// counts are zero.
#[inline]
#[must_use]
pub fn normalized(a: i32, b: i32) -> i32 {
    let total = a + b;
    if total == 0 {
        0
    } else {
        100 * (a - b) / total
    }
}
