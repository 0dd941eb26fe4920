//! Level-of-detail stride and the handle that shares it.
//!
//! The stride is the number of lattice cells skipped per emitted cell. It is
//! written by exactly one control and read once per frame by the walker, so a
//! single-threaded shared cell is all the synchronisation it needs.

use std::cell::Cell;
use std::fmt;
use std::ops::RangeInclusive;
use std::rc::Rc;

/// Smallest stride: every lattice cell is emitted.
pub const MIN_STRIDE: u32 = 1;

/// Largest stride accepted by the control panel.
pub const MAX_STRIDE: u32 = 10;

/// A lattice stride, always within `[MIN_STRIDE, MAX_STRIDE]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stride(u32);

impl Stride {
    /// Full resolution.
    pub const FULL: Self = Self(MIN_STRIDE);

    /// Creates a stride, clamping `value` into the valid range.
    pub fn new(value: u32) -> Self {
        Self(value.clamp(MIN_STRIDE, MAX_STRIDE))
    }

    /// Returns the stride as a lattice step.
    pub fn get(self) -> usize {
        self.0 as usize
    }

    /// Returns the raw value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// The full valid range, as a control would declare it.
    pub fn range() -> RangeInclusive<u32> {
        MIN_STRIDE..=MAX_STRIDE
    }
}

impl Default for Stride {
    fn default() -> Self {
        Self::FULL
    }
}

impl From<u32> for Stride {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Stride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shared handle to the current stride.
///
/// Clones refer to the same value. The control side writes through
/// [`StrideHandle::set`] between frames; the render side calls
/// [`StrideHandle::get`] once at the start of a frame.
#[derive(Debug, Clone, Default)]
pub struct StrideHandle {
    value: Rc<Cell<Stride>>,
}

impl StrideHandle {
    /// Creates a handle holding `initial`.
    pub fn new(initial: Stride) -> Self {
        Self {
            value: Rc::new(Cell::new(initial)),
        }
    }

    /// Reads the current stride.
    pub fn get(&self) -> Stride {
        self.value.get()
    }

    /// Stores a new stride, clamping out-of-range values.
    ///
    /// Returns true if the stored value changed.
    pub fn set(&self, value: u32) -> bool {
        let clamped = Stride::new(value);
        if clamped.value() != value {
            log::warn!("stride {value} out of range, clamped to {clamped}");
        }
        let previous = self.value.replace(clamped);
        previous != clamped
    }
}
