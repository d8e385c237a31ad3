//! Error types for topology construction

use core::fmt;

/// Error type for building a [`Topology`](super::Topology)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyError<E> {
    /// Two real strips share a physical index
    DuplicateIndex { index: usize },
    /// A physical index does not fit the real strip count
    IndexOutOfRange { index: usize, real_count: usize },
    /// Driver length differs from the real strip count
    DriverSizeMismatch { expected: usize, actual: usize },
    /// Blanking the chain failed
    Driver(E),
}

impl<E: fmt::Debug> fmt::Display for TopologyError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopologyError::DuplicateIndex { index } => {
                write!(f, "Physical index {} assigned twice", index)
            }
            TopologyError::IndexOutOfRange { index, real_count } => write!(
                f,
                "Physical index {} out of range for {} real strips",
                index, real_count
            ),
            TopologyError::DriverSizeMismatch { expected, actual } => write!(
                f,
                "Driver has {} LEDs, topology needs {}",
                actual, expected
            ),
            TopologyError::Driver(e) => write!(f, "Driver error: {:?}", e),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for TopologyError<E> {}
