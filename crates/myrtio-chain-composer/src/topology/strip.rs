use alloc::vec::Vec;

use crate::color::Rgb;

/// Fixed miswiring correction of one chain segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwapScenario {
    /// Channels are wired as labelled
    #[default]
    Normal,
    /// Green and blue lines are swapped
    SwapGreenBlue,
    /// Red and blue lines are swapped
    SwapRedBlue,
}

impl SwapScenario {
    /// Permute a color so it shows as intended on a miswired LED
    pub const fn apply(self, color: Rgb) -> Rgb {
        match self {
            Self::Normal => color,
            Self::SwapGreenBlue => Rgb {
                r: color.r,
                g: color.b,
                b: color.g,
            },
            Self::SwapRedBlue => Rgb {
                r: color.b,
                g: color.g,
                b: color.r,
            },
        }
    }
}

/// One logical animation position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strip {
    /// Backed by the physical LED at `index`
    Real { index: usize, swap: SwapScenario },
    /// Placeholder with no LED behind it, writes are dropped
    Fake,
}

impl Strip {
    /// Physical LED wired as labelled
    pub const fn real(index: usize) -> Self {
        Self::Real {
            index,
            swap: SwapScenario::Normal,
        }
    }

    /// Physical LED that needs a channel swap
    pub const fn swapped(index: usize, swap: SwapScenario) -> Self {
        Self::Real { index, swap }
    }

    pub const fn is_real(&self) -> bool {
        matches!(self, Self::Real { .. })
    }

    /// Physical index, if the strip has one
    pub const fn physical_index(&self) -> Option<usize> {
        match self {
            Self::Real { index, .. } => Some(*index),
            Self::Fake => None,
        }
    }

    const fn shifted(self, offset: usize) -> Self {
        match self {
            Self::Real { index, swap } => Self::Real {
                index: index + offset,
                swap,
            },
            Self::Fake => Self::Fake,
        }
    }
}

/// Count strips with a physical LED behind them
pub fn count_real(strips: &[Strip]) -> usize {
    strips.iter().filter(|strip| strip.is_real()).count()
}

/// Concatenate two buses into one address space
///
/// `head` keeps its addresses. Every real strip of `tail` is moved past
/// the real strips of `head`. Fake strips pass through untouched.
pub fn merge(head: &[Strip], tail: &[Strip]) -> Vec<Strip> {
    let offset = count_real(head);
    let mut merged = Vec::with_capacity(head.len() + tail.len());
    merged.extend_from_slice(head);
    merged.extend(tail.iter().map(|strip| strip.shifted(offset)));
    merged
}

/// Fold any number of buses left to right with [`merge`]
pub fn merge_all(buses: &[&[Strip]]) -> Vec<Strip> {
    buses
        .iter()
        .fold(Vec::new(), |merged, bus| merge(&merged, bus))
}
