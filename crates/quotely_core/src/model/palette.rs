//! Fixed background palette and index cycling.
//!
//! # Responsibility
//! - Define the ordered set of selectable background colors.
//! - Provide wrap-around stepping used by swipe-driven color selection.
//!
//! # Invariants
//! - The palette order is stable; persisted `color_index` values key into it.
//! - `wrap` and `cycle` always return an in-bounds index.

/// Text color that stays readable on top of a palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    /// Light foreground for the dark jewel tones.
    Light,
    /// Dark foreground for the pale Sepia background.
    Dark,
}

/// One selectable background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    /// Display name shown in host-side pickers.
    pub name: &'static str,
    /// sRGB components.
    pub rgb: [u8; 3],
    /// Readable foreground on this background.
    pub ink: Ink,
}

/// The jewel-tone palette, in cycling order.
pub const PALETTE: &[PaletteColor] = &[
    PaletteColor {
        name: "Ruby",
        rgb: [153, 13, 26],
        ink: Ink::Light,
    },
    PaletteColor {
        name: "Sapphire",
        rgb: [13, 51, 128],
        ink: Ink::Light,
    },
    PaletteColor {
        name: "Emerald",
        rgb: [0, 102, 64],
        ink: Ink::Light,
    },
    PaletteColor {
        name: "Umber",
        rgb: [89, 51, 13],
        ink: Ink::Light,
    },
    PaletteColor {
        name: "Burnt Orange",
        rgb: [204, 77, 0],
        ink: Ink::Light,
    },
    PaletteColor {
        name: "Sepia",
        rgb: [230, 217, 179],
        ink: Ink::Dark,
    },
];

/// Step direction for swipe-driven color cycling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    /// Next palette entry.
    Forward,
    /// Previous palette entry.
    Backward,
}

impl CycleDirection {
    fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Normalizes any integer offset into palette bounds.
///
/// Uses euclidean remainder so negative offsets wrap to the tail instead of
/// panicking or clamping.
pub fn wrap(raw: i64) -> usize {
    let len = PALETTE.len() as i64;
    raw.rem_euclid(len) as usize
}

/// Steps one palette position with wrap-around at both ends.
pub fn cycle(index: usize, direction: CycleDirection) -> usize {
    wrap(index as i64 + direction.step())
}

/// Looks up a palette entry by index.
pub fn color(index: usize) -> Option<&'static PaletteColor> {
    PALETTE.get(index)
}

#[cfg(test)]
mod tests {
    use super::{color, cycle, wrap, CycleDirection, Ink, PALETTE};

    #[test]
    fn cycling_forward_palette_len_times_returns_to_start() {
        for start in 0..PALETTE.len() {
            let mut index = start;
            for _ in 0..PALETTE.len() {
                index = cycle(index, CycleDirection::Forward);
            }
            assert_eq!(index, start);
        }
    }

    #[test]
    fn cycling_backward_wraps_past_zero() {
        assert_eq!(cycle(0, CycleDirection::Backward), PALETTE.len() - 1);
        assert_eq!(cycle(PALETTE.len() - 1, CycleDirection::Forward), 0);
    }

    #[test]
    fn forward_then_backward_is_identity() {
        for start in 0..PALETTE.len() {
            let stepped = cycle(start, CycleDirection::Forward);
            assert_eq!(cycle(stepped, CycleDirection::Backward), start);
        }
    }

    #[test]
    fn wrap_normalizes_arbitrary_offsets() {
        assert_eq!(wrap(0), 0);
        assert_eq!(wrap(PALETTE.len() as i64), 0);
        assert_eq!(wrap(-1), PALETTE.len() - 1);
        assert_eq!(wrap(i64::MAX % PALETTE.len() as i64), wrap(i64::MAX));
        assert!(wrap(i64::MIN) < PALETTE.len());
    }

    #[test]
    fn only_sepia_takes_dark_ink() {
        for entry in PALETTE {
            if entry.name == "Sepia" {
                assert_eq!(entry.ink, Ink::Dark);
            } else {
                assert_eq!(entry.ink, Ink::Light);
            }
        }
    }

    #[test]
    fn color_lookup_matches_palette_order() {
        assert_eq!(color(0).map(|entry| entry.name), Some("Ruby"));
        assert_eq!(color(PALETTE.len()), None);
    }
}
