//! Section table and resolution.
//!
//! The id space is partitioned into fixed sections, each carrying the
//! scroll orientation the feed uses while its last item falls inside the
//! section. The table is static configuration; nothing mutates it at
//! runtime.

use crate::types::{ItemId, Orientation};

// =============================================================================
// SECTION TABLE
// =============================================================================

/// A configured `[start, end)` id range with an associated orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// First id in the section (inclusive).
    pub start: ItemId,
    /// One past the last id in the section (exclusive).
    pub end: ItemId,
    /// Scroll orientation while the feed is inside this section.
    pub orientation: Orientation,
}

impl Section {
    /// Check whether an id falls inside this section.
    #[inline]
    pub const fn contains(&self, id: ItemId) -> bool {
        self.start <= id && id < self.end
    }
}

/// The fixed section table.
///
/// Note the gaps: ids 20 and 30 fall in no range, and nothing is configured
/// at 50 or above. Lookups for those ids fall through to the fallback
/// (last) section. The feed stops advancing once the last item reaches the
/// fallback section's exclusive end.
pub const SECTIONS: [Section; 3] = [
    Section {
        start: 1,
        end: 20,
        orientation: Orientation::Vertical,
    },
    Section {
        start: 21,
        end: 30,
        orientation: Orientation::Horizontal,
    },
    Section {
        start: 31,
        end: 50,
        orientation: Orientation::Vertical,
    },
];

// =============================================================================
// RESOLUTION
// =============================================================================

/// Resolve the section an item id belongs to.
///
/// Returns the first section whose range contains the id, or the last
/// section as a fallback when none does. Total: always returns a section.
pub fn resolve_section(id: ItemId) -> &'static Section {
    SECTIONS
        .iter()
        .find(|s| s.contains(id))
        .unwrap_or(&SECTIONS[SECTIONS.len() - 1])
}

/// Orientation of the section the id resolves to.
#[inline]
pub fn orientation_for(id: ItemId) -> Orientation {
    resolve_section(id).orientation
}

// =============================================================================
// TESTS
// =============================================================================
