//! View state - the feed's reactive state record.
//!
//! One `ViewState` is created per mount and passed by reference to the
//! three event sources (autoplay tick, manual scroll, toggle). Everything
//! is a signal so the render pipeline picks up changes automatically.
//!
//! Invariants:
//! - `items` is non-empty and strictly increasing by 1, starting at 1
//! - `orientation` always equals the resolved section orientation of the
//!   last item
//! - `loading` is true only while one simulated fetch is in flight

use spark_signals::{Signal, signal};

use crate::sections::orientation_for;
use crate::types::{FIRST_ITEM, ItemId, Orientation};

/// Reactive state of the feed viewer.
///
/// Cloning is cheap: signals are handles to shared slots.
#[derive(Clone)]
pub struct ViewState {
    /// Loaded item ids, insertion ordered.
    pub items: Signal<Vec<ItemId>>,
    /// Orientation of the section containing the last item.
    pub orientation: Signal<Orientation>,
    /// True while a load step's simulated fetch is pending.
    pub loading: Signal<bool>,
    /// Whether the autoplay driver may trigger load steps.
    pub autoplay: Signal<bool>,
}

impl ViewState {
    /// Fresh state: one item, vertical, autoplay enabled.
    pub fn new() -> Self {
        Self {
            items: signal(vec![FIRST_ITEM]),
            orientation: signal(orientation_for(FIRST_ITEM)),
            loading: signal(false),
            autoplay: signal(true),
        }
    }

    /// Id of the most recently appended item.
    pub fn last_item(&self) -> ItemId {
        self.items.get().last().copied().unwrap_or(FIRST_ITEM)
    }

    /// Number of loaded items.
    pub fn item_count(&self) -> usize {
        self.items.get().len()
    }

    /// Append the next item and recompute orientation from its section.
    ///
    /// Returns the new item's id. This is the only way items are added, so
    /// the contiguity invariant holds by construction.
    pub fn append_next(&self) -> ItemId {
        let mut items = self.items.get();
        let next = items.last().copied().unwrap_or(0) + 1;
        items.push(next);
        self.items.set(items);
        self.orientation.set(orientation_for(next));
        next
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let view = ViewState::new();
        assert_eq!(view.items.get(), vec![1]);
        assert_eq!(view.orientation.get(), Orientation::Vertical);
        assert!(!view.loading.get());
        assert!(view.autoplay.get());
    }

    #[test]
    fn test_append_next_is_contiguous() {
        let view = ViewState::new();
        for expected in 2..=10 {
            assert_eq!(view.append_next(), expected);
        }

        let items = view.items.get();
        assert_eq!(items.len(), 10);
        for pair in items.windows(2) {
            assert_eq!(pair[1], pair[0] + 1);
        }
    }

    #[test]
    fn test_orientation_follows_sections() {
        let view = ViewState::new();

        // Advance to 20: gap id, fallback section is vertical
        while view.last_item() < 20 {
            view.append_next();
        }
        assert_eq!(view.orientation.get(), Orientation::Vertical);

        // 21 enters the horizontal section
        view.append_next();
        assert_eq!(view.orientation.get(), Orientation::Horizontal);

        // 31 is vertical again
        while view.last_item() < 31 {
            view.append_next();
        }
        assert_eq!(view.orientation.get(), Orientation::Vertical);
    }

    #[test]
    fn test_clone_shares_state() {
        let view = ViewState::new();
        let alias = view.clone();

        view.append_next();
        assert_eq!(alias.item_count(), 2);

        alias.autoplay.set(false);
        assert!(!view.autoplay.get());
    }
}
