//! Feed layout via Taffy.
//!
//! Builds a flex tree for the feed container: one viewport-sized,
//! non-shrinking block per entry, stacked as a column (vertical sections)
//! or a row (horizontal sections), with scroll overflow on the root.
//! Extracts block rectangles, content size, and max scroll per axis.

use taffy::{
    AvailableSpace, Dimension as TaffyDimension, Display, FlexDirection, FlexWrap, NodeId,
    Overflow, Point, Size, Style, TaffyTree,
};

use crate::types::Orientation;

// =============================================================================
// COMPUTED LAYOUT
// =============================================================================

/// Position and size of one feed block, in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// Result of a feed layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputedLayout {
    /// One rect per block, in feed order.
    pub blocks: Vec<BlockRect>,
    /// Total content extent along X.
    pub content_width: u16,
    /// Total content extent along Y.
    pub content_height: u16,
    /// Maximum scroll offset on the X axis.
    pub max_scroll_x: u16,
    /// Maximum scroll offset on the Y axis.
    pub max_scroll_y: u16,
}

// =============================================================================
// LAYOUT COMPUTATION
// =============================================================================

fn to_flex_direction(orientation: Orientation) -> FlexDirection {
    match orientation {
        Orientation::Vertical => FlexDirection::Column,
        Orientation::Horizontal => FlexDirection::Row,
    }
}

/// Lay out `block_count` viewport-sized blocks in the given orientation.
///
/// The caller decides how many blocks there are (items plus a trailing
/// loading block while a fetch is pending).
pub fn compute_feed_layout(
    block_count: usize,
    orientation: Orientation,
    viewport_w: u16,
    viewport_h: u16,
) -> ComputedLayout {
    let mut tree: TaffyTree<()> = TaffyTree::new();

    let block_style = Style {
        size: Size {
            width: TaffyDimension::Length(viewport_w as f32),
            height: TaffyDimension::Length(viewport_h as f32),
        },
        flex_grow: 0.0,
        flex_shrink: 0.0,
        ..Default::default()
    };

    let children: Vec<NodeId> = (0..block_count)
        .map(|_| tree.new_leaf(block_style.clone()).unwrap())
        .collect();

    let root_style = Style {
        display: Display::Flex,
        flex_direction: to_flex_direction(orientation),
        flex_wrap: FlexWrap::NoWrap,
        overflow: Point {
            x: Overflow::Scroll,
            y: Overflow::Scroll,
        },
        size: Size {
            width: TaffyDimension::Length(viewport_w as f32),
            height: TaffyDimension::Length(viewport_h as f32),
        },
        ..Default::default()
    };

    let root = tree.new_with_children(root_style, &children).unwrap();

    let available = Size {
        width: AvailableSpace::Definite(viewport_w as f32),
        height: AvailableSpace::Definite(viewport_h as f32),
    };
    tree.compute_layout(root, available).unwrap();

    let mut blocks = Vec::with_capacity(block_count);
    let mut content_width = 0u16;
    let mut content_height = 0u16;

    for child in &children {
        let layout = tree.layout(*child).unwrap();
        let rect = BlockRect {
            x: layout.location.x.round() as u16,
            y: layout.location.y.round() as u16,
            width: layout.size.width.round() as u16,
            height: layout.size.height.round() as u16,
        };
        content_width = content_width.max(rect.x + rect.width);
        content_height = content_height.max(rect.y + rect.height);
        blocks.push(rect);
    }

    ComputedLayout {
        blocks,
        content_width,
        content_height,
        max_scroll_x: content_width.saturating_sub(viewport_w),
        max_scroll_y: content_height.saturating_sub(viewport_h),
    }
}

// =============================================================================
// TESTS
// =============================================================================
