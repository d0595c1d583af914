//! Card-grid placement math for the log browser.
//!
//! Pure functions so the layout contract is testable without a renderer.

/// How many grid columns fit in a container.
///
/// Mirrors a `minmax(min_item_width, 1fr)` grid with a fixed gap: n columns
/// need `n * min + (n - 1) * gap` pixels, so `n = (width + gap) / (min + gap)`
/// rounded down. Never less than one column.
pub fn column_count(container_width: u32, min_item_width: u32, gap: u32) -> usize {
    let fit = (container_width + gap) / (min_item_width + gap);
    (fit as usize).max(1)
}

/// Where an expanded detail card is inserted relative to the item list.
///
/// The card renders immediately after the last index of the row containing
/// the selected item, so it always appears below the full row and never
/// splits one. The last row may be partial, hence the clamp.
pub fn insertion_index(selected_index: usize, columns: usize, len: usize) -> usize {
    debug_assert!(columns > 0);
    let row = selected_index / columns;
    ((row + 1) * columns - 1).min(len.saturating_sub(1))
}
