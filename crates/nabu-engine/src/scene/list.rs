use super::{DrawCmd, SortKey, TextCmd, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Text runs in insertion order.
    pub fn text_runs(&self) -> impl Iterator<Item = &TextCmd> {
        self.items.iter().map(|item| match &item.cmd {
            DrawCmd::Text(cmd) => cmd,
        })
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Iterates items in paint order (back-to-front) without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::{Color, TextPaint};

    fn run(list: &mut DrawList, z: i32, text: &str) {
        list.push_text_run(ZIndex(z), text, &TextPaint::fill(Color::WHITE, None, 12.0), Vec2::zero(), Vec2::zero());
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        run(&mut list, 1, "top");
        run(&mut list, 0, "first");
        run(&mut list, 0, "second");

        let order: Vec<&str> = list
            .iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Text(t) => t.text.as_str(),
            })
            .collect();
        assert_eq!(order, vec!["first", "second", "top"]);
    }

    #[test]
    fn clear_resets_items_and_order() {
        let mut list = DrawList::new();
        run(&mut list, 0, "a");
        list.clear();
        assert!(list.is_empty());

        run(&mut list, 0, "b");
        assert_eq!(list.items()[0].key.order, 0);
        assert_eq!(list.len(), 1);
    }
}
