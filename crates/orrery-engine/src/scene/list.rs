use crate::coords::Rect;

use super::DrawCmd;

/// Recorded draw stream for a frame.
///
/// Items are painted in insertion order: later items draw on top.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - `clear()` keeps allocated capacity, so steady-state frames do not allocate the list
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
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
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
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

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Drops every item whose bounds lie entirely inside `area`.
    ///
    /// Returns the number of items removed.
    pub fn discard_within(&mut self, area: Rect) -> usize {
        let before = self.items.len();
        self.items
            .retain(|cmd| cmd.bounds().is_some_and(|b| !area.contains_rect(b)));
        before - self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Path;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn segment(a: Vec2, b: Vec2) -> Path {
        let mut p = Path::new();
        p.move_to(a);
        p.line_to(b);
        p
    }

    #[test]
    fn push_keeps_insertion_order() {
        let mut list = DrawList::new();
        list.push_stroke(segment(Vec2::zero(), Vec2::new(1.0, 0.0)), Color::BLACK, 1.0);
        list.push_stroke(segment(Vec2::zero(), Vec2::new(0.0, 1.0)), Color::WHITE, 1.0);

        let colors: Vec<Color> = list
            .items()
            .iter()
            .map(|c| match c {
                DrawCmd::Stroke(s) => s.color,
                DrawCmd::Clear(c) => c.color,
            })
            .collect();
        assert_eq!(colors, vec![Color::BLACK, Color::WHITE]);
    }

    #[test]
    fn empty_paths_and_zero_width_are_dropped() {
        let mut list = DrawList::new();
        list.push_stroke(Path::new(), Color::BLACK, 1.0);
        list.push_stroke(segment(Vec2::zero(), Vec2::new(1.0, 0.0)), Color::BLACK, 0.0);
        assert!(list.is_empty());
    }

    #[test]
    fn discard_within_keeps_overlapping_items() {
        let mut list = DrawList::new();
        list.push_stroke(segment(Vec2::new(10.0, 10.0), Vec2::new(20.0, 10.0)), Color::BLACK, 2.0);
        list.push_stroke(segment(Vec2::new(90.0, 10.0), Vec2::new(120.0, 10.0)), Color::BLACK, 2.0);

        let removed = list.discard_within(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(removed, 1);
        assert_eq!(list.len(), 1);
    }
}
