use bytemuck::{Pod, Zeroable};
use lyon::tessellation::{
    BuffersBuilder, LineJoin, StrokeOptions, StrokeTessellator, VertexBuffers,
};

use crate::coords::Vec2;
use crate::scene::{DrawCmd, DrawList, StrokeCmd};

/// Curve flattening tolerance in logical px.
const TOLERANCE: f32 = 0.1;
/// Canvas default `miterLimit`.
const MITER_LIMIT: f32 = 10.0;

/// Triangle-list vertex: logical-pixel position + premultiplied color.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct StrokeVertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

impl StrokeVertex {
    #[inline]
    fn new(p: Vec2, color: [f32; 4]) -> Self {
        Self { pos: [p.x, p.y], color }
    }
}

/// Indexed triangle geometry for one frame.
pub type Mesh = VertexBuffers<StrokeVertex, u32>;

/// Turns a [`DrawList`] into a [`Mesh`], in paint order.
///
/// Strokes go through lyon's stroker with canvas defaults (miter joins, butt
/// caps). Clears become two triangles in the background color.
#[derive(Default)]
pub struct Tessellator {
    stroker: StrokeTessellator,
}

impl Tessellator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the geometry of every command in `list` to `out`.
    pub fn tessellate(&mut self, list: &DrawList, out: &mut Mesh) {
        for cmd in list.items() {
            match cmd {
                DrawCmd::Stroke(stroke) => self.stroke(stroke, out),
                DrawCmd::Clear(clear) => {
                    let color = clear.color.to_array();
                    let base = out.vertices.len() as u32;
                    out.vertices.extend(clear.quad.map(|p| StrokeVertex::new(p, color)));
                    out.indices.extend([0, 1, 2, 0, 2, 3].map(|i| base + i));
                }
            }
        }
    }

    fn stroke(&mut self, stroke: &StrokeCmd, out: &mut Mesh) {
        let color = stroke.color.to_array();
        let options = StrokeOptions::tolerance(TOLERANCE)
            .with_line_width(stroke.width)
            .with_line_join(LineJoin::Miter)
            .with_miter_limit(MITER_LIMIT);

        let path = stroke.path.to_lyon();
        let mut builder = BuffersBuilder::new(out, |v: lyon::tessellation::StrokeVertex| {
            StrokeVertex::new(v.position().into(), color)
        });
        if let Err(e) = self.stroker.tessellate_path(&path, &options, &mut builder) {
            log::warn!("stroke tessellation failed: {e:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Path;
    use crate::coords::{Affine2, CornerRadii, Rect};
    use crate::paint::Color;

    fn open(points: &[Vec2]) -> Path {
        let mut p = Path::new();
        for &q in points {
            p.line_to(q);
        }
        p
    }

    fn mesh(list: &DrawList) -> Mesh {
        let mut out = Mesh::new();
        Tessellator::new().tessellate(list, &mut out);
        out
    }

    #[test]
    fn segment_is_as_wide_as_the_line() {
        let mut list = DrawList::new();
        list.push_stroke(open(&[Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)]), Color::BLACK, 2.0);

        let out = mesh(&list);
        assert!(!out.indices.is_empty());
        assert_eq!(out.indices.len() % 3, 0);
        assert!(out.vertices.iter().all(|v| (v.pos[1].abs() - 1.0).abs() < 1e-4));
        assert!(out.vertices.iter().all(|v| v.color == [0.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn closed_outline_stays_near_its_edges() {
        let mut path = Path::new();
        path.round_rect(Affine2::IDENTITY, Rect::new(0.0, 0.0, 10.0, 10.0), CornerRadii::zero());
        let mut list = DrawList::new();
        list.push_stroke(path, Color::BLACK, 1.0);

        let out = mesh(&list);
        for v in &out.vertices {
            let [x, y] = v.pos;
            assert!((-0.5 - 1e-4..=10.5 + 1e-4).contains(&x), "{x}");
            assert!((-0.5 - 1e-4..=10.5 + 1e-4).contains(&y), "{y}");
        }
    }

    #[test]
    fn clear_is_two_triangles_in_background_color() {
        let mut list = DrawList::new();
        list.push_clear(Rect::new(0.0, 0.0, 5.0, 5.0).corners(), Color::WHITE);

        let out = mesh(&list);
        assert_eq!(out.vertices.len(), 4);
        assert_eq!(out.indices, vec![0, 1, 2, 0, 2, 3]);
        assert!(out.vertices.iter().all(|v| v.color == [1.0, 1.0, 1.0, 1.0]));
    }

    #[test]
    fn later_commands_index_their_own_vertices() {
        let mut list = DrawList::new();
        list.push_stroke(open(&[Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)]), Color::BLACK, 2.0);
        list.push_clear(Rect::new(0.0, 0.0, 5.0, 5.0).corners(), Color::WHITE);

        let out = mesh(&list);
        let clear_base = out.vertices.len() as u32 - 4;
        assert_eq!(&out.indices[out.indices.len() - 6..], &[0, 1, 2, 0, 2, 3].map(|i| clear_base + i));
        assert!(out.indices.iter().all(|&i| (i as usize) < out.vertices.len()));
    }
}
