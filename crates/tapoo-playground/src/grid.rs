//! Grid painter.

use tapoo_engine::canvas::PathContext;

use crate::config::GridStyle;

/// Number of segments added by one [`draw_grid`] call.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct GridLines {
    pub vertical: usize,
    pub horizontal: usize,
}

/// Strokes a lattice of lines `style.pitch` apart onto `ctx`.
///
/// Vertical lines sit at `x = origin, origin + pitch, ...` while `x < extent_x + 1`
/// and run from `(x, start_width)` down to `(x, extent_y)`. Horizontal lines sit at
/// `y = origin, ...` while `y < extent_y + 1` and run from `(start_height, y)` to
/// `(extent_x, y)`.
///
/// The stroke style is set to `style.color` and left that way. Every segment is
/// painted by a single `stroke` call. Inputs are not validated: odd offsets give
/// odd segments, and a non-positive or non-finite pitch or extent gives none.
pub fn draw_grid<C>(
    ctx: &mut C,
    start_width: f32,
    start_height: f32,
    style: &GridStyle,
    extent: (f32, f32),
) -> GridLines
where
    C: PathContext + ?Sized,
{
    let (extent_x, extent_y) = extent;
    let mut lines = GridLines::default();

    for x in positions(style.origin, style.pitch, extent_x) {
        ctx.move_to(x, start_width);
        ctx.line_to(x, extent_y);
        lines.vertical += 1;
    }

    for y in positions(style.origin, style.pitch, extent_y) {
        ctx.move_to(start_height, y);
        ctx.line_to(extent_x, y);
        lines.horizontal += 1;
    }

    ctx.set_stroke_style(style.color);
    ctx.stroke();

    lines
}

/// Line positions `origin + i * pitch` strictly below `extent + 1`.
fn positions(origin: f32, pitch: f32, extent: f32) -> impl Iterator<Item = f32> {
    let bounded = pitch > 0.0 && pitch.is_finite() && extent.is_finite() && origin.is_finite();
    let limit = extent + 1.0;

    (0u32..)
        .map(move |i| origin + i as f32 * pitch)
        .take_while(move |&p| bounded && p < limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tapoo_engine::paint::Color;

    use crate::config::GridExtent;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Call {
        MoveTo(f32, f32),
        LineTo(f32, f32),
        Stroke,
        StrokeStyle(Color),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Recorder {
        fn segments(&self) -> Vec<((f32, f32), (f32, f32))> {
            self.calls
                .windows(2)
                .filter_map(|w| match (w[0], w[1]) {
                    (Call::MoveTo(x0, y0), Call::LineTo(x1, y1)) => Some(((x0, y0), (x1, y1))),
                    _ => None,
                })
                .collect()
        }

        fn count(&self, wanted: fn(&Call) -> bool) -> usize {
            self.calls.iter().filter(|&c| wanted(c)).count()
        }
    }

    impl PathContext for Recorder {
        fn move_to(&mut self, x: f32, y: f32) {
            self.calls.push(Call::MoveTo(x, y));
        }

        fn line_to(&mut self, x: f32, y: f32) {
            self.calls.push(Call::LineTo(x, y));
        }

        fn stroke(&mut self) {
            self.calls.push(Call::Stroke);
        }

        fn set_stroke_style(&mut self, color: Color) {
            self.calls.push(Call::StrokeStyle(color));
        }
    }

    fn fixed(start: f32) -> Recorder {
        let mut rec = Recorder::default();
        let style = GridStyle::default();
        let extent = style.extent.resolve(1200.0, 1200.0);
        draw_grid(&mut rec, start, start, &style, extent);
        rec
    }

    // ── counts ────────────────────────────────────────────────────────────

    #[test]
    fn fixed_extent_draws_51_lines_per_axis() {
        let mut rec = Recorder::default();
        let style = GridStyle::default();
        let lines = draw_grid(&mut rec, 0.0, 0.0, &style, (1000.0, 1000.0));

        // 0.5, 20.5, ..., 1000.5: the last one still satisfies `< 1001`.
        assert_eq!(lines, GridLines { vertical: 51, horizontal: 51 });
        assert_eq!(rec.segments().len(), 102);
    }

    #[test]
    fn last_line_sits_at_1000_5() {
        let rec = fixed(0.0);
        let xs: Vec<f32> = rec.segments()[..51].iter().map(|s| s.0.0).collect();
        assert_eq!(xs.first(), Some(&0.5));
        assert_eq!(xs.last(), Some(&1000.5));
        assert!(!xs.contains(&1020.5));
    }

    // ── spacing ───────────────────────────────────────────────────────────

    #[test]
    fn lines_are_exactly_one_pitch_apart() {
        let rec = fixed(0.0);
        let segs = rec.segments();
        let (vertical, horizontal) = segs.split_at(51);

        for pair in vertical.windows(2) {
            assert_eq!(pair[1].0.0 - pair[0].0.0, 20.0);
        }
        for pair in horizontal.windows(2) {
            assert_eq!(pair[1].0.1 - pair[0].0.1, 20.0);
        }
    }

    #[test]
    fn vertical_lines_span_offset_to_extent() {
        let rec = fixed(0.0);
        for ((x0, _), (x1, y1)) in &rec.segments()[..51] {
            assert_eq!(x0, x1);
            assert_eq!(*y1, 1000.0);
        }
        for ((_, y0), (x1, y1)) in &rec.segments()[51..] {
            assert_eq!(y0, y1);
            assert_eq!(*x1, 1000.0);
        }
    }

    // ── offsets ───────────────────────────────────────────────────────────

    #[test]
    fn offsets_shift_only_the_start_coordinate() {
        let rec = fixed(50.0);
        let segs = rec.segments();

        assert_eq!(segs[0], ((0.5, 50.0), (0.5, 1000.0)));
        assert_eq!(segs[51], ((50.0, 0.5), (1000.0, 0.5)));
        // Lines before the offset are still drawn.
        assert!(segs[51..].iter().any(|s| s.0.1 < 50.0));
    }

    #[test]
    fn negative_offsets_are_not_validated() {
        let rec = fixed(-30.0);
        assert_eq!(rec.segments()[0], ((0.5, -30.0), (0.5, 1000.0)));
    }

    // ── stroke ────────────────────────────────────────────────────────────

    #[test]
    fn strokes_once_after_setting_color() {
        let rec = fixed(30.0);

        assert_eq!(rec.count(|c| matches!(c, Call::Stroke)), 1);
        assert_eq!(rec.calls.last(), Some(&Call::Stroke));

        let style = rec.calls[rec.calls.len() - 2];
        let Call::StrokeStyle(color) = style else {
            panic!("expected stroke style before stroke, got {style:?}");
        };
        assert_eq!(color.to_hex(), "#53d80f");
    }

    // ── degenerate input ──────────────────────────────────────────────────

    #[test]
    fn bad_pitch_or_extent_draws_nothing_but_still_strokes() {
        let cases = [
            (0.0, 1000.0),
            (-20.0, 1000.0),
            (f32::NAN, 1000.0),
            (20.0, f32::INFINITY),
            (20.0, f32::NAN),
        ];

        for (pitch, extent) in cases {
            let mut rec = Recorder::default();
            let style = GridStyle { pitch, ..GridStyle::default() };
            let lines = draw_grid(&mut rec, 0.0, 0.0, &style, (extent, extent));
            assert_eq!(lines, GridLines::default(), "pitch {pitch}, extent {extent}");
            assert_eq!(rec.count(|c| matches!(c, Call::Stroke)), 1);
        }
    }

    #[test]
    fn surface_extent_follows_surface_size() {
        let mut rec = Recorder::default();
        let style = GridStyle { extent: GridExtent::Surface, ..GridStyle::default() };
        let extent = style.extent.resolve(800.0, 540.0);
        let lines = draw_grid(&mut rec, 27.0, 27.0, &style, extent);

        // x: 0.5..=800.5 -> 41 lines; y: 0.5..=540.5 -> 28 lines.
        assert_eq!(lines, GridLines { vertical: 41, horizontal: 28 });
        assert_eq!(rec.segments()[0], ((0.5, 27.0), (0.5, 540.0)));
        assert_eq!(rec.segments()[41], ((27.0, 0.5), (800.0, 0.5)));
    }
}
