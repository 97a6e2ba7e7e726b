use proptest::prelude::*;
use trellis::{Bounds, Point, Viewport};

/// Ragged text rows. Each row's bound excludes its line terminator.
struct Buffer(Vec<&'static str>);

impl Bounds for Buffer {
    fn bounds(&self, p: Point) -> Point {
        match self.0.get(p.y as usize) {
            Some(row) => Point::new(
                row.len().saturating_sub(1) as u32,
                self.0.len() as u32 - 1,
            ),
            None => Point::zero(),
        }
    }
}

fn buffer() -> Buffer {
    Buffer(vec![
        "1\n",
        "134\n",
        "1345\n",
        "13456\n",
        "13456789012345\n",
        "13456\n",
        "13\n",
        "1345\n",
        "\n",
    ])
}

fn view() -> Viewport<Buffer> {
    Viewport::new((3, 3), buffer()).unwrap()
}

#[track_caller]
fn check(v: &Viewport<Buffer>, cursor: (u32, u32), offset: (u32, u32)) {
    assert_eq!(v.cursor(), Point::from(cursor), "cursor in {v}");
    assert_eq!(v.offset(), Point::from(offset), "offset in {v}");
}

#[test]
fn test_scroll_then_clamp_to_shorter_row() {
    let mut v = view();
    v.cursor_right();
    check(&v, (1, 0), (0, 0));
    v.cursor_down();
    check(&v, (1, 1), (0, 0));
    v.cursor_right();
    check(&v, (2, 1), (0, 0));
    v.cursor_right();
    check(&v, (2, 1), (1, 0));
    v.cursor_up();
    check(&v, (0, 0), (1, 0));
}

#[test]
fn test_up_onto_shorter_row_without_scroll() {
    let mut v = view();
    v.cursor_down();
    v.cursor_right();
    v.cursor_right();
    check(&v, (2, 1), (0, 0));
    v.cursor_up();
    assert_eq!(v.bounds().bounds(v.point()).x, 1);
    check(&v, (1, 0), (0, 0));
}

#[test]
fn test_climb_out_of_scrolled_region() {
    let mut v = view();
    v.cursor_down();
    v.cursor_down();
    for _ in 0..4 {
        v.cursor_right();
    }
    check(&v, (2, 2), (2, 0));
    v.cursor_up();
    check(&v, (1, 1), (2, 0));
    v.cursor_up();
    check(&v, (0, 0), (1, 0));
    assert_eq!(v.to_string(), "cursor(0, 0); offset(1, 0)");
}

#[test]
fn test_long_row_end_and_back() {
    let mut v = view();
    v.set_cursor_y(4);
    v.end_x();
    assert_eq!(v.point(), Point::new(14, 4));
    check(&v, (2, 2), (12, 2));
    // The next row is shorter: the column is pulled back and the window
    // follows.
    v.cursor_down();
    assert_eq!(v.point(), Point::new(5, 5));
    check(&v, (0, 2), (5, 3));
    v.cursor_home();
    check(&v, (0, 2), (0, 3));
}

#[test]
fn test_edges_are_idempotent() {
    let mut v = view();
    v.cursor_up();
    v.cursor_left();
    v.page_up();
    check(&v, (0, 0), (0, 0));

    v.end_y();
    let at_end = (v.cursor(), v.offset());
    v.cursor_down();
    v.page_down();
    v.cursor_right();
    assert_eq!((v.cursor(), v.offset()), at_end);
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    EndX,
    StartY,
    EndY,
    SetX(u32),
    SetY(u32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Up),
        Just(Op::Down),
        Just(Op::Left),
        Just(Op::Right),
        Just(Op::PageUp),
        Just(Op::PageDown),
        Just(Op::Home),
        Just(Op::EndX),
        Just(Op::StartY),
        Just(Op::EndY),
        (0u32..20).prop_map(Op::SetX),
        (0u32..12).prop_map(Op::SetY),
    ]
}

fn apply(v: &mut Viewport<Buffer>, op: Op) {
    match op {
        Op::Up => v.cursor_up(),
        Op::Down => v.cursor_down(),
        Op::Left => v.cursor_left(),
        Op::Right => v.cursor_right(),
        Op::PageUp => v.page_up(),
        Op::PageDown => v.page_down(),
        Op::Home => v.cursor_home(),
        Op::EndX => v.end_x(),
        Op::StartY => v.start_y(),
        Op::EndY => v.end_y(),
        Op::SetX(x) => v.set_cursor_x(x),
        Op::SetY(y) => v.set_cursor_y(y),
    }
}

proptest! {
    #[test]
    fn point_stays_in_bounds(
        w in 1u32..6,
        h in 1u32..6,
        ops in prop::collection::vec(op(), 0..80),
    ) {
        let mut v = Viewport::new((w, h), buffer()).unwrap();
        for op in ops {
            apply(&mut v, op);
            let p = v.point();
            let b = v.bounds().bounds(p);
            prop_assert!(p.within(b), "{:?} put {} outside {}", op, p, b);
            prop_assert!(v.cursor().x < w && v.cursor().y < h, "{:?}: {}", op, v);
        }
    }
}
