#![forbid(unsafe_code)]

//! Property tests for the drag/resize state machine.
//!
//! Two invariants hold for every pointer input: classification never
//! produces opposing edge bits, and no resize sequence shrinks a window
//! below its minimum size on either axis.

use fenster_core::geometry::{Box2, Point, Size};
use fenster_widgets::drag::{DragMode, DragResizeController, DragUpdate};
use proptest::prelude::*;

const HEADER: f32 = 60.0;
const MARGIN: f32 = 7.0;

fn resize_mode(index: usize) -> DragMode {
    match index {
        0 => DragMode::TOP,
        1 => DragMode::BOTTOM,
        2 => DragMode::LEFT,
        3 => DragMode::RIGHT,
        4 => DragMode::TOP | DragMode::LEFT,
        5 => DragMode::TOP | DragMode::RIGHT,
        6 => DragMode::BOTTOM | DragMode::LEFT,
        _ => DragMode::BOTTOM | DragMode::RIGHT,
    }
}

proptest! {
    #[test]
    fn classify_never_sets_opposing_bits(
        x in -50.0f32..450.0,
        y in -50.0f32..350.0,
        width in 20.0f32..400.0,
        height in 20.0f32..300.0,
        resizable in proptest::bool::ANY,
    ) {
        let mode = DragResizeController::classify(
            Point::new(x, y),
            Size::new(width, height),
            resizable,
            HEADER,
            MARGIN,
        );

        prop_assert!(!(mode.contains(DragMode::TOP) && mode.contains(DragMode::BOTTOM)));
        prop_assert!(!(mode.contains(DragMode::LEFT) && mode.contains(DragMode::RIGHT)));

        // MOVE never combines with edge bits.
        if mode.contains(DragMode::MOVE) {
            prop_assert_eq!(mode, DragMode::MOVE);
        }

        if !resizable {
            prop_assert!(mode == DragMode::empty() || mode == DragMode::MOVE);
        }
    }

    #[test]
    fn resize_sequences_respect_min_size(
        mode_index in 0usize..8,
        start_x in 0.0f32..200.0,
        start_y in 0.0f32..200.0,
        extra_w in 0.0f32..300.0,
        extra_h in 0.0f32..300.0,
        pointer_seq in prop::collection::vec(
            (-500.0f32..1500.0, -500.0f32..1500.0),
            1..24,
        ),
    ) {
        let min = Size::new(150.0, 80.0);
        let parent = Size::new(800.0, 600.0);
        let position = Point::new(start_x, start_y);
        let size = Size::new(min.width + extra_w, min.height + extra_h);

        let mut drag = DragResizeController::new();
        drag.begin_drag(resize_mode(mode_index), position, position, size);

        let mut committed = Box2::from_pos_size(position, size);
        for (px, py) in pointer_seq {
            let update = drag.update_drag(Point::new(px, py), committed, min, parent);
            let Some(DragUpdate::Resized(rect)) = update else {
                panic!("resize drag must produce a resize");
            };

            prop_assert!(rect.width() >= min.width - 1e-3);
            prop_assert!(rect.height() >= min.height - 1e-3);
            prop_assert!(rect.left <= rect.right);
            prop_assert!(rect.top <= rect.bottom);

            committed = rect;
        }
    }

    #[test]
    fn move_sequences_stay_inside_parent(
        start_x in 0.0f32..600.0,
        start_y in 0.0f32..450.0,
        grab_dx in 0.0f32..200.0,
        grab_dy in 0.0f32..60.0,
        pointer_seq in prop::collection::vec(
            (-500.0f32..1500.0, -500.0f32..1500.0),
            1..24,
        ),
    ) {
        let parent = Size::new(800.0, 600.0);
        let size = Size::new(200.0, 150.0);
        let mut position = Point::new(start_x, start_y);

        let mut drag = DragResizeController::new();
        drag.begin_drag(
            DragMode::MOVE,
            position + Size::new(grab_dx, grab_dy),
            position,
            size,
        );

        for (px, py) in pointer_seq {
            let committed = Box2::from_pos_size(position, size);
            let update = drag.update_drag(Point::new(px, py), committed, Size::ZERO, parent);
            let Some(DragUpdate::Moved(next)) = update else {
                panic!("move drag must produce a move");
            };

            prop_assert!(next.x >= 0.0 && next.x <= parent.width - size.width);
            prop_assert!(next.y >= 0.0 && next.y <= parent.height - size.height);
            position = next;
        }
    }
}
