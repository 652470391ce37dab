#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use splitpane_layout::{
    ContainerSize, GestureEvent, Orientation, PointerPosition, ResizeState, UpdateConfig,
};

#[derive(Debug, Arbitrary)]
enum Op {
    Start {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
    Move { x: i32, y: i32 },
    End,
    SetDraggable(bool),
    Flip,
    SetFraction(f64),
    SetLimits(f64, f64),
}

#[derive(Debug, Arbitrary)]
struct Input {
    vertical: bool,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let orientation = if input.vertical {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    };
    let update = UpdateConfig::none()
        .on_resize(|fraction| Some(fraction.get()))
        .on_resize_started(-1.0)
        .on_resize_ended(-2.0);
    let mut state = ResizeState::new(orientation);

    for op in input.ops.into_iter().take(512) {
        let before = state;
        let event = match op {
            Op::Start {
                x,
                y,
                width,
                height,
            } => GestureEvent::DragStart {
                position: PointerPosition::new(x, y),
                container: ContainerSize::new(width, height),
            },
            Op::Move { x, y } => GestureEvent::DragMove {
                position: PointerPosition::new(x, y),
            },
            Op::End => GestureEvent::DragEnd {
                position: PointerPosition::ORIGIN,
            },
            Op::SetDraggable(flag) => {
                state = state.with_draggable(flag);
                continue;
            }
            Op::Flip => {
                state = state.with_orientation(state.orientation().flipped());
                continue;
            }
            Op::SetFraction(value) => {
                state = state.with_splitter_fraction(value);
                continue;
            }
            Op::SetLimits(a, b) => {
                state = state.with_resize_limits(a, b);
                continue;
            }
        };

        let (next, msg) = state.transition(event, &update);
        let fraction = next.splitter_fraction().get();
        assert!((0.0..=1.0).contains(&fraction), "fraction OOB: {fraction}");
        let limits = next.resize_limits();
        assert!(limits.min().get() <= limits.max().get(), "limits unordered");

        if !before.draggable() {
            assert_eq!(next, before, "non-draggable state changed");
            assert!(msg.is_none(), "non-draggable state notified");
        } else if matches!(event, GestureEvent::DragMove { .. }) && before.is_dragging() {
            assert!(limits.contains(next.splitter_fraction()), "drag escaped limits");
        }
        state = next;
    }
});
