#![no_main]

use libfuzzer_sys::fuzz_target;
use splitpane_layout::{GestureInput, Orientation, ResizeState, UpdateConfig};
use splitpane_web::{SplitterCaptureAdapter, parse_raw_input};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(Some(event)) = parse_raw_input(json) else {
        return;
    };

    // Every decoded event maps to a gesture and can be dispatched.
    assert!(event.gesture().is_some(), "decoded event without gesture");
    let mut adapter = SplitterCaptureAdapter::new();
    let dispatch = adapter.dispatch(
        &event,
        ResizeState::new(Orientation::Horizontal),
        &UpdateConfig::<()>::none(),
    );
    let fraction = dispatch.state.splitter_fraction().get();
    assert!((0.0..=1.0).contains(&fraction), "fraction OOB: {fraction}");
});
