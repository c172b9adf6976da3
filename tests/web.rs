#![cfg(target_arch = "wasm32")]

use ninja_star::geometry::{circle_outline, flatten, star_outline};
use ninja_star::input::Command;
use wasm_bindgen_test::*;
use web_sys::{KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn key_event(key: &str) -> KeyboardEvent {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap()
}

#[wasm_bindgen_test]
fn keyboard_events_map_to_commands() {
    assert_eq!(Command::from_event(&key_event("1")), Some(Command::Reset));
    assert_eq!(Command::from_event(&key_event("b")), Some(Command::Swing));
    assert_eq!(Command::from_event(&key_event("3")), Some(Command::Shade));
    assert_eq!(Command::from_event(&key_event("Shift")), None);
}

#[wasm_bindgen_test]
fn vertex_data_copies_into_typed_array() {
    let star = js_sys::Float32Array::from(flatten(&star_outline()).as_slice());
    assert_eq!(star.length(), 20);
    assert_eq!(star.to_vec()[2..6], [0.5, 0.0, 1.0, 1.0]);

    let circle = circle_outline(72).unwrap();
    let hole = js_sys::Float32Array::from(flatten(&circle).as_slice());
    assert_eq!(hole.length(), 140);
    assert_eq!(hole.get_index(0), 1.0);
}
