//! Full-frame rendering tests

use super::*;
use crate::test_utils::{create_test_state, create_test_state_with_locale, TestTerminal};
use zdash_app::handler::update;
use zdash_app::message::Message;
use zdash_app::{AppState, LoadStatus};
use zdash_bridge::ExecResult;
use zdash_core::Locale;

const SAMPLE: &str = "\
name=NeoZygisk
version=v2.3 (312)
author=JingMatrix
description=Zygisk API
root_implementation=KernelSU
device_kernel=5.10.198
device_sdk=34
device_abi=arm64-v8a
monitor_status=tracing
zygote_64_status=injected
daemon_64_status=crashed
modules_count=3
modules_list=shamiko,lsposed,playintegrity
";

fn loaded_state(locale: Locale) -> AppState {
    let mut state = create_test_state_with_locale(locale);
    update(
        &mut state,
        Message::PropertiesFetched {
            result: ExecResult::success(SAMPLE),
        },
    );
    state
}

fn draw(term: &mut TestTerminal, state: &AppState) {
    term.draw_with(|frame| view(frame, state));
}

#[test]
fn test_initial_frame_shows_placeholders() {
    let state = create_test_state();
    let mut term = TestTerminal::new();

    draw(&mut term, &state);

    assert!(term.buffer_contains("NeoZygisk"));
    assert!(term.buffer_contains("Basic Information"));
    assert!(term.buffer_contains("ℹ -"));
    assert!(term.buffer_contains("○"));
}

#[test]
fn test_loaded_frame_shows_all_sections() {
    let state = loaded_state(Locale::En);
    let mut term = TestTerminal::new();

    draw(&mut term, &state);

    assert!(term.buffer_contains("v2.3 (312)"));
    assert!(term.buffer_contains("JingMatrix"));
    assert!(term.buffer_contains("KernelSU"));
    assert!(term.buffer_contains("5.10.198"));
    assert!(term.buffer_contains("arm64-v8a"));
    assert!(term.buffer_contains("✔ Tracing"));
    assert!(term.buffer_contains("✔ Injected"));
    assert!(term.buffer_contains("✖ Crashed"));
    assert!(term.buffer_contains("● Updated"));
}

#[test]
fn test_chinese_frame() {
    let state = loaded_state(Locale::Zh);
    let mut term = TestTerminal::new();

    draw(&mut term, &state);

    assert!(term.buffer_contains("基本信息"));
    assert!(term.buffer_contains("中文"));
    assert!(term.buffer_contains(label(Locale::Zh, "crashed")));
}

#[test]
fn test_failed_load_shows_placeholder_and_error() {
    let mut state = create_test_state();
    update(
        &mut state,
        Message::PropertiesFetchFailed {
            error: "sh: not found".to_string(),
        },
    );
    assert_eq!(state.load_status, LoadStatus::BridgeError);
    let mut term = TestTerminal::with_size(100, 24);

    draw(&mut term, &state);

    assert!(term.buffer_contains("NeoZygisk (Error)"));
    assert!(term.buffer_contains("✗ sh: not found"));
}

#[test]
fn test_language_menu_overlay() {
    let mut state = loaded_state(Locale::En);
    update(&mut state, Message::ToggleLanguageMenu);
    assert_eq!(state.ui_mode, UiMode::LanguageMenu);
    let mut term = TestTerminal::new();

    draw(&mut term, &state);

    assert!(term.buffer_contains("✔ English"));
    assert!(term.buffer_contains("中文"));
}

#[test]
fn test_modules_modal_overlay() {
    let mut state = loaded_state(Locale::En);
    update(&mut state, Message::ShowModules);
    let mut term = TestTerminal::new();

    draw(&mut term, &state);

    assert!(term.buffer_contains("Running Modules (3)"));
    assert!(term.buffer_contains("› lsposed"));
}

#[test]
fn test_compact_layout_stacks_cards() {
    let state = loaded_state(Locale::En);
    let mut term = TestTerminal::compact();

    draw(&mut term, &state);

    let content = term.content();
    let info_line = content.lines().position(|l| l.contains("Basic Information"));
    let device_line = content.lines().position(|l| l.contains("Device"));
    assert!(info_line.is_some());
    assert!(device_line > info_line);
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let state = loaded_state(Locale::En);
    let mut term = TestTerminal::with_size(10, 4);

    draw(&mut term, &state);
}
