//! Integration tests for the keyboard layout public API.
//!
//! These tests build layouts only through the crate-root re-exports and check
//! the properties every layout must satisfy, plus the reference three-key
//! board.

use keyboard_layout_core::{Key, KeyOptions, Layout, LayoutError, Led, LedLookup};

// ── Fixtures ──────────────────────────────────────────────────────────────────

fn reference_leds() -> Vec<Led> {
    vec![
        Led::new("l1", 0.0, 0.0),
        Led::new("l2", 2.0, 1.5),
        Led::new("l3", 3.0, 3.0),
    ]
}

fn reference_keys() -> Vec<Key> {
    vec![
        Key::new("k1", 0.0, 0.0, KeyOptions::default().with_led("l1")),
        Key::new(
            "k2",
            2.0,
            1.5,
            KeyOptions::default()
                .with_width(1.5)
                .with_height(2.0)
                .with_led("l2"),
        ),
        Key::new("k3", 5.0, 0.0, KeyOptions::default()),
    ]
}

/// A 4×N grid where every even column has an LED beneath it.
fn grid(columns: usize) -> (Vec<Key>, Vec<Led>) {
    let mut keys = Vec::new();
    let mut leds = Vec::new();
    for row in 0..4 {
        for col in 0..columns {
            let key_id = format!("r{row}c{col}");
            let (x, y) = (col as f64, row as f64);
            if col % 2 == 0 {
                let led_id = format!("led-{row}-{col}");
                leds.push(Led::new(led_id.as_str(), x + 0.5, y + 0.5));
                keys.push(Key::new(key_id, x, y, KeyOptions::default().with_led(led_id)));
            } else {
                keys.push(Key::new(key_id, x, y, KeyOptions::default()));
            }
        }
    }
    (keys, leds)
}

// ── Reference scenario ────────────────────────────────────────────────────────

#[test]
fn test_reference_layout_led_for_key() {
    let layout = Layout::new(reference_keys(), reference_leds()).expect("valid layout");

    assert_eq!(layout.led_for_key("k1"), Some(&Led::new("l1", 0.0, 0.0)));
    assert_eq!(layout.led_for_key("k3"), None);
}

#[test]
fn test_reference_layout_key_for_led() {
    let layout = Layout::new(reference_keys(), reference_leds()).expect("valid layout");

    let k1 = layout.key_for_led("l1").expect("l1 sits under k1");
    assert_eq!(k1.id().as_str(), "k1");
    assert_eq!((k1.x(), k1.y()), (0.0, 0.0));
    assert_eq!((k1.width(), k1.height()), (1.0, 1.0));
    assert_eq!(k1.led().map(|l| l.as_str()), Some("l1"));

    assert_eq!(layout.key_for_led("l3"), None);
}

#[test]
fn test_reference_layout_returns_inputs_in_order() {
    let layout = Layout::new(reference_keys(), reference_leds()).expect("valid layout");

    assert_eq!(layout.keys(), reference_keys().as_slice());
    assert_eq!(layout.leds(), reference_leds().as_slice());
}

#[test]
fn test_reference_layout_k2_keeps_explicit_size() {
    let layout = Layout::new(reference_keys(), reference_leds()).expect("valid layout");
    let k2 = layout.key_for_led("l2").expect("l2 sits under k2");
    assert_eq!((k2.width(), k2.height()), (1.5, 2.0));
}

// ── Properties over a larger board ────────────────────────────────────────────

#[test]
fn test_every_declared_led_resolves_in_both_directions() {
    let (keys, leds) = grid(15);
    let layout = Layout::new(keys.clone(), leds).expect("valid grid");

    for key in &keys {
        match key.led() {
            Some(led_id) => {
                let led = layout.led_for_key(key.id().as_str()).expect("declared LED resolves");
                assert_eq!(led.id(), led_id);
                assert_eq!(layout.key_for_led(led_id.as_str()), Some(key));
            }
            None => {
                assert_eq!(layout.led_for_key(key.id().as_str()), None);
                assert_eq!(layout.lookup_led(key.id().as_str()), LedLookup::NoAssociation);
            }
        }
    }
}

#[test]
fn test_association_count_matches_keys_with_leds() {
    let (keys, leds) = grid(6);
    let expected = keys.iter().filter(|k| k.led().is_some()).count();
    let layout = Layout::new(keys, leds).expect("valid grid");
    assert_eq!(layout.associations().count(), expected);
}

#[test]
fn test_unreferenced_leds_have_no_key() {
    let (keys, mut leds) = grid(3);
    leds.push(Led::new("status", 20.0, 0.0));
    let layout = Layout::new(keys, leds).expect("valid grid");

    assert_eq!(layout.key_for_led("status"), None);
    assert!(layout.led("status").is_some());
}

#[test]
fn test_missing_led_reference_is_reported_with_both_ids() {
    let (mut keys, leds) = grid(2);
    keys.push(Key::new("fn", 9.0, 9.0, KeyOptions::default().with_led("ghost")));

    let err = Layout::new(keys, leds).expect_err("ghost LED must be rejected");
    match err {
        LayoutError::MissingLedReference { key_id, led_id } => {
            assert_eq!(key_id.as_str(), "fn");
            assert_eq!(led_id.as_str(), "ghost");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_layout_can_be_shared_across_threads() {
    let layout = std::sync::Arc::new(
        Layout::new(reference_keys(), reference_leds()).expect("valid layout"),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let layout = std::sync::Arc::clone(&layout);
            std::thread::spawn(move || layout.led_for_key("k2").map(|l| l.id().to_string()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("reader thread"), Some("l2".to_string()));
    }
}
