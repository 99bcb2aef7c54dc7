//! Acceptance tests for submitting searches
//!
//! Test scenarios:
//! 1. A search shows the first page and announces the total
//! 2. A blank search is rejected with a notice and leaves the gallery alone
//! 3. A term with no matches says so
//! 4. A new search replaces the gallery and starts again at page 1
//! 5. Notices disappear after a while

use crate::gallery::{GallerySurface, Notice, Phase};
use crate::state::{InputMode, NOTICE_TTL};
use crate::test_harness::{page_response, AcceptanceTestHarness};
use crossterm::event::{KeyCode, KeyModifiers};
use std::time::{Duration, Instant};

#[test]
fn search_shows_first_page_and_total() {
    let mut harness =
        AcceptanceTestHarness::with_responses(vec![page_response(1, 40, 500)]).unwrap();

    harness.search("yellow flowers");

    let output = harness.render_to_string();
    assert!(output.contains("yellow flowers"));
    assert!(output.contains("image-1"));
    assert!(output.contains("Hooray! We found 500 images."));
    assert_eq!(harness.state().input_mode, InputMode::Browsing);
    assert_eq!(harness.requested_pages(), vec![1]);
}

#[test]
fn blank_search_is_rejected_without_touching_gallery() {
    let mut harness =
        AcceptanceTestHarness::with_responses(vec![page_response(1, 40, 500)]).unwrap();
    harness.search("cats");

    // WHEN: the user clears the field and submits
    harness.send_key(KeyCode::Char('/'));
    for _ in 0.."cats".len() {
        harness.send_key(KeyCode::Backspace);
    }
    harness.type_text("  ");
    harness.send_key(KeyCode::Enter);
    harness.tick();

    // THEN: notice shown, still typing, old results kept, nothing fetched
    assert_eq!(
        harness.state().banner().map(|b| b.notice()),
        Some(Notice::EmptyQuery)
    );
    assert_eq!(harness.state().input_mode, InputMode::Typing);
    assert_eq!(harness.controller().surface().len(), 40);
    assert_eq!(harness.requested_pages(), vec![1]);
}

#[test]
fn term_without_matches_reports_no_results() {
    let mut harness =
        AcceptanceTestHarness::with_responses(vec![page_response(1, 0, 0)]).unwrap();

    harness.search("qwxzptv");

    assert!(harness.controller().surface().is_empty());
    assert!(!harness.controller().load_more_visible());
    assert_eq!(harness.controller().phase(), Phase::Idle);

    let output = harness.render_to_string();
    assert!(output.contains("Sorry, there are no images matching your search query."));
}

#[test]
fn new_search_replaces_gallery_and_resets_selection() {
    let mut harness = AcceptanceTestHarness::with_responses(vec![
        page_response(1, 40, 85),
        page_response(1001, 40, 300),
    ])
    .unwrap();

    harness.search("cats");
    harness.send_key(KeyCode::Char('j'));
    harness.send_key(KeyCode::Char('j'));

    harness.send_key_with_mods(KeyCode::Char('f'), KeyModifiers::CONTROL);
    for _ in 0.."cats".len() {
        harness.send_key(KeyCode::Backspace);
    }
    harness.type_text("dogs");
    harness.send_key(KeyCode::Enter);
    harness.tick();

    let gallery = harness.controller().surface();
    assert_eq!(gallery.len(), 40);
    assert_eq!(gallery.get(0).map(|r| r.tags.as_str()), Some("image-1001"));
    assert_eq!(harness.state().scroll.selected(), 0);
    assert_eq!(harness.controller().query().term(), "dogs");
    assert_eq!(harness.requested_pages(), vec![1, 1]);
    assert_eq!(
        harness.state().banner().map(|b| b.notice()),
        Some(Notice::Found(300))
    );
}

#[test]
fn notice_expires_after_ttl() {
    let mut harness =
        AcceptanceTestHarness::with_responses(vec![page_response(1, 40, 85)]).unwrap();

    let start = Instant::now();
    harness.send_key(KeyCode::Char('/'));
    harness.type_text("cats");
    harness.send_key(KeyCode::Enter);
    harness.tick_at(start);
    assert!(harness.state().banner().is_some());

    harness.tick_at(start + NOTICE_TTL + Duration::from_millis(1));
    assert!(harness.state().banner().is_none());
}

#[test]
fn q_quits_only_outside_the_search_bar() {
    let mut harness = AcceptanceTestHarness::with_responses(vec![]).unwrap();

    harness.send_key(KeyCode::Char('/'));
    harness.type_text("q");
    assert!(harness.is_running());

    harness.send_key(KeyCode::Esc);
    harness.send_key(KeyCode::Char('q'));
    assert!(!harness.is_running());
}
