//! Integration tests for the prediction pipeline and session behaviour.

use diamond_predict::features::FormSession;
use diamond_predict::model::tree::{DecisionTree, Node};
use diamond_predict::pipeline::{estimate, format_price, UNKNOWN_PRICE};
use diamond_predict::state::{AppState, FieldEvent};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn sample_tree() -> DecisionTree {
    DecisionTree {
        n_features: 4,
        nodes: vec![
            Node::Split {
                feature: 0,
                threshold: 1.0,
                left: 1,
                right: 2,
            },
            Node::Leaf { value: 500.0 },
            Node::Leaf { value: 4500.0 },
        ],
    }
}

fn full_session() -> FormSession {
    FormSession {
        carat_text: "1.0".to_string(),
        cut: Some("Ideal"),
        color: Some("D"),
        clarity: Some("IF"),
    }
}

fn assert_currency_format(text: &str) {
    let digits = text
        .strip_prefix('$')
        .unwrap_or_else(|| panic!("'{text}' should start with '$'"));
    let (whole, cents) = digits
        .split_once('.')
        .unwrap_or_else(|| panic!("'{text}' should contain a decimal point"));
    assert!(!whole.is_empty() && whole.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(cents.len(), 2, "'{text}' should have exactly two decimals");
    assert!(cents.chars().all(|c| c.is_ascii_digit()));
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[test]
fn prices_format_with_two_decimals() {
    assert_eq!(format_price(1234.5), "$1234.50");
    assert_eq!(format_price(0.0), "$0.00");
    assert_eq!(format_price(1234.567), "$1234.57");
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

#[test]
fn incomplete_session_reports_unknown() {
    let result = estimate(&sample_tree(), &FormSession::default()).unwrap();
    assert_eq!(result, UNKNOWN_PRICE);
}

#[test]
fn incomplete_session_never_reaches_the_predictor() {
    // Walking this tree would panic; the short-circuit must come first.
    let unwalkable = DecisionTree {
        n_features: 4,
        nodes: vec![],
    };
    let result = estimate(&unwalkable, &FormSession::default()).unwrap();
    assert_eq!(result, UNKNOWN_PRICE);
}

#[test]
fn complete_session_is_priced_and_formatted() {
    let result = estimate(&sample_tree(), &full_session()).unwrap();
    assert_eq!(result, "$500.00");
    assert_currency_format(&result);
}

#[test]
fn estimates_are_idempotent() {
    let tree = sample_tree();
    let session = full_session();
    assert_eq!(estimate(&tree, &session), estimate(&tree, &session));
}

#[test]
fn empty_and_zero_carat_are_distinguished() {
    let tree = sample_tree();

    let mut session = full_session();
    session.carat_text.clear();
    assert_eq!(estimate(&tree, &session).unwrap(), UNKNOWN_PRICE);

    session.carat_text = "0".to_string();
    let result = estimate(&tree, &session).unwrap();
    assert_ne!(result, UNKNOWN_PRICE, "carat 0 is odd but predictable");
    assert_currency_format(&result);
}

#[test]
fn heavier_stone_takes_the_right_branch() {
    let mut session = full_session();
    session.carat_text = "2.5".to_string();
    assert_eq!(estimate(&sample_tree(), &session).unwrap(), "$4500.00");
}

// ---------------------------------------------------------------------------
// Session state machine
// ---------------------------------------------------------------------------

#[test]
fn state_starts_unknown_and_computes_on_events() {
    let mut state = AppState::new(sample_tree());
    assert_eq!(state.price_text, UNKNOWN_PRICE);

    state.session = full_session();
    state.handle_event(FieldEvent::CaratEdited);
    assert_eq!(state.price_text, "$500.00");
    assert!(state.status_message.is_none());
}

#[test]
fn state_returns_to_unknown_when_a_field_clears() {
    let mut state = AppState::new(sample_tree());
    state.session = full_session();
    state.handle_event(FieldEvent::CaratEdited);
    assert_eq!(state.price_text, "$500.00");

    state.session.clarity = None;
    state.handle_event(FieldEvent::ClaritySelected);
    assert_eq!(state.price_text, UNKNOWN_PRICE);
}

#[test]
fn out_of_scale_label_is_recoverable() {
    let mut state = AppState::new(sample_tree());
    state.session = full_session();
    state.session.cut = Some("Shiny");
    state.handle_event(FieldEvent::CutSelected);
    assert_eq!(state.price_text, UNKNOWN_PRICE);
    assert!(state.status_message.is_some(), "failure should be surfaced");

    // The session stays live: a valid selection clears the error.
    state.session.cut = Some("Ideal");
    state.handle_event(FieldEvent::CutSelected);
    assert_eq!(state.price_text, "$500.00");
    assert!(state.status_message.is_none());
}
