use crossterm::event::KeyCode;
use holdem_showdown::hand::Street;
use holdem_showdown::locale::Locale;
use holdem_showdown::round::{sample_deals, Deal};
use holdem_showdown::tui::app::{AppState, InputAction};
use holdem_showdown::tui::controller::handle_key;

fn two_deal_app() -> AppState {
    let deals: Vec<Deal> = ["As Kd | Qh Qs | 2c 7d 9h Jc 3s", "Ah Kh | 9c 9d | Qh Jh 9s Th 2c"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    AppState::new(deals, Locale::English).unwrap()
}

#[test]
fn advance_walks_streets_then_wraps_to_next_deal() {
    let mut app = two_deal_app();
    assert_eq!(app.street(), Street::Preflop);
    for street in [Street::Flop, Street::Turn, Street::River] {
        assert!(app.handle_input(InputAction::Advance));
        assert_eq!(app.street(), street);
    }
    assert!(app.outcome().is_some());
    assert!(app.handle_input(InputAction::Advance));
    assert_eq!(app.street(), Street::Preflop);
    assert_eq!(app.deal_position(), (2, 2));
}

#[test]
fn next_deal_cycles() {
    let mut app = two_deal_app();
    let _ = app.handle_input(InputAction::Advance);
    assert!(app.handle_input(InputAction::NextDeal));
    assert_eq!(app.deal_position(), (2, 2));
    assert_eq!(app.street(), Street::Preflop);
    assert!(app.handle_input(InputAction::NextDeal));
    assert_eq!(app.deal_position(), (1, 2));
    assert!(app.error().is_none());
}

#[test]
fn help_toggle() {
    let mut app = two_deal_app();
    assert!(!app.handle_input(InputAction::ToggleHelp));
    assert!(app.help_open());
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(!app.help_open());
}

#[test]
fn key_map() {
    let mut app = AppState::with_samples(Locale::Japanese).unwrap();
    assert_eq!(app.deal_position(), (1, sample_deals().len()));
    assert!(!handle_key(&mut app, KeyCode::Char(' ')));
    assert_eq!(app.street(), Street::Flop);
    assert!(!handle_key(&mut app, KeyCode::Enter));
    assert_eq!(app.street(), Street::Turn);
    assert!(!handle_key(&mut app, KeyCode::Char('n')));
    assert_eq!(app.deal_position().0, 2);

    // help swallows other keys; Esc closes it instead of quitting
    assert!(!handle_key(&mut app, KeyCode::Char('?')));
    assert!(!handle_key(&mut app, KeyCode::Char(' ')));
    assert_eq!(app.street(), Street::Preflop);
    assert!(!handle_key(&mut app, KeyCode::Esc));
    assert!(!app.help_open());

    assert!(handle_key(&mut app, KeyCode::Char('q')));
    assert!(handle_key(&mut app, KeyCode::Esc));
}

#[test]
fn empty_deal_list_is_rejected() {
    assert!(AppState::new(Vec::new(), Locale::English).is_err());
}
