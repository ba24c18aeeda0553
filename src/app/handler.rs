use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::app::view::ActiveView;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::warn;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Loaded { mount_id, outcome } => {
            if state.apply_loaded(mount_id, outcome) {
                if let Some(e) = state.view.failure() {
                    warn!(tab = state.view.tab().title(), error = %e, "view failed to load");
                }
            } else {
                warn!(mount_id, "discarding result for unmounted view");
            }
            vec![]
        }
        AppEvent::Tick => {
            if state.view.is_loading() {
                state.advance_spinner();
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        KeyCode::Char('L') => vec![Action::Logout],
        KeyCode::Char(c) if Tab::from_shortcut(c).is_some() => {
            Tab::from_shortcut(c)
                .and_then(|tab| state.select_tab(tab))
                .into_iter()
                .collect()
        }
        KeyCode::Tab | KeyCode::Right => {
            let tab = state.active_tab.next();
            state.select_tab(tab).into_iter().collect()
        }
        KeyCode::BackTab | KeyCode::Left => {
            let tab = state.active_tab.prev();
            state.select_tab(tab).into_iter().collect()
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.view.select_next();
            vec![]
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.view.select_prev();
            vec![]
        }
        KeyCode::Enter => open_selected(state),
        _ => vec![],
    }
}

/// The card action stubs. Booking history rows have no action.
fn open_selected(state: &AppState) -> Vec<Action> {
    match &state.view {
        ActiveView::Upcoming(view) => view
            .selected_record()
            .map(|trip| Action::ViewTripDetails {
                trip_id: trip.id.clone(),
                destination: trip.destination.clone(),
            })
            .into_iter()
            .collect(),
        ActiveView::Suggestions(view) => view
            .selected_record()
            .map(|s| Action::ExploreDestination {
                suggestion_id: s.id.clone(),
                destination: s.destination.clone(),
            })
            .into_iter()
            .collect(),
        ActiveView::History(_) => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::event::LoadOutcome;
    use crate::config::AppConfig;
    use crate::data::model::{Suggestion, UpcomingTrip};
    use crate::data::source::{parse_collection, FixtureRecord};

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        let trips: Vec<UpcomingTrip> = parse_collection(UpcomingTrip::EMBEDDED).unwrap();
        handle_event(
            &mut state,
            AppEvent::Loaded {
                mount_id: 0,
                outcome: LoadOutcome::Trips(Ok(trips)),
            },
        );
        state
    }

    #[test]
    fn test_number_keys_switch_tabs() {
        let mut state = AppState::new(AppConfig::default());
        let actions = handle_event(&mut state, key(KeyCode::Char('3')));
        assert_eq!(
            actions,
            vec![Action::MountView {
                tab: Tab::Suggestions,
                mount_id: 1
            }]
        );
        assert_eq!(state.active_tab, Tab::Suggestions);

        assert!(handle_event(&mut state, key(KeyCode::Char('3'))).is_empty());
    }

    #[test]
    fn test_tab_key_cycles() {
        let mut state = AppState::new(AppConfig::default());
        handle_event(&mut state, key(KeyCode::Tab));
        assert_eq!(state.active_tab, Tab::History);
        handle_event(&mut state, key(KeyCode::BackTab));
        assert_eq!(state.active_tab, Tab::Upcoming);
    }

    #[test]
    fn test_lowercase_l_does_not_log_out() {
        let mut state = AppState::new(AppConfig::default());
        assert!(handle_event(&mut state, key(KeyCode::Char('l'))).is_empty());
        assert!(!state.should_quit);
    }

    #[test]
    fn test_logout_and_quit_keys() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(handle_event(&mut state, key(KeyCode::Char('L'))), vec![Action::Logout]);
        assert_eq!(handle_event(&mut state, key(KeyCode::Char('q'))), vec![Action::Quit]);
        let ctrl_c = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut state, ctrl_c), vec![Action::Quit]);
        assert_eq!(state.active_tab, Tab::Upcoming);
    }

    #[test]
    fn test_enter_on_trip_requests_details() {
        let mut state = loaded_state();
        handle_event(&mut state, key(KeyCode::Down));
        let actions = handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(
            actions,
            vec![Action::ViewTripDetails {
                trip_id: "2".into(),
                destination: "Agra, Delhi".into(),
            }]
        );
    }

    #[test]
    fn test_enter_while_loading_does_nothing() {
        let mut state = AppState::new(AppConfig::default());
        assert!(handle_event(&mut state, key(KeyCode::Enter)).is_empty());
    }

    #[test]
    fn test_enter_on_suggestion_explores() {
        let mut state = AppState::new(AppConfig::default());
        handle_event(&mut state, key(KeyCode::Char('3')));
        let suggestions: Vec<Suggestion> = parse_collection(Suggestion::EMBEDDED).unwrap();
        handle_event(
            &mut state,
            AppEvent::Loaded {
                mount_id: 1,
                outcome: LoadOutcome::Suggestions(Ok(suggestions)),
            },
        );
        let actions = handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(
            actions,
            vec![Action::ExploreDestination {
                suggestion_id: "1".into(),
                destination: "OOTY".into(),
            }]
        );
    }

    #[test]
    fn test_tick_spins_only_while_loading() {
        let mut state = AppState::new(AppConfig::default());
        handle_event(&mut state, AppEvent::Tick);
        assert_eq!(state.spinner_frame, 1);

        let mut state = loaded_state();
        handle_event(&mut state, AppEvent::Tick);
        assert_eq!(state.spinner_frame, 0);
    }
}
