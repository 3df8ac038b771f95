use std::sync::Once;

use panel_core::{update, AppState, Effect, Msg, Panel, LOADING_TEXT};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(panel_logging::initialize_for_tests);
}

fn click(state: AppState, panel: Panel) -> (AppState, Vec<Effect>) {
    update(state, Msg::PanelClicked(panel))
}

#[test]
fn click_sets_placeholder_and_emits_one_fetch() {
    init_logging();
    let state = AppState::new();

    let (mut next, effects) = click(state, Panel::Profile);

    assert_eq!(next.region(Panel::Profile), LOADING_TEXT);
    assert!(next.consume_dirty());
    assert_eq!(
        effects,
        vec![Effect::FetchJson {
            request_id: 1,
            path: "/profile".to_string(),
        }]
    );
}

#[test]
fn click_reads_fields_at_firing_time() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = update(state, Msg::QueryEdited("rust dev".to_string()));
    assert!(effects.is_empty());

    let (state, effects) = click(state, Panel::Search);
    assert_eq!(
        effects,
        vec![Effect::FetchJson {
            request_id: 1,
            path: "/search?q=rust%20dev".to_string(),
        }]
    );

    // An edit after the firing only affects the next firing.
    let (state, _effects) = update(state, Msg::QueryEdited("python".to_string()));
    let (_state, effects) = click(state, Panel::Search);
    assert_eq!(
        effects,
        vec![Effect::FetchJson {
            request_id: 2,
            path: "/search?q=python".to_string(),
        }]
    );
}

#[test]
fn skill_field_drives_the_projects_path() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = click(state, Panel::Projects);
    assert_eq!(
        effects,
        vec![Effect::FetchJson {
            request_id: 1,
            path: "/projects".to_string(),
        }]
    );

    let (state, _effects) = update(state, Msg::SkillEdited("data engineering".to_string()));
    let (_state, effects) = click(state, Panel::Projects);
    assert_eq!(
        effects,
        vec![Effect::FetchJson {
            request_id: 2,
            path: "/projects?skill=data%20engineering".to_string(),
        }]
    );
}

#[test]
fn panels_are_independent() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = click(state, Panel::Profile);
    let (state, _effects) = click(state, Panel::TopSkills);

    let (state, _effects) = update(
        state,
        Msg::RequestSettled {
            request_id: 1,
            outcome: Err("boom".to_string()),
        },
    );

    assert_eq!(state.region(Panel::Profile), "boom");
    assert_eq!(state.region(Panel::TopSkills), LOADING_TEXT);
    assert_eq!(state.region(Panel::Search), "");
    assert_eq!(state.region(Panel::Projects), "");
}

#[test]
fn edits_mark_dirty_without_effects() {
    init_logging();
    let state = AppState::new();

    let (mut state, effects) = update(state, Msg::SkillEdited("sql".to_string()));
    assert!(effects.is_empty());
    assert!(state.consume_dirty());

    let view = state.view();
    assert_eq!(view.skill, "sql");
    assert_eq!(view.query, "");
    assert_eq!(view.pending_requests, 0);
}
