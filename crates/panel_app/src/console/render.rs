use panel_core::AppViewModel;

/// Formats the whole console frame: field values, then the four panels.
pub fn frame(view: &AppViewModel) -> String {
    let mut out = String::new();

    out.push_str(&format!("q: {:?}  skill: {:?}", view.query, view.skill));
    if view.pending_requests > 0 {
        out.push_str(&format!("  ({} in flight)", view.pending_requests));
    }
    out.push('\n');

    for panel in &view.panels {
        out.push_str(&format!("--- {} ---\n", panel.panel.label()));
        if panel.content.is_empty() {
            out.push_str("(empty)\n");
        } else {
            out.push_str(&panel.content);
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use panel_core::{update, AppState, Msg, Panel, LOADING_TEXT};

    use super::frame;

    #[test]
    fn frame_lists_every_panel() {
        let text = frame(&AppState::new().view());

        assert!(text.contains("--- Profile ---"));
        assert!(text.contains("--- Search ---"));
        assert!(text.contains("--- Projects ---"));
        assert!(text.contains("--- Top skills ---"));
        assert!(text.contains("(empty)"));
    }

    #[test]
    fn frame_shows_fields_placeholder_and_pending_count() {
        let state = AppState::new();
        let (state, _effects) = update(state, Msg::QueryEdited("rust".to_string()));
        let (state, _effects) = update(state, Msg::PanelClicked(Panel::Search));

        let text = frame(&state.view());

        assert!(text.contains("q: \"rust\""));
        assert!(text.contains("skill: \"\""));
        assert!(text.contains("(1 in flight)"));
        assert!(text.contains(LOADING_TEXT));
    }

    #[test]
    fn frame_prints_settled_content_verbatim() {
        let state = AppState::new();
        let (state, _effects) = update(state, Msg::PanelClicked(Panel::Profile));
        let (state, _effects) = update(
            state,
            Msg::RequestSettled {
                request_id: 1,
                outcome: Err("not found".to_string()),
            },
        );

        let text = frame(&state.view());

        assert!(text.contains("not found"));
        assert!(!text.contains(LOADING_TEXT));
    }
}
