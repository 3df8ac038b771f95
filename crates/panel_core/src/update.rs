use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueryEdited(text) => {
            state.set_query(text);
            Vec::new()
        }
        Msg::SkillEdited(text) => {
            state.set_skill(text);
            Vec::new()
        }
        Msg::PanelClicked(panel) => {
            // Field values are read here, at firing time; edits after this
            // point belong to the next firing.
            let path = panel.request_path(state.query(), state.skill());
            let request_id = state.begin_request(panel);
            vec![Effect::FetchJson { request_id, path }]
        }
        Msg::RequestSettled {
            request_id,
            outcome,
        } => {
            let text = match outcome {
                Ok(value) => render_json(&value),
                Err(message) => message,
            };
            state.settle_request(request_id, text);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn render_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|err| err.to_string())
}
