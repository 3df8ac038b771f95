//! Panel core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod panel;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use panel::{Panel, TOP_SKILLS_LIMIT};
pub use state::{AppState, RequestId, LOADING_TEXT};
pub use update::update;
pub use view_model::{AppViewModel, PanelView};
