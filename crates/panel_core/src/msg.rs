#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the search query box.
    QueryEdited(String),
    /// User edited the project skill filter box.
    SkillEdited(String),
    /// User fired one of the panel triggers.
    PanelClicked(crate::Panel),
    /// A request settled; `Err` carries the text to render in its place.
    RequestSettled {
        request_id: crate::RequestId,
        outcome: Result<serde_json::Value, String>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
