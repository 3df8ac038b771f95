#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchJson {
        request_id: crate::RequestId,
        path: String,
    },
}
