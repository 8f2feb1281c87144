/// One orchestration call's input: the raw query plus optional
/// prior-conversation text. Call-scoped, never stored.
#[derive(Debug, Clone, Default)]
pub struct QueryContext {
    pub query: String,
    /// Prior-conversation text used by contextual retrieval.
    pub history: Option<String>,
}

impl QueryContext {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            history: None,
        }
    }

    pub fn with_history(mut self, history: impl Into<String>) -> Self {
        self.history = Some(history.into());
        self
    }
}
