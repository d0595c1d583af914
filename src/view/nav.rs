/// The two coupled views of the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    StatusBoard,
    LogBrowser,
}

/// Selection state of the log browser's expanded detail card.
///
/// `Closing` keeps the card in the tree for the duration of the closing
/// animation; the owner transitions it to `None` via
/// [`MonitorState::finish_close`](crate::view::MonitorState::finish_close)
/// once the delay elapses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    None,
    Open(String),
    Closing(String),
}

impl Selection {
    /// Id of the execution whose detail card is currently in the tree,
    /// including one that is still animating closed.
    pub fn open_id(&self) -> Option<&str> {
        match self {
            Selection::None => None,
            Selection::Open(id) | Selection::Closing(id) => Some(id),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }
}

#[derive(Debug)]
pub struct ViewState {
    pub section: Section,
    pub selection: Selection,
    /// Column count of the log-browser grid, derived from container width.
    pub columns: usize,
    /// One-shot auto-open target set by an error click, consumed (or
    /// abandoned) the first time a non-empty execution collection is seen.
    pub(crate) pending_open: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            section: Section::StatusBoard,
            selection: Selection::None,
            columns: 1,
            pending_open: None,
        }
    }
}

impl ViewState {
    pub fn pending_open(&self) -> Option<&str> {
        self.pending_open.as_deref()
    }
}
