/// Where a click inside the open overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the content panel.
    Backdrop,
    /// Anywhere inside the content panel.
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickViewAction {
    Open(u32),
    Close,
    Click(ClickTarget),
}

/// Page-scroll side effect a transition asks the host to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollEffect {
    Lock,
    Unlock,
}

/// Product detail overlay. At most one record is shown; opening another
/// replaces the content in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuickView {
    #[default]
    Closed,
    Open {
        record_id: u32,
    },
}

impl QuickView {
    pub fn is_open(&self) -> bool {
        matches!(self, QuickView::Open { .. })
    }

    pub fn record_id(&self) -> Option<u32> {
        match self {
            QuickView::Closed => None,
            QuickView::Open { record_id } => Some(*record_id),
        }
    }

    pub fn transition(self, action: QuickViewAction) -> (Self, Option<ScrollEffect>) {
        match (self, action) {
            (QuickView::Closed, QuickViewAction::Open(record_id)) => {
                (QuickView::Open { record_id }, Some(ScrollEffect::Lock))
            }
            (QuickView::Open { .. }, QuickViewAction::Open(record_id)) => {
                (QuickView::Open { record_id }, None)
            }
            (QuickView::Open { .. }, QuickViewAction::Close)
            | (QuickView::Open { .. }, QuickViewAction::Click(ClickTarget::Backdrop)) => {
                (QuickView::Closed, Some(ScrollEffect::Unlock))
            }
            (state, _) => (state, None),
        }
    }

    /// Effect owed when the overlay's host goes away: an open overlay still
    /// holds the page scroll lock.
    pub fn release(self) -> Option<ScrollEffect> {
        self.is_open().then_some(ScrollEffect::Unlock)
    }
}

/// Suppresses and restores scrolling of the page behind the overlay.
pub trait ScrollLock {
    fn lock(&self);
    fn unlock(&self);

    fn apply(&self, effect: ScrollEffect) {
        match effect {
            ScrollEffect::Lock => self.lock(),
            ScrollEffect::Unlock => self.unlock(),
        }
    }
}
