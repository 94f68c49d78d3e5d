//! Tab state for the single-page layout.

/// CSS class marking the visible panel and its button.
pub const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabId {
    #[default]
    Single,
    Daily,
    Statistics,
}

impl TabId {
    pub const ALL: [TabId; 3] = [TabId::Single, TabId::Daily, TabId::Statistics];

    /// Element id of the panel.
    pub fn panel_id(&self) -> &'static str {
        match self {
            TabId::Single => "single",
            TabId::Daily => "daily",
            TabId::Statistics => "stats",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TabId::Single => "Single Prediction",
            TabId::Daily => "Daily Forecast",
            TabId::Statistics => "Statistics",
        }
    }
}

/// The fixed set of tabs with exactly one active at any time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabSet {
    active: TabId,
}

impl TabSet {
    pub fn activate(&mut self, tab: TabId) {
        tracing::trace!(panel = tab.panel_id(), "switching tab");
        self.active = tab;
    }

    pub fn is_active(&self, tab: TabId) -> bool {
        self.active == tab
    }

    pub fn panel_class(&self, tab: TabId) -> String {
        self.class_for("tab-content", tab)
    }

    pub fn button_class(&self, tab: TabId) -> String {
        self.class_for("tab-button", tab)
    }

    /// Number of tabs carrying the active marker.
    pub fn active_count(&self) -> usize {
        TabId::ALL.iter().filter(|tab| self.is_active(**tab)).count()
    }

    fn class_for(&self, base: &str, tab: TabId) -> String {
        if self.is_active(tab) {
            format!("{} {}", base, ACTIVE_CLASS)
        } else {
            base.to_string()
        }
    }
}
