use crate::app::action::Action;
use crate::app::event::{LoadOutcome, MountId};
use crate::app::view::ActiveView;
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Upcoming,
    History,
    Suggestions,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Upcoming, Tab::History, Tab::Suggestions];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Upcoming => "Upcoming Trips",
            Tab::History => "Booking History",
            Tab::Suggestions => "Suggestions",
        }
    }

    pub fn shortcut(self) -> char {
        match self {
            Tab::Upcoming => '1',
            Tab::History => '2',
            Tab::Suggestions => '3',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Tab> {
        Tab::ALL.into_iter().find(|t| t.shortcut() == c)
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Upcoming => 0,
            Tab::History => 1,
            Tab::Suggestions => 2,
        }
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// Braille spinner shown while a view is loading.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct AppState {
    pub config: AppConfig,
    pub active_tab: Tab,
    pub view: ActiveView,
    pub next_mount_id: MountId,
    pub spinner_frame: usize,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
}

impl AppState {
    /// Start on the upcoming trips tab with its view mounted and loading.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            active_tab: Tab::Upcoming,
            view: ActiveView::mount(Tab::Upcoming, 0),
            next_mount_id: 1,
            spinner_frame: 0,
            should_quit: false,
            dirty: true,
            status_message: None,
        }
    }

    /// The action that starts the fetch for the currently mounted view.
    pub fn mount_action(&self) -> Action {
        Action::MountView {
            tab: self.active_tab,
            mount_id: self.view.mount_id(),
        }
    }

    fn allocate_mount_id(&mut self) -> MountId {
        let id = self.next_mount_id;
        self.next_mount_id += 1;
        id
    }

    /// Switch tabs. Selecting the active tab does nothing; any other tab
    /// replaces the mounted view with a fresh, loading one.
    pub fn select_tab(&mut self, tab: Tab) -> Option<Action> {
        if tab == self.active_tab {
            return None;
        }
        let mount_id = self.allocate_mount_id();
        self.active_tab = tab;
        self.view = ActiveView::mount(tab, mount_id);
        self.status_message = None;
        self.dirty = true;
        Some(Action::MountView { tab, mount_id })
    }

    /// Hand a fetch result to the mounted view. Returns `false` when the
    /// result was discarded.
    pub fn apply_loaded(&mut self, mount_id: MountId, outcome: LoadOutcome) -> bool {
        let applied = self.view.apply(mount_id, outcome);
        if applied {
            self.dirty = true;
        }
        applied
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    pub fn advance_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        self.dirty = true;
    }

    pub fn set_status(&mut self, text: String) {
        self.status_message = Some(text);
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        "1-3 switch tab | ↑↓ select | Enter open | L logout | q quit".to_string()
    }
}
