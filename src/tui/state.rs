use crate::feed::UiState;
use crate::model::{Performance, schedule};
use ratatui::widgets::ListState;

#[derive(PartialEq, Clone, Copy)]
pub enum Tab {
    Today,
    Schedule,
    Imprint,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Today, Tab::Schedule, Tab::Imprint];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Today => "Heute",
            Tab::Schedule => "Spielplan",
            Tab::Imprint => "Impressum",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Today => 0,
            Tab::Schedule => 1,
            Tab::Imprint => 2,
        }
    }

    pub fn next(self) -> Tab {
        match self {
            Tab::Today => Tab::Schedule,
            Tab::Schedule => Tab::Imprint,
            Tab::Imprint => Tab::Today,
        }
    }
}

pub struct AppState {
    pub state: UiState,
    pub tab: Tab,
    pub view_indices: Vec<usize>,
    pub list_state: ListState,
    pub message: String,
}

impl AppState {
    pub fn new() -> Self {
        let mut l_state = ListState::default();
        l_state.select(Some(0));
        Self {
            state: UiState::Loading,
            tab: Tab::Today,
            view_indices: vec![],
            list_state: l_state,
            message: "Tab: Ansicht | r: Aktualisieren | q: Beenden".to_string(),
        }
    }

    /// Apply a freshly published feed state.
    pub fn apply(&mut self, state: UiState) {
        match &state {
            UiState::Loading => {
                self.message = "Lade Spielplan...".to_string();
            }
            UiState::Success(performances) => {
                self.message = format!("Vorstellungen: {}", performances.len());
            }
            UiState::Error(msg) => {
                self.message = format!("Fehler: {}", msg);
            }
        }
        self.state = state;
        self.recalculate_view();
    }

    pub fn performances(&self) -> &[Performance] {
        match &self.state {
            UiState::Success(performances) => performances,
            _ => &[],
        }
    }

    /// Rebuild the visible rows for the active tab. The today view is a pure
    /// function of the list and the current local date, recomputed here on
    /// every pass rather than stored.
    pub fn recalculate_view(&mut self) {
        let performances = match &self.state {
            UiState::Success(performances) => performances,
            _ => {
                self.view_indices.clear();
                return;
            }
        };
        self.view_indices = match self.tab {
            Tab::Today => schedule::today_indices(performances, schedule::local_today()),
            Tab::Schedule => (0..performances.len()).collect(),
            Tab::Imprint => vec![],
        };
        let sel = self.list_state.selected().unwrap_or(0);
        if self.view_indices.is_empty() {
            self.list_state.select(Some(0));
        } else if sel >= self.view_indices.len() {
            self.list_state.select(Some(self.view_indices.len() - 1));
        }
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
        self.list_state.select(Some(0));
        self.recalculate_view();
    }

    pub fn set_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            self.tab = tab;
            self.list_state.select(Some(0));
            self.recalculate_view();
        }
    }

    pub fn selected_performance(&self) -> Option<&Performance> {
        let view_idx = self.list_state.selected()?;
        let master_idx = *self.view_indices.get(view_idx)?;
        self.performances().get(master_idx)
    }

    /// Hand a link to the platform's URL handler and report in the footer.
    pub fn open_link(&mut self, url: &str, label: &str) {
        self.message = match open::that(url) {
            Ok(()) => format!("{} wird im Browser geöffnet", label),
            Err(e) => format!("Fehler: {}", e),
        };
    }

    pub fn next(&mut self) {
        let len = self.view_indices.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.view_indices.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn jump_forward(&mut self, step: usize) {
        if self.view_indices.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        // Clamp to the last item (don't wrap around like next())
        let new_index = (current + step).min(self.view_indices.len() - 1);
        self.list_state.select(Some(new_index));
    }

    pub fn jump_backward(&mut self, step: usize) {
        if self.view_indices.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let new_index = current.saturating_sub(step);
        self.list_state.select(Some(new_index));
    }
}
