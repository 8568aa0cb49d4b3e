// The fetch/state holder behind both frontends. One watch slot, one
// in-flight fetch task per refresh.
use crate::client::ScheduleClient;
use crate::model::Performance;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Shown when a fetch fails without a usable message.
pub const FALLBACK_ERROR: &str = "Unbekannter Fehler";

/// What the presentation layer renders. Exactly one variant at a time;
/// a feed only moves from `Loading` to one of the terminal variants, and
/// back to `Loading` on an explicit refresh.
#[derive(Debug, Clone, PartialEq)]
pub enum UiState {
    Loading,
    Success(Vec<Performance>),
    Error(String),
}

/// Publishes the schedule over a single-slot watch channel. Intermediate
/// states are not queued; whoever writes last wins. Refreshes are not
/// coalesced: a second refresh simply republishes `Loading` and races the
/// first fetch.
pub struct ScheduleFeed {
    client: ScheduleClient,
    tx: watch::Sender<UiState>,
}

impl ScheduleFeed {
    /// Creates the feed and kicks off the initial fetch.
    pub fn new(client: ScheduleClient) -> Self {
        let (tx, _) = watch::channel(UiState::Loading);
        let feed = Self { client, tx };
        let _ = feed.refresh();
        feed
    }

    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.tx.subscribe()
    }

    /// Publish `Loading` and fetch the full list off the UI thread. On
    /// completion exactly one terminal state is published; prior results are
    /// discarded, not merged.
    pub fn refresh(&self) -> JoinHandle<()> {
        self.tx.send_replace(UiState::Loading);

        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let next = match client.get_performances().await {
                Ok(performances) => UiState::Success(performances),
                Err(msg) => UiState::Error(describe_error(msg)),
            };
            tx.send_replace(next);
        })
    }
}

fn describe_error(msg: String) -> String {
    if msg.trim().is_empty() {
        FALLBACK_ERROR.to_string()
    } else {
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_error_messages_get_the_fallback() {
        assert_eq!(describe_error(String::new()), FALLBACK_ERROR);
        assert_eq!(describe_error("   ".to_string()), FALLBACK_ERROR);
        assert_eq!(describe_error("timeout".to_string()), "timeout");
    }
}
