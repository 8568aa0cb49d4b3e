use spielplan::client::ScheduleClient;
use spielplan::config::Config;
use spielplan::imprint;
use spielplan::model::{Performance, schedule};

use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Element, Length, Task, Theme};
use std::sync::OnceLock;
use tokio::runtime::Runtime;

// --- GLOBAL RUNTIME ---
// Iced's background threads don't carry the Tokio reactor context that
// reqwest requires, so fetches run on a dedicated runtime.
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

pub fn main() -> iced::Result {
    let runtime = Runtime::new().expect("Failed to create Tokio runtime");
    TOKIO_RUNTIME
        .set(runtime)
        .expect("Failed to set global runtime");

    iced::application("Spielplan", SpielplanGui::update, SpielplanGui::view)
        .theme(SpielplanGui::theme)
        .run_with(SpielplanGui::new)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Screen {
    Today,
    Schedule,
    Imprint,
}

struct SpielplanGui {
    performances: Vec<Performance>,
    screen: Screen,
    loading: bool,
    error_msg: Option<String>,
}

impl Default for SpielplanGui {
    fn default() -> Self {
        Self {
            performances: vec![],
            screen: Screen::Today,
            loading: true,
            error_msg: None,
        }
    }
}

#[derive(Debug, Clone)]
enum Message {
    Loaded(Result<Vec<Performance>, String>),
    Refresh,
    ShowScreen(Screen),
    OpenLink(String),
}

impl SpielplanGui {
    fn new() -> (Self, Task<Message>) {
        (
            Self::default(),
            Task::perform(fetch_wrapper(), Message::Loaded),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loaded(Ok(performances)) => {
                // Previous results are replaced wholesale, never merged.
                self.performances = performances;
                self.error_msg = None;
                self.loading = false;
            }
            Message::Loaded(Err(e)) => {
                self.error_msg = Some(e);
                self.loading = false;
            }

            Message::Refresh => {
                self.loading = true;
                self.error_msg = None;
                return Task::perform(fetch_wrapper(), Message::Loaded);
            }

            Message::ShowScreen(screen) => {
                self.screen = screen;
            }

            Message::OpenLink(url) => {
                if let Err(e) = open::that(&url) {
                    self.error_msg = Some(format!("Link konnte nicht geöffnet werden: {}", e));
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let nav = row![
            button("Heute").on_press(Message::ShowScreen(Screen::Today)),
            button("Spielplan").on_press(Message::ShowScreen(Screen::Schedule)),
            button("Impressum").on_press(Message::ShowScreen(Screen::Imprint)),
            button("Aktualisieren").on_press(Message::Refresh),
        ]
        .spacing(10);

        let body: Element<_> = match self.screen {
            Screen::Imprint => text(imprint::TEXT).size(16).into(),
            screen => {
                if self.loading {
                    text("Lade Spielplan...").size(20).into()
                } else if let Some(err) = &self.error_msg {
                    text(err)
                        .size(20)
                        .color(iced::Color::from_rgb(0.8, 0.2, 0.2))
                        .into()
                } else {
                    let indices: Vec<usize> = match screen {
                        Screen::Today => schedule::today_indices(
                            &self.performances,
                            schedule::local_today(),
                        ),
                        _ => (0..self.performances.len()).collect(),
                    };
                    if indices.is_empty() {
                        let hint = if screen == Screen::Today {
                            "Heute keine Vorstellungen."
                        } else {
                            "Keine Vorstellungen gefunden."
                        };
                        text(hint).size(20).into()
                    } else {
                        scrollable(
                            column(
                                indices
                                    .into_iter()
                                    .map(|i| performance_card(&self.performances[i]))
                                    .collect::<Vec<_>>(),
                            )
                            .spacing(12),
                        )
                        .into()
                    }
                }
            }
        };

        let content = column![text("Staatstheater Augsburg").size(32), nav, body]
            .spacing(20)
            .max_width(800);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .padding(20)
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn performance_card(p: &Performance) -> Element<'_, Message> {
    let mut card = column![text(&p.title).size(22)].spacing(4);

    for sub in [&p.subtitle1, &p.subtitle2].into_iter().flatten() {
        if !sub.is_empty() {
            card = card.push(text(sub).size(16));
        }
    }

    card = card.push(text(format!("Genre: {}", p.genre)).size(14));
    card = card.push(text(format!("Ort: {}", p.location)).size(14));
    card = card.push(text(schedule::format_local(&p.date)).size(14));

    let mut links = row![].spacing(10);
    if let Some(url) = &p.tickets_uri {
        links = links.push(button("Tickets").on_press(Message::OpenLink(url.clone())));
    }
    if let Some(url) = p.details_url() {
        links = links.push(button("Details").on_press(Message::OpenLink(url)));
    }
    card = card.push(links);

    card.into()
}

// --- WRAPPERS TO FORCE TOKIO RUNTIME ---

async fn fetch_wrapper() -> Result<Vec<Performance>, String> {
    let rt = TOKIO_RUNTIME.get().expect("Runtime not initialized");
    rt.spawn(async { fetch().await })
        .await
        .map_err(|e| e.to_string())? // Handle JoinError
}

async fn fetch() -> Result<Vec<Performance>, String> {
    let config = Config::load().unwrap_or_default();
    let client = ScheduleClient::new(&config.base_url)?;
    client.get_performances().await
}
