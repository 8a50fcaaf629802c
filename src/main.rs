#![windows_subsystem = "windows"]

mod logger;
mod style;
mod widget;

use data::selection::ClickOutcome;
use data::{Config, Session};
use widget::sea::{self, Sea};
use widget::toast::{self, Toast};

use iced::widget::{button, canvas, column, container, row, stack, text};
use iced::{Element, Fill, Font, Size, Subscription, Task, font, padding, window};
use std::path::PathBuf;
use std::time::{Duration, Instant};

const TOAST_SWEEP: Duration = Duration::from_millis(500);

const VARIABLES: [(&str, &str); 5] = [
    ("Depth", "Vertical position of the submarine"),
    ("Length", "Horizontal size of the submarine"),
    ("Tower Height", "Size of the tower above the body"),
    ("Body Width", "Vertical thickness of the body"),
    ("Periscope Radius", "Size of the periscope"),
];

fn main() -> iced::Result {
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    if let Err(e) = logger::setup(config.log_level.into()) {
        eprintln!("Failed to initialize logger: {e}");
    }
    if let Some(e) = config_error {
        log::warn!("{e}, falling back to defaults");
    }

    let window_size = Size::new(config.window.width, config.window.height);

    iced::application(
        move || Periscope::new(config.clone()),
        Periscope::update,
        Periscope::view,
    )
    .title("Submarine Visualizer")
    .theme(Periscope::theme)
    .subscription(Periscope::subscription)
    .window_size(window_size)
    .antialiasing(true)
    .run()
}

struct Periscope {
    config: Config,
    session: Option<Session>,
    now: Instant,
    sea_cache: canvas::Cache,
    toasts: Vec<Toast>,
}

#[derive(Debug, Clone)]
enum Message {
    Sea(sea::Event),
    Tick(Instant),
    ExportRequested,
    Exported(Result<PathBuf, String>),
    DismissToast(usize),
    ExpireToasts(Instant),
}

impl Periscope {
    fn new(config: Config) -> (Self, Task<Message>) {
        (
            Self {
                config,
                session: None,
                now: Instant::now(),
                sea_cache: canvas::Cache::new(),
                toasts: vec![],
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Sea(event) => self.on_sea(event),
            Message::Tick(now) => {
                self.now = now;
                if let Some(session) = self.session.as_mut()
                    && let Some((first, second)) = session.tick(now)
                {
                    log::debug!("Exchange of {first} and {second} settled");
                }
                self.sea_cache.clear();
            }
            Message::ExportRequested => {
                let Some(session) = &self.session else {
                    return Task::none();
                };

                let json = match session.export_json() {
                    Ok(json) => json,
                    Err(e) => {
                        log::error!("{e}");
                        self.toasts.push(Toast::error(e.to_string()));
                        return Task::none();
                    }
                };
                let dir = self.config.export_dir();

                return Task::perform(
                    async move {
                        data::export::write_document(&dir, &json).map_err(|e| e.to_string())
                    },
                    Message::Exported,
                );
            }
            Message::Exported(result) => match result {
                Ok(path) => {
                    self.toasts
                        .push(Toast::success(format!("Saved to {}", path.display())));
                }
                Err(e) => {
                    log::error!("Export failed: {e}");
                    self.toasts.push(Toast::error(e));
                }
            },
            Message::DismissToast(index) => {
                if index < self.toasts.len() {
                    self.toasts.remove(index);
                }
            }
            Message::ExpireToasts(now) => {
                self.toasts.retain(|toast| !toast.is_expired(now));
            }
        }

        Task::none()
    }

    fn on_sea(&mut self, event: sea::Event) {
        let now = Instant::now();
        self.now = now;

        match event {
            sea::Event::Measured(size) => {
                if self.session.is_none() {
                    self.session = Some(Session::start(
                        size,
                        self.config.seed,
                        self.config.highlight,
                        now,
                    ));
                }
            }
            sea::Event::Clicked(id) => {
                if let Some(session) = self.session.as_mut()
                    && session.click(id, now) == ClickOutcome::Busy
                {
                    log::debug!("Ignoring click on {id} while an exchange is running");
                }
            }
            sea::Event::HoverEnter(id, pointer) => {
                if let Some(session) = self.session.as_mut() {
                    session.hover_enter(id, pointer);
                }
            }
            sea::Event::HoverExit => {
                if let Some(session) = self.session.as_mut() {
                    session.hover_exit();
                }
            }
        }

        self.sea_cache.clear();
    }

    fn view(&self) -> Element<'_, Message> {
        let header = text("Submarine Visualizer")
            .size(28)
            .font(Font {
                weight: font::Weight::Bold,
                ..Font::DEFAULT
            });

        let sea_canvas: Element<'_, sea::Event> = canvas(Sea {
            session: self.session.as_ref(),
            cache: &self.sea_cache,
            now: self.now,
        })
        .width(Fill)
        .height(Fill)
        .into();

        let sea = container(sea_canvas.map(Message::Sea))
            .style(style::sea_frame)
            .padding(1)
            .width(Fill)
            .height(Fill);

        let bold = Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        };
        let variables = VARIABLES.iter().map(|(name, meaning)| {
            row![
                text("• ").size(13),
                text(*name).size(13).font(bold),
                text(format!(": {meaning}")).size(13),
            ]
            .into()
        });

        let instructions = container(
            column![
                text("Instructions").size(16).font(bold),
                text("Each submarine represents a data case with 5 variables:").size(13),
                column(variables).spacing(2).padding(padding::left(8)),
                text(
                    "Click on a submarine to select it (it will turn white). \
                     Click on another submarine to exchange variable values between the two submarines."
                )
                .size(13),
            ]
            .spacing(6),
        )
        .style(style::instructions)
        .padding(12)
        .width(Fill);

        let export = button(text("Export JSON Data"))
            .style(style::button::export)
            .padding(padding::top(6).bottom(6).left(14).right(14))
            .on_press_maybe(self.session.as_ref().map(|_| Message::ExportRequested));

        let content = column![header, instructions, export, sea]
            .spacing(12)
            .padding(16);

        stack![content, toast::view(&self.toasts, Message::DismissToast)].into()
    }

    fn theme(&self) -> iced::Theme {
        self.config.theme.0.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let frames = match &self.session {
            Some(session) if session.needs_frames(self.now) => {
                window::frames().map(Message::Tick)
            }
            _ => Subscription::none(),
        };

        let sweep = if self.toasts.is_empty() {
            Subscription::none()
        } else {
            iced::time::every(TOAST_SWEEP).map(Message::ExpireToasts)
        };

        Subscription::batch([frames, sweep])
    }
}
