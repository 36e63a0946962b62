// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the portfolio screens.
//!
//! The `App` struct wires together localization, theming, the navigation
//! state, and the sorting visualizer, and translates messages into the few
//! side effects this application performs (clipboard writes, settings
//! persistence). Policy decisions such as the window size and the noise
//! toggle semantics live close to the update loop so user-facing behavior
//! is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::experience;
use crate::ui::noise_screen;
use crate::ui::projects;
use crate::ui::sort_visualizer::State as VisualizerState;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state bridging UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    /// Home-screen sorting visualizer; regenerated on every entry to Home.
    visualizer: VisualizerState,
    projects: projects::State,
    experience: experience::State,
    noise: noise_screen::State,
    /// Process-wide "show noise" flag (navbar entry visibility).
    show_noise: bool,
    theme_mode: ThemeMode,
    /// Loaded configuration, re-saved when preferences change.
    config: config::Config,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("sort_loaded", &self.visualizer.is_loaded())
            .field("show_noise", &self.show_noise)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 500;
pub const MIN_WINDOW_WIDTH: u32 = 650;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Home,
            visualizer: VisualizerState::new(),
            projects: projects::State::new(),
            experience: experience::State::new(),
            noise: noise_screen::State::new(),
            show_noise: true,
            theme_mode: ThemeMode::System,
            config: config::Config::default(),
        }
    }
}

impl App {
    /// Initializes application state from `Flags` and the settings file.
    /// The home-screen sort animation starts on the first subscription
    /// tick; nothing asynchronous happens at boot.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match config::load() {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Failed to load settings, using defaults: {err}");
                config::Config::default()
            }
        };
        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };
        app.theme_mode = config.theme_mode.unwrap_or_default();
        app.config = config;

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let screen_name = self.i18n.tr(self.screen.i18n_key());
        format!("{screen_name} - {app_name}")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_sort_subscription(self.screen, &self.visualizer)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            visualizer: &mut self.visualizer,
            projects: &mut self.projects,
            experience: &mut self.experience,
            noise: &mut self.noise,
            show_noise: &mut self.show_noise,
            theme_mode: &mut self.theme_mode,
            config: &mut self.config,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::Home(home_message) => update::handle_home_message(&mut ctx, home_message),
            Message::Projects(projects_message) => {
                update::handle_projects_message(&mut ctx, projects_message)
            }
            Message::Experience(experience_message) => {
                update::handle_experience_message(&mut ctx, experience_message)
            }
            Message::Sources(sources_message) => update::handle_sources_message(sources_message),
            Message::Contact(contact_message) => update::handle_contact_message(contact_message),
            Message::Noise(noise_message) => update::handle_noise_message(&mut ctx, noise_message),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            visualizer: &self.visualizer,
            projects: &self.projects,
            experience: &self.experience,
            noise: &self.noise,
            show_noise: self.show_noise,
            theme_mode: self.theme_mode,
            scheme: ColorScheme::from_mode(self.theme_mode),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::BAR_COUNT;

    #[test]
    fn default_app_starts_on_home_with_a_running_sort() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Home);
        assert_eq!(app.visualizer.bars().len(), BAR_COUNT);
        assert!(!app.visualizer.is_loaded());
        assert!(app.show_noise);
    }

    #[test]
    fn title_combines_screen_and_app_name() {
        let app = App::default();
        let title = app.title();
        assert!(title.contains(" - "));
        assert!(!title.contains("MISSING"));
    }

    #[test]
    fn navigation_message_switches_screens() {
        let mut app = App::default();
        let _ = app.update(Message::SwitchScreen(Screen::Contact));
        assert_eq!(app.screen, Screen::Contact);
    }

    #[test]
    fn sort_ticks_eventually_finish_the_animation() {
        use crate::ui::home;
        use crate::ui::sort_visualizer;

        let mut app = App::default();
        let mut steps = 0;
        while !app.visualizer.is_loaded() {
            let _ = app.update(Message::Home(home::Message::Sort(
                sort_visualizer::Message::Tick(std::time::Instant::now()),
            )));
            steps += 1;
            assert!(steps < 100_000, "animation must terminate");
        }
        assert!(app
            .visualizer
            .bars()
            .windows(2)
            .all(|w| w[0] <= w[1]));
    }
}
