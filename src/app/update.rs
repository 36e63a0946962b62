// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Each handler borrows the mutable state it needs through `UpdateContext`
//! and returns a `Task` for any side effect (clipboard writes are the only
//! ones this application performs).

use super::{Message, Screen};
use crate::config;
use crate::ui::contact;
use crate::ui::experience;
use crate::ui::home;
use crate::ui::navbar;
use crate::ui::noise_screen;
use crate::ui::projects;
use crate::ui::sort_visualizer::State as VisualizerState;
use crate::ui::sources;
use crate::ui::theming::ThemeMode;
use iced::Task;

/// Mutable view over the `App` fields the handlers operate on.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub visualizer: &'a mut VisualizerState,
    pub projects: &'a mut projects::State,
    pub experience: &'a mut experience::State,
    pub noise: &'a mut noise_screen::State,
    pub show_noise: &'a mut bool,
    pub theme_mode: &'a mut ThemeMode,
    pub config: &'a mut config::Config,
}

/// Handle navigation-bar events: screen switches and the global toggles.
pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message) {
        navbar::Event::Navigate(target) => handle_screen_switch(ctx, target),
        navbar::Event::ToggleNoise => {
            *ctx.show_noise = !*ctx.show_noise;
            // Leaving the noise page open with its nav entry hidden would
            // strand the user there.
            if !*ctx.show_noise && *ctx.screen == Screen::Noise {
                return handle_screen_switch(ctx, Screen::Home);
            }
            Task::none()
        }
        navbar::Event::ToggleTheme => {
            *ctx.theme_mode = ctx.theme_mode.next();
            ctx.config.theme_mode = Some(*ctx.theme_mode);
            if let Err(err) = config::save(ctx.config) {
                eprintln!("Failed to save settings: {err}");
            }
            Task::none()
        }
    }
}

/// Switch to `target`, re-mounting per-screen state where entry semantics
/// demand it: entering Home regenerates the bars and replays the sort,
/// entering Noise reseeds the field.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if target == *ctx.screen {
        return Task::none();
    }

    match target {
        Screen::Home => ctx.visualizer.restart(),
        Screen::Noise => {
            if !*ctx.show_noise {
                return Task::none();
            }
            ctx.noise.reseed();
        }
        _ => {}
    }

    *ctx.screen = target;
    Task::none()
}

pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: home::Message) -> Task<Message> {
    home::update(ctx.visualizer, message);
    Task::none()
}

pub fn handle_projects_message(
    ctx: &mut UpdateContext<'_>,
    message: projects::Message,
) -> Task<Message> {
    projects::update(ctx.projects, message);
    Task::none()
}

pub fn handle_experience_message(
    ctx: &mut UpdateContext<'_>,
    message: experience::Message,
) -> Task<Message> {
    experience::update(ctx.experience, message);
    Task::none()
}

pub fn handle_sources_message(message: sources::Message) -> Task<Message> {
    match sources::update(message) {
        sources::Event::CopyToClipboard(url) => iced::clipboard::write(url),
    }
}

pub fn handle_contact_message(message: contact::Message) -> Task<Message> {
    match contact::update(message) {
        contact::Event::CopyToClipboard(value) => iced::clipboard::write(value),
    }
}

pub fn handle_noise_message(
    ctx: &mut UpdateContext<'_>,
    message: noise_screen::Message,
) -> Task<Message> {
    noise_screen::update(ctx.noise, message);
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort;

    struct Fixture {
        screen: Screen,
        visualizer: VisualizerState,
        projects: projects::State,
        experience: experience::State,
        noise: noise_screen::State,
        show_noise: bool,
        theme_mode: ThemeMode,
        config: config::Config,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                screen: Screen::Home,
                visualizer: VisualizerState::with_bars(sort::generate(8, 10, 59)),
                projects: projects::State::new(),
                experience: experience::State::new(),
                noise: noise_screen::State::new(),
                show_noise: true,
                theme_mode: ThemeMode::System,
                config: config::Config::default(),
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                screen: &mut self.screen,
                visualizer: &mut self.visualizer,
                projects: &mut self.projects,
                experience: &mut self.experience,
                noise: &mut self.noise,
                show_noise: &mut self.show_noise,
                theme_mode: &mut self.theme_mode,
                config: &mut self.config,
            }
        }
    }

    #[test]
    fn switching_screens_updates_the_active_screen() {
        let mut fx = Fixture::new();
        let _ = handle_screen_switch(&mut fx.ctx(), Screen::Projects);
        assert_eq!(fx.screen, Screen::Projects);
    }

    #[test]
    fn switching_to_the_current_screen_is_a_no_op() {
        let mut fx = Fixture::new();
        let bars_before = fx.visualizer.bars().to_vec();
        let _ = handle_screen_switch(&mut fx.ctx(), Screen::Home);
        assert_eq!(fx.screen, Screen::Home);
        // Re-selecting Home must not re-mount the visualizer.
        assert_eq!(fx.visualizer.bars(), bars_before.as_slice());
    }

    #[test]
    fn entering_home_restarts_the_visualizer() {
        let mut fx = Fixture::new();
        let _ = handle_screen_switch(&mut fx.ctx(), Screen::Contact);
        let _ = handle_screen_switch(&mut fx.ctx(), Screen::Home);
        assert_eq!(fx.screen, Screen::Home);
        assert_eq!(fx.visualizer.bars().len(), sort::BAR_COUNT);
        assert!(!fx.visualizer.is_loaded());
    }

    #[test]
    fn noise_screen_is_unreachable_while_hidden() {
        let mut fx = Fixture::new();
        fx.show_noise = false;
        let _ = handle_screen_switch(&mut fx.ctx(), Screen::Noise);
        assert_eq!(fx.screen, Screen::Home);
    }

    #[test]
    fn hiding_noise_while_on_it_returns_home() {
        let mut fx = Fixture::new();
        let _ = handle_screen_switch(&mut fx.ctx(), Screen::Noise);
        assert_eq!(fx.screen, Screen::Noise);

        let _ = handle_navbar_message(&mut fx.ctx(), navbar::Message::ToggleNoise);
        assert!(!fx.show_noise);
        assert_eq!(fx.screen, Screen::Home);
    }

    #[test]
    fn toggling_noise_elsewhere_keeps_the_screen() {
        let mut fx = Fixture::new();
        let _ = handle_screen_switch(&mut fx.ctx(), Screen::Sources);
        let _ = handle_navbar_message(&mut fx.ctx(), navbar::Message::ToggleNoise);
        assert!(!fx.show_noise);
        assert_eq!(fx.screen, Screen::Sources);
    }

    #[test]
    fn project_toggle_reaches_the_projects_state() {
        let mut fx = Fixture::new();
        let _ = handle_projects_message(
            &mut fx.ctx(),
            projects::Message::ToggleProject(projects::Project::Folio),
        );
        assert!(fx.projects.is_expanded(projects::Project::Folio));
    }
}
