// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::contact;
use crate::ui::experience;
use crate::ui::home;
use crate::ui::navbar;
use crate::ui::noise_screen;
use crate::ui::projects;
use crate::ui::sources;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    SwitchScreen(Screen),
    Home(home::Message),
    Projects(projects::Message),
    Experience(experience::Message),
    Sources(sources::Message),
    Contact(contact::Message),
    Noise(noise_screen::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
}
