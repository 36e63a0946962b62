// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`home`] - Introduction and the animated sorting visualizer
//! - [`projects`] - Collapsible project cards
//! - [`experience`] - Collapsible timeline of roles and studies
//! - [`sources`] - Libraries and references with copyable links
//! - [`contact`] - Copyable contact details
//! - [`noise_screen`] - Seeded value-noise field (optional, toggleable)
//!
//! # Shared Infrastructure
//!
//! - [`sort_visualizer`] - Visualizer state and bar-chart canvas
//! - [`navbar`] - Navigation bar with noise and theme toggles
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod contact;
pub mod design_tokens;
pub mod experience;
pub mod home;
pub mod navbar;
pub mod noise_screen;
pub mod projects;
pub mod sort_visualizer;
pub mod sources;
pub mod styles;
pub mod theming;
