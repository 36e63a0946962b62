// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a personal portfolio application built with the Iced GUI framework.
//!
//! It presents a handful of portfolio screens behind a navigation bar and
//! greets visitors with a merge sort animated over randomly generated bar
//! heights on the home screen.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod noise;
pub mod sort;
pub mod ui;
