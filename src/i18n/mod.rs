// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localization for the Napoletani Index overlay.
//!
//! ## Supported languages
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | it   | Italian  | Italiano    |
//! | en   | English  | English     |
//!
//! ## Design
//!
//! Each language is a value of the same typed [`LocaleTree`], embedded as
//! static data. A [`LanguageStore`] owns the active [`Locale`]; UI code reads
//! [`LanguageStore::active_tree`] and calls [`LanguageStore::toggle`] from the
//! language button. Listeners registered with [`LanguageStore::subscribe`]
//! are told about every change so they can re-render.
//!
//! The initial locale comes from the host's preferred language. Anything
//! that is not English, including no signal at all, starts in Italian.

mod catalog;
mod locale;
mod store;
mod tree;

pub use catalog::{dictionary, EN, IT};
pub use locale::{host_language_signal, Locale, HOST_LANGUAGE_VARS};
pub use store::{LanguageStore, Listener, SubscriptionId};
pub use tree::{
    AxisLabels, LegendBin, LocaleTree, Modal, NerdDetails, Notification, Overlay, Popup, Science,
    Top3, UseCase, UseCases, BIN_COLORS, BIN_COUNT,
};
