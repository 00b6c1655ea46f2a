// SPDX-License-Identifier: PMPL-1.0-or-later

//! Napoletani Index: localization and language switching for the map
//! overlay.
//!
//! The overlay shows how much people in Campania search for each foreign
//! destination. This crate owns the text side of it:
//!
//! 1. **i18n**: the Italian and English string trees, one typed schema for
//!    both, and the [`i18n::LanguageStore`] that selects between them.
//! 2. **legend**: which of the nine legend bins a country score falls into.
//! 3. **markup**: plain-text and ANSI rendering of the inline markup the
//!    strings carry.
//! 4. **export**: JSON/YAML dumps of the trees for the web front end.
//! 5. **overlay**: terminal and desktop consumers of the store.

pub mod diagnostics;
pub mod export;
pub mod i18n;
pub mod legend;
pub mod markup;
pub mod overlay;
