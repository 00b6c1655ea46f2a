// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale codes for the overlay and detection from the host's
//! preferred-language signal.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Environment variables consulted for the host language, in priority order.
///
/// `NAPOLETANI_LANG` lets a deployment pin the language without touching the
/// process locale; the rest are the usual POSIX locale variables.
pub const HOST_LANGUAGE_VARS: &[&str] = &["NAPOLETANI_LANG", "LC_ALL", "LC_MESSAGES", "LANG"];

/// Supported overlay languages.
///
/// Italian is the source language and the default: every unrecognised or
/// missing host signal resolves to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    It,
    En,
}

impl Locale {
    /// ISO 639-1 two-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::It => "it",
            Locale::En => "en",
        }
    }

    /// Parse an exact lowercase code. Region suffixes are not accepted here;
    /// use [`Locale::detect`] for raw host signals like `en-US`.
    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "it" => Some(Locale::It),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// All locales, in display order.
    pub fn all() -> &'static [Locale] {
        &[Locale::It, Locale::En]
    }

    /// Language name written in the language itself, for the switcher label.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::It => "Italiano",
            Locale::En => "English",
        }
    }

    /// Flag shown on the language button.
    pub fn flag(&self) -> &'static str {
        match self {
            Locale::It => "🇮🇹",
            Locale::En => "🇬🇧",
        }
    }

    /// The other locale.
    ///
    /// The toggle is strictly binary. Adding a variant makes this match
    /// non-exhaustive, which is where a cyclic selection would go.
    pub fn toggled(&self) -> Locale {
        match self {
            Locale::It => Locale::En,
            Locale::En => Locale::It,
        }
    }

    /// Resolve a host preferred-language signal such as `en-US` or `it_IT.UTF-8`.
    ///
    /// Only the first two characters are inspected, lower-cased. Anything
    /// other than `en` (including no signal at all) resolves to Italian.
    ///
    /// # Examples
    ///
    /// ```
    /// use napoletani_index::i18n::Locale;
    /// assert_eq!(Locale::detect(Some("en-US")), Locale::En);
    /// assert_eq!(Locale::detect(Some("fr-FR")), Locale::It);
    /// assert_eq!(Locale::detect(None), Locale::It);
    /// ```
    pub fn detect(signal: Option<&str>) -> Locale {
        let prefix: String = signal
            .unwrap_or_default()
            .chars()
            .take(2)
            .collect::<String>()
            .to_lowercase();
        match prefix.as_str() {
            "en" => Locale::En,
            "it" => Locale::It,
            _ => Locale::It,
        }
    }

    /// Detect from the process environment (see [`HOST_LANGUAGE_VARS`]).
    pub fn detect_from_env() -> Locale {
        let signal = host_language_signal();
        let locale = Locale::detect(signal.as_deref());
        tracing::debug!(signal = ?signal, locale = %locale, "detected initial locale");
        locale
    }
}

/// First non-empty host language variable, if any.
pub fn host_language_signal() -> Option<String> {
    HOST_LANGUAGE_VARS
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(&s.trim().to_ascii_lowercase())
            .ok_or_else(|| anyhow::anyhow!("unsupported locale '{}' (expected 'it' or 'en')", s))
    }
}
