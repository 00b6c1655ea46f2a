// SPDX-License-Identifier: PMPL-1.0-or-later

//! Self-check of the embedded catalog and the host language setup.

use crate::i18n::{dictionary, host_language_signal, Locale, LocaleTree, BIN_COUNT};
use crate::legend::parse_hex_color;
use anyhow::{anyhow, Result};
use colored::*;
use std::collections::BTreeSet;

const EXPECTED_TITLES: &[(Locale, &str)] = &[
    (Locale::It, "Napoletani Index"),
    (Locale::En, "Neapolitans Index"),
];

pub fn run_self_diagnostics() -> Result<()> {
    println!("napoletani-index self-diagnostics");

    let checks = collect_diagnostics();

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks
        .iter()
        .any(|entry| matches!(entry.level, Level::Error))
    {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

fn collect_diagnostics() -> Vec<Diagnostic> {
    let it = dictionary(Locale::It);
    let en = dictionary(Locale::En);

    let mut checks = Vec::new();
    checks.push(Diagnostic::ok(
        "version",
        format!("napoletani-index {}", env!("CARGO_PKG_VERSION")),
    ));
    checks.push(check_key_paths(&it.key_paths(), &en.key_paths()));
    for locale in Locale::all() {
        checks.push(check_bins(*locale, dictionary(*locale)));
        checks.push(check_empty_leaves(*locale, dictionary(*locale)));
    }
    checks.push(check_bin_colors(it, en));
    for (locale, expected) in EXPECTED_TITLES {
        checks.push(check_title(*locale, expected));
    }
    checks.push(check_host_language(host_language_signal()));
    checks
}

#[derive(Debug, PartialEq, Eq)]
enum Level {
    Ok,
    Warn,
    Error,
}

struct Diagnostic {
    label: &'static str,
    level: Level,
    detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:22} {}", self.level.tag(), self.label, self.detail);
    }
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red().bold(),
        }
    }
}

fn check_key_paths(it: &[String], en: &[String]) -> Diagnostic {
    let it_set: BTreeSet<&String> = it.iter().collect();
    let en_set: BTreeSet<&String> = en.iter().collect();
    let only_it: Vec<&&String> = it_set.difference(&en_set).collect();
    let only_en: Vec<&&String> = en_set.difference(&it_set).collect();

    if only_it.is_empty() && only_en.is_empty() {
        Diagnostic::ok("key congruence", format!("{} keys in both locales", it_set.len()))
    } else {
        Diagnostic::error(
            "key congruence",
            format!("only in it: {:?}; only in en: {:?}", only_it, only_en),
        )
    }
}

fn check_bins(locale: Locale, tree: &LocaleTree) -> Diagnostic {
    let bad: Vec<&str> = tree
        .overlay
        .bins
        .iter()
        .map(|bin| bin.color)
        .filter(|color| parse_hex_color(color).is_none())
        .collect();
    if bad.is_empty() {
        Diagnostic::ok("legend bins", format!("{}: {} bins", locale, BIN_COUNT))
    } else {
        Diagnostic::error("legend bins", format!("{}: bad colors {:?}", locale, bad))
    }
}

fn check_bin_colors(it: &LocaleTree, en: &LocaleTree) -> Diagnostic {
    let mismatched: Vec<usize> = it
        .overlay
        .bins
        .iter()
        .zip(en.overlay.bins.iter())
        .enumerate()
        .filter(|(_, (a, b))| a.color != b.color)
        .map(|(idx, _)| idx)
        .collect();
    if mismatched.is_empty() {
        Diagnostic::ok("bin colors", "identical across locales".to_string())
    } else {
        Diagnostic::error("bin colors", format!("differ at {:?}", mismatched))
    }
}

fn check_empty_leaves(locale: Locale, tree: &LocaleTree) -> Diagnostic {
    let empty: Vec<String> = tree
        .leaves()
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(path, _)| path)
        .collect();
    if empty.is_empty() {
        Diagnostic::ok("empty strings", format!("{}: none", locale))
    } else {
        Diagnostic::warning("empty strings", format!("{}: {}", locale, empty.join(", ")))
    }
}

fn check_title(locale: Locale, expected: &str) -> Diagnostic {
    let actual = dictionary(locale).overlay.title;
    if actual == expected {
        Diagnostic::ok("overlay title", format!("{}: {}", locale, actual))
    } else {
        Diagnostic::error(
            "overlay title",
            format!("{}: expected '{}', found '{}'", locale, expected, actual),
        )
    }
}

fn check_host_language(signal: Option<String>) -> Diagnostic {
    let locale = Locale::detect(signal.as_deref());
    let recognised = |value: &str| {
        let prefix: String = value.chars().take(2).collect();
        Locale::from_code(&prefix.to_lowercase()).is_some()
    };
    match signal {
        Some(value) if recognised(&value) => {
            Diagnostic::ok("host language", format!("{} -> {}", value, locale))
        }
        Some(value) => Diagnostic::warning(
            "host language",
            format!("{} not supported, starting in {}", value, locale),
        ),
        None => Diagnostic::warning(
            "host language",
            format!("no LANG/LC_* set, starting in {}", locale),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_passes() {
        let checks = collect_diagnostics();
        assert!(checks.iter().all(|c| c.level != Level::Error));
    }

    #[test]
    fn key_mismatch_reported() {
        let a = vec!["overlay.title".to_string(), "popup.nationalIndex".to_string()];
        let b = vec!["overlay.title".to_string()];
        let diag = check_key_paths(&a, &b);
        assert_eq!(diag.level, Level::Error);
        assert!(diag.detail.contains("popup.nationalIndex"));
    }

    #[test]
    fn host_language_levels() {
        assert_eq!(check_host_language(Some("en_US.UTF-8".into())).level, Level::Ok);
        assert_eq!(check_host_language(Some("de_DE".into())).level, Level::Warn);
        assert_eq!(check_host_language(None).level, Level::Warn);
    }
}
