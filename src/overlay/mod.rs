// SPDX-License-Identifier: PMPL-1.0-or-later

//! Reference consumers of the language store: a plain printout, a terminal
//! overlay and a desktop overlay. All three render the same sections.

pub mod gui;
pub mod tui;

use crate::i18n::{LanguageStore, LocaleTree};
use crate::legend::parse_hex_color;
use crate::markup;
use colored::*;

pub use gui::OverlayGui;
pub use tui::OverlayTui;

/// How catalog markup is turned into display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    Plain,
    Ansi,
}

impl TextMode {
    pub fn render(&self, fragment: &str) -> String {
        match self {
            TextMode::Plain => markup::to_plain(fragment),
            TextMode::Ansi => markup::to_ansi(fragment),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Section {
    pub title: String,
    pub summary: String,
    pub details: Vec<String>,
}

/// Index of the first manual section returned by [`build_sections`].
pub const MANUAL_START: usize = 3;

/// Overlay chrome first, then the manual.
pub fn build_sections(tree: &LocaleTree, mode: TextMode) -> Vec<Section> {
    let overlay = &tree.overlay;
    let modal = &tree.modal;
    let mut sections = Vec::new();

    sections.push(Section {
        title: overlay.title.to_string(),
        summary: overlay.subtitle.to_string(),
        details: vec![
            format!("{} {}", tree.notification.icon, mode.render(tree.notification.text)),
            format!("{}: …", tree.popup.national_index),
            format!("{} …", tree.attribution),
        ],
    });

    sections.push(Section {
        title: overlay.legend_title.to_string(),
        summary: format!(
            "{} ┃ {} → {}",
            overlay.toggle_btn, overlay.axis_labels.high, overlay.axis_labels.low
        ),
        details: overlay
            .bins
            .iter()
            .map(|bin| format!("{} {}", swatch(bin.color, mode), bin.label))
            .collect(),
    });

    sections.push(Section {
        title: overlay.top3.title.to_string(),
        summary: overlay.top3.toggle_btn.to_string(),
        details: vec![format!("{}: …", overlay.updated)],
    });

    let mut intro = vec![mode.render(modal.intro)];
    for case in [&modal.use_cases.find, &modal.use_cases.avoid] {
        intro.push(format!("{} {}", case.icon, mode.render(case.title)));
        intro.push(format!("   {}", mode.render(case.text)));
    }
    sections.push(Section {
        title: format!("{} {}", tree.info_btn, modal.title),
        summary: String::new(),
        details: intro,
    });

    let mut science = vec![mode.render(modal.science.intro)];
    science.extend(modal.science.list.iter().map(|item| format!("• {}", mode.render(item))));
    sections.push(Section {
        title: modal.science.title.to_string(),
        summary: format!("{} items", modal.science.list.len()),
        details: science,
    });

    sections.push(Section {
        title: modal.nerd_details.title.to_string(),
        summary: format!("{} items", modal.nerd_details.items.len()),
        details: modal
            .nerd_details
            .items
            .iter()
            .map(|item| format!("• {}", mode.render(item)))
            .collect(),
    });

    sections.push(Section {
        title: markup::to_plain(modal.warning)
            .split(':')
            .next()
            .unwrap_or_default()
            .trim()
            .to_string(),
        summary: String::new(),
        details: vec![
            mode.render(modal.warning),
            format!("{} …", modal.attribution),
        ],
    });

    sections
}

/// Two-cell color block for a legend bin, or the hex code in plain mode.
pub fn swatch(color: &str, mode: TextMode) -> String {
    match (mode, parse_hex_color(color)) {
        (TextMode::Ansi, Some((r, g, b))) => "██".truecolor(r, g, b).to_string(),
        _ => format!("[{}]", color),
    }
}

/// Print every section of the store's active tree to stdout.
pub fn print_overlay(store: &LanguageStore, mode: TextMode) {
    let tree = store.active_tree();
    let locale = store.locale();
    let header = format!("{} [{} {}]", tree.overlay.title, locale.flag(), locale.code());
    match mode {
        TextMode::Ansi => println!("{}", header.bold().cyan()),
        TextMode::Plain => println!("{}", header),
    }
    println!();
    for section in build_sections(tree, mode) {
        match mode {
            TextMode::Ansi => println!("{} {}", section.title.bold(), section.summary.dimmed()),
            TextMode::Plain => println!("{} {}", section.title, section.summary),
        }
        for detail in &section.details {
            println!("    {}", detail);
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{dictionary, Locale};

    #[test]
    fn sections_follow_locale() {
        let it = build_sections(dictionary(Locale::It), TextMode::Plain);
        let en = build_sections(dictionary(Locale::En), TextMode::Plain);
        assert_eq!(it.len(), en.len());
        assert_eq!(it[0].title, "Napoletani Index");
        assert_eq!(en[0].title, "Neapolitans Index");
        assert_eq!(it.last().map(|s| s.title.as_str()), Some("⚠️ Nota"));
        assert_eq!(en.last().map(|s| s.title.as_str()), Some("⚠️ Note"));
    }

    #[test]
    fn plain_legend_lists_hex_codes() {
        let sections = build_sections(dictionary(Locale::En), TextMode::Plain);
        let legend = &sections[1];
        assert_eq!(legend.details.len(), 9);
        assert_eq!(legend.details[0], "[#800026] ≥ 90 (Crowd)");
        assert!(legend.details.iter().all(|line| !line.contains('<')));
    }

    #[test]
    fn plain_manual_has_no_markup() {
        for section in build_sections(dictionary(Locale::It), TextMode::Plain) {
            for detail in &section.details {
                assert!(!detail.contains("<strong>"), "markup left in {}", detail);
            }
        }
    }
}
