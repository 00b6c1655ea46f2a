// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rendering of the inline markup embedded in catalog strings.
//!
//! The web overlay injects these fragments as HTML. Terminal and desktop
//! consumers need either plain text or ANSI styling instead. Only the small
//! tag set the catalog uses is understood; anything else is dropped and its
//! text kept.

use colored::{ColoredString, Colorize};
use regex::Regex;
use std::sync::OnceLock;

fn tag_regex() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| {
        Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9]*)([^>]*)>").expect("static tag pattern")
    })
}

fn class_regex() -> &'static Regex {
    static CLASS: OnceLock<Regex> = OnceLock::new();
    CLASS.get_or_init(|| {
        Regex::new(r#"class\s*=\s*["']([^"']*)["']"#).expect("static class pattern")
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Bold,
    Italic,
    Code,
    Red,
    Yellow,
    White,
}

impl Style {
    fn from_tag(name: &str, attrs: &str) -> Option<Style> {
        match name {
            "strong" | "b" => Some(Style::Bold),
            "em" | "i" => Some(Style::Italic),
            "code" => Some(Style::Code),
            "span" => {
                let classes = class_regex().captures(attrs)?.get(1)?.as_str();
                classes.split_whitespace().find_map(|class| match class {
                    "c-red" => Some(Style::Red),
                    "c-yellow" => Some(Style::Yellow),
                    "c-white" => Some(Style::White),
                    _ => None,
                })
            }
            _ => None,
        }
    }

    fn apply(self, text: ColoredString) -> ColoredString {
        match self {
            Style::Bold => text.bold(),
            Style::Italic => text.italic(),
            Style::Code => text.cyan(),
            Style::Red => text.red(),
            Style::Yellow => text.yellow(),
            Style::White => text.bright_white(),
        }
    }
}

/// Strip tags and decode the basic HTML entities.
///
/// ```
/// use napoletani_index::markup::to_plain;
/// assert_eq!(to_plain("<strong>Nota:</strong> ciao"), "Nota: ciao");
/// ```
pub fn to_plain(fragment: &str) -> String {
    decode_entities(&tag_regex().replace_all(fragment, ""))
}

/// Render with ANSI styles: bold, italic, cyan code, and the `c-*` colors.
pub fn to_ansi(fragment: &str) -> String {
    let mut out = String::new();
    let mut stack: Vec<(String, Option<Style>)> = Vec::new();
    let mut cursor = 0;

    for caps in tag_regex().captures_iter(fragment) {
        let Some(whole) = caps.get(0) else { continue };
        push_styled(&mut out, &fragment[cursor..whole.start()], &stack);
        cursor = whole.end();

        let closing = !caps[1].is_empty();
        let name = caps[2].to_ascii_lowercase();
        if closing {
            if let Some(pos) = stack.iter().rposition(|(open, _)| *open == name) {
                stack.truncate(pos);
            }
        } else if !caps[3].trim_end().ends_with('/') && name != "br" {
            let style = Style::from_tag(&name, &caps[3]);
            stack.push((name, style));
        }
    }
    push_styled(&mut out, &fragment[cursor..], &stack);
    out
}

fn push_styled(out: &mut String, raw: &str, stack: &[(String, Option<Style>)]) {
    if raw.is_empty() {
        return;
    }
    let decoded = decode_entities(raw);
    let mut styled = decoded.as_str().normal();
    for style in stack.iter().filter_map(|(_, style)| *style) {
        styled = style.apply(styled);
    }
    out.push_str(&styled.to_string());
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_strips_catalog_tags() {
        assert_eq!(
            to_plain("Punta alle zone <span class=\"c-red\">Rosse</span>."),
            "Punta alle zone Rosse."
        );
        assert_eq!(
            to_plain("<strong>Formula:</strong> <code>index = a / b</code>"),
            "Formula: index = a / b"
        );
    }

    #[test]
    fn plain_decodes_entities() {
        assert_eq!(to_plain("a &lt;b&gt; &amp;amp;"), "a <b> &amp;");
    }

    fn strip_ansi(text: &str) -> String {
        Regex::new(r"\x1b\[[0-9;]*m")
            .unwrap()
            .replace_all(text, "")
            .into_owned()
    }

    #[test]
    fn ansi_keeps_text() {
        assert_eq!(
            strip_ansi(&to_ansi("Vuoi fare a <em>questione</em>?")),
            "Vuoi fare a questione?"
        );
        assert_eq!(
            strip_ansi(&to_ansi("riga<br/>due <blink>x</blink>")),
            "rigadue x"
        );
    }

    #[test]
    fn ansi_styles_nested_tags() {
        colored::control::set_override(true);
        let rendered = to_ansi("<strong>Nota: <em>desiderio</em></strong> fine");
        colored::control::unset_override();
        assert!(rendered.contains("\u{1b}["));
        assert!(rendered.contains("desiderio"));
        assert!(rendered.ends_with(" fine"));
    }

    #[test]
    fn span_class_lookup() {
        assert_eq!(Style::from_tag("span", " class=\"c-red\""), Some(Style::Red));
        assert_eq!(Style::from_tag("span", " class='big c-yellow'"), Some(Style::Yellow));
        assert_eq!(Style::from_tag("span", ""), None);
        assert_eq!(Style::from_tag("blink", ""), None);
    }
}
