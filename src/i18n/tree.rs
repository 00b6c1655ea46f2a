// SPDX-License-Identifier: PMPL-1.0-or-later

//! Typed schema shared by every locale's string tree.
//!
//! Both locales are values of the same [`LocaleTree`] type, so a key present
//! in one is present in the other by construction. Lists are fixed-size
//! arrays for the same reason. Fields serialize in camelCase to match the
//! key names the web overlay reads (`overlay.legendTitle`, ...).
//!
//! Strings may embed markup fragments (`<strong>`, `<em>`, `<code>`,
//! `<span class="c-red">`) meant to be rendered as markup; see
//! [`crate::markup`] for terminal rendering.

use serde::Serialize;
use serde_json::Value;

/// Number of bins in the choropleth legend.
pub const BIN_COUNT: usize = 9;

/// Bin fill colors, hottest first. Shared by every locale so a bin index maps
/// to the same color whatever the language.
pub const BIN_COLORS: [&str; BIN_COUNT] = [
    "#800026", "#bd0026", "#e31a1c", "#fc4e2a", "#fd8d3c", "#feb24c", "#fed976", "#ffe128",
    "#fff2a8",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleTree {
    pub notification: Notification,
    pub info_btn: &'static str,
    pub modal: Modal,
    pub overlay: Overlay,
    pub popup: Popup,
    pub attribution: &'static str,
}

/// Hint banner shown on first load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub icon: &'static str,
    pub text: &'static str,
}

/// The "how does it work" manual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Modal {
    pub title: &'static str,
    pub intro: &'static str,
    pub use_cases: UseCases,
    pub science: Science,
    pub nerd_details: NerdDetails,
    pub warning: &'static str,
    pub attribution: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UseCases {
    pub find: UseCase,
    pub avoid: UseCase,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UseCase {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Science {
    pub title: &'static str,
    pub intro: &'static str,
    pub list: [&'static str; 2],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NerdDetails {
    pub title: &'static str,
    pub items: [&'static str; 10],
}

/// Map chrome: title block, legend and the top-3 panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overlay {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub legend_title: &'static str,
    pub axis_labels: AxisLabels,
    pub bins: [LegendBin; BIN_COUNT],
    pub toggle_btn: &'static str,
    pub top3: Top3,
    pub updated: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisLabels {
    pub low: &'static str,
    pub high: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendBin {
    pub color: &'static str,
    pub label: &'static str,
}

impl LegendBin {
    /// Bin at `index` of [`BIN_COLORS`] with a localized label.
    pub const fn new(index: usize, label: &'static str) -> Self {
        Self {
            color: BIN_COLORS[index],
            label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Top3 {
    pub title: &'static str,
    pub toggle_btn: &'static str,
}

/// Country details popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Popup {
    pub national_index: &'static str,
}

impl LocaleTree {
    /// JSON view of the tree, using the serialized key names.
    pub fn to_value(&self) -> Value {
        // Only strings, arrays and structs: serialization cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Dotted path of every leaf, array positions written as `[n]`
    /// (`overlay.bins[3].label`). Sorted.
    pub fn key_paths(&self) -> Vec<String> {
        let value = self.to_value();
        let mut leaves = Vec::new();
        collect_leaves(&value, String::new(), &mut leaves);
        let mut paths: Vec<String> = leaves.into_iter().map(|(path, _)| path).collect();
        paths.sort();
        paths
    }

    /// String leaf at a dotted path such as `overlay.title` or
    /// `modal.science.list[1]`. Returns `None` for unknown paths and for
    /// paths that name a subtree rather than a leaf.
    pub fn get(&self, path: &str) -> Option<String> {
        let pointer = path_to_pointer(path)?;
        self.to_value()
            .pointer(&pointer)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// Every string leaf, paired with its path. Sorted by path.
    pub fn leaves(&self) -> Vec<(String, String)> {
        let value = self.to_value();
        let mut leaves = Vec::new();
        collect_leaves(&value, String::new(), &mut leaves);
        let mut strings: Vec<(String, String)> = leaves
            .into_iter()
            .filter_map(|(path, leaf)| leaf.as_str().map(|text| (path, text.to_string())))
            .collect();
        strings.sort();
        strings
    }
}

fn collect_leaves<'v>(value: &'v Value, prefix: String, out: &mut Vec<(String, &'v Value)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                collect_leaves(child, path, out);
            }
        }
        Value::Array(items) => {
            for (idx, child) in items.iter().enumerate() {
                collect_leaves(child, format!("{}[{}]", prefix, idx), out);
            }
        }
        leaf => out.push((prefix, leaf)),
    }
}

/// `overlay.bins[3].label` -> `/overlay/bins/3/label`.
fn path_to_pointer(path: &str) -> Option<String> {
    if path.trim().is_empty() {
        return None;
    }
    let mut pointer = String::new();
    for segment in path.split('.') {
        let (name, indices) = match segment.find('[') {
            Some(pos) => segment.split_at(pos),
            None => (segment, ""),
        };
        if name.is_empty() {
            return None;
        }
        pointer.push('/');
        pointer.push_str(name);

        let mut rest = indices;
        while !rest.is_empty() {
            let inner = rest.strip_prefix('[')?;
            let close = inner.find(']')?;
            let digits = &inner[..close];
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let index: usize = digits.parse().ok()?;
            pointer.push('/');
            pointer.push_str(&index.to_string());
            rest = &inner[close + 1..];
        }
    }
    Some(pointer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_conversion() {
        assert_eq!(path_to_pointer("overlay.title").as_deref(), Some("/overlay/title"));
        assert_eq!(
            path_to_pointer("overlay.bins[3].label").as_deref(),
            Some("/overlay/bins/3/label")
        );
        assert_eq!(
            path_to_pointer("modal.science.list[1]").as_deref(),
            Some("/modal/science/list/1")
        );
    }

    #[test]
    fn malformed_paths_rejected() {
        assert_eq!(path_to_pointer(""), None);
        assert_eq!(path_to_pointer("overlay..title"), None);
        assert_eq!(path_to_pointer("overlay.bins[x]"), None);
        assert_eq!(path_to_pointer("overlay.bins[1"), None);
        assert_eq!(path_to_pointer("overlay.bins[1]x"), None);
        assert_eq!(path_to_pointer("overlay.bins[+3].label"), None);
        assert_eq!(path_to_pointer("overlay.bins[-0].label"), None);
        assert_eq!(path_to_pointer("overlay.bins[].label"), None);
        assert_eq!(path_to_pointer("overlay.bins[ 3].label"), None);
    }

    #[test]
    fn legend_bin_takes_shared_color() {
        let bin = LegendBin::new(0, "top");
        assert_eq!(bin.color, "#800026");
        assert_eq!(LegendBin::new(BIN_COUNT - 1, "low").color, "#fff2a8");
    }
}
