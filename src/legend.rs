// SPDX-License-Identifier: PMPL-1.0-or-later

//! Choropleth legend: which bin a country score falls into.
//!
//! Bin boundaries mirror the labels in the catalog (`≥ 90`, `60–89`, ...,
//! `1–3`, `0`). Scores are rounded upstream, so anything under 1 lands in
//! the bottom bin.

use crate::i18n::{dictionary, LegendBin, Locale, BIN_COUNT};

/// Inclusive lower bound of each bin, hottest first.
pub const BIN_THRESHOLDS: [f64; BIN_COUNT] = [90.0, 60.0, 40.0, 20.0, 12.0, 8.0, 4.0, 1.0, 0.0];

#[derive(Debug, Clone, Copy)]
pub struct Legend {
    bins: &'static [LegendBin; BIN_COUNT],
}

impl Legend {
    pub fn new(bins: &'static [LegendBin; BIN_COUNT]) -> Self {
        Self { bins }
    }

    pub fn for_locale(locale: Locale) -> Self {
        Self::new(&dictionary(locale).overlay.bins)
    }

    pub fn bins(&self) -> &'static [LegendBin; BIN_COUNT] {
        self.bins
    }

    /// Index of the bin for `score`. Negative and NaN scores go to the
    /// bottom bin.
    pub fn bin_index(score: f64) -> usize {
        BIN_THRESHOLDS
            .iter()
            .position(|threshold| score >= *threshold)
            .unwrap_or(BIN_COUNT - 1)
    }

    pub fn bin_for(&self, score: f64) -> &'static LegendBin {
        &self.bins[Self::bin_index(score)]
    }

    pub fn color_for(&self, score: f64) -> &'static str {
        self.bin_for(score).color
    }
}

/// Parse `#rrggbb` (leading `#` optional).
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_fall_in_upper_bin() {
        assert_eq!(Legend::bin_index(90.0), 0);
        assert_eq!(Legend::bin_index(89.9), 1);
        assert_eq!(Legend::bin_index(60.0), 1);
        assert_eq!(Legend::bin_index(40.0), 2);
        assert_eq!(Legend::bin_index(20.0), 3);
        assert_eq!(Legend::bin_index(12.0), 4);
        assert_eq!(Legend::bin_index(8.0), 5);
        assert_eq!(Legend::bin_index(4.0), 6);
        assert_eq!(Legend::bin_index(1.0), 7);
        assert_eq!(Legend::bin_index(0.0), 8);
    }

    #[test]
    fn out_of_range_scores() {
        assert_eq!(Legend::bin_index(250.0), 0);
        assert_eq!(Legend::bin_index(0.4), 8);
        assert_eq!(Legend::bin_index(-3.0), 8);
        assert_eq!(Legend::bin_index(f64::NAN), 8);
    }

    #[test]
    fn localized_labels_same_colors() {
        let it = Legend::for_locale(Locale::It);
        let en = Legend::for_locale(Locale::En);
        assert_eq!(it.bin_for(95.0).label, "≥ 90 (Folla)");
        assert_eq!(en.bin_for(95.0).label, "≥ 90 (Crowd)");
        assert_eq!(it.color_for(0.0), en.color_for(0.0));
        assert_eq!(en.color_for(45.0), "#e31a1c");
    }

    #[test]
    fn hex_colors_parse() {
        assert_eq!(parse_hex_color("#800026"), Some((0x80, 0x00, 0x26)));
        assert_eq!(parse_hex_color("fff2a8"), Some((0xff, 0xf2, 0xa8)));
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
        assert_eq!(parse_hex_color("#ééé"), None);
    }
}
