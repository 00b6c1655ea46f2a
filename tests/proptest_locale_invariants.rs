// SPDX-License-Identifier: PMPL-1.0-or-later

//! Property-based invariants for locale detection, toggling and the legend.
//!
//! 1. Detection never panics and only depends on the first two characters
//! 2. Any signal starting with "en" (any case) resolves to English
//! 3. Toggling an even number of times returns to the start
//! 4. The active tree always matches the locale after a sequence of changes
//! 5. Legend bins are monotone in the score

use napoletani_index::i18n::{dictionary, LanguageStore, Locale};
use napoletani_index::legend::{Legend, BIN_THRESHOLDS};
use proptest::prelude::*;

fn any_locale() -> impl Strategy<Value = Locale> {
    prop_oneof![Just(Locale::It), Just(Locale::En)]
}

proptest! {
    #[test]
    fn detection_depends_on_prefix_only(signal in ".*", suffix in ".*") {
        let locale = Locale::detect(Some(&signal));
        prop_assert!(Locale::all().contains(&locale));

        let prefix: String = signal.chars().take(2).collect();
        if prefix.chars().count() == 2 {
            let extended = format!("{}{}", signal, suffix);
            prop_assert_eq!(Locale::detect(Some(&extended)), locale);
        }
    }

    #[test]
    fn english_prefix_detected(rest in "[a-zA-Z_.-]{0,12}", upper in any::<bool>()) {
        let prefix = if upper { "EN" } else { "en" };
        prop_assert_eq!(Locale::detect(Some(&format!("{}{}", prefix, rest))), Locale::En);
    }

    #[test]
    fn even_toggles_are_identity(start in any_locale(), pairs in 0usize..20) {
        let mut store = LanguageStore::new(start);
        for _ in 0..pairs * 2 {
            store.toggle();
        }
        prop_assert_eq!(store.locale(), start);
    }

    #[test]
    fn active_tree_tracks_changes(ops in prop::collection::vec(prop::option::of(any_locale()), 0..30)) {
        let mut store = LanguageStore::default();
        for op in ops {
            match op {
                Some(locale) => store.set_locale(locale),
                None => { store.toggle(); }
            }
            prop_assert_eq!(store.active_tree(), dictionary(store.locale()));
        }
    }

    #[test]
    fn legend_is_monotone(a in -10.0f64..200.0, b in -10.0f64..200.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(Legend::bin_index(high) <= Legend::bin_index(low));

        let idx = Legend::bin_index(a);
        if a >= 0.0 {
            prop_assert!(a >= BIN_THRESHOLDS[idx]);
        }
    }
}
