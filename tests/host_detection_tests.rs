// SPDX-License-Identifier: PMPL-1.0-or-later

//! Host language detection from the process environment.
//!
//! Everything lives in one test function because the environment is shared
//! by every thread of the test binary.

use napoletani_index::i18n::*;
use std::env;

fn clear_host_vars() {
    for name in HOST_LANGUAGE_VARS {
        env::remove_var(name);
    }
}

#[test]
fn test_host_signal_priority() {
    clear_host_vars();
    assert_eq!(host_language_signal(), None);
    assert_eq!(Locale::detect_from_env(), Locale::It);

    // Blank values are skipped, not treated as a signal.
    env::set_var("LANG", "en_US.UTF-8");
    env::set_var("LC_MESSAGES", "");
    env::set_var("LC_ALL", "   ");
    assert_eq!(host_language_signal().as_deref(), Some("en_US.UTF-8"));
    assert_eq!(Locale::detect_from_env(), Locale::En);
    assert_eq!(LanguageStore::from_host().locale(), Locale::En);

    env::set_var("NAPOLETANI_LANG", "it");
    assert_eq!(host_language_signal().as_deref(), Some("it"));
    assert_eq!(Locale::detect_from_env(), Locale::It);

    env::remove_var("NAPOLETANI_LANG");
    env::set_var("LC_ALL", "C.UTF-8");
    assert_eq!(host_language_signal().as_deref(), Some("C.UTF-8"));
    assert_eq!(Locale::detect_from_env(), Locale::It);
    assert_eq!(LanguageStore::from_host().locale(), Locale::It);

    env::set_var("LC_ALL", "en_GB.UTF-8");
    assert_eq!(Locale::detect_from_env(), Locale::En);

    clear_host_vars();
}
