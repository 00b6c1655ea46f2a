// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language store: the active locale and change notification.
//!
//! The store is an ordinary owned value. The application root builds one at
//! startup (seeded from the host language) and hands it, or a borrow of it,
//! to whatever renders text. Nothing here is global.

use super::catalog::dictionary;
use super::locale::Locale;
use super::tree::LocaleTree;

/// Callback run after every locale change.
pub type Listener = Box<dyn FnMut(Locale, &'static LocaleTree)>;

/// Handle returned by [`LanguageStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct LanguageStore {
    locale: Locale,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl LanguageStore {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Seed from an explicit preferred-language signal.
    pub fn detect(signal: Option<&str>) -> Self {
        Self::new(Locale::detect(signal))
    }

    /// Seed from the process environment.
    pub fn from_host() -> Self {
        Self::new(Locale::detect_from_env())
    }

    /// Current locale code.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Tree for the current locale. Never stale: it is resolved on each call.
    pub fn active_tree(&self) -> &'static LocaleTree {
        dictionary(self.locale)
    }

    /// Flip between Italian and English. Returns the new locale.
    pub fn toggle(&mut self) -> Locale {
        let next = self.locale.toggled();
        self.apply(next);
        next
    }

    /// Select a locale. Listeners only hear about actual changes.
    pub fn set_locale(&mut self, locale: Locale) {
        if locale != self.locale {
            self.apply(locale);
        }
    }

    /// Register a listener for locale changes. It is not called for the
    /// current value; read [`LanguageStore::active_tree`] for that.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(Locale, &'static LocaleTree) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn apply(&mut self, locale: Locale) {
        tracing::debug!(from = %self.locale, to = %locale, "locale changed");
        self.locale = locale;
        let tree = dictionary(locale);
        for (_, listener) in self.listeners.iter_mut() {
            listener(locale, tree);
        }
    }
}

impl Default for LanguageStore {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl std::fmt::Debug for LanguageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageStore")
            .field("locale", &self.locale)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn toggle_flips_and_returns_new_locale() {
        let mut store = LanguageStore::new(Locale::It);
        assert_eq!(store.toggle(), Locale::En);
        assert_eq!(store.locale(), Locale::En);
        assert_eq!(store.toggle(), Locale::It);
    }

    #[test]
    fn active_tree_follows_locale() {
        let mut store = LanguageStore::default();
        assert!(std::ptr::eq(store.active_tree(), dictionary(Locale::It)));
        store.toggle();
        assert!(std::ptr::eq(store.active_tree(), dictionary(Locale::En)));
    }

    #[test]
    fn listeners_receive_each_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = LanguageStore::new(Locale::It);
        let sink = Rc::clone(&seen);
        store.subscribe(move |locale, tree| {
            sink.borrow_mut().push((locale, tree.overlay.title));
        });

        store.toggle();
        store.toggle();

        assert_eq!(
            *seen.borrow(),
            vec![
                (Locale::En, "Neapolitans Index"),
                (Locale::It, "Napoletani Index"),
            ]
        );
    }

    #[test]
    fn set_same_locale_is_silent() {
        let count = Rc::new(RefCell::new(0));
        let mut store = LanguageStore::new(Locale::En);
        let sink = Rc::clone(&count);
        store.subscribe(move |_, _| *sink.borrow_mut() += 1);

        store.set_locale(Locale::En);
        assert_eq!(*count.borrow(), 0);
        store.set_locale(Locale::It);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let count = Rc::new(RefCell::new(0));
        let mut store = LanguageStore::default();
        let sink = Rc::clone(&count);
        let id = store.subscribe(move |_, _| *sink.borrow_mut() += 1);

        store.toggle();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.toggle();

        assert_eq!(*count.borrow(), 1);
        assert_eq!(store.listener_count(), 0);
    }
}
