// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal overlay. `l` switches language through the store; the store's
//! change notification marks the view for rebuilding.

use super::{build_sections, Section, TextMode, MANUAL_START};
use crate::i18n::LanguageStore;
use anyhow::Result;
use colored::*;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{self, ClearType},
};
use std::cell::Cell;
use std::io::{stdout, Write};
use std::rc::Rc;
use std::time::Duration;

pub struct OverlayTui;

impl OverlayTui {
    pub fn run(store: &mut LanguageStore) -> Result<()> {
        terminal::enable_raw_mode()?;
        let result = Self::run_inner(store);
        terminal::disable_raw_mode()?;
        result
    }

    fn run_inner(store: &mut LanguageStore) -> Result<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;

        let stale = Rc::new(Cell::new(true));
        let flag = Rc::clone(&stale);
        let subscription = store.subscribe(move |_, _| flag.set(true));

        let mut sections: Vec<Section> = Vec::new();
        let mut selected = 0;
        let mut expanded: Vec<bool> = Vec::new();

        let outcome = loop {
            if stale.replace(false) {
                sections = build_sections(store.active_tree(), TextMode::Ansi);
                if expanded.len() != sections.len() {
                    expanded = vec![false; sections.len()];
                    expanded[0] = true;
                }
                selected = selected.min(sections.len().saturating_sub(1));
            }

            if let Err(err) = Self::render(&mut stdout, store, &sections, selected, &expanded) {
                break Err(err);
            }

            match Self::next_key() {
                Ok(Some(KeyCode::Char('q'))) | Ok(Some(KeyCode::Esc)) => break Ok(()),
                Ok(Some(KeyCode::Char('l'))) => {
                    store.toggle();
                }
                Ok(Some(KeyCode::Tab | KeyCode::Char('j') | KeyCode::Down)) => {
                    selected = (selected + 1) % sections.len();
                }
                Ok(Some(KeyCode::BackTab | KeyCode::Char('k') | KeyCode::Up)) => {
                    selected = (selected + sections.len() - 1) % sections.len();
                }
                Ok(Some(KeyCode::Char(' ') | KeyCode::Enter)) => {
                    if let Some(open) = expanded.get_mut(selected) {
                        *open = !*open;
                    }
                }
                Ok(Some(KeyCode::Char('i'))) => {
                    let manual_open = expanded.iter().skip(MANUAL_START).all(|open| *open);
                    for open in expanded.iter_mut().skip(MANUAL_START) {
                        *open = !manual_open;
                    }
                }
                Ok(_) => {}
                Err(err) => break Err(err),
            }
        };

        store.unsubscribe(subscription);
        outcome
    }

    fn next_key() -> Result<Option<KeyCode>> {
        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(KeyEvent { code, .. }) = event::read()? {
                return Ok(Some(code));
            }
        }
        Ok(None)
    }

    fn render(
        stdout: &mut impl Write,
        store: &LanguageStore,
        sections: &[Section],
        selected: usize,
        expanded: &[bool],
    ) -> Result<()> {
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        let locale = store.locale();
        let tree = store.active_tree();
        write!(
            stdout,
            "{}  {}\r\n\r\n",
            tree.overlay.title.bold().cyan(),
            format!("[{} {}]", locale.flag(), locale.code()).yellow()
        )?;

        for (idx, section) in sections.iter().enumerate() {
            let indicator = if idx == selected {
                "➤".green()
            } else {
                " ".normal()
            };
            write!(
                stdout,
                "{} {} {}\r\n",
                indicator,
                section.title.bold(),
                section.summary.dimmed()
            )?;
            if expanded.get(idx).copied().unwrap_or(false) {
                for detail in &section.details {
                    write!(stdout, "    {}\r\n", detail)?;
                }
            }
            write!(stdout, "\r\n")?;
        }

        write!(
            stdout,
            "{}\r\n",
            format!(
                "[Tab/j] Next  [Shift+Tab/k] Prev  [Space] Expand  [i] {}  [l] {}  [q] Quit",
                tree.info_btn,
                locale.toggled().native_name()
            )
            .dimmed()
        )?;
        stdout.flush()?;
        Ok(())
    }
}
