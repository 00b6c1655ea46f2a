// SPDX-License-Identifier: PMPL-1.0-or-later

//! Desktop overlay built on eframe.

use crate::i18n::{LanguageStore, LocaleTree};
use crate::legend::parse_hex_color;
use crate::markup::to_plain;
use anyhow::{anyhow, Result};
use eframe::{egui, App, CreationContext, Frame, NativeOptions};

pub struct OverlayGui {
    store: LanguageStore,
    show_manual: bool,
    show_legend: bool,
}

impl OverlayGui {
    pub fn run(store: LanguageStore) -> Result<()> {
        let options = NativeOptions::default();
        let title = store.active_tree().overlay.title;
        eframe::run_native(
            title,
            options,
            Box::new(move |cc: &CreationContext<'_>| -> Box<dyn App> {
                Box::new(Self::new(store, cc))
            }),
        )
        .map_err(|err| anyhow!("failed to launch overlay GUI: {err}"))?;
        Ok(())
    }

    fn new(mut store: LanguageStore, cc: &CreationContext<'_>) -> Self {
        // Keep the native window title in step with the language.
        let ctx = cc.egui_ctx.clone();
        store.subscribe(move |_, tree| {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(tree.overlay.title.to_string()));
            ctx.request_repaint();
        });
        Self {
            store,
            show_manual: false,
            show_legend: true,
        }
    }
}

impl App for OverlayGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let tree = self.store.active_tree();
        let locale = self.store.locale();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.heading(tree.overlay.title);
                    ui.label(tree.overlay.subtitle);
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let switch = ui
                        .button(format!("{} {}", locale.flag(), locale.code().to_uppercase()))
                        .on_hover_text(locale.toggled().native_name());
                    if switch.clicked() {
                        self.store.toggle();
                    }
                    if ui.button(tree.info_btn).clicked() {
                        self.show_manual = !self.show_manual;
                    }
                    if ui.button(tree.overlay.toggle_btn).clicked() {
                        self.show_legend = !self.show_legend;
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("notification").show(ctx, |ui| {
            ui.label(format!(
                "{} {}",
                tree.notification.icon,
                to_plain(tree.notification.text)
            ));
        });

        if self.show_legend {
            egui::SidePanel::left("legend").show(ctx, |ui| render_legend(ui, tree));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.show_manual {
                render_manual(ui, tree);
            } else {
                ui.label(tree.overlay.top3.title);
                ui.label(format!("{}: -", tree.popup.national_index));
            }
        });
    }
}

fn render_legend(ui: &mut egui::Ui, tree: &LocaleTree) {
    ui.heading(tree.overlay.legend_title);
    ui.label(tree.overlay.axis_labels.high);
    egui::Grid::new("legend-bins").show(ui, |ui| {
        for bin in &tree.overlay.bins {
            let (r, g, b) = parse_hex_color(bin.color).unwrap_or((0, 0, 0));
            let (rect, _) = ui.allocate_exact_size(egui::vec2(18.0, 12.0), egui::Sense::hover());
            ui.painter()
                .rect_filled(rect, 2.0, egui::Color32::from_rgb(r, g, b));
            ui.label(bin.label);
            ui.end_row();
        }
    });
    ui.label(tree.overlay.axis_labels.low);
}

fn render_manual(ui: &mut egui::Ui, tree: &LocaleTree) {
    let modal = &tree.modal;
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.heading(modal.title);
        ui.label(to_plain(modal.intro));
        ui.separator();
        for case in [&modal.use_cases.find, &modal.use_cases.avoid] {
            ui.strong(format!("{} {}", case.icon, to_plain(case.title)));
            ui.label(to_plain(case.text));
        }
        ui.separator();
        ui.collapsing(modal.science.title, |ui| {
            ui.label(to_plain(modal.science.intro));
            for item in &modal.science.list {
                ui.label(format!("• {}", to_plain(item)));
            }
        });
        ui.collapsing(modal.nerd_details.title, |ui| {
            for item in &modal.nerd_details.items {
                ui.label(format!("• {}", to_plain(item)));
            }
        });
        ui.separator();
        ui.label(to_plain(modal.warning));
        ui.small(modal.attribution);
    });
}
