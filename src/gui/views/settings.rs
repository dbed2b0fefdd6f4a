//! Settings view implementation
//!
//! - Appearance (theme preference)
//! - Expense form defaults (currency, category)
//! - Storage info

use eframe::egui::{self, RichText};

use crate::expense::{Category, Currency};
use crate::gui::app::SwipenseApp;
use crate::gui::notifications::NotificationEntry;
use crate::user_settings::{ThemePreference, UserSettings};

impl SwipenseApp {
    /// Render the settings view
    pub(crate) fn view_settings(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme;

        self.render_section_header(ui, "⚙", "SETTINGS");
        ui.add_space(theme.spacing_md);

        // Appearance panel
        let mut theme_changed = false;
        theme.frame_panel().show(ui, |ui| {
            ui.label(
                RichText::new("Appearance")
                    .size(16.0)
                    .strong()
                    .color(theme.text_primary),
            );
            ui.add_space(theme.spacing_sm);

            ui.horizontal(|ui| {
                ui.label("Theme:");
                for preference in [
                    ThemePreference::System,
                    ThemePreference::Light,
                    ThemePreference::Dark,
                ] {
                    let selected = self.user_settings.theme == preference;
                    if ui.selectable_label(selected, preference.label()).clicked() && !selected {
                        self.user_settings.theme = preference;
                        theme_changed = true;
                    }
                }
            });

            ui.add_space(theme.spacing_xs);
            ui.label(
                RichText::new("System follows the OS preference until you pick a theme.")
                    .small()
                    .color(theme.text_secondary),
            );
        });

        if theme_changed {
            if let Err(e) = self.user_settings.save() {
                self.push_notification(format!("Failed to save settings: {}", e));
            } else {
                self.push_notification("Theme preference saved.");
            }
            self.theme_dirty = true;
        }

        ui.add_space(theme.spacing_lg);

        // Expense form defaults panel
        theme.frame_panel().show(ui, |ui| {
            ui.label(
                RichText::new("New Expense Defaults")
                    .size(16.0)
                    .strong()
                    .color(theme.text_primary),
            );
            ui.add_space(theme.spacing_sm);

            egui::Grid::new("expense_defaults_grid")
                .num_columns(2)
                .spacing([theme.spacing_md, theme.spacing_xs])
                .show(ui, |ui| {
                    ui.label("Currency:");
                    egui::ComboBox::from_id_source("default_currency")
                        .selected_text(self.settings_pending_currency.code())
                        .show_ui(ui, |ui| {
                            for currency in Currency::ALL {
                                let selected = self.settings_pending_currency == currency;
                                if ui.selectable_label(selected, currency.code()).clicked() {
                                    self.settings_pending_currency = currency;
                                }
                            }
                        });
                    ui.end_row();

                    ui.label("Category:");
                    egui::ComboBox::from_id_source("default_category")
                        .selected_text(format!(
                            "{} {}",
                            self.settings_pending_category.icon(),
                            self.settings_pending_category.name()
                        ))
                        .show_ui(ui, |ui| {
                            for category in Category::ALL {
                                let selected = self.settings_pending_category == category;
                                let label = format!("{} {}", category.icon(), category.name());
                                if ui.selectable_label(selected, label).clicked() {
                                    self.settings_pending_category = category;
                                }
                            }
                        });
                    ui.end_row();
                });

            // Show save button only when the selection differs from what is saved
            let dirty = self.settings_pending_currency != self.user_settings.default_currency
                || self.settings_pending_category != self.user_settings.default_category;
            if dirty {
                ui.add_space(theme.spacing_xs);
                ui.horizontal(|ui| {
                    if ui.add(theme.button_primary("Save Defaults")).clicked() {
                        self.user_settings.default_currency = self.settings_pending_currency;
                        self.user_settings.default_category = self.settings_pending_category;
                        if let Err(e) = self.user_settings.save() {
                            self.push_notification(format!("Failed to save settings: {}", e));
                        } else {
                            self.push_notification("Expense defaults updated.");
                        }
                    }
                    ui.label(
                        RichText::new("(unsaved changes)")
                            .small()
                            .color(theme.warning),
                    );
                });
            }

            ui.add_space(theme.spacing_xs);
            ui.label(
                RichText::new("Preselected when adding a new expense.")
                    .small()
                    .color(theme.text_secondary),
            );
        });

        ui.add_space(theme.spacing_lg);

        // Storage panel
        theme.frame_panel().show(ui, |ui| {
            ui.label(
                RichText::new("Storage")
                    .size(16.0)
                    .strong()
                    .color(theme.text_primary),
            );
            ui.add_space(theme.spacing_sm);
            ui.label(
                RichText::new(format!("Settings file: {}", UserSettings::settings_path_display()))
                    .small()
                    .color(theme.text_secondary),
            );
            ui.label(
                RichText::new("Expenses live in memory only and reset on restart.")
                    .small()
                    .color(theme.text_secondary),
            );
        });
    }
}
