//! Expense list view
//!
//! Renders the swipeable rows, the totals line, and the add button, and
//! routes committed swipe intents to the modal controller.

use std::time::Instant;

use eframe::egui::{self, RichText};

use crate::gui::app::SwipenseApp;
use crate::gui::helpers::format_amount;
use crate::gui::widgets::{swipe_row, SwipeIntent};

impl SwipenseApp {
    pub(crate) fn view_expenses(&mut self, ui: &mut egui::Ui) {
        let now = Instant::now();
        let theme = self.theme;

        self.render_section_header(ui, "💳", "EXPENSES");
        ui.add_space(theme.spacing_xs);

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("{} expenses", self.book.len()))
                    .color(theme.text_secondary),
            );
            for (currency, total) in self.book.totals_by_currency() {
                ui.separator();
                ui.label(
                    RichText::new(format!("{} {}", format_amount(total), currency.code()))
                        .color(theme.text_secondary),
                );
            }
        });
        ui.add_space(theme.spacing_sm);

        ui.horizontal(|ui| {
            if ui.add(theme.button_primary("＋ Add Expense")).clicked() {
                self.modal.open_add(
                    self.user_settings.default_currency,
                    self.user_settings.default_category,
                    now,
                );
            }
            ui.label(
                RichText::new("swipe right to edit · swipe left to delete")
                    .small()
                    .color(theme.text_secondary),
            );
        });
        ui.add_space(theme.spacing_md);

        if self.book.is_empty() {
            ui.label(
                RichText::new("No expenses yet. Add one to get started.")
                    .color(theme.text_secondary),
            );
            return;
        }

        // Drop trackers for rows that no longer exist, so a commit flash on a
        // deleted record never fires its intent
        let ids: Vec<u64> = self.book.iter().map(|e| e.id).collect();
        self.expense_list.trackers.retain(|id, _| ids.contains(id));

        let mut intents: Vec<(u64, SwipeIntent)> = Vec::new();
        for (index, id) in ids.iter().copied().enumerate() {
            let Some(expense) = self.book.get(id) else {
                continue;
            };
            let tracker = self.expense_list.trackers.entry(id).or_default();
            let show_hint = index == 0 && !self.expense_list.hint_dismissed;

            let row = swipe_row::show(ui, expense, tracker, show_hint, &theme);
            if row.pressed && show_hint {
                self.expense_list.hint_dismissed = true;
            }
            if let Some(intent) = tracker.poll_intent(now) {
                intents.push((id, intent));
            }
            ui.add_space(theme.spacing_sm);
        }

        for (id, intent) in intents {
            match intent {
                SwipeIntent::Edit => self.modal.open_edit(&self.book, id, now),
                SwipeIntent::Delete => self.modal.open_delete(id),
            }
        }
    }
}
