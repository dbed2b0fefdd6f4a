//! Main GUI application module
//!
//! Contains the SwipenseApp struct, section navigation, the modal dialog
//! rendering, and the notification toast plumbing.

use std::collections::{HashMap, VecDeque};
use std::time::Instant;

use anyhow::{anyhow, Result};
use eframe::{egui, egui::RichText, App, Frame, NativeOptions};

use crate::expense::{Category, Currency, ExpenseBook};
use crate::user_settings::{ThemePreference, UserSettings};

use super::modal::{FormField, ModalController, ModalState, SaveOutcome};
use super::notifications::{NotificationEntry, TOAST_DURATION};
use super::theme::{configure_style, AppTheme};
use super::widgets::{selector, SwipeTracker};

/// GUI section enum for navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppSection {
    Expenses,
    Settings,
}

/// Per-session state of the expense list view
pub(crate) struct ExpenseListState {
    /// Gesture state per row, keyed by expense id
    pub(crate) trackers: HashMap<u64, SwipeTracker>,
    /// The first-row swipe hint is retired permanently on its first press
    pub(crate) hint_dismissed: bool,
}

impl Default for ExpenseListState {
    fn default() -> Self {
        Self {
            trackers: HashMap::new(),
            hint_dismissed: false,
        }
    }
}

pub struct SwipenseApp {
    pub(crate) user_settings: UserSettings,
    pub(crate) theme: AppTheme,
    pub(crate) theme_dirty: bool,
    pub(crate) section: AppSection,
    pub(crate) book: ExpenseBook,
    pub(crate) expense_list: ExpenseListState,
    pub(crate) modal: ModalController,
    pub(crate) notifications: VecDeque<NotificationEntry>,
    pub(crate) show_notifications_popup: bool,
    pub(crate) notification_toast_visible: bool,
    pub(crate) notification_toast_close_time: Option<Instant>,
    pub(crate) last_notification_count: usize,
    // Settings page editing state
    pub(crate) settings_pending_currency: Currency,
    pub(crate) settings_pending_category: Category,
}

impl SwipenseApp {
    fn new(ctx: &egui::Context, system_theme: Option<eframe::Theme>) -> Self {
        let user_settings = UserSettings::load();
        let theme = resolve_theme(user_settings.theme, system_theme);
        configure_style(ctx, &theme);

        let settings_pending_currency = user_settings.default_currency;
        let settings_pending_category = user_settings.default_category;
        let modal = ModalController::new(
            user_settings.default_currency,
            user_settings.default_category,
        );

        Self {
            user_settings,
            theme,
            theme_dirty: false,
            section: AppSection::Expenses,
            book: ExpenseBook::with_sample_data(),
            expense_list: ExpenseListState::default(),
            modal,
            notifications: VecDeque::with_capacity(20),
            show_notifications_popup: false,
            notification_toast_visible: false,
            notification_toast_close_time: None,
            last_notification_count: 0,
            settings_pending_currency,
            settings_pending_category,
        }
    }

    pub(crate) fn push_notification(&mut self, message: impl Into<String>) {
        self.notifications.push_back(NotificationEntry::new(message));
    }

    /// Section header shared by all views
    pub(crate) fn render_section_header(&self, ui: &mut egui::Ui, icon: &str, title: &str) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(icon).size(22.0));
            ui.heading(RichText::new(title).color(self.theme.text_primary).strong());
        });
    }

    fn sync_theme(&mut self, ctx: &egui::Context, system_theme: Option<eframe::Theme>) {
        let desired = resolve_theme(self.user_settings.theme, system_theme);
        if self.theme_dirty || desired.is_dark() != self.theme.is_dark() {
            self.theme = desired;
            configure_style(ctx, &self.theme);
            self.theme_dirty = false;
        }
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading(
                    RichText::new("💸 Swipense")
                        .size(22.0)
                        .color(self.theme.primary),
                );
                ui.label(
                    RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                        .size(12.0)
                        .color(self.theme.text_secondary),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (icon, hover) = if self.theme.is_dark() {
                        ("☀", "Switch to the light theme")
                    } else {
                        ("🌙", "Switch to the dark theme")
                    };
                    if ui
                        .add(egui::Button::new(RichText::new(icon).size(16.0)).frame(false))
                        .on_hover_text(hover)
                        .clicked()
                    {
                        self.user_settings.theme = if self.theme.is_dark() {
                            ThemePreference::Light
                        } else {
                            ThemePreference::Dark
                        };
                        if let Err(e) = self.user_settings.save() {
                            self.push_notification(format!("Failed to save settings: {}", e));
                        }
                        self.theme_dirty = true;
                    }
                });
            });
            ui.add_space(6.0);
        });
    }

    fn show_nav(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("nav")
            .resizable(false)
            .default_width(150.0)
            .frame(
                egui::Frame::none()
                    .fill(self.theme.surface)
                    .stroke(egui::Stroke::new(1.0, self.theme.card_stroke)),
            )
            .show(ctx, |ui| {
                ui.add_space(self.theme.spacing_md);

                let nav_items = [
                    (AppSection::Expenses, "💳 Expenses"),
                    (AppSection::Settings, "⚙ Settings"),
                ];

                for (section, label) in nav_items {
                    let selected = self.section == section;
                    ui.horizontal(|ui| {
                        if selected {
                            ui.add_space(2.0);
                            let (rect, _) = ui
                                .allocate_exact_size(egui::vec2(3.0, 20.0), egui::Sense::hover());
                            ui.painter().rect_filled(rect, 0.0, self.theme.primary);
                            ui.add_space(4.0);
                        } else {
                            ui.add_space(9.0);
                        }

                        let text_color = if selected {
                            self.theme.text_primary
                        } else {
                            self.theme.text_secondary
                        };
                        let response = ui.add(
                            egui::Button::new(RichText::new(label).size(13.0).color(text_color))
                                .fill(egui::Color32::TRANSPARENT)
                                .stroke(egui::Stroke::NONE)
                                .sense(egui::Sense::click()),
                        );
                        if response.clicked() {
                            self.section = section;
                        }
                    });
                    ui.add_space(self.theme.spacing_xs);
                }
            });
    }

    fn show_notifications(&mut self, ctx: &egui::Context, now: Instant) {
        // New notification arrived: show the toast and schedule its dismissal
        let current_count = self.notifications.len();
        if current_count > self.last_notification_count {
            self.notification_toast_visible = true;
            self.notification_toast_close_time = Some(now + TOAST_DURATION);
        }
        self.last_notification_count = current_count;

        // Auto-close the toast after its timeout
        if let Some(close_time) = self.notification_toast_close_time {
            if now >= close_time {
                self.notification_toast_visible = false;
                self.notification_toast_close_time = None;
            }
        }

        let has_notifications = !self.notifications.is_empty();
        let latest = self.notifications.back().map(|n| n.message.clone());

        egui::Area::new(egui::Id::new("notification_overlay"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, -10.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(self.theme.surface)
                    .rounding(6.0)
                    .stroke(egui::Stroke::new(1.0, self.theme.card_stroke))
                    .inner_margin(egui::Margin::symmetric(8.0, 6.0))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            let icon_color = if has_notifications {
                                self.theme.success
                            } else {
                                self.theme.text_secondary
                            };
                            if ui
                                .add(
                                    egui::Button::new(
                                        RichText::new("🔔").size(14.0).color(icon_color),
                                    )
                                    .fill(egui::Color32::TRANSPARENT)
                                    .stroke(egui::Stroke::NONE),
                                )
                                .on_hover_text("Notification history")
                                .clicked()
                            {
                                self.show_notifications_popup = !self.show_notifications_popup;
                            }

                            if self.notification_toast_visible {
                                if let Some(ref msg) = latest {
                                    ui.label(
                                        RichText::new(msg)
                                            .size(12.0)
                                            .color(self.theme.text_primary),
                                    );
                                }
                            } else if has_notifications {
                                ui.label(
                                    RichText::new(format!("{}", self.notifications.len()))
                                        .size(10.0)
                                        .color(self.theme.text_secondary),
                                );
                            }
                        });
                    });
            });

        if self.show_notifications_popup {
            egui::Window::new("Notifications")
                .collapsible(false)
                .resizable(true)
                .default_width(320.0)
                .default_height(240.0)
                .anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, -50.0])
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("{} notifications", self.notifications.len()))
                                .color(self.theme.text_secondary),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.add(self.theme.button_small("Close")).clicked() {
                                self.show_notifications_popup = false;
                            }
                            if ui.add(self.theme.button_small("Clear")).clicked() {
                                self.notifications.clear();
                            }
                        });
                    });
                    ui.separator();

                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .max_height(180.0)
                        .show(ui, |ui| {
                            if self.notifications.is_empty() {
                                ui.label(
                                    RichText::new("No notifications yet.")
                                        .color(self.theme.text_secondary),
                                );
                            } else {
                                for notification in self.notifications.iter().rev() {
                                    ui.horizontal(|ui| {
                                        ui.label(
                                            RichText::new(format!(
                                                "[{}]",
                                                notification.time_ago()
                                            ))
                                            .size(11.0)
                                            .color(self.theme.text_secondary),
                                        );
                                        ui.label(
                                            RichText::new(&notification.message)
                                                .size(12.0)
                                                .color(self.theme.text_primary),
                                        );
                                    });
                                    ui.add_space(3.0);
                                }
                            }
                        });
                });
        }
    }

    fn show_modals(&mut self, ctx: &egui::Context, now: Instant) {
        if !self.modal.is_open() {
            return;
        }

        // Dimmed backdrop behind the dialog; clicking it closes the modal
        let screen = ctx.screen_rect();
        let backdrop = egui::Area::new(egui::Id::new("modal_backdrop"))
            .order(egui::Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let response = ui.allocate_response(screen.size(), egui::Sense::click());
                ui.painter().rect_filled(screen, 0.0, self.theme.backdrop);
                response
            });
        if backdrop.inner.clicked() {
            self.modal.close();
            return;
        }

        match self.modal.state() {
            ModalState::Add | ModalState::Edit(_) => self.show_expense_form(ctx, now),
            ModalState::ConfirmDelete(_) => self.show_delete_confirm(ctx),
            ModalState::Closed => {}
        }
    }

    fn show_expense_form(&mut self, ctx: &egui::Context, now: Instant) {
        let theme = self.theme;
        let title = match self.modal.state() {
            ModalState::Edit(_) => "Edit Expense",
            _ => "Add New Expense",
        };

        egui::Area::new(egui::Id::new("expense_form_modal"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                egui::Frame::window(&ctx.style())
                    .inner_margin(theme.spacing_lg)
                    .show(ui, |ui| {
                        ui.set_width(320.0);

                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(title)
                                    .size(18.0)
                                    .strong()
                                    .color(theme.text_primary),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui
                                        .add(
                                            egui::Button::new(RichText::new("✕").size(14.0))
                                                .frame(false),
                                        )
                                        .clicked()
                                    {
                                        self.modal.close();
                                    }
                                },
                            );
                        });
                        ui.add_space(theme.spacing_sm);

                        ui.label(RichText::new("Description").color(theme.text_secondary));
                        let description_response = ui.add(
                            egui::TextEdit::singleline(&mut self.modal.form.description)
                                .hint_text("What did you spend on?")
                                .desired_width(f32::INFINITY),
                        );
                        ui.add_space(theme.spacing_xs);

                        ui.label(RichText::new("Amount").color(theme.text_secondary));
                        let amount_response = ui.add(
                            egui::TextEdit::singleline(&mut self.modal.form.amount)
                                .hint_text("0.00")
                                .desired_width(f32::INFINITY),
                        );
                        ui.add_space(theme.spacing_sm);

                        if let Some(field) = self.modal.form.take_due_focus(now) {
                            match field {
                                FormField::Description => description_response.request_focus(),
                                FormField::Amount => amount_response.request_focus(),
                            }
                        }

                        egui::Grid::new("expense_form_selectors")
                            .num_columns(2)
                            .spacing([theme.spacing_md, theme.spacing_xs])
                            .show(ui, |ui| {
                                ui.label(
                                    RichText::new("Currency").color(theme.text_secondary),
                                );
                                selector::show(
                                    ui,
                                    &mut self.modal.selectors,
                                    "currency_selector",
                                    &theme,
                                    &mut self.modal.form.currency,
                                    &Currency::ALL,
                                    |c| c.code().to_string(),
                                );
                                ui.end_row();

                                ui.label(
                                    RichText::new("Category").color(theme.text_secondary),
                                );
                                selector::show(
                                    ui,
                                    &mut self.modal.selectors,
                                    "category_selector",
                                    &theme,
                                    &mut self.modal.form.category,
                                    &Category::ALL,
                                    |c| format!("{} {}", c.icon(), c.name()),
                                );
                                ui.end_row();
                            });
                        ui.add_space(theme.spacing_md);

                        ui.horizontal(|ui| {
                            if ui.add(theme.button_primary("Save")).clicked() {
                                match self.modal.save(&mut self.book, now) {
                                    Some(Ok(SaveOutcome::Added)) => {
                                        self.push_notification("Expense added!")
                                    }
                                    Some(Ok(SaveOutcome::Updated)) => {
                                        self.push_notification("Expense updated!")
                                    }
                                    // Validation failure already refocused the
                                    // offending field
                                    Some(Err(_)) | None => {}
                                }
                            }
                            if ui.add(theme.button_secondary("Cancel")).clicked() {
                                self.modal.close();
                            }
                        });
                    });
            });
    }

    fn show_delete_confirm(&mut self, ctx: &egui::Context) {
        let theme = self.theme;
        let prompt = self
            .modal
            .pending_delete_id()
            .and_then(|id| self.book.get(id))
            .map(|e| format!("Delete \"{}\"?", e.description))
            .unwrap_or_else(|| "Delete this expense?".to_string());

        egui::Area::new(egui::Id::new("delete_confirm_modal"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                egui::Frame::window(&ctx.style())
                    .inner_margin(theme.spacing_lg)
                    .show(ui, |ui| {
                        ui.set_width(280.0);

                        ui.label(
                            RichText::new("Delete Expense")
                                .size(18.0)
                                .strong()
                                .color(theme.text_primary),
                        );
                        ui.add_space(theme.spacing_sm);
                        ui.label(RichText::new(prompt).color(theme.text_secondary));
                        ui.label(
                            RichText::new("This cannot be undone.")
                                .small()
                                .color(theme.text_secondary),
                        );
                        ui.add_space(theme.spacing_md);

                        ui.horizontal(|ui| {
                            if ui.add(theme.button_danger("Delete")).clicked()
                                && self.modal.confirm_delete(&mut self.book)
                            {
                                self.push_notification("Expense deleted!");
                            }
                            if ui.add(theme.button_secondary("Cancel")).clicked() {
                                self.modal.close();
                            }
                        });
                    });
            });
    }
}

impl App for SwipenseApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut Frame) {
        let now = Instant::now();
        self.sync_theme(ctx, frame.info().system_theme);

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.modal.close();
        }

        self.show_top_bar(ctx);
        self.show_nav(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(self.theme.spacing_md);
            egui::ScrollArea::vertical()
                .enable_scrolling(!self.modal.locks_scroll())
                .show(ui, |ui| match self.section {
                    AppSection::Expenses => self.view_expenses(ui),
                    AppSection::Settings => self.view_settings(ui),
                });
        });

        self.show_modals(ctx, now);
        self.show_notifications(ctx, now);

        // Keep the commit-flash and toast deadlines ticking even without input
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

fn resolve_theme(preference: ThemePreference, system: Option<eframe::Theme>) -> AppTheme {
    let dark = match preference {
        ThemePreference::Dark => true,
        ThemePreference::Light => false,
        ThemePreference::System => !matches!(system, Some(eframe::Theme::Light)),
    };
    if dark {
        AppTheme::dark()
    } else {
        AppTheme::light()
    }
}

pub fn launch() -> Result<()> {
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([480.0, 720.0])
        .with_min_inner_size([400.0, 560.0])
        .with_title("Swipense");

    let native_options = NativeOptions {
        viewport,
        persist_window: true,
        ..Default::default()
    };

    let app_creator = move |cc: &eframe::CreationContext<'_>| {
        Box::new(SwipenseApp::new(&cc.egui_ctx, cc.integration_info.system_theme)) as Box<dyn App>
    };

    eframe::run_native("Swipense - Expense Tracker", native_options, Box::new(app_creator))
        .map_err(|e| anyhow!("Failed to start GUI: {}", e))
}
