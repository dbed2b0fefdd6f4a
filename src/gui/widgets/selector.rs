//! Custom dropdown selector
//!
//! The modal form's currency and category pickers. A `SelectorGroup` owns the
//! open/closed state for a set of sibling selectors and guarantees at most
//! one is open; opening one closes the rest, and a click outside closes them
//! all.

use eframe::egui::{self, RichText, Stroke};

use crate::gui::theme::AppTheme;

/// Open/closed state shared by a set of sibling selectors
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectorGroup {
    open: Option<egui::Id>,
}

impl SelectorGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the selector with this id, closing any sibling
    pub fn open(&mut self, id: egui::Id) {
        self.open = Some(id);
    }

    /// Toggle the selector with this id; opening it closes any sibling
    pub fn toggle(&mut self, id: egui::Id) {
        self.open = if self.open == Some(id) { None } else { Some(id) };
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self, id: egui::Id) -> bool {
        self.open == Some(id)
    }

    pub fn any_open(&self) -> bool {
        self.open.is_some()
    }
}

/// Draw one selector: a value button plus, when open, a floating option list.
/// Returns true when the user picked an option this frame.
pub fn show<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    group: &mut SelectorGroup,
    id_source: &str,
    theme: &AppTheme,
    current: &mut T,
    options: &[T],
    label_of: impl Fn(&T) -> String,
) -> bool {
    let id = ui.make_persistent_id(id_source);

    let button = egui::Button::new(
        RichText::new(format!("{}  ⏷", label_of(current))).color(theme.text_primary),
    )
    .fill(theme.surface)
    .stroke(Stroke::new(1.0, theme.card_stroke))
    .min_size(egui::vec2(140.0, 30.0));
    let button_response = ui.add(button);

    if button_response.clicked() {
        group.toggle(id);
    }

    if !group.is_open(id) {
        return false;
    }

    let mut chose = false;
    let area = egui::Area::new(id.with("popup"))
        .order(egui::Order::Foreground)
        .fixed_pos(button_response.rect.left_bottom() + egui::vec2(0.0, 2.0))
        .show(ui.ctx(), |popup_ui| {
            egui::Frame::popup(&popup_ui.ctx().style()).show(popup_ui, |popup_ui| {
                popup_ui.set_min_width(button_response.rect.width());
                for option in options {
                    let selected = *option == *current;
                    if popup_ui
                        .selectable_label(selected, label_of(option))
                        .clicked()
                    {
                        *current = *option;
                        chose = true;
                    }
                }
            });
        });

    if chose {
        group.close_all();
        return true;
    }

    // A press anywhere outside the selector closes it
    let popup_rect = area.response.rect;
    let pressed_outside = ui.input(|i| {
        i.pointer.any_pressed()
            && i.pointer
                .interact_pos()
                .map_or(false, |pos| {
                    !popup_rect.contains(pos) && !button_response.rect.contains(pos)
                })
    });
    if pressed_outside {
        group.close_all();
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> egui::Id {
        egui::Id::new(name)
    }

    // ==================== SelectorGroup tests ====================

    #[test]
    fn test_group_starts_closed() {
        let group = SelectorGroup::new();
        assert!(!group.any_open());
    }

    #[test]
    fn test_opening_one_closes_the_sibling() {
        let mut group = SelectorGroup::new();
        group.open(id("currency"));
        assert!(group.is_open(id("currency")));

        group.open(id("category"));
        assert!(group.is_open(id("category")));
        assert!(!group.is_open(id("currency")));
    }

    #[test]
    fn test_toggle_reopening_same_selector_closes_it() {
        let mut group = SelectorGroup::new();
        group.toggle(id("currency"));
        assert!(group.is_open(id("currency")));

        group.toggle(id("currency"));
        assert!(!group.any_open());
    }

    #[test]
    fn test_toggle_other_selector_switches_open_state() {
        let mut group = SelectorGroup::new();
        group.toggle(id("currency"));
        group.toggle(id("category"));
        assert!(group.is_open(id("category")));
        assert!(!group.is_open(id("currency")));
    }

    #[test]
    fn test_close_all_is_idempotent() {
        let mut group = SelectorGroup::new();
        group.close_all();
        assert!(!group.any_open());

        group.open(id("currency"));
        group.close_all();
        group.close_all();
        assert!(!group.any_open());
    }
}
