//! Modal controller
//!
//! Owns which dialog is open (add/edit form or delete confirmation), the form
//! field state, and the transient "currently editing / pending deletion"
//! selection. At most one modal is open, and at most one record is selected,
//! at any time.

use std::time::{Duration, Instant};

use crate::expense::{Category, Currency, ExpenseBook, ExpenseFields, ValidationError};
use crate::gui::widgets::SelectorGroup;

/// Delay before the description field grabs focus, so the dialog has started
/// appearing first
pub const FOCUS_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Add,
    Edit(u64),
    ConfirmDelete(u64),
}

/// Form fields that can receive a programmatic focus request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Description,
    Amount,
}

/// The add/edit form's raw input state
#[derive(Debug, Clone)]
pub struct ExpenseForm {
    pub description: String,
    pub amount: String,
    pub currency: Currency,
    pub category: Category,
    focus_field: Option<FormField>,
    focus_at: Option<Instant>,
}

impl ExpenseForm {
    fn empty(currency: Currency, category: Category) -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            currency,
            category,
            focus_field: None,
            focus_at: None,
        }
    }

    fn reset(&mut self, currency: Currency, category: Category) {
        *self = Self::empty(currency, category);
    }

    fn populate(&mut self, description: &str, amount: f64, currency: Currency, category: Category) {
        self.description = description.to_string();
        self.amount = amount.to_string();
        self.currency = currency;
        self.category = category;
        self.focus_field = None;
        self.focus_at = None;
    }

    /// Schedule a focus request for `field` at time `at`
    pub fn request_focus(&mut self, field: FormField, at: Instant) {
        self.focus_field = Some(field);
        self.focus_at = Some(at);
    }

    /// Return the field to focus once its deadline has passed, at most once
    pub fn take_due_focus(&mut self, now: Instant) -> Option<FormField> {
        match (self.focus_field, self.focus_at) {
            (Some(field), Some(at)) if now >= at => {
                self.focus_field = None;
                self.focus_at = None;
                Some(field)
            }
            _ => None,
        }
    }
}

/// Which flow a successful save took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Added,
    Updated,
}

pub struct ModalController {
    state: ModalState,
    pub form: ExpenseForm,
    pub selectors: SelectorGroup,
}

impl ModalController {
    pub fn new(default_currency: Currency, default_category: Category) -> Self {
        Self {
            state: ModalState::Closed,
            form: ExpenseForm::empty(default_currency, default_category),
            selectors: SelectorGroup::new(),
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != ModalState::Closed
    }

    /// Background scrolling is locked whenever a modal is open
    pub fn locks_scroll(&self) -> bool {
        self.is_open()
    }

    /// The record currently selected for editing, if any
    pub fn editing_id(&self) -> Option<u64> {
        match self.state {
            ModalState::Edit(id) => Some(id),
            _ => None,
        }
    }

    /// The record pending deletion, if any
    pub fn pending_delete_id(&self) -> Option<u64> {
        match self.state {
            ModalState::ConfirmDelete(id) => Some(id),
            _ => None,
        }
    }

    /// Open the form in add mode with fresh defaults
    pub fn open_add(&mut self, default_currency: Currency, default_category: Category, now: Instant) {
        self.form.reset(default_currency, default_category);
        self.form.request_focus(FormField::Description, now + FOCUS_DELAY);
        self.selectors.close_all();
        self.state = ModalState::Add;
    }

    /// Open the form populated from an existing record. No-op when the id is
    /// no longer present.
    pub fn open_edit(&mut self, book: &ExpenseBook, id: u64, now: Instant) {
        let Some(expense) = book.get(id) else {
            return;
        };
        self.form.populate(
            &expense.description,
            expense.amount,
            expense.currency,
            expense.category,
        );
        self.form.request_focus(FormField::Description, now + FOCUS_DELAY);
        self.selectors.close_all();
        self.state = ModalState::Edit(id);
    }

    /// Open the delete confirmation for a record
    pub fn open_delete(&mut self, id: u64) {
        self.selectors.close_all();
        self.state = ModalState::ConfirmDelete(id);
    }

    /// Close whichever modal is open, clearing the transient selection and
    /// collapsing any open selector. Closing an already-closed modal is a
    /// no-op.
    pub fn close(&mut self) {
        self.state = ModalState::Closed;
        self.selectors.close_all();
        self.form.focus_field = None;
        self.form.focus_at = None;
    }

    /// Commit the form. Validation failures refocus the offending field and
    /// leave everything unchanged; success mutates the book, closes the
    /// modal, and reports which flow ran. Returns `None` when no form modal
    /// is open.
    pub fn save(
        &mut self,
        book: &mut ExpenseBook,
        now: Instant,
    ) -> Option<Result<SaveOutcome, ValidationError>> {
        let editing = match self.state {
            ModalState::Add => None,
            ModalState::Edit(id) => Some(id),
            _ => return None,
        };

        let fields = match ExpenseFields::parse(
            &self.form.description,
            &self.form.amount,
            self.form.currency,
            self.form.category,
        ) {
            Ok(fields) => fields,
            Err(err) => {
                let field = match err {
                    ValidationError::EmptyDescription => FormField::Description,
                    ValidationError::InvalidAmount => FormField::Amount,
                };
                self.form.request_focus(field, now);
                return Some(Err(err));
            }
        };

        let outcome = match editing {
            Some(id) => {
                book.update(id, fields);
                SaveOutcome::Updated
            }
            None => {
                book.add(fields);
                SaveOutcome::Added
            }
        };
        self.close();
        Some(Ok(outcome))
    }

    /// Commit a pending deletion. Removing an id that is already gone is a
    /// silent no-op; the modal closes unconditionally. Returns true when a
    /// pending id was set (the caller shows the "deleted" notification).
    pub fn confirm_delete(&mut self, book: &mut ExpenseBook) -> bool {
        let had_pending = match self.state {
            ModalState::ConfirmDelete(id) => {
                book.delete(id);
                true
            }
            _ => false,
        };
        self.close();
        had_pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ModalController {
        ModalController::new(Currency::Usd, Category::Food)
    }

    fn book() -> ExpenseBook {
        ExpenseBook::with_sample_data()
    }

    // ==================== open/close tests ====================

    #[test]
    fn test_open_add_resets_form_to_defaults() {
        let mut modal = ModalController::new(Currency::Eur, Category::Travel);
        modal.form.description = "stale".to_string();
        modal.form.amount = "12".to_string();

        modal.open_add(Currency::Eur, Category::Travel, Instant::now());

        assert_eq!(modal.state(), ModalState::Add);
        assert!(modal.form.description.is_empty());
        assert!(modal.form.amount.is_empty());
        assert_eq!(modal.form.currency, Currency::Eur);
        assert_eq!(modal.form.category, Category::Travel);
        assert!(modal.locks_scroll());
    }

    #[test]
    fn test_open_edit_populates_form_from_record() {
        let mut modal = controller();
        let book = book();

        modal.open_edit(&book, 2, Instant::now());

        assert_eq!(modal.state(), ModalState::Edit(2));
        assert_eq!(modal.editing_id(), Some(2));
        assert_eq!(modal.form.description, "Uber to Office");
        assert_eq!(modal.form.amount, "25");
        assert_eq!(modal.form.currency, Currency::Aed);
        assert_eq!(modal.form.category, Category::Transport);
    }

    #[test]
    fn test_open_edit_missing_id_is_noop() {
        let mut modal = controller();
        let book = book();

        modal.open_edit(&book, 999, Instant::now());

        assert_eq!(modal.state(), ModalState::Closed);
        assert!(!modal.is_open());
    }

    #[test]
    fn test_open_delete_stores_pending_id() {
        let mut modal = controller();
        modal.open_delete(3);
        assert_eq!(modal.state(), ModalState::ConfirmDelete(3));
        assert_eq!(modal.pending_delete_id(), Some(3));
        assert!(modal.locks_scroll());
    }

    #[test]
    fn test_close_clears_selection_and_selectors() {
        let mut modal = controller();
        let book = book();
        modal.open_edit(&book, 1, Instant::now());
        modal.selectors.open(eframe::egui::Id::new("currency"));

        modal.close();

        assert_eq!(modal.state(), ModalState::Closed);
        assert_eq!(modal.editing_id(), None);
        assert!(!modal.selectors.any_open());
    }

    #[test]
    fn test_close_when_already_closed_is_noop() {
        let mut modal = controller();
        modal.close();
        modal.close();
        assert_eq!(modal.state(), ModalState::Closed);
    }

    // ==================== focus scheduling tests ====================

    #[test]
    fn test_focus_fires_only_after_delay() {
        let now = Instant::now();
        let mut modal = controller();
        modal.open_add(Currency::Usd, Category::Food, now);

        assert_eq!(modal.form.take_due_focus(now), None);
        assert_eq!(
            modal.form.take_due_focus(now + FOCUS_DELAY),
            Some(FormField::Description)
        );
        // Consumed once
        assert_eq!(modal.form.take_due_focus(now + FOCUS_DELAY), None);
    }

    // ==================== save tests ====================

    #[test]
    fn test_save_add_flow_prepends_and_closes() {
        let now = Instant::now();
        let mut modal = controller();
        let mut book = book();
        let before = book.len();

        modal.open_add(Currency::Usd, Category::Food, now);
        modal.form.description = "Lunch".to_string();
        modal.form.amount = "9.99".to_string();

        let outcome = modal.save(&mut book, now);

        assert_eq!(outcome, Some(Ok(SaveOutcome::Added)));
        assert_eq!(book.len(), before + 1);
        let first = book.iter().next().unwrap();
        assert_eq!(first.description, "Lunch");
        assert_eq!(modal.state(), ModalState::Closed);
    }

    #[test]
    fn test_save_edit_flow_updates_in_place() {
        let now = Instant::now();
        let mut modal = controller();
        let mut book = book();

        modal.open_edit(&book, 3, now);
        modal.form.description = "Spotify Subscription".to_string();
        modal.form.amount = "10.99".to_string();

        let outcome = modal.save(&mut book, now);

        assert_eq!(outcome, Some(Ok(SaveOutcome::Updated)));
        let updated = book.get(3).unwrap();
        assert_eq!(updated.description, "Spotify Subscription");
        assert_eq!(updated.amount, 10.99);
        assert_eq!(modal.state(), ModalState::Closed);
    }

    #[test]
    fn test_save_empty_description_refocuses_and_keeps_modal_open() {
        let now = Instant::now();
        let mut modal = controller();
        let mut book = book();
        let before = book.len();

        modal.open_add(Currency::Usd, Category::Food, now);
        modal.form.description = "   ".to_string();
        modal.form.amount = "5".to_string();

        let outcome = modal.save(&mut book, now);

        assert_eq!(outcome, Some(Err(ValidationError::EmptyDescription)));
        assert_eq!(book.len(), before);
        assert_eq!(modal.state(), ModalState::Add);
        assert_eq!(modal.form.take_due_focus(now), Some(FormField::Description));
    }

    #[test]
    fn test_save_invalid_amount_refocuses_amount_field() {
        let now = Instant::now();
        let mut modal = controller();
        let mut book = book();
        let before = book.len();

        modal.open_add(Currency::Usd, Category::Food, now);
        modal.form.description = "Lunch".to_string();

        for bad in ["abc", "0", "-3"] {
            modal.form.amount = bad.to_string();
            let outcome = modal.save(&mut book, now);
            assert_eq!(outcome, Some(Err(ValidationError::InvalidAmount)));
            assert_eq!(modal.form.take_due_focus(now), Some(FormField::Amount));
        }
        assert_eq!(book.len(), before);
        assert_eq!(modal.state(), ModalState::Add);
    }

    #[test]
    fn test_save_with_no_modal_open_is_noop() {
        let now = Instant::now();
        let mut modal = controller();
        let mut book = book();
        let before = book.len();

        assert_eq!(modal.save(&mut book, now), None);
        assert_eq!(book.len(), before);
    }

    #[test]
    fn test_save_during_delete_confirm_is_noop() {
        let now = Instant::now();
        let mut modal = controller();
        let mut book = book();

        modal.open_delete(1);
        assert_eq!(modal.save(&mut book, now), None);
        assert_eq!(modal.state(), ModalState::ConfirmDelete(1));
    }

    // ==================== confirm_delete tests ====================

    #[test]
    fn test_confirm_delete_removes_record_and_closes() {
        let mut modal = controller();
        let mut book = book();
        let before = book.len();

        modal.open_delete(2);
        let had_pending = modal.confirm_delete(&mut book);

        assert!(had_pending);
        assert_eq!(book.len(), before - 1);
        assert!(book.get(2).is_none());
        assert_eq!(modal.state(), ModalState::Closed);
        assert_eq!(modal.pending_delete_id(), None);
    }

    #[test]
    fn test_confirm_delete_absent_id_still_closes() {
        let mut modal = controller();
        let mut book = book();
        let before = book.len();

        modal.open_delete(999);
        let had_pending = modal.confirm_delete(&mut book);

        // Target already gone: collection untouched, modal closed anyway
        assert!(had_pending);
        assert_eq!(book.len(), before);
        assert_eq!(modal.state(), ModalState::Closed);
    }

    #[test]
    fn test_confirm_delete_with_no_pending_id_is_noop() {
        let mut modal = controller();
        let mut book = book();
        let before = book.len();

        let had_pending = modal.confirm_delete(&mut book);

        assert!(!had_pending);
        assert_eq!(book.len(), before);
        assert_eq!(modal.state(), ModalState::Closed);
    }
}
