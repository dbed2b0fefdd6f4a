//! Swipeable expense row
//!
//! Each row interprets a horizontal drag as an edit (right) or delete (left)
//! intent. `SwipeTracker` holds the gesture state machine and is independent
//! of the UI so the thresholds can be tested directly; `show` drives it from
//! egui pointer events and paints the row.

use std::time::{Duration, Instant};

use eframe::egui::{self, Align2, Color32, FontId, PointerButton, Sense, Stroke};

use crate::expense::Expense;
use crate::gui::helpers::format_amount;
use crate::gui::theme::AppTheme;

/// Maximum visual translation of a row, in points
pub const MAX_SWIPE: f32 = 100.0;
/// Displacement a gesture must exceed to commit an intent
pub const COMMIT_THRESHOLD: f32 = 80.0;
/// Displacement beyond which the gesture claims the pointer from scrolling
pub const JITTER_THRESHOLD: f32 = 10.0;
/// How long the committed visual state is shown before the intent fires
pub const COMMIT_FLASH: Duration = Duration::from_millis(200);

/// Height of a rendered row
pub const ROW_HEIGHT: f32 = 56.0;

/// What a committed gesture asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeIntent {
    Edit,
    Delete,
}

#[derive(Debug, Clone, Copy)]
struct Committed {
    intent: SwipeIntent,
    since: Instant,
}

/// Per-row gesture state machine.
///
/// Rows track independently; a tracker only reacts to `drag_to`/`release`
/// while a press is active.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    start_x: f32,
    offset: f32,
    dragging: bool,
    scroll_locked: bool,
    committed: Option<Committed>,
}

impl SwipeTracker {
    /// Begin a drag at the given horizontal coordinate. Clears any prior
    /// committed visual state.
    pub fn press(&mut self, x: f32) {
        self.dragging = true;
        self.start_x = x;
        self.offset = 0.0;
        self.scroll_locked = false;
        self.committed = None;
    }

    /// Track pointer movement. A move with no active drag is a no-op.
    pub fn drag_to(&mut self, x: f32) {
        if !self.dragging {
            return;
        }
        let raw = x - self.start_x;
        self.offset = raw.clamp(-MAX_SWIPE, MAX_SWIPE);
        if raw.abs() > JITTER_THRESHOLD {
            self.scroll_locked = true;
        }
    }

    /// End the drag. The visual translation snaps back to zero; if the final
    /// displacement crossed the commit threshold, the matching intent is
    /// armed and will be delivered by `poll_intent` once the commit flash
    /// has been shown.
    pub fn release(&mut self, now: Instant) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        self.scroll_locked = false;
        let final_offset = self.offset;
        self.offset = 0.0;

        if final_offset > COMMIT_THRESHOLD {
            self.committed = Some(Committed {
                intent: SwipeIntent::Edit,
                since: now,
            });
        } else if final_offset < -COMMIT_THRESHOLD {
            self.committed = Some(Committed {
                intent: SwipeIntent::Delete,
                since: now,
            });
        }
    }

    /// Deliver the armed intent once the commit flash delay has elapsed.
    /// Returns the intent at most once.
    pub fn poll_intent(&mut self, now: Instant) -> Option<SwipeIntent> {
        match self.committed {
            Some(committed) if now.duration_since(committed.since) >= COMMIT_FLASH => {
                self.committed = None;
                Some(committed.intent)
            }
            _ => None,
        }
    }

    /// Current clamped horizontal translation
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The intent currently in its commit-flash window, if any
    pub fn committed_intent(&self) -> Option<SwipeIntent> {
        self.committed.map(|c| c.intent)
    }

    /// Whether the gesture has moved far enough that scrolling must stay
    /// suppressed for its remainder
    pub fn wants_scroll_lock(&self) -> bool {
        self.scroll_locked
    }
}

/// What happened on a row this frame
pub struct RowResponse {
    /// A press started on the row (used to retire the first-row hint)
    pub pressed: bool,
}

/// Render one expense row and feed its gesture tracker.
///
/// egui keeps delivering drag events to the row after the pointer leaves its
/// bounds, so a mouse release outside the row still ends the gesture.
pub fn show(
    ui: &mut egui::Ui,
    expense: &Expense,
    tracker: &mut SwipeTracker,
    show_hint: bool,
    theme: &AppTheme,
) -> RowResponse {
    let desired = egui::vec2(ui.available_width(), ROW_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(desired, Sense::drag());
    let response = response.on_hover_cursor(egui::CursorIcon::Grab);

    let mut pressed = false;
    if response.drag_started_by(PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            tracker.press(pos.x);
            pressed = true;
        }
    }
    if tracker.is_dragging() {
        if let Some(pos) = response.interact_pointer_pos() {
            tracker.drag_to(pos.x);
        }
        if response.drag_stopped() {
            tracker.release(Instant::now());
        }
    }

    let mut offset = tracker.offset();
    if show_hint && !tracker.is_dragging() && tracker.committed_intent().is_none() {
        // Idle nudge on the first row until the user picks it up
        let t = ui.input(|i| i.time);
        offset += ((t * 3.0).sin() as f32) * 6.0;
        ui.ctx().request_repaint();
    }

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();

        // Action backdrop revealed by the translation
        if offset > 0.5 {
            painter.rect_filled(rect, 8.0, theme.edit_action);
            painter.text(
                rect.left_center() + egui::vec2(16.0, 0.0),
                Align2::LEFT_CENTER,
                "✏ Edit",
                FontId::proportional(14.0),
                Color32::WHITE,
            );
        } else if offset < -0.5 {
            painter.rect_filled(rect, 8.0, theme.delete_action);
            painter.text(
                rect.right_center() - egui::vec2(16.0, 0.0),
                Align2::RIGHT_CENTER,
                "🗑 Delete",
                FontId::proportional(14.0),
                Color32::WHITE,
            );
        }

        let card_rect = rect.translate(egui::vec2(offset, 0.0));
        let stroke = match tracker.committed_intent() {
            Some(SwipeIntent::Edit) => Stroke::new(2.0, theme.edit_action),
            Some(SwipeIntent::Delete) => Stroke::new(2.0, theme.delete_action),
            None => Stroke::new(1.0, theme.card_stroke),
        };
        painter.rect_filled(card_rect, 8.0, theme.card_fill);
        painter.rect_stroke(card_rect, 8.0, stroke);

        // Category icon
        painter.text(
            card_rect.left_center() + egui::vec2(22.0, 0.0),
            Align2::CENTER_CENTER,
            expense.category.icon(),
            FontId::proportional(20.0),
            theme.text_primary,
        );

        // Description and category name
        painter.text(
            card_rect.left_center() + egui::vec2(44.0, -9.0),
            Align2::LEFT_CENTER,
            &expense.description,
            FontId::proportional(14.0),
            theme.text_primary,
        );
        painter.text(
            card_rect.left_center() + egui::vec2(44.0, 10.0),
            Align2::LEFT_CENTER,
            expense.category.name(),
            FontId::proportional(11.0),
            theme.text_secondary,
        );

        // Amount and currency
        painter.text(
            card_rect.right_center() + egui::vec2(-14.0, -9.0),
            Align2::RIGHT_CENTER,
            format_amount(expense.amount),
            FontId::proportional(15.0),
            theme.text_primary,
        );
        painter.text(
            card_rect.right_center() + egui::vec2(-14.0, 10.0),
            Align2::RIGHT_CENTER,
            expense.currency.code(),
            FontId::proportional(11.0),
            theme.text_secondary,
        );
    }

    RowResponse { pressed }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn released(tracker: &mut SwipeTracker, start: f32, end: f32, now: Instant) {
        tracker.press(start);
        tracker.drag_to(end);
        tracker.release(now);
    }

    // ==================== press/drag tests ====================

    #[test]
    fn test_move_without_press_is_noop() {
        let mut tracker = SwipeTracker::default();
        tracker.drag_to(50.0);
        assert_eq!(tracker.offset(), 0.0);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn test_offset_tracks_displacement() {
        let mut tracker = SwipeTracker::default();
        tracker.press(200.0);
        tracker.drag_to(245.0);
        assert_eq!(tracker.offset(), 45.0);
        tracker.drag_to(160.0);
        assert_eq!(tracker.offset(), -40.0);
    }

    #[test]
    fn test_offset_is_clamped_to_max_swipe() {
        let mut tracker = SwipeTracker::default();
        tracker.press(0.0);
        tracker.drag_to(250.0);
        assert_eq!(tracker.offset(), MAX_SWIPE);
        tracker.drag_to(-250.0);
        assert_eq!(tracker.offset(), -MAX_SWIPE);
    }

    #[test]
    fn test_scroll_lock_engages_past_jitter_threshold() {
        let mut tracker = SwipeTracker::default();
        tracker.press(0.0);
        tracker.drag_to(8.0);
        assert!(!tracker.wants_scroll_lock());
        tracker.drag_to(11.0);
        assert!(tracker.wants_scroll_lock());
        // Once locked, moving back under the threshold keeps the lock
        tracker.drag_to(2.0);
        assert!(tracker.wants_scroll_lock());
    }

    #[test]
    fn test_press_clears_previous_commit() {
        let now = Instant::now();
        let mut tracker = SwipeTracker::default();
        released(&mut tracker, 0.0, 85.0, now);
        assert!(tracker.committed_intent().is_some());

        tracker.press(10.0);
        assert!(tracker.committed_intent().is_none());
    }

    // ==================== release threshold tests ====================

    #[test]
    fn test_right_swipe_past_threshold_commits_edit() {
        let now = Instant::now();
        let mut tracker = SwipeTracker::default();
        released(&mut tracker, 0.0, 85.0, now);

        assert_eq!(tracker.offset(), 0.0);
        assert_eq!(tracker.committed_intent(), Some(SwipeIntent::Edit));
    }

    #[test]
    fn test_right_swipe_below_threshold_snaps_back_silently() {
        let now = Instant::now();
        let mut tracker = SwipeTracker::default();
        released(&mut tracker, 0.0, 60.0, now);

        assert_eq!(tracker.offset(), 0.0);
        assert_eq!(tracker.committed_intent(), None);
        assert_eq!(tracker.poll_intent(now + COMMIT_FLASH), None);
    }

    #[test]
    fn test_left_swipe_past_threshold_commits_delete() {
        let now = Instant::now();
        let mut tracker = SwipeTracker::default();
        released(&mut tracker, 100.0, 15.0, now);

        assert_eq!(tracker.committed_intent(), Some(SwipeIntent::Delete));
    }

    #[test]
    fn test_zero_net_displacement_commits_nothing() {
        let now = Instant::now();
        let mut tracker = SwipeTracker::default();
        tracker.press(0.0);
        tracker.drag_to(90.0);
        tracker.drag_to(0.0);
        tracker.release(now);

        assert_eq!(tracker.offset(), 0.0);
        assert_eq!(tracker.committed_intent(), None);
    }

    #[test]
    fn test_release_without_press_is_noop() {
        let mut tracker = SwipeTracker::default();
        tracker.release(Instant::now());
        assert_eq!(tracker.committed_intent(), None);
    }

    // ==================== poll_intent tests ====================

    #[test]
    fn test_intent_waits_for_commit_flash() {
        let now = Instant::now();
        let mut tracker = SwipeTracker::default();
        released(&mut tracker, 0.0, 85.0, now);

        assert_eq!(tracker.poll_intent(now), None);
        assert_eq!(
            tracker.poll_intent(now + COMMIT_FLASH - Duration::from_millis(1)),
            None
        );
        assert_eq!(
            tracker.poll_intent(now + COMMIT_FLASH),
            Some(SwipeIntent::Edit)
        );
    }

    #[test]
    fn test_intent_is_delivered_exactly_once() {
        let now = Instant::now();
        let mut tracker = SwipeTracker::default();
        released(&mut tracker, 0.0, 85.0, now);

        let later = now + COMMIT_FLASH;
        assert_eq!(tracker.poll_intent(later), Some(SwipeIntent::Edit));
        assert_eq!(tracker.poll_intent(later), None);
    }

    #[test]
    fn test_independent_trackers_do_not_interfere() {
        let now = Instant::now();
        let mut a = SwipeTracker::default();
        let mut b = SwipeTracker::default();

        released(&mut a, 0.0, 85.0, now);
        b.press(0.0);
        b.drag_to(-30.0);

        assert_eq!(a.committed_intent(), Some(SwipeIntent::Edit));
        assert_eq!(b.offset(), -30.0);
        assert!(b.is_dragging());
        b.release(now);
        assert_eq!(b.committed_intent(), None);
    }
}
