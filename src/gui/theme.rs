//! Centralized theme and styling system for the GUI
//!
//! Provides the AppTheme struct with light and dark palettes, spacing, and
//! styled widget factories.

use eframe::egui;

/// Centralized theme and styling system
#[derive(Clone, Copy)]
pub struct AppTheme {
    // Base colors
    pub background: egui::Color32,
    pub surface: egui::Color32,
    pub surface_hover: egui::Color32,
    pub surface_active: egui::Color32,
    pub panel_fill: egui::Color32,
    pub text_primary: egui::Color32,
    pub text_secondary: egui::Color32,

    // Semantic colors
    pub primary: egui::Color32,
    pub secondary: egui::Color32,
    pub success: egui::Color32,
    pub warning: egui::Color32,
    pub error: egui::Color32,

    // Expense row colors
    pub card_fill: egui::Color32,
    pub card_stroke: egui::Color32,
    pub edit_action: egui::Color32,
    pub delete_action: egui::Color32,

    // Modal backdrop dim
    pub backdrop: egui::Color32,

    // Spacing constants
    pub spacing_xs: f32,
    pub spacing_sm: f32,
    pub spacing_md: f32,
    pub spacing_lg: f32,

    // Button sizes
    pub button_small: egui::Vec2,
    pub button_medium: egui::Vec2,

    dark: bool,
}

impl AppTheme {
    pub fn dark() -> Self {
        Self {
            background: egui::Color32::from_rgb(18, 18, 20),
            surface: egui::Color32::from_rgb(28, 28, 32),
            surface_hover: egui::Color32::from_rgb(38, 38, 44),
            surface_active: egui::Color32::from_rgb(48, 48, 56),
            panel_fill: egui::Color32::from_rgb(23, 23, 26),
            text_primary: egui::Color32::from_rgb(235, 235, 240),
            text_secondary: egui::Color32::from_rgb(150, 150, 160),

            primary: egui::Color32::from_rgb(0, 122, 255),
            secondary: egui::Color32::from_rgb(70, 70, 80),
            success: egui::Color32::from_rgb(52, 199, 89),
            warning: egui::Color32::from_rgb(255, 170, 0),
            error: egui::Color32::from_rgb(255, 85, 85),

            card_fill: egui::Color32::from_rgb(34, 34, 40),
            card_stroke: egui::Color32::from_rgb(55, 55, 64),
            edit_action: egui::Color32::from_rgb(0, 100, 60),
            delete_action: egui::Color32::from_rgb(120, 35, 35),

            backdrop: egui::Color32::from_black_alpha(160),

            spacing_xs: 4.0,
            spacing_sm: 8.0,
            spacing_md: 16.0,
            spacing_lg: 24.0,

            button_small: egui::vec2(80.0, 26.0),
            button_medium: egui::vec2(120.0, 34.0),

            dark: true,
        }
    }

    pub fn light() -> Self {
        Self {
            background: egui::Color32::from_rgb(245, 245, 247),
            surface: egui::Color32::from_rgb(255, 255, 255),
            surface_hover: egui::Color32::from_rgb(238, 238, 242),
            surface_active: egui::Color32::from_rgb(228, 228, 234),
            panel_fill: egui::Color32::from_rgb(250, 250, 252),
            text_primary: egui::Color32::from_rgb(28, 28, 32),
            text_secondary: egui::Color32::from_rgb(110, 110, 120),

            primary: egui::Color32::from_rgb(0, 122, 255),
            secondary: egui::Color32::from_rgb(200, 200, 208),
            success: egui::Color32::from_rgb(40, 167, 69),
            warning: egui::Color32::from_rgb(200, 130, 0),
            error: egui::Color32::from_rgb(220, 53, 69),

            card_fill: egui::Color32::from_rgb(255, 255, 255),
            card_stroke: egui::Color32::from_rgb(222, 222, 228),
            edit_action: egui::Color32::from_rgb(46, 160, 95),
            delete_action: egui::Color32::from_rgb(224, 92, 92),

            backdrop: egui::Color32::from_black_alpha(100),

            spacing_xs: 4.0,
            spacing_sm: 8.0,
            spacing_md: 16.0,
            spacing_lg: 24.0,

            button_small: egui::vec2(80.0, 26.0),
            button_medium: egui::vec2(120.0, 34.0),

            dark: false,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Create a themed button for the main action of a panel
    pub fn button_primary(&self, text: &str) -> egui::Button<'_> {
        egui::Button::new(
            egui::RichText::new(text)
                .color(egui::Color32::WHITE)
                .strong(),
        )
        .fill(self.primary)
        .min_size(self.button_medium)
    }

    /// Create a themed button for destructive actions
    pub fn button_danger(&self, text: &str) -> egui::Button<'_> {
        egui::Button::new(
            egui::RichText::new(text)
                .color(egui::Color32::WHITE)
                .strong(),
        )
        .fill(self.error)
        .min_size(self.button_medium)
    }

    /// Create a themed secondary button (outlined style)
    pub fn button_secondary(&self, text: &str) -> egui::Button<'_> {
        egui::Button::new(egui::RichText::new(text).color(self.text_primary))
            .fill(self.surface)
            .stroke(egui::Stroke::new(1.0, self.secondary))
            .min_size(self.button_medium)
    }

    /// Create a small themed button
    pub fn button_small(&self, text: &str) -> egui::Button<'_> {
        egui::Button::new(egui::RichText::new(text).color(self.text_primary))
            .fill(self.surface)
            .stroke(egui::Stroke::new(1.0, self.secondary))
            .min_size(self.button_small)
    }

    /// Create a themed frame for panels/cards
    pub fn frame_panel(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(self.panel_fill)
            .rounding(8.0)
            .inner_margin(self.spacing_md)
            .stroke(egui::Stroke::new(1.0, self.card_stroke))
    }
}

/// Configure the egui context style with the given theme
pub fn configure_style(ctx: &egui::Context, theme: &AppTheme) {
    let mut visuals = if theme.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    visuals.window_fill = theme.surface;
    visuals.panel_fill = theme.panel_fill;
    visuals.override_text_color = Some(theme.text_primary);

    visuals.widgets.noninteractive.bg_fill = theme.surface;
    visuals.widgets.inactive.bg_fill = theme.surface;
    visuals.widgets.hovered.bg_fill = theme.surface_hover;
    visuals.widgets.active.bg_fill = theme.surface_active;
    visuals.widgets.open.bg_fill = theme.surface_active;

    // Text inputs get a visible accent border when focused
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, theme.card_stroke);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, theme.secondary);
    visuals.widgets.active.bg_stroke = egui::Stroke::new(2.0, theme.primary);
    visuals.selection.bg_fill = theme.primary.linear_multiply(0.4);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.spacing.menu_margin = egui::Margin::same(8.0);

    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::new(20.0, egui::FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Body,
        egui::FontId::new(14.0, egui::FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::new(14.0, egui::FontFamily::Proportional),
    );

    ctx.set_style(style);
}
