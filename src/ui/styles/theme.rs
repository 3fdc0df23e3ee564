use egui::{Color32, Margin, Rounding, Stroke, Style, Visuals};

use crate::models::ImpactLevel;
use crate::services::Urgency;

/// Default padding for UI elements
pub const DEFAULT_PADDING: f32 = 8.0;
/// Default spacing between UI elements
pub const DEFAULT_SPACING: f32 = 4.0;
/// Default rounding radius for UI elements
pub const DEFAULT_ROUNDING: f32 = 6.0;
/// Width of the navigation sidebar
pub const SIDEBAR_WIDTH: f32 = 220.0;

/// UI color scheme
#[derive(Debug, Clone)]
pub struct AppColors {
    pub background: Color32,
    pub foreground: Color32,
    pub text: Color32,
    pub text_dimmed: Color32,
    pub accent: Color32,
    pub warning: Color32,
    pub error: Color32,
    pub success: Color32,
    pub separator: Color32,
}

impl Default for AppColors {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(3, 7, 18),
            foreground: Color32::from_rgb(31, 41, 55),
            text: Color32::from_rgb(229, 231, 235),
            text_dimmed: Color32::from_rgb(156, 163, 175),
            accent: Color32::from_rgb(59, 130, 246),
            warning: Color32::from_rgb(234, 179, 8),
            error: Color32::from_rgb(239, 68, 68),
            success: Color32::from_rgb(34, 197, 94),
            separator: Color32::from_rgb(55, 65, 81),
        }
    }
}

impl AppColors {
    /// Border colour of an article card
    pub fn impact(&self, impact: Option<ImpactLevel>) -> Color32 {
        match impact {
            Some(ImpactLevel::High) => self.error,
            Some(ImpactLevel::Medium) => self.warning,
            Some(ImpactLevel::Low) => self.success,
            None => self.separator,
        }
    }

    /// Colour of a to-do due badge
    pub fn urgency(&self, urgency: Urgency) -> Color32 {
        match urgency {
            Urgency::Critical => self.error,
            Urgency::Warning => Color32::from_rgb(249, 115, 22),
            Urgency::Normal => self.text_dimmed,
        }
    }
}

/// Creates the dark style the dashboard uses
pub fn create_dark_theme() -> Style {
    let colors = AppColors::default();

    let mut style = Style::default();
    style.spacing.item_spacing = egui::vec2(DEFAULT_PADDING, DEFAULT_PADDING);
    style.spacing.window_margin = Margin::same(DEFAULT_PADDING);
    style.spacing.button_padding = egui::vec2(DEFAULT_PADDING * 1.5, DEFAULT_SPACING * 1.5);

    let mut visuals = Visuals::dark();
    visuals.window_rounding = Rounding::same(DEFAULT_ROUNDING);
    visuals.panel_fill = colors.background;
    visuals.window_fill = colors.foreground;
    visuals.extreme_bg_color = Color32::from_rgb(17, 24, 39);

    visuals.widgets.noninteractive.bg_fill = colors.background;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.text);

    visuals.widgets.inactive.bg_fill = colors.foreground;
    visuals.widgets.inactive.weak_bg_fill = colors.foreground;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors.text);

    visuals.widgets.hovered.bg_fill = colors.accent;
    visuals.widgets.hovered.weak_bg_fill = colors.accent;
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, Color32::WHITE);

    visuals.widgets.active.bg_fill = colors.accent;
    visuals.widgets.active.fg_stroke = Stroke::new(2.0, Color32::WHITE);

    visuals.selection.bg_fill = colors.accent;
    visuals.selection.stroke = Stroke::new(1.0, Color32::WHITE);

    style.visuals = visuals;
    style
}
