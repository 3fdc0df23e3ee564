use egui::{Frame, RichText, Stroke, Ui};

use crate::ui::styles::{AppColors, DEFAULT_PADDING, DEFAULT_ROUNDING};

/// Shows `error` as an inline banner. Clears it when the user dismisses it.
pub fn error_banner(ui: &mut Ui, colors: &AppColors, error: &mut Option<String>) {
    let Some(message) = error.as_deref() else {
        return;
    };

    let mut dismissed = false;
    Frame::none()
        .fill(colors.error.linear_multiply(0.15))
        .stroke(Stroke::new(1.0, colors.error))
        .rounding(DEFAULT_ROUNDING)
        .inner_margin(DEFAULT_PADDING)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(message).color(colors.error));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    dismissed = ui.small_button("Dismiss").clicked();
                });
            });
        });
    ui.add_space(DEFAULT_PADDING);

    if dismissed {
        *error = None;
    }
}

/// Spinner with a caption, shown while a page has nothing to render yet.
pub fn loading(ui: &mut Ui, colors: &AppColors, caption: &str) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label(RichText::new(caption).color(colors.text_dimmed));
    });
}
