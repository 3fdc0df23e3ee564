use egui::{Frame, Label, RichText, Stroke, Ui};

use crate::models::Article;
use crate::ui::styles::{AppColors, DEFAULT_PADDING, DEFAULT_ROUNDING, DEFAULT_SPACING};
use crate::utils::format_timestamp;

/// Renders one article as a card bordered in its impact colour.
///
/// `index` keeps the collapsing state of cards with equal titles apart.
pub fn article_card(ui: &mut Ui, colors: &AppColors, article: &Article, index: usize) {
    let border = colors.impact(article.impact);

    Frame::none()
        .fill(colors.foreground)
        .stroke(Stroke::new(1.5, border))
        .rounding(DEFAULT_ROUNDING)
        .inner_margin(DEFAULT_PADDING * 1.5)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.add(
                    Label::new(RichText::new(&article.title).size(16.0).strong().color(colors.text))
                        .wrap(true),
                );
                if let Some(impact) = article.impact {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(impact.as_str()).strong().color(border));
                    });
                }
            });

            let mut meta = article.source.clone();
            if let Some(posted) = article.posted_time.as_deref().filter(|p| !p.is_empty()) {
                meta = format!("{} • {}", meta, format_timestamp(posted));
            }
            ui.label(RichText::new(meta).size(12.0).color(colors.text_dimmed));

            ui.add_space(DEFAULT_SPACING);
            ui.add(Label::new(RichText::new(&article.summary).color(colors.text)).wrap(true));

            if let Some(link) = article.link.as_deref().filter(|l| !l.is_empty()) {
                ui.hyperlink_to("Read More", link);
            }

            if let Some(content) = article.full_content.as_deref().filter(|c| !c.is_empty()) {
                egui::CollapsingHeader::new("Full article")
                    .id_source(("article-content", index, &article.title))
                    .show(ui, |ui| {
                        ui.add(
                            Label::new(RichText::new(content).color(colors.text_dimmed)).wrap(true),
                        );
                    });
            }
        });
    ui.add_space(DEFAULT_SPACING);
}
