use egui::{Button, Frame, RichText, ScrollArea, Stroke, Ui};
use log::error;
use tokio::runtime::Handle;

use crate::error::Result;
use crate::models::{Article, ImpactLevel};
use crate::services::{
    filter_by_impact, impact_counts, toggle_impact, ArticleService, EmptySelection, ImpactCounts,
};
use crate::ui::components::{article_card, error_banner, loading};
use crate::ui::styles::{AppColors, DEFAULT_PADDING, DEFAULT_ROUNDING};
use crate::ui::task::TaskQueue;

/// Stored articles grouped by impact level
pub struct CategoriesView {
    service: ArticleService,
    tasks: TaskQueue<Result<Vec<Article>>>,
    colors: AppColors,
    when_empty: EmptySelection,
    /// Refetch on every visit; otherwise only the first visit and Refresh load
    reload_on_visit: bool,
    articles: Vec<Article>,
    counts: ImpactCounts,
    loaded: bool,
    selected: Option<ImpactLevel>,
    error: Option<String>,
}

impl CategoriesView {
    pub fn new(
        service: ArticleService,
        when_empty: EmptySelection,
        reload_on_visit: bool,
        runtime: Handle,
    ) -> Self {
        Self {
            service,
            tasks: TaskQueue::new(runtime),
            colors: AppColors::default(),
            when_empty,
            reload_on_visit,
            articles: Vec::new(),
            counts: ImpactCounts::default(),
            loaded: false,
            selected: None,
            error: None,
        }
    }

    pub fn counts(&self) -> ImpactCounts {
        self.counts
    }

    pub fn visible_articles(&self) -> Vec<Article> {
        filter_by_impact(&self.articles, self.selected, self.when_empty)
    }

    pub fn select(&mut self, level: ImpactLevel) {
        self.selected = toggle_impact(self.selected, level);
    }

    pub fn refresh(&mut self, ctx: &egui::Context) {
        let service = self.service.clone();
        self.tasks
            .spawn(ctx, async move { service.list_articles().await });
    }

    /// Called when the page is opened.
    pub fn visit(&mut self, ctx: &egui::Context) {
        if self.tasks.is_busy() {
            return;
        }
        if self.reload_on_visit || !self.loaded {
            self.refresh(ctx);
        }
    }

    pub fn apply(&mut self, result: Result<Vec<Article>>) {
        match result {
            Ok(articles) => {
                self.counts = impact_counts(&articles);
                self.articles = articles;
                self.loaded = true;
                self.error = None;
            }
            Err(e) => {
                error!("Error fetching articles: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    fn poll(&mut self) {
        for result in self.tasks.drain_ready() {
            self.apply(result);
        }
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        self.poll();

        ui.horizontal(|ui| {
            ui.heading("Categories & Filters");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let busy = self.tasks.is_busy();
                if ui.add_enabled(!busy, Button::new("Refresh")).clicked() {
                    self.refresh(ui.ctx());
                }
            });
        });
        ui.add_space(DEFAULT_PADDING);
        error_banner(ui, &self.colors, &mut self.error);

        ui.label(RichText::new("Filter by Impact Level").color(self.colors.text_dimmed));
        let mut clicked = None;
        ui.columns(ImpactLevel::ALL.len(), |columns| {
            for (column, level) in columns.iter_mut().zip(ImpactLevel::ALL) {
                let color = self.colors.impact(Some(level));
                let text = RichText::new(format!(
                    "{}\n{} Impact",
                    self.counts.get(level),
                    level.as_str()
                ))
                .size(18.0)
                .strong()
                .color(egui::Color32::WHITE);
                let mut button = Button::new(text)
                    .fill(color.linear_multiply(0.6))
                    .rounding(DEFAULT_ROUNDING)
                    .min_size(egui::vec2(column.available_width(), 72.0));
                if self.selected == Some(level) {
                    button = button.stroke(Stroke::new(3.0, self.colors.accent));
                }
                if column.add(button).clicked() {
                    clicked = Some(level);
                }
            }
        });
        if let Some(level) = clicked {
            self.select(level);
        }
        ui.add_space(DEFAULT_PADDING);

        if !self.loaded && self.tasks.is_busy() {
            loading(ui, &self.colors, "Loading articles...");
            return;
        }

        let selected = self.selected;
        match selected {
            Some(level) => {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("{} Impact Articles", level.as_str()))
                            .size(18.0)
                            .strong()
                            .color(self.colors.text),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.link("Clear Filter").clicked() {
                            self.selected = None;
                        }
                    });
                });
            }
            None if self.when_empty == EmptySelection::ShowNothing => {
                Frame::none()
                    .fill(self.colors.foreground)
                    .stroke(Stroke::new(1.0, self.colors.separator))
                    .rounding(DEFAULT_ROUNDING)
                    .inner_margin(DEFAULT_PADDING * 4.0)
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(
                                RichText::new("Select an impact level above to view articles")
                                    .color(self.colors.text_dimmed),
                            );
                        });
                    });
                return;
            }
            None => {}
        }

        let articles = self.visible_articles();
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                for (index, article) in articles.iter().enumerate() {
                    article_card(ui, &self.colors, article, index);
                }
            });
    }
}
