use egui::{Button, DragValue, RichText, ScrollArea, TextEdit, Ui};
use log::error;
use tokio::runtime::Handle;

use crate::error::{Error, Result};
use crate::models::{Article, Digest, ImpactLevel};
use crate::services::{
    filter_by_impact, search_articles, toggle_impact, validate_summarize_count, DigestService,
    EmptySelection, INITIAL_SUMMARIZE_COUNT,
};
use crate::ui::components::{article_card, error_banner, loading};
use crate::ui::styles::{AppColors, DEFAULT_PADDING};
use crate::ui::task::TaskQueue;

/// Digest page: summarize new articles and browse the result
pub struct HomeView {
    service: DigestService,
    tasks: TaskQueue<Result<Digest>>,
    colors: AppColors,
    when_empty: EmptySelection,
    started: bool,
    digest: Option<Digest>,
    requested: i64,
    impact_filter: Option<ImpactLevel>,
    search: String,
    error: Option<String>,
}

impl HomeView {
    pub fn new(service: DigestService, when_empty: EmptySelection, runtime: Handle) -> Self {
        Self {
            service,
            tasks: TaskQueue::new(runtime),
            colors: AppColors::default(),
            when_empty,
            started: false,
            digest: None,
            requested: INITIAL_SUMMARIZE_COUNT as i64,
            impact_filter: None,
            search: String::new(),
            error: None,
        }
    }

    pub fn total_found(&self) -> usize {
        self.digest.as_ref().map_or(0, |d| d.total_found)
    }

    /// Articles after the impact filter and the search box
    pub fn visible_articles(&self) -> Vec<Article> {
        let articles = self
            .digest
            .as_ref()
            .map(|d| d.summarized_articles.as_slice())
            .unwrap_or_default();
        let filtered = filter_by_impact(articles, self.impact_filter, self.when_empty);
        search_articles(&filtered, &self.search)
    }

    fn load_initial(&mut self, ctx: &egui::Context) {
        self.started = true;
        self.error = None;
        let service = self.service.clone();
        self.tasks.spawn(ctx, async move { service.initial().await });
    }

    /// Repeats the first load when no digest has arrived yet.
    ///
    /// Without a digest `total_found` is unknown and every summarize request
    /// would be rejected, so this is the only way back after a failed start.
    pub fn reload_if_empty(&mut self, ctx: &egui::Context) -> bool {
        if self.digest.is_some() || self.tasks.is_busy() {
            return false;
        }
        self.load_initial(ctx);
        true
    }

    /// Validates the requested count and starts a digest request.
    ///
    /// Returns `false` when the count is out of range; nothing is sent then.
    pub fn submit(&mut self, ctx: &egui::Context) -> bool {
        let total_found = self.total_found();
        if let Err(e) = validate_summarize_count(self.requested, total_found) {
            self.error = Some(e.to_string());
            return false;
        }

        self.error = None;
        let service = self.service.clone();
        let requested = self.requested;
        self.tasks
            .spawn(ctx, async move { service.summarize(requested, total_found).await });
        true
    }

    pub fn apply(&mut self, result: Result<Digest>) {
        match result {
            Ok(digest) => {
                self.digest = Some(digest);
                self.error = None;
            }
            Err(Error::Validation(e)) => self.error = Some(e.to_string()),
            Err(e) => {
                error!("API/Network Error: {}", e);
                self.error = Some(format!("API/Network Error: {}", e));
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
        if !self.started {
            self.load_initial(ui.ctx());
        }

        ui.heading("Latest CompIntel Digest");
        ui.add_space(DEFAULT_PADDING);
        error_banner(ui, &self.colors, &mut self.error);

        let busy = self.tasks.is_busy();
        let total_found = self.total_found();
        let mut submit = false;
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("New articles found: {}", total_found))
                    .color(self.colors.text),
            );
            ui.separator();
            ui.label("Articles to summarize:");
            let input = ui.add(DragValue::new(&mut self.requested).speed(1.0));
            let entered = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let label = if busy { "..." } else { "Summarize" };
            let clicked = ui.add_enabled(!busy, Button::new(label)).clicked();
            submit = (clicked || entered) && !busy;
        });
        if submit {
            self.submit(ui.ctx());
        }

        ui.horizontal(|ui| {
            if ui
                .selectable_label(self.impact_filter.is_none(), "All")
                .clicked()
            {
                self.impact_filter = None;
            }
            for level in ImpactLevel::ALL {
                let selected = self.impact_filter == Some(level);
                let text = RichText::new(level.as_str()).color(self.colors.impact(Some(level)));
                if ui.selectable_label(selected, text).clicked() {
                    self.impact_filter = toggle_impact(self.impact_filter, level);
                }
            }
            ui.separator();
            ui.add(
                TextEdit::singleline(&mut self.search)
                    .hint_text("Search articles...")
                    .desired_width(ui.available_width()),
            );
        });
        ui.add_space(DEFAULT_PADDING);

        if self.digest.is_none() {
            if busy {
                loading(ui, &self.colors, "Fetching digest...");
            } else if ui.button("Retry").clicked() {
                self.reload_if_empty(ui.ctx());
            }
            return;
        }

        let articles = self.visible_articles();
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                if articles.is_empty() {
                    ui.label(RichText::new("No articles to show.").color(self.colors.text_dimmed));
                }
                for (index, article) in articles.iter().enumerate() {
                    article_card(ui, &self.colors, article, index);
                }

                let found = self
                    .digest
                    .as_ref()
                    .map(|d| d.full_article_list.as_slice())
                    .unwrap_or_default();
                if !found.is_empty() {
                    egui::CollapsingHeader::new(format!("All new articles ({})", found.len()))
                        .show(ui, |ui| {
                            for item in found {
                                ui.horizontal(|ui| {
                                    ui.hyperlink_to(item.title.as_str(), &item.link);
                                    ui.label(
                                        RichText::new(&item.source).color(self.colors.text_dimmed),
                                    );
                                });
                            }
                        });
                }
            });
    }
}
