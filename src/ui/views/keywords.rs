use egui::{Button, RichText, ScrollArea, TextEdit, Ui};
use log::error;
use tokio::runtime::Handle;

use crate::error::Result;
use crate::models::{Keyword, KeywordId};
use crate::services::KeywordService;
use crate::ui::components::{error_banner, loading};
use crate::ui::styles::{AppColors, DEFAULT_PADDING};
use crate::ui::task::TaskQueue;
use crate::utils::{format_timestamp, truncate_text};

/// What a finished request was for
#[derive(Debug, Clone, PartialEq, Eq)]
enum KeywordRequest {
    Load,
    /// Carries the submitted input
    Add(String),
    Delete,
}

/// Tracked feed URLs: add, list and delete
pub struct KeywordsView {
    service: KeywordService,
    tasks: TaskQueue<(KeywordRequest, Result<Vec<Keyword>>)>,
    colors: AppColors,
    keywords: Vec<Keyword>,
    loaded: bool,
    draft: String,
    error: Option<String>,
}

impl KeywordsView {
    pub fn new(service: KeywordService, runtime: Handle) -> Self {
        Self {
            service,
            tasks: TaskQueue::new(runtime),
            colors: AppColors::default(),
            keywords: Vec::new(),
            loaded: false,
            draft: String::new(),
            error: None,
        }
    }

    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    pub fn refresh(&mut self, ctx: &egui::Context) {
        let service = self.service.clone();
        self.tasks.spawn(ctx, async move {
            (KeywordRequest::Load, service.list_keywords().await)
        });
    }

    /// Submits the input box. The text stays in the box until the keyword
    /// is stored, so a rejected URL can be corrected.
    fn add(&mut self, ctx: &egui::Context) {
        let service = self.service.clone();
        let input = self.draft.clone();
        self.tasks.spawn(ctx, async move {
            let result = service.add_keyword(&input).await;
            (KeywordRequest::Add(input), result)
        });
    }

    fn delete(&mut self, ctx: &egui::Context, id: KeywordId) {
        let service = self.service.clone();
        self.tasks.spawn(ctx, async move {
            (KeywordRequest::Delete, service.delete_keyword(&id).await)
        });
    }

    /// Replaces the list on success; on failure the list is left as it was.
    fn apply(&mut self, request: KeywordRequest, result: Result<Vec<Keyword>>) {
        match result {
            Ok(keywords) => {
                if let KeywordRequest::Add(input) = request {
                    if self.draft == input {
                        self.draft.clear();
                    }
                }
                self.keywords = keywords;
                self.loaded = true;
                self.error = None;
            }
            Err(e) => {
                error!("Keyword request failed: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    fn poll(&mut self) {
        for (request, result) in self.tasks.drain_ready() {
            self.apply(request, result);
        }
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        self.poll();

        ui.heading("Manage Keywords");
        ui.add_space(DEFAULT_PADDING);
        error_banner(ui, &self.colors, &mut self.error);

        let mut add = false;
        ui.horizontal(|ui| {
            let input = ui.add(
                TextEdit::singleline(&mut self.draft)
                    .hint_text("https://example.com/feed")
                    .desired_width(ui.available_width() - 120.0),
            );
            let entered = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let clicked = ui.add(Button::new("Add Keyword")).clicked();
            add = clicked || entered;
        });
        if add {
            self.add(ui.ctx());
        }

        ui.add_space(DEFAULT_PADDING);
        ui.label(RichText::new("Tracked Feeds").strong().color(self.colors.text));
        ui.separator();

        if !self.loaded {
            if self.tasks.is_busy() {
                loading(ui, &self.colors, "Loading keywords...");
            }
            return;
        }

        let mut delete = None;
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                if self.keywords.is_empty() {
                    ui.label(
                        RichText::new("No keywords tracked yet.").color(self.colors.text_dimmed),
                    );
                }
                for keyword in &self.keywords {
                    ui.horizontal(|ui| {
                        let url = RichText::new(truncate_text(&keyword.url, 80))
                            .color(self.colors.text);
                        ui.label(url).on_hover_text(keyword.url.as_str());
                        if let Some(created) = &keyword.created_at {
                            ui.label(
                                RichText::new(format_timestamp(created))
                                    .small()
                                    .color(self.colors.text_dimmed),
                            );
                        }
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let label = RichText::new("Delete").color(self.colors.error);
                            let button = Button::new(label);
                            if ui.add(button).clicked() {
                                delete = Some(keyword.id.clone());
                            }
                        });
                    });
                }
            });
        if let Some(id) = delete {
            self.delete(ui.ctx(), id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use crate::services::testing::InMemoryStore;

    async fn settle(view: &mut KeywordsView) {
        for _ in 0..200 {
            view.poll();
            if !view.tasks.is_busy() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_failed_delete_keeps_list() {
        let store = Arc::new(InMemoryStore::default());
        let service = KeywordService::new(store.clone());
        let mut view = KeywordsView::new(service.clone(), Handle::current());
        let ctx = egui::Context::default();

        view.apply(
            KeywordRequest::Load,
            service.add_keyword("https://acme.com/feed").await,
        );
        assert_eq!(view.keywords().len(), 1);

        view.delete(&ctx, KeywordId::from("missing"));
        settle(&mut view).await;

        assert_eq!(view.keywords().len(), 1);
        assert_eq!(view.keywords()[0].url, "https://acme.com/feed");
        let error = view.error.clone().unwrap_or_default();
        assert!(error.contains("not found"), "{error}");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_add_then_delete_refetches() {
        let store = Arc::new(InMemoryStore::default());
        let mut view = KeywordsView::new(KeywordService::new(store.clone()), Handle::current());
        let ctx = egui::Context::default();

        view.draft = "https://globex.example/rss".into();
        view.add(&ctx);
        settle(&mut view).await;
        assert_eq!(view.keywords().len(), 1);
        assert!(view.draft.is_empty());

        let id = view.keywords()[0].id.clone();
        view.delete(&ctx, id);
        settle(&mut view).await;
        assert!(view.keywords().is_empty());
        assert!(view.error.is_none());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_invalid_url_is_reported() {
        let store = Arc::new(InMemoryStore::default());
        let mut view = KeywordsView::new(KeywordService::new(store.clone()), Handle::current());
        let ctx = egui::Context::default();

        view.draft = "acme.com/feed".into();
        view.add(&ctx);
        settle(&mut view).await;

        assert!(view.error.is_some());
        assert_eq!(view.draft, "acme.com/feed");
        assert_eq!(store.calls(), 0);
    }
}
