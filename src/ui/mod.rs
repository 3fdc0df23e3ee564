pub mod components;
pub mod styles;
pub mod task;
pub mod views;

use egui::{CentralPanel, SidePanel};
use log::{debug, info};
use tokio::runtime::Handle;

use crate::config::{AppConfig, BackendConfig};
use crate::data::Backend;
use crate::services::{ArticleService, DigestService, KeywordService, TodoService};
use crate::ui::components::{Page, Sidebar};
use crate::ui::styles::{create_dark_theme, SIDEBAR_WIDTH};
use crate::ui::views::{CategoriesView, HomeView, KeywordsView, TodosView};

/// Dependencies shared by every page
pub struct AppContext {
    pub config: AppConfig,
    pub backend: Backend,
    pub runtime: Handle,
}

impl AppContext {
    pub fn new(config: AppConfig, backend: Backend, runtime: Handle) -> Self {
        Self {
            config,
            backend,
            runtime,
        }
    }

    pub fn article_service(&self) -> ArticleService {
        ArticleService::new(self.backend.article_repository())
    }

    pub fn digest_service(&self) -> DigestService {
        DigestService::new(self.backend.article_repository())
    }

    pub fn keyword_service(&self) -> KeywordService {
        KeywordService::new(self.backend.keyword_repository())
    }

    pub fn todo_service(&self) -> TodoService {
        TodoService::new(self.backend.todo_repository())
    }
}

/// The dashboard window: a navigation sidebar and the current page
pub struct CompIntelApp {
    sidebar: Sidebar,
    page: Page,
    home: HomeView,
    keywords: KeywordsView,
    todos: TodosView,
    categories: CategoriesView,
}

impl CompIntelApp {
    pub fn new(cc: &eframe::CreationContext<'_>, context: AppContext) -> Self {
        cc.egui_ctx.set_style(create_dark_theme());

        let config = &context.config;
        let runtime = context.runtime.clone();
        // The REST article listing runs a fresh digest on the backend.
        let reload_categories = !matches!(config.backend, BackendConfig::Rest { .. });
        Self {
            sidebar: Sidebar::new(context.backend.name()),
            page: Page::Home,
            home: HomeView::new(context.digest_service(), config.home_filter, runtime.clone()),
            keywords: KeywordsView::new(context.keyword_service(), runtime.clone()),
            todos: TodosView::new(context.todo_service(), config.due_style, runtime.clone()),
            categories: CategoriesView::new(
                context.article_service(),
                config.categories_filter,
                reload_categories,
                runtime,
            ),
        }
    }

    /// Switches page. Keywords and To-Do reload on entry; Home only when it
    /// has no digest yet.
    fn navigate(&mut self, ctx: &egui::Context, page: Page) {
        info!("Navigating to {}", page.label());
        self.page = page;
        match page {
            Page::Home => {
                if !self.home.reload_if_empty(ctx) {
                    debug!("Home keeps its last digest");
                }
            }
            Page::Keywords => self.keywords.refresh(ctx),
            Page::Todos => self.todos.refresh(ctx),
            Page::Categories => self.categories.visit(ctx),
        }
    }
}

impl eframe::App for CompIntelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut target = None;
        SidePanel::left("sidebar")
            .exact_width(SIDEBAR_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                target = self.sidebar.ui(ui, self.page);
            });
        if let Some(page) = target {
            self.navigate(ctx, page);
        }

        CentralPanel::default().show(ctx, |ui| match self.page {
            Page::Home => self.home.ui(ui),
            Page::Keywords => self.keywords.ui(ui),
            Page::Todos => self.todos.ui(ui),
            Page::Categories => self.categories.ui(ui),
        });
    }
}
