use egui::{RichText, Ui};

use crate::ui::styles::{AppColors, DEFAULT_PADDING};

/// Top-level pages of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Keywords,
    Todos,
    Categories,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Keywords, Page::Todos, Page::Categories];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Keywords => "Manage Keywords",
            Page::Todos => "To-Do List",
            Page::Categories => "Categories",
        }
    }
}

/// Navigation sidebar
pub struct Sidebar {
    colors: AppColors,
    backend_name: &'static str,
}

impl Sidebar {
    pub fn new(backend_name: &'static str) -> Self {
        Self {
            colors: AppColors::default(),
            backend_name,
        }
    }

    /// Renders the navigation and returns the page the user clicked, if any.
    pub fn ui(&self, ui: &mut Ui, current: Page) -> Option<Page> {
        let mut clicked = None;

        ui.add_space(DEFAULT_PADDING);
        ui.heading(RichText::new("CompIntel").strong().color(self.colors.text));
        ui.add_space(DEFAULT_PADDING);
        ui.separator();

        for page in Page::ALL {
            let response = ui.add_sized(
                [ui.available_width(), 28.0],
                egui::SelectableLabel::new(current == page, page.label()),
            );
            if response.clicked() && current != page {
                clicked = Some(page);
            }
        }

        ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
            ui.add_space(DEFAULT_PADDING);
            ui.label(
                RichText::new(format!("Backend: {}", self.backend_name))
                    .small()
                    .color(self.colors.text_dimmed),
            );
        });

        clicked
    }
}
