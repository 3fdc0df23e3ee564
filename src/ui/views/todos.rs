use std::collections::HashMap;

use egui::{Button, RichText, ScrollArea, TextEdit, Ui};
use log::error;
use tokio::runtime::Handle;

use crate::error::Result;
use crate::models::{Todo, TodoId};
use crate::services::{due_status, DueStyle, TodoService};
use crate::ui::components::{error_banner, loading};
use crate::ui::styles::{AppColors, DEFAULT_PADDING};
use crate::ui::task::TaskQueue;

enum TodoAction {
    Toggle(Todo),
    Reminder(TodoId, String),
    Delete(TodoId),
}

/// What a finished request was for
#[derive(Debug, Clone, PartialEq, Eq)]
enum TodoRequest {
    Load,
    /// Carries the submitted task text
    Add(String),
    Change,
}

/// Action items with day-based reminders
pub struct TodosView {
    service: TodoService,
    tasks: TaskQueue<(TodoRequest, Result<Vec<Todo>>)>,
    colors: AppColors,
    due_style: DueStyle,
    todos: Vec<Todo>,
    loaded: bool,
    draft: String,
    /// Reminder text being edited, per item
    reminder_drafts: HashMap<TodoId, String>,
    error: Option<String>,
}

fn reminder_text(todo: &Todo) -> String {
    todo.reminder_days.map(|d| d.to_string()).unwrap_or_default()
}

impl TodosView {
    pub fn new(service: TodoService, due_style: DueStyle, runtime: Handle) -> Self {
        Self {
            service,
            tasks: TaskQueue::new(runtime),
            colors: AppColors::default(),
            due_style,
            todos: Vec::new(),
            loaded: false,
            draft: String::new(),
            reminder_drafts: HashMap::new(),
            error: None,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn refresh(&mut self, ctx: &egui::Context) {
        let service = self.service.clone();
        self.tasks.spawn(ctx, async move {
            (TodoRequest::Load, service.list_todos().await)
        });
    }

    /// Submits the input box; the text is cleared once the task is stored.
    fn add(&mut self, ctx: &egui::Context) {
        let service = self.service.clone();
        let input = self.draft.clone();
        self.tasks.spawn(ctx, async move {
            let result = service.add_todo(&input).await;
            (TodoRequest::Add(input), result)
        });
    }

    fn run(&mut self, ctx: &egui::Context, action: TodoAction) {
        let service = self.service.clone();
        self.tasks.spawn(ctx, async move {
            let result = match action {
                TodoAction::Toggle(todo) => service.toggle_todo(&todo).await,
                TodoAction::Reminder(id, input) => service.set_reminder(&id, &input).await,
                TodoAction::Delete(id) => service.delete_todo(&id).await,
            };
            (TodoRequest::Change, result)
        });
    }

    /// Reseeds the reminder draft of every item whose stored reminder changed
    /// or that is new. Drafts of unchanged items are kept as typed.
    fn sync_reminder_drafts(&mut self, todos: &[Todo]) {
        let previous: HashMap<&TodoId, Option<i64>> = self
            .todos
            .iter()
            .map(|todo| (&todo.id, todo.reminder_days))
            .collect();
        let mut drafts = HashMap::with_capacity(todos.len());
        for todo in todos {
            let kept = match previous.get(&todo.id) {
                Some(days) if *days == todo.reminder_days => self.reminder_drafts.remove(&todo.id),
                _ => None,
            };
            let draft = kept.unwrap_or_else(|| reminder_text(todo));
            drafts.insert(todo.id.clone(), draft);
        }
        self.reminder_drafts = drafts;
    }

    /// Replaces the list on success. On failure the list and drafts are left
    /// untouched.
    fn apply(&mut self, request: TodoRequest, result: Result<Vec<Todo>>) {
        match result {
            Ok(todos) => {
                if let TodoRequest::Add(input) = request {
                    if self.draft == input {
                        self.draft.clear();
                    }
                }
                self.sync_reminder_drafts(&todos);
                self.todos = todos;
                self.loaded = true;
                self.error = None;
            }
            Err(e) => {
                error!("Todo request failed: {}", e);
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

        ui.heading("Action Items");
        ui.add_space(DEFAULT_PADDING);
        error_banner(ui, &self.colors, &mut self.error);

        let mut add = false;
        ui.horizontal(|ui| {
            let input = ui.add(
                TextEdit::singleline(&mut self.draft)
                    .hint_text("Add a new task...")
                    .desired_width(ui.available_width() - 100.0),
            );
            let entered = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            add = ui.button("Add Task").clicked() || entered;
        });
        if add {
            self.add(ui.ctx());
        }
        ui.add_space(DEFAULT_PADDING);

        if !self.loaded {
            if self.tasks.is_busy() {
                loading(ui, &self.colors, "Loading tasks...");
            }
            return;
        }

        let mut actions = Vec::new();
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                if self.todos.is_empty() {
                    ui.label(RichText::new("Nothing to do.").color(self.colors.text_dimmed));
                }
                for todo in &self.todos {
                    ui.horizontal(|ui| {
                        let mut completed = todo.completed;
                        if ui.checkbox(&mut completed, "").changed() {
                            actions.push(TodoAction::Toggle(todo.clone()));
                        }

                        let mut task = RichText::new(&todo.task);
                        task = if todo.completed {
                            task.strikethrough().color(self.colors.text_dimmed)
                        } else {
                            task.color(self.colors.text)
                        };
                        ui.label(task);

                        if let Some(status) = due_status(todo) {
                            let color = self.colors.urgency(status.urgency(self.due_style));
                            ui.label(RichText::new(status.label()).strong().color(color));
                        }

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let label = RichText::new("Delete").color(self.colors.error);
                            let delete = Button::new(label);
                            if ui.add(delete).clicked() {
                                actions.push(TodoAction::Delete(todo.id.clone()));
                            }

                            let draft = self
                                .reminder_drafts
                                .entry(todo.id.clone())
                                .or_insert_with(|| reminder_text(todo));
                            let response = ui.add(
                                TextEdit::singleline(&mut *draft)
                                    .hint_text("days")
                                    .desired_width(48.0),
                            );
                            ui.label(RichText::new("Remind in").color(self.colors.text_dimmed));
                            if response.lost_focus() && *draft != reminder_text(todo) {
                                actions.push(TodoAction::Reminder(todo.id.clone(), draft.clone()));
                            }
                        });
                    });
                    ui.separator();
                }
            });

        for action in actions {
            self.run(ui.ctx(), action);
        }
    }
}
