//! Demo application hosting one search bar

use chrono::{DateTime, Local};
use parking_lot::Mutex;
use search_bar::settings::{SettingsRepository, Theme};
use search_bar::ui::theme::SearchTheme;
use search_bar::{SearchBar, SearchBarOptions, SearchValue};
use std::sync::Arc;

/// A value the search bar handed to its owner
#[derive(Debug, Clone)]
struct Notification {
    value: String,
    received_at: DateTime<Local>,
}

pub struct SearchDemoApp {
    settings: SettingsRepository,
    options: SearchBarOptions,
    search_bar: SearchBar,
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl SearchDemoApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: SettingsRepository,
    ) -> search_bar::Result<Self> {
        let theme = match settings.get().theme {
            Theme::Light => SearchTheme::light(),
            Theme::Dark | Theme::System => SearchTheme::dark(),
        };
        theme.apply(&cc.egui_ctx);

        let options = settings.get().search.clone();
        let notifications = Arc::new(Mutex::new(Vec::new()));

        let sink = notifications.clone();
        let search_bar = SearchBar::builder(options.clone())
            .on_change(move |value| {
                tracing::info!("Search requested for {:?}", value);
                sink.lock().push(Notification {
                    value,
                    received_at: Local::now(),
                });
            })
            .mount()?;

        Ok(Self {
            settings,
            options,
            search_bar,
            notifications,
        })
    }

    /// Push the owner's options, keeping what the user typed unless `value` is set
    fn reconfigure(&mut self, value: Option<SearchValue>) {
        self.options.value =
            Some(value.unwrap_or_else(|| self.search_bar.current_value().into()));
        self.search_bar.reconfigure(self.options.clone());
    }

    fn controls(&mut self, ui: &mut egui::Ui) -> (bool, bool) {
        ui.heading("Owner");
        ui.add_space(4.0);

        let mut changed = false;
        changed |= ui.checkbox(&mut self.options.is_loading, "Loading").changed();
        changed |= ui
            .checkbox(&mut self.options.show_clear_button, "Clear button")
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut self.options.debounce_time_ms, 0..=2000).text("Debounce (ms)"))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut self.options.min_character_length, 0..=10).text("Min characters"))
            .changed();

        ui.separator();
        let reset = ui.button("Reset value").clicked();
        if ui.button("Clear log").clicked() {
            self.notifications.lock().clear();
        }

        (changed, reset)
    }

    fn notification_log(&self, ui: &mut egui::Ui) {
        let notifications = self.notifications.lock();
        if notifications.is_empty() {
            ui.weak("No notifications yet");
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            for notification in notifications.iter().rev() {
                ui.horizontal(|ui| {
                    ui.monospace(notification.received_at.format("%H:%M:%S%.3f").to_string());
                    ui.label(&notification.value);
                });
            }
        });
    }
}

impl eframe::App for SearchDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (changed, reset) = egui::SidePanel::right("owner_controls")
            .resizable(false)
            .show(ctx, |ui| self.controls(ui))
            .inner;

        if reset {
            self.reconfigure(Some(SearchValue::default()));
        } else if changed {
            self.reconfigure(None);
        }

        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.settings
                .get_mut()
                .window
                .record_size(rect.width(), rect.height());
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.search_bar.show(ui);
            ui.add_space(12.0);
            self.notification_log(ui);
        });
    }

    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        let mut search = self.options.clone();
        search.value = None;
        self.settings.get_mut().search = search;

        if let Err(e) = self.settings.save() {
            tracing::error!("Failed to save settings: {}", e);
        }
    }
}
