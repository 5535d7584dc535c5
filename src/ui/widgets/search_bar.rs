//! Search bar widget
//!
//! A retained egui component: the host keeps one [`SearchBar`] alive across
//! frames and calls [`SearchBar::show`] every frame. Typing updates the
//! displayed text at once; only the owner notification is debounced. Pending
//! notifications are delivered from `show`, which requests a repaint for
//! when the quiet period runs out.

use crate::error::{Result, SearchBarError};
use crate::search::{InputState, NormalizedOptions, Notifier, SearchBarOptions};
use crate::ui::theme::SearchColors;
use egui::{Rounding, RichText};
use std::time::Instant;

const ICON_SIZE: f32 = 18.0;

/// Owner callback receiving the new search value
pub type OnChange = Box<dyn FnMut(String)>;

/// Collects options and the owner callback before mounting
pub struct SearchBarBuilder {
    options: SearchBarOptions,
    on_change: Option<OnChange>,
}

impl SearchBarBuilder {
    pub fn on_change(mut self, on_change: impl FnMut(String) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// Mount the widget. Fails when no callback was supplied.
    pub fn mount(self) -> Result<SearchBar> {
        let on_change = self.on_change.ok_or(SearchBarError::MissingOnChange)?;
        let options = self.options.normalized();
        let state = InputState::new(
            options.value.clone(),
            options.show_clear_button,
            options.is_loading,
        );
        let notifier = Notifier::new(options.strategy);

        tracing::debug!("Mounted search bar with {:?}", options.strategy);

        Ok(SearchBar {
            options,
            state,
            notifier,
            on_change,
        })
    }
}

/// Icon shown at the start of the row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchIcon {
    Search,
    Loading,
}

/// What happened during one [`SearchBar::show`] call
pub struct SearchBarResponse {
    /// Response of the text field
    pub response: egui::Response,
    /// Response of the clear button, when it was shown
    pub clear_button: Option<egui::Response>,
    pub icon: SearchIcon,
    /// The user edited the text this frame
    pub changed: bool,
    /// The clear button was clicked this frame
    pub cleared: bool,
    /// Last value handed to the owner this frame
    pub delivered: Option<String>,
}

/// Debounced search input with loading indicator and clear button
pub struct SearchBar {
    options: NormalizedOptions,
    state: InputState,
    notifier: Notifier,
    on_change: OnChange,
}

impl SearchBar {
    pub fn builder(options: SearchBarOptions) -> SearchBarBuilder {
        SearchBarBuilder {
            options,
            on_change: None,
        }
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn options(&self) -> &NormalizedOptions {
        &self.options
    }

    pub fn current_value(&self) -> &str {
        self.state.current_value()
    }

    pub fn is_clear_button_visible(&self) -> bool {
        self.state.is_clear_button_visible()
    }

    pub fn is_loading_indicator_visible(&self) -> bool {
        self.state.is_loading_indicator_visible()
    }

    pub fn has_pending_notification(&self) -> bool {
        self.notifier.has_pending()
    }

    /// Apply new owner configuration.
    ///
    /// The owner value replaces whatever was typed. A pending notification
    /// survives only when both the period and the displayed value are
    /// unchanged, so a stale value can never follow a new one.
    pub fn reconfigure(&mut self, options: SearchBarOptions) {
        let next = options.normalized();
        let value_changed = next.value != self.state.current_value();

        self.state
            .apply_owner(next.value.clone(), next.show_clear_button, next.is_loading);

        if next.strategy != self.notifier.strategy() {
            tracing::debug!(
                "Notifier changed from {:?} to {:?}",
                self.notifier.strategy(),
                next.strategy
            );
            self.notifier.replace(next.strategy);
        } else if value_changed {
            self.notifier.cancel();
        }

        self.options = next;
    }

    /// User edited the text. Returns the value if it reached the owner now.
    pub fn text_changed(&mut self, value: impl Into<String>) -> Option<String> {
        self.text_changed_at(value, Instant::now())
    }

    pub fn text_changed_at(&mut self, value: impl Into<String>, now: Instant) -> Option<String> {
        let value = value.into();
        self.state.set_value(value.clone());

        if value.chars().count() < self.options.min_character_length {
            return None;
        }

        let ready = self.notifier.notify(value, now)?;
        Some(self.deliver(ready))
    }

    /// Reset the display. The owner is not told.
    pub fn clear(&mut self) {
        self.state.clear();
    }

    /// Deliver a pending value whose quiet period has passed
    pub fn poll(&mut self) -> Option<String> {
        self.poll_at(Instant::now())
    }

    pub fn poll_at(&mut self, now: Instant) -> Option<String> {
        let due = self.notifier.poll(now)?;
        Some(self.deliver(due))
    }

    fn deliver(&mut self, value: String) -> String {
        tracing::debug!("Notifying owner with {:?}", value);
        (self.on_change)(value.clone());
        value
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> SearchBarResponse {
        self.show_at(ui, Instant::now())
    }

    pub fn show_at(&mut self, ui: &mut egui::Ui, now: Instant) -> SearchBarResponse {
        let mut delivered = self.poll_at(now);

        let desired_width = self.options.width.unwrap_or(ui.available_width());
        let loading = self.state.is_loading_indicator_visible();
        let show_clear = self.state.is_clear_button_visible();
        let placeholder = self.options.placeholder.as_str();
        let mut text = self.state.current_value().to_string();
        let mut clear_button = None;
        let icon = if loading {
            SearchIcon::Loading
        } else {
            SearchIcon::Search
        };

        let response = egui::Frame::none()
            .fill(SearchColors::surface(ui.visuals().dark_mode))
            .rounding(Rounding::same(20.0))
            .inner_margin(egui::Margin::symmetric(12.0, 8.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    if icon == SearchIcon::Loading {
                        ui.add(egui::Spinner::new().size(ICON_SIZE));
                    } else {
                        ui.label(RichText::new("🔍").size(ICON_SIZE).color(SearchColors::ICON));
                    }

                    let response = ui.add(
                        egui::TextEdit::singleline(&mut text)
                            .hint_text(placeholder)
                            .desired_width((desired_width - 50.0).max(0.0))
                            .frame(false),
                    );

                    if show_clear {
                        let clear = egui::Button::new(RichText::new("✕").color(SearchColors::ICON))
                            .frame(false);
                        clear_button = Some(ui.add(clear).on_hover_text("Clear"));
                    }

                    response
                })
                .inner
            })
            .inner;

        let cleared = clear_button.as_ref().is_some_and(|b| b.clicked());
        let changed = response.changed();
        if changed {
            if let Some(value) = self.text_changed_at(text, now) {
                delivered = Some(value);
            }
        }
        if cleared {
            self.clear();
        }

        if let Some(remaining) = self.notifier.time_until_due(now) {
            ui.ctx().request_repaint_after(remaining);
        }

        SearchBarResponse {
            response,
            clear_button,
            icon,
            changed,
            cleared,
            delivered,
        }
    }
}

impl std::fmt::Debug for SearchBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchBar")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("notifier", &self.notifier)
            .field("on_change", &"<callback>")
            .finish()
    }
}

impl Drop for SearchBar {
    fn drop(&mut self) {
        if let Some(value) = self.notifier.cancel() {
            tracing::trace!("Search bar unmounted, dropped pending {:?}", value);
        }
    }
}
