use std::time::Duration;

use chrono::Utc;

use crate::{state::State, widgets};

/// How often to repaint while background work is pending.
const BUSY_REPAINT_INTERVAL: Duration = Duration::from_millis(50);

pub struct RosterApp {
    state: State,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Utc::now();

        // Apply finished requests and start any fetch the last frame asked for
        self.state.users.sync(now);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.heading("User Management");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(&self.state.config.api_base_url);
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::users_panel(&mut self.state.users, now, ui);
        });

        // Debounce and in-flight requests need frames even without input
        if self.state.users.is_busy() {
            ctx.request_repaint_after(BUSY_REPAINT_INTERVAL);
        }
    }
}
