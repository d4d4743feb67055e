// GUI implementation for the IoT Signal Monitor using egui/eframe
use crate::ism_config::AppConfig;
use crate::ism_controllers::ISMControllers;
use crate::ism_models::{ISMModels, SignalColor, SignalRecord, SignalSource, StatusLevel};
use crate::ism_state::{DisplayEvent, DisplayState};
use crate::ism_views::ISMViews;
use anyhow::Context;
use chrono::{DateTime, Local};
use eframe::egui;
use egui::{Color32, RichText, Ui};
use std::sync::Arc;
use std::time::{Duration, Instant};

// ============================================================================
// Application State
// ============================================================================

pub struct ISMApp {
    source: Arc<dyn SignalSource>,
    state: DisplayState,

    // Background fetch; at most one in flight
    fetch_promise: Option<poll_promise::Promise<Result<Vec<SignalRecord>, String>>>,

    // Auto-refresh settings
    auto_refresh_enabled: bool,
    refresh_interval: Duration,
    last_refresh: Option<Instant>,
    last_refresh_at: Option<DateTime<Local>>,
    refresh_counter: usize,

    // Duration form
    duration_input: String,
    duration_error: Option<String>,
}

// ============================================================================
// GUI Implementation
// ============================================================================

impl ISMApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        source: Arc<dyn SignalSource>,
        refresh_interval: Duration,
    ) -> Self {
        let mut app = Self::with_source(source, refresh_interval);

        // Start loading data in background
        app.start_fetch();

        app
    }

    fn with_source(source: Arc<dyn SignalSource>, refresh_interval: Duration) -> Self {
        Self {
            source,
            state: DisplayState::default(),
            fetch_promise: None,
            auto_refresh_enabled: false,
            refresh_interval,
            last_refresh: None,
            last_refresh_at: None,
            refresh_counter: 0,
            duration_input: String::new(),
            duration_error: None,
        }
    }

    fn start_fetch(&mut self) {
        if self.fetch_promise.is_some() {
            log::debug!("Refresh already in flight, ignoring request");
            return;
        }

        let source = Arc::clone(&self.source);
        let promise = poll_promise::Promise::spawn_thread("fetch", move || {
            ISMControllers::load_records(source.as_ref())
        });
        self.fetch_promise = Some(promise);
        self.state = std::mem::take(&mut self.state).apply(DisplayEvent::FetchRequested);
    }

    fn check_fetch(&mut self) {
        let event = match self.fetch_promise.as_ref().and_then(|p| p.ready()) {
            Some(Ok(records)) => DisplayEvent::FetchSucceeded(records.clone()),
            Some(Err(message)) => {
                log::error!("Refresh failed unexpectedly: {}", message);
                DisplayEvent::FetchFailed(message.clone())
            }
            None => return,
        };

        self.fetch_promise = None;
        self.state = std::mem::take(&mut self.state).apply(event);
        self.last_refresh = Some(Instant::now());
        self.last_refresh_at = Some(Local::now());
        self.refresh_counter += 1;
    }

    fn submit_duration(&mut self) {
        match self.state.submit_duration_input(&self.duration_input) {
            Ok(next) => {
                log::info!("All durations set to {} ms", self.duration_input.trim());
                self.state = next;
                self.duration_input.clear();
                self.duration_error = None;
            }
            Err(e) => {
                self.duration_error = Some(e.to_string());
            }
        }
    }

    fn auto_refresh_due(&self) -> bool {
        self.auto_refresh_enabled
            && self.fetch_promise.is_none()
            && self
                .last_refresh
                .map(|last| last.elapsed() >= self.refresh_interval)
                .unwrap_or(true)
    }
}

impl eframe::App for ISMApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_fetch();

        if self.auto_refresh_due() {
            self.start_fetch();
        }

        // clock, auto-refresh countdown
        ctx.request_repaint_after(Duration::from_secs(1));
        if self.fetch_promise.is_some() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // Top panel with header
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("📶 IoT Signal Monitor");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let now: DateTime<Local> = Local::now();
                    ui.label(now.format("%H:%M:%S").to_string());
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.show_toolbar(ui);
                ui.separator();

                if self.state.is_loading {
                    ui.vertical_centered(|ui| {
                        ui.add_space(20.0);
                        ui.spinner();
                        ui.label("Loading IoT data...");
                        ui.add_space(20.0);
                    });
                } else {
                    if let Some(error) = &self.state.error_message {
                        show_error_banner(ui, error);
                        ui.add_space(10.0);
                    }
                    self.show_cards(ui);
                }

                ui.add_space(15.0);
                self.show_duration_form(ui);
            });
        });
    }
}

// ============================================================================
// View Implementations
// ============================================================================

impl ISMApp {
    fn show_toolbar(&mut self, ui: &mut Ui) {
        let mut should_refresh = false;

        ui.horizontal(|ui| {
            ui.heading("Signal Data");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let idle = self.fetch_promise.is_none();
                if ui.add_enabled(idle, egui::Button::new("🔄 Refresh")).clicked() {
                    should_refresh = true;
                }
                ui.checkbox(
                    &mut self.auto_refresh_enabled,
                    format!("Auto-refresh ({}s)", self.refresh_interval.as_secs()),
                );
                if let (Some(at), Some(last)) = (self.last_refresh_at, self.last_refresh) {
                    ui.label(format!(
                        "Last update: {} ({}s ago, #{})",
                        at.format("%H:%M:%S"),
                        last.elapsed().as_secs(),
                        self.refresh_counter
                    ));
                }
            });
        });

        if should_refresh {
            self.start_fetch();
        }
    }

    fn show_cards(&self, ui: &mut Ui) {
        let records = self.state.visible_records();

        if records.is_empty() {
            ui.label("No signal data available.");
            return;
        }

        egui::Grid::new("signal_cards")
            .num_columns(2)
            .spacing([12.0, 12.0])
            .show(ui, |ui| {
                for (idx, record) in records.iter().enumerate() {
                    show_record_card(ui, record);
                    if idx % 2 == 1 {
                        ui.end_row();
                    }
                }
            });
    }

    fn show_duration_form(&mut self, ui: &mut Ui) {
        ui.group(|ui| {
            ui.label(RichText::new("Update Duration").strong().size(16.0));
            ui.separator();

            let mut should_submit = false;
            ui.horizontal(|ui| {
                ui.label("New Duration (ms):");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.duration_input)
                        .hint_text("Enter new duration value")
                        .desired_width(180.0),
                );

                if response.changed()
                    && (self.duration_input.trim().is_empty()
                        || ISMModels::parse_duration_input(&self.duration_input).is_ok())
                {
                    self.duration_error = None;
                }

                let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Update All Directions").clicked() || entered {
                    should_submit = true;
                }
            });

            if should_submit {
                self.submit_duration();
            }

            if let Some(error) = &self.duration_error {
                ui.colored_label(Color32::from_rgb(220, 38, 38), error);
            }
        });
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn show_record_card(ui: &mut Ui, record: &SignalRecord) {
    let level = record.status_level();

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(280.0);
        ui.vertical(|ui| {
            let (bar, _) = ui.allocate_exact_size(
                egui::vec2(ui.available_width(), 6.0),
                egui::Sense::hover(),
            );
            ui.painter().rect_filled(bar, 2.0, signal_color32(record.signal_color()));

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(ISMViews::capitalize(&record.direction))
                        .size(20.0)
                        .strong(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.colored_label(status_color32(level), RichText::new(status_glyph(level)).size(18.0));
                });
            });

            ui.label(format!("📶 Signal: {}", ISMViews::capitalize(&record.signal)));
            ui.label(format!("⏱ Duration: {}", ISMViews::format_duration(record.duration)));
            ui.horizontal(|ui| {
                ui.colored_label(status_color32(level), "⏺");
                ui.label("Status:");
                ui.colored_label(
                    status_color32(level),
                    RichText::new(record.status.to_uppercase()).strong(),
                );
            });
        });
    });
}

fn show_error_banner(ui: &mut Ui, error: &str) {
    egui::Frame::group(ui.style())
        .fill(Color32::from_rgb(254, 242, 242))
        .show(ui, |ui| {
            ui.colored_label(Color32::from_rgb(185, 28, 28), format!("❌ Error: {}", error));
        });
}

fn signal_color32(color: SignalColor) -> Color32 {
    match color {
        SignalColor::Green => Color32::from_rgb(34, 197, 94),
        SignalColor::Yellow => Color32::from_rgb(250, 204, 21),
        SignalColor::Red => Color32::from_rgb(239, 68, 68),
        SignalColor::Unknown => Color32::from_rgb(156, 163, 175),
    }
}

fn status_color32(level: StatusLevel) -> Color32 {
    match level {
        StatusLevel::On => Color32::from_rgb(22, 163, 74),
        StatusLevel::Warning => Color32::from_rgb(202, 138, 4),
        StatusLevel::Off => Color32::from_rgb(220, 38, 38),
    }
}

fn status_glyph(level: StatusLevel) -> &'static str {
    match level {
        StatusLevel::On => "✔",
        StatusLevel::Warning => "⚠",
        StatusLevel::Off => "✖",
    }
}

// ============================================================================
// Public entry point
// ============================================================================

pub fn run_gui(config: &AppConfig) -> anyhow::Result<()> {
    let source: Arc<dyn SignalSource> = Arc::new(
        config
            .build_source()
            .context("Failed to set up the signal source")?,
    );
    let refresh_interval = config.refresh_interval;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "IoT Signal Monitor",
        options,
        Box::new(move |cc| Ok(Box::new(ISMApp::new(cc, source, refresh_interval)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to start the dashboard window: {}", e))
}
