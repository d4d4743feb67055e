// Views for the IoT Signal Monitor terminal mode
use crate::ism_models::{DurationInputError, SignalColor, SignalRecord, StatusLevel};
use crate::ism_state::DisplayState;
use chrono::Local;
use std::io::{self, Write};
use std::time::Duration;

pub struct ISMViews;

impl ISMViews {
    /// Show main menu
    pub fn show_menu() {
        println!("\n{}", "═".repeat(60));
        println!("     📶 IOT SIGNAL MONITOR");
        println!("{}", "═".repeat(60));
        println!("\n📋 MENU OPTIONS");
        println!("  1️⃣  Refresh signal data");
        println!("  2️⃣  Update duration for all directions");
        println!("  3️⃣  Watch mode (auto-refresh) 🔄");
        println!("  4️⃣  Show current signals");
        println!("  0️⃣  Quit application");
        println!("\n{}", "─".repeat(60));
        print!("➜ Your choice: ");
        let _ = io::stdout().flush();
    }

    pub fn show_duration_prompt() {
        print!("\n⏱️  Enter new duration in milliseconds\n");
        print!("   Applies to every direction. Example: '1500'\n");
        print!("➜ Duration: ");
        let _ = io::stdout().flush();
    }

    /// Loading line, error banner, then one card per cardinal direction.
    pub fn show_dashboard(state: &DisplayState) {
        println!("\n{}", "═".repeat(60));
        println!("📡 SIGNAL DATA");
        println!("{}", "═".repeat(60));

        if state.is_loading {
            println!("\n⏳ Loading IoT data...");
        }

        if let Some(error) = &state.error_message {
            println!("\n❌ Error: {}", error);
            println!("   Showing last known values.");
        }

        let records = state.visible_records();
        if records.is_empty() {
            println!("\n⚠️  No signal data available");
            return;
        }

        for record in records {
            Self::show_record_card(record);
        }

        println!("{}", "═".repeat(60));
    }

    fn show_record_card(record: &SignalRecord) {
        println!("\n  {} {}", Self::status_icon(record.status_level()), Self::capitalize(&record.direction));
        println!(
            "     📶 Signal:   {} {}",
            Self::signal_badge(record.signal_color()),
            Self::capitalize(&record.signal)
        );
        println!("     ⏱️  Duration: {}", Self::format_duration(record.duration));
        println!(
            "     {} Status:   {}",
            Self::status_dot(record.status_level()),
            record.status.to_uppercase()
        );
    }

    pub fn show_duration_updated(value: &str) {
        println!("\n✓ Duration set to {} ms for all directions", value);
    }

    pub fn show_validation_error(error: &DurationInputError) {
        println!("\n✗ {}", error);
    }

    pub fn show_watch_banner(interval: Duration) {
        println!("\n{}", "═".repeat(60));
        println!("🔄 AUTO-REFRESH MODE");
        println!("{}", "═".repeat(60));
        println!("   Data refreshes automatically every {} seconds", interval.as_secs());
        println!("   Press ENTER at any time to return to menu");
        println!("{}", "═".repeat(60));
    }

    pub fn show_refresh_header(refresh_count: u32) {
        let now = Local::now();
        println!("\n{}", "═".repeat(60));
        println!("🔄 AUTO-REFRESH MODE - Update #{}", refresh_count);
        println!("📅 {}", now.format("%A, %B %d, %Y at %H:%M:%S"));
        println!("{}", "═".repeat(60));
    }

    pub fn show_next_refresh(interval: Duration) {
        println!("\n{}", "─".repeat(60));
        println!("⏱️  Next refresh in {} seconds (or press ENTER to exit)", interval.as_secs());
        println!("{}", "─".repeat(60));
    }

    pub fn show_loading(message: &str) {
        print!("\n⏳ {}...", message);
        let _ = io::stdout().flush();
    }

    pub fn clear_loading() {
        print!("\r{}\r", " ".repeat(60));
        let _ = io::stdout().flush();
    }

    pub fn goodbye_message() {
        println!("\n{}", "═".repeat(60));
        println!("  👋 Thanks for using IoT Signal Monitor!");
        println!("{}", "═".repeat(60));
    }

    // ========================================================================
    // Helper Functions
    // ========================================================================

    pub fn signal_badge(color: SignalColor) -> &'static str {
        match color {
            SignalColor::Green => "🟢",
            SignalColor::Yellow => "🟡",
            SignalColor::Red => "🔴",
            SignalColor::Unknown => "⚪",
        }
    }

    pub fn status_icon(level: StatusLevel) -> &'static str {
        match level {
            StatusLevel::On => "✅",
            StatusLevel::Warning => "⚠️ ",
            StatusLevel::Off => "❌",
        }
    }

    pub fn status_dot(level: StatusLevel) -> &'static str {
        match level {
            StatusLevel::On => "🟢",
            StatusLevel::Warning => "🟡",
            StatusLevel::Off => "🔴",
        }
    }

    pub fn format_duration(duration_ms: u64) -> String {
        format!("{} ms", duration_ms)
    }

    /// "north" -> "North"
    pub fn capitalize(text: &str) -> String {
        let mut chars = text.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
