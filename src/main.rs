#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod constants;
mod export;
mod ui;

use background_gen::{
    CanvasConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH, PRESET_SIZES, clamp_dimensions, parse_dimension,
    parse_preset,
};
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use std::path::PathBuf;
use std::time::Instant;

/// Main application state for the background generator.
pub struct BackgroundApp {
    config: CanvasConfig,
    /// Text currently in the width field; committed on Enter or focus loss.
    width_input: String,
    /// Text currently in the height field; committed on Enter or focus loss.
    height_input: String,
    /// Index into `PRESET_SIZES`, or `None` for a custom size.
    selected_preset: Option<usize>,
    /// Fit scale computed for the last rendered preview frame.
    fit_scale: f32,
    /// Start of the cosmetic preview fade-in; cleared once fully opaque.
    fade_started: Option<Instant>,
    /// Set while the export button shows its "saved" state.
    export_flash: Option<Instant>,
    export_dir: PathBuf,
    toasts: Toasts,
}

impl BackgroundApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let toasts = Toasts::new()
            .anchor(egui::Align2::RIGHT_TOP, (-10.0, 10.0))
            .direction(egui::Direction::TopDown);

        let restored = cc
            .storage
            .and_then(|storage| eframe::get_value::<CanvasConfig>(storage, eframe::APP_KEY))
            .map(CanvasConfig::clamped);

        if let Some(config) = &restored {
            log::info!(
                "Restored canvas config: {}x{} #{}",
                config.width,
                config.height,
                config.color_hex()
            );
        }
        let config = restored.unwrap_or_default();

        // Highlight the preset that matches the restored size, if any
        let selected_preset = PRESET_SIZES
            .iter()
            .position(|preset| parse_preset(preset) == Some((config.width, config.height)));

        Self {
            width_input: config.width.to_string(),
            height_input: config.height.to_string(),
            config,
            selected_preset,
            fit_scale: 1.0,
            fade_started: Some(Instant::now()),
            export_flash: None,
            export_dir: export::default_export_dir(),
            toasts,
        }
    }

    /// Commits the width/height fields: non-numeric text falls back to the
    /// defaults, out-of-range values are clamped and the field text is
    /// overwritten with the corrected value. Any actual size change clears
    /// the preset selection and restarts the preview fade.
    fn commit_dimensions(&mut self) {
        let width = parse_dimension(&self.width_input, DEFAULT_WIDTH);
        let height = parse_dimension(&self.height_input, DEFAULT_HEIGHT);

        self.width_input = width.to_string();
        self.height_input = height.to_string();

        if (width, height) != (self.config.width, self.config.height) {
            self.config.width = width;
            self.config.height = height;
            self.selected_preset = None;
            self.restart_fade();
        }
    }

    /// Applies the preset at `index`, updating both dimension fields.
    fn apply_preset(&mut self, index: usize) {
        let Some((width, height)) = PRESET_SIZES.get(index).and_then(|p| parse_preset(p)) else {
            return;
        };

        let (width, height) = clamp_dimensions(width, height);
        self.config.width = width;
        self.config.height = height;
        self.width_input = width.to_string();
        self.height_input = height.to_string();
        self.selected_preset = Some(index);
        self.restart_fade();
    }

    /// Restarts the cosmetic preview fade-in.
    fn restart_fade(&mut self) {
        self.fade_started = Some(Instant::now());
    }

    /// Renders the canvas at full resolution and writes the PNG.
    fn run_export(&mut self) {
        match export::export_png(&self.export_dir, &self.config) {
            Ok(path) => {
                log::info!("Exported background to {}", path.display());
                self.export_flash = Some(Instant::now());
                self.toasts.add(Toast {
                    kind: ToastKind::Success,
                    text: format!("Saved {}", path.display()).into(),
                    options: ToastOptions::default()
                        .duration_in_seconds(4.0)
                        .show_icon(true),
                    ..Default::default()
                });
            }
            Err(err) => {
                log::error!("Export failed: {err}");
                self.toasts.add(Toast {
                    kind: ToastKind::Error,
                    text: err.to_string().into(),
                    options: ToastOptions::default()
                        .duration_in_seconds(8.0)
                        .show_icon(true),
                    ..Default::default()
                });
            }
        }
    }
}

impl eframe::App for BackgroundApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_status_bar(ctx);
        self.show_sidebar(ctx);
        self.show_preview(ctx);

        self.toasts.show(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.config);
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Background Generator",
        options,
        Box::new(|cc| Ok(Box::new(BackgroundApp::new(cc)))),
    )
}
