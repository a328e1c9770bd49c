//! UI rendering methods for the background generator.

use crate::BackgroundApp;
use crate::constants::{EXPORT_FLASH_SECS, FADE_DURATION_SECS, PREVIEW_PADDING, SIDEBAR_WIDTH};
use background_gen::{PRESET_SIZES, compute_fit_scale};
use eframe::egui;
use std::time::Duration;

impl BackgroundApp {
    /// Renders the bottom status bar: actual pixel size on the left, preview
    /// scale percentage on the right.
    pub fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{} × {} px", self.config.width, self.config.height));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let percentage = (self.fit_scale * 100.0).round() as u32;
                    ui.label(format!("Preview: {percentage}%"));
                });
            });
        });
    }

    /// Renders the left sidebar panel.
    pub fn show_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("sidebar")
            .exact_width(SIDEBAR_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.show_sidebar_content(ctx, ui);
                });
            });
    }

    /// Renders the sidebar content: canvas controls and the export section.
    fn show_sidebar_content(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.add_space(4.0);

        // Canvas section
        ui.strong("Canvas");
        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Color:");
            if ui.color_edit_button_srgb(&mut self.config.color).changed() {
                self.restart_fade();
            }
        });

        ui.horizontal(|ui| {
            ui.label("Width:");
            let response =
                ui.add(egui::TextEdit::singleline(&mut self.width_input).desired_width(64.0));
            if response.lost_focus() {
                self.commit_dimensions();
            }
        });

        ui.horizontal(|ui| {
            ui.label("Height:");
            let response =
                ui.add(egui::TextEdit::singleline(&mut self.height_input).desired_width(64.0));
            if response.lost_focus() {
                self.commit_dimensions();
            }
        });

        self.show_preset_selector(ui);

        ui.add_space(12.0);

        // Export section
        ui.strong("Export");
        ui.separator();

        let flash_active = self
            .export_flash
            .is_some_and(|at| at.elapsed().as_secs_f32() < EXPORT_FLASH_SECS);
        if !flash_active {
            self.export_flash = None;
        } else {
            // Wake up to drop the "saved" state once the flash expires
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        let label = if flash_active {
            "Saved ✓"
        } else {
            "Export PNG"
        };
        if ui.button(label).clicked() {
            self.run_export();
        }

        if ui
            .button("Open folder")
            .on_hover_text(self.export_dir.display().to_string())
            .clicked()
            && let Err(err) = open::that(&self.export_dir)
        {
            log::warn!("Failed to open {}: {err}", self.export_dir.display());
        }
    }

    /// Renders the preset size selector. Picking an entry overwrites both
    /// dimension fields; "Custom" is shown while no preset matches.
    fn show_preset_selector(&mut self, ui: &mut egui::Ui) {
        let selected_text = self
            .selected_preset
            .and_then(|index| PRESET_SIZES.get(index).copied())
            .unwrap_or("Custom");

        egui::ComboBox::from_label("Preset")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                if ui
                    .selectable_label(self.selected_preset.is_none(), "Custom")
                    .clicked()
                {
                    self.selected_preset = None;
                }

                for (index, preset) in PRESET_SIZES.iter().enumerate() {
                    if ui
                        .selectable_label(self.selected_preset == Some(index), *preset)
                        .clicked()
                    {
                        self.apply_preset(index);
                    }
                }
            });
    }

    /// Renders the central panel: the canvas preview scaled to fit, with the
    /// cosmetic fade-in applied after each change.
    pub fn show_preview(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let panel_rect = ui.max_rect();
            let viewport_w = panel_rect.width() - 2.0 * PREVIEW_PADDING;
            let viewport_h = panel_rect.height() - 2.0 * PREVIEW_PADDING;

            self.fit_scale =
                compute_fit_scale(self.config.width, self.config.height, viewport_w, viewport_h);

            let alpha = self.fade_alpha(ctx);

            let display_size = egui::vec2(
                self.config.width as f32 * self.fit_scale,
                self.config.height as f32 * self.fit_scale,
            );
            let preview_rect = egui::Rect::from_center_size(panel_rect.center(), display_size);

            let [r, g, b] = self.config.color;
            let fill = egui::Color32::from_rgb(r, g, b).gamma_multiply(alpha);

            ui.painter().rect_filled(preview_rect, 0.0, fill);
            ui.painter().rect_stroke(
                preview_rect,
                0.0,
                egui::Stroke::new(1.0, ui.visuals().weak_text_color()),
                egui::StrokeKind::Outside,
            );
        });
    }

    /// Current fade-in opacity in `[0, 1]`. Requests repaints while the fade
    /// is running and clears the timestamp once it completes.
    fn fade_alpha(&mut self, ctx: &egui::Context) -> f32 {
        let Some(started) = self.fade_started else {
            return 1.0;
        };

        let t = started.elapsed().as_secs_f32() / FADE_DURATION_SECS;
        if t >= 1.0 {
            self.fade_started = None;
            1.0
        } else {
            ctx.request_repaint();
            t.max(0.0)
        }
    }
}
