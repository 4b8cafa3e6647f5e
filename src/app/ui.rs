use std::time::Instant;

use eframe::egui::{self, Align, Color32, RichText, Rounding, Stroke};

use super::OcrApp;
use crate::config::PageCopy;
use crate::utils::file_size::format_size;
use crate::utils::script::{dominant_direction, split_runs, Direction};

const ERROR_COLOR: Color32 = Color32::from_rgb(220, 50, 50);

impl OcrApp {
    pub fn render(&mut self, ctx: &egui::Context) {
        let copy = self.config.copy.clone();
        let accent = self.accent;

        egui::CentralPanel::default().show(ctx, |ui| {
            let total_height = ui.available_height();
            let footer_height = 40.0;
            let footer_margin = 15.0;
            let content_height = total_height - footer_height - footer_margin;

            egui::ScrollArea::vertical()
                .max_height(content_height)
                .show(ui, |ui| {
                    ui.add_space(20.0);
                    ui.vertical_centered(|ui| {
                        ui.heading(&copy.title);
                        ui.add_space(5.0);
                        ui.label(
                            RichText::new(&copy.tagline)
                                .color(ui.visuals().text_color().gamma_multiply(0.7)),
                        );
                    });

                    ui.add_space(20.0);
                    self.render_drop_zone(ui, ctx, &copy, accent);

                    ui.add_space(10.0);
                    ui.vertical_centered(|ui| {
                        ui.checkbox(&mut self.mixed_language, copy.mixed_hint_label.clone());
                    });

                    ui.add_space(10.0);
                    self.render_submit(ui, &copy);

                    if let Some(error) = self.workflow.error().map(|e| e.to_string()) {
                        ui.add_space(10.0);
                        ui.vertical_centered(|ui| {
                            ui.colored_label(ERROR_COLOR, error);
                        });
                    }

                    if self.workflow.is_submitting() {
                        ui.add_space(10.0);
                        self.render_progress(ui, &copy, accent);
                    }

                    if self.workflow.result().is_some() {
                        ui.add_space(15.0);
                        self.render_result(ui, &copy, accent);
                    }

                    ui.add_space(20.0);
                });

            ui.with_layout(egui::Layout::bottom_up(Align::Center), |ui| {
                ui.add_space(footer_margin);
                self.render_footer(ui, &copy, accent);
            });
        });
    }

    fn render_drop_zone(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        copy: &PageCopy,
        accent: Color32,
    ) {
        let drag_active = ctx.input(|i| !i.raw.hovered_files.is_empty());
        let stroke = if drag_active {
            Stroke::new(2.0, accent)
        } else {
            Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color)
        };

        egui::Frame::none()
            .stroke(stroke)
            .rounding(Rounding::same(12.0))
            .inner_margin(24.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("📤").size(32.0));
                    ui.add_space(8.0);

                    match self.workflow.file() {
                        Some(file) => {
                            let caption =
                                format!("تم اختيار: {} ({})", file.name, format_size(file.size));
                            ui.label(caption)
                                .on_hover_text(file.path.display().to_string());
                        }
                        None => {
                            ui.label(&copy.drop_hint);
                        }
                    }

                    ui.add_space(8.0);
                    ui.add_enabled_ui(!self.workflow.is_submitting(), |ui| {
                        if ui.button(&copy.pick_label).clicked() {
                            self.pick_file();
                        }
                    });
                });
            });
    }

    fn render_submit(&mut self, ui: &mut egui::Ui, copy: &PageCopy) {
        ui.vertical_centered(|ui| {
            let label = if self.workflow.is_submitting() {
                copy.busy_label.clone()
            } else {
                copy.submit_label.clone()
            };

            ui.add_enabled_ui(self.workflow.can_submit(), |ui| {
                let button = egui::Button::new(label).min_size(egui::vec2(200.0, 40.0));
                if ui.add(button).clicked() {
                    self.start_submission();
                }
            });
        });
    }

    fn render_progress(&self, ui: &mut egui::Ui, copy: &PageCopy, accent: Color32) {
        let current = self
            .workflow
            .file()
            .map(|f| f.name.clone())
            .unwrap_or_default();

        ui.group(|ui| {
            ui.label(format!("📤 {} {}", copy.busy_label, current));
            let progress_bar = egui::ProgressBar::new(self.workflow.progress(Instant::now()))
                .show_percentage()
                .animate(false)
                .fill(accent);
            ui.add(progress_bar);
        });
    }

    fn render_result(&mut self, ui: &mut egui::Ui, copy: &PageCopy, accent: Color32) {
        let Some(result) = self.workflow.result().cloned() else {
            return;
        };

        ui.group(|ui| {
            ui.heading(&copy.result_heading);
            ui.add_space(8.0);
            egui::ScrollArea::vertical()
                .id_source("ocr_result")
                .max_height(300.0)
                .show(ui, |ui| {
                    render_text_lines(ui, &result.text);
                });
        });

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui.button(&copy.copy_label).clicked() {
                ui.ctx().output_mut(|o| o.copied_text = result.text.clone());
            }
            if ui.button(&copy.close_label).clicked() {
                self.workflow.dismiss_result();
            }
            if ui.button(&copy.reset_label).clicked() {
                self.reset();
            }
            if let Some(url) = &result.image_url {
                if ui
                    .add(
                        egui::Label::new(RichText::new("عرض الصورة المعالجة").color(accent))
                            .sense(egui::Sense::click()),
                    )
                    .clicked()
                {
                    let _ = open::that(url);
                }
            }
        });
    }

    fn render_footer(&self, ui: &mut egui::Ui, copy: &PageCopy, accent: Color32) {
        let footer_width = 260.0;
        let indent = (ui.available_width() - footer_width) / 2.0;

        ui.horizontal(|ui| {
            ui.add_space(indent);
            ui.scope(|ui| {
                ui.set_width(footer_width);
                ui.horizontal_centered(|ui| {
                    ui.label(&copy.title);
                    ui.label("·");
                    if ui
                        .add(
                            egui::Label::new(RichText::new(&copy.contact).color(accent))
                                .sense(egui::Sense::click()),
                        )
                        .clicked()
                    {
                        let _ = open::that(format!("mailto:{}", copy.contact));
                    }
                });
            });
        });
    }
}

/// Lays each line out in the direction of its dominant script; words group
/// into direction runs so Latin fragments inside an Arabic line keep their
/// own order.
fn render_text_lines(ui: &mut egui::Ui, text: &str) {
    for line in text.lines() {
        let runs = split_runs(line);
        if runs.is_empty() {
            ui.add_space(8.0);
            continue;
        }

        let layout = match dominant_direction(line) {
            Direction::Rtl => egui::Layout::right_to_left(Align::TOP),
            Direction::Ltr => egui::Layout::left_to_right(Align::TOP),
        };

        ui.with_layout(layout, |ui| {
            for run in runs {
                ui.label(run.text);
            }
        });
    }
}
