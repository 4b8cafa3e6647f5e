mod state;
mod ui;

use std::path::Path;
use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;

use eframe::{egui, App};
use tokio::runtime::Runtime;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::upload::{picker_extensions, OcrClient, OcrHints, OcrResult, UploadError, UploadedFile};
pub use state::{UploadWorkflow, WorkflowState, NO_FILE_MESSAGE};

pub struct OcrApp {
    config: AppConfig,
    accent: egui::Color32,
    workflow: UploadWorkflow,
    mixed_language: bool,
    outcome_receiver: Option<Receiver<Result<OcrResult, UploadError>>>,
}

impl OcrApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        info!("Initializing {}", config.copy.title);
        let accent = config.accent_color();
        Self {
            config,
            accent,
            workflow: UploadWorkflow::default(),
            mixed_language: false,
            outcome_receiver: None,
        }
    }

    pub(crate) fn pick_file(&mut self) {
        let extensions = picker_extensions();
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images & PDF", &extensions)
            .pick_file()
        {
            self.intake_path(&path);
        }
    }

    pub(crate) fn intake_path(&mut self, path: &Path) {
        match UploadedFile::from_path(path) {
            Ok(file) => {
                self.workflow.select_file(file);
            }
            Err(e) => {
                error!("Failed to read {}: {}", path.display(), e);
                self.workflow
                    .report_local_error(format!("حدث خطأ أثناء معالجة الملف: {e}"));
            }
        }
    }

    /// Files dropped anywhere on the window count as a pick. Only the first
    /// one matters, the workflow holds a single file.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(path) = dropped.into_iter().find_map(|f| f.path) {
            self.intake_path(&path);
        }
    }

    /// Spawns the single network call on a worker thread, the outcome comes
    /// back over the channel polled each frame.
    pub(crate) fn start_submission(&mut self) {
        let Some(file) = self.workflow.begin_submission() else {
            return;
        };

        let client = OcrClient::new(self.config.api_base_url.clone());
        let hints = OcrHints {
            mixed_language: self.mixed_language,
        };
        let (sender, receiver) = channel();
        self.outcome_receiver = Some(receiver);

        info!("Starting OCR submission for {}", file.name);
        std::thread::spawn(move || {
            let rt = match Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    let _ = sender.send(Err(UploadError::Runtime(e)));
                    return;
                }
            };
            let outcome = rt.block_on(client.recognize(&file, hints));
            let _ = sender.send(outcome);
        });
    }

    pub(crate) fn reset(&mut self) {
        info!("Resetting application state");
        self.workflow.reset();
        self.mixed_language = false;
        self.outcome_receiver = None;
    }

    pub(crate) fn update_state(&mut self, ctx: &egui::Context) {
        self.handle_dropped_files(ctx);

        if let Some(receiver) = &self.outcome_receiver {
            if let Ok(outcome) = receiver.try_recv() {
                match &outcome {
                    Ok(result) => info!("OCR response with {} chars", result.text.len()),
                    Err(e) => error!("Error processing file: {}", e),
                }
                self.workflow.complete_submission(outcome);
                self.outcome_receiver = None;
            }
        }

        // Keep the progress bar moving between input events.
        if self.workflow.is_submitting() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

impl App for OcrApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}
