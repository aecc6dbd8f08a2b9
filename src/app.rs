//! Application state and core logic

use crate::config::{FlagStore, WizardConfig};
use crate::generation::{GeminiClient, GenerationAdapter, GenerationError};
use crate::import::read_text_file;
use crate::platform::{DesktopPlatform, Platform, DOCS_NEW_URL};
use crate::report::{to_html, to_plain_text, DocumentView};
use crate::state::{
    AppState, Competencies, FieldId, FormAction, GeneratedDocument, IdeaKind, ImportDialog,
    ImportFocus, LessonForm, Operation, Step, StepOutcome, Submission, View,
};
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{info, warn};

pub const NEED_CONTEXT_MESSAGE: &str =
    "Silakan isi Mata Pelajaran dan Materi (Langkah 2 & 5) terlebih dahulu agar AI memiliki konteks.";
pub const IDEA_FAILED_MESSAGE: &str = "Gagal mengambil ide AI. Silakan coba lagi.";
pub const EXTRACT_FAILED_MESSAGE: &str = "Gagal mengekstrak teks.";
pub const COPY_FAILED_MESSAGE: &str = "Gagal menyalin otomatis.";
pub const COPIED_MESSAGE: &str = "Konten telah disalin! Tab baru Google Dokumen akan dibuka.";
pub const READY_MESSAGE: &str = "Berhasil! Modul Ajar siap disalin.";

/// Result of a spawned generation task
#[derive(Debug)]
pub enum Outcome {
    Idea {
        kind: IdeaKind,
        result: Result<String, GenerationError>,
    },
    Extraction(Result<Competencies, GenerationError>),
    Document {
        form: Box<LessonForm>,
        result: Result<GeneratedDocument, GenerationError>,
    },
}

impl Outcome {
    fn operation(&self) -> Operation {
        match self {
            Self::Idea { kind, .. } => Operation::Idea(*kind),
            Self::Extraction(_) => Operation::Extract,
            Self::Document { .. } => Operation::Compose,
        }
    }
}

/// Outcome tagged with the wizard session that requested it
#[derive(Debug)]
pub struct Completion {
    session: u64,
    outcome: Outcome,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    adapter: GenerationAdapter,
    platform: Box<dyn Platform>,
    completions_tx: UnboundedSender<Completion>,
    completions_rx: UnboundedReceiver<Completion>,
    /// Bumped on "new plan" so late completions from the old form are dropped
    session: u64,
    quit: bool,
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

impl App {
    /// Create the app with the Gemini backend and desktop platform
    pub fn new(config: &WizardConfig) -> Result<Self> {
        let client = GeminiClient::from_config(config)?;
        let adapter = GenerationAdapter::new(Arc::new(client), config.model());
        let platform = DesktopPlatform::new(FlagStore::open_default());
        Ok(Self::with_parts(adapter, Box::new(platform)))
    }

    pub fn with_parts(adapter: GenerationAdapter, platform: Box<dyn Platform>) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        let mut state = AppState::default();
        if !platform.tutorial_seen() {
            state.tutorial = Some(0);
        }
        Self {
            state,
            adapter,
            platform,
            completions_tx,
            completions_rx,
            session: 0,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    pub fn model(&self) -> &str {
        self.adapter.model()
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message);
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if self.state.tutorial.is_some() {
            self.handle_tutorial_key(key);
            return Ok(());
        }

        if self.state.import.is_some() {
            self.handle_import_key(key).await;
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.notice = None;

        match self.state.view {
            View::Wizard => self.handle_wizard_key(key),
            View::Result => self.handle_result_key(key),
        }
        Ok(())
    }

    /// Bracketed paste: the whole string goes to one input, never through key handling
    pub fn handle_paste(&mut self, text: &str) {
        if self.state.has_errors() || self.state.tutorial.is_some() {
            return;
        }
        if let Some(dialog) = self.state.import.as_mut() {
            dialog.paste(text);
            return;
        }
        self.state.notice = None;
        if self.state.view == View::Wizard {
            if let Some(action) = self.state.paste_action(text) {
                self.dispatch(action);
            }
        }
    }

    fn handle_tutorial_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => {
                if self.state.next_tutorial_page() {
                    self.finish_tutorial();
                }
            }
            KeyCode::Left => self.state.prev_tutorial_page(),
            KeyCode::Esc => self.finish_tutorial(),
            _ => {}
        }
    }

    /// Close the tutorial and remember it was seen
    pub fn finish_tutorial(&mut self) {
        self.state.tutorial = None;
        if let Err(e) = self.platform.mark_tutorial_seen() {
            warn!("Failed to persist tutorial flag: {e:#}");
        }
    }

    fn handle_wizard_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('n') => self.advance(),
                KeyCode::Char('p') => self.retreat(),
                KeyCode::Char('s') => self.submit(),
                KeyCode::Char('g') => self.request_idea(),
                KeyCode::Char('o') => self.open_import(),
                _ => {}
            }
            return;
        }

        let action = match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.state.next_focus();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.prev_focus();
                None
            }
            KeyCode::Left => self.state.cycle_action(false),
            KeyCode::Right => self.state.cycle_action(true),
            KeyCode::Char(' ') => self
                .state
                .toggle_action()
                .or_else(|| self.state.text_input_action(' ')),
            KeyCode::Char(c) => self.state.text_input_action(c),
            KeyCode::Backspace => self.state.backspace_action(),
            KeyCode::Enter => {
                let newline = self.state.newline_action();
                if newline.is_none() {
                    self.state.next_focus();
                }
                newline
            }
            _ => None,
        };

        if let Some(action) = action {
            self.dispatch(action);
        }
    }

    fn handle_result_key(&mut self, key: KeyEvent) {
        if is_ctrl(&key, 'e') {
            self.export();
            return;
        }
        if is_ctrl(&key, 'r') {
            self.new_plan();
            return;
        }
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_up(),
            KeyCode::Char('d') | KeyCode::PageDown => self.state.scroll_down_page(),
            KeyCode::Char('u') | KeyCode::PageUp => self.state.scroll_up_page(),
            KeyCode::Esc => {
                // Back to the form to tweak and regenerate
                self.state.view = View::Wizard;
                self.state.scroll_offset = 0;
            }
            _ => {}
        }
    }

    pub fn dispatch(&mut self, action: FormAction) {
        self.state.wizard.dispatch(action);
        self.state.clamp_focus();
    }

    fn focus_first_error(&mut self) {
        let errors = self.state.wizard.errors();
        if let Some(index) = self
            .state
            .controls()
            .iter()
            .position(|c| c.error_field().is_some_and(|f| errors.contains(f)))
        {
            self.state.focus = index;
        }
    }

    pub fn advance(&mut self) {
        match self.state.wizard.advance() {
            StepOutcome::Advanced(step) => {
                info!(step = step.number(), title = step.title(), "Step changed");
                self.state.reset_view_position();
            }
            StepOutcome::Blocked => self.focus_first_error(),
        }
    }

    pub fn retreat(&mut self) {
        self.state.wizard.retreat();
        self.state.reset_view_position();
    }

    fn spawn(&self, fut: impl std::future::Future<Output = Outcome> + Send + 'static) {
        let tx = self.completions_tx.clone();
        let session = self.session;
        tokio::spawn(async move {
            let outcome = fut.await;
            // Receiver only goes away on shutdown
            let _ = tx.send(Completion { session, outcome });
        });
    }

    /// Ask for an idea for the focused inspiration field
    pub fn request_idea(&mut self) {
        let Some(kind) = self
            .state
            .focused_text_field()
            .and_then(|field| field.idea_kind())
        else {
            return;
        };
        let Some(ctx) = self.state.wizard.form().ideation_context() else {
            self.push_error(NEED_CONTEXT_MESSAGE);
            return;
        };
        if !self.state.busy.try_begin(Operation::Idea(kind)) {
            return;
        }

        let adapter = self.adapter.clone();
        self.spawn(async move {
            let result = adapter.ideate(kind, &ctx).await;
            Outcome::Idea { kind, result }
        });
    }

    fn open_import(&mut self) {
        if self.state.wizard.step() == Step::Competency {
            self.state.import = Some(ImportDialog::default());
        }
    }

    async fn handle_import_key(&mut self, key: KeyEvent) {
        let on_path = self
            .state
            .import
            .as_ref()
            .is_some_and(|d| d.focus == ImportFocus::Path);
        if is_ctrl(&key, 's') || (key.code == KeyCode::Enter && on_path) {
            self.submit_import().await;
            return;
        }
        if key.code == KeyCode::Esc {
            self.state.import = None;
            return;
        }
        let Some(dialog) = self.state.import.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => dialog.toggle_focus(),
            KeyCode::Enter => dialog.input_char('\n'),
            KeyCode::Backspace => dialog.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                dialog.input_char(c)
            }
            _ => {}
        }
    }

    /// Extract CP/TP from the pasted text, or from the file when the path has focus
    pub async fn submit_import(&mut self) {
        let Some(dialog) = self.state.import.as_ref() else {
            return;
        };
        if self.state.busy.is_busy(Operation::Extract) {
            return;
        }

        let raw = match dialog.focus {
            ImportFocus::Path => {
                let path = PathBuf::from(dialog.path.trim());
                if path.as_os_str().is_empty() {
                    return;
                }
                match read_text_file(&path).await {
                    Ok(text) => text,
                    Err(e) => {
                        warn!(path = %path.display(), "Import failed: {e}");
                        self.push_error(e.to_string());
                        return;
                    }
                }
            }
            ImportFocus::Text => {
                if dialog.text.trim().is_empty() {
                    return;
                }
                dialog.text.clone()
            }
        };

        self.request_extraction(raw);
    }

    pub fn request_extraction(&mut self, raw: String) {
        if !self.state.busy.try_begin(Operation::Extract) {
            return;
        }
        let adapter = self.adapter.clone();
        self.spawn(async move { Outcome::Extraction(adapter.extract(&raw).await) });
    }

    /// Validate step 5 and request the document
    pub fn submit(&mut self) {
        if self.state.busy.is_busy(Operation::Compose) {
            return;
        }
        match self.state.wizard.submit() {
            Submission::Ready(form) => {
                if !self.state.busy.try_begin(Operation::Compose) {
                    return;
                }
                info!(subject = form.text(FieldId::Subject), "Submitting lesson plan");
                let adapter = self.adapter.clone();
                self.spawn(async move {
                    let result = adapter.compose(&form).await;
                    Outcome::Document {
                        form: Box::new(form),
                        result,
                    }
                });
            }
            Submission::Invalid => self.focus_first_error(),
            Submission::NotFinalStep => {}
        }
    }

    /// Copy the rendered document to the clipboard, then open a new Google Doc
    pub fn export(&mut self) {
        let (Some(document), Some(form)) = (&self.state.document, &self.state.composed_from) else {
            return;
        };
        let view = DocumentView::build(document, form, Local::now().date_naive());
        let html = to_html(&view);
        let text = to_plain_text(&view);

        if let Err(e) = self.platform.copy_html(&html, &text) {
            warn!("Clipboard export failed: {e:#}");
            self.push_error(COPY_FAILED_MESSAGE);
            return;
        }
        self.state.notice = Some(COPIED_MESSAGE.to_string());

        if let Err(e) = self.platform.open_url(DOCS_NEW_URL) {
            warn!("Opening {DOCS_NEW_URL} failed: {e:#}");
            self.push_error(format!("Gagal membuka {DOCS_NEW_URL}: {e}"));
        }
    }

    /// Discard the form and document and start again at step 1
    pub fn new_plan(&mut self) {
        self.session += 1;
        self.state.wizard.reset();
        self.state.document = None;
        self.state.composed_from = None;
        self.state.import = None;
        self.state.view = View::Wizard;
        self.state.reset_view_position();
    }

    /// Apply every finished generation task
    pub fn drain_completions(&mut self) {
        while let Ok(completion) = self.completions_rx.try_recv() {
            self.apply_completion(completion);
        }
    }

    fn apply_completion(&mut self, completion: Completion) {
        let Completion { session, outcome } = completion;
        self.state.busy.finish(outcome.operation());
        if session != self.session {
            info!(op = ?outcome.operation(), "Dropping result from a previous plan");
            return;
        }

        match outcome {
            Outcome::Idea { kind, result } => match result {
                Ok(text) => {
                    info!(kind = kind.key(), "Idea received");
                    self.dispatch(FormAction::ApplyIdea { kind, text });
                }
                Err(e) => {
                    warn!(kind = kind.key(), "Idea failed: {e}");
                    self.push_error(IDEA_FAILED_MESSAGE);
                }
            },
            Outcome::Extraction(result) => match result {
                Ok(competencies) => {
                    info!("CP/TP extracted");
                    self.dispatch(FormAction::ApplyExtraction(competencies));
                    self.state.import = None;
                }
                Err(e) => {
                    warn!("Extraction failed: {e}");
                    self.push_error(EXTRACT_FAILED_MESSAGE);
                }
            },
            Outcome::Document { form, result } => match result {
                Ok(document) => {
                    info!(meetings = document.pengalaman.len(), "Lesson plan generated");
                    self.state.document = Some(document);
                    self.state.composed_from = Some(*form);
                    self.state.view = View::Result;
                    self.state.scroll_offset = 0;
                    self.state.notice = Some(READY_MESSAGE.to_string());
                }
                Err(e) => {
                    warn!("Lesson plan generation failed: {e}");
                    self.push_error(format!("Gagal menghasilkan RPM: {e}"));
                }
            },
        }
    }
}
