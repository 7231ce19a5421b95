//! # Console Presenter
//!
//! Renders the detail screen as plain text lines. Used by the `detail` binary.

use crate::app::state::{AttributeRow, ProfileHeader, ScreenResult};
use crate::core::service::Presenter;
use crate::services::image::{LoadedImage, RequestOptions};
use crate::ui::icons;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Writes each presenter call as a line to `out`.
pub struct ConsolePresenter {
    out: Box<dyn Write + Send>,
    result: Arc<Mutex<Option<ScreenResult>>>,
    rows: usize,
    glyphs: bool,
}

impl ConsolePresenter {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out,
            result: Arc::new(Mutex::new(None)),
            rows: 0,
            glyphs: false,
        }
    }

    /// Prefix rows with Material glyphs instead of text labels. Needs a
    /// terminal font with the Material Icons codepoints.
    pub fn with_glyphs(mut self, glyphs: bool) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Shared handle that receives the close result.
    pub fn result_handle(&self) -> Arc<Mutex<Option<ScreenResult>>> {
        Arc::clone(&self.result)
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            tracing::warn!(error = %e, "Console write failed");
        }
    }
}

fn transition_suffix(options: RequestOptions) -> &'static str {
    if options.crossfade {
        ", crossfade"
    } else if options.animate {
        ", fade in"
    } else {
        ""
    }
}

impl Presenter for ConsolePresenter {
    fn set_title(&mut self, title: &str) {
        self.line(format_args!("== {} ==", title));
    }

    fn postpone_enter_transition(&mut self) {
        tracing::debug!("Enter transition postponed");
    }

    fn start_enter_transition(&mut self) {
        tracing::debug!("Enter transition started");
    }

    fn show_avatar(&mut self, image: LoadedImage, options: RequestOptions) {
        self.line(format_args!(
            "(avatar {}x{}{})",
            image.width,
            image.height,
            transition_suffix(options)
        ));
    }

    fn render_header(&mut self, header: &ProfileHeader) {
        self.line(format_args!("{} ({})", header.display_name, header.login));
        if let Some(bio) = &header.bio {
            self.line(format_args!("  {}", bio));
        }
    }

    fn append_row(&mut self, row: AttributeRow) {
        self.rows += 1;
        let marker = if self.glyphs {
            icons::glyph(row.kind)
        } else {
            icons::label(row.kind)
        };
        self.line(format_args!("{} {}", marker, row.text));
    }

    fn show_message(&mut self, message: &str) {
        self.line(format_args!("! {}", message));
    }

    fn set_loading_indicator(&mut self, active: bool) {
        if active {
            self.line(format_args!("loading contributions..."));
        }
    }

    fn show_chart(&mut self, image: LoadedImage, options: RequestOptions) {
        self.line(format_args!(
            "(contributions chart {}x{}{})",
            image.width,
            image.height,
            transition_suffix(options)
        ));
    }

    fn set_chart_visible(&mut self, visible: bool) {
        if !visible {
            self.line(format_args!("(contributions chart unavailable)"));
        }
    }

    fn set_chart_placeholder_visible(&mut self, _visible: bool) {}

    fn finish_with_result(&mut self, result: ScreenResult) {
        tracing::debug!(rows = self.rows, "Console presenter finished");
        *self.result.lock() = Some(result);
        if let Err(e) = self.out.flush() {
            tracing::warn!(error = %e, "Console flush failed");
        }
    }
}
