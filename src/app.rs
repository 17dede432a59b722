use crate::content;
use crate::navigation::ViewportTracker;
use crate::reference;
use crate::types::InputMode;
use crate::ui;
use crate::ui::draw;
use crate::{config::Config, state::AppState};
use color_eyre::Result;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
    widgets::ListState,
};
use std::sync::{Arc, RwLock};
use std::time::Instant;

#[derive(Debug)]
pub struct App {
    state: Arc<RwLock<AppState>>,
    list_state: ListState,
    source: Option<String>,
    base_url: Option<String>,
    spinner_index: usize,
    last_tick: Instant,
    event_handler: ui::EventHandler,
    tracker: ViewportTracker,
    config: Config,
}

impl Default for App {
    fn default() -> Self {
        let mut list_state = ListState::default();
        list_state.select(None);

        // Load config
        let config = Config::load().unwrap_or_default();
        let source = config.reference.source.clone();
        let base_url = config.reference.base_url.clone();

        // Show the source modal on first run
        let initial_input_mode = if source.is_none() {
            InputMode::EnteringSource
        } else {
            InputMode::Normal
        };

        let mut state = AppState::default();
        state.input.mode = initial_input_mode;

        Self {
            state: Arc::new(RwLock::new(state)),
            list_state,
            source,
            base_url,
            spinner_index: 0,
            last_tick: Instant::now(),
            event_handler: ui::EventHandler::new(),
            tracker: ViewportTracker::new(),
            config,
        }
    }
}

impl App {
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        // Only load if we have a source
        if self.source.is_some() {
            self.load_reference_background();
        }

        // Main UI loop
        while !self.event_handler.should_quit {
            // Update spinner animation
            if self.last_tick.elapsed().as_millis() > 100 {
                self.spinner_index = (self.spinner_index + 1) % 4;
                self.last_tick = Instant::now();
            }

            terminal.draw(|frame| self.draw(frame))?;

            // Report scroll-visibility transitions against the frame just drawn
            {
                let mut guard = self.state.write().unwrap();
                let s = &mut *guard;
                self.tracker.observe(
                    &s.content_layout,
                    s.ui.content_scroll,
                    s.ui.content_height,
                    &mut s.nav,
                );
            }

            let state = Arc::clone(&self.state);
            let (should_fetch, source_submitted) = self.event_handler.handle_events(
                state,
                &mut self.list_state,
                self.source.clone(),
                self.base_url.clone(),
            )?;

            // If a source was submitted, save it and start loading
            if let Some(submission) = source_submitted {
                self.source = Some(submission.source.clone());
                self.config
                    .set_reference_source(submission.source, submission.base_url)?;
                self.base_url = self.config.reference.base_url.clone();

                self.event_handler.selected_index = 0;
                self.list_state.select(Some(0));
                self.tracker.reset();
                self.load_reference_background();
            } else if should_fetch {
                self.tracker.reset();
                self.load_reference_background();
            }
        }

        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Check if we need to initialize selection (do this before acquiring lock)
        let should_select = self.list_state.selected().is_none();

        // Build the reference document for this frame
        let document = {
            let state = self.state.read().unwrap();
            content::build_document(
                &state.sections_in_order(),
                self.base_url.as_deref().unwrap_or_default(),
                &state.data.api,
            )
        };

        let mut state = self.state.write().unwrap();

        // Create main layout: Header, Search Bar, Body, Footer
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Search bar
                Constraint::Min(0),    // Body
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(main_chunks[2]);

        let display_source = self.source.as_deref().unwrap_or("No source configured");

        // Render header
        ui::render_header(frame, main_chunks[0], display_source, &state);

        // Render search bar
        ui::render_search_bar(frame, main_chunks[1], &state);

        // Ensure we have a selection if items exist
        if should_select && crate::state::count_visible_items(&state) > 0 {
            self.list_state.select(Some(0));
        }

        // Render left panel (table of contents)
        ui::render_toc_panel(
            frame,
            body_chunks[0],
            &state,
            self.spinner_index,
            &mut self.list_state,
        );

        // Render right panel (reference document)
        ui::render_content_panel(frame, body_chunks[1], &mut state, &document);

        // Render footer
        ui::render_footer(frame, main_chunks[3], &state.ui.view_mode);

        // Render modals LAST - after everything else
        if state.input.mode == InputMode::EnteringSource {
            draw::render_source_input_modal(frame, &state);
        }
    }

    fn load_reference_background(&self) {
        if let Some(source) = &self.source {
            reference::fetch::load_reference_background(Arc::clone(&self.state), source.clone());
        }
    }
}
