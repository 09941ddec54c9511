//! Application orchestration layer
//!
//! Wires the input thread, the render service and the UI renderer together. All list
//! state is owned by the single task running [`Application::run`]; the input thread only
//! forwards raw terminal events.

pub mod runtime;

use crate::config::AppConfig;
use crate::error::Result;
use crate::input::{InputAction, InputService, RawInputEvent};
use crate::list::ListController;
use crate::render::ui::{UIRenderer, ViewState};
use crate::render::RenderService;
use runtime::spawn_input_thread;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Application orchestrator - coordinates components without duplicating their state
pub struct Application {
    ui_renderer: Box<dyn UIRenderer>,
    input: InputService,
    render: RenderService,
    poll_interval: Duration,
}

impl Application {
    pub fn new(config: &AppConfig, ui_renderer: Box<dyn UIRenderer>) -> Self {
        Self {
            ui_renderer,
            input: InputService::new(),
            render: RenderService::new(ViewState::new(0, 0)),
            poll_interval: config.poll_interval(),
        }
    }

    pub fn controller(&self) -> &ListController {
        self.render.controller()
    }

    pub fn view_state(&self) -> &ViewState {
        self.render.view_state()
    }

    /// Run the application until the user quits
    pub async fn run(&mut self) -> Result<()> {
        self.ui_renderer.initialize()?;
        let result = self.event_loop().await;
        let cleanup = self.ui_renderer.cleanup();
        result.and(cleanup)
    }

    async fn event_loop(&mut self) -> Result<()> {
        let (width, height) = self.ui_renderer.get_terminal_size()?;
        self.render
            .process_action(InputAction::Resize { width, height })?;
        self.render_if_needed()?;

        let (tx, mut rx) = mpsc::unbounded_channel();
        let shutdown = Arc::new(AtomicBool::new(false));
        let input_thread = spawn_input_thread(tx, Arc::clone(&shutdown), self.poll_interval);

        let mut result = Ok(());
        while let Some(event) = rx.recv().await {
            match self.handle_event(event) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => {
                    result = Err(err);
                    break;
                }
            }
        }

        shutdown.store(true, Ordering::SeqCst);
        drop(rx);
        match tokio::task::spawn_blocking(move || input_thread.join()).await {
            Ok(Ok(())) => {}
            _ => log::warn!("input thread did not shut down cleanly"),
        }
        result
    }

    /// Handle one raw event and redraw if anything changed.
    /// Returns false when the user asked to quit.
    pub fn handle_event(&mut self, event: RawInputEvent) -> Result<bool> {
        let focus = self.render.view_state().focus;
        let Some(action) = self.input.process_event(focus, event) else {
            return Ok(true);
        };
        if !self.render.process_action(action)? {
            return Ok(false);
        }
        self.render_if_needed()?;
        Ok(true)
    }

    fn render_if_needed(&mut self) -> Result<()> {
        if self.render.needs_render() {
            self.ui_renderer
                .render(self.render.controller(), self.render.view_state())?;
            self.render.mark_rendered();
        }
        Ok(())
    }
}
