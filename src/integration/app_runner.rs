use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::Mutex;

use crate::{
    core::{raw_msg::RawMsg, state::AppState},
    infrastructure::tui::{self, Event},
    integration::{renderer::Renderer, runtime::Runtime},
};

/// Event loop: terminal events become raw messages, the runtime folds them
/// into the state and runs the resulting commands, and the screen is redrawn.
pub struct AppRunner {
    headless: bool,
    runtime: Runtime,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    renderer: Renderer,
}

impl AppRunner {
    pub fn new(initial_state: AppState, tui: Arc<Mutex<dyn tui::TuiLike + Send>>) -> Self {
        Self {
            headless: false,
            runtime: Runtime::new(initial_state),
            tui,
            renderer: Renderer::new(),
        }
    }

    /// Runner that never enters or leaves the terminal (for tests).
    pub fn new_headless(
        initial_state: AppState,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    ) -> Self {
        Self {
            headless: true,
            ..Self::new(initial_state, tui)
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    /// Run until the state asks to quit or the event source is exhausted.
    pub async fn run(&mut self) -> Result<()> {
        if !self.headless {
            self.tui.lock().await.enter()?;
        }

        let result = self.event_loop().await;

        if !self.headless {
            self.tui.lock().await.exit()?;
        }
        result
    }

    async fn event_loop(&mut self) -> Result<()> {
        loop {
            let event = self.tui.lock().await.next().await;
            let Some(event) = event else {
                tracing::debug!("event source closed");
                break;
            };

            let should_render = self.handle_event(event).await?;

            for line in self.runtime.run_update_cycle() {
                tracing::debug!("{line}");
            }

            if self.runtime.state().system.should_quit {
                break;
            }
            if should_render {
                self.render().await?;
            }
        }
        Ok(())
    }

    /// Forwards `event` to the runtime; returns whether the screen needs a redraw.
    async fn handle_event(&mut self, event: Event) -> Result<bool> {
        let should_render = match event {
            Event::Init => {
                let area = self.tui.lock().await.size()?;
                self.runtime
                    .send_raw_msg(RawMsg::Resize(area.width, area.height));
                true
            }
            Event::Quit | Event::Closed => {
                self.runtime.send_raw_msg(RawMsg::Quit);
                false
            }
            Event::Tick => {
                self.runtime.send_raw_msg(RawMsg::Tick);
                false
            }
            Event::Render => true,
            Event::Resize(width, height) => {
                self.tui
                    .lock()
                    .await
                    .resize(Rect::new(0, 0, width, height))?;
                self.runtime.send_raw_msg(RawMsg::Resize(width, height));
                true
            }
            Event::Key(key) => {
                self.runtime.send_raw_msg(RawMsg::Key(key));
                true
            }
            Event::Error => {
                tracing::warn!("terminal reported an input error");
                false
            }
            Event::FocusGained | Event::FocusLost => false,
        };
        Ok(should_render)
    }

    async fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        self.renderer.render(&self.tui, state).await
    }
}
