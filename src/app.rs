//! Core application state and main loop of the game.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::{crossterm::event::Event, DefaultTerminal};
use tracing::info;

use crate::{
    config::Config,
    events,
    font::Font,
    game::Manager,
    scenes::{self, Scene},
    state::{Store, RUNNING},
    systems,
    types::SceneType,
};

/// Application state container for the game.
///
/// This structure holds the game manager shared by the scenes and the scene currently on screen.
/// Ratatui renders the active scene and Crossterm events are fed to it.
pub struct App {
    /// Game state and system registry.
    ///
    /// This field holds the manager handed to the active scene on every event, update and render.
    /// It outlives the scenes, so the game state survives every scene switch.
    manager: Manager,
    /// Scene currently on screen.
    ///
    /// This field holds the scene that is drawn and receives events. It is replaced whenever the
    /// `current_scene` key of the game state names another scene.
    scene: Box<dyn Scene>,
    /// Configured main menu font.
    ///
    /// This field holds the font handed to the main menu whenever it is rebuilt.
    font: Font,
    /// Time budget of a single frame.
    ///
    /// This field holds how long the main loop waits for input before updating the active scene
    /// again.
    frame_delay: Duration,
}

impl App {
    /// Creates the application in the main menu.
    ///
    /// The configuration is registered as a system so that scenes can read it.
    ///
    /// # Errors
    ///
    /// This function returns an error if the configuration does not pass
    /// [`Config::validate`].
    pub fn new(config: &Config) -> Result<Self> {
        let frame_delay = config.frame_delay()?;
        let font = Font::get(config.graphics.font_size);

        let mut manager = Manager::new(Store::new(config.start.score, config.start.health));
        manager
            .systems_mut()
            .register(systems::CONFIG, config.clone());

        Ok(Self {
            manager,
            scene: scenes::build(SceneType::Menu, font),
            font,
            frame_delay,
        })
    }

    /// Runs the main loop of the application.
    ///
    /// Every iteration draws the active scene, waits up to one frame for input and advances the
    /// game by one [`step`](App::step). The loop ends once the `running` flag of the game state is
    /// cleared.
    ///
    /// # Errors
    ///
    /// This function may return errors from drawing, from reading terminal events, or from the
    /// active scene.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        info!(frame_delay = ?self.frame_delay, "entering the main loop");

        while self.manager.state().running() {
            let _ = terminal.try_draw(|frame| {
                self.scene
                    .render(frame, &self.manager)
                    .map_err(std::io::Error::other)
            })?;
            let event = events::poll(self.frame_delay)?;
            self.step(event.as_ref())?;
        }

        info!("leaving the main loop");

        Ok(())
    }

    /// Advances the game by one frame.
    ///
    /// The event, if any, is checked for a quit request and then handed to the active scene. The
    /// scene is updated afterwards, and replaced if the game state now asks for another scene.
    ///
    /// # Errors
    ///
    /// This function returns the errors raised by the active scene.
    pub(crate) fn step(&mut self, event: Option<&Event>) -> Result<()> {
        if let Some(event) = event {
            if events::is_quit(event) {
                info!("quit requested");
                self.manager.state_mut().set(RUNNING, false);
            }
            self.scene.handle_event(event, &mut self.manager)?;
        }

        self.scene.update(&mut self.manager)?;
        self.switch_scene();

        Ok(())
    }

    /// Builds the scene named by the game state if it is not the active one.
    fn switch_scene(&mut self) {
        let next = self.manager.state().current_scene();
        let current = self.scene.kind();

        if next != current {
            info!(from = current.repr(), to = next.repr(), "switching scene");
            self.scene = scenes::build(next, self.font);
        }
    }
}
