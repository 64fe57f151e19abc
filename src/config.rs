//! Configuration loaded from a TOML file.
//!
//! Every key is optional; a missing file or a missing key falls back to the defaults below. The
//! command line can override a subset of the settings afterwards.

use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use color_eyre::eyre::{bail, Result, WrapErr as _};
use serde::Deserialize;

use crate::{cli::Cli, font, state};

/// Frames drawn per second unless configured otherwise.
const DEFAULT_FPS: u16 = 60;

/// Settings of the whole game.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Drawing settings.
    ///
    /// This field holds the `[graphics]` table.
    pub graphics: Graphics,
    /// Values a new game starts with.
    ///
    /// This field holds the `[start]` table.
    pub start: Start,
    /// Log output settings.
    ///
    /// This field holds the `[logging]` table.
    pub logging: Logging,
}

/// Drawing settings.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Graphics {
    /// Frames drawn per second.
    ///
    /// This field also bounds how long the main loop waits for input. It must not be zero.
    pub fps: u16,
    /// Point size of the main menu font.
    ///
    /// This field is translated into terminal rows and letter spacing. It must not be zero.
    pub font_size: u16,
}

impl Default for Graphics {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            font_size: font::DEFAULT_SIZE,
        }
    }
}

/// Values a new game starts with.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Start {
    /// Initial score.
    ///
    /// This field holds the score of a new game, also restored after a game over.
    pub score: i64,
    /// Initial health.
    ///
    /// This field holds the health of a new game, also restored after a game over. It must be
    /// greater than zero, otherwise every game would end as soon as it starts.
    pub health: i64,
}

impl Default for Start {
    fn default() -> Self {
        Self {
            score: state::DEFAULT_SCORE,
            health: state::DEFAULT_HEALTH,
        }
    }
}

/// Log output settings.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Logging {
    /// File the log is written to.
    ///
    /// This field names a file because the terminal itself belongs to the game.
    pub file: PathBuf,
    /// Filter directive used when `RUST_LOG` is unset.
    ///
    /// A level given on the command line is used even when `RUST_LOG` is set.
    pub level: String,
    /// Whether [`level`](Logging::level) was given on the command line.
    ///
    /// This field is never read from the file; [`Config::apply`] sets it.
    #[serde(skip)]
    pub level_from_cli: bool,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            file: PathBuf::from("labyrinth.log"),
            level: "info".to_owned(),
            level_from_cli: false,
        }
    }
}

impl Config {
    /// Loads the configuration stored at `path`.
    ///
    /// A missing file is not an error and yields the default configuration.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - The file exists but cannot be read
    /// - The file is not valid TOML or contains unknown keys
    /// - A setting is out of range
    pub fn load(path: &Path) -> Result<Self> {
        let config = match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents)
                .wrap_err_with(|| format!("invalid configuration in {}", path.display()))?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(err) => {
                return Err(err)
                    .wrap_err_with(|| format!("failed to read configuration {}", path.display()))
            }
        };

        Ok(config)
    }

    /// Parses and validates configuration file contents.
    ///
    /// # Errors
    ///
    /// This function returns an error if the contents are not a valid configuration.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;

        Ok(config)
    }

    /// Applies the command line overrides on top of the loaded settings.
    pub fn apply(&mut self, cli: &Cli) {
        if let Some(fps) = cli.fps {
            self.graphics.fps = fps;
        }
        if let Some(level) = &cli.log_level {
            self.logging.level.clone_from(level);
            self.logging.level_from_cli = true;
        }
    }

    /// Checks that every setting is within range.
    ///
    /// # Errors
    ///
    /// This function returns an error if the frame rate or the font size is zero, or if a new game
    /// would start without health.
    pub fn validate(&self) -> Result<()> {
        if self.graphics.fps == 0 {
            bail!("graphics.fps must be greater than zero");
        }
        if self.graphics.font_size == 0 {
            bail!("graphics.font_size must be greater than zero");
        }
        if self.start.health <= 0 {
            bail!("start.health must be greater than zero");
        }

        Ok(())
    }

    /// Returns the time budget of one frame, rounded to the nearest millisecond.
    ///
    /// # Errors
    ///
    /// This function returns an error if the configuration does not pass
    /// [`validate`](Config::validate).
    pub fn frame_delay(&self) -> Result<Duration> {
        self.validate()?;
        let millis = rounded_div::i32(1000, i32::from(self.graphics.fps));

        Ok(Duration::from_millis(u64::try_from(millis)?))
    }
}
