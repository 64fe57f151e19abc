//! Type definitions and enums for scene selection and menu navigation.

/// Enumeration of the scenes the game can be in.
///
/// This enumeration holds information about which scene is active. It is stored in the game state
/// under the `current_scene` key, and the main loop builds the matching scene whenever the stored
/// value changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum SceneType {
    /// Main menu scene.
    ///
    /// This variant represents the main menu, the scene the game starts in.
    Menu,
    /// Gameplay scene.
    ///
    /// This variant represents the scene entered through the "Start Game" menu option.
    Game,
    /// Options scene.
    ///
    /// This variant represents the scene entered through the "Options" menu option.
    Options,
    /// Game over scene.
    ///
    /// This variant represents the scene entered once the player runs out of health.
    GameOver,
}

impl SceneType {
    /// Returns the string representation of the scene type.
    ///
    /// This is the title shown on the scene's panel and the name written to the logs.
    pub(crate) const fn repr(self) -> &'static str {
        match self {
            Self::Menu => "Main Menu",
            Self::Game => "Game",
            Self::Options => "Options",
            Self::GameOver => "Game Over",
        }
    }
}

/// Main menu navigation options.
///
/// This enumeration holds the different items in the main menu, in the order they are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// "Start Game" menu option.
    ///
    /// This variant represents the option switching to the gameplay scene.
    StartGame,
    /// "Options" menu option.
    ///
    /// This variant represents the option switching to the options scene.
    Options,
    /// "Quit" menu option.
    ///
    /// This variant represents the option clearing the `running` flag of the game state.
    Quit,
}

impl MainMenuItem {
    /// All main menu items in display order.
    pub(crate) const ALL: [Self; 3] = [Self::StartGame, Self::Options, Self::Quit];

    /// Returns the label drawn for the menu item.
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::StartGame => "Start Game",
            Self::Options => "Options",
            Self::Quit => "Quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_type_repr() {
        assert_eq!(SceneType::Menu.repr(), "Main Menu");
        assert_eq!(SceneType::Game.repr(), "Game");
        assert_eq!(SceneType::Options.repr(), "Options");
        assert_eq!(SceneType::GameOver.repr(), "Game Over");
    }

    #[test]
    fn test_main_menu_item_order() {
        let labels = MainMenuItem::ALL.map(MainMenuItem::label);

        assert_eq!(labels, ["Start Game", "Options", "Quit"]);
    }

    #[test]
    fn test_debug_implementations() {
        assert_eq!(format!("{:?}", SceneType::GameOver), "GameOver");
        assert_eq!(format!("{:?}", MainMenuItem::StartGame), "StartGame");
    }
}
