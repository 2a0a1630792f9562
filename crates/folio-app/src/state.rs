//! Application state (Model in TEA pattern)

use folio_core::{Content, Project, CONTENT};

use crate::config::Settings;
use crate::disclosure::DisclosureState;
use crate::navigation::{NavSurface, NavigationState};
use crate::scroll::ScrollState;
use crate::theme::ThemeController;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Last known terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

/// Complete application state (Model in TEA pattern)
///
/// View state lives in the three controllers and the main pane scroll; the
/// rest is static content, settings and the terminal size the renderer lays
/// out against.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Static copy, never mutated
    pub content: &'static Content,

    pub settings: Settings,

    pub theme: ThemeController,

    pub navigation: NavigationState,

    pub disclosure: DisclosureState,

    /// Main pane scroll position
    pub scroll: ScrollState,

    pub viewport: Viewport,

    pub phase: AppPhase,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self::with_content(&CONTENT, settings)
    }

    pub fn with_content(content: &'static Content, settings: Settings) -> Self {
        Self {
            content,
            settings,
            theme: ThemeController::new(),
            navigation: NavigationState::new(),
            disclosure: DisclosureState::new(),
            scroll: ScrollState::new(),
            viewport: Viewport::default(),
            phase: AppPhase::Running,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Whether the sidebar (wide) layout is in use
    pub fn is_wide(&self) -> bool {
        self.viewport.width >= self.settings.ui.wide_breakpoint
    }

    /// The navigation affordance currently on screen
    pub fn nav_surface(&self) -> NavSurface {
        if self.is_wide() {
            NavSurface::Sidebar
        } else {
            NavSurface::Menu
        }
    }

    pub fn expanded_project(&self) -> Option<&'static Project> {
        let id = self.disclosure.expanded()?;
        self.content.project(id.as_str())
    }

    pub fn focused_project(&self) -> Option<&'static Project> {
        self.content.projects.get(self.disclosure.cursor())
    }
}
