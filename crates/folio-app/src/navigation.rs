//! Navigation state: active tab and the narrow-layout menu

use folio_core::prelude::*;
use folio_core::Tab;

/// Which affordance a tab selection came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSurface {
    /// Dropdown menu of the narrow layout; selecting closes it
    Menu,
    /// Sidebar of the wide layout; there is no menu to close
    Sidebar,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    active: Tab,
    menu_open: bool,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> Tab {
        self.active
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Make `tab` the active tab
    pub fn select_tab(&mut self, tab: Tab, surface: NavSurface) {
        if self.active != tab {
            debug!("Tab {} -> {} via {:?}", self.active, tab, surface);
        }
        self.active = tab;
        if surface == NavSurface::Menu {
            self.menu_open = false;
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}
