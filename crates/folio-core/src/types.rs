//! Core domain types for folio

use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Tabs
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level content view. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    About,
    Projects,
}

impl Tab {
    /// All tabs in navigation order
    pub const ALL: [Tab; 2] = [Tab::About, Tab::Projects];

    /// Lowercase label as shown in navigation
    pub fn label(self) -> &'static str {
        match self {
            Tab::About => "about",
            Tab::Projects => "projects",
        }
    }

    /// Position in [`Tab::ALL`]
    pub fn index(self) -> usize {
        match self {
            Tab::About => 0,
            Tab::Projects => 1,
        }
    }

    /// Next tab, wrapping around
    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    /// Previous tab, wrapping around
    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    /// Parse a tab from its label (case-insensitive)
    pub fn from_label(label: &str) -> Option<Tab> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────────────────────────

/// Light/dark visual mode applied to the whole view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }

    /// The opposite preference
    pub fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    /// Stored representation: the "is dark" boolean as a string
    pub fn as_stored(self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }

    /// Label of the mode a toggle would switch to ("light mode" while dark)
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemePreference::Dark => "light mode",
            ThemePreference::Light => "dark mode",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemePreference::Light => f.write_str("light"),
            ThemePreference::Dark => f.write_str("dark"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Static content records
// ─────────────────────────────────────────────────────────────────────────────

/// Unique key of a [`Project`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectId(pub &'static str);

impl ProjectId {
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A project case study. Immutable, defined at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub title: &'static str,
    pub period: &'static str,
    pub role: &'static str,
    /// One-line summary shown while collapsed
    pub summary: &'static str,
    /// Ordered detail lines shown while expanded
    pub details: &'static [&'static str],
    /// Ordered tech tags shown while expanded
    pub tech: &'static [&'static str],
}

/// A named group of skills
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

/// An outbound profile reference, rendered as-is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

/// All static copy consumed by the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub name: &'static str,
    pub tagline: &'static str,
    pub headline: &'static str,
    pub about: &'static [&'static str],
    pub skills: &'static [SkillCategory],
    pub projects: &'static [Project],
    pub contacts: &'static [Link],
}

impl Content {
    /// Look up a project by id
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id.as_str() == id)
    }

    /// Position of a project in the authored list
    pub fn project_index(&self, id: ProjectId) -> Option<usize> {
        self.projects.iter().position(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tab_is_about() {
        assert_eq!(Tab::default(), Tab::About);
    }

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(Tab::About.next(), Tab::Projects);
        assert_eq!(Tab::Projects.next(), Tab::About);
        assert_eq!(Tab::About.prev(), Tab::Projects);
        assert_eq!(Tab::Projects.prev(), Tab::About);
    }

    #[test]
    fn test_tab_from_label() {
        assert_eq!(Tab::from_label("about"), Some(Tab::About));
        assert_eq!(Tab::from_label(" Projects "), Some(Tab::Projects));
        assert_eq!(Tab::from_label("blog"), None);
    }

    #[test]
    fn test_theme_toggle_and_storage() {
        assert_eq!(ThemePreference::default(), ThemePreference::Light);
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
        assert_eq!(ThemePreference::Dark.as_stored(), "true");
        assert_eq!(ThemePreference::Light.as_stored(), "false");
    }

    #[test]
    fn test_toggle_label_names_target_mode() {
        assert_eq!(ThemePreference::Dark.toggle_label(), "light mode");
        assert_eq!(ThemePreference::Light.toggle_label(), "dark mode");
    }
}
