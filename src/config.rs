//! User configuration — keybindings and view options.
//!
//! Settings are read from a simple key-value text file at
//! `$XDG_CONFIG_HOME/file-menu-grid/config.toml`
//! (default `~/.config/file-menu-grid/config.toml`).  The file is never
//! written by the program.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::menu_bar::MenuBarTheme;

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    OpenContextMenu,
    OpenRowMenu,
    Confirm,
    Close,
    Quit,
}

impl Action {
    /// Ordered list of all actions.
    pub const ALL: &[Action] = &[
        Action::MoveUp,
        Action::MoveDown,
        Action::OpenContextMenu,
        Action::OpenRowMenu,
        Action::Confirm,
        Action::Close,
        Action::Quit,
    ];

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::MoveUp => "move_up",
            Action::MoveDown => "move_down",
            Action::OpenContextMenu => "context_menu",
            Action::OpenRowMenu => "row_menu",
            Action::Confirm => "confirm",
            Action::Close => "close",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Action::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding — key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event?  Only CTRL/ALT/SHIFT modifiers
    /// are compared (platform-specific modifiers like SUPER are ignored).
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mask = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// User-friendly display string (e.g. `"Shift+F10"`, `"↑"`, `"q"`).
    pub fn display(&self) -> String {
        let mut s = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("Alt+");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            s.push_str("Shift+");
        }
        s.push_str(&match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "↑".into(),
            KeyCode::Down => "↓".into(),
            KeyCode::Left => "←".into(),
            KeyCode::Right => "→".into(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Esc => "Esc".into(),
            KeyCode::Tab => "Tab".into(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        });
        s
    }

    /// Parse a key string like `"Ctrl+c"`, `"Shift+F10"`, `"q"`, `"Enter"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let key_part = parts.last()?;

        for &part in &parts[..parts.len() - 1] {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "space" => KeyCode::Char(' '),
            s if s.starts_with('f') && s.len() > 1 => {
                let n: u8 = s[1..].parse().ok()?;
                KeyCode::F(n)
            }
            _ if key_part.chars().count() == 1 => {
                let c = key_part.chars().next()?;
                // Terminals report shifted letters upper-cased.
                if modifiers.contains(KeyModifiers::SHIFT) {
                    KeyCode::Char(c.to_ascii_uppercase())
                } else {
                    KeyCode::Char(c)
                }
            }
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── config ────────────

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Overrides the theme hint given to the row menu bars.
    pub menu_bar_theme: Option<MenuBarTheme>,
    /// Size the grid to its rows instead of filling the screen.
    pub all_rows_visible: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            menu_bar_theme: None,
            all_rows_visible: true,
        }
    }
}

impl AppConfig {
    /// Built-in keybindings.
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();

        m.insert(MoveUp, vec![KeyBind::new(Up, n), KeyBind::new(Char('k'), n)]);
        m.insert(MoveDown, vec![KeyBind::new(Down, n), KeyBind::new(Char('j'), n)]);
        m.insert(
            OpenContextMenu,
            vec![
                KeyBind::new(Char('m'), n),
                KeyBind::new(F(10), KeyModifiers::SHIFT),
            ],
        );
        m.insert(OpenRowMenu, vec![KeyBind::new(Char('.'), n)]);
        m.insert(Confirm, vec![KeyBind::new(Enter, n), KeyBind::new(Char(' '), n)]);
        m.insert(Close, vec![KeyBind::new(Esc, n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n)]);

        m
    }

    /// Find the action that matches a key event.  When multiple bindings
    /// match, the one with the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        let mut best: Option<Action> = None;
        let mut best_mod_count = 0;

        for (&action, binds) in &self.bindings {
            for bind in binds {
                if bind.matches(event) {
                    let mc = bind.modifiers.bits().count_ones();
                    if best.is_none() || mc > best_mod_count {
                        best = Some(action);
                        best_mod_count = mc;
                    }
                }
            }
        }
        best
    }

    /// Short display of the first binding only (for the status bar).
    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Build the status-bar hint string from current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}/{}: move | {}: menu | {}: row actions | {}: quit",
            self.short_binding(Action::MoveUp),
            self.short_binding(Action::MoveDown),
            self.short_binding(Action::OpenContextMenu),
            self.short_binding(Action::OpenRowMenu),
            self.short_binding(Action::Quit),
        )
    }

    // ── loading ─────────────────────────────────────────────────

    /// Load config from `path` (or the default location), falling back to
    /// defaults when the file is missing or unreadable.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!("loaded config from {}", path.display());
                Self::parse(&contents)
            }
            Err(e) => {
                tracing::debug!("no config at {} ({e}); using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Parse config text.  Bad lines are logged and skipped.
    pub fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                tracing::warn!("config: ignoring line without `=`: {line}");
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            match key {
                "menu_bar_theme" => {
                    match value.parse() {
                        Ok(theme) => config.menu_bar_theme = Some(theme),
                        Err(e) => tracing::warn!("config: {e}"),
                    }
                    continue;
                }
                "all_rows_visible" => {
                    config.all_rows_visible = value == "true";
                    continue;
                }
                _ => {}
            }

            let Some(action) = Action::from_config_key(key) else {
                tracing::warn!("config: unknown key `{key}`");
                continue;
            };

            let parsed: Vec<KeyBind> = value
                .split(',')
                .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                .collect();
            if parsed.is_empty() {
                tracing::warn!("config: no usable keys for `{key}`");
            } else {
                config.bindings.insert(action, parsed);
            }
        }

        config
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/file-menu-grid/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join(env!("CARGO_PKG_NAME")).join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn defaults_match_expected_keys() {
        let c = AppConfig::default();
        assert_eq!(
            c.match_key(key(KeyCode::Char('j'), KeyModifiers::NONE)),
            Some(Action::MoveDown)
        );
        assert_eq!(
            c.match_key(key(KeyCode::F(10), KeyModifiers::SHIFT)),
            Some(Action::OpenContextMenu)
        );
        assert_eq!(c.match_key(key(KeyCode::F(10), KeyModifiers::NONE)), None);
        assert!(c.all_rows_visible);
    }

    #[test]
    fn parse_overrides_bindings_and_options() {
        let c = AppConfig::parse(
            "# comment\n\
             [keys]\n\
             quit = Ctrl+x, Esc\n\
             context_menu = \"Shift+m\"\n\
             menu_bar_theme = tertiary\n\
             all_rows_visible = false\n",
        );
        assert_eq!(
            c.match_key(key(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(c.match_key(key(KeyCode::Char('q'), KeyModifiers::NONE)), None);
        assert_eq!(
            c.match_key(key(KeyCode::Char('M'), KeyModifiers::SHIFT)),
            Some(Action::OpenContextMenu)
        );
        assert_eq!(c.menu_bar_theme, Some(MenuBarTheme::Tertiary));
        assert!(!c.all_rows_visible);
    }

    #[test]
    fn shifted_letters_match_the_upper_case_key_terminals_send() {
        let bind = KeyBind::parse("Shift+m").unwrap();
        assert_eq!(bind, KeyBind::new(KeyCode::Char('M'), KeyModifiers::SHIFT));
        assert!(bind.matches(key(KeyCode::Char('M'), KeyModifiers::SHIFT)));
        assert!(!bind.matches(key(KeyCode::Char('m'), KeyModifiers::NONE)));
        assert_eq!(bind.display(), "Shift+M");
        assert_eq!(
            KeyBind::parse("Ctrl+c"),
            Some(KeyBind::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
        );
    }

    #[test]
    fn bad_lines_keep_defaults() {
        let c = AppConfig::parse("nonsense\nmove_up = Hyper+k\nfrobnicate = q\nmenu_bar_theme = loud\n");
        assert_eq!(c.bindings, AppConfig::default_bindings());
        assert_eq!(c.menu_bar_theme, None);
    }

    #[test]
    fn hint_uses_first_binding() {
        let hint = AppConfig::default().status_bar_hint();
        assert!(hint.starts_with("↑/↓: move"));
        assert!(hint.contains("m: menu"));
        assert!(hint.contains(".: row actions"));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let c = AppConfig::load(Some(Path::new("/nonexistent/file-menu-grid.toml")));
        assert_eq!(c.bindings, AppConfig::default_bindings());
    }
}
