//! What stdout can display.
//!
//! Only the facts [`UiContext`](crate::ui::context::UiContext) and
//! `browse` act on are detected; the browser queries the screen size
//! itself on every redraw.

use is_terminal::IsTerminal;

/// Environment variables set by common CI providers
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "JENKINS_HOME",
    "BUILDKITE",
    "CIRCLECI",
];

/// Locale variables in lookup priority order
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// stdout is attached to a terminal (required by `browse`)
    pub is_tty: bool,
    pub supports_color: bool,
    /// Box-drawing glyphs and icons render correctly
    pub supports_unicode: bool,
    pub is_ci: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    TerminalCapabilities::from_env(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
}

impl TerminalCapabilities {
    fn from_env(get_env: impl Fn(&str) -> Option<String>, is_tty: bool) -> Self {
        let dumb = get_env("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));

        Self {
            is_tty,
            supports_color: is_tty && !dumb && get_env("NO_COLOR").is_none(),
            supports_unicode: !dumb && utf8_locale(&get_env),
            is_ci: CI_VARS.iter().any(|var| get_env(*var).is_some()),
        }
    }
}

/// The first locale variable that is set decides. No locale at all
/// is treated as UTF-8.
fn utf8_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    let Some(locale) = LOCALE_VARS
        .iter()
        .filter_map(|var| get_env(*var))
        .find(|value| !value.is_empty())
    else {
        return true;
    };

    let locale = locale.to_ascii_lowercase();
    locale.contains("utf-8") || locale.contains("utf8")
}
