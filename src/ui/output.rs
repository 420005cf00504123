use std::path::Path;

use crate::config::ConfigWarning;
use crate::ui::primitives::icon::Icon;

/// Format one unknown-key warning, with a suggestion when one is close.
pub fn format_config_warning(path: &Path, warning: &ConfigWarning, unicode: bool) -> String {
    let icon = Icon::Warning.render(unicode);
    let location = match warning.line {
        Some(line) => format!("{}:{}", path.display(), line),
        None => path.display().to_string(),
    };

    let mut out = format!("{} Unknown config key '{}' in {}", icon, warning.key, location);
    if let Some(suggestion) = &warning.suggestion {
        out.push_str(&format!("\n   Did you mean '{}'?", suggestion));
    }
    out
}

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning], unicode: bool) {
    for w in warnings {
        log::warn!("unknown config key '{}' in {}", w.key, path.display());
        eprintln!("{}\n", format_config_warning(path, w, unicode));
    }
}
