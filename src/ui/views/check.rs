use crate::catalog::CheckReport;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{SemanticColor, Span};

pub fn render_check_report(report: &CheckReport, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} categories, {} subcategories, {} sub-subcategories, {} products\n",
        report.categories, report.subcategories, report.sub_subcategories, report.products
    ));

    if report.is_clean() {
        let line = format!("{} No issues found", Icon::Success.render(supports_unicode));
        out.push_str(&Span::colored(line, SemanticColor::Success).render(supports_color));
        out.push('\n');
        return out;
    }

    for issue in &report.issues {
        let line = format!("{} {}", Icon::Warning.render(supports_unicode), issue);
        out.push_str(&Span::colored(line, SemanticColor::Warning).render(supports_color));
        out.push('\n');
    }
    out.push_str(&format!("{} issue(s) found\n", report.issues.len()));
    out
}
