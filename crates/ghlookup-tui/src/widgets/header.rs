//! Header bar with the app title and the navigation breadcrumb

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{palette, styles};

const TITLE: &str = "ghlookup";
const SEPARATOR: &str = " › ";
const ELLIPSIS: &str = "…";

/// Header showing the title and the path of views, root first
pub struct MainHeader<'a> {
    crumbs: &'a [String],
}

impl<'a> MainHeader<'a> {
    pub fn new(crumbs: &'a [String]) -> Self {
        Self { crumbs }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![Span::styled(format!(" {TITLE}"), styles::accent_bold())];

        // Room left after the title and the first separator
        let budget = (inner.width as usize)
            .saturating_sub(TITLE.width() + 1 + SEPARATOR.width());
        let trail = fit_breadcrumb(self.crumbs, budget);
        if !trail.is_empty() {
            spans.push(Span::styled(SEPARATOR, styles::text_muted()));
            spans.push(Span::styled(trail, styles::text_secondary()));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

/// Join crumbs with separators, dropping the oldest ones behind an ellipsis
/// until the trail fits in `max_width` columns.
fn fit_breadcrumb(crumbs: &[String], max_width: usize) -> String {
    if crumbs.is_empty() || max_width == 0 {
        return String::new();
    }

    for skip in 0..crumbs.len() {
        let mut trail = crumbs[skip..].join(SEPARATOR);
        if skip > 0 {
            trail = format!("{ELLIPSIS}{SEPARATOR}{trail}");
        }
        if trail.width() <= max_width {
            return trail;
        }
    }

    // Even the last crumb alone is too wide: cut it
    let last = &crumbs[crumbs.len() - 1];
    let mut cut = String::new();
    for c in last.chars() {
        if cut.width() + c.to_string().width() + ELLIPSIS.width() > max_width {
            break;
        }
        cut.push(c);
    }
    format!("{cut}{ELLIPSIS}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn crumbs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_header_renders_title() {
        let mut term = TestTerminal::new();
        term.render_widget(MainHeader::new(&[]), term.area());
        assert!(term.buffer_contains("ghlookup"));
    }

    #[test]
    fn test_header_renders_breadcrumb() {
        let mut term = TestTerminal::new();
        let trail = crumbs(&["octocat", "followers", "a"]);
        term.render_widget(MainHeader::new(&trail), term.area());
        assert!(term.buffer_contains("octocat › followers › a"));
    }

    #[test]
    fn test_fit_breadcrumb_drops_oldest() {
        let trail = crumbs(&["octocat", "followers", "someone"]);
        assert_eq!(fit_breadcrumb(&trail, 100), "octocat › followers › someone");
        assert_eq!(fit_breadcrumb(&trail, 23), "… › followers › someone");
        assert_eq!(fit_breadcrumb(&trail, 22), "… › someone");
        assert_eq!(fit_breadcrumb(&trail, 11), "… › someone");
    }

    #[test]
    fn test_fit_breadcrumb_cuts_single_long_crumb() {
        let trail = crumbs(&["averyveryverylonglogin"]);
        let fitted = fit_breadcrumb(&trail, 8);
        assert_eq!(fitted, "averyve…");
        assert!(fitted.width() <= 8);
    }

    #[test]
    fn test_fit_breadcrumb_empty() {
        assert_eq!(fit_breadcrumb(&[], 40), "");
    }
}
