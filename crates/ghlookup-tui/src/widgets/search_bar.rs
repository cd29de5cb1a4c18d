//! Username input bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Username prompt; shows a cursor while focused
pub struct SearchBar<'a> {
    query: &'a str,
    focused: bool,
}

impl<'a> SearchBar<'a> {
    pub fn new(query: &'a str) -> Self {
        Self {
            query,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(" Username ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![Span::styled(
            "@ ",
            styles::accent().add_modifier(Modifier::BOLD),
        )];

        if self.focused {
            spans.push(Span::styled(self.query, styles::text_primary()));
            spans.push(Span::styled("_", styles::keybinding()));
        } else {
            spans.push(Span::styled(
                "press / to look up another user",
                styles::text_muted(),
            ));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_focused_bar_shows_query_and_cursor() {
        let mut term = TestTerminal::with_size(40, 3);
        term.render_widget(SearchBar::new("octo").focused(true), term.area());
        assert!(term.buffer_contains("@ octo_"));
        assert!(term.buffer_contains("Username"));
    }

    #[test]
    fn test_unfocused_bar_shows_hint() {
        let mut term = TestTerminal::with_size(60, 3);
        term.render_widget(SearchBar::new("ignored"), term.area());
        assert!(term.buffer_contains("press / to look up"));
        assert!(!term.buffer_contains("ignored"));
    }
}
