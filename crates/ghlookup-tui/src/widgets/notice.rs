//! Dismissible notice modal

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use ghlookup_app::Notice;

use super::modal_overlay::{centered_rect, dim_background, render_shadow};
use crate::theme::{palette, styles};

const MODAL_WIDTH: u16 = 56;
const MODAL_HEIGHT: u16 = 8;

/// Modal showing a failed lookup over a dimmed background
pub struct NoticeModal<'a> {
    notice: &'a Notice,
}

impl<'a> NoticeModal<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }
}

impl Widget for NoticeModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let modal = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        Clear.render(modal, buf);
        render_shadow(buf, modal);

        let accent = styles::notice_style(self.notice.kind);
        let block = styles::glass_block(true)
            .border_style(accent)
            .title(Span::styled(format!(" {} ", self.notice.title()), accent))
            .style(Style::default().bg(palette::POPUP_BG));
        let inner = block.inner(modal);
        block.render(modal, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                self.notice.message.as_str(),
                styles::text_primary(),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" / ", styles::text_muted()),
                Span::styled("Esc", styles::keybinding()),
                Span::styled(" to dismiss", styles::text_muted()),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ghlookup_app::NoticeKind;

    #[test]
    fn test_notice_shows_title_and_message() {
        let notice = Notice::new(NoticeKind::NotFound, "No user named 'zzz' exists.");
        let mut term = TestTerminal::new();
        term.render_widget(NoticeModal::new(&notice), term.area());

        assert!(term.buffer_contains("User Not Found"));
        assert!(term.buffer_contains("No user named 'zzz' exists."));
        assert!(term.buffer_contains("to dismiss"));
    }

    #[test]
    fn test_error_notice_titles() {
        let mut term = TestTerminal::new();
        let notice = Notice::new(NoticeKind::Network, "request timed out");
        term.render_widget(NoticeModal::new(&notice), term.area());
        assert!(term.buffer_contains("Network Error"));

        let notice = Notice::new(NoticeKind::UnexpectedResponse, "HTTP 500");
        term.render_widget(NoticeModal::new(&notice), term.area());
        assert!(term.buffer_contains("Unexpected Response"));
    }

    #[test]
    fn test_notice_in_compact_terminal() {
        let notice = Notice::new(NoticeKind::Network, "connection failed");
        let mut term = TestTerminal::compact();
        term.render_widget(NoticeModal::new(&notice), term.area());
        assert!(term.buffer_contains("Network Error"));
    }
}
