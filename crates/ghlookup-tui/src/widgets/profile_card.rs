//! Profile card widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use ghlookup_app::ProfilePresenter;

use crate::theme::styles;

/// Card showing one profile's fields and its relation actions
pub struct ProfileCard<'a> {
    presenter: &'a ProfilePresenter,
    focused: bool,
}

impl<'a> ProfileCard<'a> {
    pub fn new(presenter: &'a ProfilePresenter) -> Self {
        Self {
            presenter,
            focused: true,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let p = self.presenter;
        let mut lines = vec![
            Line::from(Span::styled(p.name(), styles::title())),
            Line::from(Span::styled(format!("@{}", p.login()), styles::accent())),
            Line::default(),
            Line::from(Span::styled(p.bio(), styles::text_primary())),
            Line::default(),
            Line::from(vec![
                Span::styled("[f] ", styles::keybinding()),
                Span::styled(p.followers_label(), styles::text_primary()),
                Span::raw("   "),
                Span::styled("[g] ", styles::keybinding()),
                Span::styled(p.following_label(), styles::text_primary()),
            ]),
        ];

        if let Some(avatar) = p.avatar_line() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(avatar, styles::text_muted())));
        }
        lines
    }
}

impl Widget for ProfileCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(" Profile ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
