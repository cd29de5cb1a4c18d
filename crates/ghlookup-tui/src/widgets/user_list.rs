//! Selectable user list widget
//!
//! Renders any [`ListSource`]; the followers and following views share it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use ghlookup_app::ListSource;

use crate::theme::styles;

pub struct UserList<'a, S: ListSource> {
    source: &'a S,
    title: String,
    selected: usize,
    empty_hint: Option<String>,
    focused: bool,
}

impl<'a, S: ListSource> UserList<'a, S> {
    pub fn new(source: &'a S, title: impl Into<String>) -> Self {
        Self {
            source,
            title: title.into(),
            selected: 0,
            empty_hint: None,
            focused: true,
        }
    }

    pub fn selected(mut self, index: usize) -> Self {
        self.selected = index;
        self
    }

    /// Text shown when the source has no rows
    pub fn empty_hint(mut self, hint: impl Into<String>) -> Self {
        self.empty_hint = Some(hint.into());
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl<S: ListSource> Widget for UserList<'_, S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let count = self.source.row_count();
        let block = styles::glass_block(self.focused)
            .title(format!(" {} ({}) ", self.title, count));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if count == 0 {
            let hint = self.empty_hint.unwrap_or_else(|| "Nobody here".to_string());
            Paragraph::new(Line::from(Span::styled(hint, styles::text_muted())))
                .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = (0..count)
            .filter_map(|i| self.source.row_at(i))
            .map(|login| ListItem::new(Line::from(Span::styled(login, styles::text_primary()))))
            .collect();

        let list = List::new(items)
            .highlight_style(styles::focused_selected())
            .highlight_symbol("▶ ");

        let mut state = ListState::default().with_selected(Some(self.selected.min(count - 1)));
        StatefulWidget::render(list, inner, buf, &mut state);
    }
}
