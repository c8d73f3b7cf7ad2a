use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::widget::HintedInput;

use super::style::{Edges, InputStyle};
use super::surface::Surface;

/// Draw the input and its ghost overlay into `area`.
///
/// Paint order reproduces the layered original: the full hint (typed prefix
/// plus completion) goes down first in the ghost color, then the real text
/// is drawn over its own cells, leaving only the completion visible as
/// ghost text. The overlay style is mirrored from `style` on every call,
/// never cached, so restyling the input between frames cannot desync them.
pub fn render_hinted_input(
    f: &mut Frame,
    area: Rect,
    input: &HintedInput,
    style: &InputStyle,
    surface: &Surface,
) {
    let mut block = Block::default()
        .borders(style.border_flags())
        .border_style(Style::default().fg(style.border_fg));
    if style.bg != Color::Reset {
        block = block.style(Style::default().bg(style.bg));
    }

    let inner = shrink(block.inner(area), style.padding);
    f.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let ghost = style.mirrored(surface.ghost_text);

    if let Some(hint) = input.hint() {
        let span = Span::styled(hint.to_string(), ghost.text_style());
        f.render_widget(Paragraph::new(Line::from(span)), inner);
    }

    let text = input.buffer().content();
    if !text.is_empty() {
        let span = Span::styled(text.to_string(), style.text_style());
        f.render_widget(Paragraph::new(Line::from(span)), inner);
    }

    let max_col = inner.width.saturating_sub(1);
    let cursor_col = (input.buffer().cursor_display_pos() as u16).min(max_col);
    f.set_cursor_position((inner.x + cursor_col, inner.y));
}

fn shrink(area: Rect, edges: Edges) -> Rect {
    Rect {
        x: area.x.saturating_add(edges.left),
        y: area.y.saturating_add(edges.top),
        width: area.width.saturating_sub(edges.horizontal()),
        height: area.height.saturating_sub(edges.vertical()),
    }
}
