use ratatui::style::{Color, Style};
use ratatui::widgets::Borders;

use super::theme;

/// Positional sub-values of a spacing shorthand, in CSS order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Edges {
    #[must_use]
    pub fn uniform(value: u16) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Expand a shorthand like "1", "1 2", "1 2 3", or "1 2 3 4" into
    /// per-side values, the way CSS expands margin/padding shorthand:
    /// one value for all sides, then vertical/horizontal, then
    /// top/horizontal/bottom, then clockwise from the top.
    #[must_use]
    pub fn from_shorthand(shorthand: &str) -> Option<Self> {
        let parts: Vec<u16> = shorthand
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()
            .ok()?;

        match parts.as_slice() {
            [all] => Some(Self::uniform(*all)),
            [vertical, horizontal] => Some(Self {
                top: *vertical,
                right: *horizontal,
                bottom: *vertical,
                left: *horizontal,
            }),
            [top, horizontal, bottom] => Some(Self {
                top: *top,
                right: *horizontal,
                bottom: *bottom,
                left: *horizontal,
            }),
            [top, right, bottom, left] => Some(Self {
                top: *top,
                right: *right,
                bottom: *bottom,
                left: *left,
            }),
            _ => None,
        }
    }

    pub fn horizontal(&self) -> u16 {
        self.left + self.right
    }

    pub fn vertical(&self) -> u16 {
        self.top + self.bottom
    }
}

/// The visible style of the real input, snapshotted each frame.
///
/// The ghost overlay derives its own style from this on every render and
/// nothing is cached between frames, so a host that restyles its input
/// (theme switch, responsive layout) never leaves the overlay misaligned.
#[derive(Clone, Debug)]
pub struct InputStyle {
    pub fg: Color,
    pub bg: Color,
    pub border_fg: Color,
    pub padding: Edges,
    /// Border widths per side; a terminal border is 0 or 1 cells wide.
    pub border: Edges,
}

impl Default for InputStyle {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
            border_fg: theme::BORDER_DEFAULT,
            padding: Edges::default(),
            border: Edges::uniform(1),
        }
    }
}

impl InputStyle {
    /// Style for the text itself. `Color::Reset` backgrounds are treated as
    /// transparent and left unset so underlying cells show through.
    #[must_use]
    pub fn text_style(&self) -> Style {
        let style = Style::default().fg(self.fg);
        if self.bg == Color::Reset {
            style
        } else {
            style.bg(self.bg)
        }
    }

    #[must_use]
    pub fn border_flags(&self) -> Borders {
        let mut flags = Borders::NONE;
        if self.border.top > 0 {
            flags |= Borders::TOP;
        }
        if self.border.right > 0 {
            flags |= Borders::RIGHT;
        }
        if self.border.bottom > 0 {
            flags |= Borders::BOTTOM;
        }
        if self.border.left > 0 {
            flags |= Borders::LEFT;
        }
        flags
    }

    /// The overlay's mirrored style: identical metrics, transparent
    /// surfaces, ghost foreground.
    #[must_use]
    pub fn mirrored(&self, ghost_fg: Color) -> Self {
        Self {
            fg: ghost_fg,
            bg: Color::Reset,
            border_fg: Color::Reset,
            padding: self.padding,
            border: self.border,
        }
    }
}
