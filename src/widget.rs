use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::cursor::CursorBuffer;
use crate::matcher::best_completion;

type ChangeHook = Box<dyn FnMut(&str)>;
type BlurHook = Box<dyn FnMut()>;
type KeyHook = Box<dyn FnMut(&KeyEvent)>;

/// Caller handler slots, composed with the widget's own behavior instead of
/// being replaced by it. The change hook fires after every edit and after a
/// committed hint; the key hook fires for every key the widget sees.
#[derive(Default)]
pub struct Hooks {
    on_change: Option<ChangeHook>,
    on_blur: Option<BlurHook>,
    on_key: Option<KeyHook>,
}

/// A text input with an inline completion hint.
///
/// Holds the wrapped edit buffer, the candidate list, and the current hint.
/// Two states: no hint held, or a hint held that extends the typed text.
/// Right-arrow with the cursor at the end of the text commits the hint;
/// anywhere else it stays an ordinary cursor movement.
pub struct HintedInput {
    buffer: CursorBuffer,
    options: Vec<String>,
    hint: Option<String>,
    disable_hint: bool,
    hooks: Hooks,
}

impl HintedInput {
    #[must_use]
    pub fn new(options: Vec<String>) -> Self {
        Self {
            buffer: CursorBuffer::empty(),
            options,
            hint: None,
            disable_hint: false,
            hooks: Hooks::default(),
        }
    }

    /// Use a pre-populated or numeric buffer instead of an empty text one.
    #[must_use]
    pub fn with_buffer(mut self, buffer: CursorBuffer) -> Self {
        self.buffer = buffer;
        self.refresh_hint();
        self
    }

    /// When set, the widget is just the wrapped input: no hint is ever
    /// computed and no overlay is drawn.
    #[must_use]
    pub fn disable_hint(mut self, disable: bool) -> Self {
        self.disable_hint = disable;
        if disable {
            self.hint = None;
        }
        self
    }

    #[must_use]
    pub fn on_change(mut self, hook: impl FnMut(&str) + 'static) -> Self {
        self.hooks.on_change = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_blur(mut self, hook: impl FnMut() + 'static) -> Self {
        self.hooks.on_blur = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_key(mut self, hook: impl FnMut(&KeyEvent) + 'static) -> Self {
        self.hooks.on_key = Some(Box::new(hook));
        self
    }

    pub fn buffer(&self) -> &CursorBuffer {
        &self.buffer
    }

    /// Direct access to the wrapped buffer. Call [`refresh_hint`] after
    /// mutating content through this, the widget only tracks its own edits.
    ///
    /// [`refresh_hint`]: Self::refresh_hint
    pub fn buffer_mut(&mut self) -> &mut CursorBuffer {
        &mut self.buffer
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn is_suggesting(&self) -> bool {
        self.hint.is_some()
    }

    pub fn hints_disabled(&self) -> bool {
        self.disable_hint
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn set_options(&mut self, options: Vec<String>) {
        self.options = options;
        self.refresh_hint();
    }

    /// Recompute the hint from the current text and candidate list. Pure
    /// function of both, so repeated calls with unchanged text agree.
    pub fn refresh_hint(&mut self) {
        self.hint = if self.disable_hint {
            None
        } else {
            best_completion(self.buffer.content(), &self.options)
        };
    }

    /// Feed one key event through the widget.
    ///
    /// Edits update the buffer, recompute the hint, and notify the change
    /// hook. A bare right-arrow commits the hint when the cursor is at the
    /// end of the text (inputs without a selection range always count as
    /// at-end); otherwise it falls through to cursor movement. The key hook
    /// is notified last in every case.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.disable_hint {
            if self.apply_edit(&key) {
                self.notify_change();
            }
            self.forward_key(&key);
            return;
        }

        if key.code == KeyCode::Right && key.modifiers.is_empty() && self.try_accept() {
            self.notify_change();
        } else if self.apply_edit(&key) {
            self.refresh_hint();
            self.notify_change();
        }
        self.forward_key(&key);
    }

    /// The input lost focus: drop the hint, then tell the caller.
    pub fn handle_blur(&mut self) {
        self.hint = None;
        if let Some(hook) = self.hooks.on_blur.as_mut() {
            hook();
        }
    }

    /// Returns true when the hint was committed into the buffer.
    fn try_accept(&mut self) -> bool {
        let Some(hint) = self.hint.take() else {
            return false;
        };

        let at_end = self
            .buffer
            .selection_end()
            .is_none_or(|end| end == self.buffer.char_count());

        if !at_end || self.buffer.content() == hint {
            // No commit, no state change: the key proceeds as plain movement.
            self.hint = Some(hint);
            return false;
        }

        self.buffer.set_content(&hint);
        true
    }

    /// Apply a key to the buffer. Returns whether the content changed;
    /// cursor-only movement does not count.
    fn apply_edit(&mut self, key: &KeyEvent) -> bool {
        let buffer = &mut self.buffer;

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('a') => buffer.move_to_start(),
                KeyCode::Char('e') => buffer.move_to_end(),
                KeyCode::Char('w') => return buffer.delete_word_before(),
                KeyCode::Char('u') => return buffer.delete_to_start(),
                KeyCode::Char('k') => return buffer.delete_to_end(),
                KeyCode::Left => buffer.move_word_left(),
                KeyCode::Right => buffer.move_word_right(),
                _ => {}
            }
            return false;
        }

        match key.code {
            KeyCode::Left => buffer.move_left(),
            KeyCode::Right => buffer.move_right(),
            KeyCode::Home => buffer.move_to_start(),
            KeyCode::End => buffer.move_to_end(),
            KeyCode::Backspace => return buffer.delete_char_before(),
            KeyCode::Delete => return buffer.delete_char_after(),
            KeyCode::Char(c) => return buffer.insert_char(c),
            _ => {}
        }
        false
    }

    fn notify_change(&mut self) {
        if let Some(hook) = self.hooks.on_change.as_mut() {
            hook(self.buffer.content());
        }
    }

    fn forward_key(&mut self, key: &KeyEvent) {
        if let Some(hook) = self.hooks.on_key.as_mut() {
            hook(key);
        }
    }
}
