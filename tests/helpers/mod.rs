#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use ghostline::cursor::CursorBuffer;
use ghostline::widget::HintedInput;

/// Records every hook invocation so tests can assert on composition:
/// the widget must always forward to the caller's handlers, never
/// swallow them.
#[derive(Default)]
pub struct HookLog {
    pub changes: Vec<String>,
    pub blurs: usize,
    pub keys: Vec<KeyCode>,
}

pub struct TestContext {
    pub input: HintedInput,
    pub log: Rc<RefCell<HookLog>>,
}

impl TestContext {
    pub fn new(options: &[&str]) -> Self {
        Self::build(options, false, CursorBuffer::empty())
    }

    pub fn disabled(options: &[&str]) -> Self {
        Self::build(options, true, CursorBuffer::empty())
    }

    pub fn numeric(options: &[&str]) -> Self {
        Self::build(options, false, CursorBuffer::numeric())
    }

    fn build(options: &[&str], disable: bool, buffer: CursorBuffer) -> Self {
        let log = Rc::new(RefCell::new(HookLog::default()));
        let change_log = Rc::clone(&log);
        let blur_log = Rc::clone(&log);
        let key_log = Rc::clone(&log);

        let input = HintedInput::new(options.iter().map(ToString::to_string).collect())
            .with_buffer(buffer)
            .disable_hint(disable)
            .on_change(move |value| change_log.borrow_mut().changes.push(value.to_string()))
            .on_blur(move || blur_log.borrow_mut().blurs += 1)
            .on_key(move |key| key_log.borrow_mut().keys.push(key.code));

        Self { input, log }
    }

    pub fn press(&mut self, code: KeyCode) {
        self.input.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    pub fn press_ctrl(&mut self, code: KeyCode) {
        self.input
            .handle_key(KeyEvent::new(code, KeyModifiers::CONTROL));
    }

    pub fn type_str(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    pub fn blur(&mut self) {
        self.input.handle_blur();
    }

    pub fn content(&self) -> String {
        self.input.buffer().content().to_string()
    }

    pub fn hint(&self) -> Option<String> {
        self.input.hint().map(str::to_string)
    }

    pub fn changes(&self) -> Vec<String> {
        self.log.borrow().changes.clone()
    }

    pub fn last_change(&self) -> Option<String> {
        self.log.borrow().changes.last().cloned()
    }

    pub fn blurs(&self) -> usize {
        self.log.borrow().blurs
    }

    pub fn keys(&self) -> Vec<KeyCode> {
        self.log.borrow().keys.clone()
    }
}
