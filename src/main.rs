use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use crossterm::{
    event::{
        self, DisableFocusChange, EnableFocusChange, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use ghostline::config::{self, Config};
use ghostline::ui::{self, InputStyle, Surface, theme};
use ghostline::widget::HintedInput;

fn main() -> Result<(), io::Error> {
    let args: Vec<String> = std::env::args().collect();

    if args.get(1).map(String::as_str) == Some("init") {
        return match Config::init() {
            Ok(true) => {
                println!(
                    "Created config file at: {}",
                    config::get_config_path().display()
                );
                Ok(())
            }
            Ok(false) => {
                println!(
                    "Config file already exists at: {}",
                    config::get_config_path().display()
                );
                Ok(())
            }
            Err(e) => {
                eprintln!("Failed to create config file: {e}");
                Err(e)
            }
        };
    }

    let config = Config::load().unwrap_or_default();

    // A words file on the command line overrides the configured candidates
    let options = if let Some(path) = args.get(1) {
        config::load_words_file(&PathBuf::from(path))?
    } else if config.options.is_empty() {
        config::default_options()
    } else {
        config.options.clone()
    };

    let mut surface = Surface::from_terminal();
    if let Some(color) = config.ghost_color() {
        surface.ghost_text = color;
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, config, options, surface);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableFocusChange)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: Config,
    options: Vec<String>,
    surface: Surface,
) -> io::Result<()> {
    let changes: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let change_sink = Rc::clone(&changes);

    let mut input = HintedInput::new(options)
        .disable_hint(config.disable_hint)
        .on_change(move |value| {
            let mut log = change_sink.borrow_mut();
            log.push(value.to_string());
            if log.len() > 5 {
                log.remove(0);
            }
        });

    let style = InputStyle {
        padding: config.padding_edges(),
        border: config.border_edges(),
        ..InputStyle::default()
    };
    let input_height = 1 + style.border.vertical() + style.padding.vertical();

    loop {
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(input_height),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(f.area());

            ui::render_hinted_input(f, chunks[0], &input, &style, &surface);

            let log_style = Style::default().fg(surface.muted_text);
            let log_lines: Vec<Line> = changes
                .borrow()
                .iter()
                .rev()
                .map(|value| Line::from(Span::styled(format!("change: {value}"), log_style)))
                .collect();
            f.render_widget(Paragraph::new(log_lines), chunks[1]);

            let status = Line::from(vec![
                Span::styled("→", Style::default().fg(theme::ACCENT)),
                Span::styled(" accept hint   ", Style::default().fg(theme::STATUS_TEXT)),
                Span::styled("Esc", Style::default().fg(theme::ACCENT)),
                Span::styled(" quit", Style::default().fg(theme::STATUS_TEXT)),
            ]);
            f.render_widget(Paragraph::new(status), chunks[2]);
        })?;

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Esc => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                    _ => input.handle_key(key),
                }
            }
            Event::FocusLost => input.handle_blur(),
            _ => {}
        }
    }

    Ok(())
}
