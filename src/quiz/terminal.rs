// The interactive game, in the terminal.

use std::io::{stdout, Write};

use crossterm::{
    cursor,
    event::{read, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{style, Print, PrintStyledContent, Stylize},
    terminal::{
        disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::quiz::*;

const INPUT_LABEL: &str = "Constituency Name (निर्वाचन क्षेत्र का नाम): ";
const TABLE_HEADER: [&str; 3] = ["State/UT", "# Correct / # Total", "Constituencies Guessed"];
const REGION_WIDTH: usize = 40;
const COUNT_WIDTH: usize = 20;

enum InputEvent {
    Char(char),
    Backspace,
    ClearLine,
    Quit,
}

fn get_event() -> std::io::Result<InputEvent> {
    loop {
        let event = read()?;

        if let Event::Key(key_event) = event {
            if key_event.kind == KeyEventKind::Release {
                continue;
            }
            let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
            match key_event.code {
                KeyCode::Esc => return Ok(InputEvent::Quit),
                KeyCode::Char('c') | KeyCode::Char('d') if ctrl => return Ok(InputEvent::Quit),
                KeyCode::Char('u') if ctrl => return Ok(InputEvent::ClearLine),
                KeyCode::Backspace => return Ok(InputEvent::Backspace),
                KeyCode::Char(c) if !ctrl => return Ok(InputEvent::Char(c)),
                _ => (),
            }
        }
    }
}

fn pad(s: &str, width: usize) -> String {
    let len = s.width();
    if len >= width {
        format!("{} ", s)
    } else {
        format!("{}{}", s, " ".repeat(width - len))
    }
}

fn table_line(region: &str, count: &str, names: &str) -> String {
    format!(
        "{}{}{}",
        pad(region, REGION_WIDTH),
        pad(count, COUNT_WIDTH),
        names
    )
}

// The longest prefix of the line that fits in the given number of columns.
fn clip(line: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, c) in line.char_indices() {
        used += c.width().unwrap_or(0);
        if used > width {
            return &line[..idx];
        }
    }
    line
}

// The screen column right after the typed text.
fn input_column(input: &str) -> u16 {
    let col = INPUT_LABEL.width() + input.width();
    u16::try_from(col).unwrap_or(u16::MAX)
}

/// The lines of the progress table, header included.
fn table_lines(session: &QuizSession) -> Vec<String> {
    let mut lines = vec![table_line(TABLE_HEADER[0], TABLE_HEADER[1], TABLE_HEADER[2])];
    for row in session.table() {
        let region = match &row.vernacular {
            Some(label) => format!("{} ({})", row.region, label),
            None => row.region.clone(),
        };
        let count = format!("{} / {}", row.guessed_count(), row.total);
        lines.push(table_line(&region, &count, &row.guessed_names()));
    }
    lines
}

fn draw(
    session: &QuizSession,
    settings: &QuizSettings,
    message: Option<&str>,
) -> std::io::Result<()> {
    let mut out = stdout();
    let (cols, rows) = size()?;
    let width = cols as usize;

    queue!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    queue!(out, PrintStyledContent(style(&settings.title).bold()))?;
    queue!(
        out,
        cursor::MoveTo(0, 4),
        PrintStyledContent(
            style(format!("{} / {}", session.correct_count(), settings.total_seats)).bold()
        )
    )?;
    if let Some(message) = message {
        queue!(out, cursor::MoveTo(0, 5), Print(message))?;
    }

    for (idx, line) in table_lines(session).iter().enumerate() {
        let row = 7 + idx as u16;
        if row >= rows {
            break;
        }
        queue!(out, cursor::MoveTo(0, row), Print(clip(line, width)))?;
    }

    // The cursor stays in the input field.
    queue!(
        out,
        cursor::MoveTo(0, 2),
        Print(INPUT_LABEL),
        Print(session.input()),
        cursor::MoveTo(input_column(session.input()), 2)
    )?;
    out.flush()
}

fn run_loop(session: &mut QuizSession, settings: &QuizSettings) -> std::io::Result<()> {
    let mut message: Option<String> = None;
    loop {
        draw(session, settings, message.as_deref())?;
        let outcome = match get_event()? {
            InputEvent::Quit => return Ok(()),
            InputEvent::Char(c) => session.type_char(c),
            InputEvent::Backspace => session.backspace(),
            InputEvent::ClearLine => session.set_input(""),
        };
        if outcome.is_match() {
            let names: Vec<String> = outcome
                .new_guesses
                .iter()
                .map(|g| format!("{} ({})", g.name, g.region))
                .collect();
            message = Some(format!("Correct: {}", names.join(", ")));
        }
    }
}

/// Plays the game in the terminal until the player presses Esc.
pub fn play(session: &mut QuizSession, settings: &QuizSettings) -> QuizResult<()> {
    if session.dataset().is_empty() {
        warn!("No constituency loaded, nothing can be guessed");
    }
    enable_raw_mode().context(TerminalSnafu {})?;
    execute!(stdout(), EnterAlternateScreen, cursor::Show).context(TerminalSnafu {})?;

    let res = run_loop(session, settings);

    // The terminal is restored even if the game failed.
    let restored = execute!(stdout(), LeaveAlternateScreen).and_then(|_| disable_raw_mode());
    res.context(TerminalSnafu {})?;
    restored.context(TerminalSnafu {})
}
