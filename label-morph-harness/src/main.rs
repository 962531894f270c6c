use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::buffer::Buffer;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthChar;

use label_morph::engine::{Clock, MorphConfig, MorphLabel};
use label_morph::layout::{Rect as LabelRect, TextAlignment, TextMeasurer};
use label_morph::limbo::{CharLimbo, Renderer};

const FRAME: Duration = Duration::from_millis(16);

fn main() -> io::Result<()> {
    env_logger::init();

    enable_raw_mode()?;
    crossterm::execute!(io::stdout(), EnterAlternateScreen)?;

    let result = run();

    disable_raw_mode()?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen)?;

    result
}

/// Terminal cells: one column per character, one row per line.
struct CellMeasurer;

impl TextMeasurer for CellMeasurer {
    fn measure(&self, ch: char, _font_size: f32) -> (f32, f32) {
        (ch.width().unwrap_or(1) as f32, 1.0)
    }

    fn line_height(&self, _font_size: f32) -> f32 {
        1.0
    }
}

/// Shared running flag; the event loop ticks the label while it is set.
struct LoopClock(Rc<Cell<bool>>);

impl Clock for LoopClock {
    fn start(&mut self) {
        self.0.set(true);
    }

    fn pause(&mut self) {
        self.0.set(false);
    }
}

/// Paints limbo records into the frame buffer, folding opacity and size into
/// a single gray level since terminal cells cannot scale.
struct CellRenderer<'a> {
    buf: &'a mut Buffer,
    area: Rect,
}

impl Renderer for CellRenderer<'_> {
    fn draw(&mut self, limbo: &CharLimbo) {
        let visibility = (limbo.alpha * limbo.size).clamp(0.0, 1.0);

        if visibility < 0.05 {
            return;
        }

        let x = limbo.rect.x.round();
        let y = limbo.rect.y.round();

        if x < 0.0 || y < 0.0 {
            return;
        }

        let x = self.area.x + x as u16;
        let y = self.area.y + y as u16;

        if x >= self.area.right() || y >= self.area.bottom() {
            return;
        }

        let level = (visibility * 255.0) as u8;
        let cell = &mut self.buf[(x, y)];
        cell.set_char(limbo.ch);
        cell.set_fg(Color::Rgb(level, level, level));
    }
}

fn run() -> io::Result<()> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let phrases = [
        "Hello, world!",
        "What a terminal",
        "Characters in limbo",
        "Morph all the things",
    ];
    let mut current = 0;

    let running = Rc::new(Cell::new(false));
    let size = terminal.size()?;
    let config = MorphConfig {
        alignment: TextAlignment::Center,
        font_size: 1.0,
        ..MorphConfig::default()
    };
    let mut label = MorphLabel::new(
        CellMeasurer,
        Box::new(LoopClock(running.clone())),
        config,
        LabelRect::new(0.0, 0.0, size.width as f32, size.height as f32),
    );
    label.observe(|event| log::trace!("label event: {event:?}"));
    label.set_text(phrases[current]);

    loop {
        if running.get() {
            label.on_tick(FRAME.as_secs_f32(), 1.0);
        }

        terminal.draw(|f| draw(f, &label))?;

        if !event::poll(FRAME)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,

                    KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter => {
                        current = (current + 1) % phrases.len();
                        label.set_text(phrases[current]);
                    }

                    KeyCode::Left => {
                        current = (current + phrases.len() - 1) % phrases.len();
                        label.set_text(phrases[current]);
                    }

                    _ => continue,
                }
            }

            Event::Resize(width, height) => {
                label.set_bounds(LabelRect::new(0.0, 0.0, width as f32, height as f32));
            }

            _ => continue,
        }
    }

    Ok(())
}

fn draw(f: &mut Frame, label: &MorphLabel<CellMeasurer>) {
    let area = f.area();

    f.render_widget(
        Paragraph::new("label-morph  [←/→ cycle phrases]  [q quit]")
            .style(Style::new().fg(Color::DarkGray)),
        Rect::new(area.x, area.y, area.width, 1),
    );

    let mut renderer = CellRenderer {
        buf: f.buffer_mut(),
        area,
    };
    label.draw_frame(&mut renderer);
}
