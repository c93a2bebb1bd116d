use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyModifiers},
    execute, queue, terminal,
};
use std::io;
use torlife::{LifeEngine, Pos};

pub enum ConsoleCommand {
    Exit,
    Handled,
}

/// Draws the part of the torus that fits in the terminal, with a report line at the bottom
pub struct ConsoleRender {
    origin: Pos,
    grid_rows: usize,
    grid_cols: usize,
    report: String,
}
impl ConsoleRender {
    pub fn new(grid_rows: usize, grid_cols: usize) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self {
            origin: Pos::default(),
            grid_rows,
            grid_cols,
            report: String::new(),
        })
    }

    pub fn render(&self, engine: &LifeEngine) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let footer = rows.saturating_sub(1);
        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
        for cell in engine.window(self.origin, footer as usize, cols as usize).iter() {
            queue!(stdout, cursor::MoveTo(cell.col as u16, cell.row as u16))?;
            io::Write::write_all(&mut stdout, "█".as_bytes())?;
        }

        queue!(stdout, cursor::MoveTo(0, footer))?;
        io::Write::write_all(&mut stdout, self.report.as_bytes())?;

        io::Write::flush(&mut stdout)
    }

    pub fn poll_events(&mut self) -> io::Result<Option<ConsoleCommand>> {
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        let command = match event::read()? {
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            })
            | event::Event::Key(KeyEvent {
                code: KeyCode::Char('q'),
                ..
            }) => ConsoleCommand::Exit,
            // arrows pan the view, wrapping around the torus
            event::Event::Key(KeyEvent { code, .. }) => {
                let offset = match code {
                    KeyCode::Up => (-1, 0),
                    KeyCode::Down => (1, 0),
                    KeyCode::Left => (0, -1),
                    KeyCode::Right => (0, 1),
                    _ => (0, 0),
                };
                self.origin = self
                    .origin
                    .wrapping_offset(offset, self.grid_rows, self.grid_cols);
                ConsoleCommand::Handled
            }
            _ => ConsoleCommand::Handled,
        };
        Ok(Some(command))
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }
}
impl Drop for ConsoleRender {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            log::error!("failed to leave raw mode: {}", e);
        }
        if let Err(e) = execute!(io::stdout(), cursor::Show) {
            log::error!("failed to show the cursor: {}", e);
        }
    }
}
