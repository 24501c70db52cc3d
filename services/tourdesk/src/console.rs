//! Line-driven console front-end for the tour window.
//!
//! Renders the form, the buttons, the search box and the tour table as
//! text after every command, and implements the [`Notifier`] capability
//! with console messages and `y/N` prompts read from the same input.

use std::io::{self, BufRead, Write};
use tourdesk_core::{DisplayConfig, TourStore};
use tourdesk_desk::{report, Controller, FormField, Mode, Notifier, COLUMNS};
use tracing::{debug, warn};

const HELP: &str = "\
Commands:
  set <field> <value>   fill an input (fields: destination, country, days,
                        price, date, operator, hotel); an empty value clears it
  add                   add the tour in the form
  update                save the form over the selected tour
  delete                delete the selected tour (asks first)
  clear                 empty the form and drop the selection
  select <row>          load a table row (1-based) into the form
  search [term]         filter the table; no term shows every tour
  show                  redraw the window
  help                  this text
  quit                  leave";

/// One parsed input line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set(FormField, String),
    Add,
    Update,
    Delete,
    Clear,
    /// Zero-based row index
    Select(usize),
    Search(String),
    Show,
    Help,
    Quit,
    Empty,
}

fn parse_field(name: &str) -> Option<FormField> {
    FormField::from_key(name).or_else(|| match name.to_ascii_lowercase().as_str() {
        "days" | "duration" => Some(FormField::DurationDays),
        "date" | "start" => Some(FormField::StartDate),
        "operator" => Some(FormField::TourOperator),
        "hotel" => Some(FormField::HotelName),
        _ => None,
    })
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Ok(Command::Empty),
            "set" => {
                let (name, value) = match rest.split_once(char::is_whitespace) {
                    Some((name, value)) => (name, value.trim()),
                    None => (rest, ""),
                };
                let field = parse_field(name)
                    .ok_or_else(|| format!("Unknown field {:?}. Type 'help' for field names.", name))?;
                Ok(Command::Set(field, value.to_string()))
            }
            "add" => Ok(Command::Add),
            "update" => Ok(Command::Update),
            "delete" => Ok(Command::Delete),
            "clear" => Ok(Command::Clear),
            "select" => match rest.parse::<usize>() {
                Ok(row) if row > 0 => Ok(Command::Select(row - 1)),
                _ => Err(format!("'select' needs a row number, got {:?}", rest)),
            },
            "search" => Ok(Command::Search(rest.to_string())),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("Unknown command {:?}. Type 'help' for a list.", other)),
        }
    }
}

/// Console window over any line input and text output
pub struct ConsoleUi<R, W> {
    input: R,
    output: W,
    display: DisplayConfig,
}

impl<R: BufRead, W: Write> ConsoleUi<R, W> {
    pub fn new(input: R, output: W, display: DisplayConfig) -> Self {
        Self {
            input,
            output,
            display,
        }
    }

    /// Handle commands until `quit` or end of input
    pub fn run<S: TourStore>(&mut self, controller: &mut Controller<S>) -> io::Result<()> {
        self.render(controller)?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };

            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(hint) => {
                    writeln!(self.output, "{}", hint)?;
                    continue;
                }
            };
            debug!(?command, "Console command");

            match command {
                Command::Quit => break,
                Command::Empty => continue,
                Command::Help => {
                    writeln!(self.output, "{}", HELP)?;
                    continue;
                }
                command => self.execute(controller, command),
            }

            self.render(controller)?;
        }

        writeln!(self.output)?;
        Ok(())
    }

    fn execute<S: TourStore>(&mut self, controller: &mut Controller<S>, command: Command) {
        let result = match command {
            Command::Set(field, value) => {
                controller.set_field(field, value);
                return;
            }
            Command::Add => controller.add(),
            Command::Update => controller.update(),
            Command::Delete => controller.delete(&mut *self),
            Command::Clear => Ok(controller.clear()),
            Command::Select(index) => controller.select_row(index),
            Command::Search(term) => controller.set_search(&term),
            Command::Show => controller.refresh(),
            Command::Help | Command::Quit | Command::Empty => return,
        };
        report(&result, &mut *self);
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn emit(&mut self, text: &str) {
        if let Err(err) = writeln!(self.output, "{}", text) {
            warn!(error = %err, "Console write failed");
        }
    }

    /// Draw the whole window
    pub fn render<S: TourStore>(&mut self, controller: &Controller<S>) -> io::Result<()> {
        let out = &mut self.output;

        writeln!(out)?;
        writeln!(out, "==== {} ====", self.display.window_title)?;

        let label_width = FormField::ALL
            .iter()
            .map(|field| field.label().len())
            .max()
            .unwrap_or(0);
        for field in FormField::ALL {
            writeln!(
                out,
                "  {:<width$} : [{}]",
                field.label(),
                controller.form().get(field),
                width = label_width
            )?;
        }

        let buttons = controller.buttons();
        let button = |name: &str, enabled: bool| {
            if enabled {
                format!("[{}]", name)
            } else {
                format!("({} - disabled)", name)
            }
        };
        writeln!(
            out,
            "  {} {} {} {}",
            button("Add", buttons.add),
            button("Update", buttons.update),
            button("Delete", buttons.delete),
            button("Clear", buttons.clear)
        )?;
        writeln!(out, "  Search: [{}]", controller.search_term())?;

        let rows = controller.rows();
        let mut widths: Vec<usize> = COLUMNS.iter().map(|header| header.chars().count()).collect();
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row.cells.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        writeln!(out)?;
        writeln!(out, "  #   {}", table_line(COLUMNS.iter().copied(), &widths))?;
        for (index, row) in rows.iter().enumerate() {
            let marker = if controller.mode() == Mode::Editing(row.id) {
                '*'
            } else {
                ' '
            };
            writeln!(
                out,
                "{}{:>3}  {}",
                marker,
                index + 1,
                table_line(row.cells.iter().map(String::as_str), &widths)
            )?;
        }

        let status = match controller.mode() {
            Mode::Insert => "new tour".to_string(),
            Mode::Editing(id) => format!("editing tour {}", id),
        };
        writeln!(out, "  {} tour(s) shown, {}", rows.len(), status)?;
        Ok(())
    }
}

fn table_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ")
}

impl<R: BufRead, W: Write> Notifier for ConsoleUi<R, W> {
    fn info(&mut self, title: &str, message: &str) {
        self.emit(&format!("[{}] {}", title, message));
    }

    fn warning(&mut self, title: &str, message: &str) {
        self.emit(&format!("[! {}] {}", title, message));
    }

    fn failure(&mut self, title: &str, message: &str) {
        self.emit(&format!("[x {}] {}", title, message));
    }

    fn confirm(&mut self, title: &str, question: &str) -> bool {
        let asked = write!(self.output, "[? {}] {} [y/N] ", title, question)
            .and_then(|_| self.output.flush());
        if let Err(err) = asked {
            warn!(error = %err, "Console write failed");
            return false;
        }

        match self.read_line() {
            Ok(Some(answer)) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Ok(None) => false,
            Err(err) => {
                warn!(error = %err, "Console read failed");
                false
            }
        }
    }
}
