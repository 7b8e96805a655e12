// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Interactive menus: figure choice, filter choice and resize dimensions.
//
// `0` is the exit choice on both menus and end of input is treated the same
// way. Anything else outside the offered range is handled by `InputPolicy`.

use std::io::{BufRead, Write};

use figview_core::error::Result;
use figview_core::{Dimensions, Figure, Filter, InputPolicy, Selection};
use tracing::debug;

/// Reserved choice that ends the session.
pub const EXIT_CHOICE: u8 = 0;

/// A single line read from a numbered menu.
enum MenuInput<T> {
    Valid(T),
    Exit,
    Invalid(String),
}

/// Reads menu answers from `input` and writes prompts to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    policy: InputPolicy,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, policy: InputPolicy) -> Self {
        Self {
            input,
            output,
            policy,
        }
    }

    /// Print a line to the user.
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    // -- Menus ----------------------------------------------------------------

    /// Ask which figure to load.
    ///
    /// Lenient mode falls back to [`Figure::DEFAULT`] on invalid input.
    pub fn select_figure(&mut self) -> Result<Selection<Figure>> {
        writeln!(self.output, "\nSelect a figure to process:")?;
        for figure in Figure::ALL {
            writeln!(self.output, "{}. {}", figure.choice(), figure)?;
        }
        writeln!(self.output, "{EXIT_CHOICE}. Exit")?;

        loop {
            match self.read_choice("Enter your choice (0-3): ", Figure::from_choice)? {
                MenuInput::Valid(figure) => return Ok(Selection::Chosen(figure)),
                MenuInput::Exit => return Ok(Selection::Exit),
                MenuInput::Invalid(raw) => {
                    debug!(input = %raw, policy = ?self.policy, "Invalid figure choice");
                    match self.policy {
                        InputPolicy::Strict => {
                            self.say("Invalid choice. Please enter a number from 0 to 3.")?;
                        }
                        InputPolicy::Lenient => {
                            self.say(&format!(
                                "Invalid choice. Defaulting to {}.",
                                Figure::DEFAULT
                            ))?;
                            return Ok(Selection::Chosen(Figure::DEFAULT));
                        }
                    }
                }
            }
        }
    }

    /// Ask which filter to apply to the loaded figure.
    ///
    /// Lenient mode answers [`Selection::Skip`] on invalid input.
    pub fn select_filter(&mut self) -> Result<Selection<Filter>> {
        writeln!(self.output, "\nSelect a filter to apply:")?;
        for filter in Filter::ALL {
            writeln!(self.output, "{}. {}", filter.choice(), filter.label())?;
        }
        writeln!(self.output, "{EXIT_CHOICE}. Exit")?;

        loop {
            match self.read_choice("Enter your choice (0-8): ", Filter::from_choice)? {
                MenuInput::Valid(filter) => return Ok(Selection::Chosen(filter)),
                MenuInput::Exit => return Ok(Selection::Exit),
                MenuInput::Invalid(raw) => {
                    debug!(input = %raw, policy = ?self.policy, "Invalid filter choice");
                    match self.policy {
                        InputPolicy::Strict => {
                            self.say("Invalid choice. Please enter a number from 0 to 8.")?;
                        }
                        InputPolicy::Lenient => {
                            self.say("Invalid choice. No filter applied.")?;
                            return Ok(Selection::Skip);
                        }
                    }
                }
            }
        }
    }

    /// Ask for the resize target. An empty answer keeps the default side.
    ///
    /// Returns [`Selection::Exit`] if input ends before both sides are read.
    pub fn read_dimensions(&mut self) -> Result<Selection<Dimensions>> {
        let defaults = Dimensions::default();
        let Some(width) = self.read_side("width", defaults.width())? else {
            return Ok(Selection::Exit);
        };
        let Some(height) = self.read_side("height", defaults.height())? else {
            return Ok(Selection::Exit);
        };
        Ok(Selection::Chosen(Dimensions::new(width, height)?))
    }

    // -- Input ----------------------------------------------------------------

    /// Read one trimmed line. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("End of input");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn read_choice<T>(
        &mut self,
        prompt: &str,
        lookup: impl Fn(u8) -> Option<T>,
    ) -> Result<MenuInput<T>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(MenuInput::Exit);
        };
        Ok(match line.parse::<u8>() {
            Ok(EXIT_CHOICE) => MenuInput::Exit,
            Ok(choice) => match lookup(choice) {
                Some(item) => MenuInput::Valid(item),
                None => MenuInput::Invalid(line),
            },
            Err(_) => MenuInput::Invalid(line),
        })
    }

    /// Read one side of the resize target. `None` at end of input.
    fn read_side(&mut self, side: &str, default: u32) -> Result<Option<u32>> {
        loop {
            write!(self.output, "Enter the new {side} (default {default}): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if line.is_empty() {
                return Ok(Some(default));
            }
            match line.parse::<u32>() {
                Ok(value) if (1..=Dimensions::MAX_SIDE).contains(&value) => {
                    return Ok(Some(value));
                }
                _ => match self.policy {
                    InputPolicy::Strict => {
                        self.say(&format!(
                            "Please enter a whole number from 1 to {}.",
                            Dimensions::MAX_SIDE
                        ))?;
                    }
                    InputPolicy::Lenient => {
                        self.say(&format!("Invalid {side}. Using {default}."))?;
                        return Ok(Some(default));
                    }
                },
            }
        }
    }
}
