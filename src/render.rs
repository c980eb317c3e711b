//! Terminal display surface
//!
//! One row per city: name, temperature, description, wind, humidity,
//! pressure. The busy indicator and error notice are plain lines, with the
//! retry affordance handled by the caller's prompt.

use std::io::{self, Write};

use crate::models::CityWeather;
use crate::screen::DisplaySurface;

/// Display surface writing rows to any `io::Write`
pub struct TerminalSurface<W> {
    out: W,
}

impl TerminalSurface<io::Stdout> {
    /// Surface writing to standard output
    #[must_use]
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalSurface<W> {
    /// Surface writing to the given sink
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the surface and return the sink (used by tests)
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn format_row(city: &CityWeather) -> String {
    format!(
        "{:<20} {:>7}  {:<22} {:<12} {:>4}%  {}",
        city.name,
        city.format_temperature(),
        city.description(),
        city.format_wind(),
        city.main.humidity,
        city.format_pressure()
    )
}

impl<W: Write> DisplaySurface for TerminalSurface<W> {
    fn set_busy(&mut self, busy: bool) {
        if busy {
            let _ = writeln!(self.out, "Loading weather...");
        }
    }

    fn render(&mut self, cities: &[CityWeather]) {
        for city in cities {
            let _ = writeln!(self.out, "{}", format_row(city));
        }
        let _ = self.out.flush();
    }

    fn show_error(&mut self, notice: &str) {
        let _ = writeln!(self.out, "{notice}");
        let _ = self.out.flush();
    }
}
