use std::io::{self, Write};

use tracing::instrument;

use crate::core::error::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Inner {
    pub value: f32,
}

impl Inner {
    pub fn new(value: f32) -> Self {
        Self { value }
    }

    /// Drops the fractional part. NaN maps to 0 and out-of-range values saturate.
    pub fn truncated(&self) -> i32 {
        self.value as i32
    }

    /// Lines printed by [`Inner::foo`]. Case 1 falls through into case 2.
    pub fn lines(&self) -> Vec<&'static str> {
        let mut lines = Vec::new();
        match self.truncated() {
            1 => {
                lines.push("1");
                lines.push("2");
            }
            2 => lines.push("2"),
            _ => {}
        }
        lines
    }

    /// Writes the lines of [`Inner::foo`] to `out`, returning how many were written.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<usize> {
        let lines = self.lines();
        for line in &lines {
            writeln!(out, "{}", line)?;
        }
        Ok(lines.len())
    }

    #[instrument(name = "inner_foo", level = "debug")]
    pub fn foo(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let printed = self.write_to(&mut handle)?;
        handle.flush()?;
        tracing::info!("Printed {} line(s) for truncated value {}", printed, self.truncated());
        Ok(())
    }
}
