//! A car moving on an unbounded integer plane.

use std::fmt;
use std::str::FromStr;

use abm_core::AbmError;

/// Compass heading.  Turning cycles through the four values; nothing else
/// can be stored.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    #[default]
    N,
    E,
    S,
    W,
}

impl Heading {
    /// Unit step `(dx, dy)` for one forward move.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Heading::N => (0, 1),
            Heading::S => (0, -1),
            Heading::E => (1, 0),
            Heading::W => (-1, 0),
        }
    }

    /// N → W → S → E → N.
    pub fn left(self) -> Heading {
        match self {
            Heading::N => Heading::W,
            Heading::W => Heading::S,
            Heading::S => Heading::E,
            Heading::E => Heading::N,
        }
    }

    /// N → E → S → W → N.
    pub fn right(self) -> Heading {
        match self {
            Heading::N => Heading::E,
            Heading::E => Heading::S,
            Heading::S => Heading::W,
            Heading::W => Heading::N,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Heading::N => "N",
            Heading::E => "E",
            Heading::S => "S",
            Heading::W => "W",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Heading {
    type Err = AbmError;

    fn from_str(s: &str) -> Result<Self, AbmError> {
        match s.trim().to_ascii_uppercase().as_str() {
            "N" => Ok(Heading::N),
            "E" => Ok(Heading::E),
            "S" => Ok(Heading::S),
            "W" => Ok(Heading::W),
            _ => Err(AbmError::InvalidArgument(format!("unknown heading {s:?}"))),
        }
    }
}

/// Direction of travel relative to the heading.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    Forward,
    Backward,
}

impl FromStr for Mode {
    type Err = AbmError;

    fn from_str(s: &str) -> Result<Self, AbmError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" => Ok(Mode::Forward),
            "backward" => Ok(Mode::Backward),
            _ => Err(AbmError::InvalidArgument(format!("unknown mode {s:?}, expected forward or backward"))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Car {
    color:   String,
    x:       i64,
    y:       i64,
    heading: Heading,
}

impl Car {
    /// A car at the origin facing north.
    pub fn new(color: impl Into<String>) -> Self {
        Self::with_state(color, 0, 0, Heading::N)
    }

    pub fn with_state(color: impl Into<String>, x: i64, y: i64, heading: Heading) -> Self {
        Self { color: color.into(), x, y, heading }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Move `units` cells along the heading (`Forward`) or against it
    /// (`Backward`).
    pub fn go(&mut self, units: u32, mode: Mode) {
        let (dx, dy) = self.heading.delta();
        let sign = match mode {
            Mode::Forward => 1,
            Mode::Backward => -1,
        };
        let units = i64::from(units) * sign;
        self.x += dx * units;
        self.y += dy * units;
    }

    pub fn turn_left(&mut self) {
        self.heading = self.heading.left();
    }

    pub fn turn_right(&mut self) {
        self.heading = self.heading.right();
    }

    /// `(color, x, y, heading)`.
    pub fn describe(&self) -> (&str, i64, i64, Heading) {
        (&self.color, self.x, self.y, self.heading)
    }
}
