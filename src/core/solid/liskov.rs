//! Liskov substitution. `Square` honours the `Rectangular` interface on
//! paper but breaks callers that expect width and height to be
//! independent. `Shape` is the variant-based model without that trap.

use std::fmt;

pub trait Rectangular {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_width(&mut self, width: u32);
    fn set_height(&mut self, height: u32);

    /// u32 × u32 always fits in u64
    fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rectangle {
    width: u32,
    height: u32,
}

impl Rectangle {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Rectangular for Rectangle {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    fn set_height(&mut self, height: u32) {
        self.height = height;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Square {
    side: u32,
}

impl Square {
    pub fn new(side: u32) -> Self {
        Self { side }
    }
}

impl Rectangular for Square {
    fn width(&self) -> u32 {
        self.side
    }

    fn height(&self) -> u32 {
        self.side
    }

    // both setters move both sides
    fn set_width(&mut self, width: u32) {
        self.side = width;
    }

    fn set_height(&mut self, height: u32) {
        self.side = height;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaCheck {
    pub expected: u64,
    pub actual: u64,
}

impl AreaCheck {
    pub fn holds(&self) -> bool {
        self.expected == self.actual
    }
}

/// Stretches the shape to height 10 and compares the area against what a
/// plain rectangle would give.
pub fn use_it(shape: &mut dyn Rectangular) -> AreaCheck {
    let width = shape.width();
    shape.set_height(10);
    AreaCheck {
        expected: u64::from(width) * 10,
        actual: shape.area(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rectangle { width: u32, height: u32 },
    Square { side: u32 },
}

impl Shape {
    pub fn area(&self) -> u64 {
        match *self {
            Shape::Rectangle { width, height } => u64::from(width) * u64::from(height),
            Shape::Square { side } => u64::from(side) * u64::from(side),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Rectangle { width, height } => write!(f, "{}x{} rectangle", width, height),
            Shape::Square { side } => write!(f, "{}x{} square", side, side),
        }
    }
}
