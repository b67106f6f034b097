use crate::core::engine::header;
use crate::domain::model::PlaygroundContext;
use crate::domain::ports::Playground;
use crate::utils::error::Result;
use std::fmt;
use std::io::Write;

/// Copy-constructor style duplication.
pub trait Copying {
    fn copy_from(other: &Self) -> Self;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street_address: String,
    pub city: String,
}

impl Address {
    pub fn new(street_address: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            street_address: street_address.into(),
            city: city.into(),
        }
    }
}

impl Copying for Address {
    fn copy_from(other: &Self) -> Self {
        Self {
            street_address: other.street_address.clone(),
            city: other.city.clone(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.street_address, self.city)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub name: String,
    pub address: Address,
}

impl Employee {
    pub fn new(name: impl Into<String>, address: Address) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }
}

impl Copying for Employee {
    fn copy_from(other: &Self) -> Self {
        Self {
            name: other.name.clone(),
            address: Address::copy_from(&other.address),
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "My name is {} and I live at {}", self.name, self.address)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// 端點是值，複製後與原線段互不影響
    pub fn deep_copy(&self) -> Line {
        *self
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "start x: {}, start y: {}\nend x: {}, end y: {}",
            self.start.x, self.start.y, self.end.x, self.end.y
        )
    }
}

pub struct PrototypePlayground;

impl Playground for PrototypePlayground {
    fn name(&self) -> &'static str {
        "prototype"
    }

    fn description(&self) -> &'static str {
        "Prototype"
    }

    fn run(&self, ctx: &mut PlaygroundContext<'_>, out: &mut dyn Write) -> Result<()> {
        let width = ctx.settings.header_width;

        writeln!(out, "{}", header("Copying from initializer", width))?;
        let john = Employee::new("John", Address::new("123 London Road", "London"));
        let mut chris = Employee::copy_from(&john);
        chris.name = "Chris".to_string();
        chris.address.street_address = "124 London Road".to_string();
        writeln!(out, "{}", john)?;
        writeln!(out, "{}", chris)?;

        writeln!(out, "{}", header("Clone", width))?;
        let john = Employee::new("John", Address::new("123 London Road", "London"));
        let mut chris = john.clone();
        chris.name = "Chris".to_string();
        chris.address.street_address = "124 London Road".to_string();
        writeln!(out, "{}", john)?;
        writeln!(out, "{}", chris)?;

        writeln!(out, "{}", header("Exercise", width))?;
        let origin = Line::new(Point::new(1, 2), Point::new(3, 4));
        let detour = Line::new(Point::new(6, 7), Point::new(8, 9));
        let mut destination = detour.deep_copy();
        destination.end.x = 10;
        tracing::debug!(?detour, ?destination, "Deep copied line");
        writeln!(out, "{}", origin)?;
        writeln!(out, "{}", destination)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_from_is_deep() {
        let john = Employee::new("John", Address::new("123 London Road", "London"));
        let mut chris = Employee::copy_from(&john);
        chris.address.city = "Paris".to_string();

        assert_eq!(john.address.city, "London");
    }

    #[test]
    fn test_employee_display() {
        let john = Employee::new("John", Address::new("123 London Road", "London"));
        assert_eq!(
            john.to_string(),
            "My name is John and I live at 123 London Road, London"
        );
    }

    #[test]
    fn test_line_deep_copy_is_independent() {
        let line = Line::new(Point::new(1, 2), Point::new(3, 4));
        let mut copy = line.deep_copy();
        copy.start.x = 100;

        assert_eq!(line.start.x, 1);
        assert_eq!(copy.start, Point::new(100, 2));
        assert_eq!(copy.end, line.end);
        assert_eq!(
            line.to_string(),
            "start x: 1, start y: 2\nend x: 3, end y: 4"
        );
    }
}
