use crate::domain::model::PlaygroundContext;
use crate::domain::ports::Playground;
use crate::utils::error::Result;
use std::fmt;
use std::io::Write;

/// A point that can only be created through its factory methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

static POINT_FACTORY: PointFactory = PointFactory { _private: () };

impl Point {
    fn cartesian(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn polar(rho: f64, theta: f64) -> Self {
        Self {
            x: rho * theta.cos(),
            y: rho * theta.sin(),
        }
    }

    pub fn new_cartesian(x: f64, y: f64) -> Self {
        Self::cartesian(x, y)
    }

    pub fn new_polar(rho: f64, theta: f64) -> Self {
        Self::polar(rho, theta)
    }

    /// 單例工廠
    pub fn factory() -> &'static PointFactory {
        &POINT_FACTORY
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x = {:?}, y = {:?}", self.x, self.y)
    }
}

/// Creation methods grouped on one shared instance, reachable only via
/// [`Point::factory`].
#[derive(Debug)]
pub struct PointFactory {
    _private: (),
}

impl PointFactory {
    pub fn new_cartesian(&self, x: f64, y: f64) -> Point {
        Point::cartesian(x, y)
    }

    pub fn new_polar(&self, rho: f64, theta: f64) -> Point {
        Point::polar(rho, theta)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: u32,
    pub name: String,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "id: {}, name: {}", self.id, self.name)
    }
}

#[derive(Debug, Default)]
pub struct PersonFactory {
    last_id: u32,
}

impl PersonFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids start at 1 and are scoped to this factory.
    pub fn create_person(&mut self, name: impl Into<String>) -> Person {
        self.last_id += 1;
        Person {
            id: self.last_id,
            name: name.into(),
        }
    }
}

pub struct FactoryPlayground;

impl Playground for FactoryPlayground {
    fn name(&self) -> &'static str {
        "factory"
    }

    fn description(&self) -> &'static str {
        "Factory Method"
    }

    fn run(&self, _ctx: &mut PlaygroundContext<'_>, out: &mut dyn Write) -> Result<()> {
        let polar = Point::new_polar(1.0, 2.0);
        let from_singleton = Point::factory().new_cartesian(1.0, 2.0);

        writeln!(out, "{}", polar)?;
        writeln!(out, "{}", from_singleton)?;

        writeln!(out)?;
        writeln!(out, "Factory coding exercise:")?;
        let mut factory = PersonFactory::new();
        for name in ["Myron", "Sarah"] {
            let person = factory.create_person(name);
            tracing::debug!(id = person.id, "Created person {}", person.name);
            writeln!(out, "{}", person)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_cartesian_display() {
        assert_eq!(Point::new_cartesian(1.0, 2.0).to_string(), "x = 1.0, y = 2.0");
        assert_eq!(Point::new_cartesian(-0.5, 3.0).to_string(), "x = -0.5, y = 3.0");
    }

    #[test]
    fn test_polar_conversion() {
        let point = Point::new_polar(2.0, FRAC_PI_2);
        assert!(point.x().abs() < 1e-9);
        assert!((point.y() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_singleton_matches_static_methods() {
        assert!(std::ptr::eq(Point::factory(), Point::factory()));
        assert_eq!(
            Point::factory().new_polar(1.0, 2.0),
            Point::new_polar(1.0, 2.0)
        );
    }

    #[test]
    fn test_person_factory_assigns_sequential_ids() {
        let mut factory = PersonFactory::new();
        let myron = factory.create_person("Myron");
        let sarah = factory.create_person("Sarah");

        assert_eq!(myron.id, 1);
        assert_eq!(sarah.id, 2);
        assert_eq!(sarah.to_string(), "id: 2, name: Sarah");

        let mut other = PersonFactory::new();
        assert_eq!(other.create_person("Ann").id, 1);
    }
}
