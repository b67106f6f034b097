//! Faceted builder and the code builder exercise.
//!
//! `PersonBuilder` owns the `Person` being assembled. `lives()` and `works()`
//! hand that same target to a narrower facet; every facet can switch to the
//! other one or finish with `build()`.

use crate::domain::model::PlaygroundContext;
use crate::domain::ports::Playground;
use crate::utils::error::Result;
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    // address
    pub street_address: String,
    pub post_code: String,
    pub city: String,

    // employment
    pub company_name: String,
    pub position: String,
    pub annual_income: u64,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "I live at {}, {}, {}. I work at {} as a {}, earning {}",
            self.street_address,
            self.post_code,
            self.city,
            self.company_name,
            self.position,
            self.annual_income
        )
    }
}

#[derive(Debug, Default)]
pub struct PersonBuilder {
    person: Person,
}

impl PersonBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Shared surface of the root builder and its facets.
pub trait PersonFacets: Sized {
    fn into_builder(self) -> PersonBuilder;

    fn lives(self) -> PersonAddressBuilder {
        PersonAddressBuilder {
            builder: self.into_builder(),
        }
    }

    fn works(self) -> PersonJobBuilder {
        PersonJobBuilder {
            builder: self.into_builder(),
        }
    }

    fn build(self) -> Person {
        self.into_builder().person
    }
}

impl PersonFacets for PersonBuilder {
    fn into_builder(self) -> PersonBuilder {
        self
    }
}

#[must_use]
#[derive(Debug)]
pub struct PersonAddressBuilder {
    builder: PersonBuilder,
}

impl PersonAddressBuilder {
    pub fn at(mut self, street_address: impl Into<String>) -> Self {
        self.builder.person.street_address = street_address.into();
        self
    }

    pub fn with_post_code(mut self, post_code: impl Into<String>) -> Self {
        self.builder.person.post_code = post_code.into();
        self
    }

    pub fn in_city(mut self, city: impl Into<String>) -> Self {
        self.builder.person.city = city.into();
        self
    }
}

impl PersonFacets for PersonAddressBuilder {
    fn into_builder(self) -> PersonBuilder {
        self.builder
    }
}

#[must_use]
#[derive(Debug)]
pub struct PersonJobBuilder {
    builder: PersonBuilder,
}

impl PersonJobBuilder {
    pub fn at(mut self, company_name: impl Into<String>) -> Self {
        self.builder.person.company_name = company_name.into();
        self
    }

    pub fn as_a(mut self, position: impl Into<String>) -> Self {
        self.builder.person.position = position.into();
        self
    }

    pub fn earning(mut self, annual_income: u64) -> Self {
        self.builder.person.annual_income = annual_income;
        self
    }
}

impl PersonFacets for PersonJobBuilder {
    fn into_builder(self) -> PersonBuilder {
        self.builder
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub field_type: String,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.field_type)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Class {
    pub name: String,
    pub fields: Vec<Field>,
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "class {}", self.name)?;
        writeln!(f, "{{")?;
        for field in &self.fields {
            writeln!(f, "  {}", field)?;
        }
        writeln!(f, "}}")
    }
}

#[derive(Debug, Clone)]
pub struct CodeBuilder {
    class: Class,
}

impl CodeBuilder {
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            class: Class {
                name: root_name.into(),
                fields: Vec::new(),
            },
        }
    }

    pub fn add_field(mut self, name: impl Into<String>, field_type: impl Into<String>) -> Self {
        self.class.fields.push(Field {
            name: name.into(),
            field_type: field_type.into(),
        });
        self
    }

    pub fn build(self) -> Class {
        self.class
    }
}

impl fmt::Display for CodeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.class, f)
    }
}

pub struct BuilderPlayground;

impl Playground for BuilderPlayground {
    fn name(&self) -> &'static str {
        "builder"
    }

    fn description(&self) -> &'static str {
        "Faceted Builder"
    }

    fn run(&self, _ctx: &mut PlaygroundContext<'_>, out: &mut dyn Write) -> Result<()> {
        let person = PersonBuilder::new()
            .lives()
            .at("123 London Road")
            .in_city("London")
            .with_post_code("SW12BC")
            .works()
            .at("Fabrikam")
            .as_a("Engineer")
            .earning(123000)
            .build();
        tracing::debug!(?person, "Built person through facets");
        writeln!(out, "{}", person)?;

        writeln!(out)?;
        writeln!(out, "Builder coding exercise:")?;
        let code = CodeBuilder::new("Person")
            .add_field("name", "String")
            .add_field("age", "Int");
        write!(out, "{}", code)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_facet_only() {
        let person = PersonBuilder::new()
            .lives()
            .at("1 Main St")
            .in_city("Springfield")
            .build();

        assert_eq!(person.street_address, "1 Main St");
        assert_eq!(person.city, "Springfield");
        assert!(person.company_name.is_empty());
        assert_eq!(person.annual_income, 0);
    }

    #[test]
    fn test_facets_can_be_revisited() {
        let person = PersonBuilder::new()
            .lives()
            .at("1 Main St")
            .works()
            .at("Acme")
            .lives()
            .with_post_code("12345")
            .build();

        assert_eq!(person.street_address, "1 Main St");
        assert_eq!(person.company_name, "Acme");
        assert_eq!(person.post_code, "12345");
    }

    #[test]
    fn test_person_display() {
        let person = PersonBuilder::new()
            .lives()
            .at("123 London Road")
            .in_city("London")
            .with_post_code("SW12BC")
            .works()
            .at("Fabrikam")
            .as_a("Engineer")
            .earning(123000)
            .build();

        assert_eq!(
            person.to_string(),
            "I live at 123 London Road, SW12BC, London. I work at Fabrikam as a Engineer, earning 123000"
        );
    }

    #[test]
    fn test_code_builder_output() {
        let code = CodeBuilder::new("Person")
            .add_field("name", "String")
            .add_field("age", "Int");

        assert_eq!(
            code.to_string(),
            "class Person\n{\n  name: String\n  age: Int\n}\n"
        );
        assert_eq!(code.build().fields.len(), 2);
    }

    #[test]
    fn test_empty_class() {
        assert_eq!(CodeBuilder::new("Foo").to_string(), "class Foo\n{\n}\n");
    }
}
