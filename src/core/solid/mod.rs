pub mod dependency_inversion;
pub mod interface_segregation;
pub mod liskov;
pub mod open_closed;
pub mod single_responsibility;

use crate::config::cli::LocalStorage;
use crate::core::engine::header;
use crate::domain::model::PlaygroundContext;
use crate::domain::ports::Playground;
use crate::utils::error::Result;
use std::io::Write;

use dependency_inversion::{Person, Relationships, Research};
use interface_segregation::{
    copy, Document, Fax, MultiFunctionMachine, OldFashionedPrinter, Photocopier, Printer,
};
use liskov::{use_it, Rectangle, Shape, Square};
use open_closed::{
    sample_products, BetterFilter, Color, ColorSpecification, Filter, Size, SizeSpecification,
    SpecificationExt,
};
use single_responsibility::{Journal, Persistence};

pub struct SolidPlayground;

impl SolidPlayground {
    fn single_responsibility(ctx: &PlaygroundContext<'_>, out: &mut dyn Write) -> Result<()> {
        let mut journal = Journal::new();
        journal.add_entry("I cried today");
        journal.add_entry("I ate a bug");
        writeln!(out, "{}", journal)?;

        let storage = LocalStorage::new(ctx.settings.journal_path.clone());
        let location = Persistence::new(storage).save(&journal, &ctx.settings.journal_filename)?;
        tracing::info!("📁 Journal saved to: {}", location);
        writeln!(out, "Saved journal to {}", location)?;
        Ok(())
    }

    fn open_closed(out: &mut dyn Write) -> Result<()> {
        let products = sample_products();
        let filter = BetterFilter;

        writeln!(out, "Green products:")?;
        for p in filter.filter(&products, &ColorSpecification(Color::Green)) {
            writeln!(out, "- {} is green", p.name)?;
        }

        writeln!(out, "Large blue items:")?;
        let large_blue = ColorSpecification(Color::Blue).and(SizeSpecification(Size::Large));
        for p in filter.filter(&products, &large_blue) {
            writeln!(out, "- {} is large and blue", p.name)?;
        }
        Ok(())
    }

    fn liskov(out: &mut dyn Write) -> Result<()> {
        let mut rectangle = Rectangle::new(2, 3);
        let check = use_it(&mut rectangle);
        writeln!(out, "Expected an area of {}, got {}", check.expected, check.actual)?;

        let mut square = Square::new(5);
        let check = use_it(&mut square);
        writeln!(out, "Expected an area of {}, got {}", check.expected, check.actual)?;

        for shape in [
            Shape::Rectangle { width: 2, height: 3 },
            Shape::Square { side: 5 },
        ] {
            writeln!(out, "{} has area {}", shape, shape.area())?;
        }
        Ok(())
    }

    fn interface_segregation(out: &mut dyn Write) -> Result<()> {
        let doc = Document::new("report.pdf");
        let machine = MultiFunctionMachine;
        writeln!(out, "{}", machine.fax(&doc))?;
        writeln!(out, "{}", OldFashionedPrinter.print(&doc))?;
        for step in copy(&Photocopier, &doc) {
            writeln!(out, "{}", step)?;
        }
        Ok(())
    }

    fn dependency_inversion(out: &mut dyn Write) -> Result<()> {
        let parent = Person::new("John");
        let child1 = Person::new("Chris");
        let child2 = Person::new("Matt");

        let mut relationships = Relationships::new();
        relationships.add_parent_and_child(&parent, &child1);
        relationships.add_parent_and_child(&parent, &child2);

        let research = Research::new(&relationships, &parent.name);
        for finding in research.findings() {
            writeln!(out, "{}", finding)?;
        }
        Ok(())
    }
}

impl Playground for SolidPlayground {
    fn name(&self) -> &'static str {
        "solid"
    }

    fn description(&self) -> &'static str {
        "SOLID Design Principles"
    }

    fn run(&self, ctx: &mut PlaygroundContext<'_>, out: &mut dyn Write) -> Result<()> {
        let width = ctx.settings.header_width;

        writeln!(out, "{}", header("Single Responsibility", width))?;
        Self::single_responsibility(ctx, out)?;

        writeln!(out, "{}", header("Open-Closed and Specification", width))?;
        Self::open_closed(out)?;

        writeln!(out, "{}", header("Liskov Substitution", width))?;
        Self::liskov(out)?;

        writeln!(out, "{}", header("Interface Segregation", width))?;
        Self::interface_segregation(out)?;

        writeln!(out, "{}", header("Dependency Inversion", width))?;
        Self::dependency_inversion(out)?;

        Ok(())
    }
}
