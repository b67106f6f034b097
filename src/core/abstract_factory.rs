//! Abstract factory: a hot drink machine that maps every [`AvailableDrink`]
//! to a producer built once at start-up, and lets the caller pick one by
//! its position in the menu.

use crate::domain::model::{PlaygroundContext, DEFAULT_AMOUNT_ML};
use crate::domain::ports::Playground;
use crate::utils::error::{PlaygroundError, Result};
use std::collections::HashMap;
use std::fmt;
use std::io::{BufRead, Write};
use std::rc::Rc;

pub trait HotDrink: fmt::Debug {
    fn description(&self) -> &'static str;

    fn consume(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", self.description())?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tea;

impl HotDrink for Tea {
    fn description(&self) -> &'static str {
        "This tea is nice but I prefer it with milk."
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coffee;

impl HotDrink for Coffee {
    fn description(&self) -> &'static str {
        "This coffee is delicious!"
    }
}

pub trait HotDrinkFactory: fmt::Debug {
    /// Writes the preparation steps to `out` and hands back the drink.
    fn prepare(&self, amount: u32, out: &mut dyn Write) -> Result<Box<dyn HotDrink>>;
}

#[derive(Debug, Default)]
pub struct TeaFactory;

impl HotDrinkFactory for TeaFactory {
    fn prepare(&self, amount: u32, out: &mut dyn Write) -> Result<Box<dyn HotDrink>> {
        writeln!(
            out,
            "Put in tea bag, boil water, pour {}ml, add lemon, enjoy!",
            amount
        )?;
        Ok(Box::new(Tea))
    }
}

#[derive(Debug, Default)]
pub struct CoffeeFactory;

impl HotDrinkFactory for CoffeeFactory {
    fn prepare(&self, amount: u32, out: &mut dyn Write) -> Result<Box<dyn HotDrink>> {
        writeln!(
            out,
            "Grind some beans, boil water, pour {}ml, add cream and sugar, enjoy!",
            amount
        )?;
        Ok(Box::new(Coffee))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvailableDrink {
    Coffee,
    Tea,
}

impl AvailableDrink {
    /// 菜單順序
    pub const ALL: [AvailableDrink; 2] = [AvailableDrink::Coffee, AvailableDrink::Tea];

    pub fn name(self) -> &'static str {
        match self {
            AvailableDrink::Coffee => "Coffee",
            AvailableDrink::Tea => "Tea",
        }
    }

    fn create_factory(self) -> Rc<dyn HotDrinkFactory> {
        match self {
            AvailableDrink::Coffee => Rc::new(CoffeeFactory),
            AvailableDrink::Tea => Rc::new(TeaFactory),
        }
    }
}

impl fmt::Display for AvailableDrink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug)]
pub struct HotDrinkMachine {
    factories: HashMap<AvailableDrink, Rc<dyn HotDrinkFactory>>,
    named_factories: Vec<(String, Rc<dyn HotDrinkFactory>)>,
    amount_ml: u32,
}

impl HotDrinkMachine {
    pub fn new() -> Self {
        Self::with_amount(DEFAULT_AMOUNT_ML)
    }

    pub fn with_amount(amount_ml: u32) -> Self {
        let mut factories = HashMap::new();
        let mut named_factories = Vec::with_capacity(AvailableDrink::ALL.len());

        for drink in AvailableDrink::ALL {
            let factory = drink.create_factory();
            factories.insert(drink, Rc::clone(&factory));
            named_factories.push((drink.name().to_string(), factory));
        }

        Self {
            factories,
            named_factories,
            amount_ml,
        }
    }

    pub fn list_available(&self) -> Vec<&str> {
        self.named_factories
            .iter()
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn factory_for(&self, drink: AvailableDrink) -> Option<&Rc<dyn HotDrinkFactory>> {
        self.factories.get(&drink)
    }

    pub fn make_drink(&self, index: i64, out: &mut dyn Write) -> Result<Box<dyn HotDrink>> {
        let (name, factory) = usize::try_from(index)
            .ok()
            .and_then(|i| self.named_factories.get(i))
            .ok_or(PlaygroundError::OutOfRange {
                index,
                len: self.named_factories.len(),
            })?;

        tracing::debug!("Preparing {} ({}ml)", name, self.amount_ml);
        factory.prepare(self.amount_ml, out)
    }

    /// 解析使用者輸入的編號後製作飲料
    pub fn make_drink_from_input(&self, line: &str, out: &mut dyn Write) -> Result<Box<dyn HotDrink>> {
        let index = line
            .trim()
            .parse::<i64>()
            .map_err(|e| PlaygroundError::ParseFailure {
                input: line.to_string(),
                reason: e.to_string(),
            })?;
        self.make_drink(index, out)
    }

    pub fn print_menu(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Available drinks:")?;
        for (i, name) in self.list_available().iter().enumerate() {
            writeln!(out, "{}: {}", i, name)?;
        }
        Ok(())
    }

    /// Shows the menu and reads one selection line from `input`.
    pub fn make_drink_interactively(
        &self,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> Result<Box<dyn HotDrink>> {
        self.print_menu(out)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(PlaygroundError::ParseFailure {
                input: line,
                reason: "no selection was entered".to_string(),
            });
        }
        self.make_drink_from_input(&line, out)
    }
}

impl Default for HotDrinkMachine {
    fn default() -> Self {
        Self::new()
    }
}

pub struct AbstractFactoryPlayground;

impl Playground for AbstractFactoryPlayground {
    fn name(&self) -> &'static str {
        "abstract-factory"
    }

    fn description(&self) -> &'static str {
        "Abstract Factory"
    }

    fn run(&self, ctx: &mut PlaygroundContext<'_>, out: &mut dyn Write) -> Result<()> {
        let machine = HotDrinkMachine::with_amount(ctx.settings.drink_amount_ml);
        writeln!(out, "{} drinks on offer", machine.list_available().len())?;

        let drink = match ctx.settings.drink_selection {
            Some(index) => {
                machine.print_menu(out)?;
                tracing::info!("☕ Using preselected drink #{}", index);
                machine.make_drink(index, out)?
            }
            None => machine.make_drink_interactively(ctx.input, out)?,
        };
        drink.consume(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_follows_enum_order() {
        let machine = HotDrinkMachine::new();
        assert_eq!(machine.list_available(), vec!["Coffee", "Tea"]);
    }

    #[test]
    fn test_map_and_list_share_producers() {
        let machine = HotDrinkMachine::new();
        for (i, drink) in AvailableDrink::ALL.iter().enumerate() {
            let mapped = machine.factory_for(*drink).unwrap();
            assert!(Rc::ptr_eq(mapped, &machine.named_factories[i].1));
        }
    }

    #[test]
    fn test_prepare_writes_steps() {
        let mut out = Vec::new();
        let drink = TeaFactory.prepare(100, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Put in tea bag, boil water, pour 100ml, add lemon, enjoy!\n"
        );
        assert_eq!(drink.description(), Tea.description());
    }

    #[test]
    fn test_negative_index_is_out_of_range() {
        let machine = HotDrinkMachine::new();
        let result = machine.make_drink(-1, &mut Vec::new());
        assert!(matches!(
            result,
            Err(PlaygroundError::OutOfRange { index: -1, len: 2 })
        ));
    }

    #[test]
    fn test_non_numeric_input_is_parse_failure() {
        let machine = HotDrinkMachine::new();
        let result = machine.make_drink_from_input("tea\n", &mut Vec::new());
        assert!(matches!(result, Err(PlaygroundError::ParseFailure { .. })));
    }

    #[test]
    fn test_empty_input_is_parse_failure() {
        let machine = HotDrinkMachine::new();
        let mut input = "".as_bytes();
        let result = machine.make_drink_interactively(&mut input, &mut Vec::new());
        assert!(matches!(result, Err(PlaygroundError::ParseFailure { .. })));
    }
}
