//! Open/closed: new filtering criteria are added as new specifications,
//! the filter itself never changes.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Small,
    Medium,
    Large,
    Huge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub color: Color,
    pub size: Size,
}

impl Product {
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color,
            size,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?}, {:?})", self.name, self.color, self.size)
    }
}

pub trait Specification<T> {
    fn is_satisfied(&self, item: &T) -> bool;
}

pub trait Filter<T> {
    fn filter<'a>(&self, items: &'a [T], spec: &dyn Specification<T>) -> Vec<&'a T>;
}

pub struct ColorSpecification(pub Color);

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.0
    }
}

pub struct SizeSpecification(pub Size);

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.0
    }
}

pub struct AndSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndSpecification<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A, B> Specification<T> for AndSpecification<A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }
}

/// `a.and(b)` instead of spelling out `AndSpecification::new(a, b)`.
pub trait SpecificationExt<T>: Specification<T> + Sized {
    fn and<B: Specification<T>>(self, other: B) -> AndSpecification<Self, B> {
        AndSpecification::new(self, other)
    }
}

impl<T, S: Specification<T>> SpecificationExt<T> for S {}

#[derive(Debug, Default)]
pub struct BetterFilter;

impl<T> Filter<T> for BetterFilter {
    fn filter<'a>(&self, items: &'a [T], spec: &dyn Specification<T>) -> Vec<&'a T> {
        items.iter().filter(|item| spec.is_satisfied(item)).collect()
    }
}

pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("Apple", Color::Red, Size::Small),
        Product::new("Tree", Color::Green, Size::Large),
        Product::new("House", Color::Blue, Size::Large),
    ]
}
