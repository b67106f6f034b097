//! Interface segregation: one small trait per capability, so a device only
//! implements what it can actually do.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

pub trait Printer {
    fn print(&self, doc: &Document) -> String;
}

pub trait Scanner {
    fn scan(&self, doc: &Document) -> String;
}

pub trait Fax {
    fn fax(&self, doc: &Document) -> String;
}

#[derive(Debug, Default)]
pub struct MultiFunctionMachine;

impl Printer for MultiFunctionMachine {
    fn print(&self, doc: &Document) -> String {
        format!("Multi-function machine printed {}", doc.name)
    }
}

impl Scanner for MultiFunctionMachine {
    fn scan(&self, doc: &Document) -> String {
        format!("Multi-function machine scanned {}", doc.name)
    }
}

impl Fax for MultiFunctionMachine {
    fn fax(&self, doc: &Document) -> String {
        format!("Multi-function machine faxed {}", doc.name)
    }
}

#[derive(Debug, Default)]
pub struct OldFashionedPrinter;

impl Printer for OldFashionedPrinter {
    fn print(&self, doc: &Document) -> String {
        format!("Old-fashioned printer printed {}", doc.name)
    }
}

#[derive(Debug, Default)]
pub struct Photocopier;

impl Printer for Photocopier {
    fn print(&self, doc: &Document) -> String {
        format!("Photocopier printed {}", doc.name)
    }
}

impl Scanner for Photocopier {
    fn scan(&self, doc: &Document) -> String {
        format!("Photocopier scanned {}", doc.name)
    }
}

/// Anything that can both scan and print can copy.
pub fn copy<D: Printer + Scanner>(device: &D, doc: &Document) -> Vec<String> {
    vec![device.scan(doc), device.print(doc)]
}
