use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::{Error, Visitor};

use crate::message::HelloWorldMessage;
use crate::output::OutputRef;
use crate::printer::MessagePrinter;

pub trait PrinterFactory {
    fn create_printer(&self) -> MessagePrinter;
}

pub type BoxPrinterFactory = Box<dyn PrinterFactory + Send + Sync>;

pub struct HelloWorldPrinterFactory {
    output: OutputRef
}

impl HelloWorldPrinterFactory {
    pub fn with_output(output: OutputRef) -> HelloWorldPrinterFactory {
        HelloWorldPrinterFactory {
            output
        }
    }
}

impl PrinterFactory for HelloWorldPrinterFactory {
    fn create_printer(&self) -> MessagePrinter {
        MessagePrinter::new(HelloWorldMessage::new(), self.output.clone())
    }
}

/// The built-in message variants that can be selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    HelloWorld
}

impl Variant {
    pub fn all() -> &'static [Variant] {
        &[Variant::HelloWorld]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Variant::HelloWorld => "hello-world"
        }
    }

    pub fn factory(&self, output: OutputRef) -> BoxPrinterFactory {
        match self {
            Variant::HelloWorld => Box::new(HelloWorldPrinterFactory::with_output(output))
        }
    }
}

impl Default for Variant {
    fn default() -> Self {
        Variant::HelloWorld
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Variant::all()
            .iter()
            .find(|variant| variant.name() == text)
            .cloned()
            .ok_or_else(|| {
                let names = Variant::all().iter().map(|variant| variant.name()).collect::<Vec<_>>();
                format!("Unknown variant '{}' (available: {})", text, names.join(", "))
            })
    }
}

impl Serialize for Variant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        serializer.serialize_str(self.name())
    }
}

struct VariantVisitor;
impl<'de> Visitor<'de> for VariantVisitor {
    type Value = Variant;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        formatter.write_str("a variant name")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> where E: Error {
        Variant::from_str(value).map_err(|err| E::custom(err))
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E> where E: Error {
        self.visit_str(&value)
    }
}

impl<'de> Deserialize<'de> for Variant {
    fn deserialize<D>(deserializer: D) -> Result<Variant, D::Error> where D: Deserializer<'de> {
        deserializer.deserialize_string(VariantVisitor)
    }
}

#[test]
fn test_hello_world_factory1() {
    use crate::test_helpers::MemoryOutput;

    let output = MemoryOutput::new();
    let factory = HelloWorldPrinterFactory::with_output(output.clone());

    factory.create_printer().print_message().unwrap();
    assert_eq!("Hello, World!\n", output.content());
}

#[test]
fn test_hello_world_factory_new_printers() {
    use crate::test_helpers::MemoryOutput;

    let output = MemoryOutput::new();
    let factory = HelloWorldPrinterFactory::with_output(output.clone());

    factory.create_printer().print_message().unwrap();
    factory.create_printer().print_message().unwrap();
    assert_eq!(vec!["Hello, World!", "Hello, World!"], output.lines());
}

#[test]
fn test_custom_factory() {
    use crate::test_helpers::{GoodbyePrinterFactory, MemoryOutput};

    let output = MemoryOutput::new();
    let factory: BoxPrinterFactory = Box::new(GoodbyePrinterFactory::new("Moon", output.clone()));

    let printer = factory.create_printer();
    printer.print_message().unwrap();
    printer.print_message().unwrap();
    assert_eq!("Goodbye, Moon!\nGoodbye, Moon!\n", output.content());
}

#[test]
fn test_variant_parse1() {
    assert_eq!(Some(Variant::HelloWorld), Variant::from_str("hello-world").ok());
}

#[test]
fn test_variant_parse2() {
    assert_eq!(
        Err("Unknown variant 'goodbye' (available: hello-world)".to_owned()),
        Variant::from_str("goodbye")
    );
}

#[test]
fn test_variant_factory() {
    use crate::test_helpers::MemoryOutput;

    let output = MemoryOutput::new();
    Variant::default().factory(output.clone()).create_printer().print_message().unwrap();
    assert_eq!("Hello, World!\n", output.content());
}

#[test]
fn test_variant_display() {
    assert_eq!("hello-world", Variant::HelloWorld.to_string());
}
