use std::sync::{Arc, Mutex};

use crate::factory::PrinterFactory;
use crate::message::MessageProducer;
use crate::output::{Output, OutputRef};
use crate::printer::MessagePrinter;

pub struct MemoryOutput {
    lines: Mutex<Vec<String>>
}

impl MemoryOutput {
    pub fn new() -> Arc<MemoryOutput> {
        Arc::new(
            MemoryOutput {
                lines: Mutex::new(Vec::new())
            }
        )
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn content(&self) -> String {
        self.lines().iter().map(|line| format!("{}\n", line)).collect()
    }
}

impl Output for MemoryOutput {
    fn write_line(&self, line: &str) -> std::io::Result<()> {
        self.lines.lock().unwrap().push(line.to_owned());
        Ok(())
    }
}

/// Rejects every write, like a stdout bound to a full device.
pub struct FailingOutput {

}

impl FailingOutput {
    pub fn new() -> Arc<FailingOutput> {
        Arc::new(FailingOutput { })
    }
}

impl Output for FailingOutput {
    fn write_line(&self, _line: &str) -> std::io::Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stream closed"))
    }
}

pub struct GoodbyeMessage {
    name: String
}

impl MessageProducer for GoodbyeMessage {
    fn produce(&self) -> String {
        format!("Goodbye, {}!", self.name)
    }
}

pub struct GoodbyePrinterFactory {
    name: String,
    output: OutputRef
}

impl GoodbyePrinterFactory {
    pub fn new(name: &str, output: OutputRef) -> GoodbyePrinterFactory {
        GoodbyePrinterFactory {
            name: name.to_owned(),
            output
        }
    }
}

impl PrinterFactory for GoodbyePrinterFactory {
    fn create_printer(&self) -> MessagePrinter {
        MessagePrinter::new(
            Box::new(GoodbyeMessage { name: self.name.clone() }),
            self.output.clone()
        )
    }
}

#[test]
fn test_memory_output1() {
    let output = MemoryOutput::new();
    output.write_line("first").unwrap();
    output.write_line("second").unwrap();

    assert_eq!(vec!["first", "second"], output.lines());
    assert_eq!("first\nsecond\n", output.content());
}
