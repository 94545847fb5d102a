use crate::message::BoxMessageProducer;
use crate::output::OutputRef;

#[derive(Debug)]
pub enum PrinterError {
    OutputFailed { error: std::io::Error }
}

impl From<std::io::Error> for PrinterError {
    fn from(error: std::io::Error) -> Self {
        PrinterError::OutputFailed { error }
    }
}

impl std::fmt::Display for PrinterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrinterError::OutputFailed { error } => {
                write!(f, "Failed writing message: {}", error)
            }
        }
    }
}

impl std::error::Error for PrinterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PrinterError::OutputFailed { error } => Some(error)
        }
    }
}

pub type PrinterResult<T> = Result<T, PrinterError>;

/// Prints the message of a bound producer.
///
/// The procedure is fixed: the message is produced first, then written as a single line.
/// Producers decide the text, never the steps.
pub struct MessagePrinter {
    producer: BoxMessageProducer,
    output: OutputRef
}

impl MessagePrinter {
    pub fn new(producer: BoxMessageProducer, output: OutputRef) -> MessagePrinter {
        MessagePrinter {
            producer,
            output
        }
    }

    pub fn print_message(&self) -> PrinterResult<()> {
        let message = self.producer.produce();
        log::debug!("Produced message of {} bytes", message.len());

        self.output.write_line(&message)?;
        Ok(())
    }
}

#[test]
fn test_print_message1() {
    use crate::message::HelloWorldMessage;
    use crate::test_helpers::MemoryOutput;

    let output = MemoryOutput::new();
    let printer = MessagePrinter::new(HelloWorldMessage::new(), output.clone());

    printer.print_message().unwrap();
    assert_eq!("Hello, World!\n", output.content());
}

#[test]
fn test_print_message_repeated() {
    use crate::message::HelloWorldMessage;
    use crate::test_helpers::MemoryOutput;

    let output = MemoryOutput::new();
    let printer = MessagePrinter::new(HelloWorldMessage::new(), output.clone());

    for _ in 0..5 {
        printer.print_message().unwrap();
    }

    let lines = output.lines();
    assert_eq!(5, lines.len());
    assert!(lines.iter().all(|line| line == "Hello, World!"));
}

#[test]
fn test_print_message_failed_output() {
    use crate::message::HelloWorldMessage;
    use crate::test_helpers::FailingOutput;

    let printer = MessagePrinter::new(HelloWorldMessage::new(), FailingOutput::new());

    match printer.print_message() {
        Err(PrinterError::OutputFailed { error }) => {
            assert_eq!(std::io::ErrorKind::BrokenPipe, error.kind());
            assert_eq!("stream closed", error.to_string());
        }
        Ok(()) => panic!("expected the write to fail")
    }
}

#[test]
fn test_print_message_produces_before_writing() {
    use std::sync::{Arc, Mutex};

    use crate::message::MessageProducer;
    use crate::output::Output;

    struct RecordingProducer {
        events: Arc<Mutex<Vec<&'static str>>>
    }

    impl MessageProducer for RecordingProducer {
        fn produce(&self) -> String {
            self.events.lock().unwrap().push("produce");
            "recorded".to_owned()
        }
    }

    struct RecordingOutput {
        events: Arc<Mutex<Vec<&'static str>>>
    }

    impl Output for RecordingOutput {
        fn write_line(&self, line: &str) -> std::io::Result<()> {
            assert_eq!("recorded", line);
            self.events.lock().unwrap().push("write");
            Ok(())
        }
    }

    let events = Arc::new(Mutex::new(Vec::new()));
    let printer = MessagePrinter::new(
        Box::new(RecordingProducer { events: events.clone() }),
        Arc::new(RecordingOutput { events: events.clone() })
    );

    printer.print_message().unwrap();
    printer.print_message().unwrap();
    assert_eq!(vec!["produce", "write", "produce", "write"], *events.lock().unwrap());
}
