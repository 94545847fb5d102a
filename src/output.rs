use std::io::Write;
use std::sync::Arc;

/// A line oriented output stream. Failures are reported, never swallowed.
pub trait Output {
    fn write_line(&self, line: &str) -> std::io::Result<()>;
}

pub type OutputRef = Arc<dyn Output + Send + Sync>;

/// Writes to stdout, returning write errors to the caller.
pub struct ConsoleOutput {

}

impl ConsoleOutput {
    pub fn new() -> Arc<ConsoleOutput> {
        Arc::new(ConsoleOutput { })
    }
}

impl Output for ConsoleOutput {
    fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        stdout.flush()
    }
}
