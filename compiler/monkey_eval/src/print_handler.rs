//! Output sink for `puts`.
//!
//! The REPL writes to stdout; tests capture into a buffer and assert on it.
//! Dispatch is a closed enum rather than a trait object.

use std::cell::RefCell;
use std::rc::Rc;

/// Writes to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }

    /// Always empty: stdout does not capture.
    pub fn get_output(&self) -> String {
        String::new()
    }
}

/// Captures output in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: RefCell<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.borrow_mut();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn get_output(&self) -> String {
        self.buffer.borrow().clone()
    }

    pub fn clear(&self) {
        self.buffer.borrow_mut().clear();
    }
}

pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
}

impl PrintHandlerImpl {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
        }
    }

    /// Captured output; empty for stdout.
    pub fn get_output(&self) -> String {
        match self {
            Self::Stdout(h) => h.get_output(),
            Self::Buffer(h) => h.get_output(),
        }
    }

    /// Drop captured output. No-op for stdout.
    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Print handler shared between an interpreter and whoever reads its output.
pub type SharedPrintHandler = Rc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Rc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Rc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}
