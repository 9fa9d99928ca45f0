//! browser
//!
//! Opening URLs.
//!
//! # Design
//!
//! The Backlog facade never launches a browser itself; it calls a
//! [`Browser`]. That keeps URL construction testable without spawning
//! processes. Any `Fn(&str) -> Result<(), BrowserError>` is a `Browser`, so
//! tests can pass a closure.
//!
//! | Implementation      | Behaviour                                    |
//! |---------------------|----------------------------------------------|
//! | [`SystemBrowser`]   | Platform default handler (via `open`)        |
//! | [`CommandBrowser`]  | A configured program, e.g. `firefox`         |
//! | [`PrintBrowser`]    | Writes the URL to stdout                     |
//! | [`RecordingBrowser`]| Remembers URLs (tests)                       |

use std::cell::RefCell;
use std::io::Write;

use thiserror::Error;

/// Errors from opening a URL.
#[derive(Debug, Error)]
pub enum BrowserError {
    /// The launcher could not be started or reported failure.
    #[error("failed to open {url}: {source}")]
    Launch {
        /// The URL being opened
        url: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Writing the URL to stdout failed.
    #[error("failed to print URL: {0}")]
    Print(#[source] std::io::Error),

    /// Failure reported by a custom opener.
    #[error("{0}")]
    Other(String),
}

/// Something that can open a URL.
pub trait Browser {
    /// Open `url`.
    fn open(&self, url: &str) -> Result<(), BrowserError>;
}

impl<F> Browser for F
where
    F: Fn(&str) -> Result<(), BrowserError>,
{
    fn open(&self, url: &str) -> Result<(), BrowserError> {
        self(url)
    }
}

/// Opens URLs with the platform's default handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), BrowserError> {
        log::debug!("opening {} with the system handler", url);
        open::that(url).map_err(|source| BrowserError::Launch {
            url: url.to_string(),
            source,
        })
    }
}

/// Opens URLs with a specific program.
#[derive(Debug, Clone)]
pub struct CommandBrowser {
    program: String,
}

impl CommandBrowser {
    /// Use `program` to open URLs.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Browser for CommandBrowser {
    fn open(&self, url: &str) -> Result<(), BrowserError> {
        log::debug!("opening {} with {}", url, self.program);
        open::with(url, &self.program).map_err(|source| BrowserError::Launch {
            url: url.to_string(),
            source,
        })
    }
}

/// Prints URLs to stdout, one per line.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintBrowser;

impl Browser for PrintBrowser {
    fn open(&self, url: &str) -> Result<(), BrowserError> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", url).map_err(BrowserError::Print)
    }
}

/// Records every URL instead of opening it.
#[derive(Debug, Default)]
pub struct RecordingBrowser {
    urls: RefCell<Vec<String>>,
}

impl RecordingBrowser {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs opened so far, oldest first.
    pub fn urls(&self) -> Vec<String> {
        self.urls.borrow().clone()
    }

    /// The most recently opened URL.
    pub fn last(&self) -> Option<String> {
        self.urls.borrow().last().cloned()
    }
}

impl Browser for RecordingBrowser {
    fn open(&self, url: &str) -> Result<(), BrowserError> {
        self.urls.borrow_mut().push(url.to_string());
        Ok(())
    }
}

/// Pick the browser for the given settings.
///
/// Printing wins over a configured program, which wins over the system
/// default.
pub fn select(print_only: bool, program: Option<&str>) -> Box<dyn Browser> {
    match (print_only, program) {
        (true, _) => Box::new(PrintBrowser),
        (false, Some(program)) => Box::new(CommandBrowser::new(program)),
        (false, None) => Box::new(SystemBrowser),
    }
}
