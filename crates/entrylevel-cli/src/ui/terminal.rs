//! Terminal detection and output routing.

use std::io::IsTerminal;

const FALLBACK_WIDTH: usize = 80;

/// How command results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// A single JSON document on stdout.
    Json,
    /// `key=value` lines and tab-separated rows.
    Plain,
    /// Colored, aligned output for a person at a terminal.
    Pretty,
}

impl OutputMode {
    pub fn is_json(self) -> bool {
        self == Self::Json
    }

    pub fn is_pretty(self) -> bool {
        self == Self::Pretty
    }
}

/// Presentation switches from the command line and the `[ui]` config section.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiFlags {
    pub json: bool,
    pub no_color: bool,
    pub ascii: bool,
}

/// What the process can observe about where its output goes.
#[derive(Debug, Clone, Copy)]
struct Terminal {
    stdout: bool,
    stdin: bool,
    dumb: bool,
    no_color_env: bool,
    columns: Option<usize>,
}

impl Terminal {
    fn detect() -> Self {
        Self {
            stdout: std::io::stdout().is_terminal(),
            stdin: std::io::stdin().is_terminal(),
            dumb: std::env::var("TERM").is_ok_and(|term| term == "dumb"),
            no_color_env: std::env::var_os("NO_COLOR").is_some(),
            columns: columns_from_env().or_else(columns_from_tty),
        }
    }
}

/// Resolved presentation settings for one command run.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub mode: OutputMode,
    pub color: bool,
    pub unicode: bool,
    pub width: usize,
    interactive: bool,
}

impl UiContext {
    pub fn detect(flags: UiFlags) -> Self {
        Self::for_terminal(flags, Terminal::detect())
    }

    /// `--json` always wins; pretty output needs a real, non-dumb terminal.
    fn for_terminal(flags: UiFlags, term: Terminal) -> Self {
        let styled = term.stdout && !term.dumb;
        let mode = if flags.json {
            OutputMode::Json
        } else if styled {
            OutputMode::Pretty
        } else {
            OutputMode::Plain
        };

        Self {
            mode,
            color: styled && !flags.no_color && !term.no_color_env,
            unicode: !flags.ascii,
            width: term.columns.unwrap_or(FALLBACK_WIDTH),
            interactive: term.stdout && term.stdin,
        }
    }

    /// Whether a confirmation prompt can be answered.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    #[cfg(test)]
    pub fn fixed(mode: OutputMode) -> Self {
        Self {
            mode,
            color: false,
            unicode: false,
            width: FALLBACK_WIDTH,
            interactive: false,
        }
    }
}

fn columns_from_env() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()?
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&cols| cols > 0)
}

#[cfg(unix)]
fn columns_from_tty() -> Option<usize> {
    let mut size = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };
    // SAFETY: TIOCGWINSZ writes a winsize into the buffer and nothing else.
    let rc = unsafe {
        libc::ioctl(
            libc::STDOUT_FILENO,
            libc::TIOCGWINSZ,
            &mut size as *mut libc::winsize,
        )
    };
    (rc == 0 && size.ws_col > 0).then_some(usize::from(size.ws_col))
}

#[cfg(not(unix))]
fn columns_from_tty() -> Option<usize> {
    None
}
