//! Output plumbing shared by the commands

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

const NO_PAGER_ENV: &str = "NO_PAGER";

/// `Write` adapter feeding a minus pager, so listings can be paged like stdout.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Where a command writes its listing.
pub enum Output {
    Paged(Pager),
    Direct,
}

impl Output {
    /// Pages only when stdout is a terminal and `NO_PAGER` is unset.
    pub fn detect(no_pager_flag: bool) -> Self {
        let disabled = no_pager_flag || std::env::var_os(NO_PAGER_ENV).is_some();

        if disabled || !io::stdout().is_terminal() {
            Output::Direct
        } else {
            Output::Paged(Pager::new())
        }
    }

    pub fn writer(&self) -> Box<dyn Write> {
        match self {
            Output::Paged(pager) => Box::new(PagerWriter::new(pager.clone())),
            Output::Direct => Box::new(io::stdout()),
        }
    }

    /// Hands the buffered listing to the pager; a no-op for direct output.
    pub fn finish(self) -> anyhow::Result<()> {
        if let Output::Paged(pager) = self {
            minus::page_all(pager)?;
        }
        Ok(())
    }
}
