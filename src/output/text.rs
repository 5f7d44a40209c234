//! Indented text output
//!
//! `TextFormatter` prints one line per entry as the walk produces it:
//!
//! ```text
//! ├── b/
//!     │    Size: 4096 b
//! └── x.txt
//!          Size: 10 b
//! ```

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::tree::{self, Entry, EntryKind, StreamingOutput, TreeWalker};

use super::config::OutputConfig;

const INDENT: &str = "    ";
const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";

/// Streaming text formatter. Directories get a trailing `/`, and are drawn in bold
/// blue when color is enabled.
pub struct TextFormatter<W: WriteColor> {
    out: W,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout. `use_color` is already resolved against the
    /// environment, so it is applied as-is.
    pub fn stdout(config: &OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_name(&mut self, entry: &Entry) -> io::Result<()> {
        match entry.kind {
            EntryKind::Dir => {
                self.out
                    .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                write!(self.out, "{}/", entry.name)?;
                self.out.reset()
            }
            EntryKind::Symlink => {
                self.out
                    .set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
                write!(self.out, "{}", entry.name)?;
                self.out.reset()
            }
            EntryKind::File | EntryKind::Other => write!(self.out, "{}", entry.name),
        }
    }
}

impl<W: WriteColor> StreamingOutput for TextFormatter<W> {
    fn output_entry(&mut self, entry: &Entry) -> io::Result<()> {
        let indent = INDENT.repeat(entry.depth);
        let connector = if entry.is_last { LAST_BRANCH } else { BRANCH };

        write!(self.out, "{}{}", indent, connector)?;
        self.write_name(entry)?;
        writeln!(self.out)?;

        if let Some(bytes) = entry.size {
            // Keep the sibling rail going under non-last entries
            let rail = if entry.is_last { " " } else { "│" };
            writeln!(self.out, "{}{}{}{}Size: {} b", indent, INDENT, rail, INDENT, bytes)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Render the tree below `root` as uncolored text.
pub fn format_text(walker: &TreeWalker, root: &Path) -> tree::Result<String> {
    let mut formatter = TextFormatter::new(NoColor::new(Vec::new()));
    walker.walk_streaming(root, &mut formatter)?;
    let bytes = formatter.into_inner().into_inner();
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
