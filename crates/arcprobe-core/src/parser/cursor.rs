//! Section tracking for 7-Zip listings.

/// Section of a listing currently being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Block {
    /// Banner and progress lines before the `--` delimiter.
    #[default]
    Preamble,
    /// Archive properties between `--` and the end of the header.
    Header,
    /// Everything after the header.
    Entries,
}

/// Forward-only cursor over the three sections of a listing.
///
/// # Examples
///
/// ```
/// use arcprobe_core::parser::cursor::Block;
/// use arcprobe_core::parser::cursor::BlockCursor;
///
/// let mut cursor = BlockCursor::new();
/// assert_eq!(cursor.block(), Block::Preamble);
/// cursor.advance();
/// cursor.advance();
/// cursor.advance();
/// assert_eq!(cursor.block(), Block::Entries);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockCursor {
    block: Block,
}

impl BlockCursor {
    /// Creates a cursor positioned in the preamble.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current section.
    #[must_use]
    pub const fn block(&self) -> Block {
        self.block
    }

    /// Moves to the next section. Stays put once in [`Block::Entries`].
    pub fn advance(&mut self) {
        self.block = match self.block {
            Block::Preamble => Block::Header,
            Block::Header | Block::Entries => Block::Entries,
        };
    }
}
