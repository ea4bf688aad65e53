//! Initial data-memory image.
//!
//! Index position is the word address, starting at 0. Only the words up to
//! the highest seeded address are kept; the simulator treats everything past
//! the end of the image as zero.

/// Initial contents of shared memory, one 32-bit word per address.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryImage {
    words: Vec<u32>,
}

impl MemoryImage {
    /// Creates an empty image.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an image from words laid out from address 0.
    pub fn from_words(words: Vec<u32>) -> Self {
        Self { words }
    }

    /// Writes `value` at word address `addr`, zero-filling any gap below it.
    ///
    /// # Panics
    ///
    /// Panics if the image cannot grow to `addr + 1` words (capacity overflow
    /// or allocation failure), e.g. for `addr == usize::MAX`.
    #[must_use]
    pub fn store(mut self, addr: usize, value: u32) -> Self {
        if self.words.len() <= addr {
            self.words.resize(addr.saturating_add(1), 0);
        }
        self.words[addr] = value;
        self
    }

    /// Returns the word at `addr`, or 0 past the end of the image.
    pub fn load(&self, addr: usize) -> u32 {
        self.words.get(addr).copied().unwrap_or(0)
    }

    /// Returns the words in address order.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Number of words in the image.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no word has been seeded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
