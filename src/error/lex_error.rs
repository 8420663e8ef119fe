#[derive(Debug, Clone, PartialEq, Eq)]
/// A character in the input that does not begin any valid token.
pub struct LexicalError {
    /// The offending character.
    pub character: char,
    /// Byte offset of the character in the source.
    pub position:  usize,
}

impl std::fmt::Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Error at position {}: Unexpected character '{}'.",
               self.position, self.character)
    }
}

impl std::error::Error for LexicalError {}
