pub mod code;
pub mod frequency;
pub mod tree;

pub type Symbol = u8;

/// Symbols at or above this value have the sign bit set when read as a
/// signed byte and are never counted.
pub const SYMBOL_LIMIT: usize = 128;

/// Code assigned when the whole tree is a single leaf.
pub const SINGLE_SYMBOL_CODE: &str = "0";

pub fn is_countable(symbol: Symbol) -> bool {
    (symbol as usize) < SYMBOL_LIMIT
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SymbolFrequency {
    pub symbol: Symbol,
    pub frequency: usize,
}

impl SymbolFrequency {
    pub fn new(symbol: Symbol, frequency: usize) -> Self {
        Self { symbol, frequency }
    }
}

impl From<(Symbol, usize)> for SymbolFrequency {
    fn from(value: (Symbol, usize)) -> Self {
        Self::new(value.0, value.1)
    }
}
