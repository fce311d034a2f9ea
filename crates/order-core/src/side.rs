//! Side (Buy / Sell) of an order.

/// Order side: Buy or Sell.
///
/// Input is permissive: only the exact token `"B"` selects [`Side::Buy`].
/// Anything else, including `"b"` or an empty token, is a sell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Map an input token to a side. Never fails.
    pub fn from_token(token: &str) -> Self {
        match token {
            "B" => Side::Buy,
            _ => Side::Sell,
        }
    }

    /// Byte written into the side field of a record.
    pub fn wire_byte(self) -> u8 {
        match self {
            Side::Buy => 0,
            Side::Sell => 1,
        }
    }

    /// Single-char representation (`'B'` / `'S'`), used in log lines.
    pub fn as_char(self) -> char {
        match self {
            Side::Buy => 'B',
            Side::Sell => 'S',
        }
    }
}
