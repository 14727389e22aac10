//! Message type registry
//!
//! One-byte ASCII tags with their fixed payload lengths. The table is the
//! framing contract: a tag outside it cannot be skipped safely because the
//! number of bytes that follow is unknown.

use num_enum::TryFromPrimitive;

/// ITCH 5.0 message tags recognized by this decoder
///
/// Only [`MessageType::Trade`] is decoded semantically; every other variant
/// exists so its payload can be skipped with exact byte accounting.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum MessageType {
    SystemEvent = b'S',
    StockDirectory = b'R',
    TradingAction = b'H',
    RegShoRestriction = b'Y',
    ParticipantPosition = b'L',
    MwcbDeclineLevel = b'V',
    MwcbStatus = b'W',
    IpoQuotingPeriod = b'K',
    AddOrder = b'A',
    AddOrderAttributed = b'F',
    OrderExecuted = b'E',
    OrderExecutedWithPrice = b'C',
    OrderCancel = b'X',
    OrderDelete = b'D',
    OrderReplace = b'U',
    Trade = b'P',
    CrossTrade = b'Q',
    BrokenTrade = b'B',
    Noii = b'I',
    RetailInterest = b'N',
}

impl MessageType {
    /// Number of payload bytes following the one-byte tag
    pub fn payload_len(&self) -> usize {
        match self {
            MessageType::SystemEvent => 11,
            MessageType::StockDirectory => 38,
            MessageType::TradingAction => 24,
            MessageType::RegShoRestriction => 19,
            MessageType::ParticipantPosition => 25,
            MessageType::MwcbDeclineLevel => 34,
            MessageType::MwcbStatus => 11,
            MessageType::IpoQuotingPeriod => 27,
            MessageType::AddOrder => 35,
            MessageType::AddOrderAttributed => 39,
            MessageType::OrderExecuted => 30,
            MessageType::OrderExecutedWithPrice => 35,
            MessageType::OrderCancel => 22,
            MessageType::OrderDelete => 18,
            MessageType::OrderReplace => 34,
            MessageType::Trade => crate::TRADE_PAYLOAD_LEN,
            MessageType::CrossTrade => 39,
            MessageType::BrokenTrade => 18,
            MessageType::Noii => 49,
            MessageType::RetailInterest => 19,
        }
    }

    /// Whether this tag carries the fully decoded trade payload
    pub fn is_trade(&self) -> bool {
        *self == MessageType::Trade
    }
}
