//! Domain models for wallet accounts, transfers and the send form.
//!
//! # Units
//!
//! On-chain amounts are carried in wei as [`U256`]. Display records hold the
//! ether value as `f64` alongside the exact wei amount.

use std::fmt;

use alloy_primitives::utils::{format_ether, parse_ether};
use alloy_primitives::{Address, U256};
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TransferError, TransferResult};

// =============================================================================
// Account
// =============================================================================

/// A wallet address as reported by the wallet gateway.
///
/// Opaque to this crate: no checksum or format validation happens here.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Account(String);

impl Account {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form for headers and cards, e.g. `0x5FbD...0aa3`.
    pub fn short(&self) -> String {
        shorten_address(&self.0)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Account {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}

impl From<String> for Account {
    fn from(address: String) -> Self {
        Self(address)
    }
}

/// Keep the first 6 and last 4 characters of an address.
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

// =============================================================================
// Transfers
// =============================================================================

/// A transfer exactly as stored by the contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawTransfer {
    pub sender: String,
    pub receiver: String,
    /// Amount in wei.
    pub amount: U256,
    pub message: String,
    /// Block timestamp in seconds.
    pub timestamp: u64,
    pub keyword: String,
}

/// A transfer ready for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecord {
    pub address_from: Account,
    pub address_to: Account,
    /// Amount in ether.
    pub amount: f64,
    /// Exact amount in wei.
    pub amount_wei: U256,
    pub message: String,
    pub keyword: String,
    /// Local date-time string.
    pub timestamp: String,
}

impl TransferRecord {
    /// Build a display record, formatting the timestamp in `tz`.
    pub fn from_raw_in<Tz>(raw: RawTransfer, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self {
            address_from: Account::new(raw.sender),
            address_to: Account::new(raw.receiver),
            amount: wei_to_ether(raw.amount),
            amount_wei: raw.amount,
            message: raw.message,
            keyword: raw.keyword,
            timestamp: format_timestamp(raw.timestamp, tz),
        }
    }
}

impl From<RawTransfer> for TransferRecord {
    fn from(raw: RawTransfer) -> Self {
        Self::from_raw_in(raw, &Local)
    }
}

/// Divide a wei amount by 10^18.
pub fn wei_to_ether(wei: U256) -> f64 {
    // format_ether is exact, so parsing the decimal string gives the
    // correctly rounded f64.
    format_ether(wei).parse().unwrap_or(f64::NAN)
}

/// Parse a human ether amount (e.g. `"1.5"`) into wei.
pub fn parse_amount(amount: &str) -> TransferResult<U256> {
    let trimmed = amount.trim();
    if trimmed.is_empty() || trimmed.starts_with('-') {
        return Err(TransferError::InvalidAmount(amount.to_string()));
    }
    parse_ether(trimmed).map_err(|_| TransferError::InvalidAmount(amount.to_string()))
}

/// Check that the recipient typed into the form is a hex address.
pub fn parse_recipient(address: &str) -> TransferResult<Account> {
    let trimmed = address.trim();
    trimmed
        .parse::<Address>()
        .map(|_| Account::new(trimmed))
        .map_err(|_| TransferError::InvalidRecipient(address.to_string()))
}

/// Format a unix timestamp (seconds) the way a browser's `toLocaleString` does for en-US.
pub fn format_timestamp<Tz>(seconds: u64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let millis = i64::try_from(seconds).unwrap_or(i64::MAX / 1000).saturating_mul(1000);
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(utc) => utc
            .with_timezone(tz)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string(),
        None => String::from("Invalid Date"),
    }
}

// =============================================================================
// Send Form
// =============================================================================

/// One field of the send form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    AddressTo,
    Amount,
    Keyword,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::AddressTo,
        FormField::Amount,
        FormField::Keyword,
        FormField::Message,
    ];

    /// Field name as used by the web form.
    pub fn name(&self) -> &'static str {
        match self {
            FormField::AddressTo => "addressTo",
            FormField::Amount => "amount",
            FormField::Keyword => "keyword",
            FormField::Message => "message",
        }
    }

    /// Input placeholder.
    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::AddressTo => "Address To",
            FormField::Amount => "Amount (ETH)",
            FormField::Keyword => "Keyword (Gif)",
            FormField::Message => "Enter Message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Draft values of the send form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    pub address_to: String,
    pub amount: String,
    pub keyword: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::AddressTo => &self.address_to,
            FormField::Amount => &self.amount,
            FormField::Keyword => &self.keyword,
            FormField::Message => &self.message,
        }
    }

    /// Replace exactly one field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::AddressTo => &mut self.address_to,
            FormField::Amount => &mut self.amount,
            FormField::Keyword => &mut self.keyword,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// First field left blank, if any.
    pub fn first_missing(&self) -> Option<FormField> {
        FormField::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(amount: U256, timestamp: u64) -> RawTransfer {
        RawTransfer {
            sender: "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".into(),
            receiver: "0x70997970C51812dc3A010C7d01b50e0d17dc79C8".into(),
            amount,
            message: "rent".into(),
            timestamp,
            keyword: "house".into(),
        }
    }

    #[test]
    fn test_parse_amount() {
        let wei = parse_amount("1.5").unwrap();
        assert_eq!(wei, U256::from(1_500_000_000_000_000_000u128));
        assert_eq!(parse_amount(" 0.01 ").unwrap(), U256::from(10_000_000_000_000_000u128));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        for bad in ["", "   ", "abc", "1.2.3", "-1"] {
            assert_eq!(
                parse_amount(bad),
                Err(TransferError::InvalidAmount(bad.to_string())),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_parse_recipient() {
        assert_eq!(
            parse_recipient(" 0x70997970C51812dc3A010C7d01b50e0d17dc79C8 "),
            Ok(Account::new("0x70997970C51812dc3A010C7d01b50e0d17dc79C8"))
        );
        assert_eq!(
            parse_recipient("bob.eth"),
            Err(TransferError::InvalidRecipient("bob.eth".into()))
        );
        assert!(parse_recipient("0x1234").is_err());
    }

    #[test]
    fn test_wei_to_ether() {
        assert_eq!(wei_to_ether(U256::from(1_500_000_000_000_000_000u128)), 1.5);
        assert_eq!(wei_to_ether(U256::ZERO), 0.0);
        assert_eq!(wei_to_ether(U256::from(1u64)), 1e-18);
    }

    #[test]
    fn test_record_from_raw() {
        let record = TransferRecord::from_raw_in(
            raw(U256::from(250_000_000_000_000_000u128), 1_650_000_000),
            &Utc,
        );
        assert_eq!(record.amount, 0.25);
        assert_eq!(record.timestamp, "4/15/2022, 5:20:00 AM");
        assert_eq!(record.keyword, "house");
        assert_eq!(record.address_to.short(), "0x7099...79C8");
    }

    #[test]
    fn test_shorten_address() {
        assert_eq!(shorten_address("0x5FbDB2315678afecb367f032d93F642f64180aa3"), "0x5FbD...0aa3");
        assert_eq!(shorten_address("0x1234"), "0x1234");
    }

    #[test]
    fn test_form_set_replaces_one_field() {
        let mut form = FormFields::default();
        form.set(FormField::Amount, "0.1");
        form.set(FormField::Message, "hello");
        form.set(FormField::Amount, "0.2");

        assert_eq!(form.amount, "0.2");
        assert_eq!(form.message, "hello");
        assert_eq!(form.address_to, "");
        assert_eq!(form.first_missing(), Some(FormField::AddressTo));
    }
}
