//! # Allocation Assembly
//!
//! Builds the address → initial balance table a genesis block is
//! materialized from. Two entry paths: decoding a declarative `alloc`
//! document, or interactive collection through the elicitation port. Either
//! way the first entry is the genesis/primary account and addresses are
//! unique.

use serde_json::Value;
use tracing::debug;

use mesh_ledger::NetworkContext;
use mesh_types::{Address, Balance};

use crate::errors::GenesisError;
use crate::keygen::{generate_account, make_faucet_account};
use crate::prompt::{ask_normalized, AskOptions, Prompt};

/// Cap on interactively collected additional entries. The elicitation loop
/// otherwise has no terminating condition besides a blank answer.
pub const MAX_INTERACTIVE_ENTRIES: usize = 1024;

/// One allocation: an address and its initial balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationEntry {
    /// Funded address.
    pub address: Address,
    /// Initial balance.
    pub balance: Balance,
}

/// Ordered allocation table; insertion order is discovery order and entry 0
/// is the genesis/primary account.
#[derive(Debug, Clone, Default)]
pub struct AllocationTable {
    entries: Vec<AllocationEntry>,
}

impl AllocationTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, rejecting duplicate addresses.
    pub fn push(&mut self, address: Address, balance: Balance) -> Result<(), GenesisError> {
        if self.entries.iter().any(|e| e.address == address) {
            return Err(GenesisError::DuplicateAddress(address));
        }
        self.entries.push(AllocationEntry { address, balance });
        Ok(())
    }

    /// Whether no entries have been collected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in discovery order.
    pub fn entries(&self) -> &[AllocationEntry] {
        &self.entries
    }
}

/// Decode a declarative `alloc` document: a map from address string to a
/// `{"balance": "<decimal>"}` record.
///
/// Fails without producing a partial table: any bad entry rejects the whole
/// document.
pub fn decode_alloc(value: &Value) -> Result<AllocationTable, GenesisError> {
    let object = value
        .as_object()
        .ok_or_else(|| GenesisError::MalformedAllocation("alloc is not a map".to_string()))?;

    let mut table = AllocationTable::new();
    for (key, entry) in object {
        let record = entry.as_object().ok_or_else(|| {
            GenesisError::MalformedAllocation(format!("entry for {key} is not a record"))
        })?;
        let balance_str = record
            .get("balance")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                GenesisError::MalformedAllocation(format!("entry for {key} has no balance string"))
            })?;

        let address = Address::from_hex(key)
            .map_err(|_| GenesisError::InvalidAddress(key.clone()))?;
        let balance = Balance::parse(balance_str)
            .map_err(|_| GenesisError::InvalidAmount(balance_str.to_string()))?;
        table.push(address, balance)?;
    }
    Ok(table)
}

/// Collect an allocation table interactively.
///
/// Asks for the total issuance, generates the primary account and allocates
/// it the full issuance, optionally creates a funded faucet account, then
/// collects additional address/balance pairs until a blank answer (or the
/// [`MAX_INTERACTIVE_ENTRIES`] cap).
pub fn request_alloc(
    ctx: &NetworkContext,
    prompt: &mut dyn Prompt,
) -> Result<AllocationTable, GenesisError> {
    let mut table = AllocationTable::new();

    let issuance_str = ask_normalized(
        prompt,
        "How many coins would you like to issue?",
        &AskOptions::with_default("21000000"),
    )?;
    let issuance = Balance::parse(&issuance_str)
        .map_err(|_| GenesisError::InvalidAmount(issuance_str.clone()))?;

    let primary = generate_account(ctx)?;
    table.push(primary.address(), issuance)?;
    debug!(address = %primary.address(), "primary account allocated full issuance");

    let faucet_answer = ask_normalized(
        prompt,
        "Would you like to enable the faucet?",
        &AskOptions::with_default("true"),
    )?;
    let enable_faucet: bool = faucet_answer
        .parse()
        .map_err(|_| GenesisError::NumericParse(faucet_answer.clone()))?;

    if enable_faucet {
        let faucet = make_faucet_account(ctx)?;
        let amount_str = ask_normalized(
            prompt,
            "How many coins would you like to allocate to the faucet?",
            &AskOptions::with_default("100"),
        )?;
        let amount = Balance::parse(&amount_str)
            .map_err(|_| GenesisError::InvalidAmount(amount_str.clone()))?;
        table.push(faucet.address(), amount)?;
    }

    for collected in 0.. {
        let question = if collected == 0 {
            "Would you like to add a genesis address (optional, press enter to skip)?"
        } else {
            "Would you like to add another genesis address (optional, press enter to skip)?"
        };
        let answer = ask_normalized(prompt, question, &AskOptions::optional())?;
        if answer.is_empty() {
            break;
        }
        // A blank answer past the cap still terminates cleanly; only a
        // further entry overflows.
        if collected == MAX_INTERACTIVE_ENTRIES {
            return Err(GenesisError::AllocationFull);
        }

        let address = Address::from_hex(&answer)
            .map_err(|_| GenesisError::InvalidAddress(answer.clone()))?;
        let balance_str = ask_normalized(
            prompt,
            "How many coins would you like to give to this address?",
            &AskOptions::with_default("0"),
        )?;
        let balance = Balance::parse(&balance_str)
            .map_err(|_| GenesisError::InvalidAmount(balance_str.clone()))?;
        table.push(address, balance)?;
    }

    Ok(table)
}
