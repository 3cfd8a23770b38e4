//! The `search` command: linear scan over stored chains.

use std::path::PathBuf;

use anyhow::Result;

use mesh_genesis::{ask_normalized, AskOptions};
use mesh_ledger::{Chain, NetworkContext, Transaction};
use mesh_types::Address;

use crate::prompt::TerminalPrompt;

/// Options for `meshforge search`.
#[derive(Debug, clap::Args)]
pub struct SearchArgs {
    /// Path to search in.
    #[arg(long = "data-dir", alias = "data")]
    pub data_dir: Option<PathBuf>,

    /// Term to search for in the stored chains.
    #[arg(long = "term", alias = "search-term")]
    pub term: Option<String>,

    /// Chains to restrict the search to (addresses; default is all chains).
    #[arg(long = "chains", alias = "search-chains", value_delimiter = ',')]
    pub chains: Vec<String>,
}

/// One search hit: the matching record and the file it came from.
struct SearchResult {
    record: String,
    file: PathBuf,
}

/// Run the search flow.
pub fn run(args: SearchArgs, silent: bool) -> Result<()> {
    let mut prompt = TerminalPrompt;

    let data_dir = args
        .data_dir
        .unwrap_or_else(NetworkContext::default_data_dir);
    let ctx = NetworkContext::new(data_dir, "main_net", silent);

    let term = match args.term {
        Some(term) => term,
        None => ask_normalized(
            &mut prompt,
            "What term would you like to search for?",
            &AskOptions {
                default: None,
                required: true,
            },
        )?,
    };

    let chain_addresses: Vec<Address> = if args.chains.is_empty() {
        Chain::all_local_chains(&ctx)?
    } else {
        args.chains
            .iter()
            .map(|s| Address::from_hex(s))
            .collect::<Result<_, _>>()?
    };

    let mut results = Vec::new();
    for address in &chain_addresses {
        let chain = Chain::read_from_memory(&ctx, address)?;
        let file = ctx.chain_path(address);

        if address.to_string() == term {
            results.push(SearchResult {
                record: serde_json::to_string_pretty(&chain)?,
                file,
            });
            continue;
        }

        let genesis_txns = chain
            .genesis
            .as_ref()
            .map(|g| g.transactions.as_slice())
            .unwrap_or_default();
        for txn in genesis_txns.iter().chain(chain.transactions.iter()) {
            if transaction_matches(txn, &term) {
                results.push(SearchResult {
                    record: serde_json::to_string_pretty(txn)?,
                    file: file.clone(),
                });
            }
        }
    }

    if results.is_empty() {
        println!(
            "No results were found in any of {} chains matching your query for {term}.",
            chain_addresses.len()
        );
        return Ok(());
    }

    println!(
        "Found {} results in {} chains matching your query for {term}.\n",
        results.len(),
        chain_addresses.len()
    );
    for (index, result) in results.iter().enumerate() {
        println!("[{index}] {}", result.file.display());
        println!("{}\n", result.record);
    }
    Ok(())
}

fn transaction_matches(txn: &Transaction, term: &str) -> bool {
    txn.hash.to_string() == term
        || txn.sender.map(|s| s.to_string() == term).unwrap_or(false)
        || txn.recipient.to_string() == term
        || txn.payload.contains(term)
        || txn.amount.to_string().contains(term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::{Balance, Keypair};

    #[test]
    fn test_transaction_matching() {
        let recipient = Keypair::generate().address();
        let txn = Transaction::genesis_allocation(0, recipient, Balance::from_coins(42));

        assert!(transaction_matches(&txn, &recipient.to_string()));
        assert!(transaction_matches(&txn, &txn.hash.to_string()));
        assert!(transaction_matches(&txn, "genesis"));
        assert!(transaction_matches(&txn, "42."));
        assert!(!transaction_matches(&txn, "no-such-term"));
    }
}
