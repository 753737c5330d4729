//! Handler for the `contacts` command.

use anyhow::Result;

use crate::cli::ContactsArgs;
use crate::cli::config::Config;
use crate::cli::output::{ContactListing, OutputFormat};

/// List the contacts from the config file.
pub fn handle_contacts(args: &ContactsArgs, config: &Config) -> Result<()> {
    match args.format {
        OutputFormat::Human => {
            if config.contacts.is_empty() {
                println!("No contacts configured.");
                println!();
                println!("Add contacts to your config file (~/.config/buddynotes/config.toml):");
                println!();
                println!("  [[contacts]]");
                println!("  nick = \"alice\"");
                println!("  protocol = \"jabber\"");
                println!("  account = \"me@example.com\"");
                println!("  handle = \"alice@example.com\"");
            } else {
                for contact in &config.contacts {
                    let marker = if contact.connected { "" } else { " (offline)" };
                    println!(
                        "{}{}: {} via {} ({})",
                        contact.nick, marker, contact.handle, contact.account, contact.protocol
                    );
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<ContactListing> = config
                .contacts
                .iter()
                .map(|c| ContactListing {
                    nick: c.nick.clone(),
                    protocol: c.protocol.clone(),
                    account: c.account.clone(),
                    handle: c.handle.clone(),
                    connected: c.connected,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
