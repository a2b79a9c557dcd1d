//! Demonstration scenario for the address book.
//!
//! Builds a small book, edits and queries it, and writes each step to `out`.
//! The binary runs this against stdout; tests run it against a buffer.
//!
//! The book lists contacts sorted by name, so Jane is printed before John
//! even though John is added first. Likewise John's edited number is printed
//! after his untouched one, because an edit appends the new number.

use crate::book::AddressBook;
use crate::config::Config;
use crate::models::Record;
use anyhow::{Context, Result};
use std::io::Write;
use tracing::{info, instrument};

/// Run the demonstration scenario, writing its output to `out`.
#[instrument(skip_all, fields(policy = ?config.duplicate_policy))]
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<AddressBook> {
    let mut book = AddressBook::new();

    let mut john = Record::new("John")?;
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    book.add_with_policy(john, config.duplicate_policy)?;

    let mut jane = Record::new("Jane")?;
    jane.add_phone("9876543210")?;
    book.add_with_policy(jane, config.duplicate_policy)?;

    writeln!(out, "Address Book:")?;
    writeln!(out, "{}", book)?;

    let john = book.find_mut("John").context("John is missing from the book")?;
    john.edit_phone("1234567890", "1112223333")?;

    writeln!(out, "\nAfter editing John's phone:")?;
    writeln!(out, "{}", john)?;

    match john.find_phone("5555555555") {
        Some(phone) => writeln!(out, "{}: {}", john.name(), phone)?,
        None => writeln!(out, "{}: not found", john.name())?,
    }

    if let Err(e) = john.edit_phone("5555555555", "invalid_phone") {
        info!(error = %e, "Rejected invalid replacement");
        writeln!(out, "\nAttempt to replace with invalid phone:")?;
        writeln!(out, "{}", e)?;
    }

    book.delete("Jane");

    writeln!(out, "\nAfter deleting Jane:")?;
    writeln!(out, "{}", book)?;

    Ok(book)
}
