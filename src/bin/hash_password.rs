//! Prints the bcrypt hash of a password read from stdin, for use as
//! `ADMIN_PASSWORD`.
//!
//!   echo -n 'secret' | cargo run --bin hash_password

use std::io::Read;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read password from stdin")?;
    let password = input.trim_end_matches(['\r', '\n']);
    anyhow::ensure!(!password.is_empty(), "empty password");

    let hash = faqaas::auth::hash_password(password).context("failed to hash password")?;
    println!("{hash}");
    Ok(())
}
