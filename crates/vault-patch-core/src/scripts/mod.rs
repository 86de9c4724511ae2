//! The two built-in patch sets for the presale transaction builder.

pub mod fix_accounts;
pub mod token_vault;

/// Transaction-building module both scripts edit, relative to the project root.
pub const DEFAULT_TARGET: &str = "src/services/purchaseService.ts";

/// Account entry added to every purchase instruction.
pub(crate) const TOKEN_VAULT_ENTRY: &str =
    "      { pubkey: tokenVaultPda, isSigner: false, isWritable: true },";

pub(crate) const LLTY_MINT_ENTRY: &str =
    "      { pubkey: BLOCKCHAIN_CONFIG.lltyMint, isSigner: false, isWritable: true },";

pub(crate) const USER_ENTRY: &str =
    "      { pubkey: userPublicKey, isSigner: true, isWritable: true },";

/// Stablecoin account block: LLTY mint, stablecoin mint, then the paying user.
pub(crate) fn stable_accounts(mint_field: &str, with_vault: bool) -> String {
    let mut lines = vec![
        LLTY_MINT_ENTRY.to_string(),
        format!(
            "      {{ pubkey: BLOCKCHAIN_CONFIG.{}, isSigner: false, isWritable: false }},",
            mint_field
        ),
    ];
    if with_vault {
        lines.push(TOKEN_VAULT_ENTRY.to_string());
    }
    lines.push(USER_ENTRY.to_string());
    lines.join("\n")
}
