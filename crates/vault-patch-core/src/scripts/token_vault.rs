use crate::scripts::{stable_accounts, LLTY_MINT_ENTRY, TOKEN_VAULT_ENTRY};
use crate::types::{Occurrence, Patch, PatchSet, Step};

pub const SET_NAME: &str = "add-token-vault";

pub const HELPER_NAME: &str = "getTokenVaultPDA";

pub const HELPER_ANCHOR: &str = "export const buildSOLPurchaseTransaction";

/// PDA helper, seeds `["token_vault", authority]`.
pub const VAULT_HELPER: &str = r#"
/**
 * Get Token Vault PDA
 * Seeds: ["token_vault", authority]
 */
export const getTokenVaultPDA = (authority: PublicKey): [PublicKey, number] => {
  return PublicKey.findProgramAddressSync(
    [Buffer.from('token_vault'), authority.toBuffer()],
    BLOCKCHAIN_CONFIG.programId
  );
};
"#;

const VAULT_DERIVATION: &str = "    const [tokenVaultPda] = getTokenVaultPDA(authority);";

const BUYER_AND_AUTHORITY: &str = "    const [buyerDataPda] = getBuyerDataPDA(userPublicKey);
    const [presaleAuthorityPda] = getPresaleAuthorityPDA(authority);";

const SOL_PRESALE_VAULT: &str = "    const [presaleVaultPda] = getPresaleVaultPDA(authority);";

const USDC_VAULT_COMMENT: &str = r#"    // USDC vault uses different seed: "presale_usdc_vault""#;

const USDT_VAULT_COMMENT: &str = "    // USDT vault
    const [usdtVaultPda] = getUsdtVaultPDA(authority);";

const COUNT_LOG_OLD: &str = "console.log('✅ All 13 accounts prepared";
const COUNT_LOG_NEW: &str = "console.log('✅ All 14 accounts prepared";

fn sol_derivations(with_vault: bool) -> String {
    let mut block = format!("{}\n{}", BUYER_AND_AUTHORITY, SOL_PRESALE_VAULT);
    if with_vault {
        block.push('\n');
        block.push_str(VAULT_DERIVATION);
    }
    block
}

/// Buyer/authority derivations followed by a blank line and `tail`.
fn stable_derivations(tail: &str, with_vault: bool) -> String {
    if with_vault {
        format!("{}\n{}\n\n{}", BUYER_AND_AUTHORITY, VAULT_DERIVATION, tail)
    } else {
        format!("{}\n\n{}", BUYER_AND_AUTHORITY, tail)
    }
}

fn sol_accounts_old() -> String {
    format!(
        "      // 8. presale_token_mint (LLTY mint)\n{}\n\n      // 9. user (mut, signer, pays SOL)",
        LLTY_MINT_ENTRY
    )
}

fn sol_accounts_new() -> String {
    format!(
        "      // 8. presale_token_mint (LLTY mint)\n{}\n\n      // 9. token_vault (mut, source of LLTY tokens)\n{}\n\n      // 10. user (mut, signer, pays SOL)",
        LLTY_MINT_ENTRY, TOKEN_VAULT_ENTRY
    )
}

/// Adds the `getTokenVaultPDA` helper and wires `tokenVaultPda` into the
/// SOL, USDC and USDT purchase builders.
pub fn patch_set() -> PatchSet {
    PatchSet {
        name: SET_NAME.to_string(),
        steps: vec![
            Step::new(
                &format!("Adding {} helper", HELPER_NAME),
                vec![
                    Patch::insert_before(HELPER_NAME, HELPER_ANCHOR, VAULT_HELPER)
                        .warn_if_missing(),
                ],
            ),
            Step::new(
                "Updating buildSOLPurchaseTransaction",
                vec![
                    Patch::replace(
                        "SOL tokenVaultPda derivation",
                        &sol_derivations(false),
                        &sol_derivations(true),
                        Occurrence::First,
                    ),
                    Patch::replace(
                        "SOL token_vault account",
                        &sol_accounts_old(),
                        &sol_accounts_new(),
                        Occurrence::First,
                    ),
                    Patch::replace(
                        "SOL account count log",
                        COUNT_LOG_OLD,
                        COUNT_LOG_NEW,
                        Occurrence::All,
                    ),
                ],
            ),
            Step::new(
                "Updating buildUSDCPurchaseTransaction",
                vec![
                    Patch::replace(
                        "USDC tokenVaultPda derivation",
                        &stable_derivations(USDC_VAULT_COMMENT, false),
                        &stable_derivations(USDC_VAULT_COMMENT, true),
                        Occurrence::First,
                    ),
                    Patch::replace(
                        "USDC token_vault account",
                        &stable_accounts("usdcMint", false),
                        &stable_accounts("usdcMint", true),
                        Occurrence::First,
                    ),
                ],
            ),
            Step::new(
                "Updating buildUSDTPurchaseTransaction",
                vec![
                    Patch::replace(
                        "USDT tokenVaultPda derivation",
                        &stable_derivations(USDT_VAULT_COMMENT, false),
                        &stable_derivations(USDT_VAULT_COMMENT, true),
                        Occurrence::First,
                    ),
                    Patch::replace(
                        "USDT token_vault account",
                        &stable_accounts("usdtMint", false),
                        &stable_accounts("usdtMint", true),
                        Occurrence::First,
                    ),
                ],
            ),
        ],
        summary: "✅ Purchase service updated successfully!".to_string(),
    }
}
