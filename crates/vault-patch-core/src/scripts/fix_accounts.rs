use crate::scripts::{stable_accounts, LLTY_MINT_ENTRY, TOKEN_VAULT_ENTRY, USER_ENTRY};
use crate::types::{Occurrence, Patch, PatchSet, Step};

pub const SET_NAME: &str = "fix-accounts";

fn sol_accounts_old() -> String {
    format!(
        "      // 8. presale_token_mint (LLTY mint)\n{}\n\n      // 9. user (mut, signer, pays SOL)\n{}",
        LLTY_MINT_ENTRY, USER_ENTRY
    )
}

fn sol_accounts_new() -> String {
    format!(
        "      // 8. presale_token_mint (LLTY mint)\n{}\n\n      // 9. token_vault (mut, source of LLTY tokens)\n{}\n\n      // 10. user (mut, signer, pays SOL)\n{}",
        LLTY_MINT_ENTRY, TOKEN_VAULT_ENTRY, USER_ENTRY
    )
}

/// Inserts the token vault into the SOL, USDC and USDT account arrays.
pub fn patch_set() -> PatchSet {
    PatchSet {
        name: SET_NAME.to_string(),
        steps: vec![
            Step::new(
                "Fixing SOL purchase accounts",
                vec![Patch::replace(
                    "SOL token_vault account",
                    &sol_accounts_old(),
                    &sol_accounts_new(),
                    Occurrence::All,
                )],
            ),
            Step::new(
                "Fixing USDC purchase accounts",
                vec![Patch::replace(
                    "USDC token_vault account",
                    &stable_accounts("usdcMint", false),
                    &stable_accounts("usdcMint", true),
                    Occurrence::All,
                )],
            ),
            Step::new(
                "Fixing USDT purchase accounts",
                vec![Patch::replace(
                    "USDT token_vault account",
                    &stable_accounts("usdtMint", false),
                    &stable_accounts("usdtMint", true),
                    Occurrence::All,
                )],
            ),
        ],
        summary: "✅ Fixed all three account arrays".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::apply_patch_set;
    use crate::types::PatchOutcome;

    #[test]
    fn test_sol_block_renumbers_user() {
        let src = format!("    const keys = [\n{}\n    ];\n", sol_accounts_old());
        let (out, report) = apply_patch_set(&src, &patch_set());

        assert!(out.contains("      // 9. token_vault (mut, source of LLTY tokens)"));
        assert!(out.contains("      // 10. user (mut, signer, pays SOL)"));
        assert!(!out.contains("// 9. user"));
        assert_eq!(
            report.steps[0].patches[0].outcome,
            PatchOutcome::Applied { replacements: 1 }
        );
        assert_eq!(report.steps[1].patches[0].outcome, PatchOutcome::NotFound);
    }

    #[test]
    fn test_replaces_every_matching_usdc_block() {
        let block = stable_accounts("usdcMint", false);
        let src = format!("{}\n// other builder\n{}\n", block, block);
        let (out, report) = apply_patch_set(&src, &patch_set());

        assert_eq!(out.matches("tokenVaultPda").count(), 2);
        assert_eq!(
            report.steps[1].patches[0].outcome,
            PatchOutcome::Applied { replacements: 2 }
        );
    }
}
