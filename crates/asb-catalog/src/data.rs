//! Built-in attack-step data set
//!
//! The nine attack-chain steps and their variant catalogs, declared in
//! priority order (required steps first, then the optional ones). This is
//! pure data; behavior lives in [`crate::StepCatalog`].

use once_cell::sync::Lazy;

use crate::catalog::{CatalogBuilder, StepCatalog};
use crate::step::StepDefinition;

/// Step keys of the built-in catalog
///
/// Keys are camelCase to match the document schema the Scenario Store
/// collaborator persists.
pub mod keys {
    /// Initial access vector
    pub const INITIAL_ACCESS: &str = "initialAccess";
    /// Post-breach operations
    pub const OPERATION_AFTER_INITIAL_ACCESS: &str = "operationAfterInitialAccess";
    /// Credential harvesting
    pub const CREDENTIAL_HARVESTING: &str = "credentialHarvesting";
    /// Command & control
    pub const ATTACKER_CONTROL: &str = "attackerControl";
    /// Data exfiltration
    pub const DATA_EXFILTRATION: &str = "dataExfiltration";
    /// Final impact
    pub const FINAL_PAYLOAD: &str = "finalPayload";
    /// Attack cleanup
    pub const POST_ATTACK_CLEANUP: &str = "postAttackCleanup";
    /// Persistence mechanism
    pub const PERSISTENCE: &str = "persistence";
    /// Lateral movement
    pub const LATERAL_MOVEMENT: &str = "lateralMovement";
}

const INITIAL_ACCESS_VARIANTS: &[&str] = &[
    "Phishing email/message with mega link (direct exe download)",
    "Phishing email/message with mega link (direct zip download)",
    "Phishing email/message with mega link (direct rar download(without password))",
    "Phishing email/message with mega link (direct rar download(with password))",
    "Phishing email/message with mega link (bound to pdf)",
    "Phishing email/message with drive link (direct exe download)",
    "Phishing email/message with drive link (direct zip download)",
    "Phishing email/message with drive link (direct rar download(without password))",
    "Phishing email/message with drive link (direct rar download(with password))",
    "Phishing email/message with drive link (bound to pdf)",
    "Phishing whatsapp/message with drive link (direct exe download)",
    "Phishing whatsapp/message with drive link (direct zip download)",
    "Phishing whatsapp/message with drive link (direct rar download(without password))",
    "Phishing whatsapp/message with drive link (direct rar download(with password))",
    "Phishing whatsapp/message with drive link (bound to pdf)",
    "Phishing whatsapp/message with fake installer (game update)",
    "Phishing messenger/message with drive link (direct exe download)",
    "Phishing messenger/message with drive link (direct zip download)",
    "Phishing messenger/message with drive link (direct rar download(without password))",
    "Phishing messenger/message with drive link (direct rar download(with password))",
    "Phishing messenger/message with drive link (bound to pdf)",
    "Phishing telegram/message with drive link (direct exe download)",
    "Phishing telegram/message with drive link (direct zip download)",
    "Phishing telegram/message with drive link (direct rar download(without password))",
    "Phishing telegram/message with drive link (direct rar download(with password))",
    "Phishing telegram/message with drive link (bound to pdf)",
    "Phishing in telegram through direct exe download",
    "Phishing in telegram through direct zip download",
    "Phishing in telegram through direct rar download(without password)",
    "Phishing in telegram through direct rar download(with password)",
    "Phishing in telegram through link bound to image",
    "Phishing in telegram through link bound to pdf",
    "Payload from public GitHub repo by cloning (click exe directly)",
    "Payload from public GitHub repo by cloning (click to a pdf file)",
    "Payload from public GitHub repo by cloning (Run the project)",
    "Payload from public GitHub repo by downloading (click exe directly)",
    "Payload from public GitHub repo by downloading (click to a pdf file)",
    "Payload from public GitHub repo by downloading (Run the project)",
    "Watering hole attack on compromised website",
    "USB drop attack with malicious payload",
];

static ATTACK_CATALOG: Lazy<StepCatalog> = Lazy::new(|| {
    CatalogBuilder::new()
        .step(
            step(
                keys::INITIAL_ACCESS,
                "Initial Access Vector",
                true,
                INITIAL_ACCESS_VARIANTS,
            )
            .with_description("How the attacker gains first access to the system"),
        )
        .step(
            step(
                keys::OPERATION_AFTER_INITIAL_ACCESS,
                "Post-Breach Operations",
                true,
                &["Delete files", "Edit files"],
            )
            .with_description("Immediate actions after gaining access"),
        )
        .step(
            step(
                keys::CREDENTIAL_HARVESTING,
                "Credential Harvesting",
                true,
                &["RAT + WebBrowserPassView credential extraction"],
            )
            .with_description("Methods to extract user credentials"),
        )
        .step(
            step(
                keys::ATTACKER_CONTROL,
                "Command & Control",
                true,
                &[
                    "Immediate control after compromise (RAT activation)",
                    "Delayed control after dormancy period (scheduled activation, trigger-based)",
                ],
            )
            .with_description("How the attacker maintains control"),
        )
        .step(
            step(
                keys::DATA_EXFILTRATION,
                "Data Exfiltration",
                true,
                &[
                    "USB exfiltration",
                    "Google Drive exfiltration",
                    "RAT server exfiltration",
                    "OneDrive exfiltration",
                    "GitHub exfiltration",
                ],
            )
            .with_description("How sensitive data is stolen"),
        )
        .step(
            step(
                keys::FINAL_PAYLOAD,
                "Final Impact",
                true,
                &[
                    "Ransomware (using 7zip to compress files/folders before encryption)",
                    "Ransomware (full disk encryption)",
                ],
            )
            .with_description("The ultimate goal of the attack"),
        )
        .step(
            step(
                keys::POST_ATTACK_CLEANUP,
                "Attack Cleanup",
                false,
                &["Leaving traces", "Leaving no trace (stealth cleanup)"],
            )
            .with_description("How traces are handled"),
        )
        .step(
            step(
                keys::PERSISTENCE,
                "Persistence Mechanism",
                true,
                &[
                    "Bootloader-based payload persistence",
                    "Task Scheduler payload persistence",
                ],
            )
            .with_description("Methods to maintain access across reboots"),
        )
        .step(
            step(
                keys::LATERAL_MOVEMENT,
                "Lateral Movement",
                false,
                &["Windows SMB lateral movement", "Internal spear phishing"],
            )
            .with_description("Spreading to other systems"),
        )
        .anchor(keys::INITIAL_ACCESS)
        .control(keys::ATTACKER_CONTROL)
        .alternative_step(keys::CREDENTIAL_HARVESTING)
        .alternative_step(keys::DATA_EXFILTRATION)
        .alternative_step(keys::FINAL_PAYLOAD)
        .build()
        .expect("built-in attack catalog is well-formed")
});

fn step(key: &str, label: &str, required: bool, variants: &[&str]) -> StepDefinition {
    // Static data validated by the Lazy initializer; an invalid entry is
    // a programming error, not a runtime condition.
    StepDefinition::new(key, label, required, variants.to_vec())
        .expect("built-in step data is well-formed")
}

/// The built-in attack-step catalog
///
/// Loaded once; process-wide static configuration.
#[must_use]
pub fn attack_catalog() -> &'static StepCatalog {
    &ATTACK_CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attack_catalog_shape() {
        let catalog = attack_catalog();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.anchor().key(), keys::INITIAL_ACCESS);
        assert_eq!(catalog.control().key(), keys::ATTACKER_CONTROL);
        assert_eq!(catalog.anchor().variant_count(), 40);
        assert_eq!(catalog.required_steps().count(), 7);
        assert_eq!(catalog.optional_steps().count(), 2);
    }

    #[test]
    fn attack_catalog_alternative_steps() {
        let alt: Vec<_> = attack_catalog()
            .alternative_steps()
            .map(StepDefinition::key)
            .collect();
        assert_eq!(
            alt,
            vec![
                keys::CREDENTIAL_HARVESTING,
                keys::DATA_EXFILTRATION,
                keys::FINAL_PAYLOAD,
            ]
        );
    }

    #[test]
    fn attack_catalog_defaults() {
        let catalog = attack_catalog();
        assert_eq!(
            catalog.get(keys::ATTACKER_CONTROL).unwrap().default_variant(),
            "Immediate control after compromise (RAT activation)"
        );
        assert_eq!(
            catalog.get(keys::POST_ATTACK_CLEANUP).unwrap().default_variant(),
            "Leaving traces"
        );
    }

    #[test]
    fn attack_catalog_is_static() {
        // Same allocation on every call.
        assert!(std::ptr::eq(attack_catalog(), attack_catalog()));
    }
}
