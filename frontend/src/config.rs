//! Application configuration.
//!
//! Compiled-in settings for the Prime frontend. The contract address
//! lives in [`prime::CONTRACT_ADDRESS`].

/// Application name shown in the header and page title.
pub const APP_NAME: &str = "Prime";

/// Logo served next to `index.html`.
pub const LOGO_PATH: &str = "logo.svg";

/// Footer navigation entries.
pub const NAV_LINKS: [&str; 4] = ["Market", "Exchange", "Tutorials", "Wallets"];

/// Contact address shown in the footer.
pub const CONTACT_EMAIL: &str = "info@prime.com";

/// Block explorer used to link addresses.
pub const EXPLORER_URL: &str = "https://sepolia.etherscan.io";

/// Explorer page for an address.
pub fn explorer_address_url(address: &str) -> String {
    format!("{}/address/{}", EXPLORER_URL, address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explorer_address_url() {
        assert_eq!(
            explorer_address_url("0xabc"),
            "https://sepolia.etherscan.io/address/0xabc"
        );
    }

    #[test]
    fn test_nav_links_order() {
        assert_eq!(NAV_LINKS, ["Market", "Exchange", "Tutorials", "Wallets"]);
    }
}
