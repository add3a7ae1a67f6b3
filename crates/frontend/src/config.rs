use crate::routes::table::BootstrapVariant;

/// Selector of the host element the app is mounted into.
pub const MOUNT_SELECTOR: &str = "#app";

/// Bootstrap settings. Nothing is read from the environment; the values are
/// fixed at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub variant: BootstrapVariant,
    pub mount_selector: &'static str,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            variant: BootstrapVariant::Extended,
            mount_selector: MOUNT_SELECTOR,
        }
    }
}

impl AppConfig {
    pub fn with_variant(variant: BootstrapVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.mount_selector, "#app");
        assert_eq!(config.variant, BootstrapVariant::Extended);
    }

    #[test]
    fn test_with_variant_keeps_selector() {
        let config = AppConfig::with_variant(BootstrapVariant::Base);
        assert_eq!(config.variant, BootstrapVariant::Base);
        assert_eq!(config.mount_selector, MOUNT_SELECTOR);
    }
}
