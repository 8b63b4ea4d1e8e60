use glassopt::io::svg::{PageOptions, SvgDrawOptions};
use glassopt::util::PackConfig;
use serde::{Deserialize, Serialize};

/// Configuration for the gopt optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct GOptConfig {
    /// Configuration of the multi-sheet packer
    #[serde(default)]
    pub pack_config: PackConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
    /// Layout of the printable cutting-guide pages
    #[serde(default)]
    pub page_options: PageOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: GOptConfig =
            serde_json::from_str(r#"{"pack_config": {"max_sheets": 3}}"#).unwrap();
        assert_eq!(config.pack_config.max_sheets, 3);
        assert_eq!(config.svg_draw_options, SvgDrawOptions::default());
        assert_eq!(config.page_options, PageOptions::default());
    }

    #[test]
    fn empty_config_is_default() {
        let config: GOptConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.pack_config, PackConfig::default());
    }
}
