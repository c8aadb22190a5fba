use crate::domain::ports::AssetSource;

/// Bundled resources, keyed by their path under `assets/`.
static BUNDLED: &[(&str, &[u8])] = &[(
    "data/wooden_knock.wav",
    include_bytes!("../../assets/data/wooden_knock.wav"),
)];

#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedAssets;

impl AssetSource for EmbeddedAssets {
    fn asset(&self, logical_path: &str) -> Option<&'static [u8]> {
        BUNDLED
            .iter()
            .find(|(path, _)| *path == logical_path)
            .map(|(_, data)| *data)
    }
}
