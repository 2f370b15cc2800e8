use std::path::Path;

use anyhow::Context;
use pattern_canvas::prelude::*;

/// Reads and validates a RON [`Settings`] file.
pub fn load_settings(path: impl AsRef<Path>) -> anyhow::Result<Settings> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading settings {}", path.display()))?;
    let settings: Settings =
        ron::from_str(&text).with_context(|| format!("parsing settings {}", path.display()))?;
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled(name: &str) -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("settings")
            .join(name)
    }

    #[test]
    fn bundled_settings_load() {
        let rose = load_settings(bundled("lasers-rose.ron")).unwrap();
        assert_eq!(rose.shape, Shape::Lines);
        assert_eq!(rose.method().kind, MethodKind::Rose);

        let spiral = load_settings(bundled("bubbles-spiral.ron")).unwrap();
        assert_eq!(spiral.count, 1200);
        match spiral.method_config() {
            MethodConfig::Spiral(s) => assert!((s.rotation - 0.25).abs() < 1e-12),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_settings(bundled("does-not-exist.ron")).is_err());
    }
}
