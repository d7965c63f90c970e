//! Path normalization utilities
//!
//! Exported paths always use '/' as separator and are relative to the project root.

use std::path::Path;

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Derive the Markdown anchor for a relative path.
///
/// Lowercase, spaces become '-', dots are dropped, both separators become '-'.
/// Distinct paths may share an anchor; collisions are not resolved.
pub fn slugify_anchor(path: &str) -> String {
    path.to_lowercase()
        .replace(' ', "-")
        .replace('.', "")
        .replace('/', "-")
        .replace('\\', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        let path = Path::new("src/main.js");
        assert_eq!(normalize_path(path), "src/main.js");
    }

    #[test]
    fn test_normalize_path_nested() {
        let path = Path::new("src/stores/pokemonStore.js");
        assert_eq!(normalize_path(path), "src/stores/pokemonStore.js");
    }

    #[test]
    fn test_make_relative() {
        let root = Path::new("/project");
        let path = Path::new("/project/src/App.vue");
        assert_eq!(make_relative(path, root), Some("src/App.vue".to_string()));
    }

    #[test]
    fn test_make_relative_not_under_root() {
        let root = Path::new("/project");
        let path = Path::new("/other/file.js");
        assert_eq!(make_relative(path, root), None);
    }

    #[test]
    fn test_slugify_anchor() {
        assert_eq!(slugify_anchor("src/App.vue"), "src-appvue");
        assert_eq!(slugify_anchor("package.json"), "packagejson");
        assert_eq!(slugify_anchor("typed-router.d.ts"), "typed-routerdts");
        assert_eq!(
            slugify_anchor("src/utils/imageUrl.js"),
            "src-utils-imageurljs"
        );
    }

    #[test]
    fn test_slugify_anchor_spaces_and_backslashes() {
        assert_eq!(slugify_anchor("public/My Icons/a.svg.md"), "public-my-icons-asvgmd");
        assert_eq!(slugify_anchor("src\\Views\\Home.vue"), "src-views-homevue");
    }

    #[test]
    fn test_slugify_anchor_collisions_are_kept() {
        // "src/a.js" and "src/aj.s" both lose their dot
        assert_eq!(slugify_anchor("src/a.js"), slugify_anchor("src/aj.s"));
    }

    #[test]
    fn test_slugify_anchor_is_deterministic() {
        let path = "src/components/Pokemon Card.vue";
        assert_eq!(slugify_anchor(path), slugify_anchor(path));
        assert_eq!(slugify_anchor(path), "src-components-pokemon-cardvue");
    }
}
