use std::env;
use std::path::PathBuf;

// PNGs to recolor (relative to images/AppIcon/)
pub const ICON_PNGS: &[&str] = &[
    // Root-level cursor and dollar/symbol PNGs
    "cursor.png",
    "cursor@2x.png",
    "dollar.png",
    "dollar@2x.png",
    // Release .icon assets
    "iTerm2 App Icon for Release.icon/Assets/cursor@2x 4.png",
    "iTerm2 App Icon for Release.icon/Assets/dollar@2x 2.png",
    // Beta .icon assets
    "iTerm2 App Icon for Beta.icon/Assets/cursor@2x 4.png",
    "iTerm2 App Icon for Beta.icon/Assets/b.png",
    // Nightly .icon assets
    "iTerm2 App Icon for Nightly.icon/Assets/cursor@2x 4.png",
    "iTerm2 App Icon for Nightly.icon/Assets/dollar@2x 2.png",
    "iTerm2 App Icon for Nightly.icon/Assets/a.png",
];

// Composite preview images to also recolor
pub const COMPOSITE_PNGS: &[&str] = &["release.png", "beta.png", "nightly.png"];

/// Icons first, composites last, order fixed.
pub fn all_pngs() -> Vec<&'static str> {
    ICON_PNGS.iter().chain(COMPOSITE_PNGS).copied().collect()
}

/// The icon asset directory, two levels above the binary's own location.
pub fn appicon_dir() -> PathBuf {
    let root = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().and_then(|p| p.parent()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));

    root.join("images").join("AppIcon")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composites_follow_icons_in_order() {
        let all = all_pngs();
        assert_eq!(all.len(), ICON_PNGS.len() + COMPOSITE_PNGS.len());
        assert_eq!(&all[..ICON_PNGS.len()], ICON_PNGS);
        assert_eq!(&all[ICON_PNGS.len()..], COMPOSITE_PNGS);
    }

    #[test]
    fn appicon_dir_points_at_the_icon_assets() {
        assert!(appicon_dir().ends_with("images/AppIcon"));
    }
}
