//! Application Naming
//!
//! Single source of truth for product names and the display strings built
//! from them. The display strings are assembled with `concat!`, so they are
//! fixed at compile time and always follow the base names.

macro_rules! name {
    () => {
        "packwiz-installer"
    };
}

macro_rules! bootstrap_name {
    () => {
        "packwiz-installer-bootstrap"
    };
}

macro_rules! modifier {
    () => {
        "Modified by Venti_Lynn"
    };
}

/// Main application name
pub const NAME: &str = name!();

/// Bootstrap (updater) component name
pub const BOOTSTRAP_NAME: &str = bootstrap_name!();

/// Attribution suffix shown next to both names
pub const MODIFIER: &str = modifier!();

/// `NAME (MODIFIER)`, used for titles and as the HTTP user agent
pub const DISPLAY_NAME: &str = concat!(name!(), " (", modifier!(), ")");

/// `BOOTSTRAP_NAME (MODIFIER)`
pub const BOOTSTRAP_DISPLAY_NAME: &str = concat!(bootstrap_name!(), " (", modifier!(), ")");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_are_non_empty() {
        for value in [NAME, BOOTSTRAP_NAME, MODIFIER, DISPLAY_NAME, BOOTSTRAP_DISPLAY_NAME] {
            assert!(!value.is_empty());
        }
    }

    #[test]
    fn test_display_names_follow_base_names() {
        assert_eq!(DISPLAY_NAME, format!("{} ({})", NAME, MODIFIER));
        assert_eq!(BOOTSTRAP_DISPLAY_NAME, format!("{} ({})", BOOTSTRAP_NAME, MODIFIER));
    }

    #[test]
    fn test_display_name_layout() {
        assert!(DISPLAY_NAME.starts_with(NAME));
        assert_eq!(&DISPLAY_NAME[NAME.len()..NAME.len() + 2], " (");
        assert!(DISPLAY_NAME.ends_with(')'));
        assert!(!DISPLAY_NAME.ends_with(") "));
    }
}
