use crate::error::ThemeError;
use crate::utils::{ cx, ResolvedTheme, ThemePreference, ThemeState };

#[test]
fn test_preference_parses_known_values() {
    assert_eq!("light".parse::<ThemePreference>(), Ok(ThemePreference::Light));
    assert_eq!(" Dark ".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
    assert_eq!("SYSTEM".parse::<ThemePreference>(), Ok(ThemePreference::System));
}

#[test]
fn test_preference_rejects_unknown_values() {
    assert_eq!(
        "sepia".parse::<ThemePreference>(),
        Err(ThemeError::InvalidPreference("sepia".to_string()))
    );
    assert!("".parse::<ThemePreference>().is_err());
}

#[test]
fn test_preference_string_forms_match_storage_format() {
    for preference in ThemePreference::ALL {
        assert_eq!(preference.to_string(), preference.as_str());
        let json = serde_json::to_string(&preference).unwrap();
        assert_eq!(json, format!("\"{}\"", preference.as_str()));
        let back: ThemePreference = serde_json::from_str(&json).unwrap();
        assert_eq!(back, preference);
    }
}

#[test]
fn test_menu_order_and_labels() {
    let labels: Vec<_> = ThemePreference::ALL.iter().map(|p| p.label()).collect();
    assert_eq!(labels, vec!["Light", "Dark", "System"]);
    assert_eq!(ThemePreference::default(), ThemePreference::System);
}

#[test]
fn test_explicit_preferences_ignore_system_scheme() {
    for system_dark in [false, true] {
        assert_eq!(ThemeState::new(ThemePreference::Light, system_dark).resolved(), ResolvedTheme::Light);
        assert_eq!(ThemeState::new(ThemePreference::Dark, system_dark).resolved(), ResolvedTheme::Dark);
    }
}

#[test]
fn test_system_preference_follows_system_scheme() {
    let light = ThemeState::new(ThemePreference::System, false);
    let dark = ThemeState::new(ThemePreference::System, true);
    assert!(!light.is_dark());
    assert_eq!(light.color_scheme(), "light");
    assert!(dark.is_dark());
    assert_eq!(dark.color_scheme(), "dark");
}

#[test]
fn test_cx_skips_empty_fragments() {
    assert_eq!(cx(&["a b", "", "  ", " c "]), "a b c");
    assert_eq!(cx(&[]), "");
}
