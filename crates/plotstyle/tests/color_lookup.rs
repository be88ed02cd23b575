//! Integration tests for configuring a style and looking colors up by name.

use plotstyle::{
    ColorCycle, Palette, StyleConfigurator, StyleError, StyleOptions, StyleSheet, STANDARD_NAMES,
};
use proptest::prelude::*;

fn configured(grid: bool) -> StyleConfigurator {
    let mut styles = StyleConfigurator::new(StyleOptions::paper());
    styles.configure(grid);
    styles
}

#[test]
fn test_every_palette_name_matches_cycle_position() {
    let styles = configured(true);
    let cycle = &styles.config().prop_cycle;

    for (i, name) in STANDARD_NAMES.iter().enumerate() {
        let color = styles.resolve_color(name).expect("palette name resolves");
        assert_eq!(Some(color), cycle.get(i), "{name} should be cycle color {i}");
        assert_eq!(color.to_hex().len(), 7);
    }
}

#[test]
fn test_green_is_index_two() {
    let styles = configured(true);
    assert_eq!(
        styles.resolve_color("green").unwrap(),
        styles.config().prop_cycle.get(2).unwrap()
    );
}

#[test]
fn test_teal_is_not_found() {
    let styles = configured(true);
    match styles.resolve_color("teal") {
        Err(StyleError::NotFound { name }) => assert_eq!(name, "teal"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_grid_flag_is_observable() {
    assert!(!configured(false).config().axes_grid);
    assert!(configured(true).config().axes_grid);

    let mut styles = StyleConfigurator::new(StyleOptions::paper());
    styles.configure_default();
    assert!(styles.config().axes_grid);
}

#[test]
fn test_presets_differ_only_in_their_knobs() {
    let paper = StyleOptions::paper().build(true);
    let compact = StyleOptions::compact().build(true);

    assert_eq!(paper.grid_line_width, compact.grid_line_width);
    assert_eq!(paper.text_usetex, compact.text_usetex);
    assert_eq!(paper.font_family, compact.font_family);
    assert_eq!(paper.figure_size.width, compact.figure_size.width * 2.0);
    assert_ne!(paper.font_size, compact.font_size);
    assert_eq!(paper.style_sheet, StyleSheet::SeabornWhite);
    assert_eq!(compact.style_sheet, StyleSheet::Default);
}

#[test]
fn test_primary_palette_short_names() {
    let styles = configured(true).with_palette(Palette::primary()).unwrap();
    assert_eq!(styles.resolve_color("b").unwrap().to_hex(), "#1f77b4");
    assert_eq!(styles.resolve_color("o").unwrap().to_hex(), "#ff7f0e");
    assert!(matches!(
        styles.resolve_color("magenta"),
        Err(StyleError::NotFound { .. })
    ));
}

#[test]
fn test_palette_tracks_custom_cycle_from_yaml() {
    let yaml = "style_sheet: seaborn-whitegrid\nprop_cycle: ['#e41a1c', '#377eb8', '#4daf4a']\n";
    let options = StyleOptions::from_yaml_str(yaml).unwrap();
    let mut styles = StyleConfigurator::new(options);
    styles.configure(true);

    assert_eq!(styles.resolve_color("orange").unwrap().to_hex(), "#377eb8");
    assert!(matches!(
        styles.resolve_color("purple"),
        Err(StyleError::CycleExhausted { index: 4, len: 3, .. })
    ));
}

proptest! {
    #[test]
    fn prop_resolve_is_idempotent(index in 0usize..STANDARD_NAMES.len(), grid in any::<bool>()) {
        let styles = configured(grid);
        let name = STANDARD_NAMES[index];
        prop_assert_eq!(
            styles.resolve_color(name).unwrap(),
            styles.resolve_color(name).unwrap()
        );
    }

    #[test]
    fn prop_names_outside_palette_are_not_found(name in "[a-z]{1,12}") {
        prop_assume!(!STANDARD_NAMES.contains(&name.as_str()));
        let palette = Palette::standard();
        let result = palette.resolve(&name, &ColorCycle::tab10());
        let is_not_found = matches!(result, Err(StyleError::NotFound { .. }));
        prop_assert!(is_not_found);
    }
}

#[test]
fn test_out_of_range_options_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("style.yaml");
    std::fs::write(&path, "figure_scale: -2\nfont_size: .nan\n").unwrap();

    match StyleOptions::from_path(&path) {
        Err(StyleError::InvalidOption { field, .. }) => assert_eq!(field, "font_size"),
        other => panic!("expected InvalidOption, got {other:?}"),
    }
}

#[test]
fn test_named_cycle_colors_resolve_by_position() {
    let options = StyleOptions::from_yaml_str("prop_cycle: [black, 'tab:red', '#00ff0080']\n").unwrap();
    let mut styles = StyleConfigurator::new(options);
    styles.configure(true);

    assert_eq!(styles.resolve_color("blue").unwrap().to_hex(), "#000000");
    assert_eq!(styles.resolve_color("orange").unwrap().to_hex(), "#d62728");
    assert_eq!(styles.resolve_color("green").unwrap().to_hex(), "#00ff00");
}
