use super::*;

fn prefs_with(store: &MemoryPreferenceStore, viewport: u32) -> LayoutPreferences {
    LayoutPreferences::load(Arc::new(store.clone()), 1200, viewport)
}

#[test]
fn test_defaults_are_written_back() {
    let store = MemoryPreferenceStore::new();

    let prefs = prefs_with(&store, 800);

    assert_eq!(prefs.orientation(), Orientation::Vertical);
    assert_eq!(prefs.width(), WidthMode::Narrow);
    assert_eq!(store.get(ORIENTATION_STORE_KEY).as_deref(), Some("vertical"));
    assert_eq!(store.get(WIDTH_STORE_KEY).as_deref(), Some("narrow"));
}

#[test]
fn test_stored_choice_is_restored() {
    let store = MemoryPreferenceStore::new();
    store.set(ORIENTATION_STORE_KEY, "stacked");
    store.set(WIDTH_STORE_KEY, "wide");

    let prefs = prefs_with(&store, 800);

    assert_eq!(prefs.orientation(), Orientation::Stacked);
    assert_eq!(prefs.width(), WidthMode::Wide);
    assert_eq!(prefs.width().container_class(), Some("container-wide"));
}

#[test]
fn test_unknown_stored_values_fall_back() {
    let store = MemoryPreferenceStore::new();
    store.set(ORIENTATION_STORE_KEY, "diagonal");
    store.set(WIDTH_STORE_KEY, "huge");

    let prefs = prefs_with(&store, 1600);

    assert_eq!(prefs.orientation(), Orientation::Vertical);
    assert_eq!(prefs.width(), WidthMode::Narrow);
    assert_eq!(store.get(ORIENTATION_STORE_KEY).as_deref(), Some("vertical"));
}

#[test]
fn test_horizontal_gated_by_viewport() {
    let store = MemoryPreferenceStore::new();
    let mut prefs = prefs_with(&store, 1000);

    assert_eq!(
        prefs.available_orientations(),
        vec![Orientation::Vertical, Orientation::Stacked]
    );
    assert_eq!(prefs.set_orientation("horizontal"), Orientation::Vertical);

    prefs.set_viewport_width(1200);
    assert_eq!(prefs.set_orientation("Horizontal"), Orientation::Horizontal);
    assert_eq!(store.get(ORIENTATION_STORE_KEY).as_deref(), Some("horizontal"));
}

#[test]
fn test_shrinking_viewport_drops_horizontal() {
    let store = MemoryPreferenceStore::new();
    store.set(ORIENTATION_STORE_KEY, "horizontal");
    let mut prefs = prefs_with(&store, 1920);
    assert_eq!(prefs.orientation(), Orientation::Horizontal);

    assert_eq!(prefs.set_viewport_width(900), Orientation::Vertical);
}

#[test]
fn test_toggle_states_mark_single_active_button() {
    let store = MemoryPreferenceStore::new();
    let mut prefs = prefs_with(&store, 1920);
    prefs.set_orientation("stacked");
    prefs.set_width("wide");

    let toggles = prefs.orientation_toggles();
    assert_eq!(toggles.len(), 3);
    assert_eq!(toggles.iter().filter(|t| t.active).count(), 1);
    assert!(toggles[1].active);

    let widths = prefs.width_toggles();
    assert!(!widths[0].active);
    assert!(widths[1].active);
}
