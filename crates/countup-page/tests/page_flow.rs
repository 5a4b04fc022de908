use countup_page::{
    stats::{SLOT_EFFECTIVENESS, SLOT_MAIN_PRICE, SLOT_YEARS},
    MemoryStore, PageBehavior, PageContent, Section, Theme,
};

fn content() -> PageContent {
    PageContent {
        main_price: 1299,
        brand_ranges: vec![("pricing.brand.premium".to_string(), "5000-10000".to_string())],
    }
}

/// Tick at 16ms until every run completes.
fn settle(page: &mut PageBehavior) {
    for _ in 0..1000 {
        page.tick(16.0).unwrap();
        if !page.animating() {
            return;
        }
    }
    panic!("page never settled");
}

#[test]
fn nothing_renders_before_visibility() {
    let store = MemoryStore::new();
    let mut page = PageBehavior::new(&content(), &store).unwrap();

    page.tick(16.0).unwrap();
    assert!(page.display(SLOT_EFFECTIVENESS).is_none());
    assert!(!page.animating());
}

#[test]
fn hero_section_settles_at_exact_targets() {
    let store = MemoryStore::new();
    let mut page = PageBehavior::new(&content(), &store).unwrap();

    page.section_visible(Section::HeroStats);
    settle(&mut page);

    assert_eq!(page.display(SLOT_EFFECTIVENESS), Some("99"));
    assert_eq!(page.display(SLOT_YEARS), Some("3"));
    // Pricing never became visible, so its slots stay untouched.
    assert!(page.display(SLOT_MAIN_PRICE).is_none());
}

#[test]
fn pricing_section_renders_currency_and_ranges() {
    let store = MemoryStore::new();
    let mut page = PageBehavior::new(&content(), &store).unwrap();

    page.section_visible(Section::Pricing);
    settle(&mut page);

    assert_eq!(page.display(SLOT_MAIN_PRICE), Some("$1,299 ARS"));
    assert_eq!(
        page.display("pricing.brand.premium"),
        Some("$5,000 - $10,000")
    );
}

#[test]
fn repeated_visibility_does_not_restart_counters() {
    let store = MemoryStore::new();
    let mut page = PageBehavior::new(&content(), &store).unwrap();

    page.section_visible(Section::HeroStats);
    settle(&mut page);

    // Scrolling the section back into view fires nothing.
    page.section_visible(Section::HeroStats);
    page.tick(16.0).unwrap();
    assert!(!page.animating());
    assert_eq!(page.display(SLOT_EFFECTIVENESS), Some("99"));
}

#[test]
fn malformed_brand_range_fails_at_construction() {
    let store = MemoryStore::new();
    let bad = PageContent {
        main_price: 1299,
        brand_ranges: vec![("pricing.brand.broken".to_string(), "cheap".to_string())],
    };
    assert!(PageBehavior::new(&bad, &store).is_err());
}

#[test]
fn theme_flag_persists_across_pages() {
    let mut store = MemoryStore::new();
    let mut page = PageBehavior::new(&content(), &store).unwrap();
    assert_eq!(page.theme(), Theme::Light);

    assert_eq!(page.toggle_theme(&mut store), Theme::Dark);

    // A fresh page sees the stored flag.
    let page2 = PageBehavior::new(&content(), &store).unwrap();
    assert_eq!(page2.theme(), Theme::Dark);
}
