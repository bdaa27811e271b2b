use super::*;

#[test]
fn normalization_unifies_separators() {
    assert_eq!(
        normalize_rel_path("minion\\frame.png").unwrap(),
        "minion/frame.png"
    );
    assert_eq!(
        normalize_rel_path("./fonts//belwe.ttf").unwrap(),
        "fonts/belwe.ttf"
    );
}

#[test]
fn normalization_rejects_escapes() {
    assert!(normalize_rel_path("/etc/passwd").is_err());
    assert!(normalize_rel_path("..\\secret.png").is_err());
    assert!(normalize_rel_path("icons/../../secret.png").is_err());
    assert!(normalize_rel_path("").is_err());
    assert!(normalize_rel_path("./.").is_err());
}

#[test]
fn images_are_memoized_across_spellings() {
    let dir = std::env::temp_dir().join(format!(
        "cardwright-store-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .subsec_nanos()
    ));
    std::fs::create_dir_all(dir.join("frames")).unwrap();
    image::RgbaImage::from_pixel(2, 2, image::Rgba([0, 255, 0, 255]))
        .save(dir.join("frames/base.png"))
        .unwrap();

    let mut library = AssetLibrary::new(&dir);
    let first = library.image("frames/base.png").unwrap();
    let second = library.image("frames\\base.png").unwrap();
    assert!(Arc::ptr_eq(&first.rgba8_premul, &second.rgba8_premul));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_assets_report_their_path() {
    let mut library = AssetLibrary::new("/nonexistent-root");
    let err = library.image("frames/base.png").unwrap_err();
    assert!(err.to_string().contains("frames/base.png"));
}
