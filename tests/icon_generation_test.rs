use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use ico::IconDir;
use image::{GenericImageView, Rgb, RgbImage, Rgba, RgbaImage};
use pwa_icon_generator::icon_generator::{BACKGROUND, IconConfig, IconGenerator, IconKind};
use pwa_icon_generator::run;

const LOGO: Rgba<u8> = Rgba([200, 30, 30, 255]);

fn unique_temp_dir(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock error")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("pwa-icon-{tag}-{nanos}"));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn close_to(actual: Rgba<u8>, expected: Rgba<u8>, tolerance: u8) -> bool {
    actual
        .0
        .iter()
        .zip(expected.0.iter())
        .all(|(a, e)| a.abs_diff(*e) <= tolerance)
}

/// 在 `dir` 下写一张 `width × height` 的纯色 PNG Logo，返回对应配置。
fn config_with_logo(dir: &Path, width: u32, height: u32) -> IconConfig {
    let source = dir.join("logo.png");
    RgbaImage::from_pixel(width, height, LOGO)
        .save(&source)
        .expect("write logo");

    let mut config = IconConfig::default();
    config.source_path = source;
    config.output_dir = dir.join("public");
    config
}

fn png_files(config: &IconConfig) -> Vec<(String, u32)> {
    config
        .plan_variants()
        .into_iter()
        .filter(|variant| variant.kind != IconKind::Favicon)
        .map(|variant| (variant.file_name.clone(), variant.largest_size()))
        .collect()
}

#[test]
fn generates_eleven_files_with_matching_dimensions() {
    let dir = unique_temp_dir("full-run");
    let config = config_with_logo(&dir, 200, 100);

    let report = run(config.clone()).expect("generation should succeed");
    assert_eq!(report.total(), 11);
    assert_eq!(report.count_of(IconKind::Standard), 8);

    let written = std::fs::read_dir(&config.output_dir)
        .expect("read output dir")
        .count();
    assert_eq!(written, 11);

    for (file_name, size) in png_files(&config) {
        let image = image::open(config.output_dir.join(&file_name)).expect("decode png");
        assert_eq!(image.dimensions(), (size, size), "{file_name}");
    }

    assert!(config.output_dir.join("icon-192x192.png").is_file());
    assert!(config.output_dir.join("apple-touch-icon.png").is_file());
    assert!(config.output_dir.join("icon-512x512-maskable.png").is_file());

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn favicon_contains_three_ascending_opaque_frames() {
    let dir = unique_temp_dir("favicon");
    let config = config_with_logo(&dir, 200, 100);
    run(config.clone()).expect("generation should succeed");

    let file = File::open(config.output_dir.join("favicon.ico")).expect("open favicon");
    let icon_dir = IconDir::read(file).expect("read favicon");

    let sizes: Vec<(u32, u32)> = icon_dir
        .entries()
        .iter()
        .map(|entry| (entry.width(), entry.height()))
        .collect();
    assert_eq!(sizes, vec![(16, 16), (32, 32), (48, 48)]);

    for entry in icon_dir.entries() {
        let frame = entry.decode().expect("decode frame");
        assert!(frame.rgba_data().chunks(4).all(|px| px[3] == 255));

        let corner = Rgba([
            frame.rgba_data()[0],
            frame.rgba_data()[1],
            frame.rgba_data()[2],
            frame.rgba_data()[3],
        ]);
        assert!(close_to(corner, BACKGROUND, 3), "corner {:?}", corner);
    }

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn padded_border_shares_background_across_all_pngs() {
    for (tag, width, height) in [("wide", 200_u32, 100_u32), ("tall", 100, 200)] {
        let dir = unique_temp_dir(tag);
        let config = config_with_logo(&dir, width, height);
        run(config.clone()).expect("generation should succeed");

        for (file_name, size) in png_files(&config) {
            let image = image::open(config.output_dir.join(&file_name))
                .expect("decode png")
                .to_rgba8();
            let last = size - 1;

            let border_samples = if width > height {
                [(0, 0), (size / 2, 0), (size / 2, last), (last, last)]
            } else {
                [(0, 0), (0, size / 2), (last, size / 2), (last, last)]
            };

            for (x, y) in border_samples {
                let pixel = *image.get_pixel(x, y);
                assert!(
                    close_to(pixel, BACKGROUND, 3),
                    "{tag} {file_name} ({x},{y}) = {:?}",
                    pixel
                );
            }
        }

        let _ = std::fs::remove_dir_all(dir);
    }
}

#[test]
fn maskable_icon_keeps_content_inside_safe_zone() {
    let dir = unique_temp_dir("maskable");
    let config = config_with_logo(&dir, 300, 300);
    run(config.clone()).expect("generation should succeed");

    let maskable = image::open(config.output_dir.join("icon-512x512-maskable.png"))
        .expect("decode maskable")
        .to_rgba8();
    assert_eq!(maskable.dimensions(), (512, 512));

    let margin = 512 / 8;
    for (x, y, pixel) in maskable.enumerate_pixels() {
        let in_margin = x < margin || y < margin || x >= 512 - margin || y >= 512 - margin;
        if in_margin {
            assert_eq!(*pixel, BACKGROUND, "margin pixel ({x},{y})");
        }
    }

    assert!(close_to(*maskable.get_pixel(margin, margin), LOGO, 6));
    assert!(close_to(*maskable.get_pixel(256, 256), LOGO, 6));
    assert!(close_to(*maskable.get_pixel(512 - margin - 1, 512 - margin - 1), LOGO, 6));

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn missing_source_aborts_without_output() {
    let dir = unique_temp_dir("missing");
    let mut config = IconConfig::default();
    config.source_path = dir.join("assets/logo/logo.jpg");
    config.output_dir = dir.join("public");

    let err = run(config.clone()).expect_err("missing source must fail");

    assert!(err.is_missing_source());
    assert!(err.to_string().contains("logo.jpg"));
    assert!(!config.output_dir.exists());

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn invalid_config_is_rejected_before_reading_source() {
    let mut config = IconConfig::default();
    config.safe_zone_ratio = 0.0;

    assert!(IconGenerator::new(config).is_err());
}

#[test]
fn rerun_overwrites_outputs_and_leaves_unplanned_files() {
    let dir = unique_temp_dir("rerun");
    let config = config_with_logo(&dir, 120, 80);

    std::fs::create_dir_all(&config.output_dir).expect("create output dir");
    let stale = config.output_dir.join("icon-1024x1024.png");
    std::fs::write(&stale, b"stale").expect("seed stale icon");
    std::fs::write(config.output_dir.join("favicon.ico"), b"not an ico").expect("seed favicon");

    run(config.clone()).expect("first run should succeed");
    run(config.clone()).expect("second run should succeed");

    let file = File::open(config.output_dir.join("favicon.ico")).expect("open favicon");
    assert_eq!(IconDir::read(file).expect("read favicon").entries().len(), 3);

    assert!(stale.is_file());
    let written = std::fs::read_dir(&config.output_dir)
        .expect("read output dir")
        .count();
    assert_eq!(written, 12);

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn jpeg_logo_is_accepted() {
    let dir = unique_temp_dir("jpeg");
    let source = dir.join("logo.jpg");
    RgbImage::from_pixel(64, 48, Rgb([200, 30, 30]))
        .save(&source)
        .expect("write jpeg logo");

    let mut config = IconConfig::default();
    config.source_path = source;
    config.output_dir = dir.join("public");

    let report = run(config).expect("generation should succeed");
    assert_eq!(report.total(), 11);

    let _ = std::fs::remove_dir_all(dir);
}
