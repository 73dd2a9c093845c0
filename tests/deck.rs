mod common;

use common::*;
use figdeck::Error;
use figdeck::deck::{DeckAssembler, DeckConfig};
use figdeck::layout::LayoutError;
use std::path::Path;

fn config_for(root: &Path) -> DeckConfig {
    DeckConfig {
        input_dir: root.join("input"),
        output_dir: root.join("output"),
        deck_name: "figures".to_string(),
        ..Default::default()
    }
}

/// input/
///   a_wide/   wide.png, square.png
///   b_empty/  readme.txt
///   c_tiff/   stack.tif, photo.png
fn build_tree(root: &Path) {
    let input = root.join("input");
    for group in ["a_wide", "b_empty", "c_tiff"] {
        std::fs::create_dir_all(input.join(group)).unwrap();
    }
    write_png(&input.join("a_wide").join("wide.png"), 40, 20);
    write_png(&input.join("a_wide").join("square.png"), 16, 16);
    std::fs::write(input.join("b_empty").join("readme.txt"), "no figures").unwrap();
    write_tiff_u16(&input.join("c_tiff").join("stack.tif"), vec![10, 500, 1000, 60000]);
    write_rgb_png(&input.join("c_tiff").join("photo.png"), 8, 12);
}

#[test]
fn deck_has_one_slide_per_non_empty_folder() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    build_tree(dir.path());

    let report = DeckAssembler::from_config(config_for(dir.path()))
        .run()
        .unwrap();

    let pptx = dir.path().join("output").join("figures.pptx");
    assert_eq!(report.output, pptx);
    assert_eq!(report.slides, 3);
    assert_eq!(report.images, 4);
    assert_eq!(report.skipped_groups, vec!["b_empty".to_string()]);
    let conversion = report.conversion.unwrap();
    assert_eq!(
        conversion.converted,
        vec![dir.path().join("input").join("c_tiff").join("stack.png")]
    );

    let names = zip_entry_names(&pptx);
    for expected in [
        "[Content_Types].xml",
        "_rels/.rels",
        "ppt/presentation.xml",
        "ppt/slides/slide1.xml",
        "ppt/slides/slide2.xml",
        "ppt/slides/slide3.xml",
        "ppt/slideLayouts/slideLayout1.xml",
        "ppt/slideLayouts/slideLayout2.xml",
        "ppt/slideMasters/slideMaster1.xml",
        "ppt/theme/theme1.xml",
        "docProps/core.xml",
        "docProps/app.xml",
    ] {
        assert!(names.iter().any(|n| n == expected), "missing {expected}");
    }
    assert!(!names.iter().any(|n| n == "ppt/slides/slide4.xml"));
    let media = names.iter().filter(|n| n.starts_with("ppt/media/")).count();
    assert_eq!(media, 4);

    for name in names.iter().filter(|n| n.ends_with(".xml") || n.ends_with(".rels")) {
        assert_well_formed(&read_zip_entry(&pptx, name));
    }

    let title = read_zip_entry(&pptx, "ppt/slides/slide1.xml");
    assert!(title.contains("<a:t>add title here</a:t>"));

    let first = read_zip_entry(&pptx, "ppt/slides/slide2.xml");
    assert!(first.contains("<a:t>a_wide</a:t>"));
    assert!(first.contains("<a:t>square.png</a:t>"));
    assert!(first.contains("<a:t>wide.png</a:t>"));
    assert!(first.contains("<a:t>1</a:t>"));

    let second = read_zip_entry(&pptx, "ppt/slides/slide3.xml");
    assert!(second.contains("<a:t>c_tiff</a:t>"));
    assert!(second.contains("<a:t>photo.png</a:t>"));
    assert!(second.contains("<a:t>stack.png</a:t>"));
    assert!(second.contains("<a:t>2</a:t>"));

    let rels = read_zip_entry(&pptx, "ppt/slides/_rels/slide3.xml.rels");
    assert!(rels.contains("slideLayout2.xml"));
    assert!(rels.contains("../media/image3.png"));
    assert!(rels.contains("../media/image4.png"));
}

#[test]
fn second_run_overwrites_and_skips_conversion() {
    let dir = tempfile::tempdir().unwrap();
    build_tree(dir.path());

    DeckAssembler::from_config(config_for(dir.path())).run().unwrap();
    let report = DeckAssembler::from_config(config_for(dir.path())).run().unwrap();

    let conversion = report.conversion.unwrap();
    assert!(conversion.converted.is_empty());
    assert_eq!(conversion.skipped.len(), 1);
    assert_eq!(report.slides, 3);
    assert!(report.output.exists());
}

#[test]
fn skipped_conversion_ignores_tiffs() {
    let dir = tempfile::tempdir().unwrap();
    build_tree(dir.path());

    let mut config = config_for(dir.path());
    config.conversion.enabled = false;
    let report = DeckAssembler::from_config(config).run().unwrap();

    assert!(report.conversion.is_none());
    assert_eq!(report.images, 3);
    assert!(!dir.path().join("input/c_tiff/stack.png").exists());
}

#[test]
fn nine_images_abort_the_deck() {
    let dir = tempfile::tempdir().unwrap();
    let group = dir.path().join("input").join("crowded");
    std::fs::create_dir_all(&group).unwrap();
    for i in 0..9 {
        write_png(&group.join(format!("fig{i}.png")), 4, 4);
    }

    let err = DeckAssembler::from_config(config_for(dir.path()))
        .run()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Layout(LayoutError::TooManyImages { count: 9, max: 8 })
    ));
    assert!(!dir.path().join("output").join("figures.pptx").exists());
}

#[test]
fn yaml_config_drives_the_run() {
    let dir = tempfile::tempdir().unwrap();
    build_tree(dir.path());
    let yaml = format!(
        "input_dir: {}\noutput_dir: {}\ndeck_name: from_yaml\nkeep_ratio: false\nconversion:\n  enabled: false\n",
        dir.path().join("input").display(),
        dir.path().join("decks").display(),
    );
    let path = dir.path().join("deck.yaml");
    std::fs::write(&path, yaml).unwrap();

    let config = DeckConfig::from_yaml_file(&path).unwrap();
    let report = DeckAssembler::from_config(config).run().unwrap();
    assert_eq!(report.output, dir.path().join("decks").join("from_yaml.pptx"));
    assert!(report.output.exists());
}
