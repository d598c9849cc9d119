use std::{fs, io::Cursor};

use tempfile::tempdir;

use brandsheet_cli::{Args, run};

fn args_in(dir: &std::path::Path) -> Args {
    Args {
        output: dir.join("HIIC-AI-Lab-Brand-Guidelines.png"),
        font_dir: Some(dir.join("canvas-fonts")),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_renders_poster() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = args_in(temp_dir.path());

    let written = run(&args).expect("Poster should render without fonts");
    assert_eq!(written, args.output);

    let bytes = fs::read(&written).expect("Output file should exist");
    let reader = png::Decoder::new(Cursor::new(bytes))
        .read_info()
        .expect("Output should be a valid PNG");
    let info = reader.info();
    assert_eq!((info.width, info.height), (1754, 2480));
    let dims = info.pixel_dims.expect("Output should carry a pHYs chunk");
    assert_eq!((dims.xppu, dims.yppu, dims.unit), (5906, 5906, png::Unit::Meter));
}

#[test]
fn e2e_config_file_sets_dpi() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("brandsheet.toml");
    fs::write(&config_path, "[export]\ndpi = 72\n").unwrap();

    let args = Args {
        config: Some(config_path),
        ..args_in(temp_dir.path())
    };
    let written = run(&args).expect("Poster should render");

    let reader = png::Decoder::new(Cursor::new(fs::read(written).unwrap()))
        .read_info()
        .unwrap();
    assert_eq!(reader.info().pixel_dims.map(|dims| dims.xppu), Some(2835));
}

#[test]
fn e2e_missing_config_file_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = Args {
        config: Some(temp_dir.path().join("absent.toml")),
        ..args_in(temp_dir.path())
    };

    assert!(run(&args).is_err());
    assert!(!args.output.exists(), "No output should be written");
}

#[test]
fn e2e_output_in_missing_directory_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = Args {
        output: temp_dir.path().join("nested").join("poster.png"),
        ..args_in(temp_dir.path())
    };

    let err = run(&args).expect_err("Writing into a missing directory should fail");
    assert!(err.to_string().starts_with("Export error"));
}

#[test]
fn e2e_font_directory_renders_identically() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let font_dir = temp_dir.path().join("canvas-fonts");
    fs::create_dir(&font_dir).unwrap();
    let fixture = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../brandsheet/tests/fixtures/DejaVuSans-Bold.ttf");
    for name in [
        "InstrumentSans-Bold.ttf",
        "InstrumentSans-Regular.ttf",
        "GeistMono-Bold.ttf",
        "GeistMono-Regular.ttf",
        "NotoSansSC-Bold.ttf",
        "NotoSansSC-Regular.ttf",
    ] {
        fs::copy(&fixture, font_dir.join(name)).expect("Fixture font should be readable");
    }

    let args = args_in(temp_dir.path());
    let first = fs::read(run(&args).expect("Poster should render")).unwrap();
    let second = fs::read(run(&args).expect("Poster should render again")).unwrap();
    assert!(first == second, "Two runs produced different PNG bytes");
}
