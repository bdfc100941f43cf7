#[allow(dead_code)]
#[path = "../src/bin/render_frames.rs"]
mod render_frames;

use base64::Engine as _;
use clap::Parser;
use std::path::{Path, PathBuf};
use tui_genart::config::{BoidsMode, Config};
use tui_genart::export::{encode_png, save_png, snapshot_file_name, to_data_url, write_png, DATA_URL_PREFIX};
use tui_genart::visual::{Color, Engine, Surface};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tui_genart-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn decode(bytes: &[u8]) -> (u32, u32, Vec<u8>) {
    let decoder = png::Decoder::new(bytes);
    let mut reader = decoder.read_info().expect("png header");
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("png frame");
    buf.truncate(info.buffer_size());
    (info.width, info.height, buf)
}

#[test]
fn png_round_trips_pixels() {
    let mut s = Surface::new(5, 3).unwrap();
    s.fill_rect(1.0, 1.0, 2.0, 1.0, Color::rgb(12, 34, 56));
    let bytes = encode_png(&s).unwrap();
    assert_eq!(&bytes[..8], &PNG_SIGNATURE);

    let (w, h, pixels) = decode(&bytes);
    assert_eq!((w, h), (5, 3));
    assert_eq!(pixels, s.pixels());
}

#[test]
fn data_url_wraps_base64_png() {
    let mut e = Engine::with_seed(32, 24, 2).unwrap();
    e.select_pattern(7);
    let url = to_data_url(e.surface()).unwrap();
    assert!(url.starts_with("data:image/png;base64,"));

    let payload = &url[DATA_URL_PREFIX.len()..];
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .expect("valid base64");
    assert_eq!(&bytes[..8], &PNG_SIGNATURE);
    assert_eq!(bytes, encode_png(e.surface()).unwrap());
}

#[test]
fn snapshot_names_carry_the_timestamp() {
    assert_eq!(snapshot_file_name(1_700_000_000_123), "generative-art-1700000000123.png");
}

#[test]
fn save_png_creates_the_directory() {
    let dir = scratch_dir("save").join("nested");
    let s = Surface::new(8, 8).unwrap();
    let path = save_png(&s, &dir).unwrap();
    assert!(path.starts_with(&dir));
    let name = path.file_name().and_then(|n| n.to_str()).unwrap();
    assert!(name.starts_with("generative-art-") && name.ends_with(".png"));
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], &PNG_SIGNATURE);
    let _ = std::fs::remove_dir_all(dir.parent().unwrap());
}

#[test]
fn write_png_reports_the_failing_path() {
    let dir = scratch_dir("blocked");
    std::fs::create_dir_all(&dir).unwrap();
    let blocker = dir.join("file");
    std::fs::write(&blocker, b"x").unwrap();
    let s = Surface::new(2, 2).unwrap();
    let err = write_png(&s, &blocker.join("out.png")).unwrap_err();
    assert!(err.to_string().contains("file"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn cli_defaults_are_stable() {
    let args = render_frames::Cli::try_parse_from(["render_frames"]).expect("parse should succeed");
    assert_eq!(args.pattern, None);
    assert_eq!(args.frames, 60);
    assert_eq!(args.width, 800);
    assert_eq!(args.height, 600);
    assert_eq!(args.boids, BoidsMode::Orbit);
    assert_eq!(args.out, PathBuf::from("frames"));
}

#[test]
fn cli_overrides_work() {
    let args = render_frames::Cli::try_parse_from([
        "render_frames",
        "--pattern",
        "julia",
        "--frames",
        "3",
        "--width",
        "64",
        "--height",
        "48",
        "--seed",
        "99",
        "--boids",
        "flocking",
        "--out",
        "clips",
    ])
    .expect("parse should succeed");
    assert_eq!(args.pattern.as_deref(), Some("julia"));
    assert_eq!(args.frames, 3);
    assert_eq!((args.width, args.height), (64, 48));
    assert_eq!(args.seed, 99);
    assert_eq!(args.boids, BoidsMode::Flocking);
    assert_eq!(args.out, PathBuf::from("clips"));
}

#[test]
fn cli_rejects_zero_sizes_and_frames() {
    for (flag, value) in [("--width", "0"), ("--height", "0"), ("--frames", "0")] {
        let args = render_frames::Cli::try_parse_from(["render_frames", flag, value])
            .expect("parse should succeed");
        let err = render_frames::validate_args(&args).expect_err("zero must fail validation");
        assert!(err.to_string().contains(flag), "{err}");
    }
}

#[test]
fn pattern_resolution_matches_ids_and_names() {
    assert_eq!(render_frames::resolve_pattern(None).unwrap(), 0);
    assert_eq!(render_frames::resolve_pattern(Some("7")).unwrap(), 7);
    assert_eq!(render_frames::resolve_pattern(Some("fibonacci")).unwrap(), 16);
    assert!(render_frames::resolve_pattern(Some("40")).is_err());
}

#[test]
fn frame_names_are_zero_padded() {
    assert_eq!(
        render_frames::frame_path(Path::new("out"), 7),
        Path::new("out").join("frame-00007.png")
    );
}

#[test]
fn headless_run_writes_every_frame() {
    let dir = scratch_dir("frames");
    let args = render_frames::Cli::try_parse_from([
        "render_frames",
        "--pattern",
        "spiral",
        "--frames",
        "3",
        "--width",
        "40",
        "--height",
        "30",
        "--out",
        dir.to_str().unwrap(),
    ])
    .unwrap();
    let written = render_frames::run(&args).unwrap();
    assert_eq!(written.len(), 3);
    for (i, path) in written.iter().enumerate() {
        assert_eq!(path, &render_frames::frame_path(&dir, i as u32));
        let (w, h, _) = decode(&std::fs::read(path).unwrap());
        assert_eq!((w, h), (40, 30));
    }
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn host_config_defaults_and_validation() {
    let cfg = Config::try_parse_from(["tui_genart"]).unwrap();
    assert_eq!((cfg.width, cfg.height, cfg.fps), (800, 600, 60));
    assert!(cfg.sync_updates);
    assert!(!cfg.paused);
    assert!(cfg.validate().is_ok());

    let cfg = Config::try_parse_from(["tui_genart", "--fps", "0"]).unwrap();
    assert!(cfg.validate().unwrap_err().to_string().contains("--fps"));

    let cfg = Config::try_parse_from(["tui_genart", "--width", "0"]).unwrap();
    assert_eq!(cfg.validate().unwrap_err().to_string(), "--width must be >= 1");

    let cfg = Config::try_parse_from(["tui_genart", "--boids", "flock", "--sync-updates", "false"]).unwrap();
    assert_eq!(cfg.boids, BoidsMode::Flocking);
    assert!(!cfg.sync_updates);
}

#[test]
fn host_engine_honours_pattern_and_seed() {
    let cfg = Config::try_parse_from(["tui_genart", "--pattern", "orbits", "--seed", "5", "--width", "64", "--height", "48"])
        .unwrap();
    let e = tui_genart::app::build_engine(&cfg).unwrap();
    assert_eq!(e.pattern(), 19);
    assert_eq!(e.time(), 0);

    let cfg = Config::try_parse_from(["tui_genart", "--pattern", "nope"]).unwrap();
    assert!(tui_genart::app::build_engine(&cfg).is_err());
}
