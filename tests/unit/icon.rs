use std::cell::RefCell;

use super::*;

struct Unavailable;

impl Rasterizer for Unavailable {
    fn rasterize(&self, _svg: &str, _out: &Path, _w: u32, _h: u32) -> IconResult<()> {
        Err(IconError::raster_unavailable("test stub"))
    }
}

struct Broken;

impl Rasterizer for Broken {
    fn rasterize(&self, _svg: &str, _out: &Path, _w: u32, _h: u32) -> IconResult<()> {
        Err(IconError::render("boom"))
    }
}

#[derive(Default)]
struct Recording {
    calls: RefCell<Vec<(String, PathBuf, u32, u32)>>,
}

impl Rasterizer for Recording {
    fn rasterize(&self, svg: &str, out: &Path, w: u32, h: u32) -> IconResult<()> {
        self.calls
            .borrow_mut()
            .push((svg.to_owned(), out.to_path_buf(), w, h));
        std::fs::write(out, b"png").unwrap();
        Ok(())
    }
}

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_icon").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn config_in(dir: &Path) -> IconConfig {
    IconConfig {
        output_path: dir.join("public").join("apple-touch-icon.png"),
        ..IconConfig::default()
    }
}

#[test]
fn rasterizer_receives_markup_path_and_canvas_size() {
    let dir = scratch("recording");
    let config = config_in(&dir);
    let r = Recording::default();

    let outcome = write_icon(&config, &r).unwrap();
    assert_eq!(outcome, IconOutcome::Png(config.output_path.clone()));
    assert_eq!(outcome.path(), config.output_path.as_path());

    let calls = r.calls.borrow();
    assert_eq!(calls.len(), 1);
    let (svg, out, w, h) = &calls[0];
    assert_eq!(svg, &IconImage::from_config(&config).to_svg());
    assert_eq!(out, &config.output_path);
    assert_eq!((*w, *h), (180, 180));
    assert!(!config.svg_fallback_path().exists());
}

#[test]
fn unavailable_rasterizer_falls_back_to_svg() {
    let dir = scratch("fallback");
    let config = config_in(&dir);

    let outcome = write_icon(&config, &Unavailable).unwrap();
    let IconOutcome::SvgFallback { path, reason } = &outcome else {
        panic!("expected svg fallback, got {outcome:?}");
    };
    assert_eq!(path, &dir.join("public").join("apple-touch-icon.svg"));
    assert_eq!(reason, "test stub");

    let written = std::fs::read_to_string(path).unwrap();
    assert_eq!(written, IconImage::from_config(&config).to_svg());
    assert!(!config.output_path.exists());
}

#[test]
fn other_raster_errors_propagate() {
    let dir = scratch("broken");
    let config = config_in(&dir);

    let err = write_icon(&config, &Broken).unwrap_err();
    assert!(matches!(err, IconError::Render(_)));
    assert!(!config.svg_fallback_path().exists());
}

#[test]
fn existing_output_dir_is_fine() {
    let dir = scratch("existing");
    let config = config_in(&dir);
    std::fs::create_dir_all(config.output_path.parent().unwrap()).unwrap();

    write_icon(&config, &Unavailable).unwrap();
    write_icon(&config, &Unavailable).unwrap();
    assert!(config.svg_fallback_path().exists());
}

#[test]
fn unwritable_output_dir_is_an_error() {
    let dir = scratch("blocked");
    std::fs::create_dir_all(&dir).unwrap();
    // A regular file where the output directory should go.
    std::fs::write(dir.join("public"), b"").unwrap();

    let err = write_icon(&config_in(&dir), &Unavailable).unwrap_err();
    assert!(err.to_string().contains("create output dir"));
}
