use std::fs;

use folder_tree::render::{self, CanvasLayout};
use folder_tree::{BitmapFace, GlyphFace, OutputPaths, document, theme, tree};

const LAYOUT: &str = "\
project:
  __files__:
    - README.md
    - Cargo.toml
  src:
    main.rs:
    lib.rs:
    tree:
      - mod.rs
      - tests.rs
  docs:
  LICENSE:
";

#[test]
fn yaml_layout_renders_to_text_and_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("structure.yaml");
    fs::write(&input, LAYOUT).expect("writes input");

    let node = document::load(&input).expect("decodes");
    let lines = tree::render_lines(&node);
    assert_eq!(
        lines,
        [
            "└─project/",
            "   ├─ README.md",
            "   └─ Cargo.toml",
            "   ├─src/",
            "   │  ├─tree/",
            "   │  │  ├─ mod.rs",
            "   │  │  └─ tests.rs",
            "   │  ├─lib.rs",
            "   │  └─main.rs",
            "   ├─LICENSE",
            "   └─docs",
        ]
    );

    let outputs = OutputPaths::in_dir(dir.path().join("output"));
    outputs.prepare().expect("creates output dir");
    render::write_text(&lines, &outputs.text).expect("writes text");

    let dark = theme::resolve("dark").expect("dark theme");
    let face = BitmapFace::default();
    render::render_png(&lines, &outputs.image, &dark, &face).expect("writes png");

    assert_eq!(
        fs::read_to_string(&outputs.text).expect("reads text"),
        lines.join("\n")
    );

    let image = image::open(&outputs.image).expect("decodes png").to_rgba8();
    let widest = lines
        .iter()
        .map(|line| face.measure(line))
        .max()
        .expect("non-empty");
    let line_height = face.metrics().height() + render::LINE_GAP;
    assert!(image.width() >= widest + 40);
    assert_eq!(image.height(), line_height * lines.len() as u32 + 40);
    assert!(image.pixels().any(|pixel| *pixel == dark.foreground));
}

#[test]
fn empty_layout_renders_minimal_canvas() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("empty.png");

    let lines = tree::render_lines(&document::from_str("{}").expect("decodes"));
    assert!(lines.is_empty());

    render::render_png(&lines, &path, &theme::LIGHT, &BitmapFace::default()).expect("writes png");
    let image = image::open(&path).expect("decodes png").to_rgba8();
    assert_eq!(image.dimensions(), (40, 40));

    let layout = CanvasLayout::measure(&lines, &BitmapFace::default());
    assert_eq!((layout.width, layout.height), (40, 40));
}

#[test]
fn scaled_face_grows_canvas() {
    let lines = ["└─src/"];
    let single = CanvasLayout::measure(&lines, &BitmapFace::new(1));
    let double = CanvasLayout::measure(&lines, &BitmapFace::new(2));
    assert_eq!(double.text_width, 2 * single.text_width);
    assert!(double.height > single.height);
}
