#![cfg(all(feature = "tikz", feature = "svg"))]

use tiltposter::rendering::{PaintCommand, Scene};
use tiltposter::{compose, load_scene, Backend, Format, PosterDocument};

const DEMO: &str = "demos/outer-parts.json";

fn demo_scene() -> Scene {
    load_scene(DEMO).expect("demo poster should compose")
}

#[test]
fn demo_poster_composes() {
    let scene = demo_scene();
    assert_eq!(scene.name, "outer-parts");
    assert_eq!(scene.width_pt, 612.0);
    assert_eq!(scene.height_pt, 792.0);

    let polygons = scene
        .commands
        .iter()
        .filter(|c| matches!(c, PaintCommand::Polygon { .. }))
        .count();
    // background, header, footer and two columns
    assert_eq!(polygons, 5);

    // second column carries a placement grid
    let markers = scene
        .commands
        .iter()
        .filter(|c| matches!(c, PaintCommand::Text { text, .. } if text.starts_with("\\_")))
        .count();
    assert_eq!(markers, 33);
}

#[test]
fn demo_renders_as_tikz_document() {
    let scene = demo_scene();
    let tex = Format::Tex.backend().unwrap().render(&scene).unwrap();
    assert!(tex.contains("\\usepackage{CaslonPro}"));
    assert!(tex.contains("\\usepackage{wrapfig}"));
    assert!(tex.contains("\\begin{wrapfigure}[10]{r}{9.3\\baselineskip}"));
    assert!(tex.contains("\\textsc{Why Aren't Clusters Isothermal?}"));
    // the caption gives no anchor and is centred on its baseline
    assert!(tex.contains(
        "\\node[anchor=base, inner sep=0, outer sep=0, text={rgb,1:red,0.500;green,0.500;blue,0.500}]"
    ));
    assert_eq!(tex.matches("\\filldraw").count(), 4);
    assert_eq!(tex.matches("\\fill[").count(), 1);
}

#[test]
fn demo_renders_as_svg_preview() {
    let scene = demo_scene();
    let svg = Format::Svg.backend().unwrap().render(&scene).unwrap();
    assert!(svg.starts_with("<svg "));
    assert_eq!(svg.matches("<polygon").count(), 5);
    assert!(svg.contains("Why Aren't Clusters Isothermal?"));
}

#[test]
fn rendering_is_deterministic() {
    let backend = Format::Tex.backend().unwrap();
    let a = demo_scene().digest(backend.as_ref()).unwrap();
    let b = demo_scene().digest(backend.as_ref()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 64);
}

#[test]
fn write_to_creates_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let scene = demo_scene();
    let backend = Format::Svg.backend()?;
    let path = dir.path().join(format!("{}.{}", scene.name, backend.extension()));
    backend.write_to(&scene, &path)?;
    let written = std::fs::read_to_string(&path)?;
    assert_eq!(written, backend.render(&scene)?);
    Ok(())
}

#[test]
fn changing_the_column_count_changes_the_layout() {
    let raw = std::fs::read_to_string(DEMO).unwrap();
    let mut doc = PosterDocument::from_json(&raw).unwrap();
    let two = compose(&doc).unwrap();
    doc.content.columns.push(Default::default());
    let three = compose(&doc).unwrap();
    assert_eq!(three.commands.len(), two.commands.len() + 1);
    // first column border: background, header + 3 blocks, footer + 3 blocks come before it
    assert_ne!(two.commands[9], three.commands[9]);
}

#[test]
fn missing_poster_file_is_an_io_error() {
    let err = load_scene("demos/does-not-exist.json").unwrap_err();
    assert!(matches!(err, tiltposter::Error::Io(_)));
}
