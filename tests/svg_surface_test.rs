// Tests for SVG surface output: coordinates, path commits, text and documents

use notation_svg::renderers::svg::SURFACE_CLASS;
use notation_svg::{
    Canvas, Color, CssFontSvgCanvas, Font, FontStyle, MusicFontSymbol, PathGlyphs, PathSvgCanvas, TextBaseline,
};

fn child_elements<'a, 'input>(doc: &'a roxmltree::Document<'input>) -> Vec<roxmltree::Node<'a, 'input>> {
    doc.root_element().children().filter(|n| n.is_element()).collect()
}

fn begin(width: f32, height: f32) -> CssFontSvgCanvas {
    let mut canvas = CssFontSvgCanvas::default();
    canvas.begin_render(width, height);
    canvas
}

#[test]
fn test_empty_document() {
    let mut canvas = begin(800.0, 600.0);
    let svg = canvas.end_render().expect("document should close");

    let doc = roxmltree::Document::parse(&svg).expect("output should be well-formed");
    let root = doc.root_element();

    assert_eq!(root.tag_name().name(), "svg");
    assert_eq!(root.tag_name().namespace(), Some("http://www.w3.org/2000/svg"));
    assert_eq!(root.attribute("version"), Some("1.1"));
    assert_eq!(root.attribute("width"), Some("800px"));
    assert_eq!(root.attribute("height"), Some("600px"));
    assert_eq!(root.attribute("class"), Some(SURFACE_CLASS));
    assert!(child_elements(&doc).is_empty());
}

#[test]
fn test_fill_rect_applies_correction_to_position_only() {
    let mut canvas = begin(100.0, 100.0);
    canvas.set_color(Color::new(255, 0, 0));

    for (x, y, w, h) in [(0.0, 0.0, 10.0, 5.0), (12.25, 7.0, 0.5, 100.0), (-3.0, 40.5, 1.0, 1.0)] {
        canvas.fill_rect(x, y, w, h).unwrap();
    }

    let svg = canvas.end_render().unwrap();
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let rects = child_elements(&doc);
    assert_eq!(rects.len(), 3);

    let expected = [("-0.5", "-0.5", "10", "5"), ("11.75", "6.5", "0.5", "100"), ("-3.5", "40", "1", "1")];
    for (rect, (x, y, w, h)) in rects.iter().zip(expected) {
        assert_eq!(rect.tag_name().name(), "rect");
        assert_eq!(rect.attribute("x"), Some(x));
        assert_eq!(rect.attribute("y"), Some(y));
        assert_eq!(rect.attribute("width"), Some(w));
        assert_eq!(rect.attribute("height"), Some(h));
        assert_eq!(rect.attribute("style"), Some("fill:#FF0000;"));
    }
}

#[test]
fn test_fill_and_stroke_on_empty_path_emit_nothing() {
    let mut canvas = begin(10.0, 10.0);
    canvas.fill().unwrap();
    canvas.stroke().unwrap();

    canvas.begin_path().unwrap();
    canvas.move_to(1.0, 1.0).unwrap();
    canvas.move_to(2.0, 2.0).unwrap();
    canvas.close_path().unwrap();
    canvas.fill().unwrap();
    assert_eq!(canvas.pending_path(), Some(""));

    canvas.stroke().unwrap();

    let svg = canvas.end_render().unwrap();
    assert!(!svg.contains("<path"));
}

#[test]
fn test_closed_triangle_path() {
    let mut canvas = begin(20.0, 20.0);
    canvas.set_color(Color::BLACK);
    canvas.begin_path().unwrap();
    canvas.move_to(0.0, 0.0).unwrap();
    canvas.line_to(10.0, 10.0).unwrap();
    canvas.close_path().unwrap();
    canvas.fill().unwrap();

    let svg = canvas.end_render().unwrap();
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let paths = child_elements(&doc);
    assert_eq!(paths.len(), 1);

    let path = paths[0];
    assert_eq!(path.tag_name().name(), "path");
    assert_eq!(path.attribute("d"), Some(" M-0.5,-0.5 L9.5,9.5 z"));
    assert_eq!(path.attribute("style"), Some("fill:#000000"));
    assert_eq!(path.attribute("stroke"), Some("none"));
}

#[test]
fn test_curves_are_not_corrected() {
    let mut canvas = begin(20.0, 20.0);
    canvas.move_to(1.0, 1.0).unwrap();
    canvas.bezier_curve_to(2.0, 3.0, 4.0, 5.0, 6.0, 7.0).unwrap();
    canvas.stroke().unwrap();

    let svg = canvas.end_render().unwrap();
    assert!(svg.contains("d=\" M0.5,0.5 C2,3,4,5,6,7\""));
}

#[test]
fn test_fill_circle_emits_one_fill_per_call() {
    let mut canvas = begin(50.0, 50.0);

    canvas.fill_circle(5.0, 5.0, 1.0).unwrap();
    assert_eq!(canvas.pending_path(), Some(""));

    canvas.move_to(0.0, 0.0).unwrap();
    canvas.line_to(3.0, 3.0).unwrap();
    canvas.fill_circle(20.0, 20.0, 2.0).unwrap();
    assert_eq!(canvas.pending_path(), Some(""));

    canvas.fill_circle(30.0, 30.0, 3.0).unwrap();

    let svg = canvas.end_render().unwrap();
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let paths = child_elements(&doc);
    assert_eq!(paths.len(), 3);
    assert!(paths.iter().all(|p| p.attribute("stroke") == Some("none")));
    assert_eq!(
        paths[0].attribute("d"),
        Some(" M4,5 A1,1 0 0,0 6,5 A1,1 0 0,0 4,5 z")
    );
}

#[test]
fn test_text_element() {
    let mut canvas = begin(200.0, 100.0);
    canvas.set_color(Color::with_alpha(0, 0, 0, 0));
    canvas.set_font(Font::with_style("Times New Roman", 12.0, FontStyle::BOLD));
    canvas.fill_text("Allegro & <vivace>", 10.0, 20.0).unwrap();

    let svg = canvas.end_render().unwrap();
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let text = child_elements(&doc)[0];

    assert_eq!(text.tag_name().name(), "text");
    assert_eq!(text.attribute("x"), Some("10"));
    assert_eq!(text.attribute("y"), Some("32"));
    assert_eq!(
        text.attribute("style"),
        Some("font:bold 12px 'Times New Roman'; fill:rgba(0,0,0,0);")
    );
    assert_eq!(text.attribute("dominant-baseline"), Some("top"));
    assert_eq!(text.attribute("text-anchor"), Some("start"));
    assert_eq!(text.text(), Some("Allegro & <vivace>"));
}

#[test]
fn test_control_characters_in_text_stay_well_formed() {
    let mut canvas = begin(200.0, 100.0);
    canvas.set_font(Font::new("Gill Sans O'Neil\u{7}", 10.0));
    canvas.fill_text("Intro\u{1}\u{b}", 0.0, 0.0).unwrap();

    let svg = canvas.end_render().unwrap();
    let doc = roxmltree::Document::parse(&svg).expect("output should be well-formed");
    let text = child_elements(&doc)[0];

    assert_eq!(text.text(), Some("Intro\u{FFFD}\u{FFFD}"));
    assert_eq!(
        text.attribute("style"),
        Some("font:10px 'Gill Sans O\\'Neil\u{FFFD}'; fill:#FFFFFF;")
    );
}

#[test]
fn test_text_bottom_baseline_has_no_offset() {
    let mut canvas = begin(200.0, 100.0);
    canvas.set_text_baseline(TextBaseline::Bottom);
    canvas.fill_text("pp", 10.0, 20.0).unwrap();

    let svg = canvas.end_render().unwrap();
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let text = child_elements(&doc)[0];
    assert_eq!(text.attribute("y"), Some("20"));
    assert_eq!(text.attribute("dominant-baseline"), Some("bottom"));
}

#[test]
fn test_measure_text() {
    let mut canvas = CssFontSvgCanvas::default();
    assert_eq!(canvas.measure_text(""), 0.0);

    canvas.set_font(Font::new("Arial", 10.0));
    let sans = canvas.measure_text("Hello");
    canvas.set_font(Font::new("Times New Roman", 10.0));
    let serif = canvas.measure_text("Hello");

    assert!(sans > 0.0);
    assert_ne!(sans, serif);
}

#[test]
fn test_css_font_glyph_in_document() {
    let mut canvas = begin(100.0, 100.0);
    canvas.set_color(Color::BLACK);
    canvas.fill_music_font_symbol(10.0, 40.0, 1.0, MusicFontSymbol::GClef).unwrap();

    let svg = canvas.end_render().unwrap();
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let group = child_elements(&doc)[0];

    assert_eq!(group.tag_name().name(), "g");
    assert_eq!(group.attribute("class"), Some("at"));
    assert_eq!(group.attribute("transform"), Some("translate(10 40)"));

    let text = group.first_element_child().unwrap();
    assert_eq!(text.text(), Some("\u{E050}"));
}

#[test]
fn test_path_glyphs_in_document() {
    let glyphs = PathGlyphs::new().with_outline(MusicFontSymbol::NoteheadBlack, "M0,0 L2,0 L2,1 z");
    let mut canvas = PathSvgCanvas::new(glyphs);
    canvas.begin_render(50.0, 50.0);
    canvas.set_color(Color::BLACK);

    canvas.fill_music_font_symbol(3.0, 4.0, 0.5, MusicFontSymbol::NoteheadBlack).unwrap();
    let missing = canvas.fill_music_font_symbol(3.0, 4.0, 1.0, MusicFontSymbol::FClef);
    assert!(missing.is_err());

    let svg = canvas.end_render().unwrap();
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let paths = child_elements(&doc);
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].attribute("transform"), Some("translate(3 4) scale(0.5)"));
    assert_eq!(paths[0].attribute("d"), Some("M0,0 L2,0 L2,1 z"));
}

/// Draw a small measure through the backend-agnostic contract
fn draw_measure(canvas: &mut dyn Canvas<Output = String>) -> String {
    canvas.begin_render(300.0, 80.0);
    canvas.set_color(Color::new(165, 165, 165));
    for line in 0..5 {
        canvas.fill_rect(0.0, 20.0 + line as f32 * 8.0, 300.0, 1.0).unwrap();
    }

    canvas.set_color(Color::BLACK);
    canvas.fill_music_font_symbol(5.0, 52.0, 1.0, MusicFontSymbol::GClef).unwrap();
    canvas.fill_music_font_symbol(60.0, 40.0, 1.0, MusicFontSymbol::NoteheadBlack).unwrap();

    canvas.set_line_width(1.2);
    canvas.begin_path().unwrap();
    canvas.move_to(69.0, 40.0).unwrap();
    canvas.line_to(69.0, 12.0).unwrap();
    canvas.stroke().unwrap();

    canvas.begin_path().unwrap();
    canvas.move_to(60.0, 60.0).unwrap();
    canvas.quadratic_curve_to(90.0, 70.0, 120.0, 60.0).unwrap();
    canvas.stroke().unwrap();

    canvas.fill_circle(80.0, 44.0, 1.5).unwrap();
    canvas.fill_text("1", 0.0, 0.0).unwrap();

    canvas.end_render().unwrap()
}

#[test]
fn test_output_is_deterministic() {
    let mut first = CssFontSvgCanvas::default();
    let mut second = CssFontSvgCanvas::default();

    let a = draw_measure(&mut first);
    let b = draw_measure(&mut second);

    assert_eq!(a, b);
    assert!(roxmltree::Document::parse(&a).is_ok());
}

#[test]
fn test_canvas_reusable_after_new_begin_render() {
    let mut canvas = CssFontSvgCanvas::default();
    let first = draw_measure(&mut canvas);
    let second = draw_measure(&mut canvas);
    assert_eq!(first, second);
}
