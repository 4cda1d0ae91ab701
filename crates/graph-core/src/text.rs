// File: crates/graph-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout, with left/center/right anchoring.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::surface::{FontSpec, TextAlign};

const FALLBACK_FAMILIES: [&str; 5] = ["Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(font: &FontSpec, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size((font.size as f32).max(1.0));
        ts.set_color(color);
        let mut families: Vec<&str> = vec![font.family.as_str()];
        families.extend(FALLBACK_FAMILIES.iter().copied().filter(|f| *f != font.family));
        ts.set_font_families(&families);
        ts
    }

    pub fn layout(&self, text: &str, font: &FontSpec, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(font, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Paint `text` with its baseline at `y`, anchored at `x` per `align`.
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        align: TextAlign,
        font: &FontSpec,
        color: skia::Color,
    ) {
        let p = self.layout(text, font, color);
        let w = p.longest_line();
        let left = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - w / 2.0,
            TextAlign::Right => x - w,
        };
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (left, y - font.size as f32 * 0.8));
    }
}
