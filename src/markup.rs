//! Static page structure.
//!
//! Frames are laid out for the current viewport. Hero layers start oversized and tilted; the
//! parallax scene settles them to identity once the intro has handed off.

use crate::config::AssetConfig;
use crate::foundation::core::{Rect, Viewport};
use crate::foundation::error::LandingResult;
use crate::stage::model::{Layer, LayerKind, LayerProps, Stage, TextAnchor, TextLine};

pub mod ids {
    use crate::stage::model::LayerId;

    pub const INTRO: LayerId = LayerId("svg");
    pub const INTRO_BACKDROP: LayerId = LayerId("svg-backdrop");
    pub const MASK_GROUP: LayerId = LayerId("vi-mask-group");
    pub const MASK_TEXT: LayerId = LayerId("vi-mask-text");
    pub const INTRO_IMAGE: LayerId = LayerId("svg-image");

    pub const MAIN: LayerId = LayerId("main");
    pub const LANDING: LayerId = LayerId("landing");
    pub const LANDING_FILL: LayerId = LayerId("landing-fill");
    pub const IMAGE_DIV: LayerId = LayerId("imagediv");
    pub const SKY: LayerId = LayerId("sky");
    pub const BG: LayerId = LayerId("bg");
    pub const TEXT: LayerId = LayerId("text");
    pub const CHARACTER: LayerId = LayerId("character");
    pub const NAVBAR: LayerId = LayerId("navbar");
    pub const NAV_LINES: [LayerId; 3] = [LayerId("line-1"), LayerId("line-2"), LayerId("line-3")];
    pub const LOGO: LayerId = LayerId("logo");
    pub const BOTTOM_BAR: LayerId = LayerId("btmbar");
    pub const SCROLL_HINT: LayerId = LayerId("scroll-hint");
    pub const CONSOLE_ICON: LayerId = LayerId("console-icon");

    pub const CONTENT: LayerId = LayerId("content");
    pub const CONTENT_FILL: LayerId = LayerId("content-fill");
    pub const FEATURE_IMAGE: LayerId = LayerId("feature-image");
    pub const HEADLINE: LayerId = LayerId("content-headline");
    pub const BODY: LayerId = LayerId("content-body");
    pub const DOWNLOAD: LayerId = LayerId("download-button");
}

use ids::*;

pub const BRAND: &str = "Rockstar";
pub const HERO_LINES: [&str; 3] = ["grand", "theft", "auto"];
pub const HEADLINE_LINES: [&str; 2] = ["Still Running,", "Not Hunting"];
pub const CALL_TO_ACTION: &str = "Download Now";
pub const SCROLL_TEXT: &str = "Scroll Down";
pub const MASK_WORD: &str = "VI";

const BODY_PARAGRAPHS: [&str; 3] = [
    "Lorem ipsum, dolor sit amet consectetur adipisicing elit. Distinctio possimus, asperiores \
     nam, omnis inventore nesciunt a architecto eveniet saepe, ducimus necessitatibus at \
     voluptate.",
    "Lorem ipsum dolor sit amet consectetur adipisicing elit. At eius illum fugit eligendi \
     nesciunt quia similique velit excepturi soluta tenetur illo repellat consectetur laborum \
     eveniet eaque, dicta, hic quisquam? Ex cupiditate ipsa nostrum autem sapiente.",
    "Lorem ipsum dolor sit amet consectetur adipisicing elit. At eius illum fugit eligendi \
     nesciunt quia similique velit excepturi soluta tenetur illo repellat consectetur laborum \
     eveniet eaque, dicta, hic quisquam? Ex cupiditate ipsa nostrum autem sapiente.",
];

const DISPLAY_FONT: &str = "Arial Black";
const BODY_FONT: &str = "Helvetica";
const WHITE: &str = "#ffffff";
const BLACK: &str = "#000000";

/// Resting-state offsets of the hero layers before the entry transition.
pub const MAIN_INITIAL: (f64, f64) = (1.7, 10.0);
pub const SKY_INITIAL: (f64, f64) = (1.5, -20.0);
pub const BG_INITIAL: (f64, f64) = (1.8, -5.0);
pub const CHARACTER_INITIAL: (f64, f64) = (2.0, 10.0);

fn initial((scale, rotate_deg): (f64, f64)) -> LayerProps {
    LayerProps::scaled_rotated(scale, rotate_deg)
}

fn text(lines: Vec<TextLine>, font_size: f64, font_family: &str, anchor: TextAnchor) -> LayerKind {
    LayerKind::Text {
        lines,
        font_size,
        font_family: font_family.to_owned(),
        color: WHITE.to_owned(),
        anchor,
    }
}

fn fill(color: &str) -> LayerKind {
    LayerKind::Fill {
        color: color.to_owned(),
    }
}

fn image(href: &str, alt: &str) -> LayerKind {
    LayerKind::Image {
        href: href.to_owned(),
        alt: alt.to_owned(),
    }
}

/// Greedy word wrap at `width` characters.
pub fn wrap_words(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut cur = String::new();
    for word in paragraph.split_whitespace() {
        if !cur.is_empty() && cur.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut cur));
        }
        if !cur.is_empty() {
            cur.push(' ');
        }
        cur.push_str(word);
    }
    if !cur.is_empty() {
        lines.push(cur);
    }
    lines
}

/// Full-screen masked intro graphic.
pub fn intro_layers(viewport: Viewport, assets: &AssetConfig) -> Vec<Layer> {
    let full = viewport.rect();
    // The mask word is sized against a 600px-tall artboard.
    let font_size = 250.0 * viewport.height / 600.0;
    vec![
        Layer::new(INTRO, LayerKind::Group, full),
        Layer::new(INTRO_BACKDROP, fill(BLACK), full).child_of(INTRO),
        Layer::new(MASK_GROUP, LayerKind::Mask, full).child_of(INTRO),
        Layer::new(
            MASK_TEXT,
            text(
                vec![TextLine::new(MASK_WORD)],
                font_size,
                DISPLAY_FONT,
                TextAnchor::Middle,
            ),
            full,
        )
        .child_of(MASK_GROUP),
        Layer::new(
            INTRO_IMAGE,
            LayerKind::MaskedImage {
                href: assets.background.clone(),
                mask: MASK_GROUP,
            },
            full,
        )
        .child_of(INTRO),
    ]
}

/// Hero section and the static content block below it.
pub fn main_layers(viewport: Viewport, assets: &AssetConfig) -> Vec<Layer> {
    let (w, h) = (viewport.width, viewport.height);
    let screen = viewport.rect();
    let pad = 40.0;

    let mut layers = vec![
        Layer::new(MAIN, LayerKind::Group, Rect::new(0.0, 0.0, w, 2.0 * h))
            .with_props(initial(MAIN_INITIAL)),
        Layer::new(LANDING, LayerKind::Group, screen).child_of(MAIN),
        Layer::new(LANDING_FILL, fill(BLACK), screen).child_of(LANDING),
        Layer::new(IMAGE_DIV, LayerKind::Group, screen).child_of(LANDING),
        Layer::new(SKY, image(&assets.sky, "Sky"), screen)
            .child_of(IMAGE_DIV)
            .with_props(initial(SKY_INITIAL)),
        Layer::new(BG, image(&assets.background, "Background"), screen)
            .child_of(IMAGE_DIV)
            .with_props(initial(BG_INITIAL)),
        Layer::new(
            TEXT,
            text(
                vec![
                    TextLine::indented(HERO_LINES[0], -160.0),
                    TextLine::indented(HERO_LINES[1], 80.0),
                    TextLine::indented(HERO_LINES[2], -160.0),
                ],
                144.0,
                DISPLAY_FONT,
                TextAnchor::Middle,
            ),
            Rect::new(w / 2.0 - 320.0, 0.0, w / 2.0 + 320.0, 3.0 * 144.0 + 24.0),
        )
        .child_of(IMAGE_DIV),
        Layer::new(
            CHARACTER,
            image(&assets.character, "Character"),
            Rect::new(0.25 * w, 0.65 * h, 0.75 * w, 1.65 * h),
        )
        .child_of(IMAGE_DIV)
        .with_props(initial(CHARACTER_INITIAL)),
        Layer::new(NAVBAR, LayerKind::Group, Rect::new(0.0, 0.0, w, 2.0 * pad + 40.0))
            .child_of(LANDING),
    ];

    for (i, (line, len)) in NAV_LINES.iter().zip([32.0, 24.0, 16.0]).enumerate() {
        let y = pad + 8.0 * i as f64;
        layers.push(
            Layer::new(*line, fill(WHITE), Rect::new(pad, y, pad + len, y + 4.0)).child_of(NAVBAR),
        );
    }

    layers.extend([
        Layer::new(
            LOGO,
            text(
                vec![TextLine::new(BRAND)],
                36.0,
                BODY_FONT,
                TextAnchor::Start,
            ),
            Rect::new(pad + 60.0, pad - 8.0, pad + 300.0, pad + 40.0),
        )
        .child_of(NAVBAR),
        Layer::new(
            BOTTOM_BAR,
            LayerKind::Group,
            Rect::new(0.0, h - 2.0 * pad - 32.0, w, h),
        )
        .child_of(LANDING),
        Layer::new(
            SCROLL_HINT,
            text(
                vec![TextLine::new(SCROLL_TEXT)],
                24.0,
                BODY_FONT,
                TextAnchor::Start,
            ),
            Rect::new(pad, h - pad - 32.0, pad + 260.0, h - pad),
        )
        .child_of(BOTTOM_BAR),
        Layer::new(
            CONSOLE_ICON,
            image(&assets.console_icon, "PS5"),
            Rect::new(w / 2.0 - 60.0, h - pad - 43.5, w / 2.0 + 60.0, h - pad + 11.5),
        )
        .child_of(BOTTOM_BAR),
    ]);

    let top = h;
    let copy_left = w * 0.55;
    let content_box = Rect::new(0.0, top, w, top + h);
    let body: Vec<TextLine> = BODY_PARAGRAPHS
        .iter()
        .flat_map(|p| {
            let mut lines: Vec<TextLine> = wrap_words(p, 64).into_iter().map(TextLine::new).collect();
            lines.push(TextLine::new(""));
            lines
        })
        .collect();

    layers.extend([
        Layer::new(CONTENT, LayerKind::Group, content_box).child_of(MAIN),
        Layer::new(CONTENT_FILL, fill(BLACK), content_box).child_of(CONTENT),
        Layer::new(
            FEATURE_IMAGE,
            image(&assets.feature_image, ""),
            Rect::new(pad, top + 0.1 * h, w / 2.0, top + 0.9 * h),
        )
        .child_of(CONTENT),
        Layer::new(
            HEADLINE,
            text(
                HEADLINE_LINES.iter().map(|l| TextLine::new(*l)).collect(),
                96.0,
                DISPLAY_FONT,
                TextAnchor::Start,
            ),
            Rect::new(copy_left, top + 0.1 * h, w - pad, top + 0.1 * h + 220.0),
        )
        .child_of(CONTENT),
        Layer::new(
            BODY,
            text(body, 20.0, BODY_FONT, TextAnchor::Start),
            Rect::new(copy_left, top + 0.1 * h + 240.0, w - pad, top + 0.75 * h),
        )
        .child_of(CONTENT),
        Layer::new(
            DOWNLOAD,
            LayerKind::Button {
                label: CALL_TO_ACTION.to_owned(),
                fill: "#eab308".to_owned(),
                font_size: 36.0,
            },
            Rect::new(copy_left, top + 0.78 * h, copy_left + 330.0, top + 0.78 * h + 84.0),
        )
        .child_of(CONTENT),
    ]);
    layers
}

pub fn insert_all(stage: &mut Stage, layers: Vec<Layer>) -> LandingResult<()> {
    for layer in layers {
        stage.insert(layer)?;
    }
    Ok(())
}

pub fn insert_intro(stage: &mut Stage, assets: &AssetConfig) -> LandingResult<()> {
    insert_all(stage, intro_layers(stage.viewport(), assets))
}

pub fn insert_main_content(stage: &mut Stage, assets: &AssetConfig) -> LandingResult<()> {
    insert_all(stage, main_layers(stage.viewport(), assets))
}
