use crate::foundation::core::{Affine, Rect};
use crate::stage::model::{Layer, LayerKind, Stage, TextAnchor, TextLine};

const LINE_HEIGHT: f64 = 1.2;

/// Serialize the current stage as a standalone SVG document.
///
/// Mask layers are emitted only inside the `<mask>` of the image that references them.
pub fn stage_to_svg(stage: &Stage) -> String {
    let vp = stage.viewport();
    let mut out = String::with_capacity(4096);
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = fmt_num(vp.width),
        h = fmt_num(vp.height),
    ));
    out.push_str(&format!(
        r##"<rect width="{}" height="{}" fill="#000000"/>"##,
        fmt_num(vp.width),
        fmt_num(vp.height)
    ));
    for root in stage.children(None) {
        write_layer(stage, root, &mut out);
    }
    out.push_str("</svg>");
    out
}

fn write_layer(stage: &Stage, layer: &Layer, out: &mut String) {
    if matches!(layer.kind, LayerKind::Mask) {
        return;
    }
    write_group(stage, layer, out);
}

fn write_group(stage: &Stage, layer: &Layer, out: &mut String) {
    out.push_str(&format!(
        r#"<g id="{}" transform="{}" opacity="{}">"#,
        escape(layer.id.as_str()),
        matrix(layer.props.transform(layer.frame)),
        fmt_num(layer.props.opacity),
    ));
    write_content(stage, layer, out);
    for child in stage.children(Some(layer.id)) {
        write_layer(stage, child, out);
    }
    out.push_str("</g>");
}

fn write_content(stage: &Stage, layer: &Layer, out: &mut String) {
    let f = layer.frame;
    match &layer.kind {
        LayerKind::Group | LayerKind::Mask => {}
        LayerKind::Fill { color } => {
            out.push_str(&format!(r#"<rect {} fill="{}"/>"#, rect_attrs(f), escape(color)));
        }
        LayerKind::Image { href, .. } => {
            out.push_str(&format!(
                r#"<image xlink:href="{}" {} preserveAspectRatio="xMidYMid slice"/>"#,
                escape(href),
                rect_attrs(f),
            ));
        }
        LayerKind::MaskedImage { href, mask } => {
            let vp = stage.viewport().rect();
            let mask_id = format!("mask-{}", mask.as_str());
            out.push_str(&format!(
                r#"<defs><mask id="{}" maskUnits="userSpaceOnUse" {}><rect {} fill="black"/>"#,
                escape(&mask_id),
                rect_attrs(vp),
                rect_attrs(vp),
            ));
            if let Some(mask_layer) = stage.get(*mask) {
                write_group(stage, mask_layer, out);
            }
            out.push_str(&format!(
                r#"</mask></defs><image xlink:href="{}" {} preserveAspectRatio="xMidYMid slice" mask="url(#{})"/>"#,
                escape(href),
                rect_attrs(f),
                escape(&mask_id),
            ));
        }
        LayerKind::Text {
            lines,
            font_size,
            font_family,
            color,
            anchor,
        } => write_text(out, f, lines, *font_size, font_family, color, *anchor),
        LayerKind::Button {
            label,
            fill,
            font_size,
        } => {
            out.push_str(&format!(r#"<rect {} fill="{}"/>"#, rect_attrs(f), escape(fill)));
            let c = f.center();
            out.push_str(&format!(
                r#"<text x="{}" y="{}" font-size="{}" fill="black" text-anchor="middle" dominant-baseline="central">{}</text>"#,
                fmt_num(c.x),
                fmt_num(c.y),
                fmt_num(*font_size),
                escape(label),
            ));
        }
    }
}

fn write_text(
    out: &mut String,
    f: Rect,
    lines: &[TextLine],
    font_size: f64,
    font_family: &str,
    color: &str,
    anchor: TextAnchor,
) {
    let (x0, anchor_attr) = match anchor {
        TextAnchor::Start => (f.x0, "start"),
        TextAnchor::Middle => (f.center().x, "middle"),
    };
    // A lone centered line sits on the frame center; anything else stacks from the top.
    let centered = anchor == TextAnchor::Middle && lines.len() == 1;
    for (i, line) in lines.iter().enumerate() {
        if line.text.is_empty() {
            continue;
        }
        let (y, baseline) = if centered {
            (f.center().y, r#" dominant-baseline="central""#)
        } else {
            (f.y0 + font_size + i as f64 * font_size * LINE_HEIGHT, "")
        };
        out.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{}" font-family="{}" fill="{}" text-anchor="{}"{}>{}</text>"#,
            fmt_num(x0 + line.indent),
            fmt_num(y),
            fmt_num(font_size),
            escape(font_family),
            escape(color),
            anchor_attr,
            baseline,
            escape(&line.text),
        ));
    }
}

fn rect_attrs(r: Rect) -> String {
    format!(
        r#"x="{}" y="{}" width="{}" height="{}""#,
        fmt_num(r.x0),
        fmt_num(r.y0),
        fmt_num(r.width()),
        fmt_num(r.height())
    )
}

fn matrix(a: Affine) -> String {
    let [a, b, c, d, e, f] = a.as_coeffs();
    format!(
        "matrix({} {} {} {} {} {})",
        fmt_num(a),
        fmt_num(b),
        fmt_num(c),
        fmt_num(d),
        fmt_num(e),
        fmt_num(f)
    )
}

/// Fixed precision, trailing zeros trimmed, and no `-0`.
fn fmt_num(v: f64) -> String {
    let s = format!("{v:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
