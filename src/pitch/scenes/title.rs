use crate::{
    foundation::core::{Fps, FrameIndex, Vec2},
    foundation::error::PitchResult,
    pitch::palette::COLORS,
    pitch::scenes::{BOUNCY, SMOOTH, canvas_for, entrance, fade_window, remap},
    visual::model::{Element, TextRole, VisualDescription},
};

const TAGS: [&str; 3] = ["跨平台", "GPU加速", "Rust安全"];

/// Logo pops in, the product name rises into place, then subtitle, tagline and tags fade up.
pub fn title_scene(local: FrameIndex, fps: Fps) -> PitchResult<VisualDescription> {
    let logo_scale = entrance(local, fps, 0, BOUNCY)?;
    let title_in = entrance(local, fps, 10, SMOOTH)?;
    let title_offset = remap(title_in, 50.0, 0.0)?;
    let subtitle = fade_window(local, 30.0, 50.0)?;
    let tagline = fade_window(local, 50.0, 70.0)?;

    let mut desc = canvas_for("title");
    desc.push(
        Element::panel("logo", Vec2::new(120.0, 120.0), 24.0, COLORS.primary).scale(logo_scale),
    )
    .push(Element::glyph("logo_mark", "S", COLORS.text_primary).scale(logo_scale))
    .push(
        Element::text("title", "Splash", TextRole::Title, COLORS.text_primary)
            .opacity(remap(title_in, 0.0, 1.0)?)
            .translate(0.0, title_offset),
    )
    .push(
        Element::text(
            "subtitle",
            "AI 原生 UI 脚本语言",
            TextRole::Subtitle,
            COLORS.text_secondary,
        )
        .opacity(subtitle),
    )
    .push(
        Element::text("tagline", "自然语言驱动的界面生成", TextRole::Body, COLORS.accent)
            .opacity(tagline),
    );

    for (i, tag) in TAGS.iter().enumerate() {
        desc.push(
            Element::text(format!("tag_{i}"), *tag, TextRole::Caption, COLORS.text_secondary)
                .opacity(tagline),
        );
    }
    Ok(desc)
}

#[cfg(test)]
#[path = "../../../tests/unit/pitch/scenes/title.rs"]
mod tests;
