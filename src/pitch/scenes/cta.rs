use crate::{
    animation::interpolate::interpolate_clamped,
    foundation::core::{Fps, FrameIndex, Vec2},
    foundation::error::PitchResult,
    pitch::palette::COLORS,
    pitch::scenes::{BOUNCY, SMOOTH, canvas_for, entrance, fade_window},
    visual::model::{Element, TextRole, VisualDescription},
};

const LINKS: [&str; 2] = ["github.com/makepad/makepad", "robius.rs"];

/// Strength of the pulsing halo behind the logo, oscillating in `[0.3, 0.6]`.
pub(crate) fn glow_intensity(local: FrameIndex) -> PitchResult<f64> {
    interpolate_clamped((local.0 as f64 * 0.1).sin(), &[-1.0, 1.0], &[0.3, 0.6])
}

/// Closing card: logo, quote, slogan and links over a pulsing glow.
pub fn cta_scene(local: FrameIndex, fps: Fps) -> PitchResult<VisualDescription> {
    let logo = entrance(local, fps, 0, BOUNCY)?;
    let quote = entrance(local, fps, 30, SMOOTH)?;
    let slogan = fade_window(local, 60.0, 80.0)?;
    let links = fade_window(local, 100.0, 120.0)?;

    let mut desc = canvas_for("cta");
    desc.push(
        Element::panel("glow", Vec2::new(600.0, 600.0), 300.0, COLORS.primary)
            .opacity(glow_intensity(local)?),
    )
    .push(Element::panel("logo", Vec2::new(100.0, 100.0), 20.0, COLORS.primary).scale(logo))
    .push(Element::glyph("logo_mark", "S", COLORS.text_primary).scale(logo))
    .push(
        Element::text(
            "quote",
            "\"预测未来的最好方式是创造它。\"",
            TextRole::Subtitle,
            COLORS.text_secondary,
        )
        .opacity(quote),
    )
    .push(
        Element::text("quote_author", "— Alan Kay", TextRole::Caption, COLORS.text_muted)
            .opacity(quote),
    )
    .push(
        Element::text(
            "slogan",
            "Splash 正在创造 UI 开发的未来",
            TextRole::Heading,
            COLORS.accent,
        )
        .opacity(slogan),
    );

    for (i, link) in LINKS.iter().enumerate() {
        desc.push(
            Element::text(format!("link_{i}"), *link, TextRole::Mono, COLORS.text_muted)
                .opacity(links),
        );
    }
    Ok(desc)
}

#[cfg(test)]
#[path = "../../../tests/unit/pitch/scenes/cta.rs"]
mod tests;
