use crate::{
    animation::interpolate::{InterpolateOpts, interpolate},
    foundation::core::{Fps, FrameIndex, Vec2},
    foundation::error::PitchResult,
    pitch::palette::COLORS,
    pitch::scenes::{SMOOTH, canvas_for, cursor_visible, entrance, fade_window, remap},
    visual::model::{Element, TextRole, VisualDescription},
};

const PAINS: [&str; 3] = [
    "学习复杂的编程语言",
    "理解特定框架 API",
    "编写数百行样板代码",
];

const PROMPTS: [(&str, u64); 3] = [
    ("\"创建一个登录表单\"", 110),
    ("\"添加三个指标卡片\"", 130),
    ("\"构建聊天界面\"", 150),
];

/// "Traditional" pain points on the left, typed natural-language prompts on the right.
pub fn vision_scene(local: FrameIndex, fps: Fps) -> PitchResult<VisualDescription> {
    let title = entrance(local, fps, 0, SMOOTH)?;
    let problem = fade_window(local, 20.0, 40.0)?;
    let arrow = fade_window(local, 80.0, 100.0)?;
    let solution = fade_window(local, 100.0, 120.0)?;
    let footer = fade_window(local, 160.0, 180.0)?;

    let mut desc = canvas_for("vision");
    desc.push(
        Element::text("title", "从代码到对话", TextRole::Heading, COLORS.text_primary)
            .opacity(title),
    )
    .push(
        Element::text("problem_heading", "传统开发", TextRole::Subtitle, COLORS.chart[3])
            .opacity(problem),
    )
    .push(
        Element::panel("problem_card", Vec2::new(760.0, 220.0), 16.0, COLORS.bg_card)
            .stroke(COLORS.chart[3].fade(0x30))
            .opacity(problem),
    );
    for (i, pain) in PAINS.iter().enumerate() {
        desc.push(
            Element::glyph(format!("problem_mark_{i}"), "✗", COLORS.chart[3]).opacity(problem),
        )
        .push(
            Element::text(format!("problem_{i}"), *pain, TextRole::Body, COLORS.text_secondary)
                .opacity(problem),
        );
    }

    desc.push(
        Element::glyph("arrow", "→", COLORS.primary)
            .opacity(arrow)
            .translate(remap(arrow, -20.0, 0.0)?, 0.0),
    )
    .push(
        Element::text("solution_heading", "Splash 开发", TextRole::Subtitle, COLORS.accent)
            .opacity(solution),
    )
    .push(
        Element::panel("solution_card", Vec2::new(760.0, 260.0), 16.0, COLORS.bg_card)
            .stroke(COLORS.accent.fade(0x30))
            .opacity(solution),
    );

    for (i, (prompt, delay)) in PROMPTS.iter().enumerate() {
        let progress = entrance(local, fps, *delay, SMOOTH)?;
        let len = prompt.chars().count();
        let shown = remap(progress, 0.0, len as f64)?.floor().clamp(0.0, len as f64) as usize;
        // Reaches full strength after the first tenth of the spring.
        let block = interpolate(progress, &[0.0, 0.1], &[0.0, 1.0], InterpolateOpts::extended())?
            .clamp(0.0, 1.0);
        let cursor = if cursor_visible(local) { 1.0 } else { 0.0 };

        desc.push(
            Element::text(format!("prompt_{i}"), *prompt, TextRole::Mono, COLORS.accent)
                .typed(shown)
                .opacity(solution * block),
        )
        .push(
            Element::glyph(format!("prompt_cursor_{i}"), "|", COLORS.accent)
                .opacity(solution * block * cursor),
        );
    }

    desc.push(
        Element::text(
            "footer",
            "AI 理解意图 → 生成组件 → 即时渲染",
            TextRole::Body,
            COLORS.primary_light,
        )
        .opacity(footer),
    );
    Ok(desc)
}

#[cfg(test)]
#[path = "../../../tests/unit/pitch/scenes/vision.rs"]
mod tests;
