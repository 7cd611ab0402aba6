use crate::{
    foundation::core::{Fps, FrameIndex, Rgba8Premul, Vec2},
    foundation::error::PitchResult,
    pitch::palette::COLORS,
    pitch::scenes::{BOUNCY, SMOOTH, canvas_for, entrance, fade_window},
    visual::model::{Element, TextRole, VisualDescription},
};

/// Frames an arrow takes to fade in.
const ARROW_FADE: f64 = 10.0;

/// `(id, label, delay, color)` of the interpreter stages.
const STAGES: [(&str, &str, u64, usize); 3] = [
    ("nlp", "NLP 解析器", 60, 0),
    ("intent", "意图映射", 80, 2),
    ("codegen", "组件生成器", 100, 4),
];

/// `(id, symbol, delay)`.
const ARROWS: [(&str, &str, u64); 4] = [
    ("arrow_input", "↓", 30),
    ("arrow_nlp", "→", 75),
    ("arrow_intent", "→", 95),
    ("arrow_runtime", "↓", 115),
];

const ROADMAP: [(&str, &str, &str); 3] = [
    ("第一阶段", "命令式生成", "当前"),
    ("第二阶段", "上下文感知", "2025 Q2"),
    ("第三阶段", "完全 AI 自主", "2025 Q4"),
];

fn stage_box(
    desc: &mut VisualDescription,
    id: &str,
    label: &str,
    scale: f64,
    color: Rgba8Premul,
) {
    desc.push(
        Element::panel(id, Vec2::new(220.0, 80.0), 12.0, color.fade(0x20))
            .stroke(color)
            .scale(scale),
    )
    .push(
        Element::text(format!("{id}_label"), label, TextRole::Body, COLORS.text_primary)
            .scale(scale),
    );
}

/// The request flows top to bottom: user input, the interpreter's three stages, the runtime.
pub fn architecture_scene(local: FrameIndex, fps: Fps) -> PitchResult<VisualDescription> {
    let title = entrance(local, fps, 0, SMOOTH)?;
    let interpreter = fade_window(local, 40.0, 60.0)?;
    let runtime = fade_window(local, 125.0, 145.0)?;
    let roadmap = fade_window(local, 150.0, 170.0)?;

    let mut desc = canvas_for("architecture");
    desc.push(
        Element::text("title", "AI 集成架构", TextRole::Heading, COLORS.text_primary)
            .opacity(title),
    );

    let input = entrance(local, fps, 10, BOUNCY)?;
    stage_box(&mut desc, "input", "用户自然语言", input, COLORS.chart[1]);
    desc.push(
        Element::text(
            "input_example",
            "\"创建一个带有开关的设置页面\"",
            TextRole::Caption,
            COLORS.text_secondary,
        )
        .scale(input),
    );

    desc.push(
        Element::panel("interpreter", Vec2::new(900.0, 200.0), 16.0, COLORS.bg_card)
            .stroke(COLORS.primary)
            .opacity(interpreter),
    )
    .push(
        Element::text("interpreter_label", "Splash 解释器", TextRole::Subtitle, COLORS.primary)
            .opacity(interpreter),
    );
    // Stage boxes sit inside the interpreter layer and inherit its fade.
    for (id, label, delay, chart) in STAGES {
        let scale = entrance(local, fps, delay, BOUNCY)?;
        let before = desc.elements.len();
        stage_box(&mut desc, id, label, scale, COLORS.chart[chart]);
        for el in &mut desc.elements[before..] {
            el.opacity *= interpreter;
        }
    }

    for (id, symbol, delay) in ARROWS {
        let opacity = fade_window(local, delay as f64, delay as f64 + ARROW_FADE)?;
        let parent = if id == "arrow_nlp" || id == "arrow_intent" {
            interpreter
        } else {
            1.0
        };
        desc.push(Element::glyph(id, symbol, COLORS.primary).opacity(opacity * parent));
    }

    desc.push(
        Element::panel("runtime", Vec2::new(900.0, 120.0), 16.0, COLORS.accent.fade(0x30))
            .stroke(COLORS.accent)
            .opacity(runtime),
    )
    .push(
        Element::text("runtime_label", "Makepad 运行时", TextRole::Subtitle, COLORS.accent)
            .opacity(runtime),
    )
    .push(
        Element::text(
            "runtime_detail",
            "GPU 加速的原生组件渲染",
            TextRole::Caption,
            COLORS.text_secondary,
        )
        .opacity(runtime),
    );

    for (i, (phase, name, status)) in ROADMAP.iter().enumerate() {
        let current = i == 0;
        let (fill, border, phase_color) = if current {
            (COLORS.accent.fade(0x20), COLORS.accent, COLORS.accent)
        } else {
            (COLORS.bg_card, COLORS.bg_card, COLORS.text_muted)
        };
        desc.push(
            Element::panel(format!("phase_{i}"), Vec2::new(280.0, 110.0), 12.0, fill)
                .stroke(border)
                .opacity(roadmap),
        )
        .push(
            Element::text(format!("phase_{i}_label"), *phase, TextRole::Caption, phase_color)
                .opacity(roadmap),
        )
        .push(
            Element::text(format!("phase_{i}_title"), *name, TextRole::Body, COLORS.text_primary)
                .opacity(roadmap),
        )
        .push(
            Element::text(
                format!("phase_{i}_status"),
                *status,
                TextRole::Caption,
                COLORS.text_secondary,
            )
            .opacity(roadmap),
        );
    }
    Ok(desc)
}

#[cfg(test)]
#[path = "../../../tests/unit/pitch/scenes/architecture.rs"]
mod tests;
