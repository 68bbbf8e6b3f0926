use std::f64::consts::PI;

use shared::limits::POINTER_OFFSET_DEG;
use shared::palette::color_for_index;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const CANVAS_SIZE: f64 = 450.0;
const MAX_DRAWN_LABEL_CHARS: usize = 16;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub labels: Vec<String>,
    /// Current visual rotation in degrees, already eased by the spin engine.
    pub rotation: f64,
    pub is_spinning: bool,
}

fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

fn label_font(count: usize) -> &'static str {
    if count <= 6 {
        "bold 20px 'Segoe UI', Roboto, system-ui, sans-serif"
    } else if count <= 12 {
        "bold 16px 'Segoe UI', Roboto, system-ui, sans-serif"
    } else {
        "bold 12px 'Segoe UI', Roboto, system-ui, sans-serif"
    }
}

fn display_label(label: &str) -> String {
    if label.chars().count() > MAX_DRAWN_LABEL_CHARS {
        let head: String = label.chars().take(MAX_DRAWN_LABEL_CHARS - 1).collect();
        format!("{}\u{2026}", head)
    } else {
        label.to_string()
    }
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let labels = props.labels.clone();
        let rotation = props.rotation;
        let is_spinning = props.is_spinning;

        use_effect_with((labels, rotation, is_spinning), move |(labels, rotation, is_spinning)| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let context = canvas
                    .get_context("2d")
                    .unwrap()
                    .unwrap()
                    .dyn_into::<CanvasRenderingContext2d>()
                    .unwrap();

                let width = canvas.width() as f64;
                let height = canvas.height() as f64;
                let center_x = width / 2.0;
                let center_y = height / 2.0;
                let radius = width.min(height) / 2.0 - 30.0;

                context.clear_rect(0.0, 0.0, width, height);

                if labels.is_empty() {
                    draw_empty_wheel(&context, center_x, center_y, radius);
                    return;
                }

                // Wheel backing disc
                context.begin_path();
                context.set_fill_style_str("#f0f2ff");
                let _ = context.arc(center_x, center_y, radius, 0.0, 2.0 * PI);
                context.fill();

                context.save();
                let _ = context.translate(center_x, center_y);
                let _ = context.rotate(deg_to_rad(*rotation));
                let _ = context.translate(-center_x, -center_y);

                let count = labels.len();
                let sector_deg = 360.0 / count as f64;

                // Sector i is laid out so that, after rotating the wheel by
                // the engine's final rotation, the sector under the east
                // pointer is exactly the one resolve_winner() picks. The
                // POINTER_OFFSET_DEG term here and in the winner math must
                // stay in lockstep with the pointer drawn below.
                for (i, label) in labels.iter().enumerate() {
                    let from = deg_to_rad(POINTER_OFFSET_DEG - (i as f64 + 1.0) * sector_deg);
                    let to = deg_to_rad(POINTER_OFFSET_DEG - i as f64 * sector_deg);

                    context.begin_path();
                    context.set_fill_style_str(color_for_index(i));
                    context.move_to(center_x, center_y);
                    let _ = context.arc(center_x, center_y, radius, from, to);
                    context.close_path();
                    context.fill();

                    // Divider between sectors
                    context.begin_path();
                    context.set_stroke_style_str("rgba(255, 255, 255, 0.85)");
                    context.set_line_width(2.0);
                    context.move_to(center_x, center_y);
                    context.line_to(
                        center_x + radius * to.cos(),
                        center_y + radius * to.sin(),
                    );
                    context.stroke();

                    // Label along the sector's mid angle
                    let mid = deg_to_rad(POINTER_OFFSET_DEG - (i as f64 + 0.5) * sector_deg);
                    context.save();
                    let _ = context.translate(center_x, center_y);
                    let _ = context.rotate(mid);
                    let _ = context.translate(radius * 0.6, 0.0);
                    context.set_font(label_font(count));
                    context.set_text_align("center");
                    context.set_text_baseline("middle");
                    context.set_fill_style_str("#ffffff");
                    context.set_shadow_color("rgba(0, 0, 0, 0.5)");
                    context.set_shadow_blur(3.0);
                    let _ = context.fill_text(&display_label(label), 0.0, 0.0);
                    context.restore();
                }

                context.restore();

                // Hub
                let inner_radius = radius * 0.12;
                context.begin_path();
                context.set_fill_style_str("#ffffff");
                let _ = context.arc(center_x, center_y, inner_radius, 0.0, 2.0 * PI);
                context.fill();
                context.begin_path();
                context.set_stroke_style_str("rgba(0, 0, 0, 0.15)");
                context.set_line_width(2.0);
                let _ = context.arc(center_x, center_y, inner_radius, 0.0, 2.0 * PI);
                context.stroke();

                // Outer ring
                context.begin_path();
                context.set_stroke_style_str(if *is_spinning {
                    "rgba(130, 100, 255, 0.7)"
                } else {
                    "rgba(130, 100, 255, 0.4)"
                });
                context.set_line_width(4.0);
                let _ = context.arc(center_x, center_y, radius - 1.0, 0.0, 2.0 * PI);
                context.stroke();

                // Fixed pointer at 3 o'clock, pointing into the wheel. Its
                // position is what POINTER_OFFSET_DEG encodes.
                context.begin_path();
                context.set_fill_style_str(if *is_spinning { "#ffd700" } else { "#f59e0b" });
                context.move_to(center_x + radius - 10.0, center_y);
                context.line_to(center_x + radius + 18.0, center_y - 12.0);
                context.line_to(center_x + radius + 18.0, center_y + 12.0);
                context.close_path();
                context.fill();
                context.set_stroke_style_str("#e69500");
                context.set_line_width(1.5);
                context.stroke();
            }
        });
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width={CANVAS_SIZE.to_string()}
                height={CANVAS_SIZE.to_string()}
                role="img"
                aria-label="Spinning selection wheel"
                class="w-full max-w-[450px] h-auto transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(130, 100, 255, 0.4));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}

fn draw_empty_wheel(context: &CanvasRenderingContext2d, center_x: f64, center_y: f64, radius: f64) {
    context.begin_path();
    context.set_fill_style_str("#e5e7eb");
    let _ = context.arc(center_x, center_y, radius, 0.0, 2.0 * PI);
    context.fill();
    context.set_font("bold 18px 'Segoe UI', Roboto, system-ui, sans-serif");
    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.set_fill_style_str("#6b7280");
    let _ = context.fill_text("Add names to spin", center_x, center_y);
}
