use web_sys::CanvasRenderingContext2d;

use crate::assets::TrackedImage;
use crate::constants::{MAP_HEIGHT, MAP_WIDTH, OBSTACLES, SHOW_DEBUG_INFO};

/// The alpha-keyed mask is drawn after players and bullets so static props
/// occlude anything standing behind them.
pub fn render_obstacles(ctx: &CanvasRenderingContext2d, mask: &TrackedImage) {
    if mask.is_loaded() {
        let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
            mask.element(),
            0.0,
            0.0,
            MAP_WIDTH,
            MAP_HEIGHT,
        );
    }

    if SHOW_DEBUG_INFO {
        for [cx, cy, radius] in OBSTACLES {
            ctx.begin_path();
            let _ = ctx.arc(cx, cy, radius, 0.0, std::f64::consts::TAU);
            ctx.set_line_width(0.05);
            ctx.set_fill_style_str("lightblue");
            ctx.fill();
            ctx.stroke();
        }
    }
}
