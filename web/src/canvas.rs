use pocket_arcade_core::{Color, Surface};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::NodeRef;

/// [`Surface`] backed by a `<canvas>` 2D context.
pub(crate) struct CanvasSurface {
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub(crate) fn from_node(node: &NodeRef) -> Option<Self> {
        let canvas = node.cast::<HtmlCanvasElement>()?;
        let context = match canvas.get_context("2d") {
            Ok(Some(context)) => context,
            Ok(None) => {
                log::error!("canvas has no 2d context");
                return None;
            }
            Err(err) => {
                log::error!("failed to get 2d context: {:?}", err);
                return None;
            }
        };
        let context = context.dyn_into::<CanvasRenderingContext2d>().ok()?;
        Some(Self { context })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.context
            .clear_rect(0.0, 0.0, width.into(), height.into());
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.context.set_fill_style_str(color);
        self.context
            .fill_rect(x.into(), y.into(), width.into(), height.into());
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_px: u16, color: Color) {
        self.context.set_fill_style_str(color);
        self.context.set_font(&format!("{}px Arial", font_px));
        if let Err(err) = self.context.fill_text(text, x.into(), y.into()) {
            log::error!("failed to draw text {:?}: {:?}", text, err);
        }
    }
}
