use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, HtmlCanvasElement, KeyboardEvent, WebGl2RenderingContext as GL, Window};

use super::gl::{FanMesh, FlatProgram};
use crate::animation::AnimationController;
use crate::config::StarConfig;
use crate::error::Error;
use crate::geometry::{circle_outline, star_outline};
use crate::input::Command;
use crate::scene::{draw_calls, fit_square, Mesh};

struct Scene {
    gl: GL,
    program: FlatProgram,
    star: FanMesh,
    hole: FanMesh,
    config: StarConfig,
}

impl Scene {
    fn new(gl: GL, config: StarConfig) -> Result<Self, Error> {
        let program = FlatProgram::new(&gl)?;
        let star = FanMesh::upload(&gl, &program, &star_outline())?;
        let hole = FanMesh::upload(&gl, &program, &circle_outline(config.circle_resolution)?)?;

        let bg = config.background;
        gl.clear_color(bg.x, bg.y, bg.z, bg.w);
        program.bind(&gl);

        Ok(Self { gl, program, star, hole, config })
    }

    fn draw(&self, controller: &mut AnimationController) {
        let pose = controller.advance();
        self.gl.clear(GL::COLOR_BUFFER_BIT);

        for call in draw_calls(pose, &self.config) {
            self.program.set_model(&self.gl, &call.model);
            self.program.set_color(&self.gl, call.color);
            match call.mesh {
                Mesh::Star => self.star.draw(&self.gl),
                Mesh::Hole => self.hole.draw(&self.gl),
            }
        }
    }
}

fn resize(window: &Window, canvas: &HtmlCanvasElement, gl: &GL) {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let side = fit_square(dim(window.inner_width()), dim(window.inner_height()));
    canvas.set_width(side);
    canvas.set_height(side);
    gl.viewport(0, 0, side as i32, side as i32);
}

/// Build the GL resources, hook up keyboard and resize handling, and run the
/// frame loop until the page goes away.
pub fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let window = window().ok_or(Error::MissingDom("window"))?;
    let gl: GL = match canvas.get_context("webgl2")? {
        Some(ctx) => ctx.dyn_into()?,
        None => {
            let err = Error::ContextUnavailable;
            window.alert_with_message(&err.to_string())?;
            return Err(err.into());
        }
    };

    let config = StarConfig::default();
    let scene = Scene::new(gl.clone(), config)?;
    console_log!(
        "star ready: {} hole vertices, press 1/a reset, 2/b swing, 3/c shade",
        config.circle_resolution - 2
    );

    resize(&window, &canvas, &gl);
    let resize_closure = {
        let window = window.clone();
        Closure::wrap(Box::new(move || resize(&window, &canvas, &gl)) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    // Shared by the key handler and the frame loop; both run on the one JS thread.
    let controller = Rc::new(RefCell::new(AnimationController::new(config)));

    let keydown_closure = {
        let controller = controller.clone();
        Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if let Some(command) = Command::from_event(&event) {
                controller.borrow_mut().apply(command);
                console_log!("{:?}", command);
            }
        }) as Box<dyn FnMut(KeyboardEvent)>)
    };
    window.add_event_listener_with_callback("keydown", keydown_closure.as_ref().unchecked_ref())?;
    keydown_closure.forget();

    // The frame callback re-arms itself through `f`, which is filled in after
    // the closure exists.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let loop_window = window.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        scene.draw(&mut controller.borrow_mut());

        // schedule next
        let scheduled = match f.borrow().as_ref() {
            Some(cb) => loop_window.request_animation_frame(cb.as_ref().unchecked_ref()),
            None => return,
        };
        if let Err(err) = scheduled {
            console_error!("frame loop stopped: {:?}", err);
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = g.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }

    Ok(())
}
