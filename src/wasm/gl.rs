use glam::{Mat4, Vec2, Vec4};
use web_sys::{
    WebGl2RenderingContext as GL, WebGlProgram, WebGlShader, WebGlUniformLocation,
    WebGlVertexArrayObject,
};

use crate::error::{Error, Result};
use crate::geometry::flatten;

const VERTEX_SHADER: &str = r#"#version 300 es
in vec2 pos;
uniform mat4 model;

void main() {
    gl_Position = model * vec4(pos, 0.0, 1.0);
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;
uniform vec4 color;
out vec4 fragColor;

void main() {
    fragColor = color;
}
"#;

/// Linked flat-color program with its uniform locations.
pub struct FlatProgram {
    program: WebGlProgram,
    model: WebGlUniformLocation,
    color: WebGlUniformLocation,
    pos: u32,
}

impl FlatProgram {
    pub fn new(gl: &GL) -> Result<Self> {
        let vs = compile_shader(gl, GL::VERTEX_SHADER, VERTEX_SHADER)?;
        let fs = compile_shader(gl, GL::FRAGMENT_SHADER, FRAGMENT_SHADER)?;
        let program = link_program(gl, &vs, &fs)?;
        // Shaders are no longer needed once linked.
        gl.delete_shader(Some(&vs));
        gl.delete_shader(Some(&fs));

        let pos = gl.get_attrib_location(&program, "pos");
        if pos < 0 {
            return Err(Error::MissingAttribute("pos"));
        }
        let model = gl
            .get_uniform_location(&program, "model")
            .ok_or(Error::MissingUniform("model"))?;
        let color = gl
            .get_uniform_location(&program, "color")
            .ok_or(Error::MissingUniform("color"))?;

        Ok(Self { program, model, color, pos: pos as u32 })
    }

    pub fn bind(&self, gl: &GL) {
        gl.use_program(Some(&self.program));
    }

    pub fn set_model(&self, gl: &GL, model: &Mat4) {
        gl.uniform_matrix4fv_with_f32_array(Some(&self.model), false, &model.to_cols_array());
    }

    pub fn set_color(&self, gl: &GL, color: Vec4) {
        gl.uniform4fv_with_f32_array(Some(&self.color), &color.to_array());
    }
}

/// A vertex array holding one static position buffer, drawn as a fan.
pub struct FanMesh {
    vao: WebGlVertexArrayObject,
    count: i32,
}

impl FanMesh {
    pub fn upload(gl: &GL, program: &FlatProgram, vertices: &[Vec2]) -> Result<Self> {
        let vao = gl.create_vertex_array().ok_or(Error::Allocation("vertex array"))?;
        gl.bind_vertex_array(Some(&vao));
        gl.enable_vertex_attrib_array(program.pos);

        let vbo = gl.create_buffer().ok_or(Error::Allocation("buffer"))?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&vbo));
        let data = js_sys::Float32Array::from(flatten(vertices).as_slice());
        gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &data, GL::STATIC_DRAW);
        gl.vertex_attrib_pointer_with_i32(program.pos, 2, GL::FLOAT, false, 2 * 4, 0);
        gl.bind_vertex_array(None);

        Ok(Self { vao, count: vertices.len() as i32 })
    }

    pub fn draw(&self, gl: &GL) {
        gl.bind_vertex_array(Some(&self.vao));
        gl.draw_arrays(GL::TRIANGLE_FAN, 0, self.count);
    }
}

fn compile_shader(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader> {
    let shader = gl.create_shader(kind).ok_or(Error::Allocation("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(Error::ShaderCompile(log))
    }
}

fn link_program(gl: &GL, vs: &WebGlShader, fs: &WebGlShader) -> Result<WebGlProgram> {
    let program = gl.create_program().ok_or(Error::Allocation("program"))?;
    gl.attach_shader(&program, vs);
    gl.attach_shader(&program, fs);
    gl.link_program(&program);

    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(Error::ProgramLink(log))
    }
}
