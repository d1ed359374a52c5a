use gl::{types::*, *};
use std::ffi::CStr;

/// Polls `glGetError` once and logs anything pending.
pub fn check_gl_err() {
    let err = unsafe { gl::GetError() };
    if err == gl::NO_ERROR {
        return;
    }
    log::error!("OpenGL error: {} (0x{:04x})", gl_error_name(err), err);
}

pub fn gl_error_name(err: GLenum) -> &'static str {
    match err {
        NO_ERROR => "NO_ERROR",
        INVALID_ENUM => "INVALID_ENUM",
        INVALID_VALUE => "INVALID_VALUE",
        INVALID_OPERATION => "INVALID_OPERATION",
        INVALID_FRAMEBUFFER_OPERATION => "INVALID_FRAMEBUFFER_OPERATION",
        OUT_OF_MEMORY => "OUT_OF_MEMORY",
        _ => "UNKNOWN_ERROR",
    }
}

fn gl_string(name: GLenum) -> String {
    let ptr = unsafe { gl::GetString(name) };
    if ptr.is_null() {
        return "<unavailable>".to_string();
    }
    unsafe { CStr::from_ptr(ptr.cast()) }
        .to_string_lossy()
        .into_owned()
}

pub fn print_opengl_info() {
    log::info!("GL_VENDOR = {}", gl_string(VENDOR));
    log::info!("GL_RENDERER = {}", gl_string(RENDERER));
    log::info!("GL_VERSION = {}", gl_string(VERSION));
    log::info!(
        "GL_SHADING_LANGUAGE_VERSION = {}",
        gl_string(SHADING_LANGUAGE_VERSION)
    );
}

pub fn gl_buffer_data_arr_stat<T: Sized>(buffer: &[T]) {
    unsafe {
        gl::BufferData(
            ARRAY_BUFFER,
            std::mem::size_of_val(buffer) as GLsizeiptr,
            buffer.as_ptr().cast(),
            STATIC_DRAW,
        )
    };
}

pub fn gl_buffer_data_element_stat<T: Sized>(buffer: &[T]) {
    unsafe {
        gl::BufferData(
            ELEMENT_ARRAY_BUFFER,
            std::mem::size_of_val(buffer) as GLsizeiptr,
            buffer.as_ptr().cast(),
            STATIC_DRAW,
        )
    };
}

/// Describes float attribute `index` as `size` components, not normalized,
/// and enables it. `stride` and `offset` are in bytes.
pub fn gl_vertex_attrib_ptr_enab(index: u32, size: u32, stride: usize, offset: usize) {
    unsafe {
        gl::VertexAttribPointer(
            index,
            size as GLint,
            FLOAT,
            FALSE,
            stride as GLsizei,
            offset as *const _,
        )
    };
    unsafe { gl::EnableVertexAttribArray(index) };
}

pub fn gl_wireframe(enabled: bool) {
    let mode = if enabled { LINE } else { FILL };
    unsafe { gl::PolygonMode(FRONT_AND_BACK, mode) };
}
