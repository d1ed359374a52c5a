use super::glutils::*;
use super::math::*;
use gl::types::*;
use gl::*;
use std::ffi::CString;
use std::fmt;
use std::fs;
use std::io;

const INFO_LOG_CAPACITY: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_kind(self) -> GLenum {
        match self {
            ShaderStage::Vertex => VERTEX_SHADER,
            ShaderStage::Fragment => FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

#[derive(Debug)]
pub enum ShaderError {
    Read { path: String, source: io::Error },
    CreateShader(ShaderStage),
    Compile { stage: ShaderStage, log: String },
    Link { log: String },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Read { path, source } => write!(f, "error reading {}: {}", path, source),
            ShaderError::CreateShader(stage) => {
                write!(f, "gl::CreateShader({} shader) failed", stage)
            }
            ShaderError::Compile { stage, log } => {
                write!(f, "{} shader compilation error: {}", stage, log.trim_end())
            }
            ShaderError::Link { log } => write!(f, "program link error: {}", log.trim_end()),
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShaderError::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A value that can be assigned to a uniform of the currently used program.
pub trait UniformValue {
    fn apply(&self, location: GLint);
}

impl UniformValue for f32 {
    fn apply(&self, location: GLint) {
        unsafe { gl::Uniform1f(location, *self) };
    }
}

impl UniformValue for i32 {
    fn apply(&self, location: GLint) {
        unsafe { gl::Uniform1i(location, *self) };
    }
}

impl UniformValue for bool {
    fn apply(&self, location: GLint) {
        unsafe { gl::Uniform1i(location, i32::from(*self)) };
    }
}

impl UniformValue for Vec3 {
    fn apply(&self, location: GLint) {
        unsafe { gl::Uniform3f(location, self.x, self.y, self.z) };
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ShaderProgram {
    program_id: u32,
}

impl ShaderProgram {
    pub fn from_files(vertex_file: &str, fragment_file: &str) -> Result<ShaderProgram, ShaderError> {
        let vertex_code = read_source(vertex_file)?;
        let fragment_code = read_source(fragment_file)?;

        log::debug!("compiling program from {} + {}", vertex_file, fragment_file);
        ShaderProgram::from_str(&vertex_code, &fragment_code)
    }

    pub fn from_str(vertex_code: &str, fragment_code: &str) -> Result<ShaderProgram, ShaderError> {
        let vertex_shader = Self::compile(ShaderStage::Vertex, vertex_code)?;
        let fragment_shader = match Self::compile(ShaderStage::Fragment, fragment_code) {
            Ok(s) => s,
            Err(e) => {
                unsafe { gl::DeleteShader(vertex_shader) };
                return Err(e);
            }
        };

        let shader_program = unsafe { gl::CreateProgram() };
        unsafe { gl::AttachShader(shader_program, vertex_shader) };
        unsafe { gl::AttachShader(shader_program, fragment_shader) };
        unsafe { gl::LinkProgram(shader_program) };

        // not needed anymore, the program keeps them alive while attached
        unsafe { gl::DeleteShader(vertex_shader) };
        unsafe { gl::DeleteShader(fragment_shader) };

        let mut success = 0;
        unsafe { gl::GetProgramiv(shader_program, LINK_STATUS, &mut success) };
        if success == 0 {
            let mut buf = vec![0u8; INFO_LOG_CAPACITY];
            let mut log_len: GLsizei = 0;
            unsafe {
                gl::GetProgramInfoLog(
                    shader_program,
                    INFO_LOG_CAPACITY as GLsizei,
                    &mut log_len,
                    buf.as_mut_ptr().cast(),
                )
            };
            unsafe { gl::DeleteProgram(shader_program) };
            return Err(ShaderError::Link {
                log: info_log_to_string(buf, log_len),
            });
        }

        log::debug!("program {} linked", shader_program);
        Ok(ShaderProgram {
            program_id: shader_program,
        })
    }

    fn compile(stage: ShaderStage, shader_code: &str) -> Result<u32, ShaderError> {
        let shader_id = unsafe { gl::CreateShader(stage.gl_kind()) };
        if shader_id == 0 {
            return Err(ShaderError::CreateShader(stage));
        }

        unsafe {
            gl::ShaderSource(
                shader_id,
                1,
                &(shader_code.as_ptr().cast()),
                &(shader_code.len() as GLint),
            );
        }
        unsafe { gl::CompileShader(shader_id) };

        let mut success = 0;
        unsafe { gl::GetShaderiv(shader_id, COMPILE_STATUS, &mut success) };
        if success == 0 {
            let mut buf = vec![0u8; INFO_LOG_CAPACITY];
            let mut log_len: GLsizei = 0;
            unsafe {
                gl::GetShaderInfoLog(
                    shader_id,
                    INFO_LOG_CAPACITY as GLsizei,
                    &mut log_len,
                    buf.as_mut_ptr().cast(),
                )
            };
            unsafe { gl::DeleteShader(shader_id) };
            return Err(ShaderError::Compile {
                stage,
                log: info_log_to_string(buf, log_len),
            });
        }
        Ok(shader_id)
    }

    pub fn id(&self) -> u32 {
        self.program_id
    }

    pub fn use_program(&self) {
        unsafe { gl::UseProgram(self.program_id) };
        check_gl_err();
    }

    /// Returns `None` if `name` is not an active uniform of this program.
    pub fn uniform_location(&self, name: &str) -> Option<GLint> {
        let c_name = match CString::new(name) {
            Ok(c) => c,
            Err(_) => {
                log::warn!("uniform name '{}' contains a NUL byte", name);
                return None;
            }
        };
        let location = unsafe { gl::GetUniformLocation(self.program_id, c_name.as_ptr()) };
        if location == -1 {
            return None;
        }
        Some(location)
    }

    /// Assigns `value` to the uniform `name`. The program must be in use.
    /// Unknown names are logged and skipped.
    pub fn set_uniform<T: UniformValue>(&self, name: &str, value: T) {
        match self.uniform_location(name) {
            Some(location) => value.apply(location),
            None => log::warn!(
                "program({}): '{}' is not an active uniform",
                self.program_id,
                name
            ),
        }
    }
}

fn read_source(path: &str) -> Result<String, ShaderError> {
    fs::read_to_string(path).map_err(|source| ShaderError::Read {
        path: path.to_string(),
        source,
    })
}

fn info_log_to_string(mut buf: Vec<u8>, log_len: GLsizei) -> String {
    let len = usize::try_from(log_len).unwrap_or(0).min(buf.len());
    buf.truncate(len);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn missing_vertex_file_is_read_error() {
        let err = ShaderProgram::from_files(
            "does/not/exist.vert",
            "shaders/uniform_color.frag",
        )
        .unwrap_err();
        match &err {
            ShaderError::Read { path, .. } => assert_eq!(path, "does/not/exist.vert"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().starts_with("error reading does/not/exist.vert: "));
        assert!(err.source().is_some());
    }

    #[test]
    fn compile_error_carries_driver_log() {
        let err = ShaderError::Compile {
            stage: ShaderStage::Fragment,
            log: "0:3(1): error: syntax error, unexpected '}'\n".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "fragment shader compilation error: 0:3(1): error: syntax error, unexpected '}'"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn link_error_carries_driver_log() {
        let err = ShaderError::Link {
            log: "error: vertex shader lacks `main'".to_string(),
        };
        assert!(err.to_string().contains("vertex shader lacks `main'"));
    }

    #[test]
    fn create_shader_error_names_stage() {
        let err = ShaderError::CreateShader(ShaderStage::Vertex);
        assert_eq!(err.to_string(), "gl::CreateShader(vertex shader) failed");
    }

    #[test]
    fn info_log_is_truncated_to_reported_length() {
        let mut buf = vec![0u8; INFO_LOG_CAPACITY];
        buf[..5].copy_from_slice(b"oops!");
        assert_eq!(info_log_to_string(buf.clone(), 4), "oops");
        assert_eq!(info_log_to_string(buf.clone(), -1), "");
        assert_eq!(info_log_to_string(buf, 5000).len(), INFO_LOG_CAPACITY);
    }
}
